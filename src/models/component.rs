//! Downloadable components: links and samples.

use std::fmt;

/// Sort order meaning "no explicit position".
pub const DEFAULT_SORT_ORDER: i64 = 0;

/// Number of downloads meaning "unlimited".
pub const DEFAULT_NUMBER_OF_DOWNLOADS: i64 = 0;

/// Shareability code meaning "use the global configuration".
pub const DEFAULT_IS_SHAREABLE: u8 = 2;

/// Host default for `links_purchased_separately`.
///
/// Informational only: the purchased-separately column is always written.
pub const DEFAULT_PURCHASED_SEPARATELY: u8 = 1;

/// Where a downloadable payload is delivered from.
///
/// A payload is either a stored file or a remote URL, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Payload {
    /// File stored by the host, referenced by its relative path.
    File(String),
    /// Remote address.
    Url(String),
}

impl Payload {
    /// Creates a file payload.
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self::File(path.into())
    }

    /// Creates a URL payload.
    #[must_use]
    pub fn url(address: impl Into<String>) -> Self {
        Self::Url(address.into())
    }

    /// Returns the file path or URL.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::File(v) | Self::Url(v) => v,
        }
    }
}

/// Whether a purchased link may be shared between customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shareable {
    /// Not shareable.
    No,
    /// Shareable.
    Yes,
    /// Defer to the store configuration.
    #[default]
    UseConfig,
}

impl Shareable {
    /// Returns the numeric code the host stores (`0`, `1`, `2`).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::No => 0,
            Self::Yes => 1,
            Self::UseConfig => DEFAULT_IS_SHAREABLE,
        }
    }

    /// Parses a stored numeric code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::No),
            1 => Some(Self::Yes),
            DEFAULT_IS_SHAREABLE => Some(Self::UseConfig),
            _ => None,
        }
    }

    /// Returns whether this is the default value.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::UseConfig)
    }
}

impl fmt::Display for Shareable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A purchasable download attached to a downloadable product.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Link title.
    pub title: String,
    /// Position within the links block.
    pub sort_order: i64,
    /// Price when purchased separately.
    pub price: Option<f64>,
    /// Allowed number of downloads; zero or less means unlimited.
    pub number_of_downloads: Option<i64>,
    /// Shareability.
    pub is_shareable: Shareable,
    /// Delivered content.
    pub link: Payload,
    /// Optional free preview of this link.
    pub sample: Option<Payload>,
}

impl Link {
    /// Creates a link with default options.
    #[must_use]
    pub fn new(title: impl Into<String>, link: Payload) -> Self {
        Self {
            title: title.into(),
            sort_order: DEFAULT_SORT_ORDER,
            price: None,
            number_of_downloads: None,
            is_shareable: Shareable::default(),
            link,
            sample: None,
        }
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Sets the price.
    #[must_use]
    pub const fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the number of downloads.
    #[must_use]
    pub const fn with_downloads(mut self, downloads: i64) -> Self {
        self.number_of_downloads = Some(downloads);
        self
    }

    /// Sets the shareability.
    #[must_use]
    pub const fn with_shareable(mut self, shareable: Shareable) -> Self {
        self.is_shareable = shareable;
        self
    }

    /// Attaches a sample payload.
    #[must_use]
    pub fn with_sample(mut self, sample: Payload) -> Self {
        self.sample = Some(sample);
        self
    }
}

/// A free preview attached to a downloadable product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Sample title.
    pub title: String,
    /// Position within the samples block.
    pub sort_order: i64,
    /// Delivered content.
    pub sample: Payload,
}

impl Sample {
    /// Creates a sample with the default sort order.
    #[must_use]
    pub fn new(title: impl Into<String>, sample: Payload) -> Self {
        Self {
            title: title.into(),
            sort_order: DEFAULT_SORT_ORDER,
            sample,
        }
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_value() {
        let file = Payload::file("a.zip");
        let url = Payload::url("https://example.com/a");

        assert_eq!(file.value(), "a.zip");
        assert_eq!(url.value(), "https://example.com/a");
        assert_ne!(Payload::file("a"), Payload::url("a"));
    }

    #[test]
    fn test_shareable_codes() {
        for s in [Shareable::No, Shareable::Yes, Shareable::UseConfig] {
            assert_eq!(Shareable::from_code(s.code()), Some(s));
        }
        assert_eq!(Shareable::from_code(3), None);
        assert!(Shareable::default().is_default());
        assert_eq!(Shareable::Yes.to_string(), "1");
    }

    #[test]
    fn test_link_defaults() {
        let link = Link::new("Manual", Payload::file("manual.pdf"));
        assert_eq!(link.sort_order, DEFAULT_SORT_ORDER);
        assert!(link.price.is_none());
        assert!(link.number_of_downloads.is_none());
        assert_eq!(link.is_shareable, Shareable::UseConfig);
        assert!(link.sample.is_none());
    }
}
