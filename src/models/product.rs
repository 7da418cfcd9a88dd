//! Product identifiers and catalog product types.

use std::fmt;

/// Catalog entity identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ProductId(u64);

impl ProductId {
    /// Creates a new product ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw entity id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Product type codes the export distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductType {
    /// Physical product without options.
    #[default]
    Simple,
    /// Non-shippable product.
    Virtual,
    /// Product delivered as links and samples.
    Downloadable,
}

impl ProductType {
    /// Returns the type code used by the host catalog.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Virtual => "virtual",
            Self::Downloadable => "downloadable",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog product as seen by the export.
///
/// Only the attributes the downloadable export reads are carried. The three
/// group attributes are `None` when the host did not load them or the product
/// has no value stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    /// Entity id.
    pub id: ProductId,
    /// Product type.
    pub type_id: ProductType,
    /// Title of the links block (`links_title`).
    pub links_title: Option<String>,
    /// Title of the samples block (`samples_title`).
    pub samples_title: Option<String>,
    /// Whether links can be purchased separately (`links_purchased_separately`).
    pub links_purchased_separately: Option<bool>,
}

impl Product {
    /// Creates a product with the given id and type and no group attributes.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, type_id: ProductType) -> Self {
        Self {
            id: id.into(),
            type_id,
            ..Self::default()
        }
    }

    /// Creates a downloadable product.
    #[must_use]
    pub fn downloadable(id: impl Into<ProductId>) -> Self {
        Self::new(id, ProductType::Downloadable)
    }

    /// Sets the links block title.
    #[must_use]
    pub fn with_links_title(mut self, title: impl Into<String>) -> Self {
        self.links_title = Some(title.into());
        self
    }

    /// Sets the samples block title.
    #[must_use]
    pub fn with_samples_title(mut self, title: impl Into<String>) -> Self {
        self.samples_title = Some(title.into());
        self
    }

    /// Sets the purchased-separately flag.
    #[must_use]
    pub const fn with_links_purchased_separately(mut self, value: bool) -> Self {
        self.links_purchased_separately = Some(value);
        self
    }

    /// Returns whether this product is of the downloadable type.
    #[must_use]
    pub fn is_downloadable(&self) -> bool {
        self.type_id == ProductType::Downloadable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_code() {
        assert_eq!(ProductType::Downloadable.to_string(), "downloadable");
        assert_eq!(ProductType::default(), ProductType::Simple);
    }

    #[test]
    fn test_product_builder() {
        let product = Product::downloadable(7_u64)
            .with_links_title("Links")
            .with_links_purchased_separately(true);

        assert_eq!(product.id, ProductId::new(7));
        assert!(product.is_downloadable());
        assert_eq!(product.links_title.as_deref(), Some("Links"));
        assert!(product.samples_title.is_none());
        assert_eq!(product.links_purchased_separately, Some(true));
    }
}
