//! Encoded export rows.

use std::fmt;

/// Field keys that can appear in an encoded component.
///
/// The keys are part of the host's import/export file format and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Block title taken from the product.
    GroupTitle,
    /// Product-level purchase-separately flag (links only).
    PurchasedSeparately,
    /// Component title.
    Title,
    /// Link price.
    Price,
    /// Allowed number of downloads.
    Downloads,
    /// Position within the block.
    SortOrder,
    /// Shareability code.
    Shareable,
    /// Delivered file.
    File,
    /// Delivered URL.
    Url,
    /// Sample file attached to a link.
    SampleFile,
    /// Sample URL attached to a link.
    SampleUrl,
}

impl FieldKey {
    /// Returns all field keys in serialization order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::GroupTitle,
            Self::PurchasedSeparately,
            Self::Title,
            Self::Price,
            Self::Downloads,
            Self::SortOrder,
            Self::Shareable,
            Self::File,
            Self::Url,
            Self::SampleFile,
            Self::SampleUrl,
        ]
    }

    /// Returns the key as written in the export file.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GroupTitle => "group_title",
            Self::PurchasedSeparately => "purchased_separately",
            Self::Title => "title",
            Self::Price => "price",
            Self::Downloads => "downloads",
            Self::SortOrder => "sortorder",
            Self::Shareable => "shareable",
            Self::File => "file",
            Self::Url => "url",
            Self::SampleFile => "sample_file",
            Self::SampleUrl => "sample_url",
        }
    }

    /// Parses a key as written in the export file.
    ///
    /// Keys are case-sensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.as_str() == s)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered `key=value` fields of one encoded link or sample.
///
/// Insertion order is the order fields are written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedRow {
    fields: Vec<(FieldKey, String)>,
}

impl EncodedRow {
    /// Creates an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field.
    pub fn push(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields.push((key, value.into()));
    }

    /// Appends every field of `other`, keeping its order.
    pub fn extend(&mut self, other: Self) {
        self.fields.extend(other.fields);
    }

    /// Returns the value of a field if present.
    #[must_use]
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the field is present.
    #[must_use]
    pub fn contains(&self, key: FieldKey) -> bool {
        self.get(key).is_some()
    }

    /// Returns the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.fields.iter().map(|(k, _)| *k)
    }

    /// Returns the fields in order.
    #[must_use]
    pub fn fields(&self) -> &[(FieldKey, String)] {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Joins the `key=value` pairs with `separator`.
    #[must_use]
    pub fn format(&self, separator: char) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(key.as_str());
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

impl FromIterator<(FieldKey, String)> for EncodedRow {
    fn from_iter<I: IntoIterator<Item = (FieldKey, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
