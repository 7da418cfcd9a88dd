//! Product collection query.

use super::{Product, ProductId, ProductType};

/// Product attributes that can be requested for pre-loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductAttribute {
    /// `links_title`.
    LinksTitle,
    /// `samples_title`.
    SamplesTitle,
    /// `links_purchased_separately`.
    LinksPurchasedSeparately,
}

impl ProductAttribute {
    /// Returns the attributes the downloadable export reads.
    #[must_use]
    pub const fn downloadable_group() -> &'static [Self] {
        &[
            Self::LinksTitle,
            Self::SamplesTitle,
            Self::LinksPurchasedSeparately,
        ]
    }

    /// Returns the attribute code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LinksTitle => "links_title",
            Self::SamplesTitle => "samples_title",
            Self::LinksPurchasedSeparately => "links_purchased_separately",
        }
    }
}

/// Filter and selection applied to a product collection.
///
/// Empty filter lists match every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Restrict to these entity ids.
    pub ids: Vec<ProductId>,
    /// Restrict to these product types.
    pub type_ids: Vec<ProductType>,
    /// Attributes to load along with each product.
    pub attributes: Vec<ProductAttribute>,
}

impl ProductQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to the given ids.
    #[must_use]
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = ProductId>) -> Self {
        self.ids.extend(ids);
        self
    }

    /// Adds a product type filter.
    #[must_use]
    pub fn with_type(mut self, type_id: ProductType) -> Self {
        self.type_ids.push(type_id);
        self
    }

    /// Requests attributes to be loaded.
    #[must_use]
    pub fn with_attributes(mut self, attributes: &[ProductAttribute]) -> Self {
        self.attributes.extend_from_slice(attributes);
        self
    }

    /// Returns true if the product passes the id and type filters.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        (self.ids.is_empty() || self.ids.contains(&product.id))
            && (self.type_ids.is_empty() || self.type_ids.contains(&product.type_id))
    }

    /// Returns true if the attribute was requested.
    #[must_use]
    pub fn selects(&self, attribute: ProductAttribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_all() {
        let query = ProductQuery::new();
        assert!(query.matches(&Product::new(1_u64, ProductType::Simple)));
        assert!(query.matches(&Product::downloadable(2_u64)));
    }

    #[test]
    fn test_query_filters_by_id_and_type() {
        let query = ProductQuery::new()
            .with_ids([ProductId::new(1), ProductId::new(2)])
            .with_type(ProductType::Downloadable);

        assert!(query.matches(&Product::downloadable(1_u64)));
        assert!(!query.matches(&Product::downloadable(3_u64)));
        assert!(!query.matches(&Product::new(2_u64, ProductType::Virtual)));
    }

    #[test]
    fn test_query_attribute_selection() {
        let query = ProductQuery::new().with_attributes(ProductAttribute::downloadable_group());
        assert!(query.selects(ProductAttribute::LinksTitle));
        assert!(query.selects(ProductAttribute::LinksPurchasedSeparately));
        assert_eq!(ProductAttribute::SamplesTitle.as_str(), "samples_title");
    }
}
