//! Catalog collaborator traits.

use crate::Result;
use crate::models::{Link, Product, ProductQuery, Sample};

/// Queryable view over the host's products.
///
/// # Implementor Notes
///
/// - `select` must not change the collection; each call starts from the full
///   set of products
/// - Products are returned in the collection's natural order
/// - Attributes listed in [`ProductQuery::attributes`] must be populated on the
///   returned products when the catalog stores a value for them
pub trait ProductCollection {
    /// Returns the products matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails.
    fn select(&self, query: &ProductQuery) -> Result<Vec<Product>>;
}

/// Capability interface of the downloadable product type.
///
/// Answers which links and samples belong to a product. Links and samples are
/// returned in the order the export should write them.
pub trait DownloadableType {
    /// Returns true if the product has at least one link.
    ///
    /// # Errors
    ///
    /// Returns an error if link data cannot be loaded.
    fn has_links(&self, product: &Product) -> Result<bool>;

    /// Returns the product's links.
    ///
    /// # Errors
    ///
    /// Returns an error if link data cannot be loaded.
    fn links(&self, product: &Product) -> Result<Vec<Link>>;

    /// Returns true if the product has at least one sample.
    ///
    /// # Errors
    ///
    /// Returns an error if sample data cannot be loaded.
    fn has_samples(&self, product: &Product) -> Result<bool>;

    /// Returns the product's samples.
    ///
    /// # Errors
    ///
    /// Returns an error if sample data cannot be loaded.
    fn samples(&self, product: &Product) -> Result<Vec<Sample>>;
}
