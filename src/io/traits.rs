//! Host export contract.
//!
//! Defines the [`RowCustomizer`] trait the host export engine calls to let
//! extensions contribute columns to each product row.

use crate::Result;
use crate::catalog::ProductCollection;
use crate::models::ProductId;
use std::collections::HashMap;

/// One product's row as assembled by the host: column name to cell value.
pub type RowData = HashMap<String, String>;

/// Extension point of the host's product export.
///
/// # Lifecycle
///
/// 1. `prepare_data()` once per export batch with every product id in it
/// 2. `add_header_columns()` while the host builds the header
/// 3. `add_data()` and `get_additional_rows_count()` per product row
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl RowCustomizer for StockColumns {
///     fn add_header_columns(&self, mut columns: Vec<String>) -> Vec<String> {
///         columns.push("qty".to_string());
///         columns
///     }
///     // ...
/// }
/// ```
pub trait RowCustomizer {
    /// Collects the data this customizer will contribute for `product_ids`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection or another catalog collaborator
    /// fails.
    fn prepare_data(
        &mut self,
        collection: &dyn ProductCollection,
        product_ids: &[ProductId],
    ) -> Result<()>;

    /// Appends this customizer's columns to the header.
    fn add_header_columns(&self, columns: Vec<String>) -> Vec<String>;

    /// Merges this customizer's cells for `product_id` into `row`.
    fn add_data(&self, row: RowData, product_id: ProductId) -> RowData;

    /// Returns the number of extra rows the product needs, at least
    /// `additional_rows_count`.
    fn get_additional_rows_count(&self, additional_rows_count: usize, product_id: ProductId)
    -> usize;
}
