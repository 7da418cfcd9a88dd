//! # Downloadable Export
//!
//! Export row customizer for downloadable products.
//!
//! A host catalog export calls this crate to add two columns to each product
//! row: `downloadable_links` and `downloadable_samples`. Every link or sample
//! is written as `key=value` pairs, and several of them share one cell
//! separated by `|`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use downloadable_export::{DownloadableRowCustomizer, ExportConfig, RowCustomizer};
//!
//! let mut customizer = DownloadableRowCustomizer::new(type_instance, ExportConfig::from_env()?)?;
//! customizer.prepare_data(&collection, &product_ids)?;
//!
//! let header = customizer.add_header_columns(vec!["sku".to_string()]);
//! for id in &product_ids {
//!     let row = customizer.add_data(host_row(*id), *id);
//!     extra_rows = customizer.get_additional_rows_count(extra_rows, *id);
//! }
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod catalog;
pub mod config;
pub mod io;
pub mod models;
pub mod observability;

// Re-exports for convenience
pub use catalog::{DownloadableType, ProductCollection};
pub use config::ExportConfig;
pub use io::{DownloadableRowCustomizer, PrepareSummary, RowCustomizer, RowData};
pub use models::{
    EncodedRow, FieldKey, Link, Payload, Product, ProductId, ProductQuery, ProductType, Sample,
    Shareable,
};

/// Error type for downloadable export operations.
///
/// Encoding itself never fails; errors come from configuration and from
/// catalog collaborators.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Separators collide or are not single characters, invalid log filter |
/// | `OperationFailed` | Catalog queries fail, config file unreadable, logging already initialized |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A configured separator is not exactly one character
    /// - The multi-value and component separators are equal or `=`
    /// - Log filter directives cannot be parsed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - A [`ProductCollection`] or [`DownloadableType`] implementation fails
    /// - The configuration file cannot be read or parsed
    /// - The logging subscriber cannot be installed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for downloadable export operations.
pub type Result<T> = std::result::Result<T, Error>;
