//! Export I/O subsystem.
//!
//! Turns a product's downloadable links and samples into two cells of the
//! host's product export file.
//!
//! # Architecture
//!
//! - **Host contract**: [`RowCustomizer`], called by the host export engine
//! - **Customizer**: [`DownloadableRowCustomizer`] selects downloadable
//!   products, buffers their cells and merges them into host rows
//! - **Encoder**: [`encoder`] turns one link or sample into `key=value` pairs
//!
//! # Cell Format
//!
//! | Level | Separator | Example |
//! |-------|-----------|---------|
//! | Components of a cell | `\|` | `title=A,file=a.zip\|title=B,url=b` |
//! | Fields of a component | multi-value separator (`,`) | `title=A,file=a.zip` |
//! | Key and value | `=` | `file=a.zip` |
//!
//! # Example
//!
//! ```rust,ignore
//! use downloadable_export::io::{DownloadableRowCustomizer, RowCustomizer};
//!
//! let mut customizer = DownloadableRowCustomizer::new(type_instance, ExportConfig::default())?;
//! customizer.prepare_data(&collection, &product_ids)?;
//! let header = customizer.add_header_columns(header);
//! let row = customizer.add_data(row, product_id);
//! ```

pub mod customizer;
pub mod encoder;
pub mod traits;

// Re-exports for convenience
pub use customizer::{
    COLUMNS, DownloadableRowCustomizer, LINKS_COLUMN, PrepareSummary, ProductColumns,
    SAMPLES_COLUMN,
};
pub use encoder::{decode_cell, encode_link, encode_sample, format_row, join_components};
pub use traits::{RowCustomizer, RowData};
