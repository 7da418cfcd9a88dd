//! Host catalog collaborators.
//!
//! The catalog owns products, links and samples. The export only reads them
//! through the two traits defined here, which the host implements:
//!
//! | Trait | Host concept | Used by |
//! |-------|--------------|---------|
//! | [`ProductCollection`] | Product collection with attribute filters | Selector |
//! | [`DownloadableType`] | Downloadable product type instance | Populator |
//!
//! # Error Modes
//!
//! Implementations report failures as [`crate::Error`], typically
//! `Error::OperationFailed`. The export propagates them unchanged.

mod traits;

pub use traits::{DownloadableType, ProductCollection};
