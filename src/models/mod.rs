//! Data models for the downloadable export.
//!
//! Products and their downloadable components are owned by the host catalog;
//! these types are the read-only view the export works with.

mod component;
mod product;
mod query;
mod row;

pub use component::{
    DEFAULT_IS_SHAREABLE, DEFAULT_NUMBER_OF_DOWNLOADS, DEFAULT_PURCHASED_SEPARATELY,
    DEFAULT_SORT_ORDER, Link, Payload, Sample, Shareable,
};
pub use product::{Product, ProductId, ProductType};
pub use query::{ProductAttribute, ProductQuery};
pub use row::{EncodedRow, FieldKey};
