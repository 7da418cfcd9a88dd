//! Downloadable row customizer.
//!
//! Adds the `downloadable_links` and `downloadable_samples` columns to the
//! product export.

use crate::Result;
use crate::catalog::{DownloadableType, ProductCollection};
use crate::config::ExportConfig;
use crate::io::encoder::{encode_link, encode_sample, format_row, join_components};
use crate::io::traits::{RowCustomizer, RowData};
use crate::models::{Product, ProductAttribute, ProductId, ProductQuery, ProductType};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Column holding a product's encoded links.
pub const LINKS_COLUMN: &str = "downloadable_links";

/// Column holding a product's encoded samples.
pub const SAMPLES_COLUMN: &str = "downloadable_samples";

/// Columns contributed to the header, in order.
pub const COLUMNS: [&str; 2] = [SAMPLES_COLUMN, LINKS_COLUMN];

/// Encoded cells buffered for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductColumns {
    /// Value of `downloadable_links`.
    pub links: Option<String>,
    /// Value of `downloadable_samples`.
    pub samples: Option<String>,
}

impl ProductColumns {
    /// Returns the number of columns holding a value.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.links.is_some()) + usize::from(self.samples.is_some())
    }

    /// Returns true if no column holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_none() && self.samples.is_none()
    }

    /// Returns the value of a column by name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            LINKS_COLUMN => self.links.as_deref(),
            SAMPLES_COLUMN => self.samples.as_deref(),
            _ => None,
        }
    }

    /// Returns the `(column, value)` pairs that hold a value.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (SAMPLES_COLUMN, self.samples.as_deref()),
            (LINKS_COLUMN, self.links.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
    }
}

/// Counters reported by [`DownloadableRowCustomizer::populate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareSummary {
    /// Downloadable products returned by the collection.
    pub products_selected: usize,
    /// Products that received a links cell.
    pub products_with_links: usize,
    /// Products that received a samples cell.
    pub products_with_samples: usize,
    /// Links encoded.
    pub links_encoded: usize,
    /// Samples encoded.
    pub samples_encoded: usize,
}

impl PrepareSummary {
    /// Returns whether any cell was produced.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.products_with_links > 0 || self.products_with_samples > 0
    }
}

/// Row customizer for downloadable products.
///
/// Buffers encoded cells per product during [`RowCustomizer::prepare_data`]
/// and hands them to the host row by row afterwards. The buffer lives until
/// [`clear`](Self::clear) is called or the customizer is dropped; later
/// batches overwrite cells of products they contain.
pub struct DownloadableRowCustomizer {
    /// Capability interface of the downloadable product type.
    type_instance: Arc<dyn DownloadableType>,
    /// Delimiters.
    config: ExportConfig,
    /// Encoded cells by product.
    rows: HashMap<ProductId, ProductColumns>,
}

impl DownloadableRowCustomizer {
    /// Creates a customizer.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the separators in `config` cannot be
    /// told apart.
    pub fn new(type_instance: Arc<dyn DownloadableType>, config: ExportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            type_instance,
            config,
            rows: HashMap::new(),
        })
    }

    /// Returns the delimiters in use.
    #[must_use]
    pub const fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Selects the downloadable products among `product_ids` and encodes
    /// their links and samples.
    ///
    /// The collection is only queried, never modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection or the type instance fails.
    #[instrument(
        skip(self, collection, product_ids),
        fields(requested = product_ids.len(), selected = tracing::field::Empty)
    )]
    pub fn populate(
        &mut self,
        collection: &dyn ProductCollection,
        product_ids: &[ProductId],
    ) -> Result<PrepareSummary> {
        let query = ProductQuery::new()
            .with_ids(product_ids.iter().copied())
            .with_type(ProductType::Downloadable)
            .with_attributes(ProductAttribute::downloadable_group());

        let products = collection.select(&query)?;
        tracing::Span::current().record("selected", products.len());

        let summary = self.populate_product_data(&products)?;
        tracing::debug!(
            products = summary.products_selected,
            links = summary.links_encoded,
            samples = summary.samples_encoded,
            "Prepared downloadable export data"
        );
        Ok(summary)
    }

    fn populate_product_data(&mut self, products: &[Product]) -> Result<PrepareSummary> {
        let mut summary = PrepareSummary {
            products_selected: products.len(),
            ..PrepareSummary::default()
        };

        for product in products {
            let mut links = 0;
            let mut samples = 0;
            if self.type_instance.has_links(product)? {
                links = self.populate_link_data(product)?;
                if links > 0 {
                    summary.products_with_links += 1;
                    summary.links_encoded += links;
                }
            }
            if self.type_instance.has_samples(product)? {
                samples = self.populate_sample_data(product)?;
                if samples > 0 {
                    summary.products_with_samples += 1;
                    summary.samples_encoded += samples;
                }
            }
            tracing::debug!(product_id = %product.id, links, samples, "Populated product");
        }

        Ok(summary)
    }

    fn populate_link_data(&mut self, product: &Product) -> Result<usize> {
        let links = self.type_instance.links(product)?;
        let count = links.len();
        let cell = join_components(
            links
                .iter()
                .map(|link| format_row(&encode_link(product, link), &self.config)),
            &self.config,
        );

        if let Some(cell) = cell {
            tracing::trace!(product_id = %product.id, cell = %cell, "Encoded links cell");
            self.rows.entry(product.id).or_default().links = Some(cell);
        }
        Ok(count)
    }

    fn populate_sample_data(&mut self, product: &Product) -> Result<usize> {
        let samples = self.type_instance.samples(product)?;
        let count = samples.len();
        let cell = join_components(
            samples
                .iter()
                .map(|sample| format_row(&encode_sample(product, sample), &self.config)),
            &self.config,
        );

        if let Some(cell) = cell {
            tracing::trace!(product_id = %product.id, cell = %cell, "Encoded samples cell");
            self.rows.entry(product.id).or_default().samples = Some(cell);
        }
        Ok(count)
    }

    /// Returns the cells buffered for a product.
    #[must_use]
    pub fn columns_for(&self, product_id: ProductId) -> Option<&ProductColumns> {
        self.rows.get(&product_id).filter(|columns| !columns.is_empty())
    }

    /// Returns the number of products with buffered cells.
    #[must_use]
    pub fn buffered_products(&self) -> usize {
        self.rows.len()
    }

    /// Drops all buffered cells.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl RowCustomizer for DownloadableRowCustomizer {
    fn prepare_data(
        &mut self,
        collection: &dyn ProductCollection,
        product_ids: &[ProductId],
    ) -> Result<()> {
        self.populate(collection, product_ids).map(|_| ())
    }

    fn add_header_columns(&self, mut columns: Vec<String>) -> Vec<String> {
        columns.extend(COLUMNS.iter().map(ToString::to_string));
        columns
    }

    fn add_data(&self, mut row: RowData, product_id: ProductId) -> RowData {
        if let Some(columns) = self.columns_for(product_id) {
            for (column, value) in columns.iter() {
                row.insert(column.to_string(), value.to_string());
            }
        }
        row
    }

    /// Counts buffered columns (at most two), not individual links or
    /// samples.
    fn get_additional_rows_count(
        &self,
        additional_rows_count: usize,
        product_id: ProductId,
    ) -> usize {
        self.columns_for(product_id)
            .map_or(additional_rows_count, |columns| {
                additional_rows_count.max(columns.len())
            })
    }
}
