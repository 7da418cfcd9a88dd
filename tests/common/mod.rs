//! In-memory catalog shared by the integration tests.

#![allow(dead_code)]

use downloadable_export::models::ProductAttribute;
use downloadable_export::{
    DownloadableType, Link, Product, ProductCollection, ProductId, ProductQuery, Result, Sample,
};
use std::cell::Cell;
use std::collections::HashMap;

/// Catalog holding products, links and samples in memory.
///
/// Mirrors the host collection: group attributes are only populated when the
/// query asks for them.
#[derive(Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    links: HashMap<ProductId, Vec<Link>>,
    samples: HashMap<ProductId, Vec<Sample>>,
    selects: Cell<usize>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_links(mut self, id: u64, links: Vec<Link>) -> Self {
        self.links.insert(ProductId::new(id), links);
        self
    }

    pub fn with_samples(mut self, id: u64, samples: Vec<Sample>) -> Self {
        self.samples.insert(ProductId::new(id), samples);
        self
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn select_calls(&self) -> usize {
        self.selects.get()
    }
}

impl ProductCollection for InMemoryCatalog {
    fn select(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        self.selects.set(self.selects.get() + 1);
        Ok(self
            .products
            .iter()
            .filter(|p| query.matches(p))
            .map(|p| {
                let mut product = p.clone();
                if !query.selects(ProductAttribute::LinksTitle) {
                    product.links_title = None;
                }
                if !query.selects(ProductAttribute::SamplesTitle) {
                    product.samples_title = None;
                }
                if !query.selects(ProductAttribute::LinksPurchasedSeparately) {
                    product.links_purchased_separately = None;
                }
                product
            })
            .collect())
    }
}

impl DownloadableType for InMemoryCatalog {
    fn has_links(&self, product: &Product) -> Result<bool> {
        Ok(self.links.get(&product.id).is_some_and(|l| !l.is_empty()))
    }

    fn links(&self, product: &Product) -> Result<Vec<Link>> {
        Ok(self.links.get(&product.id).cloned().unwrap_or_default())
    }

    fn has_samples(&self, product: &Product) -> Result<bool> {
        Ok(self.samples.get(&product.id).is_some_and(|s| !s.is_empty()))
    }

    fn samples(&self, product: &Product) -> Result<Vec<Sample>> {
        Ok(self.samples.get(&product.id).cloned().unwrap_or_default())
    }
}

pub fn ids(ids: &[u64]) -> Vec<ProductId> {
    ids.iter().copied().map(ProductId::new).collect()
}
