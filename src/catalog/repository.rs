//! # Product Repository
//!
//! Owns the in-memory catalog and keeps the backing document in sync with it.
//!
//! The document is read exactly once, in [`ProductRepository::open`]. After that
//! the in-memory map is the source of truth and every [`add`](ProductRepository::add)
//! writes a full snapshot back through the [`Storage`].
//!
//! The repository does not enforce unique ids: `add` overwrites an existing entry.
//! Callers that need uniqueness (the add command) must check with
//! [`get`](ProductRepository::get) first.

use crate::error::Result;
use crate::model::{Product, ProductRecord, Records};
use crate::store::{json, Storage};
use std::collections::BTreeMap;

pub struct ProductRepository<S: Storage> {
    storage: S,
    products: BTreeMap<u64, Product>,
}

impl<S: Storage> ProductRepository<S> {
    pub fn open(storage: S) -> Result<Self> {
        let mut repo = Self {
            storage,
            products: BTreeMap::new(),
        };
        repo.load()?;
        Ok(repo)
    }

    fn load(&mut self) -> Result<()> {
        let text = self.storage.read()?;
        let records = json::decode(text.as_deref());

        for (key, record) in &records {
            match record.to_product(key) {
                Ok(product) => {
                    self.products.insert(product.product_id(), product);
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "skipping unreadable record");
                }
            }
        }

        tracing::debug!(
            location = %self.storage.location(),
            count = self.products.len(),
            "catalog loaded"
        );
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let records: Records = self
            .products
            .iter()
            .map(|(id, product)| (id.to_string(), ProductRecord::from(product)))
            .collect();
        let text = json::encode(&records)?;
        self.storage.write(&text)?;

        tracing::debug!(
            location = %self.storage.location(),
            count = records.len(),
            "catalog saved"
        );
        Ok(())
    }

    /// Insert or replace the product under its id, then persist the whole catalog.
    pub fn add(&mut self, product: Product) -> Result<()> {
        self.products.insert(product.product_id(), product);
        self.save()
    }

    pub fn get(&self, product_id: u64) -> Option<&Product> {
        self.products.get(&product_id)
    }

    /// All products, ordered by id.
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
