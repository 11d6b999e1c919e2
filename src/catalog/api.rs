//! # API Facade
//!
//! [`CatalogApi`] is the single entry point for catalog operations, whatever the
//! UI. It owns the repository and the validator and dispatches to `commands/*.rs`,
//! where the business logic lives.
//!
//! The API does no I/O of its own beyond what the repository's [`Storage`] does
//! and never formats output: it returns [`CmdResult`] values and typed errors.
//!
//! ## Generic Over Storage
//!
//! - Production: `CatalogApi<FileStorage>`
//! - Testing: `CatalogApi<MemStorage>`

use crate::commands;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::model::Product;
use crate::repository::ProductRepository;
use crate::store::fs::FileStorage;
use crate::store::Storage;
use crate::validation::Validator;

pub struct CatalogApi<S: Storage> {
    repo: ProductRepository<S>,
    validator: Validator,
}

impl<S: Storage> CatalogApi<S> {
    /// Opens the repository, which loads the catalog once.
    pub fn new(storage: S, validator: Validator) -> Result<Self> {
        Ok(Self {
            repo: ProductRepository::open(storage)?,
            validator,
        })
    }

    pub fn add_product(
        &mut self,
        id: &str,
        name: &str,
        price: &str,
        quantity: &str,
    ) -> Result<CmdResult> {
        commands::add::run(
            &mut self.repo,
            &self.validator,
            NewProduct {
                id,
                name,
                price,
                quantity,
            },
        )
    }

    pub fn list_products(&self) -> Result<CmdResult> {
        commands::list::run(&self.repo)
    }

    pub fn product_exists(&self, product_id: u64) -> bool {
        self.repo.get(product_id).is_some()
    }

    pub fn get_product(&self, product_id: u64) -> Option<&Product> {
        self.repo.get(product_id)
    }

    /// The validator the API checks input with, for UIs that validate per field.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn storage(&self) -> &S {
        self.repo.storage()
    }
}

impl CatalogApi<FileStorage> {
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::new(
            FileStorage::new(&config.data_file),
            Validator::new(config.limits()),
        )
    }
}

pub use commands::add::NewProduct;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::store::memory::MemStorage;
    use crate::validation::Limits;

    fn api() -> CatalogApi<MemStorage> {
        CatalogApi::new(MemStorage::new(), Validator::default()).unwrap()
    }

    #[test]
    fn add_dispatches_and_persists() {
        let mut api = api();
        let result = api.add_product("1", "Widget", "9.99", "5").unwrap();

        assert_eq!(result.affected_products[0].product_id(), 1);
        assert!(api.product_exists(1));
        assert!(!api.product_exists(2));
        assert_eq!(api.storage().write_count(), 1);
    }

    #[test]
    fn list_returns_products() {
        let mut api = api();
        api.add_product("1", "Widget", "9.99", "5").unwrap();

        let result = api.list_products().unwrap();
        assert_eq!(result.listed_products.len(), 1);
        assert_eq!(api.get_product(1).unwrap().name(), "Widget");
    }

    #[test]
    fn second_add_of_same_id_fails() {
        let mut api = api();
        api.add_product("1", "Widget", "9.99", "5").unwrap();
        let err = api.add_product("1", "Widget", "9.99", "5").unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId(1)));
        assert!(err.is_recoverable());
        assert_eq!(api.list_products().unwrap().listed_products.len(), 1);
    }

    #[test]
    fn validator_limits_are_used() {
        let limits = Limits {
            max_id_digits: 15,
            max_name_len: 4,
        };
        let mut api = CatalogApi::new(MemStorage::new(), Validator::new(limits)).unwrap();

        assert!(api.add_product("1", "Widget", "9.99", "5").is_err());
        assert!(api.add_product("1", "Nut", "0.05", "5").is_ok());
        assert_eq!(api.validator().limits(), limits);
    }
}
