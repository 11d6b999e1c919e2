use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::ProductRepository;
use crate::store::Storage;

pub fn run<S: Storage>(repo: &ProductRepository<S>) -> Result<CmdResult> {
    let products = repo.list();
    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info("No products available."));
    }
    Ok(result.with_listed_products(products))
}
