use crate::commands::{CmdMessage, CmdResult, PRODUCT_ADDED};
use crate::error::{CatalogError, Result};
use crate::model::Product;
use crate::repository::ProductRepository;
use crate::store::Storage;
use crate::validation::Validator;

/// Raw operator input for a new product, before validation.
#[derive(Debug, Clone, Copy)]
pub struct NewProduct<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub price: &'a str,
    pub quantity: &'a str,
}

/// Validate and store a new product.
///
/// Fields are checked in order id, name, price, quantity and the first failure
/// wins. The duplicate check runs right after the id validates, so a taken id is
/// reported even when the remaining fields are also invalid.
pub fn run<S: Storage>(
    repo: &mut ProductRepository<S>,
    validator: &Validator,
    input: NewProduct<'_>,
) -> Result<CmdResult> {
    let product_id = validator.validate_id(input.id)?;
    if repo.get(product_id).is_some() {
        return Err(CatalogError::DuplicateId(product_id));
    }

    let name = validator.validate_name(input.name)?;
    let price = validator.validate_price(input.price)?;
    let quantity = validator.validate_quantity(input.quantity)?;

    repo.add(Product::new(product_id, name, price, quantity))?;

    let stored = repo
        .get(product_id)
        .cloned()
        .ok_or(CatalogError::AddFailed(product_id))?;
    tracing::info!(product_id, name = %stored.name(), "product added");

    let mut result = CmdResult::default().with_affected_products(vec![stored]);
    result.add_message(CmdMessage::success(PRODUCT_ADDED));
    Ok(result)
}
