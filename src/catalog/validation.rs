//! # Field Validation
//!
//! Each product field arrives as raw operator input. The [`Validator`] turns that
//! text into the typed value a [`Product`](crate::model::Product) holds, or reports
//! exactly which rule the input broke.
//!
//! Validators are pure: no I/O and no catalog access. The duplicate-id check
//! lives in the command layer because it needs the repository.
//!
//! Numeric fields are trimmed before parsing, so `" 5 "` is a valid quantity.
//! Names are trimmed and the trimmed form is what gets stored.

use std::fmt;
use std::num::IntErrorKind;
use thiserror::Error;

use crate::config::{MAX_PRODUCT_ID_DIGITS, MAX_PRODUCT_NAME_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProductId,
    Name,
    Price,
    Quantity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::ProductId => "product ID",
            Field::Name => "product name",
            Field::Price => "product price",
            Field::Quantity => "product quantity",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    NotAnInteger,
    NotANumber,
    TooLong { max: usize },
    Empty,
    NonPositive,
    Negative,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", describe(.field, .kind))]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
}

impl ValidationError {
    fn new(field: Field, kind: ValidationKind) -> Self {
        Self { field, kind }
    }
}

fn describe(field: &Field, kind: &ValidationKind) -> String {
    use ValidationKind::*;

    match (*field, *kind) {
        (Field::ProductId, NotAnInteger) => "Product ID should be a valid integer.".into(),
        (Field::ProductId, NonPositive) => "Product ID should be a positive integer.".into(),
        (Field::ProductId, TooLong { max }) => {
            format!("Product ID cannot be longer than {} digits.", max)
        }
        (Field::Name, Empty) => "Name cannot be empty or just whitespace.".into(),
        (Field::Name, TooLong { max }) => {
            format!("Product name cannot be longer than {} characters.", max)
        }
        (Field::Price, NotANumber) => "Product price must be a valid number.".into(),
        (Field::Price, NonPositive) => "Product price must be greater than 0.".into(),
        (Field::Quantity, NotAnInteger) => "Product quantity must be a valid integer.".into(),
        (Field::Quantity, Negative) => "Product quantity cannot be negative.".into(),
        (field, kind) => format!("Invalid {}: {:?}", field, kind),
    }
}

/// Length limits applied by the [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_id_digits: usize,
    pub max_name_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_id_digits: MAX_PRODUCT_ID_DIGITS,
            max_name_len: MAX_PRODUCT_NAME_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    limits: Limits,
}

impl Validator {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Parse, then check the digit count, then the sign.
    pub fn validate_id(&self, raw: &str) -> Result<u64, ValidationError> {
        let too_long = ValidationError::new(
            Field::ProductId,
            ValidationKind::TooLong {
                max: self.limits.max_id_digits,
            },
        );

        let value = match raw.trim().parse::<i64>() {
            Ok(value) => value,
            Err(e) => {
                return Err(match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => too_long,
                    _ => ValidationError::new(Field::ProductId, ValidationKind::NotAnInteger),
                })
            }
        };

        if digit_count(value.unsigned_abs()) > self.limits.max_id_digits {
            return Err(too_long);
        }
        if value <= 0 {
            return Err(ValidationError::new(
                Field::ProductId,
                ValidationKind::NonPositive,
            ));
        }

        Ok(value.unsigned_abs())
    }

    pub fn validate_name(&self, raw: &str) -> Result<String, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::new(Field::Name, ValidationKind::Empty));
        }
        if name.chars().count() > self.limits.max_name_len {
            return Err(ValidationError::new(
                Field::Name,
                ValidationKind::TooLong {
                    max: self.limits.max_name_len,
                },
            ));
        }
        Ok(name.to_string())
    }

    /// Returns the price rounded to cents.
    pub fn validate_price(&self, raw: &str) -> Result<f64, ValidationError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::new(Field::Price, ValidationKind::NotANumber))?;

        // Checked after rounding: 0.001 would otherwise be stored as 0.00
        let value = round_to_cents(value);
        if value <= 0.0 {
            return Err(ValidationError::new(
                Field::Price,
                ValidationKind::NonPositive,
            ));
        }

        Ok(value)
    }

    pub fn validate_quantity(&self, raw: &str) -> Result<u64, ValidationError> {
        match raw.trim().parse::<i64>() {
            Ok(value) if value < 0 => Err(ValidationError::new(
                Field::Quantity,
                ValidationKind::Negative,
            )),
            Ok(value) => Ok(value.unsigned_abs()),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Err(ValidationError::new(
                Field::Quantity,
                ValidationKind::Negative,
            )),
            Err(_) => Err(ValidationError::new(
                Field::Quantity,
                ValidationKind::NotAnInteger,
            )),
        }
    }
}

fn digit_count(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Nearest cent, ties to even on the exact binary value. `{:.2}` formatting is
/// exact, so `9.995` (stored as 9.99499...) becomes `9.99` and `9.999` becomes `10.00`.
fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
