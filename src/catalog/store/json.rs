//! Conversion between the catalog document text and [`Records`].
//!
//! Decoding never fails: a missing, blank, or malformed document is an empty
//! catalog. Corrupt data is logged and then treated as "no data".

use crate::error::{CatalogError, Result};
use crate::model::Records;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

pub fn decode(text: Option<&str>) -> Records {
    let Some(text) = text else {
        return Records::new();
    };
    if text.trim().is_empty() {
        return Records::new();
    }

    match serde_json::from_str::<Records>(text) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                error = %e,
                "catalog data is malformed, starting with an empty catalog"
            );
            Records::new()
        }
    }
}

/// Pretty-printed with four-space indentation. Keys come out sorted, so the same
/// catalog always encodes to the same text.
pub fn encode(records: &Records) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .map_err(CatalogError::Serialization)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductRecord;

    fn record(name: &str, price: &str, quantity: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    fn sample() -> Records {
        let mut records = Records::new();
        records.insert("1".into(), record("Widget", "9.99", "5"));
        records.insert("20".into(), record("Gadget \"XL\"", "120.0", "0"));
        records
    }

    #[test]
    fn absent_and_blank_decode_to_empty() {
        assert!(decode(None).is_empty());
        assert!(decode(Some("")).is_empty());
        assert!(decode(Some("  \n")).is_empty());
    }

    #[test]
    fn malformed_decodes_to_empty() {
        assert!(decode(Some("not json")).is_empty());
        assert!(decode(Some("{\"1\": {\"name\": ")).is_empty());
        // Valid JSON, wrong shape
        assert!(decode(Some("[1, 2, 3]")).is_empty());
        let numeric_price = r#"{"1": {"name": "A", "price": 9.99, "quantity": "1"}}"#;
        assert!(decode(Some(numeric_price)).is_empty());
    }

    #[test]
    fn decodes_the_documented_shape() {
        let records = decode(Some(
            r#"{"1": {"name": "Widget", "price": "9.99", "quantity": "5"}}"#,
        ));
        assert_eq!(records.len(), 1);
        assert_eq!(records["1"], record("Widget", "9.99", "5"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let records = decode(Some(
            r#"{"1": {"name": "Widget", "price": "9.99", "quantity": "5", "sku": "W-1"}}"#,
        ));
        assert_eq!(records["1"], record("Widget", "9.99", "5"));
    }

    #[test]
    fn encode_then_decode_preserves_catalog() {
        let records = sample();
        let text = encode(&records).unwrap();
        assert_eq!(decode(Some(text.as_str())), records);
    }

    #[test]
    fn encode_is_indented_and_deterministic() {
        let text = encode(&sample()).unwrap();
        assert!(text.starts_with("{\n    \"1\": {\n        \"name\": \"Widget\","));
        assert_eq!(text, encode(&sample()).unwrap());
    }

    #[test]
    fn empty_catalog_encodes_to_empty_object() {
        assert_eq!(encode(&Records::new()).unwrap(), "{}");
    }
}
