//! Property tests for field validation and the catalog document format.
//!
//! Run with: `cargo test --test properties`

use proptest::prelude::*;

use catalog::model::{ProductRecord, Records};
use catalog::store::json::{decode, encode};
use catalog::validation::{ValidationKind, Validator};

fn record() -> impl Strategy<Value = ProductRecord> {
    (
        "\\PC{1,30}",
        "[0-9]{1,6}\\.[0-9]{1,2}",
        "[0-9]{1,9}",
    )
        .prop_map(|(name, price, quantity)| ProductRecord {
            name,
            price,
            quantity,
        })
}

fn records() -> impl Strategy<Value = Records> {
    proptest::collection::btree_map("[1-9][0-9]{0,14}", record(), 1..=12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// Every id within the default 15-digit limit validates to itself.
    #[test]
    fn property_valid_ids_parse_to_themselves(id in 1u64..=999_999_999_999_999) {
        let v = Validator::default();
        prop_assert_eq!(v.validate_id(&id.to_string()), Ok(id));
        prop_assert_eq!(v.validate_id(&format!("  {}\n", id)), Ok(id));
    }

    /// Sixteen or more significant digits are always too long.
    #[test]
    fn property_long_ids_are_rejected(id in 1_000_000_000_000_000u64..=u64::MAX) {
        let err = Validator::default().validate_id(&id.to_string()).unwrap_err();
        prop_assert_eq!(err.kind, ValidationKind::TooLong { max: 15 });
    }

    /// An accepted price is always positive and a whole number of cents.
    #[test]
    fn property_accepted_prices_are_positive_cents(price in 0.0f64..100_000.0) {
        if let Ok(value) = Validator::default().validate_price(&price.to_string()) {
            prop_assert!(value > 0.0);
            prop_assert_eq!(format!("{:.2}", value).parse::<f64>().unwrap(), value);
        }
    }

    /// Encoding then decoding gives back the same catalog.
    #[test]
    fn property_document_round_trip(records in records()) {
        let text = encode(&records).unwrap();
        prop_assert_eq!(decode(Some(text.as_str())), records);
    }

    /// Decoding arbitrary text never panics.
    #[test]
    fn property_decode_never_panics(text in "(?s).{0,256}") {
        let _ = decode(Some(text.as_str()));
    }
}
