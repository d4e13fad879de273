//! Property-based tests for the value model

use arbor_value::{Kind, Value};
use proptest::prelude::*;

fn arb_json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        any::<i64>().prop_map(|i| serde_json::Value::Number(i.into())),
        "[a-z]{0,8}".prop_map(serde_json::Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..8)
                .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn conversion_preserves_classification(doc in arb_json()) {
        let expected = match &doc {
            serde_json::Value::Object(_) => Kind::Mapping,
            serde_json::Value::Array(_) => Kind::Sequence,
            _ => Kind::Scalar,
        };
        prop_assert_eq!(Value::from(doc).kind(), expected);
    }

    #[test]
    fn conversion_is_structurally_deterministic(doc in arb_json()) {
        let a = Value::from(doc.clone());
        let b = Value::from(doc);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn arrays_preserve_length(items in prop::collection::vec(arb_json(), 0..16)) {
        let len = items.len();
        let v = Value::from(serde_json::Value::Array(items));
        prop_assert_eq!(v.as_seq().unwrap().borrow().len(), len);
    }

    #[test]
    fn objects_preserve_key_set(
        entries in prop::collection::btree_map("[a-z]{1,8}", arb_json(), 0..16)
    ) {
        let keys: Vec<String> = entries.keys().cloned().collect();
        let doc = serde_json::Value::Object(entries.into_iter().collect());
        let v = Value::from(doc);
        let map = v.as_map().unwrap().borrow();
        let got: Vec<String> = map.keys().cloned().collect();
        prop_assert_eq!(got, keys);
    }
}
