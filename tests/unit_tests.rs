//! Unit tests for coltype.

use coltype::types::compare::{
    compare, greater_than, greater_than_or_equal, less_than_or_equal, not_equal,
};
use coltype::types::{CompareOp, IntegerValue, TypeId, TypedValue, INTEGER_WIDTH};
use coltype::{ColtypeError, TypeCatalog};

// =============================================================================
// Error Tests
// =============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = ColtypeError::TypeMismatch {
            expected: TypeId::Integer,
            actual: TypeId::Unknown,
        };
        assert!(err.to_string().contains("Type mismatch"));
        assert!(err.to_string().contains("INTEGER"));
        assert!(err.to_string().contains("UNKNOWN"));
    }

    #[test]
    fn test_malformed_payload_display() {
        let err = ColtypeError::MalformedPayload {
            type_id: TypeId::Integer,
            expected: 8,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Malformed INTEGER payload: expected 8 bytes, got 3"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ColtypeError::InvalidValue {
            type_id: TypeId::Custom(2),
            reason: "101 is above 100".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid CUSTOM(2) value: 101 is above 100"
        );
    }

    #[test]
    fn test_unsupported_display() {
        let err = ColtypeError::UnsupportedForType {
            type_id: TypeId::Unknown,
            operation: "vectorized comparison",
        };
        assert!(err.to_string().contains("Unsupported operation"));
        assert!(err.to_string().contains("vectorized comparison"));
    }

    #[test]
    fn test_resource_exhausted_display() {
        let err = ColtypeError::ResourceExhausted("out of memory".into());
        assert!(err.to_string().contains("Resource exhausted"));
    }
}

// =============================================================================
// Integer Type Tests
// =============================================================================

mod integer_tests {
    use super::*;

    #[test]
    fn test_integer_identity() {
        let value = IntegerValue::new(13);
        assert_eq!(value.type_id(), TypeId::Integer);
        assert_eq!(value.fixed_length(), Some(INTEGER_WIDTH));
        assert_eq!(value.value(), 13);
    }

    #[test]
    fn test_integer_from_u64() {
        let value: IntegerValue = 77u64.into();
        assert_eq!(value, IntegerValue::new(77));
    }

    #[test]
    fn test_integer_compare_less() {
        let a = IntegerValue::new(10);
        let b = IntegerValue::new(20);
        assert!(a.less_than(&b).unwrap());
        assert!(!b.less_than(&a).unwrap());
        assert!(!a.equal(&b).unwrap());
    }

    #[test]
    fn test_integer_compare_equal() {
        let a = IntegerValue::new(10);
        let b = IntegerValue::new(10);
        assert!(a.equal(&b).unwrap());
        assert!(!a.less_than(&b).unwrap());
    }

    #[test]
    fn test_integer_add_leaves_operand() {
        let mut a = IntegerValue::new(13);
        let b = IntegerValue::new(26);
        a.add_to_left(&b).unwrap();
        assert_eq!(a.value(), 39);
        assert_eq!(b.value(), 26);
    }

    #[test]
    fn test_integer_max_value() {
        let mut value = IntegerValue::default();
        value.unmarshall(&u64::MAX.to_le_bytes()).unwrap();
        assert_eq!(value.to_string(), u64::MAX.to_string());
    }

    #[test]
    fn test_integer_empty_payload() {
        let mut value = IntegerValue::default();
        let err = value.unmarshall(&[]).unwrap_err();
        assert!(matches!(err, ColtypeError::MalformedPayload { actual: 0, .. }));
    }
}

// =============================================================================
// Comparison Tests
// =============================================================================

mod compare_tests {
    use super::*;

    #[test]
    fn test_demo_pair_relations() {
        let a = IntegerValue::new(13);
        let b = IntegerValue::new(26);

        assert!(!a.equal(&b).unwrap());
        assert!(a.less_than(&b).unwrap());
        assert!(not_equal(&a, &b).unwrap());
        assert!(less_than_or_equal(&a, &b).unwrap());
        assert!(!greater_than(&a, &b).unwrap());
        assert!(!greater_than_or_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_compare_dispatch() {
        let a = IntegerValue::new(3);
        let b = IntegerValue::new(3);
        let results: Vec<bool> = CompareOp::ALL
            .iter()
            .map(|op| compare(&a, *op, &b).unwrap())
            .collect();
        assert_eq!(results, vec![true, false, false, true, false, true]);
    }

    #[test]
    fn test_compare_through_trait_objects() {
        let a: Box<dyn TypedValue> = Box::new(IntegerValue::new(1));
        let b: Box<dyn TypedValue> = Box::new(IntegerValue::new(2));
        assert!(compare(a.as_ref(), CompareOp::Lt, b.as_ref()).unwrap());
        assert!(compare(b.as_ref(), CompareOp::Gt, a.as_ref()).unwrap());
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn test_catalog_instantiate_integer() {
        let catalog = TypeCatalog::with_builtins();
        let value = catalog.instantiate(TypeId::Integer).unwrap();
        assert_eq!(value.type_id(), TypeId::Integer);
        assert_eq!(value.fixed_length(), Some(8));
        assert_eq!(value.to_string(), "0");
    }

    #[test]
    fn test_catalog_unknown_lookup() {
        let catalog = TypeCatalog::with_builtins();
        let err = catalog.instantiate(TypeId::Unknown).unwrap_err();
        assert_eq!(err, ColtypeError::UnknownType(TypeId::Unknown));
    }

    #[test]
    fn test_catalog_default_is_empty() {
        let catalog = TypeCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.type_ids().is_empty());
    }
}
