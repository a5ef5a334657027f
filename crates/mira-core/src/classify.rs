//! Field value classification
//!
//! [`classify`] is the single decision point both walkers consume: given a
//! raw field value, decide whether it prints inline or is queued for
//! further inspection. Only [`Classified::Compound`] is ever eligible for
//! traversal; the boxed-wrapper carve-out keeps the walker from descending
//! into a boxed integer and reporting its internals.

use std::fmt;

use crate::reflect::{data_addr, Identity, Reflect};
use crate::value::{Scalar, Value};

/// Classification of one raw field value.
pub enum Classified<'a> {
    /// Absent reference
    Null,
    /// Inline scalar, printed in place
    Primitive(Scalar),
    /// Boxed wrapper scalar: printed like a primitive, never traversed
    BoxedPrimitive(Scalar),
    /// Array, reported flat: component type, length, rendered elements
    Array {
        /// Component type name
        elem_type: &'static str,
        /// Number of elements
        len: usize,
        /// Display text of each element, ascending index order
        elements: Vec<String>,
    },
    /// Reference eligible for further traversal, carrying the value's
    /// exact runtime class
    Compound(&'a dyn Reflect),
}

impl<'a> Classified<'a> {
    /// Whether this value may be queued for further inspection.
    pub fn is_compound(&self) -> bool {
        matches!(self, Classified::Compound(_))
    }

    /// Identity of the referenced object, for compound values.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Classified::Compound(obj) => Some(Identity::of(*obj)),
            _ => None,
        }
    }
}

impl fmt::Debug for Classified<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classified::Null => write!(f, "Null"),
            Classified::Primitive(s) => write!(f, "Primitive({s})"),
            Classified::BoxedPrimitive(s) => write!(f, "BoxedPrimitive({s})"),
            Classified::Array { elem_type, len, .. } => {
                write!(f, "Array({elem_type}[{len}])")
            }
            Classified::Compound(obj) => {
                write!(f, "Compound({}@{:#x})", obj.class().name, data_addr(*obj))
            }
        }
    }
}

impl PartialEq for Classified<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Classified::Null, Classified::Null) => true,
            (Classified::Primitive(a), Classified::Primitive(b)) => a == b,
            (Classified::BoxedPrimitive(a), Classified::BoxedPrimitive(b)) => a == b,
            (
                Classified::Array { elem_type: at, len: al, elements: ae },
                Classified::Array { elem_type: bt, len: bl, elements: be },
            ) => at == bt && al == bl && ae == be,
            (Classified::Compound(a), Classified::Compound(b)) => {
                Identity::of(*a) == Identity::of(*b)
            }
            _ => false,
        }
    }
}

/// Classify a raw field value.
///
/// Pure and idempotent: no hidden state, repeated calls on the same value
/// yield equal classifications. Array elements are rendered to display
/// text here, in ascending index order, and are never classified or
/// queued themselves.
pub fn classify<'a>(value: &Value<'a>) -> Classified<'a> {
    match value {
        Value::Null => Classified::Null,
        Value::Primitive(s) => Classified::Primitive(*s),
        Value::Boxed(s) => Classified::BoxedPrimitive(*s),
        Value::Array(arr) => Classified::Array {
            elem_type: arr.elem_type,
            len: arr.elements.len(),
            elements: arr.elements.iter().map(|e| e.to_string()).collect(),
        },
        Value::Object(obj) => Classified::Compound(*obj),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{any, ClassInfo, Modifiers};
    use crate::reflect::FieldError;
    use crate::value::ArrayValue;
    use once_cell::sync::Lazy;

    static LEAF: Lazy<ClassInfo> = Lazy::new(|| {
        ClassInfo::builder("demo.Leaf")
            .extends(any())
            .field("n", "i32", Modifiers::PRIVATE)
            .build()
    });

    struct Leaf {
        n: i32,
    }

    impl Reflect for Leaf {
        fn class(&self) -> &'static ClassInfo {
            &LEAF
        }

        fn read_field(&self, name: &str) -> Result<Value<'_>, FieldError> {
            match name {
                "n" => Ok(Value::i32(self.n)),
                other => Err(FieldError::NoSuchField { name: other.to_string() }),
            }
        }
    }

    #[test]
    fn test_classify_null() {
        assert_eq!(classify(&Value::Null), Classified::Null);
    }

    #[test]
    fn test_classify_keeps_primitive_and_boxed_apart() {
        let prim = classify(&Value::i32(7));
        let boxed = classify(&Value::Boxed(Scalar::I32(7)));
        assert!(matches!(prim, Classified::Primitive(Scalar::I32(7))));
        assert!(matches!(boxed, Classified::BoxedPrimitive(Scalar::I32(7))));
        assert_ne!(prim, boxed);
        // Neither side of the split is traversable.
        assert!(!prim.is_compound());
        assert!(!boxed.is_compound());
    }

    #[test]
    fn test_classify_array_renders_elements_in_order() {
        let value = Value::Array(ArrayValue::of_i32(&[1, 2, 5]));
        match classify(&value) {
            Classified::Array { elem_type, len, elements } => {
                assert_eq!(elem_type, "i32");
                assert_eq!(len, 3);
                assert_eq!(elements, vec!["1", "2", "5"]);
            }
            other => panic!("expected array classification, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_array_of_objects_stays_flat() {
        let a = Leaf { n: 1 };
        let b = Leaf { n: 2 };
        let value = Value::Array(ArrayValue::new(
            "demo.Leaf",
            vec![Value::object(&a), Value::object(&b)],
        ));
        match classify(&value) {
            Classified::Array { len, elements, .. } => {
                assert_eq!(len, 2);
                // Elements are reference-derived text, not compound values.
                assert!(elements[0].starts_with("demo.Leaf@"));
                assert!(elements[1].starts_with("demo.Leaf@"));
            }
            other => panic!("expected array classification, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_compound_carries_runtime_class() {
        let leaf = Leaf { n: 3 };
        let classified = classify(&Value::object(&leaf));
        assert!(classified.is_compound());
        assert_eq!(classified.identity(), Some(Identity::of(&leaf)));
        match classified {
            Classified::Compound(obj) => assert_eq!(obj.class().name, "demo.Leaf"),
            other => panic!("expected compound classification, got {other:?}"),
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let leaf = Leaf { n: 3 };
        let values = [
            Value::Null,
            Value::bool(true),
            Value::Boxed(Scalar::F64(0.5)),
            Value::Array(ArrayValue::of_i32(&[4, 4])),
            Value::object(&leaf),
        ];
        for value in &values {
            assert_eq!(classify(value), classify(value));
        }
    }
}
