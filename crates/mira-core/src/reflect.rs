//! The opt-in reflection capability
//!
//! Rust exposes no built-in runtime reflection, so types participate by
//! implementing [`Reflect`]: a `'static` [`ClassInfo`] record paired with
//! dynamic reads of the instance's declared fields. Implementations live
//! inside the type's own module, which is what lets a read surface private
//! fields the language would otherwise hide.

use thiserror::Error;

use crate::class::{ClassId, ClassInfo};
use crate::value::Value;

/// Errors raised by a single reflective field read.
///
/// These are recoverable per field: the object walker logs the failure,
/// records the field as skipped, and keeps going.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The class declares no field with this name
    #[error("no declared field named `{name}`")]
    NoSuchField {
        /// Requested field name
        name: String,
    },

    /// The field exists but its value cannot be produced
    #[error("field `{name}` is unreadable: {reason}")]
    Unreadable {
        /// Field name
        name: String,
        /// Why the read failed
        reason: String,
    },
}

/// A live object the inspector can traverse.
pub trait Reflect {
    /// Metadata record for this instance's runtime class.
    fn class(&self) -> &'static ClassInfo;

    /// Read one declared field by name, private fields included.
    fn read_field(&self, name: &str) -> Result<Value<'_>, FieldError>;
}

/// Identity of one live instance for the duration of a traversal.
///
/// Keyed by the instance's data pointer paired with its runtime class, so
/// a by-value field nested at offset zero stays distinct from the object
/// containing it. Independent of any semantic equality the type defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    addr: usize,
    class: ClassId,
}

impl Identity {
    /// Derive the identity of a live object. Repeated calls on the same
    /// reference yield the same identity.
    pub fn of(obj: &dyn Reflect) -> Self {
        Self {
            addr: data_addr(obj),
            class: obj.class().id(),
        }
    }
}

/// Address of the object's data pointer, vtable excluded.
pub(crate) fn data_addr(obj: &dyn Reflect) -> usize {
    obj as *const dyn Reflect as *const () as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::Modifiers;
    use once_cell::sync::Lazy;

    static POINT: Lazy<ClassInfo> = Lazy::new(|| {
        ClassInfo::builder("demo.Point")
            .extends(crate::class::any())
            .field("x", "i32", Modifiers::PRIVATE)
            .build()
    });

    struct Point {
        x: i32,
    }

    impl Reflect for Point {
        fn class(&self) -> &'static ClassInfo {
            &POINT
        }

        fn read_field(&self, name: &str) -> Result<Value<'_>, FieldError> {
            match name {
                "x" => Ok(Value::i32(self.x)),
                other => Err(FieldError::NoSuchField { name: other.to_string() }),
            }
        }
    }

    #[test]
    fn test_identity_is_stable_per_object() {
        let p = Point { x: 1 };
        assert_eq!(Identity::of(&p), Identity::of(&p));
    }

    #[test]
    fn test_identity_distinguishes_objects() {
        let a = Point { x: 1 };
        let b = Point { x: 1 };
        assert_ne!(Identity::of(&a), Identity::of(&b));
    }

    #[test]
    fn test_read_field_surfaces_private_field() {
        let p = Point { x: 9 };
        assert_eq!(p.read_field("x").unwrap().to_string(), "9");
        assert!(matches!(
            p.read_field("y"),
            Err(FieldError::NoSuchField { .. })
        ));
    }
}
