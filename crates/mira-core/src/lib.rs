//! Mira core introspection engine
//!
//! This crate provides runtime object and class introspection:
//! - Class metadata model and the opt-in [`Reflect`] capability
//! - Field value classification (primitive / boxed / array / compound)
//! - Breadth-first class walker over superclass and interface edges
//! - Breadth-first object walker over compound field edges
//!
//! Inspection is read-only: the walkers report on live objects and their
//! classes, they never reconstruct or mutate them. Traversal is
//! single-threaded and synchronous; all state is scoped to one
//! [`inspect`] call.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod class;
pub mod class_walker;
pub mod classify;
pub mod object_walker;
pub mod reflect;
pub mod report;
pub mod value;

pub use class::{ClassId, ClassInfo, ClassInfoBuilder, ConstructorInfo, FieldInfo, MethodInfo, Modifiers};
pub use class_walker::ClassWalker;
pub use classify::{classify, Classified};
pub use object_walker::{inspect, inspect_object, ObjectWalker};
pub use reflect::{FieldError, Identity, Reflect};
pub use report::{FieldRecord, FieldReport, InspectReport, ObjectId, ObjectRecord};
pub use value::{ArrayValue, Scalar, Value};

/// Introspection errors
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// Null seed passed to `inspect`
    #[error("cannot inspect a null seed")]
    NullSeed,

    /// Seed value is not an object reference
    #[error("cannot inspect a {type_name} seed; only object references have fields")]
    NotAnObject {
        /// Runtime type of the rejected seed
        type_name: String,
    },
}

/// Introspection result
pub type InspectResult<T> = Result<T, InspectError>;
