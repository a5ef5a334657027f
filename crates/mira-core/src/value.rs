//! Raw dynamic values produced by reflective field reads
//!
//! A [`Value`] is what [`Reflect::read_field`](crate::reflect::Reflect)
//! hands back before classification: an absent reference, an inline
//! primitive scalar, a boxed wrapper scalar, an array payload, or a
//! reference to another inspectable object. The scalar kinds form a
//! closed set; nothing outside [`Scalar`] is ever treated as one.

use std::fmt;

use crate::reflect::{data_addr, Reflect};

/// The closed set of scalar kinds, shared by inline primitives and their
/// boxed wrapper counterparts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// Boolean
    Bool(bool),
    /// Character
    Char(char),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// The unit value
    Unit,
}

impl Scalar {
    /// Name of the scalar's type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Char(_) => "char",
            Scalar::I8(_) => "i8",
            Scalar::I16(_) => "i16",
            Scalar::I32(_) => "i32",
            Scalar::I64(_) => "i64",
            Scalar::F32(_) => "f32",
            Scalar::F64(_) => "f64",
            Scalar::Unit => "unit",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Char(v) => write!(f, "{v}"),
            Scalar::I8(v) => write!(f, "{v}"),
            Scalar::I16(v) => write!(f, "{v}"),
            Scalar::I32(v) => write!(f, "{v}"),
            Scalar::I64(v) => write!(f, "{v}"),
            Scalar::F32(v) => write!(f, "{v}"),
            Scalar::F64(v) => write!(f, "{v}"),
            Scalar::Unit => write!(f, "()"),
        }
    }
}

/// Array payload: component type name plus the raw elements in index order.
#[derive(Clone)]
pub struct ArrayValue<'a> {
    /// Component type name
    pub elem_type: &'static str,
    /// Elements, ascending index order
    pub elements: Vec<Value<'a>>,
}

impl<'a> ArrayValue<'a> {
    /// Build an array payload from raw elements.
    pub fn new(elem_type: &'static str, elements: Vec<Value<'a>>) -> Self {
        Self { elem_type, elements }
    }

    /// Build an `i32` array payload.
    pub fn of_i32(values: &[i32]) -> Self {
        Self {
            elem_type: "i32",
            elements: values.iter().map(|&v| Value::i32(v)).collect(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Display for ArrayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

/// Raw value of one field read.
#[derive(Clone)]
pub enum Value<'a> {
    /// Absent reference
    Null,
    /// Inline primitive scalar
    Primitive(Scalar),
    /// Boxed wrapper around a primitive scalar
    Boxed(Scalar),
    /// Array payload, reported flat
    Array(ArrayValue<'a>),
    /// Reference to another inspectable object
    Object(&'a dyn Reflect),
}

impl<'a> Value<'a> {
    /// An inline `bool` scalar.
    pub const fn bool(v: bool) -> Self {
        Value::Primitive(Scalar::Bool(v))
    }

    /// An inline `char` scalar.
    pub const fn chr(v: char) -> Self {
        Value::Primitive(Scalar::Char(v))
    }

    /// An inline `i32` scalar.
    pub const fn i32(v: i32) -> Self {
        Value::Primitive(Scalar::I32(v))
    }

    /// An inline `i64` scalar.
    pub const fn i64(v: i64) -> Self {
        Value::Primitive(Scalar::I64(v))
    }

    /// An inline `f64` scalar.
    pub const fn f64(v: f64) -> Self {
        Value::Primitive(Scalar::F64(v))
    }

    /// A reference to another inspectable object.
    pub fn object(obj: &'a dyn Reflect) -> Self {
        Value::Object(obj)
    }

    /// Whether this value is the absent reference.
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the value's runtime type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Primitive(s) => s.type_name(),
            Value::Boxed(s) => s.type_name(),
            Value::Array(_) => "array",
            Value::Object(obj) => obj.class().name,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Primitive(s) | Value::Boxed(s) => write!(f, "{s}"),
            Value::Array(arr) => write!(f, "{arr}"),
            Value::Object(obj) => write!(f, "{}@{:x}", obj.class().name, data_addr(*obj)),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Primitive(s) => write!(f, "{}({})", s.type_name(), s),
            Value::Boxed(s) => write!(f, "boxed {}({})", s.type_name(), s),
            Value::Array(arr) => write!(f, "{}[{}]", arr.elem_type, arr.len()),
            Value::Object(obj) => write!(f, "{}@{:#x}", obj.class().name, data_addr(*obj)),
        }
    }
}
