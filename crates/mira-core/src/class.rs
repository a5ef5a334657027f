//! Class metadata model
//!
//! Every inspectable type contributes one immutable [`ClassInfo`] record
//! describing its place in the class graph: immediate superclass, directly
//! implemented interfaces, and the declared methods, constructors and
//! fields. Records live for the whole program (`'static`) and are compared
//! by pointer identity ([`ClassId`]), never by content.

use std::fmt;

use bitflags::bitflags;
use once_cell::sync::Lazy;

bitflags! {
    /// Modifier word attached to classes, methods, constructors and fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        /// Visible everywhere
        const PUBLIC = 1 << 0;
        /// Visible to the declaring class only
        const PRIVATE = 1 << 1;
        /// Visible to the declaring class and its subclasses
        const PROTECTED = 1 << 2;
        /// Belongs to the class, not to instances
        const STATIC = 1 << 3;
        /// Cannot be overridden or reassigned
        const FINAL = 1 << 4;
        /// Declared without a body
        const ABSTRACT = 1 << 5;
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "default");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", name.to_ascii_lowercase())?;
            first = false;
        }
        Ok(())
    }
}

/// Identity of a class record.
///
/// Derived from the address of the `'static` metadata record, so two
/// classes are equal exactly when they are the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(usize);

/// Declared method descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    /// Method name
    pub name: &'static str,
    /// Parameter type names, in declaration order
    pub params: Vec<&'static str>,
    /// Declared failure type names, in declaration order
    pub throws: Vec<&'static str>,
    /// Modifier word
    pub modifiers: Modifiers,
}

/// Declared constructor descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInfo {
    /// Constructor name (the qualified class name)
    pub name: &'static str,
    /// Parameter type names, in declaration order
    pub params: Vec<&'static str>,
    /// Modifier word
    pub modifiers: Modifiers,
}

/// Declared field descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field name
    pub name: &'static str,
    /// Declared type name
    pub ty: &'static str,
    /// Modifier word
    pub modifiers: Modifiers,
}

/// Metadata record for one type in the class graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    /// Qualified class name
    pub name: &'static str,
    /// Whether this record describes an interface
    pub is_interface: bool,
    /// Immediate superclass; absent for interfaces and for the roots
    pub superclass: Option<&'static ClassInfo>,
    /// Directly implemented (or, for interfaces, extended) interfaces
    pub interfaces: Vec<&'static ClassInfo>,
    /// Declared methods
    pub methods: Vec<MethodInfo>,
    /// Declared constructors
    pub constructors: Vec<ConstructorInfo>,
    /// Declared fields
    pub fields: Vec<FieldInfo>,
}

impl ClassInfo {
    /// Start building a class record with the given qualified name.
    pub fn builder(name: &'static str) -> ClassInfoBuilder {
        ClassInfoBuilder {
            name,
            is_interface: false,
            superclass: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Identity of this record.
    pub fn id(&self) -> ClassId {
        ClassId(self as *const ClassInfo as usize)
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether this record is one of the two runtime roots
    /// ([`any`] or [`metaclass`]).
    pub fn is_root(&self) -> bool {
        let id = self.id();
        id == any().id() || id == metaclass().id()
    }
}

/// Builder for [`ClassInfo`] records.
pub struct ClassInfoBuilder {
    name: &'static str,
    is_interface: bool,
    superclass: Option<&'static ClassInfo>,
    interfaces: Vec<&'static ClassInfo>,
    methods: Vec<MethodInfo>,
    constructors: Vec<ConstructorInfo>,
    fields: Vec<FieldInfo>,
}

impl ClassInfoBuilder {
    /// Mark the record as an interface. Interfaces carry no superclass.
    pub fn interface(mut self) -> Self {
        self.is_interface = true;
        self.superclass = None;
        self
    }

    /// Set the immediate superclass.
    pub fn extends(mut self, superclass: &'static ClassInfo) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Add a directly implemented (or extended) interface.
    pub fn implements(mut self, iface: &'static ClassInfo) -> Self {
        self.interfaces.push(iface);
        self
    }

    /// Add a declared method.
    pub fn method(
        mut self,
        name: &'static str,
        params: &[&'static str],
        throws: &[&'static str],
        modifiers: Modifiers,
    ) -> Self {
        self.methods.push(MethodInfo {
            name,
            params: params.to_vec(),
            throws: throws.to_vec(),
            modifiers,
        });
        self
    }

    /// Add a declared constructor. Constructors are named after the class.
    pub fn constructor(mut self, params: &[&'static str], modifiers: Modifiers) -> Self {
        self.constructors.push(ConstructorInfo {
            name: self.name,
            params: params.to_vec(),
            modifiers,
        });
        self
    }

    /// Add a declared field.
    pub fn field(mut self, name: &'static str, ty: &'static str, modifiers: Modifiers) -> Self {
        self.fields.push(FieldInfo { name, ty, modifiers });
        self
    }

    /// Build the record.
    pub fn build(self) -> ClassInfo {
        ClassInfo {
            name: self.name,
            is_interface: self.is_interface,
            superclass: if self.is_interface { None } else { self.superclass },
            interfaces: self.interfaces,
            methods: self.methods,
            constructors: self.constructors,
            fields: self.fields,
        }
    }
}

/// The universal base class. Every concrete class ultimately extends it,
/// and traversal terminates here rather than walking into it.
pub fn any() -> &'static ClassInfo {
    static ANY: Lazy<ClassInfo> = Lazy::new(|| {
        ClassInfo::builder("core.Any")
            .method("to_text", &[], &[], Modifiers::PUBLIC)
            .method("identity", &[], &[], Modifiers::PUBLIC | Modifiers::FINAL)
            .constructor(&[], Modifiers::PUBLIC)
            .build()
    });
    &ANY
}

/// The metaclass describing class records themselves. Like [`any`], it is
/// never enqueued during traversal.
pub fn metaclass() -> &'static ClassInfo {
    static META: Lazy<ClassInfo> = Lazy::new(|| {
        ClassInfo::builder("core.Type")
            .method("name", &[], &[], Modifiers::PUBLIC | Modifiers::FINAL)
            .field("name", "core.Text", Modifiers::PRIVATE | Modifiers::FINAL)
            .build()
    });
    &META
}
