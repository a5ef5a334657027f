//! Demo object graphs
//!
//! Stand-ins for the application objects the inspector would be pointed
//! at in the wild: a counter widget with interfaces, inheritance and a
//! compound helper; a cyclic pair of list nodes; and a sampler mixing
//! compound, array and boxed fields on one object.

use std::cell::Cell;

use clap::ValueEnum;
use mira_core::class::{any, ClassInfo, Modifiers};
use mira_core::{
    inspect_object, ArrayValue, FieldError, InspectReport, Reflect, Scalar, Value,
};
use once_cell::sync::Lazy;

/// Selectable demo graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Graph {
    /// A counter widget holding a formatter
    Basic,
    /// Two list nodes referencing each other
    Cyclic,
    /// Compound, array and boxed fields on one object
    Scenario,
}

/// Build the selected graph and inspect it.
pub fn run(graph: Graph, recursive: bool) -> InspectReport {
    match graph {
        Graph::Basic => {
            let formatter = Formatter { width: 80, pad: ' ' };
            let counter = Counter {
                val: 3,
                ratio: 0.5,
                active: true,
                formatter: &formatter,
            };
            inspect_object(&counter, recursive)
        }
        Graph::Cyclic => {
            let head = ListNode::new(0);
            let tail = ListNode::new(1);
            head.next.set(Some(&tail));
            tail.next.set(Some(&head));
            inspect_object(&head, recursive)
        }
        Graph::Scenario => {
            let sampler = Sampler {
                probe: Box::new(Probe { w: 2 }),
                samples: [1, 2, 5],
                scale: Box::new(7),
            };
            inspect_object(&sampler, recursive)
        }
    }
}

pub static PRINTABLE: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::builder("demo.Printable")
        .interface()
        .method("print", &["core.Stream"], &[], Modifiers::PUBLIC)
        .build()
});

pub static RUNNABLE: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::builder("demo.Runnable")
        .interface()
        .method("run", &[], &[], Modifiers::PUBLIC)
        .build()
});

pub static WIDGET: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::builder("demo.Widget")
        .extends(any())
        .implements(&PRINTABLE)
        .method("print", &["core.Stream"], &[], Modifiers::PUBLIC)
        .method("redraw", &[], &[], Modifiers::PROTECTED | Modifiers::ABSTRACT)
        .constructor(&[], Modifiers::PROTECTED)
        .field("label", "char", Modifiers::PROTECTED)
        .build()
});

pub static COUNTER: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::builder("demo.Counter")
        .extends(&WIDGET)
        .implements(&PRINTABLE)
        .implements(&RUNNABLE)
        .method("get_val", &[], &[], Modifiers::PUBLIC)
        .method("set_val", &["i32"], &["demo.RangeFailure"], Modifiers::PUBLIC)
        .method("run", &[], &[], Modifiers::PUBLIC)
        .method("redraw", &[], &[], Modifiers::PROTECTED)
        .constructor(&[], Modifiers::PUBLIC)
        .constructor(&["i32"], Modifiers::PUBLIC)
        .field("val", "i32", Modifiers::PRIVATE)
        .field("ratio", "f64", Modifiers::PRIVATE)
        .field("active", "bool", Modifiers::PRIVATE)
        .field("formatter", "demo.Formatter", Modifiers::PRIVATE | Modifiers::FINAL)
        .build()
});

pub static FORMATTER: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::builder("demo.Formatter")
        .extends(any())
        .method("pad_to", &["i32"], &[], Modifiers::PUBLIC)
        .constructor(&["i32", "char"], Modifiers::PUBLIC)
        .field("width", "i32", Modifiers::PRIVATE)
        .field("pad", "char", Modifiers::PRIVATE)
        .build()
});

/// A counter widget with scalar state and one compound helper.
pub struct Counter<'a> {
    val: i32,
    ratio: f64,
    active: bool,
    formatter: &'a Formatter,
}

impl Reflect for Counter<'_> {
    fn class(&self) -> &'static ClassInfo {
        &COUNTER
    }

    fn read_field(&self, name: &str) -> Result<Value<'_>, FieldError> {
        match name {
            "val" => Ok(Value::i32(self.val)),
            "ratio" => Ok(Value::f64(self.ratio)),
            "active" => Ok(Value::bool(self.active)),
            "formatter" => Ok(Value::object(self.formatter)),
            other => Err(FieldError::NoSuchField { name: other.to_string() }),
        }
    }
}

/// The counter's padding helper.
pub struct Formatter {
    width: i32,
    pad: char,
}

impl Reflect for Formatter {
    fn class(&self) -> &'static ClassInfo {
        &FORMATTER
    }

    fn read_field(&self, name: &str) -> Result<Value<'_>, FieldError> {
        match name {
            "width" => Ok(Value::i32(self.width)),
            "pad" => Ok(Value::chr(self.pad)),
            other => Err(FieldError::NoSuchField { name: other.to_string() }),
        }
    }
}

pub static LIST_NODE: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::builder("demo.ListNode")
        .extends(any())
        .constructor(&["i32"], Modifiers::PUBLIC)
        .field("id", "i32", Modifiers::PRIVATE)
        .field("next", "demo.ListNode", Modifiers::PRIVATE)
        .build()
});

/// One node of a linked structure; links may form cycles.
pub struct ListNode<'g> {
    id: i32,
    next: Cell<Option<&'g ListNode<'g>>>,
}

impl<'g> ListNode<'g> {
    /// Create an unlinked node.
    pub fn new(id: i32) -> Self {
        Self { id, next: Cell::new(None) }
    }
}

impl Reflect for ListNode<'_> {
    fn class(&self) -> &'static ClassInfo {
        &LIST_NODE
    }

    fn read_field(&self, name: &str) -> Result<Value<'_>, FieldError> {
        match name {
            "id" => Ok(Value::i32(self.id)),
            "next" => Ok(match self.next.get() {
                Some(node) => Value::object(node),
                None => Value::Null,
            }),
            other => Err(FieldError::NoSuchField { name: other.to_string() }),
        }
    }
}

pub static PROBE: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::builder("demo.Probe")
        .extends(any())
        .constructor(&["i32"], Modifiers::PUBLIC)
        .field("w", "i32", Modifiers::PRIVATE)
        .build()
});

/// Leaf object of the scenario graph.
pub struct Probe {
    w: i32,
}

impl Reflect for Probe {
    fn class(&self) -> &'static ClassInfo {
        &PROBE
    }

    fn read_field(&self, name: &str) -> Result<Value<'_>, FieldError> {
        match name {
            "w" => Ok(Value::i32(self.w)),
            other => Err(FieldError::NoSuchField { name: other.to_string() }),
        }
    }
}

pub static SAMPLER: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::builder("demo.Sampler")
        .extends(any())
        .constructor(&[], Modifiers::PUBLIC)
        .field("probe", "demo.Probe", Modifiers::PRIVATE)
        .field("samples", "i32[]", Modifiers::PRIVATE)
        .field("scale", "boxed i32", Modifiers::PRIVATE)
        .build()
});

/// One object mixing a compound field, an array field and a boxed scalar.
pub struct Sampler {
    probe: Box<Probe>,
    samples: [i32; 3],
    scale: Box<i32>,
}

impl Reflect for Sampler {
    fn class(&self) -> &'static ClassInfo {
        &SAMPLER
    }

    fn read_field(&self, name: &str) -> Result<Value<'_>, FieldError> {
        match name {
            "probe" => Ok(Value::object(self.probe.as_ref())),
            "samples" => Ok(Value::Array(ArrayValue::of_i32(&self.samples))),
            "scale" => Ok(Value::Boxed(Scalar::I32(*self.scale))),
            other => Err(FieldError::NoSuchField { name: other.to_string() }),
        }
    }
}
