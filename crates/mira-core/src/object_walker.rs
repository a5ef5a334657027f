//! Breadth-first traversal over the object reference graph
//!
//! Walks compound field edges from a seed object, visiting each object
//! identity at most once and emitting one record per visit. Traversal
//! state lives inside a single [`inspect`] call; independent calls share
//! nothing, so concurrent inspections of independent graphs are safe by
//! construction.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{trace, warn};

use crate::class_walker::ClassWalker;
use crate::classify::{classify, Classified};
use crate::reflect::{Identity, Reflect};
use crate::report::{FieldRecord, FieldReport, InspectReport, ObjectId, ObjectRecord};
use crate::value::Value;
use crate::InspectError;

/// Assigns dense per-traversal ordinals to object identities.
#[derive(Debug, Default)]
struct IdentityTable {
    ids: FxHashMap<Identity, ObjectId>,
}

impl IdentityTable {
    /// Ordinal for `obj`, assigned on first sight.
    fn token(&mut self, obj: &dyn Reflect) -> ObjectId {
        let next = ObjectId(self.ids.len() as u32);
        *self.ids.entry(Identity::of(obj)).or_insert(next)
    }
}

/// Breadth-first walker over compound field edges.
///
/// Construct one per traversal; [`run`](ObjectWalker::run) consumes the
/// walker, so no traversal state outlives the call.
pub struct ObjectWalker<'a> {
    queue: VecDeque<&'a dyn Reflect>,
    visited: FxHashSet<Identity>,
    identities: IdentityTable,
    classes: ClassWalker,
}

impl<'a> ObjectWalker<'a> {
    /// Create a walker with empty traversal state.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            visited: FxHashSet::default(),
            identities: IdentityTable::default(),
            classes: ClassWalker::new(),
        }
    }

    /// Visit `seed` and, when `recursive` is set, every compound field
    /// value reachable from it, each exactly once. The queue is fully
    /// drained before this returns.
    pub fn run(mut self, seed: &'a dyn Reflect, recursive: bool) -> InspectReport {
        let mut report = InspectReport::default();

        self.visited.insert(Identity::of(seed));
        self.queue.push_back(seed);

        while let Some(current) = self.queue.pop_front() {
            self.classes.inspect_class(current.class(), &mut report);
            let record = self.visit(current, recursive);
            report.objects.push(record);
        }

        self.classes.drain(&mut report);
        debug_assert!(self.queue.is_empty());
        report
    }

    /// Read every declared field of `current`'s runtime class, rendering
    /// each value and queueing unseen compound targets when `recursive`.
    fn visit(&mut self, current: &'a dyn Reflect, recursive: bool) -> ObjectRecord {
        let class = current.class();
        let id = self.identities.token(current);
        let mut fields = Vec::with_capacity(class.fields.len());

        for field in &class.fields {
            let raw = match current.read_field(field.name) {
                Ok(value) => value,
                Err(err) => {
                    warn!(
                        class = class.name,
                        field = field.name,
                        error = %err,
                        "skipping unreadable field"
                    );
                    fields.push(FieldRecord {
                        name: field.name.to_string(),
                        value: FieldReport::Skipped { reason: err.to_string() },
                    });
                    continue;
                }
            };

            let classified = classify(&raw);
            fields.push(FieldRecord {
                name: field.name.to_string(),
                value: self.render(&classified),
            });
            if recursive {
                if let Classified::Compound(target) = classified {
                    self.follow(target);
                }
            }
        }

        ObjectRecord { class, id, fields }
    }

    /// Queue an unseen compound value and its unseen class.
    fn follow(&mut self, target: &'a dyn Reflect) {
        self.classes.discover(target.class());
        if self.visited.insert(Identity::of(target)) {
            trace!(class = target.class().name, "queued object");
            self.queue.push_back(target);
        }
    }

    fn render(&mut self, value: &Classified<'_>) -> FieldReport {
        match value {
            Classified::Null => FieldReport::Null,
            Classified::Primitive(s) | Classified::BoxedPrimitive(s) => {
                FieldReport::Scalar(s.to_string())
            }
            Classified::Array { elem_type, len, elements } => FieldReport::Array {
                elem_type: elem_type.to_string(),
                len: *len,
                elements: elements.clone(),
            },
            Classified::Compound(obj) => FieldReport::Ref {
                class: obj.class().name.to_string(),
                id: self.identities.token(*obj),
            },
        }
    }
}

impl Default for ObjectWalker<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Inspect a live object graph starting from `seed`.
///
/// The sole entry point: fails fast on a null or non-object seed. With
/// `recursive` set, every compound field value reachable from the seed is
/// visited exactly once; otherwise only the seed is reported.
pub fn inspect<'a>(seed: &Value<'a>, recursive: bool) -> Result<InspectReport, InspectError> {
    match seed {
        Value::Null => Err(InspectError::NullSeed),
        Value::Object(obj) => Ok(inspect_object(*obj, recursive)),
        other => Err(InspectError::NotAnObject {
            type_name: other.type_name().to_string(),
        }),
    }
}

/// Inspect a graph whose seed is already known to be an object.
pub fn inspect_object(seed: &dyn Reflect, recursive: bool) -> InspectReport {
    ObjectWalker::new().run(seed, recursive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{any, ClassInfo, Modifiers};
    use crate::reflect::FieldError;
    use once_cell::sync::Lazy;

    static PAIR: Lazy<ClassInfo> = Lazy::new(|| {
        ClassInfo::builder("demo.Pair")
            .extends(any())
            .field("left", "i32", Modifiers::PRIVATE)
            .field("right", "i32", Modifiers::PRIVATE)
            .build()
    });

    struct Pair {
        left: i32,
        right: i32,
    }

    impl Reflect for Pair {
        fn class(&self) -> &'static ClassInfo {
            &PAIR
        }

        fn read_field(&self, name: &str) -> Result<Value<'_>, FieldError> {
            match name {
                "left" => Ok(Value::i32(self.left)),
                "right" => Ok(Value::i32(self.right)),
                other => Err(FieldError::NoSuchField { name: other.to_string() }),
            }
        }
    }

    #[test]
    fn test_identity_table_assigns_dense_ordinals() {
        let a = Pair { left: 1, right: 2 };
        let b = Pair { left: 3, right: 4 };
        let mut table = IdentityTable::default();
        assert_eq!(table.token(&a), ObjectId(0));
        assert_eq!(table.token(&b), ObjectId(1));
        assert_eq!(table.token(&a), ObjectId(0));
    }

    #[test]
    fn test_seed_fields_are_captured_in_declaration_order() {
        let pair = Pair { left: 10, right: 20 };
        let report = inspect_object(&pair, false);
        let record = &report.objects[0];
        assert_eq!(record.class.name, "demo.Pair");
        assert_eq!(record.id, ObjectId(0));
        assert_eq!(
            record.fields,
            vec![
                FieldRecord {
                    name: "left".to_string(),
                    value: FieldReport::Scalar("10".to_string()),
                },
                FieldRecord {
                    name: "right".to_string(),
                    value: FieldReport::Scalar("20".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_null_seed_fails_fast() {
        assert!(matches!(
            inspect(&Value::Null, true),
            Err(InspectError::NullSeed)
        ));
    }

    #[test]
    fn test_scalar_seed_fails_fast() {
        let err = inspect(&Value::i32(3), false).unwrap_err();
        assert!(matches!(err, InspectError::NotAnObject { .. }));
        assert_eq!(
            err.to_string(),
            "cannot inspect a i32 seed; only object references have fields"
        );
    }

    #[test]
    fn test_object_seed_succeeds_through_entry_point() {
        let pair = Pair { left: 0, right: 0 };
        let report = inspect(&Value::object(&pair), true).unwrap();
        assert_eq!(report.objects.len(), 1);
        assert_eq!(report.classes.len(), 1);
    }
}
