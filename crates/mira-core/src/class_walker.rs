//! Breadth-first traversal over the class graph
//!
//! Walks superclass and interface edges from a starting class, visiting
//! each class at most once per traversal and emitting one record per
//! visit. The two runtime roots ([`any`](crate::class::any) and
//! [`metaclass`](crate::class::metaclass)) terminate the superclass chain
//! and are never queued.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::class::{ClassId, ClassInfo};
use crate::report::InspectReport;

/// Breadth-first walker over superclass and interface edges.
///
/// The work queue is FIFO and the visited set is keyed by class identity,
/// so shared interfaces and superclasses are emitted exactly once no
/// matter how many classes reach them. Class emission never fails.
#[derive(Debug, Default)]
pub struct ClassWalker {
    queue: VecDeque<&'static ClassInfo>,
    visited: FxHashSet<ClassId>,
}

impl ClassWalker {
    /// Create a walker with empty traversal state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the class was already emitted in this traversal.
    pub fn seen(&self, cls: &'static ClassInfo) -> bool {
        self.visited.contains(&cls.id())
    }

    /// Queue a class for inspection unless it was already visited or is
    /// already pending. The roots are never queued.
    pub fn discover(&mut self, cls: &'static ClassInfo) {
        if cls.is_root() || self.seen(cls) || self.pending(cls) {
            return;
        }
        trace!(class = cls.name, "queued class");
        self.queue.push_back(cls);
    }

    /// Inspect `cls` and every class pending on the work queue, draining
    /// the queue fully before returning.
    pub fn inspect_class(&mut self, cls: &'static ClassInfo, report: &mut InspectReport) {
        self.discover(cls);
        self.drain(report);
    }

    /// Drain the work queue, emitting one record per unvisited class.
    pub fn drain(&mut self, report: &mut InspectReport) {
        while let Some(cls) = self.queue.pop_front() {
            if !self.visited.insert(cls.id()) {
                continue;
            }
            if !cls.is_interface {
                if let Some(superclass) = cls.superclass {
                    self.discover(superclass);
                }
            }
            report.classes.push(cls);
            for &iface in &cls.interfaces {
                self.discover(iface);
            }
        }
    }

    fn pending(&self, cls: &'static ClassInfo) -> bool {
        let id = cls.id();
        self.queue.iter().any(|c| c.id() == id)
    }
}
