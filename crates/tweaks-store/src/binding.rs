//! Binding registry: callbacks fired on tweak value changes.
//!
//! Two shapes of binding exist. A *single* binding observes one tweak and
//! receives the new value; registrations for the same tweak fire in
//! registration order. A *multi* binding observes a set of tweaks and takes
//! no value argument; it fires whenever any member changes (useful for
//! layouts depending on several tweaks at once). Every write scans the multi
//! list linearly, which is fine at UI-scale binding counts.

use std::collections::{HashMap, HashSet};

use tweaks_core::{TweakId, TweakValue};

/// Opaque identifier returned by `bind`/`bind_multiple`, used to unbind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

pub(crate) type ValueCallback = Box<dyn FnMut(&TweakValue)>;
pub(crate) type GroupCallback = Box<dyn FnMut()>;

struct MultiBinding {
    id: BindingId,
    members: HashSet<TweakId>,
    callback: GroupCallback,
}

/// Registry of single- and multi-tweak bindings.
#[derive(Default)]
pub(crate) struct BindingRegistry {
    next_id: u64,
    single: HashMap<TweakId, Vec<(BindingId, ValueCallback)>>,
    multi: Vec<MultiBinding>,
}

impl BindingRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh id without attaching a callback. Unbinding such an
    /// id is a no-op, like any other unknown id.
    pub(crate) fn allocate_id(&mut self) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a single-tweak binding. Does not fire the callback; the
    /// store handles the initial synchronous invocation.
    pub(crate) fn register(&mut self, tweak: TweakId, callback: ValueCallback) -> BindingId {
        let id = self.allocate_id();
        self.single.entry(tweak).or_default().push((id, callback));
        id
    }

    /// Remove a single-tweak binding. Unknown ids are a silent no-op.
    pub(crate) fn unregister(&mut self, id: BindingId) {
        for list in self.single.values_mut() {
            list.retain(|(bound, _)| *bound != id);
        }
        self.single.retain(|_, list| !list.is_empty());
    }

    /// Register a multi-tweak binding over a member set.
    pub(crate) fn register_multi(
        &mut self,
        members: HashSet<TweakId>,
        callback: GroupCallback,
    ) -> BindingId {
        let id = self.allocate_id();
        self.multi.push(MultiBinding {
            id,
            members,
            callback,
        });
        id
    }

    /// Remove a multi-tweak binding. Unknown ids are a silent no-op.
    pub(crate) fn unregister_multi(&mut self, id: BindingId) {
        self.multi.retain(|binding| binding.id != id);
    }

    /// Fan out one write: exact single bindings in registration order, then
    /// every multi binding whose member set contains the written tweak.
    pub(crate) fn fire(&mut self, tweak: &TweakId, value: &TweakValue) {
        if let Some(list) = self.single.get_mut(tweak) {
            for (_, callback) in list.iter_mut() {
                callback(value);
            }
        }
        for binding in &mut self.multi {
            if binding.members.contains(tweak) {
                (binding.callback)();
            }
        }
    }

    /// Fire every registered binding, resolving each single binding's
    /// current value through `resolve`. Used by `reset`.
    pub(crate) fn fire_all(&mut self, resolve: impl Fn(&TweakId) -> Option<TweakValue>) {
        for (tweak, list) in &mut self.single {
            if let Some(value) = resolve(tweak) {
                for (_, callback) in list.iter_mut() {
                    callback(&value);
                }
            }
        }
        for binding in &mut self.multi {
            (binding.callback)();
        }
    }

    #[cfg(test)]
    pub(crate) fn single_count(&self) -> usize {
        self.single.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn id(name: &str) -> TweakId {
        TweakId::new("C", "G", name)
    }

    fn recorder() -> (Rc<RefCell<Vec<i64>>>, Rc<RefCell<Vec<i64>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (log.clone(), log)
    }

    #[test]
    fn single_bindings_fire_in_registration_order() {
        let mut registry = BindingRegistry::new();
        let (log, log_handle) = recorder();
        let log2 = log.clone();

        registry.register(
            id("a"),
            Box::new(move |v| {
                if let TweakValue::Int(n) = v {
                    log_handle.borrow_mut().push(*n * 10);
                }
            }),
        );
        registry.register(
            id("a"),
            Box::new(move |v| {
                if let TweakValue::Int(n) = v {
                    log2.borrow_mut().push(*n * 100);
                }
            }),
        );

        registry.fire(&id("a"), &TweakValue::Int(2));
        assert_eq!(*log.borrow(), vec![20, 200]);
    }

    #[test]
    fn fire_skips_unrelated_tweaks() {
        let mut registry = BindingRegistry::new();
        let (log, log_handle) = recorder();

        registry.register(
            id("a"),
            Box::new(move |_| log_handle.borrow_mut().push(1)),
        );
        registry.fire(&id("b"), &TweakValue::Int(0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn unregister_stops_invocations_and_is_idempotent() {
        let mut registry = BindingRegistry::new();
        let (log, log_handle) = recorder();

        let binding = registry.register(
            id("a"),
            Box::new(move |_| log_handle.borrow_mut().push(1)),
        );
        registry.fire(&id("a"), &TweakValue::Int(0));
        registry.unregister(binding);
        registry.fire(&id("a"), &TweakValue::Int(0));
        // Unknown/already-removed id: silent no-op.
        registry.unregister(binding);
        registry.unregister(BindingId(999));

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(registry.single_count(), 0);
    }

    #[test]
    fn multi_binding_fires_for_any_member() {
        let mut registry = BindingRegistry::new();
        let count = Rc::new(RefCell::new(0));
        let count_handle = count.clone();

        let members: HashSet<TweakId> = [id("a"), id("b")].into_iter().collect();
        let binding =
            registry.register_multi(members, Box::new(move || *count_handle.borrow_mut() += 1));

        registry.fire(&id("a"), &TweakValue::Bool(true));
        registry.fire(&id("b"), &TweakValue::Bool(true));
        registry.fire(&id("c"), &TweakValue::Bool(true));
        assert_eq!(*count.borrow(), 2);

        registry.unregister_multi(binding);
        registry.fire(&id("a"), &TweakValue::Bool(true));
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn fire_all_hits_every_binding() {
        let mut registry = BindingRegistry::new();
        let (log, log_handle) = recorder();
        let count = Rc::new(RefCell::new(0));
        let count_handle = count.clone();

        registry.register(
            id("a"),
            Box::new(move |v| {
                if let TweakValue::Int(n) = v {
                    log_handle.borrow_mut().push(*n);
                }
            }),
        );
        registry.register_multi(
            [id("a")].into_iter().collect(),
            Box::new(move || *count_handle.borrow_mut() += 1),
        );

        registry.fire_all(|_| Some(TweakValue::Int(42)));
        assert_eq!(*log.borrow(), vec![42]);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn binding_ids_are_unique_across_shapes() {
        let mut registry = BindingRegistry::new();
        let a = registry.register(id("a"), Box::new(|_| {}));
        let b = registry.register_multi(HashSet::new(), Box::new(|| {}));
        let c = registry.register(id("b"), Box::new(|_| {}));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
