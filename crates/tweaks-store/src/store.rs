//! The tweak store facade.
//!
//! [`TweakStore`] is the single entry point combining the cache, grouping
//! tree, binding registry, and persistence queue. The UI layer reads through
//! [`current_value`](TweakStore::current_value), writes through
//! [`set_value`](TweakStore::set_value), and observes through
//! [`bind`](TweakStore::bind) / [`bind_multiple`](TweakStore::bind_multiple);
//! the host application supplies the tweak definitions and the enabled flag
//! at construction.
//!
//! # Failure semantics
//!
//! Store operations never fail. Reading or writing a tweak that was declared
//! but never registered logs a warning and resolves to the default; unbinding
//! an unknown id is a no-op; a disabled store resolves everything to defaults
//! and swallows writes. The system degrades to "everything at its default"
//! rather than surfacing errors to the host, since it is a developer-facing
//! debug aid.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tweaks_core::{AnyTweak, Tweak, TweakId, TweakValue, TweakableValue};

use crate::binding::{BindingId, BindingRegistry};
use crate::paths::{store_file_in, store_file_path};
use crate::persistency::Persistency;
use crate::snapshot::{self, Snapshot};
use crate::tree::TweakTree;

/// Builder for [`TweakStore`].
///
/// # Example
///
/// ```rust,no_run
/// use tweaks_core::Tweak;
/// use tweaks_store::TweakStore;
///
/// let columns: Tweak<u32> = Tweak::new("Layout", "Grid", "Columns", 3)
///     .with_min(1)
///     .with_max(12);
///
/// let store = TweakStore::builder("debug-menu")
///     .enabled(cfg!(debug_assertions))
///     .tweak(columns.any())
///     .build();
/// ```
pub struct TweakStoreBuilder {
    name: String,
    enabled: bool,
    container: Option<PathBuf>,
    tweaks: Vec<AnyTweak>,
}

impl TweakStoreBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            container: None,
            tweaks: Vec::new(),
        }
    }

    /// Set whether the store is live.
    ///
    /// A disabled store (typical for release builds) resolves every tweak to
    /// its default and ignores writes.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Override the directory holding the backing file.
    ///
    /// Used when several processes share a container directory; by default
    /// the file lives under the platform config directory (see
    /// [`crate::paths`]).
    pub fn container(mut self, dir: impl Into<PathBuf>) -> Self {
        self.container = Some(dir.into());
        self
    }

    /// Register one tweak.
    pub fn tweak(mut self, tweak: AnyTweak) -> Self {
        self.tweaks.push(tweak);
        self
    }

    /// Register a batch of tweaks.
    pub fn tweaks(mut self, tweaks: impl IntoIterator<Item = AnyTweak>) -> Self {
        self.tweaks.extend(tweaks);
        self
    }

    /// Construct the store: dedup registrations, build the grouping tree,
    /// load persisted values from disk, and spawn the persistence worker.
    ///
    /// Construction never fails; disk problems are logged and leave the
    /// store resolving defaults.
    pub fn build(self) -> TweakStore {
        let mut registered: HashMap<TweakId, AnyTweak> = HashMap::new();
        let mut ordered: Vec<AnyTweak> = Vec::new();
        for tweak in self.tweaks {
            if registered.contains_key(tweak.id()) {
                tracing::warn!(tweak = %tweak.id(), "duplicate tweak registration, skipping");
                continue;
            }
            registered.insert(tweak.id().clone(), tweak.clone());
            ordered.push(tweak);
        }

        let tree = TweakTree::build(&ordered);

        let path = match &self.container {
            Some(dir) => store_file_in(dir, &self.name),
            None => store_file_path(&self.name),
        };

        // Reconcile the persisted snapshot against the registered set:
        // entries for unknown tweaks are dropped (the app may have removed
        // the declaration), and entries whose kind no longer matches the
        // declaration are discarded in favor of the default.
        let mut cache: HashMap<TweakId, TweakValue> = HashMap::new();
        let by_key: HashMap<String, &AnyTweak> = ordered
            .iter()
            .map(|tweak| (tweak.id().to_string(), tweak))
            .collect();
        for (key, value) in snapshot::load(&path) {
            let Some(tweak) = by_key.get(&key) else {
                tracing::debug!(entry = %key, "persisted entry matches no registered tweak, dropping");
                continue;
            };
            if value.kind() != tweak.kind() {
                tracing::warn!(
                    tweak = %key,
                    expected = %tweak.kind(),
                    found = %value.kind(),
                    "persisted kind mismatch, falling back to default"
                );
                continue;
            }
            cache.insert(tweak.id().clone(), value);
        }

        tracing::debug!(
            store = %self.name,
            tweaks = registered.len(),
            persisted = cache.len(),
            enabled = self.enabled,
            "tweak store ready"
        );

        TweakStore {
            name: self.name,
            enabled: self.enabled,
            tweaks: registered,
            tree,
            cache,
            persistency: Persistency::spawn(path),
            bindings: BindingRegistry::new(),
        }
    }
}

/// Owning registry resolving, caching, and persisting tweak values.
///
/// One instance per application (or per isolated namespace via the store
/// name), constructed once at startup and threaded through consumers. All
/// mutating calls are expected to originate from a single logical thread
/// (typically the UI thread); only the disk writes happen in the background.
pub struct TweakStore {
    name: String,
    enabled: bool,
    tweaks: HashMap<TweakId, AnyTweak>,
    tree: TweakTree,
    cache: HashMap<TweakId, TweakValue>,
    persistency: Persistency,
    bindings: BindingRegistry,
}

impl TweakStore {
    /// Start building a store with the given name.
    ///
    /// The name scopes the backing file; two stores with the same name and
    /// container would race each other's file, so hosts must keep names
    /// distinct.
    pub fn builder(name: impl Into<String>) -> TweakStoreBuilder {
        TweakStoreBuilder::new(name)
    }

    /// Store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether values other than defaults can be observed.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The collection → group → tweak hierarchy for UI enumeration.
    pub fn tree(&self) -> &TweakTree {
        &self.tree
    }

    /// True if a tweak with this identity is registered.
    pub fn contains(&self, id: &TweakId) -> bool {
        self.tweaks.contains_key(id)
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> &Path {
        self.persistency.path()
    }

    /// Resolve the current value of a tweak.
    ///
    /// Returns the persisted value (clipped to the declared bounds) when the
    /// store is enabled and holds one, else the default. A tweak that was
    /// never registered with this store logs a warning and resolves to its
    /// default rather than panicking.
    pub fn current_value<T: TweakableValue>(&self, tweak: &Tweak<T>) -> T {
        let Some(registered) = self.tweaks.get(tweak.id()) else {
            tracing::warn!(
                tweak = %tweak.id(),
                store = %self.name,
                "tweak used outside its store, returning default"
            );
            return tweak.default().clone();
        };
        if let Some(tagged) = self.current_tagged(registered)
            && let Some(value) = T::from_value(&tagged)
        {
            return value;
        }
        tweak.default().clone()
    }

    /// Write a new value for a tweak.
    ///
    /// The raw value is cached and scheduled for an asynchronous disk write
    /// (clipping happens on read, so later-tightened bounds apply to already
    /// persisted values), then every matching binding fires synchronously
    /// before this returns. Writes to a disabled store, or for an
    /// unregistered tweak, are logged no-ops.
    pub fn set_value<T: TweakableValue>(&mut self, value: T, tweak: &Tweak<T>) {
        if !self.enabled {
            tracing::debug!(tweak = %tweak.id(), "store disabled, ignoring write");
            return;
        }
        if !self.tweaks.contains_key(tweak.id()) {
            tracing::warn!(
                tweak = %tweak.id(),
                store = %self.name,
                "tweak used outside its store, ignoring write"
            );
            return;
        }

        let tagged = value.to_value();
        tracing::debug!(tweak = %tweak.id(), value = %tagged, "set_value");
        self.cache.insert(tweak.id().clone(), tagged);
        self.schedule_save();
        self.fire(tweak.id().clone());
    }

    /// Observe one tweak.
    ///
    /// The callback fires exactly once, synchronously, with the pre-existing
    /// current value before this returns, then once more per subsequent
    /// write of that tweak until [`unbind`](Self::unbind).
    pub fn bind<T, F>(&mut self, tweak: &Tweak<T>, mut callback: F) -> BindingId
    where
        T: TweakableValue + 'static,
        F: FnMut(T) + 'static,
    {
        callback(self.current_value(tweak));
        if !self.tweaks.contains_key(tweak.id()) {
            // current_value already warned; writes to an unregistered tweak
            // are no-ops, so a retained callback could never fire again.
            return self.bindings.allocate_id();
        }
        let default = tweak.default().clone();
        self.bindings.register(
            tweak.id().clone(),
            Box::new(move |value| match T::from_value(value) {
                Some(v) => callback(v),
                None => callback(default.clone()),
            }),
        )
    }

    /// Remove a single-tweak binding. Unknown ids are silently ignored.
    pub fn unbind(&mut self, id: BindingId) {
        self.bindings.unregister(id);
    }

    /// Observe a set of tweaks with one value-less callback.
    ///
    /// Fires once at registration, then whenever any member of the set is
    /// written. Useful for layout code depending on several tweaks.
    pub fn bind_multiple<F>(&mut self, tweaks: &[AnyTweak], mut callback: F) -> BindingId
    where
        F: FnMut() + 'static,
    {
        callback();
        let members = tweaks.iter().map(|t| t.id().clone()).collect();
        self.bindings.register_multi(members, Box::new(callback))
    }

    /// Remove a multi-tweak binding. Unknown ids are silently ignored.
    pub fn unbind_multiple(&mut self, id: BindingId) {
        self.bindings.unregister_multi(id);
    }

    /// Revert every tweak to its default.
    ///
    /// Clears the persisted cache, schedules a save of the empty snapshot,
    /// and re-fires every binding with the post-reset values. Calling it
    /// twice is indistinguishable from calling it once.
    pub fn reset(&mut self) {
        tracing::debug!(store = %self.name, "reset to defaults");
        self.cache.clear();
        self.schedule_save();
        let tweaks = &self.tweaks;
        self.bindings
            .fire_all(|id| tweaks.get(id).and_then(|t| t.default().cloned()));
    }

    /// Plain-text listing of every registered tweak and its current value.
    ///
    /// One `identifier = value` line per non-action tweak, sorted by
    /// collection/group/name, with a `*` prefix on lines whose value differs
    /// from the default. Output-only; never re-parsed.
    pub fn export(&self) -> String {
        let mut out = String::new();
        for tweak in self.tree.iter() {
            if tweak.is_action() {
                continue;
            }
            let Some(default) = tweak.default() else {
                continue;
            };
            let current = self
                .current_tagged(tweak)
                .unwrap_or_else(|| default.clone());
            if current != *default {
                out.push_str("* ");
            }
            out.push_str(&format!("{} = {}\n", tweak.id(), current));
        }
        out
    }

    /// Block until every scheduled disk write has completed.
    ///
    /// Hosts call this at shutdown if they want a durability guarantee;
    /// tests use it before inspecting the backing file.
    pub fn flush(&self) {
        self.persistency.flush();
    }

    /// Resolve the current tagged value for a registered tweak: cached value
    /// clipped to the declared bounds, else the default. Disabled stores
    /// always resolve the default.
    fn current_tagged(&self, registered: &AnyTweak) -> Option<TweakValue> {
        if self.enabled
            && let Some(raw) = self.cache.get(registered.id())
        {
            if raw.kind() == registered.kind() {
                return Some(registered.clip(raw.clone()));
            }
            tracing::warn!(
                tweak = %registered.id(),
                expected = %registered.kind(),
                found = %raw.kind(),
                "cached kind mismatch, falling back to default"
            );
        }
        registered.default().cloned()
    }

    fn schedule_save(&self) {
        let values: Snapshot = self
            .cache
            .iter()
            .map(|(id, value)| (id.to_string(), value.clone()))
            .collect();
        self.persistency.schedule_save(values);
    }

    fn fire(&mut self, id: TweakId) {
        let Some(registered) = self.tweaks.get(&id) else {
            return;
        };
        let Some(current) = self.current_tagged(registered) else {
            return;
        };
        self.bindings.fire(&id, &current);
    }
}
