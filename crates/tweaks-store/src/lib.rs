//! Value store, bindings, and disk persistence for the tweaks framework.
//!
//! This crate provides the runtime half of the tweaks system: a
//! [`TweakStore`] that resolves current values for the definitions declared
//! with `tweaks-core`, persists edits to a TOML backing file between
//! launches, and fires registered bindings synchronously on every write.
//!
//! # Features
//!
//! - **Value resolution**: persisted value if present (clipped to declared
//!   bounds), else the default; disabled stores always resolve defaults
//! - **Bindings**: per-tweak and multi-tweak observer callbacks
//! - **Persistence**: kind-tagged TOML snapshots written by a background
//!   queue, tolerant of missing or corrupt files
//! - **Grouping tree**: stable collection/group/tweak enumeration for UIs
//! - **Export**: plain-text listing of every tweak with changed-value markers
//!
//! # Example
//!
//! ```rust,no_run
//! use tweaks_core::Tweak;
//! use tweaks_store::TweakStore;
//!
//! let row_height: Tweak<f64> = Tweak::new("Layout", "List", "Row Height", 44.0)
//!     .with_min(20.0)
//!     .with_max(120.0);
//!
//! let mut store = TweakStore::builder("debug-menu")
//!     .enabled(cfg!(debug_assertions))
//!     .tweak(row_height.any())
//!     .build();
//!
//! // UI reads and observes:
//! println!("row height: {}", store.current_value(&row_height));
//! let binding = store.bind(&row_height, |h| println!("row height now {h}"));
//!
//! // Editing screen writes; the binding fires synchronously:
//! store.set_value(52.0, &row_height);
//! store.unbind(binding);
//! ```
//!
//! # Threading
//!
//! All store calls are expected to come from one logical thread (typically
//! the UI thread). The only background work is the persistence queue:
//! [`TweakStore::set_value`] returns before the write lands on disk, and
//! [`TweakStore::flush`] waits for it when durability matters.

mod binding;
mod error;
mod persistency;
mod store;

/// Platform-specific locations for store backing files.
pub mod paths;

/// On-disk snapshot format.
pub mod snapshot;

/// Grouping tree for UI enumeration.
pub mod tree;

pub use binding::BindingId;
pub use error::StoreError;
pub use store::{TweakStore, TweakStoreBuilder};
pub use tree::{Collection, Group, TweakTree};

/// Re-export commonly used types from tweaks-core
pub use tweaks_core::{AnyTweak, Color, Tweak, TweakId, TweakValue, TweakableValue, ValueKind};
