//! Tweaks Core - definitions and values for runtime-adjustable settings
//!
//! This crate provides the data layer of the tweaks framework: strongly-typed
//! tweak definitions, the tagged value representation that lets heterogeneous
//! tweaks live in one store, and the pure clipping/rounding utilities applied
//! whenever a value crosses a boundary (read, write, display).
//!
//! # Core Abstractions
//!
//! - [`Tweak`] - An immutable, typed definition of one adjustable value:
//!   identity, default, and optional numeric bounds and step.
//! - [`TweakId`] - The (collection, group, name) identity triple.
//! - [`TweakValue`] - Tagged union over every supported value kind, used for
//!   caching and persistence.
//! - [`AnyTweak`] - Type-erased handle so definitions of different kinds can
//!   be collected, hashed, and compared uniformly.
//! - [`TweakableValue`] - The conversion seam between concrete Rust types and
//!   [`TweakValue`].
//!
//! # Value Kinds
//!
//! Booleans, signed and unsigned integers of every standard width, `f32`/`f64`,
//! RGBA colors, strings (optionally restricted to an enumerated set), UTC
//! dates, and zero-argument actions. See [`ValueKind`].
//!
//! # Example
//!
//! ```rust
//! use tweaks_core::Tweak;
//!
//! let columns: Tweak<u32> = Tweak::new("Layout", "Grid", "Columns", 3)
//!     .with_min(1)
//!     .with_max(12)
//!     .with_step(1);
//!
//! assert_eq!(*columns.default(), 3);
//! assert_eq!(columns.id().to_string(), "Layout.Grid.Columns");
//! ```
//!
//! # Design Principles
//!
//! - **No I/O**: persistence and notification live in `tweaks-store`.
//! - **Fail fast on definition bugs**: an out-of-range default panics at
//!   construction instead of surfacing as a runtime oddity.
//! - **Closed kind set**: every boundary (serialize, clip, render) switches
//!   exhaustively over [`ValueKind`].

pub mod clip;
pub mod color;
pub mod handle;
pub mod tweak;
pub mod tweakable;
pub mod value;

// Re-export main types at crate root
pub use clip::{clip, display_precision, round_to_step};
pub use color::Color;
pub use handle::AnyTweak;
pub use tweak::{Tweak, TweakId};
pub use tweakable::TweakableValue;
pub use value::{TweakValue, ValueKind};
