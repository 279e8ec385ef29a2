//! Type-erased tweak handle.
//!
//! [`AnyTweak`] wraps any [`Tweak`] definition behind a uniform
//! identity/hash/equality contract so heterogeneous tweaks can be collected
//! in sets, trees, and binding groups. It carries the resolved view of the
//! definition: kind tag, default, bounds, and step, all in tagged form.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::clip::clip;
use crate::tweak::{Tweak, TweakId};
use crate::tweakable::TweakableValue;
use crate::value::{TweakValue, ValueKind};

/// A type-erased tweak definition.
///
/// Identity (equality, hashing, ordering) delegates to the
/// [`TweakId`] triple; two handles with the same triple are the
/// same tweak regardless of how they were produced.
#[derive(Debug, Clone)]
pub struct AnyTweak {
    id: TweakId,
    kind: ValueKind,
    default: Option<TweakValue>,
    min: Option<TweakValue>,
    max: Option<TweakValue>,
    step: Option<TweakValue>,
    options: Vec<String>,
}

impl AnyTweak {
    /// Erase a typed definition.
    pub fn from_definition<T: TweakableValue>(tweak: &Tweak<T>) -> Self {
        Self {
            id: tweak.id().clone(),
            kind: T::KIND,
            default: Some(tweak.default().to_value()),
            min: tweak.min().map(TweakableValue::to_value),
            max: tweak.max().map(TweakableValue::to_value),
            step: tweak.step().map(TweakableValue::to_value),
            options: tweak.options_vec(),
        }
    }

    /// Create an action tweak: a named, zero-argument callback slot with no
    /// value and nothing to persist.
    pub fn action(
        collection: impl Into<String>,
        group: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: TweakId::new(collection, group, name),
            kind: ValueKind::Action,
            default: None,
            min: None,
            max: None,
            step: None,
            options: Vec::new(),
        }
    }

    /// Identity triple.
    pub fn id(&self) -> &TweakId {
        &self.id
    }

    /// Kind tag of the underlying definition.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Default value in tagged form; `None` only for actions.
    pub fn default(&self) -> Option<&TweakValue> {
        self.default.as_ref()
    }

    /// Declared minimum in tagged form.
    pub fn min(&self) -> Option<&TweakValue> {
        self.min.as_ref()
    }

    /// Declared maximum in tagged form.
    pub fn max(&self) -> Option<&TweakValue> {
        self.max.as_ref()
    }

    /// Declared step in tagged form.
    pub fn step(&self) -> Option<&TweakValue> {
        self.step.as_ref()
    }

    /// Enumerated string options, empty unless declared.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// True when this handle is an action slot.
    pub fn is_action(&self) -> bool {
        self.kind == ValueKind::Action
    }

    /// Apply the declared bounds to a value of the matching numeric kind.
    ///
    /// Non-numeric values, and values whose kind does not match the declared
    /// bounds, pass through unchanged.
    pub fn clip(&self, value: TweakValue) -> TweakValue {
        match value {
            TweakValue::Int(v) => {
                TweakValue::Int(clip(v, bound_i64(self.min()), bound_i64(self.max())))
            }
            TweakValue::UInt(v) => {
                TweakValue::UInt(clip(v, bound_u64(self.min()), bound_u64(self.max())))
            }
            TweakValue::Float(v) => {
                TweakValue::Float(clip(v, bound_f64(self.min()), bound_f64(self.max())))
            }
            other => other,
        }
    }
}

fn bound_i64(bound: Option<&TweakValue>) -> Option<i64> {
    match bound {
        Some(TweakValue::Int(v)) => Some(*v),
        _ => None,
    }
}

fn bound_u64(bound: Option<&TweakValue>) -> Option<u64> {
    match bound {
        Some(TweakValue::UInt(v)) => Some(*v),
        _ => None,
    }
}

fn bound_f64(bound: Option<&TweakValue>) -> Option<f64> {
    match bound {
        Some(TweakValue::Float(v)) => Some(*v),
        _ => None,
    }
}

impl PartialEq for AnyTweak {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AnyTweak {}

impl Hash for AnyTweak {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for AnyTweak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.kind)
    }
}
