//! Tagged value representation shared by every tweak kind.
//!
//! A [`TweakValue`] is what the store caches and what the persistence layer
//! writes to disk. Each value carries its kind tag through serialization
//! (adjacent tagging), so a persisted boolean can never be read back as an
//! integer: the tag is part of the entry, and deserialization of a mismatched
//! entry simply fails at the boundary instead of reinterpreting bits.

use core::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// The closed set of kinds a tweak can be declared with.
///
/// [`TweakValue`] covers every kind except [`Action`](ValueKind::Action),
/// which is a zero-argument callback and carries no value at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// On/off switch.
    Bool,
    /// Signed integer (any width up to 64 bits).
    Int,
    /// Unsigned integer (any width up to 64 bits).
    UInt,
    /// Floating point (`f32` or `f64`).
    Float,
    /// RGBA color.
    Color,
    /// Free-form or enumerated string.
    Text,
    /// UTC date and time.
    Date,
    /// Zero-argument action; never persisted.
    Action,
}

impl ValueKind {
    /// Returns a human-readable name for the kind.
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Color => "color",
            ValueKind::Text => "text",
            ValueKind::Date => "date",
            ValueKind::Action => "action",
        }
    }

    /// Returns true for kinds with a total order that clipping applies to.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::UInt | ValueKind::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed tweak value, tagged with its kind.
///
/// Serializes as an adjacently tagged pair, e.g. in TOML:
///
/// ```toml
/// kind = "int"
/// value = 12
/// ```
///
/// Unsigned payloads cross the serialization boundary as decimal strings
/// (`value = "12"`): TOML integers are signed 64-bit, and a raw `u64` above
/// `i64::MAX` would fail to serialize at all.
///
/// Integer widths narrower than 64 bits travel through [`Int`](Self::Int) /
/// [`UInt`](Self::UInt); narrowing back down happens at the typed boundary
/// (see [`TweakableValue`](crate::TweakableValue)) and treats overflow as a
/// mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TweakValue {
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    UInt(#[serde(with = "uint_string")] u64),
    /// Floating point value.
    Float(f64),
    /// RGBA color value.
    Color(Color),
    /// String value.
    Text(String),
    /// UTC date value.
    Date(DateTime<Utc>),
}

impl TweakValue {
    /// Returns the kind tag of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            TweakValue::Bool(_) => ValueKind::Bool,
            TweakValue::Int(_) => ValueKind::Int,
            TweakValue::UInt(_) => ValueKind::UInt,
            TweakValue::Float(_) => ValueKind::Float,
            TweakValue::Color(_) => ValueKind::Color,
            TweakValue::Text(_) => ValueKind::Text,
            TweakValue::Date(_) => ValueKind::Date,
        }
    }
}

mod uint_string {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

impl fmt::Display for TweakValue {
    /// Renders the value the way the export listing shows it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TweakValue::Bool(v) => write!(f, "{v}"),
            TweakValue::Int(v) => write!(f, "{v}"),
            TweakValue::UInt(v) => write!(f, "{v}"),
            TweakValue::Float(v) => write!(f, "{v}"),
            TweakValue::Color(v) => write!(f, "{v}"),
            TweakValue::Text(v) => write!(f, "{v}"),
            TweakValue::Date(v) => {
                write!(f, "{}", v.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}
