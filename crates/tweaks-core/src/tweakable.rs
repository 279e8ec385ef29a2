//! Conversion seam between concrete Rust types and [`TweakValue`].
//!
//! [`TweakableValue`] is implemented for the closed set of supported types:
//! `bool`, every standard integer width, `f32`/`f64`, `String`, [`Color`],
//! and `DateTime<Utc>`. The trait is how a typed [`Tweak<T>`](crate::Tweak)
//! moves values in and out of the dynamically-typed store cache: `to_value`
//! tags the value with its kind, `from_value` checks the tag and refuses
//! anything that does not match.
//!
//! Narrow integer types travel through the 64-bit carriers. A persisted value
//! that overflows the definition's width on the way back (say a `260` read
//! into a `Tweak<u8>`) is treated the same as a wrong-kind entry: the
//! conversion returns `None` and the caller falls back to the default.

use chrono::{DateTime, Utc};

use crate::color::Color;
use crate::value::{TweakValue, ValueKind};

/// A concrete Rust type that can back a tweak definition.
pub trait TweakableValue: Clone + core::fmt::Debug {
    /// The kind tag values of this type carry.
    const KIND: ValueKind;

    /// Convert into the tagged representation.
    fn to_value(&self) -> TweakValue;

    /// Convert back from the tagged representation.
    ///
    /// Returns `None` when the kind tag does not match `Self::KIND` or the
    /// payload does not fit (integer width overflow).
    fn from_value(value: &TweakValue) -> Option<Self>
    where
        Self: Sized;
}

impl TweakableValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn to_value(&self) -> TweakValue {
        TweakValue::Bool(*self)
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl TweakableValue for $t {
            const KIND: ValueKind = ValueKind::Int;

            fn to_value(&self) -> TweakValue {
                TweakValue::Int(i64::from(*self))
            }

            fn from_value(value: &TweakValue) -> Option<Self> {
                match value {
                    TweakValue::Int(v) => Self::try_from(*v).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl TweakableValue for $t {
            const KIND: ValueKind = ValueKind::UInt;

            fn to_value(&self) -> TweakValue {
                TweakValue::UInt(u64::from(*self))
            }

            fn from_value(value: &TweakValue) -> Option<Self> {
                match value {
                    TweakValue::UInt(v) => Self::try_from(*v).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl TweakableValue for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn to_value(&self) -> TweakValue {
        TweakValue::Float(f64::from(*self))
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::Float(v) => Some(*v as f32),
            _ => None,
        }
    }
}

impl TweakableValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn to_value(&self) -> TweakValue {
        TweakValue::Float(*self)
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl TweakableValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> TweakValue {
        TweakValue::Text(self.clone())
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl TweakableValue for Color {
    const KIND: ValueKind = ValueKind::Color;

    fn to_value(&self) -> TweakValue {
        TweakValue::Color(*self)
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::Color(v) => Some(*v),
            _ => None,
        }
    }
}

impl TweakableValue for DateTime<Utc> {
    const KIND: ValueKind = ValueKind::Date;

    fn to_value(&self) -> TweakValue {
        TweakValue::Date(*self)
    }

    fn from_value(value: &TweakValue) -> Option<Self> {
        match value {
            TweakValue::Date(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_roundtrip() {
        assert_eq!(bool::from_value(&true.to_value()), Some(true));
        assert_eq!(bool::from_value(&TweakValue::Int(1)), None);
    }

    #[test]
    fn narrow_integers_roundtrip_through_wide_carriers() {
        assert_eq!((-5i8).to_value(), TweakValue::Int(-5));
        assert_eq!(i8::from_value(&TweakValue::Int(-5)), Some(-5));
        assert_eq!(200u8.to_value(), TweakValue::UInt(200));
        assert_eq!(u8::from_value(&TweakValue::UInt(200)), Some(200));
    }

    #[test]
    fn width_overflow_is_a_mismatch() {
        assert_eq!(i8::from_value(&TweakValue::Int(300)), None);
        assert_eq!(u8::from_value(&TweakValue::UInt(300)), None);
        assert_eq!(u16::from_value(&TweakValue::UInt(u64::MAX)), None);
    }

    #[test]
    fn signed_and_unsigned_do_not_cross() {
        assert_eq!(u32::from_value(&TweakValue::Int(5)), None);
        assert_eq!(i32::from_value(&TweakValue::UInt(5)), None);
    }

    #[test]
    fn extreme_widths_roundtrip() {
        assert_eq!(i64::from_value(&i64::MIN.to_value()), Some(i64::MIN));
        assert_eq!(i64::from_value(&i64::MAX.to_value()), Some(i64::MAX));
        assert_eq!(u64::from_value(&u64::MAX.to_value()), Some(u64::MAX));
        assert_eq!(u64::from_value(&0u64.to_value()), Some(0));
    }

    #[test]
    fn float_widths() {
        assert_eq!(f32::from_value(&0.5f32.to_value()), Some(0.5));
        assert_eq!(f64::from_value(&(-2.25f64).to_value()), Some(-2.25));
        assert_eq!(f64::from_value(&TweakValue::Int(1)), None);
    }
}
