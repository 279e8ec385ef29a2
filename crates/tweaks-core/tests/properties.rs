//! Property-based tests for the tweaks-core value layer.
//!
//! Tests clipping invariants, color hex round-trips, and tagged value
//! serialization using proptest for randomized input generation.

use proptest::prelude::*;
use tweaks_core::{Color, TweakValue, clip, round_to_step};

#[derive(serde::Serialize, serde::Deserialize)]
struct Wrap {
    entry: TweakValue,
}

fn toml_roundtrip(value: &TweakValue) -> TweakValue {
    let text = toml::to_string(&Wrap {
        entry: value.clone(),
    })
    .expect("serialize");
    toml::from_str::<Wrap>(&text).expect("parse").entry
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any input and any ordered bounds, the clipped value lies within
    /// [min, max].
    #[test]
    fn clip_result_within_bounds(v in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let clipped = clip(v, Some(min), Some(max));
        prop_assert!(clipped >= min && clipped <= max);
    }

    /// Clipping is the identity for values already inside the bounds.
    #[test]
    fn clip_identity_inside_bounds(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let mut sorted = [a, b, c];
        sorted.sort_unstable();
        let [min, v, max] = sorted;
        prop_assert_eq!(clip(v, Some(min), Some(max)), v);
    }

    /// Clipping is idempotent.
    #[test]
    fn clip_idempotent(v in any::<f64>().prop_filter("finite", |f| f.is_finite()),
                       lo in -1e6f64..0.0, hi in 0.0f64..1e6) {
        let once = clip(v, Some(lo), Some(hi));
        prop_assert_eq!(clip(once, Some(lo), Some(hi)), once);
    }

    /// Rounding to a positive step always lands on a step multiple
    /// (within float tolerance) and moves the value by at most step/2.
    #[test]
    fn round_to_step_stays_close(v in -1e4f64..1e4, step in 0.001f64..10.0) {
        let rounded = round_to_step(v, step);
        prop_assert!((rounded - v).abs() <= step / 2.0 + 1e-9);
        let remainder = (rounded / step) - (rounded / step).round();
        prop_assert!(remainder.abs() < 1e-6);
    }

    /// Every color round-trips through its hex form, including alpha 0 and 255.
    #[test]
    fn color_hex_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let color = Color::rgba(r, g, b, a);
        prop_assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    /// Tagged integers survive TOML serialization at any width, signed or
    /// unsigned, without changing kind or payload.
    #[test]
    fn tagged_int_toml_roundtrip(v in any::<i64>()) {
        let original = TweakValue::Int(v);
        prop_assert_eq!(toml_roundtrip(&original), original);
    }

    /// The full unsigned 64-bit range round-trips. TOML integers are signed,
    /// so the payload travels as a decimal string.
    #[test]
    fn tagged_uint_toml_roundtrip(v in any::<u64>()) {
        let original = TweakValue::UInt(v);
        prop_assert_eq!(toml_roundtrip(&original), original);
    }

    /// Finite floats round-trip exactly.
    #[test]
    fn tagged_float_toml_roundtrip(v in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let original = TweakValue::Float(v);
        prop_assert_eq!(toml_roundtrip(&original), original);
    }
}
