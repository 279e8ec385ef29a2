//! Pure clipping and display-precision utilities.
//!
//! Clipping is applied every time a persisted or user-entered value is read
//! back, never when it is stored. A value saved before a bound was tightened
//! is silently pulled back into range on the next read instead of being
//! rejected.

/// Bound `value` to the optional `[min, max]` range.
///
/// Equivalent to `max(min, min(max, value))` with each bound applied only
/// when present. Values already inside the range pass through unchanged.
///
/// # Example
///
/// ```rust
/// use tweaks_core::clip;
///
/// assert_eq!(clip(150, Some(0), Some(100)), 100);
/// assert_eq!(clip(-3, Some(0), None), 0);
/// assert_eq!(clip(42, Some(0), Some(100)), 42);
/// ```
pub fn clip<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> T {
    let low = match min {
        Some(m) if value < m => m,
        _ => value,
    };
    match max {
        Some(m) if low > m => m,
        _ => low,
    }
}

/// Round `value` to the nearest multiple of `step`.
///
/// A zero, negative, or non-finite step leaves the value untouched.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    if step <= 0.0 || !step.is_finite() {
        return value;
    }
    (value / step).round() * step
}

/// Number of decimal places needed to display values quantized to `step`.
///
/// Used by stepper-style editors so `step = 0.25` renders as `0.25` rather
/// than `0.25000001`. Capped at 6 places; integer steps report 0.
pub fn display_precision(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    for places in 0..=6usize {
        let scale = 10f64.powi(places as i32);
        let scaled = step * scale;
        if (scaled - scaled.round()).abs() < 1e-9 {
            return places;
        }
    }
    6
}
