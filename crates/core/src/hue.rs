//! Hue normalization shared by the HSV and LCh conversions.
//!
//! HSV hue is measured in turns (one full circle is `1.0`); LCh hue is
//! measured in degrees.

/// Coerces an HSV hue, in turns, into the closed unit interval.
///
/// NaN and negative infinity become `0.0`, positive infinity becomes `1.0`
/// (a full turn, equivalent to `0.0` after the sector lookup). Finite values
/// outside `[0, 1]` wrap with period 1, so `-1/3` becomes `2/3`. Values
/// already in `[0, 1]`, including `1.0` itself, are returned unchanged.
pub fn normalize_turns(h: f64) -> f64 {
    if h.is_nan() || h == f64::NEG_INFINITY {
        0.0
    } else if h == f64::INFINITY {
        1.0
    } else if !(0.0..=1.0).contains(&h) {
        h.rem_euclid(1.0)
    } else {
        h
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
///
/// On `atan2` output, `[-180, 180]`, only negative angles move. NaN passes
/// through.
pub fn normalize_degrees(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid may round a tiny negative input up to exactly 360.
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}
