//! HSV to sRGB conversion.
//!
//! Hue is measured in turns and wraps with period 1; see
//! [`normalize_turns`](crate::hue::normalize_turns) for how non-finite hues
//! are coerced. The conversion never fails: every hue maps to a defined
//! point on the hexagon.

use crate::color::{Hsv, Srgb, SrgbColor};
use crate::hue::normalize_turns;

/// Converts HSV in [0, 1] to gamma-encoded sRGB in [0, 1].
///
/// Alpha is passed through unmodified when present: `Some(a)` yields
/// [`SrgbColor::Translucent`], `None` yields [`SrgbColor::Opaque`].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64, alpha: Option<f64>) -> SrgbColor {
    let rgb = hexcone(h, s, v);
    match alpha {
        Some(a) => SrgbColor::Translucent(rgb.with_alpha(a)),
        None => SrgbColor::Opaque(rgb),
    }
}

/// Like [`hsv_to_rgb`], writing the components into a reused buffer.
///
/// The buffer is overwritten with 3 components, or 4 when alpha is given.
pub fn hsv_to_rgb_into(h: f64, s: f64, v: f64, alpha: Option<f64>, buf: &mut Vec<f64>) {
    hsv_to_rgb(h, s, v, alpha).write_to(buf);
}

/// Converts a typed HSV color to sRGB.
pub fn hsv_to_srgb(c: Hsv) -> Srgb {
    hexcone(c.h, c.s, c.v)
}

fn hexcone(h: f64, s: f64, v: f64) -> Srgb {
    let c = v * s;
    let h = normalize_turns(h) * 6.0;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());

    // h == 6 (a full turn) lands in the last arm together with sector 5.
    let (r, g, b) = match h.floor() as i64 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = v - c;
    Srgb {
        r: r + m,
        g: g + m,
        b: b + m,
    }
}
