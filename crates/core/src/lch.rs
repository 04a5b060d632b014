//! Cartesian Lab to and from cylindrical LCh.
//!
//! The transform does not depend on how a, b were derived, so it is generic
//! over any Lab-shaped space through the [`Cartesian`] and [`Polar`] traits.
//! `OkLab`/`OkLch` implement them, as does a raw `[f64; 3]` for callers that
//! track the space themselves.

use crate::color::{OkLab, OkLch};
use crate::hue::normalize_degrees;

/// A lightness plus two opponent axes, `[l, a, b]`.
pub trait Cartesian: Copy + Into<[f64; 3]> {
    /// The cylindrical form of this space.
    type Polar: From<[f64; 3]>;
}

/// A lightness, chroma, and hue in degrees, `[l, c, h]`.
pub trait Polar: Copy + Into<[f64; 3]> {
    /// The Cartesian form of this space.
    type Cartesian: From<[f64; 3]>;
}

impl Cartesian for OkLab {
    type Polar = OkLch;
}

impl Polar for OkLch {
    type Cartesian = OkLab;
}

impl Cartesian for [f64; 3] {
    type Polar = [f64; 3];
}

impl Polar for [f64; 3] {
    type Cartesian = [f64; 3];
}

/// Converts Lab to LCh. Hue is reported in degrees in [0, 360).
///
/// A neutral color `(0, 0)` gets hue 0. Signed zeros follow `atan2`, so
/// `(-0, -0)` gets hue 180 and `(-0, 0)` gets 180 too.
pub fn lab_to_lch<C: Cartesian>(c: C) -> C::Polar {
    let [l, a, b]: [f64; 3] = c.into();
    let chroma = a.hypot(b);
    let h = normalize_degrees(b.atan2(a).to_degrees());
    [l, chroma, h].into()
}

/// Converts LCh to Lab. Hue may be any angle in degrees.
pub fn lch_to_lab<P: Polar>(c: P) -> P::Cartesian {
    let [l, chroma, h]: [f64; 3] = c.into();
    let (sin, cos) = h.to_radians().sin_cos();
    [l, chroma * cos, chroma * sin].into()
}

/// Converts OKLab to OKLCh.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    lab_to_lch(c)
}

/// Converts OKLCh to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    lch_to_lab(c)
}
