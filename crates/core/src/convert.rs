//! End-to-end conversions between gamma-encoded sRGB and OKLab/OKLCh.
//!
//! Each function strictly chains the single-step conversions:
//!
//! ```text
//! sRGB <-> linear sRGB <-> XYZ <-> OKLab <-> OKLCh
//! ```
//!
//! Nothing is clamped along the way. OKLab values outside the sRGB gamut
//! come back with components outside [0, 1]; use [`Srgb::clamped`] to make
//! them displayable.

use crate::color::{OkLab, OkLch, Srgb};
use crate::gamma::{gamma_srgb_to_linear_srgb, linear_srgb_to_gamma_srgb};
use crate::lch::{lab_to_lch, lch_to_lab};
use crate::oklab::{oklab_to_xyz, xyz_to_oklab};
use crate::xyz::{linear_srgb_to_xyz, xyz_to_linear_srgb};

/// OKLab to sRGB via OKLab -> XYZ -> linear sRGB -> sRGB.
pub fn oklab_to_rgb(c: OkLab) -> Srgb {
    linear_srgb_to_gamma_srgb(xyz_to_linear_srgb(oklab_to_xyz(c)))
}

/// OKLCh to sRGB via OKLCh -> OKLab -> sRGB.
pub fn oklch_to_rgb(c: OkLch) -> Srgb {
    oklab_to_rgb(lch_to_lab(c))
}

/// sRGB to OKLab via sRGB -> linear sRGB -> XYZ -> OKLab.
pub fn rgb_to_oklab(c: Srgb) -> OkLab {
    xyz_to_oklab(linear_srgb_to_xyz(gamma_srgb_to_linear_srgb(c)))
}

/// sRGB to OKLCh via sRGB -> OKLab -> OKLCh.
pub fn rgb_to_oklch(c: Srgb) -> OkLch {
    lab_to_lch(rgb_to_oklab(c))
}
