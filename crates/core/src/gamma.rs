//! The piecewise sRGB transfer function.
//!
//! Both directions apply the same curve to each channel independently: a
//! linear toe near black joined to a 2.4 power segment.

use crate::color::{LinearRgb, Srgb};

/// Applies sRGB gamma to convert a single linear component to sRGB.
pub fn linear_to_gamma(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        // Same curve as 1.055 * c^(1/2.4) - 0.055, exact at c = 1.
        1.0 + 1.055 * (c.powf(1.0 / 2.4) - 1.0)
    }
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
pub fn gamma_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma.
pub fn linear_srgb_to_gamma_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_to_gamma(c.r),
        g: linear_to_gamma(c.g),
        b: linear_to_gamma(c.b),
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn gamma_srgb_to_linear_srgb(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: gamma_to_linear(c.r),
        g: gamma_to_linear(c.g),
        b: gamma_to_linear(c.b),
    }
}
