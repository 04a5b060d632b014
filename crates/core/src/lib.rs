#![deny(unsafe_code)]
//! Color-space conversions for huekit.
//!
//! Provides value types for HSV, gamma-encoded sRGB, linear sRGB, CIE XYZ,
//! OKLab and OKLCh (`Hsv`, `Srgb`, `LinearRgb`, `Xyz`, `OkLab`, `OkLch`) and
//! pure, allocation-free conversion functions between them. All math is
//! `f64`. The only shared state is a handful of constant matrices.
//!
//! ```
//! use huekit_core::{hsv_to_rgb, rgb_to_oklch, Srgb};
//!
//! let red = hsv_to_rgb(0.0, 1.0, 1.0, None).rgb();
//! assert_eq!(red, Srgb::new(1.0, 0.0, 0.0));
//!
//! let lch = rgb_to_oklch(Srgb::new(0.1, 0.5, 0.8));
//! assert!((lch.h - 248.0).abs() < 0.5);
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod gamma;
pub mod hsv;
pub mod hue;
pub mod lch;
pub mod matrix;
pub mod oklab;
pub mod xyz;

pub use color::{Hsv, LinearRgb, OkLab, OkLch, Srgb, SrgbColor, Srgba, Xyz};
pub use convert::{oklab_to_rgb, oklch_to_rgb, rgb_to_oklab, rgb_to_oklch};
pub use error::ColorError;
pub use gamma::{gamma_srgb_to_linear_srgb, linear_srgb_to_gamma_srgb};
pub use hsv::{hsv_to_rgb, hsv_to_rgb_into, hsv_to_srgb};
pub use lch::{lab_to_lch, lch_to_lab, oklab_to_oklch, oklch_to_oklab, Cartesian, Polar};
pub use oklab::{oklab_to_xyz, xyz_to_oklab};
pub use xyz::{linear_srgb_to_xyz, xyz_to_linear_srgb};
