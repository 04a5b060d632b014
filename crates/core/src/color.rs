//! Color value types, one per color space.
//!
//! Provides `Hsv`, `Srgb`, `Srgba`, `LinearRgb`, `Xyz`, `OkLab` and `OkLch`.
//! Each is a plain `Copy` struct of `f64` components with public fields; the
//! type names the space so values cannot be fed to the wrong conversion by
//! accident. Every type converts losslessly to and from a fixed-size array
//! for callers that keep components in bulk storage.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// HSV color. Hue is in turns (`1.0` is a full circle); saturation and
/// value are nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Gamma-encoded sRGB color with components in [0, 1].
///
/// Serializes with full-precision named fields like the other types.
/// [`Srgb::to_hex`] and [`Srgb::from_hex`] give the 8-bit `"#rrggbb"` form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Gamma-encoded sRGB color with a straight alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Srgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Linear RGB color (gamma-decoded) on the sRGB primaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE 1931 XYZ tristimulus values, with Y = 1 for the reference white.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh (cylindrical form of OKLab). Hue is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Output of the HSV conversion: RGB with or without an alpha channel.
///
/// The variant records whether the caller supplied alpha, so the component
/// count is always known (3 for `Opaque`, 4 for `Translucent`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SrgbColor {
    Opaque(Srgb),
    Translucent(Srgba),
}

macro_rules! impl_triple {
    ($ty:ident { $f0:ident, $f1:ident, $f2:ident }) => {
        impl $ty {
            pub const fn new($f0: f64, $f1: f64, $f2: f64) -> Self {
                Self { $f0, $f1, $f2 }
            }

            pub const fn to_array(self) -> [f64; 3] {
                [self.$f0, self.$f1, self.$f2]
            }
        }

        impl From<[f64; 3]> for $ty {
            fn from([$f0, $f1, $f2]: [f64; 3]) -> Self {
                Self { $f0, $f1, $f2 }
            }
        }

        impl From<$ty> for [f64; 3] {
            fn from(c: $ty) -> Self {
                c.to_array()
            }
        }
    };
}

impl_triple!(Hsv { h, s, v });
impl_triple!(Srgb { r, g, b });
impl_triple!(LinearRgb { r, g, b });
impl_triple!(Xyz { x, y, z });
impl_triple!(OkLab { l, a, b });
impl_triple!(OkLch { l, c, h });

impl Xyz {
    /// Reference white of the sRGB matrix: the XYZ of linear `(1, 1, 1)`.
    pub const D65: Xyz = Xyz {
        x: 0.9505,
        y: 1.0,
        z: 1.089,
    };
}

impl Srgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| ColorError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are clamped and quantized to 8-bit (0–255) with rounding.
    pub fn to_hex(self) -> String {
        let Srgb { r, g, b } = self.clamped();
        let [r, g, b] = [r, g, b].map(|c| (c * 255.0).round() as u8);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Clamps every component to [0, 1].
    ///
    /// Conversions from OKLab or XYZ can land outside the sRGB gamut.
    pub fn clamped(self) -> Srgb {
        Srgb {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Attaches an alpha channel.
    pub const fn with_alpha(self, a: f64) -> Srgba {
        Srgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl Srgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Drops the alpha channel.
    pub const fn rgb(self) -> Srgb {
        Srgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f64; 4]> for Srgba {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Srgba> for [f64; 4] {
    fn from(c: Srgba) -> Self {
        c.to_array()
    }
}

impl SrgbColor {
    /// The color without its alpha channel.
    pub const fn rgb(&self) -> Srgb {
        match *self {
            SrgbColor::Opaque(rgb) => rgb,
            SrgbColor::Translucent(rgba) => rgba.rgb(),
        }
    }

    /// The alpha channel, if one was supplied.
    pub const fn alpha(&self) -> Option<f64> {
        match *self {
            SrgbColor::Opaque(_) => None,
            SrgbColor::Translucent(rgba) => Some(rgba.a),
        }
    }

    /// Number of components: 3 or 4.
    pub const fn len(&self) -> usize {
        match self {
            SrgbColor::Opaque(_) => 3,
            SrgbColor::Translucent(_) => 4,
        }
    }

    /// Always false; present for symmetry with [`SrgbColor::len`].
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Overwrites `buf` with this color's components.
    ///
    /// The buffer ends up with exactly [`SrgbColor::len`] elements; a stale
    /// alpha slot from a previous call is dropped.
    pub fn write_to(&self, buf: &mut Vec<f64>) {
        buf.clear();
        match *self {
            SrgbColor::Opaque(rgb) => buf.extend_from_slice(&rgb.to_array()),
            SrgbColor::Translucent(rgba) => buf.extend_from_slice(&rgba.to_array()),
        }
    }
}

impl TryFrom<&[f64]> for SrgbColor {
    type Error = ColorError;

    /// Builds an opaque color from 3 components or a translucent one from 4.
    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        match *components {
            [r, g, b] => Ok(SrgbColor::Opaque(Srgb { r, g, b })),
            [r, g, b, a] => Ok(SrgbColor::Translucent(Srgba { r, g, b, a })),
            _ => Err(ColorError::WrongArity {
                expected: "3 or 4",
                got: components.len(),
            }),
        }
    }
}
