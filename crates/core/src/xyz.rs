//! Linear sRGB to and from CIE XYZ.
//!
//! A plain change of basis through [`LINEAR_SRGB_TO_XYZ`] and its inverse;
//! there is no nonlinearity at this stage.

use crate::color::{LinearRgb, Xyz};
use crate::matrix::{transform, LINEAR_SRGB_TO_XYZ, XYZ_TO_LINEAR_SRGB};

/// Converts linear sRGB to CIE XYZ.
pub fn linear_srgb_to_xyz(c: LinearRgb) -> Xyz {
    Xyz::from(transform(&LINEAR_SRGB_TO_XYZ, c.to_array()))
}

/// Converts CIE XYZ to linear sRGB. Out-of-gamut colors produce components
/// outside [0, 1].
pub fn xyz_to_linear_srgb(c: Xyz) -> LinearRgb {
    LinearRgb::from(transform(&XYZ_TO_LINEAR_SRGB, c.to_array()))
}
