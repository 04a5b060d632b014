//! Constant 3x3 transforms between linear color spaces.
//!
//! Forward matrices are compile-time constants. Inverses are derived once, on
//! first use, from the forward matrix so each pair is an exact algebraic
//! inverse rather than an independently rounded table.

use glam::{DMat3, DVec3};
use std::sync::LazyLock;

/// CIE XYZ to the LMS cone response used by OKLab (`M1`).
///
/// Coefficients from Björn Ottosson's OKLab derivation, listed column by column.
pub const XYZ_TO_LMS: DMat3 = DMat3::from_cols(
    DVec3::new(0.8189330101, 0.0329845436, 0.0482003018),
    DVec3::new(0.3618667424, 0.9293118715, 0.2643662691),
    DVec3::new(-0.1288597137, 0.0361456387, 0.6338517070),
);

/// Cube-rooted LMS to OKLab (`M2`).
pub const LMS_TO_OKLAB: DMat3 = DMat3::from_cols(
    DVec3::new(0.2104542553, 1.9779984951, 0.0259040371),
    DVec3::new(0.7936177850, -2.4285922050, 0.7827717662),
    DVec3::new(-0.0040720468, 0.4505937099, -0.8086757660),
);

/// Linear sRGB to CIE XYZ (sRGB primaries, D65 white).
///
/// Row form:
///
/// ```text
/// | 0.4124 0.3576 0.1805 |
/// | 0.2126 0.7152 0.0722 |
/// | 0.0193 0.1192 0.9505 |
/// ```
pub const LINEAR_SRGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124, 0.2126, 0.0193),
    DVec3::new(0.3576, 0.7152, 0.1192),
    DVec3::new(0.1805, 0.0722, 0.9505),
);

/// Inverse of [`XYZ_TO_LMS`].
pub static LMS_TO_XYZ: LazyLock<DMat3> = LazyLock::new(|| XYZ_TO_LMS.inverse());

/// Inverse of [`LMS_TO_OKLAB`].
pub static OKLAB_TO_LMS: LazyLock<DMat3> = LazyLock::new(|| LMS_TO_OKLAB.inverse());

/// Inverse of [`LINEAR_SRGB_TO_XYZ`].
pub static XYZ_TO_LINEAR_SRGB: LazyLock<DMat3> =
    LazyLock::new(|| LINEAR_SRGB_TO_XYZ.inverse());

/// Multiplies a column vector by `m`.
pub(crate) fn transform(m: &DMat3, v: [f64; 3]) -> [f64; 3] {
    m.mul_vec3(DVec3::from(v)).to_array()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn lms_pair_multiplies_to_identity() {
        let product = *LMS_TO_XYZ * XYZ_TO_LMS;
        assert!(
            product.abs_diff_eq(DMat3::IDENTITY, EPSILON),
            "M1^-1 * M1 = {product:?}"
        );
    }

    #[test]
    fn oklab_pair_multiplies_to_identity() {
        let product = *OKLAB_TO_LMS * LMS_TO_OKLAB;
        assert!(
            product.abs_diff_eq(DMat3::IDENTITY, EPSILON),
            "M2^-1 * M2 = {product:?}"
        );
    }

    #[test]
    fn srgb_pair_multiplies_to_identity() {
        let product = *XYZ_TO_LINEAR_SRGB * LINEAR_SRGB_TO_XYZ;
        assert!(
            product.abs_diff_eq(DMat3::IDENTITY, EPSILON),
            "RGB^-1 * RGB = {product:?}"
        );
    }

    #[test]
    fn transform_uses_row_layout_of_srgb_matrix() {
        // Red picks out the first column, i.e. the first entry of each row.
        let [x, y, z] = transform(&LINEAR_SRGB_TO_XYZ, [1.0, 0.0, 0.0]);
        assert_eq!(x, 0.4124);
        assert_eq!(y, 0.2126);
        assert_eq!(z, 0.0193);
    }

    #[test]
    fn srgb_white_maps_to_row_sums() {
        let [x, y, z] = transform(&LINEAR_SRGB_TO_XYZ, [1.0, 1.0, 1.0]);
        assert!((x - 0.9505).abs() < EPSILON, "x: {x}");
        assert!((y - 1.0).abs() < EPSILON, "y: {y}");
        assert!((z - 1.089).abs() < EPSILON, "z: {z}");
    }

    #[test]
    fn m1_first_row_matches_published_coefficients() {
        let row = XYZ_TO_LMS.row(0);
        assert_eq!(row, DVec3::new(0.8189330101, 0.3618667424, -0.1288597137));
    }

    #[test]
    fn m2_maps_unit_lms_to_unit_lightness() {
        // M2's first row sums to 1 and the others to 0, so gray has no chroma.
        let [l, a, b] = transform(&LMS_TO_OKLAB, [1.0, 1.0, 1.0]);
        assert!((l - 1.0).abs() < 1e-6, "l: {l}");
        assert!(a.abs() < 1e-6, "a: {a}");
        assert!(b.abs() < 1e-6, "b: {b}");
    }
}
