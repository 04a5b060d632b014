//! CIE XYZ to and from OKLab.
//!
//! OKLab is two linear stages with a cube-root nonlinearity between them:
//! `M1` takes XYZ to an LMS cone response, each response is cube-rooted, and
//! `M2` takes the result to lightness and two opponent axes. The inverse runs
//! the same pipeline backwards with cubes instead of cube roots.
//!
//! The cube root is the real one, so negative LMS values (which occur for
//! XYZ outside the visible gamut) stay negative instead of turning into NaN.

use crate::color::{OkLab, Xyz};
use crate::matrix::{transform, LMS_TO_OKLAB, LMS_TO_XYZ, OKLAB_TO_LMS, XYZ_TO_LMS};

/// Converts CIE XYZ to OKLab.
///
/// Typical output ranges are L in [0, 1] and a, b in [-0.5, 0.5], but
/// nothing is clamped.
pub fn xyz_to_oklab(c: Xyz) -> OkLab {
    let lms = transform(&XYZ_TO_LMS, c.to_array());
    OkLab::from(transform(&LMS_TO_OKLAB, lms.map(f64::cbrt)))
}

/// Converts OKLab to CIE XYZ.
pub fn oklab_to_xyz(c: OkLab) -> Xyz {
    let lms_ = transform(&OKLAB_TO_LMS, c.to_array());
    Xyz::from(transform(&LMS_TO_XYZ, lms_.map(|v| v * v * v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: [f64; 3], expected: [f64; 3], tolerance: f64) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < tolerance,
                "component {i}: expected {expected:?}, got {actual:?}"
            );
        }
    }

    #[test]
    fn white_point_has_unit_lightness_and_no_chroma() {
        let lab = xyz_to_oklab(Xyz::new(0.95, 1.0, 1.089));
        assert_close(lab.to_array(), [1.0, 0.0, 0.0], 1e-3);

        let lab = xyz_to_oklab(Xyz::D65);
        assert_close(lab.to_array(), [1.0, 0.0, 0.0], 1e-3);
    }

    #[test]
    fn black_is_origin() {
        let lab = xyz_to_oklab(Xyz::new(0.0, 0.0, 0.0));
        assert_close(lab.to_array(), [0.0, 0.0, 0.0], 1e-12);
        let xyz = oklab_to_xyz(OkLab::new(0.0, 0.0, 0.0));
        assert_close(xyz.to_array(), [0.0, 0.0, 0.0], 1e-12);
    }

    #[test]
    fn unit_xyz_axes_match_published_values() {
        // Reference values from Ottosson's OKLab table.
        let x = xyz_to_oklab(Xyz::new(1.0, 0.0, 0.0));
        assert_close(x.to_array(), [0.450, 1.236, -0.019], 1e-3);
        let y = xyz_to_oklab(Xyz::new(0.0, 1.0, 0.0));
        assert_close(y.to_array(), [0.922, -0.671, 0.263], 1e-3);
        let z = xyz_to_oklab(Xyz::new(0.0, 0.0, 1.0));
        assert_close(z.to_array(), [0.153, -1.415, -0.449], 1e-3);
    }

    #[test]
    fn negative_cone_response_stays_finite() {
        // Pure Z drives the L cone negative.
        let lab = xyz_to_oklab(Xyz::new(0.0, 0.0, 1.0));
        assert!(lab.to_array().iter().all(|v| v.is_finite()), "{lab:?}");
        let back = oklab_to_xyz(lab);
        assert_close(back.to_array(), [0.0, 0.0, 1.0], 1e-9);
    }

    #[test]
    fn lightness_scales_gray_cubically_in_xyz() {
        // Halving L of a neutral divides XYZ by eight.
        let full = oklab_to_xyz(OkLab::new(1.0, 0.0, 0.0));
        let half = oklab_to_xyz(OkLab::new(0.5, 0.0, 0.0));
        for i in 0..3 {
            let ratio = half.to_array()[i] / full.to_array()[i];
            assert!((ratio - 0.125).abs() < 1e-9, "component {i}: ratio {ratio}");
        }
    }

    #[test]
    fn nan_propagates() {
        let lab = xyz_to_oklab(Xyz::new(f64::NAN, 0.5, 0.5));
        assert!(lab.l.is_nan());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn xyz_oklab_round_trip(
                x in 0.0_f64..=0.96,
                y in 0.0_f64..=1.0,
                z in 0.0_f64..=1.09,
            ) {
                let back = oklab_to_xyz(xyz_to_oklab(Xyz { x, y, z }));
                prop_assert!((back.x - x).abs() < 2e-2, "x: {} vs {x}", back.x);
                prop_assert!((back.y - y).abs() < 2e-2, "y: {} vs {y}", back.y);
                prop_assert!((back.z - z).abs() < 2e-2, "z: {} vs {z}", back.z);
                // The pipeline is exact up to rounding, far inside that bound.
                prop_assert!((back.y - y).abs() < 1e-9, "y: {} vs {y}", back.y);
            }

            #[test]
            fn oklab_xyz_round_trip(
                l in 0.0_f64..=1.0,
                a in -0.4_f64..=0.4,
                b in -0.4_f64..=0.4,
            ) {
                // The cube root magnifies rounding error near a zero cone response.
                let back = xyz_to_oklab(oklab_to_xyz(OkLab { l, a, b }));
                prop_assert!((back.l - l).abs() < 1e-4, "l: {} vs {l}", back.l);
                prop_assert!((back.a - a).abs() < 1e-4, "a: {} vs {a}", back.a);
                prop_assert!((back.b - b).abs() < 1e-4, "b: {} vs {b}", back.b);
            }
        }
    }
}
