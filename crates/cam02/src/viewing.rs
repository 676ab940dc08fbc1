//! Viewing-condition parameters, precomputed once per environment.
//!
//! [`ViewingConditions`] folds the adopted white, adapting luminance,
//! background luminance and surround into every derived constant the
//! transforms need, so the per-stimulus work is a handful of matrix
//! multiplies and compressions. Forward and inverse both consume the same
//! precomputed set, which keeps the two directions exact mirrors of each
//! other.

use cam02_math::{Mat3, Vec3};

use crate::adaptation::{
    achromatic_response, degree_of_adaptation, luminance_adaptation_factor,
    post_adaptation_compress_fwd, XYZ_TO_CAT02, XYZ_TO_HPE,
};
use crate::surround::InductionFactors;

/// Precomputed parameters for one viewing environment.
///
/// # Example
///
/// ```rust
/// use cam02::{Surround, ViewingConditions};
/// use cam02_math::Vec3;
///
/// let vc = ViewingConditions::new(
///     Vec3::new(95.05, 100.0, 108.88),
///     318.31,
///     20.0,
///     Surround::Average.induction_factors(),
/// );
/// assert!((vc.a_w - 46.1882).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct ViewingConditions {
    /// Adopted white point (XYZ tristimulus, typically Y_w = 100).
    pub white: Vec3,
    /// Adapting field luminance L_A in cd/m².
    pub adapting_luminance: f64,
    /// Relative luminance of the background Y_b.
    pub background_luminance: f64,
    /// Surround induction factors (F, c, N_c).
    pub surround: InductionFactors,
    /// Background induction ratio n = Y_b / Y_w.
    pub n: f64,
    /// Base exponential nonlinearity z.
    pub z: f64,
    /// Luminance-level adaptation factor F_L.
    pub f_l: f64,
    /// Brightness induction factor N_bb.
    pub n_bb: f64,
    /// Chromatic induction factor N_cb.
    pub n_cb: f64,
    /// Degree of adaptation D.
    pub d: f64,
    /// Per-channel von Kries gain toward the adopted white.
    pub gain: Vec3,
    /// Achromatic response of the adapted white A_w.
    pub a_w: f64,
    /// CAT02 sharpened cone responses back to XYZ.
    pub m_cat02_to_xyz: Mat3,
    /// CAT02 responses to Hunt-Pointer-Estevez responses.
    pub m_cat02_to_hpe: Mat3,
    /// Hunt-Pointer-Estevez responses back to CAT02.
    pub m_hpe_to_cat02: Mat3,
}

impl ViewingConditions {
    /// Computes the parameter set for a viewing environment.
    ///
    /// The degree of adaptation follows the surround's F factor and the
    /// adapting luminance; use [`ViewingConditions::discounting_illuminant`]
    /// when the observer is assumed fully adapted.
    pub fn new(
        white: Vec3,
        adapting_luminance: f64,
        background_luminance: f64,
        surround: InductionFactors,
    ) -> Self {
        let d = degree_of_adaptation(surround.f, adapting_luminance);
        Self::with_degree(white, adapting_luminance, background_luminance, surround, d)
    }

    /// Parameter set with the illuminant fully discounted (D = 1),
    /// regardless of surround and adapting luminance.
    pub fn discounting_illuminant(
        white: Vec3,
        adapting_luminance: f64,
        background_luminance: f64,
        surround: InductionFactors,
    ) -> Self {
        Self::with_degree(white, adapting_luminance, background_luminance, surround, 1.0)
    }

    fn with_degree(
        white: Vec3,
        adapting_luminance: f64,
        background_luminance: f64,
        surround: InductionFactors,
        d: f64,
    ) -> Self {
        let m_cat02_to_xyz = XYZ_TO_CAT02.inverse().unwrap_or(Mat3::IDENTITY);
        let m_hpe_to_xyz = XYZ_TO_HPE.inverse().unwrap_or(Mat3::IDENTITY);
        let m_cat02_to_hpe = XYZ_TO_HPE.mul_mat(&m_cat02_to_xyz);
        let m_hpe_to_cat02 = XYZ_TO_CAT02.mul_mat(&m_hpe_to_xyz);

        let y_w = white.y;
        let rgb_w = XYZ_TO_CAT02 * white;
        let gain = Vec3::new(
            d * y_w / rgb_w.x + 1.0 - d,
            d * y_w / rgb_w.y + 1.0 - d,
            d * y_w / rgb_w.z + 1.0 - d,
        );

        let f_l = luminance_adaptation_factor(adapting_luminance);
        let n = background_luminance / y_w;
        let z = 1.48 + n.sqrt();
        let n_bb = 0.725 * (1.0 / n).powf(0.2);
        let n_cb = n_bb;

        // Achromatic reference: the white itself through the full stage
        let rgb_wc = gain * rgb_w;
        let rgb_pw = m_cat02_to_hpe * rgb_wc;
        let rgb_aw = Vec3::new(
            post_adaptation_compress_fwd(rgb_pw.x, f_l),
            post_adaptation_compress_fwd(rgb_pw.y, f_l),
            post_adaptation_compress_fwd(rgb_pw.z, f_l),
        );
        let a_w = achromatic_response(rgb_aw, n_bb);

        Self {
            white,
            adapting_luminance,
            background_luminance,
            surround,
            n,
            z,
            f_l,
            n_bb,
            n_cb,
            d,
            gain,
            a_w,
            m_cat02_to_xyz,
            m_cat02_to_hpe,
            m_hpe_to_cat02,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surround::{AVERAGE, DIM};
    use approx::assert_relative_eq;

    const D65_WHITE: Vec3 = Vec3::new(95.05, 100.0, 108.88);
    const A_WHITE: Vec3 = Vec3::new(109.85, 100.0, 35.58);

    #[test]
    fn test_derived_constants() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        assert_relative_eq!(vc.n, 0.2, epsilon = 1e-12);
        assert_relative_eq!(vc.z, 1.9272135954999579, epsilon = 1e-12);
        assert_relative_eq!(vc.n_bb, 1.0003040045593807, epsilon = 1e-12);
        assert_relative_eq!(vc.n_cb, 1.0003040045593807, epsilon = 1e-12);
        assert_relative_eq!(vc.f_l, 1.16754446414718, epsilon = 1e-10);
        assert_relative_eq!(vc.d, 0.9944687800884374, epsilon = 1e-12);
    }

    #[test]
    fn test_gain_vector() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        assert_relative_eq!(vc.gain.x, 1.053106537399, epsilon = 1e-9);
        assert_relative_eq!(vc.gain.y, 0.966027366553, epsilon = 1e-9);
        assert_relative_eq!(vc.gain.z, 0.920256601247, epsilon = 1e-9);
    }

    #[test]
    fn test_achromatic_white() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        assert_relative_eq!(vc.a_w, 46.188208791352686, epsilon = 1e-9);

        let vc = ViewingConditions::new(D65_WHITE, 31.83, 20.0, AVERAGE);
        assert_relative_eq!(vc.a_w, 33.79529686759698, epsilon = 1e-9);

        let vc = ViewingConditions::new(A_WHITE, 318.31, 20.0, AVERAGE);
        assert_relative_eq!(vc.a_w, 46.19247228839134, epsilon = 1e-9);

        let vc = ViewingConditions::new(A_WHITE, 31.83, 20.0, AVERAGE);
        assert_relative_eq!(vc.a_w, 33.86551849751419, epsilon = 1e-9);
    }

    #[test]
    fn test_discounting_illuminant() {
        let vc = ViewingConditions::discounting_illuminant(D65_WHITE, 318.31, 20.0, AVERAGE);
        assert_eq!(vc.d, 1.0);
        assert_relative_eq!(vc.a_w, 46.189313005677, epsilon = 1e-8);
        // Fully adapted gain normalizes each channel exactly to Y_w.
        let rgb_w = XYZ_TO_CAT02 * D65_WHITE;
        assert_relative_eq!(vc.gain.x * rgb_w.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(vc.gain.y * rgb_w.y, 100.0, epsilon = 1e-9);
        assert_relative_eq!(vc.gain.z * rgb_w.z, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dim_changes_degree() {
        let avg = ViewingConditions::new(D65_WHITE, 31.83, 20.0, AVERAGE);
        let dim = ViewingConditions::new(D65_WHITE, 31.83, 20.0, DIM);
        assert_relative_eq!(dim.d, 0.7879482388273639, epsilon = 1e-12);
        assert!(dim.d < avg.d);
    }

    #[test]
    fn test_matrix_products_invert() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        let id = vc.m_cat02_to_hpe * vc.m_hpe_to_cat02;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((id[i][j] - expected).abs() < 1e-12);
            }
        }
        let id = XYZ_TO_CAT02 * vc.m_cat02_to_xyz;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((id[i][j] - expected).abs() < 1e-12);
            }
        }
    }
}
