//! Inverse transform: appearance correlates back to XYZ tristimulus.

use cam02_math::Vec3;

use crate::adaptation::post_adaptation_compress_inv;
use crate::correlates::Correlates;
use crate::error::{CamError, CamResult};
use crate::forward::brightness_from_lightness;
use crate::hue::{eccentricity_factor, hue_angle_from_quadrature};
use crate::viewing::ViewingConditions;

/// Weight of the short cone in the achromatic sum.
const P_3: f64 = 21.0 / 20.0;

/// Recovers the XYZ stimulus from a partial correlate set, in the
/// reference convention.
///
/// Exactly one correlate per slot must be present: lightness J or
/// brightness Q, chroma C or colorfulness M or saturation s, and hue
/// angle h or hue quadrature H. Any other combination is a caller error
/// and is the only condition under which this function fails; numeric
/// excursions (negative lightness, non-finite inputs) come back as
/// non-finite tristimulus components instead.
///
/// # Example
///
/// ```rust
/// use cam02::{cam02_to_xyz, Correlates, Surround, ViewingConditions};
/// use cam02_math::Vec3;
///
/// let vc = ViewingConditions::new(
///     Vec3::new(95.05, 100.0, 108.88),
///     318.31,
///     20.0,
///     Surround::Average.induction_factors(),
/// );
/// let spec = Correlates::jch(41.731091132514, 0.104707757171, 219.048432658272);
/// let xyz = cam02_to_xyz(&spec, &vc)?;
/// assert!((xyz.x - 19.01).abs() < 1e-6);
/// assert!((xyz.y - 20.0).abs() < 1e-6);
/// # Ok::<(), cam02::CamError>(())
/// ```
pub fn cam02_to_xyz(spec: &Correlates, vc: &ViewingConditions) -> CamResult<Vec3> {
    let j = resolve_lightness(spec, vc)?;
    let c = resolve_chroma(spec, j, vc)?;
    let h = resolve_hue(spec)?;

    // Temporary magnitude t and achromatic response A
    let t = (c / ((j / 100.0).sqrt() * (1.64 - 0.29_f64.powf(vc.n)).powf(0.73))).powf(1.0 / 0.9);
    let e_t = eccentricity_factor(h);
    let a = vc.a_w * (j / 100.0).powf(1.0 / (vc.surround.c * vc.z));

    let p_1 = (50000.0 / 13.0) * vc.surround.n_c * vc.n_cb * e_t / t;
    let p_2 = a / vc.n_bb + 0.305;
    let (opp_a, opp_b) = opponent_dimensions(p_1, p_2, h);

    // Compressed cone responses from the achromatic and opponent signals
    let rgb_a = Vec3::new(
        (460.0 * p_2 + 451.0 * opp_a + 288.0 * opp_b) / 1403.0,
        (460.0 * p_2 - 891.0 * opp_a - 261.0 * opp_b) / 1403.0,
        (460.0 * p_2 - 220.0 * opp_a - 6300.0 * opp_b) / 1403.0,
    );
    let rgb_p = Vec3::new(
        post_adaptation_compress_inv(rgb_a.x, vc.f_l),
        post_adaptation_compress_inv(rgb_a.y, vc.f_l),
        post_adaptation_compress_inv(rgb_a.z, vc.f_l),
    );

    // Undo the cone-space change, the von Kries gain and the sharpening
    let rgb_c = vc.m_hpe_to_cat02 * rgb_p;
    let rgb = rgb_c / vc.gain;
    Ok(vc.m_cat02_to_xyz * rgb)
}

fn resolve_lightness(spec: &Correlates, vc: &ViewingConditions) -> CamResult<f64> {
    match (spec.lightness, spec.brightness) {
        (Some(j), None) => Ok(j),
        (None, Some(q)) => Ok(lightness_from_brightness(q, vc)),
        (j, q) => Err(CamError::UnresolvedLightness {
            j: j.is_some(),
            q: q.is_some(),
        }),
    }
}

fn resolve_chroma(spec: &Correlates, j: f64, vc: &ViewingConditions) -> CamResult<f64> {
    let f_l4 = vc.f_l.powf(0.25);
    match (spec.chroma, spec.colorfulness, spec.saturation) {
        (Some(c), None, None) => Ok(c),
        (None, Some(m), None) => Ok(m / f_l4),
        (None, None, Some(s)) => {
            let q = match spec.brightness {
                Some(q) => q,
                None => brightness_from_lightness(j, vc),
            };
            let m = (s / 100.0).powi(2) * q;
            Ok(m / f_l4)
        }
        (c, m, s) => Err(CamError::UnresolvedChroma {
            c: c.is_some(),
            m: m.is_some(),
            s: s.is_some(),
        }),
    }
}

fn resolve_hue(spec: &Correlates) -> CamResult<f64> {
    match (spec.hue_angle, spec.hue_quadrature) {
        (Some(h), None) => Ok(h),
        (None, Some(hq)) => Ok(hue_angle_from_quadrature(hq)),
        (h, hq) => Err(CamError::UnresolvedHue {
            h: h.is_some(),
            hq: hq.is_some(),
        }),
    }
}

/// Lightness J from brightness Q, the inverse of the Q formula.
#[inline]
fn lightness_from_brightness(q: f64, vc: &ViewingConditions) -> f64 {
    let root = vc.surround.c * q / (4.0 * (vc.a_w + 4.0) * vc.f_l.powf(0.25));
    100.0 * root * root
}

/// Solves the opponent pair (a, b) from the magnitudes p_1, p_2 and the
/// hue angle.
///
/// The branch follows the dominant trig component so the divisor stays
/// well-conditioned. An achromatic input sends t to 0 and p_1 to
/// infinity; the gate collapses to 0 there and the cosine branch
/// returns (0, 0). Both comparisons fail only when the trig terms are
/// NaN, so a non-finite hue stays on the non-finite path.
fn opponent_dimensions(p_1: f64, p_2: f64, h: f64) -> (f64, f64) {
    let hr = h.to_radians();
    let sin_h = hr.sin();
    let cos_h = hr.cos();

    let gate = if p_1.is_finite() { sin_h.abs() } else { 0.0 };
    let numerator = p_2 * (2.0 + P_3) * (460.0 / 1403.0);

    if gate >= cos_h.abs() {
        let p_4 = p_1 / sin_h;
        let b = numerator
            / (p_4 + (2.0 + P_3) * (220.0 / 1403.0) * (cos_h / sin_h) - 27.0 / 1403.0
                + P_3 * (6300.0 / 1403.0));
        (b * cos_h / sin_h, b)
    } else if gate < cos_h.abs() {
        let p_5 = p_1 / cos_h;
        let a = numerator
            / (p_5 + (2.0 + P_3) * (220.0 / 1403.0)
                - (27.0 / 1403.0 - P_3 * (6300.0 / 1403.0)) * (sin_h / cos_h));
        (a, a * sin_h / cos_h)
    } else {
        (f64::NAN, f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward::xyz_to_cam02;
    use crate::surround::{AVERAGE, DIM};
    use approx::assert_relative_eq;

    const D65_WHITE: Vec3 = Vec3::new(95.05, 100.0, 108.88);
    const A_WHITE: Vec3 = Vec3::new(109.85, 100.0, 35.58);

    fn assert_xyz_eq(got: Vec3, want: Vec3, tol: f64) {
        assert_relative_eq!(got.x, want.x, epsilon = tol);
        assert_relative_eq!(got.y, want.y, epsilon = tol);
        assert_relative_eq!(got.z, want.z, epsilon = tol);
    }

    #[test]
    fn test_jch_recovers_reference_case() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        let spec = Correlates::jch(41.731091132514, 0.104707757171, 219.048432658272);
        let xyz = cam02_to_xyz(&spec, &vc).unwrap();
        assert_xyz_eq(xyz, Vec3::new(19.01, 20.0, 21.78), 1e-9);
    }

    #[test]
    fn test_jmh_recovers_reference_case() {
        let vc = ViewingConditions::new(A_WHITE, 31.83, 20.0, AVERAGE);
        let spec = Correlates::jmh(42.531890485304, 44.542751773393, 248.904221759437);
        let xyz = cam02_to_xyz(&spec, &vc).unwrap();
        assert_xyz_eq(xyz, Vec3::new(19.01, 20.0, 21.78), 1e-9);
    }

    #[test]
    fn test_qsh_recovers_reference_case() {
        let vc = ViewingConditions::new(D65_WHITE, 31.83, 20.0, AVERAGE);
        let spec = Correlates::qsh(152.671221759087, 52.245573874916, 19.557378371177);
        let xyz = cam02_to_xyz(&spec, &vc).unwrap();
        assert_xyz_eq(xyz, Vec3::new(57.06, 43.06, 31.96), 1e-9);
    }

    #[test]
    fn test_quadrature_in_place_of_hue_angle() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        let spec = Correlates {
            lightness: Some(41.731091132514),
            chroma: Some(0.104707757171),
            hue_quadrature: Some(278.060735856628),
            ..Correlates::default()
        };
        let xyz = cam02_to_xyz(&spec, &vc).unwrap();
        assert_xyz_eq(xyz, Vec3::new(19.01, 20.0, 21.78), 1e-8);
    }

    #[test]
    fn test_round_trip_across_branches() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, DIM);
        let stimuli = [
            Vec3::new(19.01, 20.0, 21.78),
            Vec3::new(57.06, 43.06, 31.96),
            Vec3::new(3.53, 6.56, 2.14),
            Vec3::new(80.0, 30.0, 10.0),
            Vec3::new(10.0, 40.0, 60.0),
        ];
        for xyz in stimuli {
            let fwd = xyz_to_cam02(xyz, &vc);
            let spec = Correlates::jch(
                fwd.lightness.unwrap(),
                fwd.chroma.unwrap(),
                fwd.hue_angle.unwrap(),
            );
            let back = cam02_to_xyz(&spec, &vc).unwrap();
            assert_xyz_eq(back, xyz, 1e-9);
        }
    }

    #[test]
    fn test_missing_chroma_slot_is_reported() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        let spec = Correlates {
            lightness: Some(41.73),
            hue_angle: Some(219.05),
            ..Correlates::default()
        };
        assert_eq!(
            cam02_to_xyz(&spec, &vc),
            Err(CamError::UnresolvedChroma {
                c: false,
                m: false,
                s: false,
            })
        );
    }

    #[test]
    fn test_double_lightness_is_reported() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        let spec = Correlates {
            lightness: Some(41.73),
            brightness: Some(195.37),
            chroma: Some(0.1),
            hue_angle: Some(219.05),
            ..Correlates::default()
        };
        assert_eq!(
            cam02_to_xyz(&spec, &vc),
            Err(CamError::UnresolvedLightness { j: true, q: true })
        );
    }

    #[test]
    fn test_double_hue_is_reported() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        let spec = Correlates {
            lightness: Some(41.73),
            chroma: Some(0.1),
            hue_angle: Some(219.05),
            hue_quadrature: Some(278.06),
            ..Correlates::default()
        };
        assert_eq!(
            cam02_to_xyz(&spec, &vc),
            Err(CamError::UnresolvedHue { h: true, hq: true })
        );
    }

    #[test]
    fn test_empty_spec_is_reported() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        assert_eq!(
            cam02_to_xyz(&Correlates::default(), &vc),
            Err(CamError::UnresolvedLightness { j: false, q: false })
        );
    }

    #[test]
    fn test_non_finite_lightness_stays_non_finite() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        let spec = Correlates::jch(f64::NAN, 10.0, 20.0);
        let xyz = cam02_to_xyz(&spec, &vc).unwrap();
        assert!(!xyz.is_finite());
    }

    #[test]
    fn test_negative_lightness_stays_non_finite() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        let spec = Correlates::jch(-10.0, 10.0, 20.0);
        let xyz = cam02_to_xyz(&spec, &vc).unwrap();
        assert!(!xyz.is_finite());
    }

    #[test]
    fn test_achromatic_chroma_is_exact() {
        // C = 0 collapses the opponent pair to (0, 0) instead of dividing
        // by a vanishing trig term.
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        let spec = Correlates::jch(50.0, 0.0, 123.4);
        let xyz = cam02_to_xyz(&spec, &vc).unwrap();
        assert!(xyz.is_finite());
        let fwd = xyz_to_cam02(xyz, &vc);
        assert_relative_eq!(fwd.chroma.unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(fwd.lightness.unwrap(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_opponent_branches_cover_cardinal_hues() {
        let vc = ViewingConditions::new(D65_WHITE, 318.31, 20.0, AVERAGE);
        // 0 and 180 degrees exercise the cosine branch, 90 and 270 the
        // sine branch.
        for h in [0.0, 90.0, 180.0, 270.0] {
            let spec = Correlates::jch(45.0, 30.0, h);
            let xyz = cam02_to_xyz(&spec, &vc).unwrap();
            assert!(xyz.is_finite(), "h = {h}");
            let fwd = xyz_to_cam02(xyz, &vc);
            let diff = (fwd.hue_angle.unwrap() - h).abs();
            let circular = diff.min(360.0 - diff);
            assert!(circular < 1e-9, "h = {h}, got {:?}", fwd.hue_angle);
            assert_relative_eq!(fwd.chroma.unwrap(), 30.0, epsilon = 1e-9);
        }
    }
}
