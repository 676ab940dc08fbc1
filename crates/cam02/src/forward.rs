//! Forward transform: XYZ tristimulus to appearance correlates.

use cam02_math::Vec3;

use crate::adaptation::{achromatic_response, post_adaptation_compress_fwd, XYZ_TO_CAT02};
use crate::correlates::Correlates;
use crate::hue::{eccentricity_factor, hue_quadrature, wrap_hue};
use crate::viewing::ViewingConditions;

/// Computes all seven appearance correlates for a stimulus under the
/// given viewing conditions, in the reference convention (XYZ nominally
/// 0..100).
///
/// Never fails: out-of-domain stimuli (negative or non-finite channels)
/// propagate as non-finite correlates.
///
/// # Example
///
/// ```rust
/// use cam02::{xyz_to_cam02, Surround, ViewingConditions};
/// use cam02_math::Vec3;
///
/// let vc = ViewingConditions::new(
///     Vec3::new(95.05, 100.0, 108.88),
///     318.31,
///     20.0,
///     Surround::Average.induction_factors(),
/// );
/// let appearance = xyz_to_cam02(Vec3::new(19.01, 20.0, 21.78), &vc);
/// assert!((appearance.lightness.unwrap() - 41.7311).abs() < 1e-3);
/// assert!((appearance.hue_angle.unwrap() - 219.0484).abs() < 1e-3);
/// ```
pub fn xyz_to_cam02(xyz: Vec3, vc: &ViewingConditions) -> Correlates {
    // Sharpened cones, von Kries gain, fundamental cones, compression
    let rgb = XYZ_TO_CAT02 * xyz;
    let rgb_c = vc.gain * rgb;
    let rgb_p = vc.m_cat02_to_hpe * rgb_c;
    let rgb_a = Vec3::new(
        post_adaptation_compress_fwd(rgb_p.x, vc.f_l),
        post_adaptation_compress_fwd(rgb_p.y, vc.f_l),
        post_adaptation_compress_fwd(rgb_p.z, vc.f_l),
    );

    // Opponent dimensions and hue
    let opp_a = rgb_a.x - 12.0 * rgb_a.y / 11.0 + rgb_a.z / 11.0;
    let opp_b = (rgb_a.x + rgb_a.y - 2.0 * rgb_a.z) / 9.0;
    let h = wrap_hue(opp_b.atan2(opp_a).to_degrees());
    let hq = hue_quadrature(h);

    // Achromatic response, lightness, brightness
    let a = achromatic_response(rgb_a, vc.n_bb);
    let j = 100.0 * (a / vc.a_w).powf(vc.surround.c * vc.z);
    let q = brightness_from_lightness(j, vc);

    // Chroma, colorfulness, saturation
    let e_t = eccentricity_factor(h);
    let t = (50000.0 / 13.0) * vc.surround.n_c * vc.n_cb * e_t
        * (opp_a * opp_a + opp_b * opp_b).sqrt()
        / rgb_a.dot(Vec3::new(1.0, 1.0, 21.0 / 20.0));
    let c = t.powf(0.9) * (j / 100.0).sqrt() * (1.64 - 0.29_f64.powf(vc.n)).powf(0.73);
    let m = c * vc.f_l.powf(0.25);
    let s = 100.0 * (m / q).sqrt();

    Correlates {
        lightness: Some(j),
        chroma: Some(c),
        hue_angle: Some(h),
        saturation: Some(s),
        brightness: Some(q),
        colorfulness: Some(m),
        hue_quadrature: Some(hq),
    }
}

/// Brightness Q from lightness J under the given conditions.
///
/// ```text
/// Q = (4/c) * sqrt(J/100) * (A_w + 4) * F_L^0.25
/// ```
#[inline]
pub(crate) fn brightness_from_lightness(j: f64, vc: &ViewingConditions) -> f64 {
    (4.0 / vc.surround.c) * (j / 100.0).sqrt() * (vc.a_w + 4.0) * vc.f_l.powf(0.25)
}
