//! Chromatic adaptation stage: CAT02, Hunt-Pointer-Estevez, and the
//! post-adaptation response compression.
//!
//! The stimulus passes through three fixed steps before any appearance
//! correlate exists: sharpened cone responses (CAT02), a von Kries style
//! gain toward the adopted white, and fundamental cone responses
//! (Hunt-Pointer-Estevez) compressed by a luminance-dependent
//! nonlinearity.
//!
//! Every function here is pure. Out-of-domain arguments produce NaN
//! through plain `powf` semantics rather than raising.
//!
//! # Reference
//!
//! CIE 159:2004, "A colour appearance model for colour management systems:
//! CIECAM02".

use cam02_math::{Mat3, Vec3};

/// XYZ to CAT02 sharpened cone responses.
pub const XYZ_TO_CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// XYZ to Hunt-Pointer-Estevez fundamental cone responses.
pub const XYZ_TO_HPE: Mat3 = Mat3::from_rows([
    [0.38971, 0.68898, -0.07868],
    [-0.22981, 1.18340, 0.04641],
    [0.00000, 0.00000, 1.00000],
]);

/// Degree of adaptation D for a surround with maximum adaptation `f`
/// at adapting luminance `l_a` (cd/m²).
///
/// Clamped to [0, 1]; a NaN adapting luminance stays NaN.
///
/// # Formula
///
/// ```text
/// D = F * (1 - (1/3.6) * exp((-L_A - 42) / 92))
/// ```
#[inline]
pub fn degree_of_adaptation(f: f64, l_a: f64) -> f64 {
    (f * (1.0 - (1.0 / 3.6) * ((-l_a - 42.0) / 92.0).exp())).clamp(0.0, 1.0)
}

/// Luminance-level adaptation factor F_L at adapting luminance `l_a`.
///
/// # Formula
///
/// ```text
/// k   = 1 / (5*L_A + 1)
/// F_L = 0.2 * k^4 * (5*L_A) + 0.1 * (1 - k^4)^2 * (5*L_A)^(1/3)
/// ```
#[inline]
pub fn luminance_adaptation_factor(l_a: f64) -> f64 {
    let k = 1.0 / (5.0 * l_a + 1.0);
    let k4 = k * k * k * k;
    0.2 * k4 * (5.0 * l_a) + 0.1 * (1.0 - k4).powi(2) * (5.0 * l_a).powf(1.0 / 3.0)
}

/// Post-adaptation cone response compression (forward).
///
/// Odd-symmetric around zero with a +0.1 offset, so a zero cone signal
/// compresses to exactly 0.1.
#[inline]
pub fn post_adaptation_compress_fwd(v: f64, f_l: f64) -> f64 {
    let x = (f_l * v.abs() / 100.0).powf(0.42);
    (400.0 * x / (27.13 + x)).copysign(v) + 0.1
}

/// Post-adaptation cone response compression (inverse).
///
/// Defined for compressed magnitudes below 400; beyond that the inner
/// power sees a negative base and the result is NaN.
#[inline]
pub fn post_adaptation_compress_inv(v: f64, f_l: f64) -> f64 {
    let t = v - 0.1;
    let x = 27.13 * t.abs() / (400.0 - t.abs());
    (100.0 / f_l) * x.powf(1.0 / 0.42).copysign(t)
}

/// Achromatic response A from compressed cone responses.
///
/// # Formula
///
/// ```text
/// A = (2*R_a + G_a + B_a/20 - 0.305) * N_bb
/// ```
#[inline]
pub fn achromatic_response(rgb_a: Vec3, n_bb: f64) -> f64 {
    (rgb_a.dot(Vec3::new(2.0, 1.0, 1.0 / 20.0)) - 0.305) * n_bb
}
