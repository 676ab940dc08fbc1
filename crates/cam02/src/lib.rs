//! # cam02
//!
//! CIECAM02 color appearance model: forward and inverse transforms.
//!
//! Given a stimulus in CIE XYZ and a description of the viewing
//! conditions, the forward transform predicts the seven appearance
//! correlates of CIE 159:2004:
//!
//! | Symbol | Attribute      | Reference range |
//! |--------|----------------|-----------------|
//! | J      | lightness      | 0..100          |
//! | C      | chroma         | 0..open         |
//! | h      | hue angle      | 0..360 degrees  |
//! | s      | saturation     | 0..open         |
//! | Q      | brightness     | 0..open         |
//! | M      | colorfulness   | 0..open         |
//! | H      | hue quadrature | 0..400          |
//!
//! The inverse transform recovers XYZ from any sufficient subset: one
//! of {J, Q}, one of {C, M, s} and one of {h, H}.
//!
//! # Architecture
//!
//! ```text
//! forward:  XYZ --CAT02--> RGB_c --HPE--> R'G'B' --opponent--> J C h s Q M H
//! inverse:  J C h ... --solve (a,b)--> R'G'B' --uncompress--> RGB_c --> XYZ
//! ```
//!
//! Both directions share one [`ViewingConditions`] precomputation, so a
//! forward/inverse pair under the same conditions is a numerical
//! round trip.
//!
//! # Quick Start
//!
//! ```rust
//! use cam02::{forward, inverse, Correlates, Scale, Surround};
//! use cam02::math::Vec3;
//!
//! let white = Vec3::new(95.05, 100.0, 108.88);
//!
//! // Appearance of a gray patch under bright daylight adaptation
//! let appearance = forward(
//!     Vec3::new(19.01, 20.0, 21.78),
//!     white,
//!     318.31, // adapting luminance L_A, cd/m^2
//!     20.0,   // background luminance factor Y_b
//!     Surround::Average,
//!     Scale::Reference,
//! );
//! assert!((appearance.lightness.unwrap() - 41.7311).abs() < 1e-3);
//!
//! // Recover the stimulus from lightness, chroma and hue alone
//! let spec = Correlates::jch(
//!     appearance.lightness.unwrap(),
//!     appearance.chroma.unwrap(),
//!     appearance.hue_angle.unwrap(),
//! );
//! let xyz = inverse(&spec, white, 318.31, 20.0, Surround::Average, Scale::Reference)?;
//! assert!((xyz.x - 19.01).abs() < 1e-6);
//! # Ok::<(), cam02::CamError>(())
//! ```
//!
//! # Conventions
//!
//! Every entry point takes an explicit [`Scale`] selecting the numeric
//! convention for values crossing the boundary: the published reference
//! ranges, unit ranges, or percent ranges. Adapting luminance and
//! background luminance are absolute quantities and are never rescaled.
//!
//! Out-of-domain numeric inputs (negative lightness, non-finite
//! channels) propagate through as non-finite outputs; the only failure
//! path is an unresolvable correlate subset on the inverse, reported as
//! [`CamError`].
//!
//! # Dependencies
//!
//! - [`cam02-math`] - f64 vector and matrix primitives
//! - [`thiserror`] - Error handling
//! - [`rayon`] - Parallel batch evaluation
//!
//! # Used By
//!
//! - `cam02-tests` - Integration fixtures and round-trip suites
//! - `cam02-bench` - Criterion throughput benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use cam02_math::Vec3;

mod batch;
mod correlates;
mod error;
mod forward;
mod inverse;
mod scale;
mod surround;
mod viewing;

pub mod adaptation;
pub mod hue;

pub use batch::{forward_batch, inverse_batch};
pub use correlates::Correlates;
pub use error::{CamError, CamResult};
pub use forward::xyz_to_cam02;
pub use inverse::cam02_to_xyz;
pub use scale::Scale;
pub use surround::{InductionFactors, Surround, AVERAGE, DARK, DIM};
pub use viewing::ViewingConditions;

use scale::{correlates_from_scale, correlates_to_scale};

// Re-export the math sub-crate for convenience
pub use cam02_math as math;

/// Forward appearance transform.
///
/// `white` is the adopted white tristimulus in the same convention as
/// `xyz`. `adapting_luminance` (L_A, cd/m^2) and `background_luminance`
/// (Y_b, luminance factor) are absolute and ignore `scale`. `surround`
/// takes a [`Surround`] preset or directly supplied
/// [`InductionFactors`].
///
/// Never fails; out-of-domain stimuli yield non-finite correlates.
///
/// ```rust
/// use cam02::{forward, Scale, Surround};
/// use cam02::math::Vec3;
///
/// let appearance = forward(
///     Vec3::new(57.06, 43.06, 31.96),
///     Vec3::new(95.05, 100.0, 108.88),
///     31.83,
///     20.0,
///     Surround::Average,
///     Scale::Reference,
/// );
/// assert!((appearance.chroma.unwrap() - 48.5705).abs() < 1e-3);
/// ```
pub fn forward(
    xyz: Vec3,
    white: Vec3,
    adapting_luminance: f64,
    background_luminance: f64,
    surround: impl Into<InductionFactors>,
    scale: Scale,
) -> Correlates {
    let k = scale.linear_factor();
    let vc = ViewingConditions::new(
        white / k,
        adapting_luminance,
        background_luminance,
        surround.into(),
    );
    correlates_to_scale(&xyz_to_cam02(xyz / k, &vc), scale)
}

/// Inverse appearance transform.
///
/// Resolves the partial correlate set (exactly one of {J, Q}, {C, M, s}
/// and {h, H}) and recovers the XYZ stimulus in the convention selected
/// by `scale`. `surround` takes a [`Surround`] preset or directly
/// supplied [`InductionFactors`]. Fails only when a slot cannot be
/// resolved.
///
/// ```rust
/// use cam02::{inverse, Correlates, Scale, Surround};
/// use cam02::math::Vec3;
///
/// let spec = Correlates::jch(41.731091132514, 0.104707757171, 219.048432658272);
/// let xyz = inverse(
///     &spec,
///     Vec3::new(95.05, 100.0, 108.88),
///     318.31,
///     20.0,
///     Surround::Average,
///     Scale::Reference,
/// )?;
/// assert!((xyz.y - 20.0).abs() < 1e-6);
/// # Ok::<(), cam02::CamError>(())
/// ```
pub fn inverse(
    spec: &Correlates,
    white: Vec3,
    adapting_luminance: f64,
    background_luminance: f64,
    surround: impl Into<InductionFactors>,
    scale: Scale,
) -> CamResult<Vec3> {
    let k = scale.linear_factor();
    let vc = ViewingConditions::new(
        white / k,
        adapting_luminance,
        background_luminance,
        surround.into(),
    );
    let reference = correlates_from_scale(spec, scale);
    Ok(cam02_to_xyz(&reference, &vc)? * k)
}

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        cam02_to_xyz, forward, forward_batch, inverse, inverse_batch, xyz_to_cam02, CamError,
        CamResult, Correlates, InductionFactors, Scale, Surround, ViewingConditions,
    };

    // Re-export math
    pub use cam02_math::{Mat3, Vec3};
}
