//! The appearance correlate set.
//!
//! [`Correlates`] carries the seven perceptual attributes the model
//! produces. Every field is optional: the forward transform fills all
//! seven, while the inverse transform reads whichever combination the
//! caller supplies and pattern-matches on presence. An absent attribute
//! is `None`, never a sentinel value.

use serde::{Deserialize, Serialize};

/// CIECAM02 appearance correlates.
///
/// The forward transform populates every field. For the inverse
/// transform, supply exactly one attribute per slot:
///
/// - lightness slot: `lightness` (J) or `brightness` (Q)
/// - chroma slot: `chroma` (C), `colorfulness` (M) or `saturation` (s)
/// - hue slot: `hue_angle` (h) or `hue_quadrature` (H)
///
/// # Example
///
/// ```rust
/// use cam02::Correlates;
///
/// let spec = Correlates::jch(41.73, 0.1047, 219.05);
/// assert_eq!(spec.lightness, Some(41.73));
/// assert_eq!(spec.colorfulness, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Correlates {
    /// Lightness J.
    pub lightness: Option<f64>,
    /// Chroma C.
    pub chroma: Option<f64>,
    /// Hue angle h in degrees.
    pub hue_angle: Option<f64>,
    /// Saturation s.
    pub saturation: Option<f64>,
    /// Brightness Q.
    pub brightness: Option<f64>,
    /// Colorfulness M.
    pub colorfulness: Option<f64>,
    /// Hue quadrature H.
    pub hue_quadrature: Option<f64>,
}

impl Correlates {
    /// Builds a correlate set from lightness J, chroma C and hue angle h.
    #[inline]
    pub const fn jch(lightness: f64, chroma: f64, hue_angle: f64) -> Self {
        Self {
            lightness: Some(lightness),
            chroma: Some(chroma),
            hue_angle: Some(hue_angle),
            saturation: None,
            brightness: None,
            colorfulness: None,
            hue_quadrature: None,
        }
    }

    /// Builds a correlate set from lightness J, colorfulness M and hue
    /// angle h.
    #[inline]
    pub const fn jmh(lightness: f64, colorfulness: f64, hue_angle: f64) -> Self {
        Self {
            lightness: Some(lightness),
            chroma: None,
            hue_angle: Some(hue_angle),
            saturation: None,
            brightness: None,
            colorfulness: Some(colorfulness),
            hue_quadrature: None,
        }
    }

    /// Builds a correlate set from brightness Q, saturation s and hue
    /// angle h.
    #[inline]
    pub const fn qsh(brightness: f64, saturation: f64, hue_angle: f64) -> Self {
        Self {
            lightness: None,
            chroma: None,
            hue_angle: Some(hue_angle),
            saturation: Some(saturation),
            brightness: Some(brightness),
            colorfulness: None,
            hue_quadrature: None,
        }
    }
}
