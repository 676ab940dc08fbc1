//! Domain-range conventions for values crossing the public API.

use serde::{Deserialize, Serialize};

use crate::correlates::Correlates;

/// Numeric convention for tristimulus values and correlates at the API
/// boundary.
///
/// The model itself always runs in the reference convention; the other
/// two are pure rescalings applied on the way in and out. Adapting
/// luminance and background luminance are absolute quantities in
/// cd/m^2 and luminance factor and are never rescaled.
///
/// | Quantity        | `Reference` | `One`   | `Hundred` |
/// |-----------------|-------------|---------|-----------|
/// | XYZ, J C s Q M  | 0..100      | 0..1    | 0..100    |
/// | hue angle h     | 0..360      | 0..1    | 0..100    |
/// | quadrature H    | 0..400      | 0..1    | 0..100    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scale {
    /// Published-convention ranges.
    #[default]
    Reference,
    /// Every attribute mapped to unit nominal range.
    One,
    /// Every attribute mapped to percent nominal range.
    Hundred,
}

impl Scale {
    /// Multiplier from reference to this convention for XYZ and the
    /// linear correlates (J, C, s, Q, M).
    #[inline]
    pub const fn linear_factor(self) -> f64 {
        match self {
            Scale::Reference | Scale::Hundred => 1.0,
            Scale::One => 1.0 / 100.0,
        }
    }

    /// Multiplier from reference to this convention for the hue angle.
    #[inline]
    pub const fn hue_factor(self) -> f64 {
        match self {
            Scale::Reference => 1.0,
            Scale::One => 1.0 / 360.0,
            Scale::Hundred => 100.0 / 360.0,
        }
    }

    /// Multiplier from reference to this convention for the hue
    /// quadrature.
    #[inline]
    pub const fn quadrature_factor(self) -> f64 {
        match self {
            Scale::Reference => 1.0,
            Scale::One => 1.0 / 400.0,
            Scale::Hundred => 100.0 / 400.0,
        }
    }
}

/// Rescales a reference-convention correlate set into `scale`.
pub(crate) fn correlates_to_scale(c: &Correlates, scale: Scale) -> Correlates {
    let k = scale.linear_factor();
    Correlates {
        lightness: c.lightness.map(|v| v * k),
        chroma: c.chroma.map(|v| v * k),
        hue_angle: c.hue_angle.map(|v| v * scale.hue_factor()),
        saturation: c.saturation.map(|v| v * k),
        brightness: c.brightness.map(|v| v * k),
        colorfulness: c.colorfulness.map(|v| v * k),
        hue_quadrature: c.hue_quadrature.map(|v| v * scale.quadrature_factor()),
    }
}

/// Rescales a `scale`-convention correlate set back to reference.
pub(crate) fn correlates_from_scale(c: &Correlates, scale: Scale) -> Correlates {
    let k = scale.linear_factor();
    Correlates {
        lightness: c.lightness.map(|v| v / k),
        chroma: c.chroma.map(|v| v / k),
        hue_angle: c.hue_angle.map(|v| v / scale.hue_factor()),
        saturation: c.saturation.map(|v| v / k),
        brightness: c.brightness.map(|v| v / k),
        colorfulness: c.colorfulness.map(|v| v / k),
        hue_quadrature: c.hue_quadrature.map(|v| v / scale.quadrature_factor()),
    }
}
