//! Hue helpers: angle wrapping, eccentricity, and the unique-hue
//! quadrature table.
//!
//! Hue quadrature H places a hue angle on a 0..400 scale anchored at the
//! four unique hues (red, yellow, green, blue). The table below is the
//! published five-row form, the fifth row repeating red 360 degrees up so
//! the blue-to-red arc interpolates across the wrap.

/// One row of the unique-hue table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueAnchor {
    /// Anchor hue angle h_i in degrees.
    pub angle: f64,
    /// Anchor eccentricity e_i.
    pub eccentricity: f64,
    /// Anchor hue quadrature H_i.
    pub quadrature: f64,
}

/// Unique-hue anchors: red, yellow, green, blue, and wrapped red.
pub const HUE_ANCHORS: [HueAnchor; 5] = [
    HueAnchor { angle: 20.14, eccentricity: 0.8, quadrature: 0.0 },
    HueAnchor { angle: 90.00, eccentricity: 0.7, quadrature: 100.0 },
    HueAnchor { angle: 164.25, eccentricity: 1.0, quadrature: 200.0 },
    HueAnchor { angle: 237.53, eccentricity: 1.2, quadrature: 300.0 },
    HueAnchor { angle: 380.14, eccentricity: 0.8, quadrature: 400.0 },
];

/// Wraps a hue angle to [0, 360) degrees.
///
/// Non-finite angles come back NaN.
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

/// Eccentricity factor e_t at hue angle `h` (degrees).
///
/// # Formula
///
/// ```text
/// e_t = (cos(h_rad + 2) + 3.8) / 4
/// ```
#[inline]
pub fn eccentricity_factor(h: f64) -> f64 {
    ((h.to_radians() + 2.0).cos() + 3.8) / 4.0
}

/// Hue quadrature H for hue angle `h` (degrees).
///
/// Angles below the red anchor are lifted by a full turn before the
/// quadrant lookup, so H is continuous across the 360 wrap. Angles that
/// fall outside a single wrap of the table (including NaN and infinities)
/// return NaN.
///
/// # Example
///
/// ```rust
/// use cam02::hue::hue_quadrature;
///
/// // The yellow anchor sits exactly at H = 100.
/// assert_eq!(hue_quadrature(90.0), 100.0);
/// ```
pub fn hue_quadrature(h: f64) -> f64 {
    let hp = if h < HUE_ANCHORS[0].angle { h + 360.0 } else { h };
    for k in 0..4 {
        let lo = HUE_ANCHORS[k];
        let hi = HUE_ANCHORS[k + 1];
        if lo.angle <= hp && hp < hi.angle {
            let rise = (hp - lo.angle) / lo.eccentricity;
            let fall = (hi.angle - hp) / hi.eccentricity;
            return lo.quadrature + 100.0 * rise / (rise + fall);
        }
    }
    f64::NAN
}

/// Hue angle h (degrees) for hue quadrature `hq`, inverting
/// [`hue_quadrature`] in closed form.
///
/// Quadratures outside [0, 400] (including NaN) return NaN.
pub fn hue_angle_from_quadrature(hq: f64) -> f64 {
    for k in 0..4 {
        let lo = HUE_ANCHORS[k];
        let hi = HUE_ANCHORS[k + 1];
        if lo.quadrature <= hq && hq <= hi.quadrature {
            let d = hq - lo.quadrature;
            let num = d * (hi.eccentricity * lo.angle - lo.eccentricity * hi.angle)
                - 100.0 * lo.angle * hi.eccentricity;
            let den = d * (hi.eccentricity - lo.eccentricity) - 100.0 * hi.eccentricity;
            let hp = num / den;
            return if hp > 360.0 { hp - 360.0 } else { hp };
        }
    }
    f64::NAN
}
