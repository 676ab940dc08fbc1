//! Surround presets and induction factors.
//!
//! The model folds the viewing environment into three induction factors:
//! the maximum degree of adaptation F, the impact-of-surround exponent c,
//! and the chromatic induction factor N_c. The standard defines three
//! presets covering the usual viewing situations.

use serde::{Deserialize, Serialize};

/// Induction factors (F, c, N_c) describing the surround.
///
/// Constructed whole; there is no meaningful partial set. Use the
/// [`Surround`] presets unless the viewing situation genuinely falls
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InductionFactors {
    /// Maximum degree of adaptation F.
    pub f: f64,
    /// Impact of surround c (exponential nonlinearity).
    pub c: f64,
    /// Chromatic induction factor N_c.
    pub n_c: f64,
}

impl InductionFactors {
    /// Creates a new set of induction factors.
    #[inline]
    pub const fn new(f: f64, c: f64, n_c: f64) -> Self {
        Self { f, c, n_c }
    }
}

/// Induction factors for an average surround (> 20% relative luminance).
pub const AVERAGE: InductionFactors = InductionFactors::new(1.0, 0.69, 1.0);

/// Induction factors for a dim surround (0% to 20% relative luminance).
pub const DIM: InductionFactors = InductionFactors::new(0.9, 0.59, 0.9);

/// Induction factors for a dark surround (0% relative luminance).
pub const DARK: InductionFactors = InductionFactors::new(0.8, 0.525, 0.8);

/// Standard surround presets.
///
/// # Example
///
/// ```rust
/// use cam02::Surround;
///
/// let factors = Surround::Dim.induction_factors();
/// assert_eq!(factors.c, 0.59);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Surround {
    /// Average surround: typical reflected-print viewing.
    #[default]
    Average,
    /// Dim surround: television viewing in a dim room.
    Dim,
    /// Dark surround: cinema projection.
    Dark,
}

impl Surround {
    /// Returns the induction factors for this preset.
    #[inline]
    pub const fn induction_factors(self) -> InductionFactors {
        match self {
            Surround::Average => AVERAGE,
            Surround::Dim => DIM,
            Surround::Dark => DARK,
        }
    }

    /// Parses a preset name, case-insensitively.
    ///
    /// Returns `None` for unknown names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "average" => Some(Surround::Average),
            "dim" => Some(Surround::Dim),
            "dark" => Some(Surround::Dark),
            _ => None,
        }
    }

    /// Canonical preset name.
    pub const fn name(self) -> &'static str {
        match self {
            Surround::Average => "Average",
            Surround::Dim => "Dim",
            Surround::Dark => "Dark",
        }
    }
}

impl From<Surround> for InductionFactors {
    fn from(surround: Surround) -> Self {
        surround.induction_factors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        assert_eq!(AVERAGE, InductionFactors::new(1.0, 0.69, 1.0));
        assert_eq!(DIM, InductionFactors::new(0.9, 0.59, 0.9));
        assert_eq!(DARK, InductionFactors::new(0.8, 0.525, 0.8));
    }

    #[test]
    fn test_enum_factors_match_consts() {
        assert_eq!(Surround::Average.induction_factors(), AVERAGE);
        assert_eq!(Surround::Dim.induction_factors(), DIM);
        assert_eq!(Surround::Dark.induction_factors(), DARK);
    }

    #[test]
    fn test_from_surround() {
        assert_eq!(InductionFactors::from(Surround::Dim), DIM);
        assert_eq!(InductionFactors::from(Surround::Dark), DARK);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Surround::from_str("Average"), Some(Surround::Average));
        assert_eq!(Surround::from_str("dim"), Some(Surround::Dim));
        assert_eq!(Surround::from_str("DARK"), Some(Surround::Dark));
        assert_eq!(Surround::from_str("twilight"), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for s in [Surround::Average, Surround::Dim, Surround::Dark] {
            assert_eq!(Surround::from_str(s.name()), Some(s));
        }
    }
}
