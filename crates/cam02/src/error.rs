//! Error types for appearance-model operations.
//!
//! The only raising path in this crate is correlate resolution in the
//! inverse transform: each of the three correlate slots must hold exactly
//! one value. Numeric domain excursions (negative luminances, out-of-range
//! correlates, non-finite inputs) never raise; they propagate through the
//! math as non-finite values.

use thiserror::Error;

/// Appearance-model precondition error.
///
/// Each variant names one correlate slot of the inverse transform and
/// reports which of its fields were present when resolution failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CamError {
    /// The lightness slot held zero or several values.
    #[error(
        "cannot resolve lightness: exactly one of lightness J or brightness Q \
         must be given (J given: {j}, Q given: {q})"
    )]
    UnresolvedLightness {
        /// Whether lightness J was given.
        j: bool,
        /// Whether brightness Q was given.
        q: bool,
    },

    /// The chroma slot held zero or several values.
    #[error(
        "cannot resolve chroma: exactly one of chroma C, colorfulness M or \
         saturation s must be given (C given: {c}, M given: {m}, s given: {s})"
    )]
    UnresolvedChroma {
        /// Whether chroma C was given.
        c: bool,
        /// Whether colorfulness M was given.
        m: bool,
        /// Whether saturation s was given.
        s: bool,
    },

    /// The hue slot held zero or several values.
    #[error(
        "cannot resolve hue: exactly one of hue angle h or hue quadrature H \
         must be given (h given: {h}, H given: {hq})"
    )]
    UnresolvedHue {
        /// Whether hue angle h was given.
        h: bool,
        /// Whether hue quadrature H was given.
        hq: bool,
    },
}

/// Result type for appearance-model operations.
pub type CamResult<T> = Result<T, CamError>;
