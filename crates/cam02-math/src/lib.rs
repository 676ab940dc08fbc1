//! # cam02-math
//!
//! Double-precision math primitives for color appearance modeling.
//!
//! This crate provides the small amount of linear algebra the appearance
//! model needs:
//!
//! - [`Vec3`] - `f64` triples for tristimulus values and cone responses
//! - [`Mat3`] - 3x3 matrices for sharpened-cone and opponent transforms
//!
//! # Design
//!
//! Appearance-model math is done in `f64` throughout: published verification
//! data is quoted to many decimal places and the forward/inverse round trip
//! is expected to close to ~1e-7. All matrix operations assume **row-major**
//! storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cam02_math::{Mat3, Vec3};
//!
//! // CAT02 sharpened cone response matrix
//! let xyz_to_cat02 = Mat3::from_rows([
//!     [0.7328, 0.4296, -0.1624],
//!     [-0.7036, 1.6975, 0.0061],
//!     [0.0030, 0.0136, 0.9834],
//! ]);
//!
//! let white = Vec3::new(95.05, 100.0, 108.88);
//! let cones = xyz_to_cat02 * white;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with the `DVec3`/`DMat3` SIMD types
//!
//! # Used By
//!
//! - `cam02` - the CIECAM02 appearance model

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
