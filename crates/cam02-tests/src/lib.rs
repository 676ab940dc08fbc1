//! Integration tests for the cam02 crates.
//!
//! This crate contains end-to-end tests that exercise the public API
//! across viewing conditions, correlate subsets, scaling conventions
//! and degenerate numeric inputs.
