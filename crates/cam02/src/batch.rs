//! Parallel evaluation over slices of stimuli or correlate sets.

use cam02_math::Vec3;
use rayon::prelude::*;

use crate::correlates::Correlates;
use crate::error::CamResult;
use crate::forward::xyz_to_cam02;
use crate::inverse::cam02_to_xyz;
use crate::viewing::ViewingConditions;

/// Forward transform over a slice of stimuli.
///
/// Elements are independent: an out-of-domain stimulus produces
/// non-finite correlates at its own index and leaves every other
/// element untouched.
pub fn forward_batch(stimuli: &[Vec3], vc: &ViewingConditions) -> Vec<Correlates> {
    stimuli.par_iter().map(|&xyz| xyz_to_cam02(xyz, vc)).collect()
}

/// Inverse transform over a slice of correlate sets.
///
/// Numeric excursions stay per-element as non-finite tristimulus
/// components. A correlate set with an unresolvable slot is a caller
/// error and fails the whole call.
pub fn inverse_batch(specs: &[Correlates], vc: &ViewingConditions) -> CamResult<Vec<Vec3>> {
    specs.par_iter().map(|spec| cam02_to_xyz(spec, vc)).collect()
}
