//! Built-in measurement catalogue.
//!
//! Numbers are transcribed from the publications named in each entry.
//! Branching ratios in q^2 bins are integrated over the bin, not differential.

mod leptonic;
mod radiative;
mod semileptonic;

use crate::template::{ConstraintTemplate, StaticKinematics, StaticOptions};

/// One catalogue row.
pub type Entry = (&'static str, ConstraintTemplate);

/// Every built-in entry, grouped by decay class.
pub fn entries() -> impl Iterator<Item = Entry> {
    radiative::ENTRIES
        .iter()
        .chain(semileptonic::ENTRIES)
        .chain(leptonic::ENTRIES)
        .copied()
}

// ============================================================================
// Kinematics
// ============================================================================

pub(crate) const NO_KINEMATICS: StaticKinematics = &[];

pub(crate) const E_MIN_1_6: StaticKinematics = &[("E_min", 1.6)];
pub(crate) const E_MIN_1_7: StaticKinematics = &[("E_min", 1.7)];
pub(crate) const E_MIN_1_8: StaticKinematics = &[("E_min", 1.8)];
pub(crate) const E_MIN_2_0: StaticKinematics = &[("E_min", 2.0)];

pub(crate) const BIN_1_6: StaticKinematics = &[("s_min", 1.0), ("s_max", 6.0)];
pub(crate) const BIN_14_16: StaticKinematics = &[("s_min", 14.18), ("s_max", 16.0)];
pub(crate) const BIN_16_19: StaticKinematics = &[("s_min", 16.0), ("s_max", 19.0)];
pub(crate) const BIN_16_19_21: StaticKinematics = &[("s_min", 16.0), ("s_max", 19.21)];
pub(crate) const BIN_16_22: StaticKinematics = &[("s_min", 16.0), ("s_max", 22.86)];
pub(crate) const BIN_16_23: StaticKinematics = &[("s_min", 16.0), ("s_max", 23.0)];

// ============================================================================
// Options
// ============================================================================

pub(crate) const NO_OPTIONS: StaticOptions = &[];

pub(crate) const Q_D: StaticOptions = &[("q", "d")];
pub(crate) const Q_U: StaticOptions = &[("q", "u")];

pub(crate) const Q_D_L_MU: StaticOptions = &[("l", "mu"), ("q", "d")];
pub(crate) const Q_U_L_MU: StaticOptions = &[("l", "mu"), ("q", "u")];
pub(crate) const Q_S_L_MU: StaticOptions = &[("l", "mu"), ("q", "s")];

pub(crate) const L_MU: StaticOptions = &[("l", "mu")];
