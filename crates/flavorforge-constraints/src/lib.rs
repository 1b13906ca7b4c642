//! FlavorForge Constraints - Experimental measurements as likelihood terms
//!
//! This crate turns catalogue entries into [`Constraint`]s:
//! - Five template shapes (Gaussian, three Amoroso variants, multivariate Gaussian)
//! - A name-keyed [`Registry`] with a process-wide built-in instance
//! - The built-in catalogue of b -> s gamma, b -> s l l and B_q -> l l measurements
//!
//! Observables and likelihood blocks come from the collaborators in a
//! [`MakeContext`]; this crate never evaluates a density itself.

pub mod catalogue;
pub mod template;

mod constraint;
mod name;
mod registry;

pub use constraint::Constraint;
pub use name::ConstraintName;
pub use registry::Registry;
pub use template::{
    AmorosoConstraintTemplate, AmorosoLimitConstraintTemplate, AmorosoModeConstraintTemplate,
    ConstraintTemplate, GaussianConstraintTemplate, MakeContext,
    MultivariateGaussianConstraintTemplate, TemplateFamily, UncertaintyMode, UNCERTAINTY,
};
