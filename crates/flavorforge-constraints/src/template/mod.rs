//! Constraint templates.
//!
//! A template is a plain data record transcribed from one publication. Its
//! `make` resolves the observables through an [`ObservablePredictor`],
//! combines the quoted uncertainties and asks the [`LikelihoodBlockFactory`]
//! for the matching block. Templates are never mutated; all their data is
//! `'static` so the catalogue can be written as `const` tables.

mod amoroso;
mod gaussian;
mod multivariate;

use std::fmt;

use serde::Serialize;
use tracing::trace;

use flavorforge_core::{
    FlavorError, Kinematics, LikelihoodBlockFactory, ObservableCache, ObservableHandle,
    ObservablePredictor, Options, Parameters, Result,
};

use crate::constraint::Constraint;

pub use amoroso::{
    AmorosoConstraintTemplate, AmorosoLimitConstraintTemplate, AmorosoModeConstraintTemplate,
};
pub use gaussian::GaussianConstraintTemplate;
pub use multivariate::MultivariateGaussianConstraintTemplate;

/// Literal kinematics as written in the catalogue.
pub type StaticKinematics = &'static [(&'static str, f64)];

/// Literal options as written in the catalogue.
pub type StaticOptions = &'static [(&'static str, &'static str)];

/// Option key selecting how uncertainties are combined.
pub const UNCERTAINTY: &str = "uncertainty";

/// Ways of combining statistical and systematic uncertainties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncertaintyMode {
    /// Quadrature sum per side; lower and upper widths stay separate.
    AsymmetricQuadratic,
    /// Quadrature sum per side, then the larger side is kept.
    SymmetricQuadratic,
}

impl UncertaintyMode {
    /// Option value naming this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            UncertaintyMode::AsymmetricQuadratic => "asymmetric+quadratic",
            UncertaintyMode::SymmetricQuadratic => "symmetric+quadratic",
        }
    }

    /// Reads the mode from merged options, falling back to `default`.
    ///
    /// Only `default` is supported by a template family; any other value is
    /// rejected rather than silently ignored.
    pub(crate) fn require(constraint: &str, options: &Options, default: Self) -> Result<Self> {
        let value = options.get_or(UNCERTAINTY, default.as_str());
        if value == default.as_str() {
            Ok(default)
        } else {
            Err(FlavorError::UnsupportedOption {
                constraint: constraint.to_string(),
                key: UNCERTAINTY.to_string(),
                value: value.to_string(),
            })
        }
    }
}

impl fmt::Display for UncertaintyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collaborators a template needs while building a constraint.
///
/// By default every construction draws a fresh parameter context from the
/// predictor. [`MakeContext::with_parameters`] pins one context instead, so
/// constraints built through it share their observables' parameters.
#[derive(Clone)]
pub struct MakeContext<'a> {
    predictor: &'a dyn ObservablePredictor,
    blocks: &'a dyn LikelihoodBlockFactory,
    parameters: Option<Parameters>,
}

impl<'a> MakeContext<'a> {
    /// Creates a context from a prediction engine and a block factory.
    pub fn new(
        predictor: &'a dyn ObservablePredictor,
        blocks: &'a dyn LikelihoodBlockFactory,
    ) -> Self {
        Self {
            predictor,
            blocks,
            parameters: None,
        }
    }

    /// Uses `parameters` for every construction through this context.
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// The prediction engine.
    pub fn predictor(&self) -> &'a dyn ObservablePredictor {
        self.predictor
    }

    /// The likelihood-block factory.
    pub fn blocks(&self) -> &'a dyn LikelihoodBlockFactory {
        self.blocks
    }

    /// The pinned parameter context, if any.
    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    pub(crate) fn fresh_cache(&self) -> ObservableCache<'a> {
        match &self.parameters {
            Some(parameters) => {
                ObservableCache::with_parameters(self.predictor, parameters.clone())
            }
            None => ObservableCache::new(self.predictor),
        }
    }
}

impl fmt::Debug for MakeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MakeContext")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Distribution family of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateFamily {
    Gaussian,
    AmorosoLimit,
    AmorosoMode,
    Amoroso,
    MultivariateGaussian,
}

impl TemplateFamily {
    /// Stable lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFamily::Gaussian => "gaussian",
            TemplateFamily::AmorosoLimit => "amoroso_limit",
            TemplateFamily::AmorosoMode => "amoroso_mode",
            TemplateFamily::Amoroso => "amoroso",
            TemplateFamily::MultivariateGaussian => "multivariate_gaussian",
        }
    }
}

impl fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any catalogue template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintTemplate {
    Gaussian(GaussianConstraintTemplate),
    AmorosoLimit(AmorosoLimitConstraintTemplate),
    AmorosoMode(AmorosoModeConstraintTemplate),
    Amoroso(AmorosoConstraintTemplate),
    MultivariateGaussian(MultivariateGaussianConstraintTemplate),
}

impl ConstraintTemplate {
    /// Builds the constraint `name` with caller `options` layered over the
    /// template's own options.
    pub fn make(
        &self,
        name: &str,
        options: &Options,
        context: &MakeContext<'_>,
    ) -> Result<Constraint> {
        match self {
            ConstraintTemplate::Gaussian(t) => t.make(name, options, context),
            ConstraintTemplate::AmorosoLimit(t) => t.make(name, options, context),
            ConstraintTemplate::AmorosoMode(t) => t.make(name, options, context),
            ConstraintTemplate::Amoroso(t) => t.make(name, options, context),
            ConstraintTemplate::MultivariateGaussian(t) => t.make(name, options, context),
        }
    }

    /// Checks the literal data for internal consistency.
    pub fn validate(&self, name: &str) -> Result<()> {
        match self {
            ConstraintTemplate::Gaussian(t) => t.validate(name),
            ConstraintTemplate::AmorosoLimit(t) => t.validate(name),
            ConstraintTemplate::AmorosoMode(t) => t.validate(name),
            ConstraintTemplate::Amoroso(t) => t.validate(name),
            ConstraintTemplate::MultivariateGaussian(t) => t.validate(name),
        }
    }

    /// Distribution family.
    pub fn family(&self) -> TemplateFamily {
        match self {
            ConstraintTemplate::Gaussian(_) => TemplateFamily::Gaussian,
            ConstraintTemplate::AmorosoLimit(_) => TemplateFamily::AmorosoLimit,
            ConstraintTemplate::AmorosoMode(_) => TemplateFamily::AmorosoMode,
            ConstraintTemplate::Amoroso(_) => TemplateFamily::Amoroso,
            ConstraintTemplate::MultivariateGaussian(_) => TemplateFamily::MultivariateGaussian,
        }
    }

    /// Names of the observables the template declares, in declaration order.
    pub fn observables(&self) -> Vec<&'static str> {
        match self {
            ConstraintTemplate::Gaussian(t) => vec![t.observable],
            ConstraintTemplate::AmorosoLimit(t) => vec![t.observable],
            ConstraintTemplate::AmorosoMode(t) => vec![t.observable],
            ConstraintTemplate::Amoroso(t) => vec![t.observable],
            ConstraintTemplate::MultivariateGaussian(t) => t.observables.to_vec(),
        }
    }
}

impl From<GaussianConstraintTemplate> for ConstraintTemplate {
    fn from(t: GaussianConstraintTemplate) -> Self {
        ConstraintTemplate::Gaussian(t)
    }
}

impl From<AmorosoLimitConstraintTemplate> for ConstraintTemplate {
    fn from(t: AmorosoLimitConstraintTemplate) -> Self {
        ConstraintTemplate::AmorosoLimit(t)
    }
}

impl From<AmorosoModeConstraintTemplate> for ConstraintTemplate {
    fn from(t: AmorosoModeConstraintTemplate) -> Self {
        ConstraintTemplate::AmorosoMode(t)
    }
}

impl From<AmorosoConstraintTemplate> for ConstraintTemplate {
    fn from(t: AmorosoConstraintTemplate) -> Self {
        ConstraintTemplate::Amoroso(t)
    }
}

impl From<MultivariateGaussianConstraintTemplate> for ConstraintTemplate {
    fn from(t: MultivariateGaussianConstraintTemplate) -> Self {
        ConstraintTemplate::MultivariateGaussian(t)
    }
}

// Resolves one declared observable with caller options layered on top.
pub(crate) fn resolve(
    cache: &mut ObservableCache<'_>,
    constraint: &str,
    observable: &str,
    kinematics: StaticKinematics,
    options: &Options,
) -> Result<ObservableHandle> {
    let kinematics = Kinematics::from_pairs(kinematics);
    trace!(
        constraint,
        observable,
        kinematics = %kinematics,
        options = %options,
        "Resolving observable"
    );
    cache
        .resolve(observable, &kinematics, options)
        .ok_or_else(|| FlavorError::UnknownObservable {
            constraint: constraint.to_string(),
            observable: observable.to_string(),
        })
}

// Non-negative and finite.
pub(crate) fn check_uncertainty(name: &str, label: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FlavorError::invalid_template(
            name,
            format!("{} must be finite and non-negative, got {}", label, value),
        ))
    }
}

// Strictly positive and finite.
pub(crate) fn check_shape(name: &str, label: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FlavorError::invalid_template(
            name,
            format!("{} must be finite and positive, got {}", label, value),
        ))
    }
}

// Each value strictly above its predecessor.
pub(crate) fn check_ascending(name: &str, labelled: &[(&str, f64)]) -> Result<()> {
    for pair in labelled.windows(2) {
        let ((lo_label, lo), (hi_label, hi)) = (pair[0], pair[1]);
        if lo.is_nan() || hi.is_nan() || lo >= hi {
            return Err(FlavorError::invalid_template(
                name,
                format!("{} ({}) must lie below {} ({})", lo_label, lo, hi_label, hi),
            ));
        }
    }
    Ok(())
}
