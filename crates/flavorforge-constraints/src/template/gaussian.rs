//! Single-observable measurement with asymmetric uncertainties.

use serde::Serialize;

use flavorforge_core::{FlavorError, GaussianParameters, Options, Result};

use super::{
    check_uncertainty, resolve, MakeContext, StaticKinematics, StaticOptions, UncertaintyMode,
};
use crate::constraint::Constraint;

/// Central value with separate statistical and systematic uncertainties on
/// each side.
///
/// # Example
///
/// ```
/// use flavorforge_constraints::template::GaussianConstraintTemplate;
/// use flavorforge_core::Options;
///
/// let t = GaussianConstraintTemplate {
///     observable: "B->K^*gamma::BR",
///     kinematics: &[],
///     options: &[("q", "d")],
///     central: 4.47e-5,
///     sigma_hi_stat: 0.10e-5,
///     sigma_lo_stat: 0.10e-5,
///     sigma_hi_sys: 0.16e-5,
///     sigma_lo_sys: 0.16e-5,
/// };
///
/// let p = t.block_parameters("B^0->K^*0gamma::BR@BaBar-2009", &Options::new()).unwrap();
/// assert!((p.max - p.central - (0.10e-5f64.powi(2) + 0.16e-5f64.powi(2)).sqrt()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaussianConstraintTemplate {
    pub observable: &'static str,
    pub kinematics: StaticKinematics,
    pub options: StaticOptions,
    pub central: f64,
    pub sigma_hi_stat: f64,
    pub sigma_lo_stat: f64,
    pub sigma_hi_sys: f64,
    pub sigma_lo_sys: f64,
}

impl GaussianConstraintTemplate {
    /// Resolves the observable and builds one asymmetric Gaussian block.
    pub fn make(
        &self,
        name: &str,
        options: &Options,
        context: &MakeContext<'_>,
    ) -> Result<Constraint> {
        let options = Options::from_pairs(self.options).overlay(options);
        let mut cache = context.fresh_cache();
        let observable = resolve(&mut cache, name, self.observable, self.kinematics, &options)?;

        let parameters = self.block_parameters(name, &options)?;
        let block = context.blocks().gaussian(observable.clone(), parameters)?;

        Ok(Constraint::new(name, [observable], vec![block]))
    }

    /// Bounds of the block for already merged `options`.
    ///
    /// Statistical and systematic uncertainties are added in quadrature on
    /// each side separately; the two sides never mix.
    pub fn block_parameters(&self, name: &str, options: &Options) -> Result<GaussianParameters> {
        UncertaintyMode::require(name, options, UncertaintyMode::AsymmetricQuadratic)?;

        let sigma_lo = self.sigma_lo_stat.hypot(self.sigma_lo_sys);
        let sigma_hi = self.sigma_hi_stat.hypot(self.sigma_hi_sys);
        Ok(GaussianParameters {
            min: self.central - sigma_lo,
            central: self.central,
            max: self.central + sigma_hi,
        })
    }

    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        check_uncertainty(name, "sigma_hi_stat", self.sigma_hi_stat)?;
        check_uncertainty(name, "sigma_lo_stat", self.sigma_lo_stat)?;
        check_uncertainty(name, "sigma_hi_sys", self.sigma_hi_sys)?;
        check_uncertainty(name, "sigma_lo_sys", self.sigma_lo_sys)?;
        if !self.central.is_finite() {
            return Err(FlavorError::invalid_template(name, "central value must be finite"));
        }
        Ok(())
    }
}
