//! Joint measurement of several correlated observables.

use serde::Serialize;

use flavorforge_core::{FlavorError, MultivariateGaussianParameters, Options, Result};

use super::{
    check_uncertainty, resolve, MakeContext, StaticKinematics, StaticOptions, UncertaintyMode,
};
use crate::constraint::Constraint;

const CORRELATION_TOLERANCE: f64 = 1e-12;

/// `dim` observables measured together, with a `dim x dim` correlation matrix.
///
/// Every per-observable slice must have the same length; [`validate`] is run
/// once when the template is registered and again before each `make`.
///
/// [`validate`]: MultivariateGaussianConstraintTemplate::validate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MultivariateGaussianConstraintTemplate {
    pub observables: &'static [&'static str],
    pub kinematics: &'static [StaticKinematics],
    pub options: &'static [StaticOptions],
    pub means: &'static [f64],
    pub sigma_stat_hi: &'static [f64],
    pub sigma_stat_lo: &'static [f64],
    pub sigma_sys: &'static [f64],
    pub correlation: &'static [&'static [f64]],
}

impl MultivariateGaussianConstraintTemplate {
    /// Number of observables.
    pub fn dim(&self) -> usize {
        self.observables.len()
    }

    /// Resolves every observable and builds one joint block.
    ///
    /// Fails as a whole if any observable is unknown.
    pub fn make(
        &self,
        name: &str,
        options: &Options,
        context: &MakeContext<'_>,
    ) -> Result<Constraint> {
        self.validate(name)?;
        let caller = options;

        let mut cache = context.fresh_cache();
        let mut observables = Vec::with_capacity(self.dim());
        let mut merged = Options::new();
        for i in 0..self.dim() {
            let options = Options::from_pairs(self.options[i]).overlay(caller);
            observables.push(resolve(
                &mut cache,
                name,
                self.observables[i],
                self.kinematics[i],
                &options,
            )?);
            merged = merged.overlay(&options);
        }

        let parameters = self.block_parameters(name, &merged)?;
        let block = context
            .blocks()
            .multivariate_gaussian(observables.clone(), parameters)?;

        Ok(Constraint::new(name, observables, vec![block]))
    }

    /// Means, per-axis variances and correlation for already merged `options`.
    ///
    /// Each axis keeps the larger of its two quadrature sums, so asymmetric
    /// uncertainties collapse to one conservative symmetric variance.
    pub fn block_parameters(
        &self,
        name: &str,
        options: &Options,
    ) -> Result<MultivariateGaussianParameters> {
        UncertaintyMode::require(name, options, UncertaintyMode::SymmetricQuadratic)?;

        let variances = (0..self.dim())
            .map(|i| {
                let sys = self.sigma_sys[i].powi(2);
                let lo = self.sigma_stat_lo[i].powi(2) + sys;
                let hi = self.sigma_stat_hi[i].powi(2) + sys;
                lo.max(hi)
            })
            .collect();

        Ok(MultivariateGaussianParameters {
            means: self.means.to_vec(),
            variances,
            correlation: self.correlation.iter().map(|row| row.to_vec()).collect(),
        })
    }

    /// Checks lengths and the shape of the correlation matrix.
    pub fn validate(&self, name: &str) -> Result<()> {
        let dim = self.dim();
        if dim == 0 {
            return Err(FlavorError::invalid_template(name, "no observables declared"));
        }

        let lengths = [
            ("kinematics", self.kinematics.len()),
            ("options", self.options.len()),
            ("means", self.means.len()),
            ("sigma_stat_hi", self.sigma_stat_hi.len()),
            ("sigma_stat_lo", self.sigma_stat_lo.len()),
            ("sigma_sys", self.sigma_sys.len()),
            ("correlation", self.correlation.len()),
        ];
        for (label, len) in lengths {
            if len != dim {
                return Err(FlavorError::invalid_template(
                    name,
                    format!("{} has {} entries, expected {}", label, len, dim),
                ));
            }
        }

        for i in 0..dim {
            check_uncertainty(name, "sigma_stat_hi", self.sigma_stat_hi[i])?;
            check_uncertainty(name, "sigma_stat_lo", self.sigma_stat_lo[i])?;
            check_uncertainty(name, "sigma_sys", self.sigma_sys[i])?;
        }

        for (i, row) in self.correlation.iter().enumerate() {
            if row.len() != dim {
                return Err(FlavorError::invalid_template(
                    name,
                    format!("correlation row {} has {} entries, expected {}", i, row.len(), dim),
                ));
            }
        }

        for (i, row) in self.correlation.iter().enumerate() {
            if (row[i] - 1.0).abs() > CORRELATION_TOLERANCE {
                return Err(FlavorError::invalid_template(
                    name,
                    format!("correlation[{}][{}] must be 1, got {}", i, i, row[i]),
                ));
            }
            for (j, rho) in row.iter().enumerate() {
                if !(-1.0..=1.0).contains(rho) {
                    return Err(FlavorError::invalid_template(
                        name,
                        format!("correlation[{}][{}] = {} lies outside [-1, 1]", i, j, rho),
                    ));
                }
                if (rho - self.correlation[j][i]).abs() > CORRELATION_TOLERANCE {
                    return Err(FlavorError::invalid_template(
                        name,
                        format!("correlation is not symmetric at ({}, {})", i, j),
                    ));
                }
            }
        }
        Ok(())
    }
}
