//! Likelihood blocks and the factory that builds them.
//!
//! Blocks are opaque: the probability-density math behind them belongs to the
//! [`LikelihoodBlockFactory`] implementation. This module only fixes the
//! parameterisations a factory must accept.

use std::fmt::Debug;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::observable::ObservableHandle;

/// Asymmetric three-point Gaussian: different widths below and above `central`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaussianParameters {
    pub min: f64,
    pub central: f64,
    pub max: f64,
}

impl GaussianParameters {
    /// Width below the central value.
    pub fn sigma_lo(&self) -> f64 {
        self.central - self.min
    }

    /// Width above the central value.
    pub fn sigma_hi(&self) -> f64 {
        self.max - self.central
    }
}

/// Amoroso distribution pinned to a physical limit and two upper limits.
///
/// The third shape parameter is implied: `beta = 1 / alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmorosoLimitParameters {
    pub physical_limit: f64,
    pub upper_limit_90: f64,
    pub upper_limit_95: f64,
    pub theta: f64,
    pub alpha: f64,
}

/// Amoroso distribution with a mode away from the physical limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmorosoModeParameters {
    pub physical_limit: f64,
    pub mode: f64,
    pub upper_limit_90: f64,
    pub upper_limit_95: f64,
    pub theta: f64,
    pub alpha: f64,
    pub beta: f64,
}

/// Amoroso distribution described by its 10%, 50% and 90% quantiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmorosoParameters {
    pub physical_limit: f64,
    pub upper_limit_10: f64,
    pub upper_limit_50: f64,
    pub upper_limit_90: f64,
    pub theta: f64,
    pub alpha: f64,
    pub beta: f64,
}

/// Joint Gaussian over several observables.
///
/// `correlation` is `dim x dim`; `means` and `variances` have length `dim`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultivariateGaussianParameters {
    pub means: Vec<f64>,
    pub variances: Vec<f64>,
    pub correlation: Vec<Vec<f64>>,
}

impl MultivariateGaussianParameters {
    /// Number of observables covered.
    pub fn dim(&self) -> usize {
        self.means.len()
    }

    /// Covariance matrix `rho_ij * sigma_i * sigma_j`.
    pub fn covariance(&self) -> Vec<Vec<f64>> {
        let sigmas: Vec<f64> = self.variances.iter().map(|v| v.sqrt()).collect();
        self.correlation
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, rho)| rho * sigmas[i] * sigmas[j])
                    .collect()
            })
            .collect()
    }
}

/// Parameterisation a block was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockParameters {
    Gaussian(GaussianParameters),
    AmorosoLimit(AmorosoLimitParameters),
    AmorosoMode(AmorosoModeParameters),
    Amoroso(AmorosoParameters),
    MultivariateGaussian(MultivariateGaussianParameters),
}

/// One log-likelihood contribution bound to its observables.
pub trait LikelihoodBlock: Debug + Send + Sync {
    /// Observables whose predictions enter this block.
    fn observables(&self) -> &[ObservableHandle];

    /// Parameterisation the block was built from.
    fn parameters(&self) -> &BlockParameters;

    /// Log-likelihood for the current predictions.
    fn evaluate(&self) -> f64;
}

/// Shared handle to a likelihood block.
pub type LikelihoodBlockHandle = Arc<dyn LikelihoodBlock>;

/// External service constructing likelihood blocks.
///
/// One constructor per distribution family. Implementations own the density
/// math, including the covariance inversion for the multivariate case.
pub trait LikelihoodBlockFactory: Send + Sync {
    fn gaussian(
        &self,
        observable: ObservableHandle,
        parameters: GaussianParameters,
    ) -> Result<LikelihoodBlockHandle>;

    fn amoroso_limit(
        &self,
        observable: ObservableHandle,
        parameters: AmorosoLimitParameters,
    ) -> Result<LikelihoodBlockHandle>;

    fn amoroso_mode(
        &self,
        observable: ObservableHandle,
        parameters: AmorosoModeParameters,
    ) -> Result<LikelihoodBlockHandle>;

    fn amoroso(
        &self,
        observable: ObservableHandle,
        parameters: AmorosoParameters,
    ) -> Result<LikelihoodBlockHandle>;

    fn multivariate_gaussian(
        &self,
        observables: Vec<ObservableHandle>,
        parameters: MultivariateGaussianParameters,
    ) -> Result<LikelihoodBlockHandle>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_widths() {
        let p = GaussianParameters {
            min: 3.5,
            central: 4.0,
            max: 4.75,
        };
        assert!((p.sigma_lo() - 0.5).abs() < 1e-12);
        assert!((p.sigma_hi() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_covariance_from_correlation() {
        let p = MultivariateGaussianParameters {
            means: vec![-0.16, -0.04],
            variances: vec![0.04, 0.01],
            correlation: vec![vec![1.0, 0.5], vec![0.5, 1.0]],
        };
        let cov = p.covariance();
        assert_eq!(p.dim(), 2);
        assert!((cov[0][0] - 0.04).abs() < 1e-12);
        assert!((cov[1][1] - 0.01).abs() < 1e-12);
        assert!((cov[0][1] - 0.01).abs() < 1e-12);
        assert!((cov[1][0] - cov[0][1]).abs() < 1e-15);
    }
}
