//! Recording likelihood-block factory.
//!
//! Blocks keep the exact [`BlockParameters`] they were built from, so tests
//! can check what a template computed without any density math.

use std::sync::{Arc, Mutex, PoisonError};

use flavorforge_core::{
    AmorosoLimitParameters, AmorosoModeParameters, AmorosoParameters, BlockParameters,
    FlavorError, GaussianParameters, LikelihoodBlock, LikelihoodBlockFactory,
    LikelihoodBlockHandle, MultivariateGaussianParameters, ObservableHandle, Result,
};

/// Block returned by [`RecordingBlockFactory`].
#[derive(Debug)]
pub struct RecordedBlock {
    observables: Vec<ObservableHandle>,
    parameters: BlockParameters,
    log_likelihood: f64,
}

impl LikelihoodBlock for RecordedBlock {
    fn observables(&self) -> &[ObservableHandle] {
        &self.observables
    }

    fn parameters(&self) -> &BlockParameters {
        &self.parameters
    }

    fn evaluate(&self) -> f64 {
        self.log_likelihood
    }
}

/// Factory that accepts any parameters and remembers them.
#[derive(Debug, Default)]
pub struct RecordingBlockFactory {
    log_likelihood: f64,
    rejection: Option<String>,
    built: Mutex<Vec<BlockParameters>>,
}

impl RecordingBlockFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every block built afterwards evaluates to `value`.
    pub fn with_log_likelihood(mut self, value: f64) -> Self {
        self.log_likelihood = value;
        self
    }

    /// A factory that refuses every block with `message`.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            rejection: Some(message.into()),
            ..Self::default()
        }
    }

    /// Parameters of every block built so far, in call order.
    pub fn records(&self) -> Vec<BlockParameters> {
        self.lock().clone()
    }

    /// Number of blocks built so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<BlockParameters>> {
        self.built.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn build(
        &self,
        observables: Vec<ObservableHandle>,
        parameters: BlockParameters,
    ) -> Result<LikelihoodBlockHandle> {
        if let Some(message) = &self.rejection {
            return Err(FlavorError::LikelihoodBlock(message.clone()));
        }
        self.lock().push(parameters.clone());
        Ok(Arc::new(RecordedBlock {
            observables,
            parameters,
            log_likelihood: self.log_likelihood,
        }))
    }
}

impl LikelihoodBlockFactory for RecordingBlockFactory {
    fn gaussian(
        &self,
        observable: ObservableHandle,
        parameters: GaussianParameters,
    ) -> Result<LikelihoodBlockHandle> {
        self.build(vec![observable], BlockParameters::Gaussian(parameters))
    }

    fn amoroso_limit(
        &self,
        observable: ObservableHandle,
        parameters: AmorosoLimitParameters,
    ) -> Result<LikelihoodBlockHandle> {
        self.build(vec![observable], BlockParameters::AmorosoLimit(parameters))
    }

    fn amoroso_mode(
        &self,
        observable: ObservableHandle,
        parameters: AmorosoModeParameters,
    ) -> Result<LikelihoodBlockHandle> {
        self.build(vec![observable], BlockParameters::AmorosoMode(parameters))
    }

    fn amoroso(
        &self,
        observable: ObservableHandle,
        parameters: AmorosoParameters,
    ) -> Result<LikelihoodBlockHandle> {
        self.build(vec![observable], BlockParameters::Amoroso(parameters))
    }

    fn multivariate_gaussian(
        &self,
        observables: Vec<ObservableHandle>,
        parameters: MultivariateGaussianParameters,
    ) -> Result<LikelihoodBlockHandle> {
        self.build(observables, BlockParameters::MultivariateGaussian(parameters))
    }
}

/// Gaussian parameters of `block`, if it is a Gaussian block.
pub fn gaussian_parameters(block: &LikelihoodBlockHandle) -> Option<&GaussianParameters> {
    match block.parameters() {
        BlockParameters::Gaussian(p) => Some(p),
        _ => None,
    }
}

pub fn amoroso_limit_parameters(block: &LikelihoodBlockHandle) -> Option<&AmorosoLimitParameters> {
    match block.parameters() {
        BlockParameters::AmorosoLimit(p) => Some(p),
        _ => None,
    }
}

pub fn amoroso_mode_parameters(block: &LikelihoodBlockHandle) -> Option<&AmorosoModeParameters> {
    match block.parameters() {
        BlockParameters::AmorosoMode(p) => Some(p),
        _ => None,
    }
}

pub fn amoroso_parameters(block: &LikelihoodBlockHandle) -> Option<&AmorosoParameters> {
    match block.parameters() {
        BlockParameters::Amoroso(p) => Some(p),
        _ => None,
    }
}

pub fn multivariate_parameters(
    block: &LikelihoodBlockHandle,
) -> Option<&MultivariateGaussianParameters> {
    match block.parameters() {
        BlockParameters::MultivariateGaussian(p) => Some(p),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingPredictor;
    use flavorforge_core::{Kinematics, ObservablePredictor, Options};

    fn observable(name: &str) -> ObservableHandle {
        let predictor = RecordingPredictor::new();
        predictor
            .make(name, &predictor.parameters(), &Kinematics::new(), &Options::new())
            .unwrap()
    }

    #[test]
    fn test_keeps_parameters() {
        let factory = RecordingBlockFactory::new().with_log_likelihood(-1.5);
        let parameters = GaussianParameters {
            min: 1.0,
            central: 2.0,
            max: 4.0,
        };

        let block = factory
            .gaussian(observable("B->K^*gamma::BR"), parameters)
            .unwrap();

        assert_eq!(gaussian_parameters(&block), Some(&parameters));
        assert!(amoroso_parameters(&block).is_none());
        assert_eq!(block.evaluate(), -1.5);
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_rejecting_factory() {
        let factory = RecordingBlockFactory::rejecting("singular covariance");
        let err = factory
            .multivariate_gaussian(
                vec![observable("a::x"), observable("a::y")],
                MultivariateGaussianParameters {
                    means: vec![0.0, 0.0],
                    variances: vec![1.0, 1.0],
                    correlation: vec![vec![1.0, 1.0], vec![1.0, 1.0]],
                },
            )
            .unwrap_err();

        assert_eq!(err, FlavorError::LikelihoodBlock("singular covariance".into()));
        assert!(factory.is_empty());
    }
}
