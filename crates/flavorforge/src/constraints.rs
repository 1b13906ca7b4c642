//! Building many constraints at once.

use rayon::prelude::*;
use tracing::{info, warn};

use flavorforge_config::ConstraintsConfig;
use flavorforge_constraints::{Constraint, MakeContext, Registry};
use flavorforge_core::{FlavorError, ObservableSet, Options, Result};

/// An ordered collection of constraints built from a list of names.
///
/// Unknown names are skipped and reported through [`Constraints::skipped`];
/// any other construction error aborts the whole build. To let the
/// constraints share one parameter context, build them through a
/// [`MakeContext::with_parameters`] context.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    constraints: Vec<Constraint>,
    skipped: Vec<String>,
}

impl Constraints {
    /// Builds `names` in order, each with `options` over its template's own.
    ///
    /// # Errors
    ///
    /// Fails on the first construction error that is not an unknown name.
    pub fn build<'n, I>(
        names: I,
        options: &Options,
        registry: &Registry,
        context: &MakeContext<'_>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let results = names
            .into_iter()
            .map(|name| (name, registry.make(name, options, context)));
        Self::collect(results, true)
    }

    /// Like [`build`](Self::build), constructing on the rayon thread pool.
    ///
    /// The result keeps the order of `names`.
    pub fn build_parallel(
        names: &[&str],
        options: &Options,
        registry: &Registry,
        context: &MakeContext<'_>,
    ) -> Result<Self> {
        let results: Vec<_> = names
            .par_iter()
            .map(|&name| (name, registry.make(name, options, context)))
            .collect();
        Self::collect(results, true)
    }

    /// Builds every selection of `config`.
    ///
    /// Options layer as template < `config.options` < selection options.
    /// With `skip_unknown` unset, an unknown name is an error.
    pub fn from_config(
        config: &ConstraintsConfig,
        registry: &Registry,
        context: &MakeContext<'_>,
    ) -> Result<Self> {
        let results = config
            .selections()
            .map(|(name, options)| (name, registry.make(name, &options, context)));
        Self::collect(results, config.skip_unknown)
    }

    fn collect<'n>(
        results: impl IntoIterator<Item = (&'n str, Result<Constraint>)>,
        skip_unknown: bool,
    ) -> Result<Self> {
        let mut collection = Self::default();
        for (name, result) in results {
            match result {
                Ok(constraint) => collection.constraints.push(constraint),
                Err(FlavorError::UnknownConstraint(_)) if skip_unknown => {
                    warn!(constraint = name, "Skipping unknown constraint");
                    collection.skipped.push(name.to_string());
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            built = collection.constraints.len() as u64,
            skipped = collection.skipped.len() as u64,
            observables = collection.observables().len() as u64,
            "Constraints built"
        );
        Ok(collection)
    }

    /// Looks up a built constraint by name.
    pub fn get(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name() == name)
    }

    /// Names that were skipped as unknown, in request order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Built constraints, in request order.
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Distinct observables over all constraints, in first-seen order.
    pub fn observables(&self) -> ObservableSet {
        self.constraints
            .iter()
            .flat_map(|c| c.observables().iter().cloned())
            .collect()
    }

    /// Sum of every constraint's log-likelihood.
    pub fn log_likelihood(&self) -> f64 {
        self.constraints.iter().map(Constraint::log_likelihood).sum()
    }

    /// Consumes the collection, returning the constraints.
    pub fn into_vec(self) -> Vec<Constraint> {
        self.constraints
    }
}

impl<'a> IntoIterator for &'a Constraints {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
