//! The constraint entity: observables bound to likelihood blocks.

use flavorforge_core::{LikelihoodBlockHandle, ObservableHandle, ObservableSet, Options, Result};

use crate::registry::Registry;
use crate::template::MakeContext;

/// A named set of observables together with the likelihood blocks that
/// constrain them.
///
/// Constraints are built once by a template and never change afterwards.
#[derive(Debug, Clone)]
pub struct Constraint {
    name: String,
    observables: ObservableSet,
    blocks: Vec<LikelihoodBlockHandle>,
}

impl Constraint {
    /// Creates a constraint. Duplicate observables are dropped.
    pub fn new(
        name: impl Into<String>,
        observables: impl IntoIterator<Item = ObservableHandle>,
        blocks: Vec<LikelihoodBlockHandle>,
    ) -> Self {
        Self {
            name: name.into(),
            observables: observables.into_iter().collect(),
            blocks,
        }
    }

    /// Builds the built-in catalogue entry `name`.
    ///
    /// Shorthand for `Registry::builtin().make(name, options, context)`.
    pub fn make(name: &str, options: &Options, context: &MakeContext<'_>) -> Result<Self> {
        Registry::builtin().make(name, options, context)
    }

    /// Catalogue name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distinct observables, in declaration order.
    pub fn observables(&self) -> &ObservableSet {
        &self.observables
    }

    /// Likelihood blocks, in construction order.
    pub fn blocks(&self) -> &[LikelihoodBlockHandle] {
        &self.blocks
    }

    /// Sum of all block contributions for the current predictions.
    pub fn log_likelihood(&self) -> f64 {
        self.blocks.iter().map(|b| b.evaluate()).sum()
    }
}
