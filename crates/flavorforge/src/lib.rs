//! FlavorForge - Experimental flavor-physics constraints in Rust
//!
//! Turns published measurements into likelihood terms over theory
//! predictions. Pick constraints by name, hand in a prediction engine and a
//! likelihood-block factory, and get back ready-to-evaluate constraints.
//!
//! # Example
//!
//! ```rust
//! use flavorforge::prelude::*;
//! use flavorforge_test::{RecordingBlockFactory, RecordingPredictor};
//!
//! let predictor = RecordingPredictor::new();
//! let blocks = RecordingBlockFactory::new().with_log_likelihood(-0.5);
//! let context = MakeContext::new(&predictor, &blocks);
//!
//! let constraints = Constraints::build(
//!     ["B^0_s->mu^+mu^-::BR_limit@CDF-2011", "B->nothing::BR@Nobody-1999"],
//!     &Options::new(),
//!     Registry::builtin(),
//!     &context,
//! )
//! .unwrap();
//!
//! assert_eq!(constraints.len(), 1);
//! assert_eq!(constraints.skipped(), ["B->nothing::BR@Nobody-1999"]);
//! assert_eq!(constraints.log_likelihood(), -0.5);
//! ```

// Shared vocabulary
pub use flavorforge_core::{
    same_observable, BlockParameters, FlavorError, Kinematics, LikelihoodBlock,
    LikelihoodBlockFactory, LikelihoodBlockHandle, Observable, ObservableHandle,
    ObservablePredictor, ObservableSet, Options, Parameters, Result,
};

// Block parameterisations handed to the factory
pub use flavorforge_core::{
    AmorosoLimitParameters, AmorosoModeParameters, AmorosoParameters, GaussianParameters,
    MultivariateGaussianParameters,
};

// Templates, registry and the built-in catalogue
pub use flavorforge_constraints::{
    catalogue, template, Constraint, ConstraintName, ConstraintTemplate, MakeContext, Registry,
    TemplateFamily, UncertaintyMode,
};

// Configuration
pub use flavorforge_config::{ConfigError, ConstraintSelection, ConstraintsConfig};

#[cfg(feature = "console")]
pub use flavorforge_console as console;

mod constraints;
pub use constraints::Constraints;

pub mod prelude {
    pub use super::{Constraint, Constraints, ConstraintsConfig, MakeContext, Registry};
    pub use super::{FlavorError, Kinematics, Options, Result};
    pub use super::{LikelihoodBlock, LikelihoodBlockFactory, Observable, ObservablePredictor};
}
