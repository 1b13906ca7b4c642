//! FlavorForge Core - Shared types for flavor-physics constraints
//!
//! This crate provides the vocabulary the constraint catalogue is built on:
//! - Kinematics and Options describing which observable is meant
//! - Parameter contexts backing theory predictions
//! - Collaborator traits for the prediction engine and the likelihood-block factory
//! - The error type shared across the workspace

pub mod error;
pub mod kinematics;
pub mod likelihood;
pub mod observable;
pub mod options;
pub mod parameters;

#[cfg(test)]
mod observable_tests;

pub use error::{FlavorError, Result};
pub use kinematics::Kinematics;
pub use likelihood::{
    AmorosoLimitParameters, AmorosoModeParameters, AmorosoParameters, BlockParameters,
    GaussianParameters, LikelihoodBlock, LikelihoodBlockFactory, LikelihoodBlockHandle,
    MultivariateGaussianParameters,
};
pub use observable::{
    same_observable, Observable, ObservableCache, ObservableHandle, ObservablePredictor,
    ObservableSet,
};
pub use options::Options;
pub use parameters::Parameters;
