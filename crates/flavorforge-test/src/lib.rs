//! Shared test fixtures for FlavorForge crates.
//!
//! This crate provides in-memory stand-ins for the two external services a
//! constraint template talks to. It depends on `flavorforge-core` only, so
//! every other crate can use it as a dev-dependency.
//!
//! - [`predictor`] - a prediction engine that records every request
//! - [`blocks`] - a likelihood-block factory that keeps the parameters it saw
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! flavorforge-test = { workspace = true }
//! ```
//!
//! Then build a context from the fixtures:
//!
//! ```ignore
//! use flavorforge_test::{RecordingBlockFactory, RecordingPredictor};
//!
//! let predictor = RecordingPredictor::new();
//! let blocks = RecordingBlockFactory::new();
//! let context = MakeContext::new(&predictor, &blocks);
//! ```

pub mod blocks;
pub mod predictor;

pub use blocks::{
    amoroso_limit_parameters, amoroso_mode_parameters, amoroso_parameters, gaussian_parameters,
    multivariate_parameters, RecordedBlock, RecordingBlockFactory,
};
pub use predictor::{observable_names, ObservableRequest, RecordedObservable, RecordingPredictor};
