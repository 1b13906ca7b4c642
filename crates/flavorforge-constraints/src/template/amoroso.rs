//! Amoroso (generalised gamma) templates for boundary-limited measurements.
//!
//! The shape parameters were fitted offline against the quoted percentiles
//! and are transcribed verbatim. These templates only forward the numbers to
//! the block factory.

use serde::Serialize;

use flavorforge_core::{
    AmorosoLimitParameters, AmorosoModeParameters, AmorosoParameters, Options, Result,
};

use super::{check_ascending, check_shape, resolve, MakeContext, StaticKinematics, StaticOptions};
use crate::constraint::Constraint;

/// Upper limit only: 90% and 95% CL limits above a hard physical limit.
///
/// `beta` is fixed to `1 / alpha` by the block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmorosoLimitConstraintTemplate {
    pub observable: &'static str,
    pub kinematics: StaticKinematics,
    pub options: StaticOptions,
    pub physical_limit: f64,
    pub upper_limit_90: f64,
    pub upper_limit_95: f64,
    pub theta: f64,
    pub alpha: f64,
}

impl AmorosoLimitConstraintTemplate {
    pub fn make(
        &self,
        name: &str,
        options: &Options,
        context: &MakeContext<'_>,
    ) -> Result<Constraint> {
        let options = Options::from_pairs(self.options).overlay(options);
        let mut cache = context.fresh_cache();
        let observable = resolve(&mut cache, name, self.observable, self.kinematics, &options)?;
        let block = context
            .blocks()
            .amoroso_limit(observable.clone(), self.block_parameters())?;

        Ok(Constraint::new(name, [observable], vec![block]))
    }

    pub fn block_parameters(&self) -> AmorosoLimitParameters {
        AmorosoLimitParameters {
            physical_limit: self.physical_limit,
            upper_limit_90: self.upper_limit_90,
            upper_limit_95: self.upper_limit_95,
            theta: self.theta,
            alpha: self.alpha,
        }
    }

    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        check_ascending(
            name,
            &[
                ("physical_limit", self.physical_limit),
                ("upper_limit_90", self.upper_limit_90),
                ("upper_limit_95", self.upper_limit_95),
            ],
        )?;
        check_shape(name, "theta", self.theta)?;
        check_shape(name, "alpha", self.alpha)
    }
}

/// Measurement with a mode away from the physical limit plus 90%/95% limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmorosoModeConstraintTemplate {
    pub observable: &'static str,
    pub kinematics: StaticKinematics,
    pub options: StaticOptions,
    pub physical_limit: f64,
    pub mode: f64,
    pub upper_limit_90: f64,
    pub upper_limit_95: f64,
    pub theta: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl AmorosoModeConstraintTemplate {
    pub fn make(
        &self,
        name: &str,
        options: &Options,
        context: &MakeContext<'_>,
    ) -> Result<Constraint> {
        let options = Options::from_pairs(self.options).overlay(options);
        let mut cache = context.fresh_cache();
        let observable = resolve(&mut cache, name, self.observable, self.kinematics, &options)?;
        let block = context
            .blocks()
            .amoroso_mode(observable.clone(), self.block_parameters())?;

        Ok(Constraint::new(name, [observable], vec![block]))
    }

    pub fn block_parameters(&self) -> AmorosoModeParameters {
        AmorosoModeParameters {
            physical_limit: self.physical_limit,
            mode: self.mode,
            upper_limit_90: self.upper_limit_90,
            upper_limit_95: self.upper_limit_95,
            theta: self.theta,
            alpha: self.alpha,
            beta: self.beta,
        }
    }

    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        check_ascending(
            name,
            &[
                ("physical_limit", self.physical_limit),
                ("mode", self.mode),
                ("upper_limit_90", self.upper_limit_90),
                ("upper_limit_95", self.upper_limit_95),
            ],
        )?;
        check_shape(name, "theta", self.theta)?;
        check_shape(name, "alpha", self.alpha)?;
        check_shape(name, "beta", self.beta)
    }
}

/// Full description through the 10%, 50% and 90% quantiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmorosoConstraintTemplate {
    pub observable: &'static str,
    pub kinematics: StaticKinematics,
    pub options: StaticOptions,
    pub physical_limit: f64,
    pub upper_limit_10: f64,
    pub upper_limit_50: f64,
    pub upper_limit_90: f64,
    pub theta: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl AmorosoConstraintTemplate {
    pub fn make(
        &self,
        name: &str,
        options: &Options,
        context: &MakeContext<'_>,
    ) -> Result<Constraint> {
        let options = Options::from_pairs(self.options).overlay(options);
        let mut cache = context.fresh_cache();
        let observable = resolve(&mut cache, name, self.observable, self.kinematics, &options)?;
        let block = context
            .blocks()
            .amoroso(observable.clone(), self.block_parameters())?;

        Ok(Constraint::new(name, [observable], vec![block]))
    }

    pub fn block_parameters(&self) -> AmorosoParameters {
        AmorosoParameters {
            physical_limit: self.physical_limit,
            upper_limit_10: self.upper_limit_10,
            upper_limit_50: self.upper_limit_50,
            upper_limit_90: self.upper_limit_90,
            theta: self.theta,
            alpha: self.alpha,
            beta: self.beta,
        }
    }

    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        check_ascending(
            name,
            &[
                ("physical_limit", self.physical_limit),
                ("upper_limit_10", self.upper_limit_10),
                ("upper_limit_50", self.upper_limit_50),
                ("upper_limit_90", self.upper_limit_90),
            ],
        )?;
        check_shape(name, "theta", self.theta)?;
        check_shape(name, "alpha", self.alpha)?;
        check_shape(name, "beta", self.beta)
    }
}
