//! B_q -> l^+ l^-: limits and first observations of B^0_(s) -> mu^+ mu^-.
//!
//! Limits use the Amoroso limit form with beta = 1 / alpha; theta and alpha
//! reproduce the quoted 90% and 95% CL limits. The later measurements use the
//! mode or three-quantile forms.

use super::{Entry, NO_KINEMATICS, Q_D_L_MU, Q_S_L_MU};
use crate::template::ConstraintTemplate::{Amoroso, AmorosoLimit, AmorosoMode};
use crate::template::{
    AmorosoConstraintTemplate, AmorosoLimitConstraintTemplate, AmorosoModeConstraintTemplate,
};

pub(super) const ENTRIES: &[Entry] = &[
    // ------------------------------------------------------------------------
    // Upper limits
    // ------------------------------------------------------------------------
    // CDF, PRL 107 (2011) 191801
    (
        "B^0_s->mu^+mu^-::BR_limit@CDF-2011",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 3.5e-8,
            upper_limit_95: 4.0e-8,
            theta: 3.60911035e-8,
            alpha: 0.30785263,
        }),
    ),
    // LHCb, PLB 708 (2012) 55
    (
        "B^0_s->mu^+mu^-::BR_limit@LHCb-2011",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 1.2e-8,
            upper_limit_95: 1.4e-8,
            theta: 1.14389043e-8,
            alpha: 0.39899932,
        }),
    ),
    // CMS, PRL 107 (2011) 191802
    (
        "B^0_s->mu^+mu^-::BR_limit@CMS-2011",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 1.6e-8,
            upper_limit_95: 1.9e-8,
            theta: 1.40105092e-8,
            alpha: 0.48310983,
        }),
    ),
    // CMS and LHCb combination, LHCb-CONF-2011-047
    (
        "B^0_s->mu^+mu^-::BR_limit@CMS-LHCb-2011",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 0.9e-8,
            upper_limit_95: 1.08e-8,
            theta: 7.43779776e-9,
            alpha: 0.53538044,
        }),
    ),
    // ATLAS, PLB 713 (2012) 387
    (
        "B^0_s->mu^+mu^-::BR_limit@ATLAS-2012",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 1.9e-8,
            upper_limit_95: 2.2e-8,
            theta: 1.86873355e-8,
            alpha: 0.36477502,
        }),
    ),
    // CMS, JHEP 1204 (2012) 033
    (
        "B^0_s->mu^+mu^-::BR_limit@CMS-2012",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 6.4e-9,
            upper_limit_95: 7.7e-9,
            theta: 5.20900228e-9,
            alpha: 0.54864955,
        }),
    ),
    // LHCb, PRL 108 (2012) 231801
    (
        "B^0_s->mu^+mu^-::BR_limit@LHCb-2012",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 3.8e-9,
            upper_limit_95: 4.5e-9,
            theta: 3.3756738e-9,
            alpha: 0.46957406,
        }),
    ),
    // CDF, PRL 107 (2011) 191801
    (
        "B^0->mu^+mu^-::BR_limit@CDF-2011",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_D_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 5.0e-9,
            upper_limit_95: 6.0e-9,
            theta: 4.13210987e-9,
            alpha: 0.53538044,
        }),
    ),
    // CMS, JHEP 1204 (2012) 033
    (
        "B^0->mu^+mu^-::BR_limit@CMS-2012",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_D_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 1.5e-9,
            upper_limit_95: 1.8e-9,
            theta: 1.23963296e-9,
            alpha: 0.53538044,
        }),
    ),
    // LHCb, PRL 108 (2012) 231801
    (
        "B^0->mu^+mu^-::BR_limit@LHCb-2012",
        AmorosoLimit(AmorosoLimitConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_D_L_MU,
            physical_limit: 0.0,
            upper_limit_90: 0.81e-9,
            upper_limit_95: 1.0e-9,
            theta: 5.55823581e-10,
            alpha: 0.68638653,
        }),
    ),
    // ------------------------------------------------------------------------
    // Excess with a mode
    // ------------------------------------------------------------------------
    // CDF, PRD 87 (2013) 072003, 9.6 fb^-1
    (
        "B^0_s->mu^+mu^-::BR@CDF-2012",
        AmorosoMode(AmorosoModeConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            mode: 1.3e-8,
            upper_limit_90: 2.7e-8,
            upper_limit_95: 3.1e-8,
            theta: 6.19633039e-9,
            alpha: 3.24192117,
            beta: 1.17724809,
        }),
    ),
    // ------------------------------------------------------------------------
    // Observations, quoted through the 10%, 50% and 90% quantiles
    // ------------------------------------------------------------------------
    // CMS, PRL 111 (2013) 101804
    (
        "B^0_s->mu^+mu^-::BR@CMS-2013",
        Amoroso(AmorosoConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_10: 1.9e-9,
            upper_limit_50: 3.0e-9,
            upper_limit_90: 4.3e-9,
            theta: 1.61990865e-9,
            alpha: 3.37085307,
            beta: 1.80639825,
        }),
    ),
    // LHCb, PRL 111 (2013) 101805
    (
        "B^0_s->mu^+mu^-::BR@LHCb-2013",
        Amoroso(AmorosoConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_10: 1.6e-9,
            upper_limit_50: 2.9e-9,
            upper_limit_90: 4.3e-9,
            theta: 3.04254582e-9,
            alpha: 1.18673985,
            beta: 2.78377441,
        }),
    ),
    // CMS and LHCb combination, LHCb-CONF-2013-012
    (
        "B^0_s->mu^+mu^-::BR@CMS-LHCb-2013",
        Amoroso(AmorosoConstraintTemplate {
            observable: "B_q->ll::BR",
            kinematics: NO_KINEMATICS,
            options: Q_S_L_MU,
            physical_limit: 0.0,
            upper_limit_10: 2.0e-9,
            upper_limit_50: 2.9e-9,
            upper_limit_90: 3.8e-9,
            theta: 2.491745e-9,
            alpha: 1.93646257,
            beta: 3.16020912,
        }),
    ),
];
