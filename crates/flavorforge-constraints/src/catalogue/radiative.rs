//! b -> s gamma: inclusive B -> X_s gamma and exclusive B -> K^* gamma.

use super::{Entry, E_MIN_1_6, E_MIN_1_7, E_MIN_1_8, E_MIN_2_0, NO_KINEMATICS, NO_OPTIONS, Q_D, Q_U};
use crate::template::ConstraintTemplate::{Gaussian, MultivariateGaussian};
use crate::template::{GaussianConstraintTemplate, MultivariateGaussianConstraintTemplate};

pub(super) const ENTRIES: &[Entry] = &[
    // ------------------------------------------------------------------------
    // B -> X_s gamma, photon energy cut E_min in GeV
    // ------------------------------------------------------------------------
    // CLEO, PRL 87 (2001) 251807
    (
        "B->X_sgamma::BR[2.0]@CLEO-2001",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->X_sgamma::BR",
            kinematics: E_MIN_2_0,
            options: NO_OPTIONS,
            central: 3.21e-4,
            sigma_hi_stat: 0.43e-4,
            sigma_lo_stat: 0.43e-4,
            sigma_hi_sys: 0.27e-4,
            sigma_lo_sys: 0.27e-4,
        }),
    ),
    // Belle, PRL 103 (2009) 241801
    (
        "B->X_sgamma::BR[1.7]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->X_sgamma::BR",
            kinematics: E_MIN_1_7,
            options: NO_OPTIONS,
            central: 3.45e-4,
            sigma_hi_stat: 0.15e-4,
            sigma_lo_stat: 0.15e-4,
            sigma_hi_sys: 0.40e-4,
            sigma_lo_sys: 0.40e-4,
        }),
    ),
    // BaBar, PRL 109 (2012) 191801; model dependence added to the systematics
    (
        "B->X_sgamma::BR[1.8]@BaBar-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->X_sgamma::BR",
            kinematics: E_MIN_1_8,
            options: NO_OPTIONS,
            central: 3.21e-4,
            sigma_hi_stat: 0.15e-4,
            sigma_lo_stat: 0.15e-4,
            sigma_hi_sys: 0.30e-4,
            sigma_lo_sys: 0.30e-4,
        }),
    ),
    // HFAG world average, extrapolated to E_min = 1.6 GeV
    (
        "B->X_sgamma::BR[1.6]@HFAG-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->X_sgamma::BR",
            kinematics: E_MIN_1_6,
            options: NO_OPTIONS,
            central: 3.43e-4,
            sigma_hi_stat: 0.21e-4,
            sigma_lo_stat: 0.21e-4,
            sigma_hi_sys: 0.07e-4,
            sigma_lo_sys: 0.07e-4,
        }),
    ),
    // ------------------------------------------------------------------------
    // B^0 -> K^*0 gamma
    // ------------------------------------------------------------------------
    // CLEO, PRL 84 (2000) 5283
    (
        "B^0->K^*0gamma::BR@CLEO-2000",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::BR",
            kinematics: NO_KINEMATICS,
            options: Q_D,
            central: 4.55e-5,
            sigma_hi_stat: 0.72e-5,
            sigma_lo_stat: 0.68e-5,
            sigma_hi_sys: 0.34e-5,
            sigma_lo_sys: 0.34e-5,
        }),
    ),
    // Belle, PRD 69 (2004) 112001
    (
        "B^0->K^*0gamma::BR@Belle-2004",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::BR",
            kinematics: NO_KINEMATICS,
            options: Q_D,
            central: 4.01e-5,
            sigma_hi_stat: 0.21e-5,
            sigma_lo_stat: 0.21e-5,
            sigma_hi_sys: 0.17e-5,
            sigma_lo_sys: 0.17e-5,
        }),
    ),
    // BaBar, PRL 103 (2009) 211802
    (
        "B^0->K^*0gamma::BR@BaBar-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::BR",
            kinematics: NO_KINEMATICS,
            options: Q_D,
            central: 4.47e-5,
            sigma_hi_stat: 0.10e-5,
            sigma_lo_stat: 0.10e-5,
            sigma_hi_sys: 0.16e-5,
            sigma_lo_sys: 0.16e-5,
        }),
    ),
    // Belle, PRD 74 (2006) 111104
    (
        "B^0->K^*0gamma::S_K@Belle-2006",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::S_K",
            kinematics: NO_KINEMATICS,
            options: Q_D,
            central: -0.32,
            sigma_hi_stat: 0.36,
            sigma_lo_stat: 0.33,
            sigma_hi_sys: 0.05,
            sigma_lo_sys: 0.05,
        }),
    ),
    (
        "B^0->K^*0gamma::C_K@Belle-2006",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::C_K",
            kinematics: NO_KINEMATICS,
            options: Q_D,
            central: 0.20,
            sigma_hi_stat: 0.24,
            sigma_lo_stat: 0.24,
            sigma_hi_sys: 0.05,
            sigma_lo_sys: 0.05,
        }),
    ),
    // BaBar, PRD 78 (2008) 071102
    (
        "B^0->K^*0gamma::S_K@BaBar-2008",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::S_K",
            kinematics: NO_KINEMATICS,
            options: Q_D,
            central: -0.03,
            sigma_hi_stat: 0.29,
            sigma_lo_stat: 0.29,
            sigma_hi_sys: 0.03,
            sigma_lo_sys: 0.03,
        }),
    ),
    (
        "B^0->K^*0gamma::C_K@BaBar-2008",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::C_K",
            kinematics: NO_KINEMATICS,
            options: Q_D,
            central: -0.14,
            sigma_hi_stat: 0.16,
            sigma_lo_stat: 0.16,
            sigma_hi_sys: 0.03,
            sigma_lo_sys: 0.03,
        }),
    ),
    // HFAG average of the time-dependent CP asymmetries, quoted with their
    // correlation
    (
        "B^0->K^*0gamma::S_K+C_K@HFAG-2011",
        MultivariateGaussian(MultivariateGaussianConstraintTemplate {
            observables: &["B->K^*gamma::S_K", "B->K^*gamma::C_K"],
            kinematics: &[NO_KINEMATICS, NO_KINEMATICS],
            options: &[Q_D, Q_D],
            means: &[-0.16, -0.04],
            sigma_stat_hi: &[0.22, 0.14],
            sigma_stat_lo: &[0.22, 0.14],
            sigma_sys: &[0.0, 0.0],
            correlation: &[&[1.00, 0.06], &[0.06, 1.00]],
        }),
    ),
    // ------------------------------------------------------------------------
    // B^+ -> K^*+ gamma
    // ------------------------------------------------------------------------
    // CLEO, PRL 84 (2000) 5283
    (
        "B^+->K^*+gamma::BR@CLEO-2000",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::BR",
            kinematics: NO_KINEMATICS,
            options: Q_U,
            central: 3.76e-5,
            sigma_hi_stat: 0.89e-5,
            sigma_lo_stat: 0.83e-5,
            sigma_hi_sys: 0.28e-5,
            sigma_lo_sys: 0.28e-5,
        }),
    ),
    // Belle, PRD 69 (2004) 112001
    (
        "B^+->K^*+gamma::BR@Belle-2004",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::BR",
            kinematics: NO_KINEMATICS,
            options: Q_U,
            central: 4.25e-5,
            sigma_hi_stat: 0.31e-5,
            sigma_lo_stat: 0.31e-5,
            sigma_hi_sys: 0.24e-5,
            sigma_lo_sys: 0.24e-5,
        }),
    ),
    // BaBar, PRL 103 (2009) 211802
    (
        "B^+->K^*+gamma::BR@BaBar-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*gamma::BR",
            kinematics: NO_KINEMATICS,
            options: Q_U,
            central: 4.22e-5,
            sigma_hi_stat: 0.14e-5,
            sigma_lo_stat: 0.14e-5,
            sigma_hi_sys: 0.16e-5,
            sigma_lo_sys: 0.16e-5,
        }),
    ),
];
