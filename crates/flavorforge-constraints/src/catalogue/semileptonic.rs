//! b -> s l^+ l^-: binned B -> K^* l^+ l^-, B -> K l^+ l^- and B -> X_s l^+ l^-.

use super::{
    Entry, BIN_14_16, BIN_16_19, BIN_16_19_21, BIN_16_22, BIN_16_23, BIN_1_6, L_MU, Q_D_L_MU,
    Q_U_L_MU,
};
use crate::template::ConstraintTemplate::Gaussian;
use crate::template::GaussianConstraintTemplate;

pub(super) const ENTRIES: &[Entry] = &[
    // CDF, PRL 108 (2012) 081807
    (
        "B^0->K^*0mu^+mu^-::BR[1.00,6.00]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 1.60e-7,
            sigma_hi_stat: 0.32e-7,
            sigma_lo_stat: 0.30e-7,
            sigma_hi_sys: 0.12e-7,
            sigma_lo_sys: 0.12e-7,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 0.29,
            sigma_hi_stat: 0.20,
            sigma_lo_stat: 0.23,
            sigma_hi_sys: 0.07,
            sigma_lo_sys: 0.07,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::F_L[1.00,6.00]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 0.69,
            sigma_hi_stat: 0.19,
            sigma_lo_stat: 0.21,
            sigma_hi_sys: 0.08,
            sigma_lo_sys: 0.08,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::BR[14.18,16.00]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_14_16,
            options: Q_D_L_MU,
            central: 1.34e-7,
            sigma_hi_stat: 0.26e-7,
            sigma_lo_stat: 0.25e-7,
            sigma_hi_sys: 0.08e-7,
            sigma_lo_sys: 0.08e-7,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::A_FB[14.18,16.00]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_14_16,
            options: Q_D_L_MU,
            central: 0.40,
            sigma_hi_stat: 0.18,
            sigma_lo_stat: 0.19,
            sigma_hi_sys: 0.06,
            sigma_lo_sys: 0.06,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::F_L[14.18,16.00]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_14_16,
            options: Q_D_L_MU,
            central: 0.44,
            sigma_hi_stat: 0.18,
            sigma_lo_stat: 0.17,
            sigma_hi_sys: 0.04,
            sigma_lo_sys: 0.04,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::BR[16.00,19.21]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_16_19_21,
            options: Q_D_L_MU,
            central: 0.97e-7,
            sigma_hi_stat: 0.26e-7,
            sigma_lo_stat: 0.24e-7,
            sigma_hi_sys: 0.06e-7,
            sigma_lo_sys: 0.06e-7,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::A_FB[16.00,19.21]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_16_19_21,
            options: Q_D_L_MU,
            central: 0.66,
            sigma_hi_stat: 0.23,
            sigma_lo_stat: 0.20,
            sigma_hi_sys: 0.07,
            sigma_lo_sys: 0.07,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::F_L[16.00,19.21]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_16_19_21,
            options: Q_D_L_MU,
            central: 0.65,
            sigma_hi_stat: 0.17,
            sigma_lo_stat: 0.18,
            sigma_hi_sys: 0.04,
            sigma_lo_sys: 0.04,
        }),
    ),
    // Belle, PRL 103 (2009) 171801; electron and muon modes combined
    (
        "B^0->K^*0l^+l^-::BR[1.00,6.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 1.49e-7,
            sigma_hi_stat: 0.45e-7,
            sigma_lo_stat: 0.40e-7,
            sigma_hi_sys: 0.12e-7,
            sigma_lo_sys: 0.12e-7,
        }),
    ),
    (
        "B^0->K^*0l^+l^-::A_FB[1.00,6.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 0.26,
            sigma_hi_stat: 0.27,
            sigma_lo_stat: 0.30,
            sigma_hi_sys: 0.07,
            sigma_lo_sys: 0.07,
        }),
    ),
    (
        "B^0->K^*0l^+l^-::F_L[1.00,6.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 0.67,
            sigma_hi_stat: 0.23,
            sigma_lo_stat: 0.23,
            sigma_hi_sys: 0.05,
            sigma_lo_sys: 0.05,
        }),
    ),
    (
        "B^0->K^*0l^+l^-::BR[14.18,16.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_14_16,
            options: Q_D_L_MU,
            central: 1.05e-7,
            sigma_hi_stat: 0.29e-7,
            sigma_lo_stat: 0.26e-7,
            sigma_hi_sys: 0.08e-7,
            sigma_lo_sys: 0.08e-7,
        }),
    ),
    (
        "B^0->K^*0l^+l^-::A_FB[14.18,16.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_14_16,
            options: Q_D_L_MU,
            central: 0.70,
            sigma_hi_stat: 0.16,
            sigma_lo_stat: 0.22,
            sigma_hi_sys: 0.10,
            sigma_lo_sys: 0.10,
        }),
    ),
    (
        "B^0->K^*0l^+l^-::F_L[14.18,16.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_14_16,
            options: Q_D_L_MU,
            central: -0.15,
            sigma_hi_stat: 0.27,
            sigma_lo_stat: 0.23,
            sigma_hi_sys: 0.07,
            sigma_lo_sys: 0.07,
        }),
    ),
    (
        "B^0->K^*0l^+l^-::BR[16.00,19.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_16_19,
            options: Q_D_L_MU,
            central: 2.04e-7,
            sigma_hi_stat: 0.27e-7,
            sigma_lo_stat: 0.24e-7,
            sigma_hi_sys: 0.16e-7,
            sigma_lo_sys: 0.16e-7,
        }),
    ),
    (
        "B^0->K^*0l^+l^-::A_FB[16.00,19.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_16_19,
            options: Q_D_L_MU,
            central: 0.66,
            sigma_hi_stat: 0.11,
            sigma_lo_stat: 0.16,
            sigma_hi_sys: 0.04,
            sigma_lo_sys: 0.04,
        }),
    ),
    (
        "B^0->K^*0l^+l^-::F_L[16.00,19.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_16_19,
            options: Q_D_L_MU,
            central: 0.12,
            sigma_hi_stat: 0.15,
            sigma_lo_stat: 0.13,
            sigma_hi_sys: 0.02,
            sigma_lo_sys: 0.02,
        }),
    ),
    // LHCb, JHEP 1308 (2013) 131, 1.0 fb^-1; differential rates integrated over the bin
    (
        "B^0->K^*0mu^+mu^-::BR[1.00,6.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 2.10e-7,
            sigma_hi_stat: 0.20e-7,
            sigma_lo_stat: 0.20e-7,
            sigma_hi_sys: 0.20e-7,
            sigma_lo_sys: 0.20e-7,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: -0.18,
            sigma_hi_stat: 0.06,
            sigma_lo_stat: 0.06,
            sigma_hi_sys: 0.01,
            sigma_lo_sys: 0.02,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::F_L[1.00,6.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 0.66,
            sigma_hi_stat: 0.06,
            sigma_lo_stat: 0.06,
            sigma_hi_sys: 0.04,
            sigma_lo_sys: 0.03,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::BR[14.18,16.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_14_16,
            options: Q_D_L_MU,
            central: 1.02e-7,
            sigma_hi_stat: 0.11e-7,
            sigma_lo_stat: 0.11e-7,
            sigma_hi_sys: 0.07e-7,
            sigma_lo_sys: 0.07e-7,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::A_FB[14.18,16.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_14_16,
            options: Q_D_L_MU,
            central: 0.49,
            sigma_hi_stat: 0.06,
            sigma_lo_stat: 0.06,
            sigma_hi_sys: 0.05,
            sigma_lo_sys: 0.02,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::F_L[14.18,16.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_14_16,
            options: Q_D_L_MU,
            central: 0.33,
            sigma_hi_stat: 0.08,
            sigma_lo_stat: 0.07,
            sigma_hi_sys: 0.02,
            sigma_lo_sys: 0.03,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::BR[16.00,19.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_16_19,
            options: Q_D_L_MU,
            central: 1.23e-7,
            sigma_hi_stat: 0.12e-7,
            sigma_lo_stat: 0.12e-7,
            sigma_hi_sys: 0.12e-7,
            sigma_lo_sys: 0.12e-7,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::A_FB[16.00,19.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_16_19,
            options: Q_D_L_MU,
            central: 0.30,
            sigma_hi_stat: 0.07,
            sigma_lo_stat: 0.07,
            sigma_hi_sys: 0.01,
            sigma_lo_sys: 0.01,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::F_L[16.00,19.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_16_19,
            options: Q_D_L_MU,
            central: 0.38,
            sigma_hi_stat: 0.09,
            sigma_lo_stat: 0.07,
            sigma_hi_sys: 0.03,
            sigma_lo_sys: 0.02,
        }),
    ),
    // CMS, PLB 727 (2013) 77
    (
        "B^0->K^*0mu^+mu^-::BR[1.00,6.00]@CMS-2013",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::BR",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 2.20e-7,
            sigma_hi_stat: 0.30e-7,
            sigma_lo_stat: 0.30e-7,
            sigma_hi_sys: 0.20e-7,
            sigma_lo_sys: 0.20e-7,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@CMS-2013",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::A_FB",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: -0.07,
            sigma_hi_stat: 0.12,
            sigma_lo_stat: 0.12,
            sigma_hi_sys: 0.01,
            sigma_lo_sys: 0.01,
        }),
    ),
    (
        "B^0->K^*0mu^+mu^-::F_L[1.00,6.00]@CMS-2013",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->K^*ll::F_L",
            kinematics: BIN_1_6,
            options: Q_D_L_MU,
            central: 0.68,
            sigma_hi_stat: 0.10,
            sigma_lo_stat: 0.10,
            sigma_hi_sys: 0.02,
            sigma_lo_sys: 0.02,
        }),
    ),
    // CDF, PRL 108 (2012) 081807
    (
        "B^+->K^+mu^+mu^-::BR[1.00,6.00]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->Kll::BR",
            kinematics: BIN_1_6,
            options: Q_U_L_MU,
            central: 1.41e-7,
            sigma_hi_stat: 0.20e-7,
            sigma_lo_stat: 0.20e-7,
            sigma_hi_sys: 0.09e-7,
            sigma_lo_sys: 0.09e-7,
        }),
    ),
    (
        "B^+->K^+mu^+mu^-::BR[14.18,16.00]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->Kll::BR",
            kinematics: BIN_14_16,
            options: Q_U_L_MU,
            central: 0.53e-7,
            sigma_hi_stat: 0.10e-7,
            sigma_lo_stat: 0.10e-7,
            sigma_hi_sys: 0.03e-7,
            sigma_lo_sys: 0.03e-7,
        }),
    ),
    (
        "B^+->K^+mu^+mu^-::BR[16.00,23.00]@CDF-2011",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->Kll::BR",
            kinematics: BIN_16_23,
            options: Q_U_L_MU,
            central: 0.48e-7,
            sigma_hi_stat: 0.11e-7,
            sigma_lo_stat: 0.11e-7,
            sigma_hi_sys: 0.03e-7,
            sigma_lo_sys: 0.03e-7,
        }),
    ),
    // Belle, PRL 103 (2009) 171801; electron and muon modes combined
    (
        "B^+->K^+l^+l^-::BR[1.00,6.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->Kll::BR",
            kinematics: BIN_1_6,
            options: Q_U_L_MU,
            central: 1.36e-7,
            sigma_hi_stat: 0.23e-7,
            sigma_lo_stat: 0.21e-7,
            sigma_hi_sys: 0.08e-7,
            sigma_lo_sys: 0.08e-7,
        }),
    ),
    (
        "B^+->K^+l^+l^-::BR[14.18,16.00]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->Kll::BR",
            kinematics: BIN_14_16,
            options: Q_U_L_MU,
            central: 0.38e-7,
            sigma_hi_stat: 0.19e-7,
            sigma_lo_stat: 0.12e-7,
            sigma_hi_sys: 0.02e-7,
            sigma_lo_sys: 0.02e-7,
        }),
    ),
    (
        "B^+->K^+l^+l^-::BR[16.00,22.86]@Belle-2009",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->Kll::BR",
            kinematics: BIN_16_22,
            options: Q_U_L_MU,
            central: 0.98e-7,
            sigma_hi_stat: 0.20e-7,
            sigma_lo_stat: 0.19e-7,
            sigma_hi_sys: 0.06e-7,
            sigma_lo_sys: 0.06e-7,
        }),
    ),
    // LHCb, JHEP 1302 (2013) 105
    (
        "B^+->K^+mu^+mu^-::BR[1.00,6.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->Kll::BR",
            kinematics: BIN_1_6,
            options: Q_U_L_MU,
            central: 1.21e-7,
            sigma_hi_stat: 0.06e-7,
            sigma_lo_stat: 0.06e-7,
            sigma_hi_sys: 0.05e-7,
            sigma_lo_sys: 0.05e-7,
        }),
    ),
    (
        "B^+->K^+mu^+mu^-::BR[14.18,16.00]@LHCb-2012",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->Kll::BR",
            kinematics: BIN_14_16,
            options: Q_U_L_MU,
            central: 0.21e-7,
            sigma_hi_stat: 0.02e-7,
            sigma_lo_stat: 0.02e-7,
            sigma_hi_sys: 0.01e-7,
            sigma_lo_sys: 0.01e-7,
        }),
    ),
    // BaBar, PRL 93 (2004) 081802
    (
        "B->X_smu^+mu^-::BR[1.00,6.00]@BaBar-2004",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->X_sll::BR",
            kinematics: BIN_1_6,
            options: L_MU,
            central: 1.8e-6,
            sigma_hi_stat: 0.7e-6,
            sigma_lo_stat: 0.7e-6,
            sigma_hi_sys: 0.5e-6,
            sigma_lo_sys: 0.5e-6,
        }),
    ),
    // Belle, PRD 72 (2005) 092005
    (
        "B->X_smu^+mu^-::BR[1.00,6.00]@Belle-2005",
        Gaussian(GaussianConstraintTemplate {
            observable: "B->X_sll::BR",
            kinematics: BIN_1_6,
            options: L_MU,
            central: 1.493e-6,
            sigma_hi_stat: 0.504e-6,
            sigma_lo_stat: 0.504e-6,
            sigma_hi_sys: 0.411e-6,
            sigma_lo_sys: 0.321e-6,
        }),
    ),
];
