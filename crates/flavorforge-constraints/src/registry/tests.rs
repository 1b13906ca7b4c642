//! Tests for Registry.

use super::*;
use crate::template::{
    AmorosoLimitConstraintTemplate, GaussianConstraintTemplate,
    MultivariateGaussianConstraintTemplate, TemplateFamily,
};
use flavorforge_test::{gaussian_parameters, RecordingBlockFactory, RecordingPredictor};

const K_STAR_GAMMA: GaussianConstraintTemplate = GaussianConstraintTemplate {
    observable: "B->K^*gamma::BR",
    kinematics: &[],
    options: &[("q", "d")],
    central: 4.47e-5,
    sigma_hi_stat: 0.10e-5,
    sigma_lo_stat: 0.10e-5,
    sigma_hi_sys: 0.16e-5,
    sigma_lo_sys: 0.16e-5,
};

const B_S_LIMIT: AmorosoLimitConstraintTemplate = AmorosoLimitConstraintTemplate {
    observable: "B_q->ll::BR",
    kinematics: &[],
    options: &[("l", "mu"), ("q", "s")],
    physical_limit: 0.0,
    upper_limit_90: 3.5e-8,
    upper_limit_95: 4.0e-8,
    theta: 3.60911035e-8,
    alpha: 0.30785263,
};

fn small() -> Registry {
    Registry::from_entries([
        ("B^0->K^*0gamma::BR@BaBar-2009", ConstraintTemplate::from(K_STAR_GAMMA)),
        ("B^0_s->mu^+mu^-::BR_limit@CDF-2011", ConstraintTemplate::from(B_S_LIMIT)),
    ])
    .unwrap()
}

#[test]
fn test_make_known_name() {
    let registry = small();
    let predictor = RecordingPredictor::new();
    let blocks = RecordingBlockFactory::new();
    let context = MakeContext::new(&predictor, &blocks);

    let c = registry
        .make("B^0->K^*0gamma::BR@BaBar-2009", &Options::new(), &context)
        .unwrap();

    assert_eq!(c.name(), "B^0->K^*0gamma::BR@BaBar-2009");
    assert_eq!(c.observables().len(), 1);
    assert_eq!(c.blocks().len(), 1);
}

#[test]
fn test_unknown_name_is_recoverable() {
    let registry = small();
    let predictor = RecordingPredictor::new();
    let blocks = RecordingBlockFactory::new();
    let context = MakeContext::new(&predictor, &blocks);

    let err = registry
        .make("B^0->K^*0gamma::BR@Nobody-1999", &Options::new(), &context)
        .unwrap_err();

    assert_eq!(
        err,
        FlavorError::UnknownConstraint("B^0->K^*0gamma::BR@Nobody-1999".into())
    );
    assert!(err.is_recoverable());
    assert_eq!(predictor.resolutions(), 0);
    assert!(blocks.is_empty());
}

#[test]
fn test_lookup_is_exact() {
    let registry = small();
    assert!(registry.contains("B^0->K^*0gamma::BR@BaBar-2009"));
    assert!(!registry.contains("b^0->k^*0gamma::br@babar-2009"));
    assert!(!registry.contains("B^0->K^*0gamma::BR@BaBar-2009 "));
    assert!(!registry.contains(""));
}

#[test]
fn test_make_is_idempotent() {
    let registry = small();
    let predictor = RecordingPredictor::new();
    let blocks = RecordingBlockFactory::new();
    let context = MakeContext::new(&predictor, &blocks);
    let name = "B^0->K^*0gamma::BR@BaBar-2009";

    let first = registry.make(name, &Options::new(), &context).unwrap();
    let second = registry.make(name, &Options::new(), &context).unwrap();

    assert_eq!(
        gaussian_parameters(&first.blocks()[0]),
        gaussian_parameters(&second.blocks()[0])
    );

    let a = first.observables().iter().next().unwrap();
    let b = second.observables().iter().next().unwrap();
    assert_eq!(a.name(), b.name());
    assert_eq!(a.options(), b.options());
    // Each construction gets its own parameter context.
    assert!(!a.parameters().ptr_eq(b.parameters()));
}

#[test]
fn test_duplicate_registration_fails() {
    let mut registry = small();
    let err = registry
        .register("B^0->K^*0gamma::BR@BaBar-2009", B_S_LIMIT.into())
        .unwrap_err();

    assert_eq!(
        err,
        FlavorError::DuplicateConstraint("B^0->K^*0gamma::BR@BaBar-2009".into())
    );
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.get("B^0->K^*0gamma::BR@BaBar-2009").map(|t| t.family()),
        Some(TemplateFamily::Gaussian)
    );
}

#[test]
fn test_from_entries_rejects_duplicates() {
    let result = Registry::from_entries([
        ("same", ConstraintTemplate::from(K_STAR_GAMMA)),
        ("same", ConstraintTemplate::from(K_STAR_GAMMA)),
    ]);
    assert!(matches!(result, Err(FlavorError::DuplicateConstraint(name)) if name == "same"));
}

#[test]
fn test_malformed_template_is_rejected() {
    let malformed = MultivariateGaussianConstraintTemplate {
        observables: &["B->K^*gamma::S_K", "B->K^*gamma::C_K"],
        kinematics: &[&[], &[]],
        options: &[&[("q", "d")], &[("q", "d")]],
        means: &[-0.16, -0.04],
        sigma_stat_hi: &[0.22, 0.14],
        sigma_stat_lo: &[0.22, 0.14],
        sigma_sys: &[0.0, 0.0],
        correlation: &[&[1.0, 0.06, 0.0], &[0.06, 1.0, 0.0]],
    };

    let mut registry = Registry::new();
    let err = registry
        .register("B^0->K^*0gamma::S_K+C_K@Broken", malformed.into())
        .unwrap_err();

    assert!(matches!(
        err,
        FlavorError::InvalidTemplate { ref name, .. } if name == "B^0->K^*0gamma::S_K+C_K@Broken"
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_names_are_sorted() {
    let registry = small();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(
        names,
        vec![
            "B^0->K^*0gamma::BR@BaBar-2009",
            "B^0_s->mu^+mu^-::BR_limit@CDF-2011",
        ]
    );
}

#[test]
fn test_filter_by_substring() {
    let registry = small();
    let matched: Vec<_> = registry.filter("mu^+mu^-").map(|(name, _)| name).collect();
    assert_eq!(matched, vec!["B^0_s->mu^+mu^-::BR_limit@CDF-2011"]);
    assert_eq!(registry.filter("Nobody").count(), 0);
}

#[test]
fn test_to_yaml_tags_family() {
    let yaml = small().to_yaml().unwrap();
    assert!(yaml.contains("B^0->K^*0gamma::BR@BaBar-2009"));
    assert!(yaml.contains("type: gaussian"));
    assert!(yaml.contains("type: amoroso_limit"));
}
