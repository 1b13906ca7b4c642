//! Tests over the built-in catalogue.

use std::collections::BTreeSet;
use std::thread;

use flavorforge_constraints::catalogue;
use flavorforge_constraints::{
    Constraint, ConstraintName, ConstraintTemplate, MakeContext, Registry, TemplateFamily,
};
use flavorforge_core::{FlavorError, Options};
use flavorforge_test::{
    amoroso_limit_parameters, gaussian_parameters, multivariate_parameters, observable_names,
    RecordingBlockFactory, RecordingPredictor,
};
use rayon::prelude::*;

#[test]
fn test_builtin_names_are_unique() {
    let names: Vec<_> = catalogue::entries().map(|(name, _)| name).collect();
    let unique: BTreeSet<_> = names.iter().copied().collect();
    assert_eq!(names.len(), unique.len());
    assert_eq!(Registry::builtin().len(), names.len());
}

#[test]
fn test_builtin_names_parse() {
    for name in Registry::builtin().names() {
        let parsed = ConstraintName::parse(name)
            .unwrap_or_else(|e| panic!("{} does not parse: {}", name, e));
        assert!(parsed.year.is_some(), "{} carries no year", name);
        assert_eq!(parsed.to_string(), name);
    }
}

#[test]
fn test_every_builtin_entry_builds() {
    let predictor = RecordingPredictor::new();
    let blocks = RecordingBlockFactory::new();
    let context = MakeContext::new(&predictor, &blocks);
    let registry = Registry::builtin();

    for (name, template) in registry.iter() {
        let c = registry
            .make(name, &Options::new(), &context)
            .unwrap_or_else(|e| panic!("{} fails to build: {}", name, e));
        assert_eq!(c.name(), name);
        assert_eq!(c.blocks().len(), 1, "{}", name);
        assert_eq!(
            observable_names(c.observables()),
            template.observables(),
            "{}",
            name
        );
    }
    assert_eq!(blocks.len(), registry.len());
}

#[test]
fn test_all_families_are_present() {
    let families: BTreeSet<_> = Registry::builtin()
        .iter()
        .map(|(_, t)| t.family().as_str())
        .collect();
    for family in [
        TemplateFamily::Gaussian,
        TemplateFamily::AmorosoLimit,
        TemplateFamily::AmorosoMode,
        TemplateFamily::Amoroso,
        TemplateFamily::MultivariateGaussian,
    ] {
        assert!(families.contains(family.as_str()), "no {} entry", family);
    }
}

#[test]
fn test_cdf_forward_backward_asymmetry() {
    let predictor = RecordingPredictor::new();
    let blocks = RecordingBlockFactory::new();
    let context = MakeContext::new(&predictor, &blocks);

    let c = Constraint::make(
        "B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@CDF-2011",
        &Options::new(),
        &context,
    )
    .unwrap();

    let requests = predictor.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].name, "B->K^*ll::A_FB");
    assert_eq!(requests[0].kinematics.get("s_min"), Some(1.0));
    assert_eq!(requests[0].kinematics.get("s_max"), Some(6.0));
    assert_eq!(requests[0].options.get("l"), Some("mu"));
    assert_eq!(requests[0].options.get("q"), Some("d"));

    let p = gaussian_parameters(&c.blocks()[0]).unwrap();
    assert!(p.min < p.central && p.central < p.max);
}

#[test]
fn test_cdf_b_s_limit() {
    let predictor = RecordingPredictor::new();
    let blocks = RecordingBlockFactory::new();
    let context = MakeContext::new(&predictor, &blocks);

    let c = Constraint::make("B^0_s->mu^+mu^-::BR_limit@CDF-2011", &Options::new(), &context)
        .unwrap();

    let p = amoroso_limit_parameters(&c.blocks()[0]).unwrap();
    assert_eq!(p.physical_limit, 0.0);
    assert_eq!(p.upper_limit_90, 3.5e-8);
    assert_eq!(p.upper_limit_95, 4.0e-8);
    assert_eq!(p.theta, 3.60911035e-8);
    assert_eq!(p.alpha, 0.30785263);
    assert_eq!(predictor.requests()[0].options.get("q"), Some("s"));
}

#[test]
fn test_hfag_joint_cp_asymmetries() {
    let predictor = RecordingPredictor::new();
    let blocks = RecordingBlockFactory::new();
    let context = MakeContext::new(&predictor, &blocks);

    let c = Constraint::make("B^0->K^*0gamma::S_K+C_K@HFAG-2011", &Options::new(), &context)
        .unwrap();

    assert_eq!(
        observable_names(c.observables()),
        vec!["B->K^*gamma::S_K", "B->K^*gamma::C_K"]
    );
    let p = multivariate_parameters(&c.blocks()[0]).unwrap();
    assert_eq!(p.dim(), 2);
    assert_eq!(p.means, vec![-0.16, -0.04]);
    assert!((p.variances[0] - 0.22 * 0.22).abs() < 1e-15);
    assert!((p.variances[1] - 0.14 * 0.14).abs() < 1e-15);
    assert_eq!(p.correlation, vec![vec![1.0, 0.06], vec![0.06, 1.0]]);
}

#[test]
fn test_unknown_name_leaves_collaborators_untouched() {
    let predictor = RecordingPredictor::new();
    let blocks = RecordingBlockFactory::new();
    let context = MakeContext::new(&predictor, &blocks);

    let err = Constraint::make("B->nothing::BR@Nobody-1999", &Options::new(), &context)
        .unwrap_err();

    assert_eq!(err, FlavorError::UnknownConstraint("B->nothing::BR@Nobody-1999".into()));
    assert_eq!(predictor.resolutions(), 0);
    assert!(blocks.is_empty());
}

#[test]
fn test_builtin_is_shared_across_threads() {
    let addresses: Vec<usize> = (0..8)
        .map(|_| thread::spawn(|| Registry::builtin() as *const Registry as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_parallel_construction() {
    let predictor = RecordingPredictor::new();
    let blocks = RecordingBlockFactory::new();
    let context = MakeContext::new(&predictor, &blocks);
    let names: Vec<_> = Registry::builtin().names().collect();

    let built: Vec<_> = names
        .par_iter()
        .map(|name| Constraint::make(name, &Options::new(), &context))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(built.len(), names.len());
    assert_eq!(blocks.len(), names.len());
}

#[test]
fn test_dump_covers_every_entry() {
    let yaml = Registry::builtin().to_yaml().unwrap();
    let limits = Registry::builtin()
        .iter()
        .filter(|(_, t)| matches!(t, ConstraintTemplate::AmorosoLimit(_)))
        .count();
    assert_eq!(yaml.matches("type: amoroso_limit").count(), limits);
}
