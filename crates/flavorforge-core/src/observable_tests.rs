//! Tests for observable resolution and deduplication

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::kinematics::Kinematics;
use super::observable::*;
use super::options::Options;
use super::parameters::Parameters;

#[derive(Debug)]
struct FixedObservable {
    name: String,
    kinematics: Kinematics,
    options: Options,
    parameters: Parameters,
}

impl Observable for FixedObservable {
    fn name(&self) -> &str {
        &self.name
    }
    fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }
    fn options(&self) -> &Options {
        &self.options
    }
    fn parameters(&self) -> &Parameters {
        &self.parameters
    }
    fn evaluate(&self) -> f64 {
        self.parameters.get(&self.name).unwrap_or(0.0)
    }
}

#[derive(Default)]
struct CountingPredictor {
    calls: AtomicUsize,
}

impl ObservablePredictor for CountingPredictor {
    fn make(
        &self,
        name: &str,
        parameters: &Parameters,
        kinematics: &Kinematics,
        options: &Options,
    ) -> Option<ObservableHandle> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !name.contains("::") {
            return None;
        }
        Some(Arc::new(FixedObservable {
            name: name.to_string(),
            kinematics: kinematics.clone(),
            options: options.clone(),
            parameters: parameters.clone(),
        }))
    }
}

fn bin_1_6() -> Kinematics {
    Kinematics::from_pairs(&[("s_min", 1.0), ("s_max", 6.0)])
}

// ============================================================================
// ObservableCache tests
// ============================================================================

#[test]
fn test_cache_reuses_identical_requests() {
    let predictor = CountingPredictor::default();
    let mut cache = ObservableCache::new(&predictor);
    let options = Options::from_pairs(&[("l", "mu")]);

    let a = cache.resolve("B->K^*ll::BR", &bin_1_6(), &options).unwrap();
    let b = cache.resolve("B->K^*ll::BR", &bin_1_6(), &options).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);
    assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_cache_distinguishes_options() {
    let predictor = CountingPredictor::default();
    let mut cache = ObservableCache::new(&predictor);

    let a = cache
        .resolve("B->K^*ll::BR", &bin_1_6(), &Options::from_pairs(&[("l", "mu")]))
        .unwrap();
    let b = cache
        .resolve("B->K^*ll::BR", &bin_1_6(), &Options::from_pairs(&[("l", "e")]))
        .unwrap();

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cache_shares_parameter_context() {
    let predictor = CountingPredictor::default();
    let mut cache = ObservableCache::new(&predictor);

    let a = cache.resolve("B->K^*gamma::S_K", &Kinematics::new(), &Options::new()).unwrap();
    let b = cache.resolve("B->K^*gamma::C_K", &Kinematics::new(), &Options::new()).unwrap();

    assert!(a.parameters().ptr_eq(b.parameters()));
    assert!(a.parameters().ptr_eq(cache.parameters()));
    cache.parameters().set("B->K^*gamma::S_K", -0.2);
    assert_eq!(a.evaluate(), -0.2);
}

#[test]
fn test_cache_unknown_observable() {
    let predictor = CountingPredictor::default();
    let mut cache = ObservableCache::new(&predictor);

    assert!(cache.resolve("garbage", &Kinematics::new(), &Options::new()).is_none());
    assert!(cache.is_empty());
}

// ============================================================================
// ObservableSet tests
// ============================================================================

#[test]
fn test_set_deduplicates_same_handle() {
    let predictor = CountingPredictor::default();
    let mut cache = ObservableCache::new(&predictor);
    let o = cache.resolve("B_q->ll::BR", &Kinematics::new(), &Options::new()).unwrap();

    let mut set = ObservableSet::new();
    assert!(set.insert(Arc::clone(&o)));
    assert!(!set.insert(o));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_set_deduplicates_equal_content_in_same_context() {
    let predictor = CountingPredictor::default();
    let parameters = Parameters::new();
    let options = Options::from_pairs(&[("q", "s")]);
    let a = predictor
        .make("B_q->ll::BR", &parameters, &Kinematics::new(), &options)
        .unwrap();
    let b = predictor
        .make("B_q->ll::BR", &parameters, &Kinematics::new(), &options)
        .unwrap();

    let set: ObservableSet = vec![a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_set_keeps_observables_from_distinct_contexts() {
    let predictor = CountingPredictor::default();
    let a = predictor
        .make("B_q->ll::BR", &Parameters::new(), &Kinematics::new(), &Options::new())
        .unwrap();
    let b = predictor
        .make("B_q->ll::BR", &Parameters::new(), &Kinematics::new(), &Options::new())
        .unwrap();

    let set: ObservableSet = vec![a, b].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_set_iterates_in_insertion_order() {
    let predictor = CountingPredictor::default();
    let mut cache = ObservableCache::new(&predictor);
    let mut set = ObservableSet::new();
    for name in ["B->K^*gamma::S_K", "B->K^*gamma::C_K", "B->K^*gamma::BR"] {
        set.insert(cache.resolve(name, &Kinematics::new(), &Options::new()).unwrap());
    }

    let names: Vec<_> = set.iter().map(|o| o.name().to_string()).collect();
    assert_eq!(names, vec!["B->K^*gamma::S_K", "B->K^*gamma::C_K", "B->K^*gamma::BR"]);
}
