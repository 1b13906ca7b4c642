//! Observables and the prediction engine that resolves them.
//!
//! The prediction engine itself lives outside this workspace; it is consumed
//! through the [`ObservablePredictor`] trait.

use std::fmt::Debug;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::kinematics::Kinematics;
use crate::options::Options;
use crate::parameters::Parameters;

/// A resolved theory prediction bound to one kinematic point.
pub trait Observable: Debug + Send + Sync {
    /// Catalogue name, e.g. `"B->K^*ll::A_FB"`.
    fn name(&self) -> &str;

    /// Kinematic point the observable was resolved at.
    fn kinematics(&self) -> &Kinematics;

    /// Options the observable was resolved with.
    fn options(&self) -> &Options;

    /// Parameter context the prediction reads from.
    fn parameters(&self) -> &Parameters;

    /// Evaluates the prediction for the current parameter values.
    fn evaluate(&self) -> f64;
}

/// Shared handle to a resolved observable.
pub type ObservableHandle = Arc<dyn Observable>;

/// External prediction engine mapping observable names to predictions.
pub trait ObservablePredictor: Send + Sync {
    /// Creates a fresh parameter context.
    fn parameters(&self) -> Parameters {
        Parameters::new()
    }

    /// Resolves `name` at the given kinematic point.
    ///
    /// Returns `None` if the engine does not know the observable.
    fn make(
        &self,
        name: &str,
        parameters: &Parameters,
        kinematics: &Kinematics,
        options: &Options,
    ) -> Option<ObservableHandle>;
}

/// Returns true if both handles denote the same observable.
///
/// Identity means the same allocation, or the same name, kinematics and
/// options over the same parameter context.
pub fn same_observable(a: &ObservableHandle, b: &ObservableHandle) -> bool {
    Arc::ptr_eq(a, b)
        || (a.name() == b.name()
            && a.kinematics() == b.kinematics()
            && a.options() == b.options()
            && a.parameters().ptr_eq(b.parameters()))
}

struct CacheEntry {
    name: String,
    kinematics: Kinematics,
    options: Options,
    observable: ObservableHandle,
}

/// Per-construction cache in front of an [`ObservablePredictor`].
///
/// Requests for the same name, kinematics and options return the same
/// handle. One cache owns one parameter context.
pub struct ObservableCache<'a> {
    predictor: &'a dyn ObservablePredictor,
    parameters: Parameters,
    entries: Vec<CacheEntry>,
}

impl<'a> ObservableCache<'a> {
    /// Creates a cache with a fresh parameter context from `predictor`.
    pub fn new(predictor: &'a dyn ObservablePredictor) -> Self {
        let parameters = predictor.parameters();
        Self::with_parameters(predictor, parameters)
    }

    /// Creates a cache over an existing parameter context.
    pub fn with_parameters(predictor: &'a dyn ObservablePredictor, parameters: Parameters) -> Self {
        Self {
            predictor,
            parameters,
            entries: Vec::new(),
        }
    }

    /// Resolves an observable, reusing a cached handle when possible.
    pub fn resolve(
        &mut self,
        name: &str,
        kinematics: &Kinematics,
        options: &Options,
    ) -> Option<ObservableHandle> {
        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.name == name && e.kinematics == *kinematics && e.options == *options)
        {
            return Some(Arc::clone(&entry.observable));
        }

        let observable = self
            .predictor
            .make(name, &self.parameters, kinematics, options)?;
        self.entries.push(CacheEntry {
            name: name.to_string(),
            kinematics: kinematics.clone(),
            options: options.clone(),
            observable: Arc::clone(&observable),
        });
        Some(observable)
    }

    /// Parameter context shared by every observable in this cache.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Number of distinct observables resolved so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was resolved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Insertion-ordered set of observables, deduplicated by identity.
#[derive(Debug, Clone, Default)]
pub struct ObservableSet {
    observables: SmallVec<[ObservableHandle; 2]>,
}

impl ObservableSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observable. Returns false if it was already present.
    pub fn insert(&mut self, observable: ObservableHandle) -> bool {
        if self.contains(&observable) {
            return false;
        }
        self.observables.push(observable);
        true
    }

    /// Returns true if an identical observable is present.
    pub fn contains(&self, observable: &ObservableHandle) -> bool {
        self.observables
            .iter()
            .any(|o| same_observable(o, observable))
    }

    /// Iterates over the observables in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ObservableHandle> {
        self.observables.iter()
    }

    /// Returns the number of distinct observables.
    pub fn len(&self) -> usize {
        self.observables.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.observables.is_empty()
    }
}

impl<'s> IntoIterator for &'s ObservableSet {
    type Item = &'s ObservableHandle;
    type IntoIter = std::slice::Iter<'s, ObservableHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<ObservableHandle> for ObservableSet {
    fn extend<I: IntoIterator<Item = ObservableHandle>>(&mut self, iter: I) {
        for observable in iter {
            self.insert(observable);
        }
    }
}

impl FromIterator<ObservableHandle> for ObservableSet {
    fn from_iter<I: IntoIterator<Item = ObservableHandle>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
