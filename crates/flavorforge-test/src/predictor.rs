//! Recording prediction engine.
//!
//! # Example
//!
//! ```
//! use flavorforge_core::{Kinematics, ObservablePredictor, Options};
//! use flavorforge_test::RecordingPredictor;
//!
//! let predictor = RecordingPredictor::allowing(["B->K^*gamma::BR"]);
//! let parameters = predictor.parameters();
//!
//! let (kinematics, options) = (Kinematics::new(), Options::new());
//! let known = predictor.make("B->K^*gamma::BR", &parameters, &kinematics, &options);
//! let unknown = predictor.make("B->nothing::BR", &parameters, &kinematics, &options);
//! assert!(known.is_some());
//! assert!(unknown.is_none());
//! assert_eq!(predictor.resolutions(), 1);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError};

use flavorforge_core::{
    Kinematics, Observable, ObservableHandle, ObservablePredictor, Options, Parameters,
};

/// One call the engine answered.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservableRequest {
    pub name: String,
    pub kinematics: Kinematics,
    pub options: Options,
}

/// Observable handed out by [`RecordingPredictor`].
///
/// Evaluates to the parameter of the same name if one is set, otherwise to
/// the configured prediction.
#[derive(Debug)]
pub struct RecordedObservable {
    name: String,
    kinematics: Kinematics,
    options: Options,
    parameters: Parameters,
    prediction: f64,
}

impl Observable for RecordedObservable {
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
        self.parameters.get(&self.name).unwrap_or(self.prediction)
    }
}

/// Prediction engine that knows every name, or only an allow-list, and
/// records each successful resolution.
#[derive(Debug, Default)]
pub struct RecordingPredictor {
    allowed: Option<BTreeSet<String>>,
    predictions: BTreeMap<String, f64>,
    requests: Mutex<Vec<ObservableRequest>>,
}

impl RecordingPredictor {
    /// Accepts every observable name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts only the listed names.
    pub fn allowing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: Some(names.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Sets the value observables named `name` evaluate to. Defaults to 0.
    pub fn with_prediction(mut self, name: impl Into<String>, value: f64) -> Self {
        self.predictions.insert(name.into(), value);
        self
    }

    /// Every answered request, in call order.
    pub fn requests(&self) -> Vec<ObservableRequest> {
        self.lock().clone()
    }

    /// Number of answered requests.
    pub fn resolutions(&self) -> usize {
        self.lock().len()
    }

    /// Number of answered requests for `name`.
    pub fn resolutions_of(&self, name: &str) -> usize {
        self.lock().iter().filter(|r| r.name == name).count()
    }

    /// Forgets all recorded requests.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ObservableRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn knows(&self, name: &str) -> bool {
        self.allowed.as_ref().map_or(true, |allowed| allowed.contains(name))
    }
}

impl ObservablePredictor for RecordingPredictor {
    fn make(
        &self,
        name: &str,
        parameters: &Parameters,
        kinematics: &Kinematics,
        options: &Options,
    ) -> Option<ObservableHandle> {
        if !self.knows(name) {
            return None;
        }

        self.lock().push(ObservableRequest {
            name: name.to_string(),
            kinematics: kinematics.clone(),
            options: options.clone(),
        });

        Some(Arc::new(RecordedObservable {
            name: name.to_string(),
            kinematics: kinematics.clone(),
            options: options.clone(),
            parameters: parameters.clone(),
            prediction: self.predictions.get(name).copied().unwrap_or(0.0),
        }))
    }
}

/// Names of `observables`, in iteration order.
pub fn observable_names<'a>(
    observables: impl IntoIterator<Item = &'a ObservableHandle>,
) -> Vec<String> {
    observables.into_iter().map(|o| o.name().to_string()).collect()
}
