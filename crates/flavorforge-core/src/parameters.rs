//! Shared parameter context backing theory predictions.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Handle to one parameter context.
///
/// Clones share the same underlying values, so observables built against one
/// context all see a later `set`. Every constraint construction starts from a
/// fresh context; contexts are never shared between constraints.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    values: Arc<RwLock<BTreeMap<String, f64>>>,
}

impl Parameters {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context pre-filled with `(name, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        let parameters = Self::new();
        for (name, value) in pairs {
            parameters.set(*name, *value);
        }
        parameters
    }

    /// Reads a parameter value.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
    }

    /// Sets a parameter value, visible through every clone of this handle.
    pub fn set(&self, name: impl Into<String>, value: f64) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value);
    }

    /// Returns the parameter names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Returns true if both handles refer to the same context.
    pub fn ptr_eq(&self, other: &Parameters) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_values() {
        let p = Parameters::new();
        let q = p.clone();
        q.set("mass::b(MSbar)", 4.18);
        assert_eq!(p.get("mass::b(MSbar)"), Some(4.18));
        assert!(p.ptr_eq(&q));
    }

    #[test]
    fn test_fresh_contexts_are_independent() {
        let p = Parameters::from_pairs(&[("CKM::A", 0.81)]);
        let q = Parameters::from_pairs(&[("CKM::A", 0.81)]);
        q.set("CKM::A", 0.79);
        assert_eq!(p.get("CKM::A"), Some(0.81));
        assert!(!p.ptr_eq(&q));
    }

    #[test]
    fn test_names_sorted() {
        let p = Parameters::from_pairs(&[("b", 1.0), ("a", 2.0)]);
        assert_eq!(p.names(), vec!["a".to_string(), "b".to_string()]);
    }
}
