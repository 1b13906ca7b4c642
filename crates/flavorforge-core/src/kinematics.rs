//! Kinematic points selecting the bin of an observable.

use std::fmt;

use serde::Serialize;

/// Ordered mapping from kinematic variable name to value.
///
/// Declaration order is preserved. Two `Kinematics` compare equal when they
/// hold the same variables, in the same order, with the same values.
///
/// # Example
///
/// ```
/// use flavorforge_core::Kinematics;
///
/// let k = Kinematics::from_pairs(&[("s_min", 1.0), ("s_max", 6.0)]);
/// assert_eq!(k.get("s_max"), Some(6.0));
/// assert_eq!(k.to_string(), "s_min=1,s_max=6");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kinematics {
    variables: Vec<(String, f64)>,
}

impl Kinematics {
    /// Creates an empty kinematic point.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates kinematics from literal `(name, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |k, (name, value)| k.with(*name, *value))
    }

    /// Returns a copy with `name` set to `value`.
    ///
    /// An existing variable keeps its position.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        match self.variables.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.variables.push((name, value)),
        }
        self
    }

    /// Returns the value of a kinematic variable.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if no variable is set.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl fmt::Display for Kinematics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_is_kept() {
        let k = Kinematics::new().with("s_max", 6.0).with("s_min", 1.0);
        let names: Vec<_> = k.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["s_max", "s_min"]);
    }

    #[test]
    fn test_with_overwrites_in_place() {
        let k = Kinematics::from_pairs(&[("s_min", 1.0), ("s_max", 6.0)]).with("s_min", 2.0);
        assert_eq!(k.len(), 2);
        assert_eq!(k.get("s_min"), Some(2.0));
        assert_eq!(k.iter().next(), Some(("s_min", 2.0)));
    }

    #[test]
    fn test_content_equality() {
        let a = Kinematics::from_pairs(&[("E_min", 1.8)]);
        let b = Kinematics::new().with("E_min", 1.8);
        assert_eq!(a, b);
        assert_ne!(a, Kinematics::new().with("E_min", 2.0));
    }

    #[test]
    fn test_empty() {
        let k = Kinematics::new();
        assert!(k.is_empty());
        assert_eq!(k.get("s_min"), None);
        assert_eq!(k.to_string(), "");
    }
}
