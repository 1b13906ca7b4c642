//! Theory and variant switches for observables and templates.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FlavorError, Result};

/// String-keyed option switches such as `"l" -> "mu"` or `"q" -> "d"`.
///
/// Options compose by overlay: see [`Options::overlay`].
///
/// # Example
///
/// ```
/// use flavorforge_core::Options;
///
/// let defaults = Options::from_pairs(&[("l", "mu"), ("q", "d")]);
/// let caller = Options::parse("q=u").unwrap();
///
/// let merged = defaults.overlay(&caller);
/// assert_eq!(merged.get("q"), Some("u"));
/// assert_eq!(merged.get("l"), Some("mu"));
/// assert_eq!(merged.to_string(), "l=mu,q=u");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    values: BTreeMap<String, String>,
}

impl Options {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options from literal `(key, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |o, (key, value)| o.with(*key, *value))
    }

    /// Parses the `key=value,key=value` syntax.
    ///
    /// Whitespace around keys and values is ignored; an empty string yields
    /// empty options.
    pub fn parse(s: &str) -> Result<Self> {
        let mut options = Self::new();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (key, value) = item
                .split_once('=')
                .ok_or_else(|| FlavorError::InvalidOptions(s.to_string()))?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                return Err(FlavorError::InvalidOptions(s.to_string()));
            }
            options.set(key, value);
        }
        Ok(options)
    }

    /// Returns a copy with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` to `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Gets the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Gets the value for `key`, or `default` when unset.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Returns true if `key` is set.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Layers `overrides` on top of `self`.
    ///
    /// Keys present in `overrides` win; all other keys keep their value from
    /// `self`.
    pub fn overlay(&self, overrides: &Options) -> Options {
        let mut merged = self.clone();
        for (key, value) in &overrides.values {
            merged.values.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Iterates over `(key, value)` pairs sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no option is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_caller_wins() {
        let baked = Options::from_pairs(&[("l", "mu"), ("q", "d")]);
        let caller = Options::new().with("q", "s").with("model", "WilsonScan");

        let merged = baked.overlay(&caller);
        assert_eq!(merged.get("l"), Some("mu"));
        assert_eq!(merged.get("q"), Some("s"));
        assert_eq!(merged.get("model"), Some("WilsonScan"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_overlay_leaves_operands_untouched() {
        let baked = Options::from_pairs(&[("q", "d")]);
        let caller = Options::from_pairs(&[("q", "u")]);
        let _ = baked.overlay(&caller);
        assert_eq!(baked.get("q"), Some("d"));
        assert_eq!(caller.get("q"), Some("u"));
    }

    #[test]
    fn test_parse() {
        let o = Options::parse(" l = mu , q=s ").unwrap();
        assert_eq!(o.get("l"), Some("mu"));
        assert_eq!(o.get("q"), Some("s"));
        assert!(Options::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Options::parse("l=mu,q"),
            Err(FlavorError::InvalidOptions("l=mu,q".to_string()))
        );
        assert!(Options::parse("=mu").is_err());
        assert!(Options::parse("l=").is_err());
    }

    #[test]
    fn test_get_or() {
        let o = Options::new();
        assert_eq!(o.get_or("uncertainty", "asymmetric+quadratic"), "asymmetric+quadratic");
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let o = Options::from_pairs(&[("q", "u"), ("l", "e")]);
        assert_eq!(o.to_string(), "l=e,q=u");
        assert_eq!(Options::parse(&o.to_string()).unwrap(), o);
    }
}
