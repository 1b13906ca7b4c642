//! Name-keyed registry of constraint templates.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use flavorforge_core::{FlavorError, Options, Result};

use crate::catalogue;
use crate::constraint::Constraint;
use crate::template::{ConstraintTemplate, MakeContext};

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Maps public constraint names to the templates that build them.
///
/// A registry is filled once and read-only afterwards, so it can be shared
/// between threads freely. Tests build their own instances with
/// [`Registry::from_entries`]; production code normally uses
/// [`Registry::builtin`].
///
/// # Example
///
/// ```
/// use flavorforge_constraints::Registry;
///
/// let registry = Registry::builtin();
/// assert!(registry.contains("B^0_s->mu^+mu^-::BR_limit@CDF-2011"));
/// assert!(registry.get("B->nothing::BR@Nobody-1999").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, ConstraintTemplate>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `(name, template)` pairs.
    ///
    /// # Errors
    ///
    /// Fails on the first duplicate name or inconsistent template.
    pub fn from_entries<N, I>(entries: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, ConstraintTemplate)>,
    {
        let mut registry = Self::new();
        for (name, template) in entries {
            registry.register(name, template)?;
        }
        Ok(registry)
    }

    /// Returns the process-wide registry over the built-in catalogue.
    ///
    /// Built on first access; concurrent first accesses build it exactly once.
    ///
    /// # Panics
    ///
    /// Panics if the built-in catalogue contains a duplicate name or an
    /// inconsistent template. The catalogue test suite guards against this.
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| {
            Registry::from_entries(catalogue::entries()).unwrap_or_else(|err| {
                panic!("built-in constraint catalogue is inconsistent: {}", err)
            })
        })
    }

    /// Adds a template under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FlavorError::DuplicateConstraint`] if `name` is taken, or the
    /// template's validation error. The registry is unchanged on error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        template: ConstraintTemplate,
    ) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(FlavorError::DuplicateConstraint(name));
        }
        template.validate(&name)?;
        self.entries.insert(name, template);
        Ok(())
    }

    /// Builds the constraint registered as `name`.
    ///
    /// # Errors
    ///
    /// [`FlavorError::UnknownConstraint`] if nothing is registered under
    /// `name`; otherwise whatever the template reports.
    pub fn make(
        &self,
        name: &str,
        options: &Options,
        context: &MakeContext<'_>,
    ) -> Result<Constraint> {
        let template = self
            .entries
            .get(name)
            .ok_or_else(|| FlavorError::UnknownConstraint(name.to_string()))?;

        debug!(constraint = name, family = %template.family(), "Building constraint");
        template.make(name, options, context)
    }

    /// Looks up a template.
    pub fn get(&self, name: &str) -> Option<&ConstraintTemplate> {
        self.entries.get(name)
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, template)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConstraintTemplate)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Entries whose name contains `pattern`.
    pub fn filter<'r>(
        &'r self,
        pattern: &'r str,
    ) -> impl Iterator<Item = (&'r str, &'r ConstraintTemplate)> + 'r {
        self.iter().filter(move |(name, _)| name.contains(pattern))
    }

    /// Number of registered constraints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dumps all templates as YAML, keyed by name.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.entries).map_err(|e| FlavorError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests;
