//! Error types for FlavorForge

use thiserror::Error;

/// Main error type for FlavorForge operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlavorError {
    /// The requested constraint name is not registered.
    #[error("Unknown constraint: {0}")]
    UnknownConstraint(String),

    /// A template could not resolve one of its observables.
    ///
    /// This signals that the observable catalogue and the constraint
    /// catalogue have drifted apart.
    #[error("Constraint '{constraint}' refers to unknown observable '{observable}'")]
    UnknownObservable {
        constraint: String,
        observable: String,
    },

    /// An option value that the template does not know how to apply.
    #[error("Constraint '{constraint}': unsupported value '{value}' for option '{key}'")]
    UnsupportedOption {
        constraint: String,
        key: String,
        value: String,
    },

    /// A constraint name was registered twice.
    #[error("Duplicate constraint: {0}")]
    DuplicateConstraint(String),

    /// A template's literal data is inconsistent.
    #[error("Invalid template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },

    /// A string does not follow the catalogue naming pattern.
    #[error("Invalid constraint name '{0}'")]
    InvalidName(String),

    /// An options string could not be parsed.
    #[error("Invalid options '{0}'")]
    InvalidOptions(String),

    /// The likelihood-block factory rejected the requested block.
    #[error("Likelihood block error: {0}")]
    LikelihoodBlock(String),

    /// Serialization of catalogue contents failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FlavorError {
    /// Returns true if the caller can skip the offending constraint and go on.
    ///
    /// Only unknown names qualify; everything else points at a broken catalogue
    /// or a broken collaborator.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FlavorError::UnknownConstraint(_))
    }

    /// Shorthand for an [`FlavorError::InvalidTemplate`].
    pub fn invalid_template(name: impl Into<String>, reason: impl Into<String>) -> Self {
        FlavorError::InvalidTemplate {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for FlavorForge operations
pub type Result<T> = std::result::Result<T, FlavorError>;
