//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A wildcard pattern in the template is not a valid regular expression.
    #[error("invalid route pattern {pattern:?}: {message}")]
    Syntax {
        /// The offending template.
        pattern: String,
        /// Diagnostic from the regex engine.
        message: String,
    },

    /// A path could not be built from a named route.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// A route table could not be deserialized.
    #[error("invalid route table: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reasons a path cannot be rebuilt from a named route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No route is registered under the name.
    #[error("no route found with name {name:?}")]
    UnknownRoute { name: String },

    /// A named wildcard has no value in the supplied parameters.
    #[error("missing parameter {param:?} in route {route:?}")]
    MissingParameter { route: String, param: String },

    /// The route contains an anonymous wildcard, which has no value source.
    #[error("anonymous wildcard found, cannot build route {route:?}")]
    AnonymousWildcard { route: String },

    /// A supplied value does not match the wildcard's pattern.
    #[error("parameter {param:?} of route {route:?} does not match {pattern:?}: {value:?}")]
    ParameterMismatch {
        route: String,
        param: String,
        pattern: String,
        value: String,
    },
}

impl RouterError {
    /// Returns `true` for template syntax errors raised at registration.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// Returns the build error, if this is one.
    #[must_use]
    pub const fn as_build(&self) -> Option<&BuildError> {
        match self {
            Self::Build(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
