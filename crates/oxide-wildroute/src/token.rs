//! Token types for route templates.

use std::fmt;

/// The regex fragment used by wildcards without an explicit pattern.
pub const DEFAULT_PATTERN: &str = "[^/]+";

/// A wildcard element of a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wildcard {
    /// Parameter name, `None` for anonymous wildcards.
    pub name: Option<String>,
    /// Explicit regex fragment, `None` to use [`DEFAULT_PATTERN`].
    pub pattern: Option<String>,
}

impl Wildcard {
    /// Creates a wildcard. Empty names and patterns are normalized to `None`.
    #[must_use]
    pub fn new(name: Option<&str>, pattern: Option<&str>) -> Self {
        Self {
            name: name.filter(|s| !s.is_empty()).map(String::from),
            pattern: pattern.filter(|s| !s.is_empty()).map(String::from),
        }
    }

    /// Returns `true` if the wildcard has no name.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    /// Returns the regex fragment this wildcard matches.
    #[must_use]
    pub fn effective_pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_PATTERN)
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(":")?;
        if let Some(name) = &self.name {
            f.write_str(name)?;
        }
        if let Some(pattern) = &self.pattern {
            write!(f, "#{pattern}#")?;
        }
        Ok(())
    }
}

/// A single element of a tokenized template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Text matched and emitted verbatim.
    Literal(String),
    /// A capturing wildcard.
    Wildcard(Wildcard),
}

impl Token {
    /// Creates a literal token.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Creates a wildcard token.
    #[must_use]
    pub fn wildcard(name: Option<&str>, pattern: Option<&str>) -> Self {
        Self::Wildcard(Wildcard::new(name, pattern))
    }

    /// Returns `true` if this is a literal token.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns the wildcard, if this is one.
    #[must_use]
    pub const fn as_wildcard(&self) -> Option<&Wildcard> {
        match self {
            Self::Wildcard(w) => Some(w),
            Self::Literal(_) => None,
        }
    }
}

/// Renders the token in template syntax. Colons in literals are doubled.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(&text.replace(':', "::")),
            Self::Wildcard(w) => w.fmt(f),
        }
    }
}
