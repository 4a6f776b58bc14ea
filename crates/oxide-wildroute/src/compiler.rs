//! Route compilation and matching.

use regex::Regex;

use crate::error::{BuildError, Result, RouterError};
use crate::params::PathParams;
use crate::token::{Token, Wildcard};
use crate::tokenizer::{Tokenizer, to_template};

/// How a compiled route tests a candidate path.
#[derive(Debug, Clone)]
enum Matcher {
    /// Template without wildcards, compared by equality.
    Static(String),
    /// Anchored regex with one named group per wildcard.
    Pattern(Regex),
}

/// A route template compiled for matching and path building.
///
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    /// The original template string.
    pattern: String,
    /// Tokens, kept for rebuilding paths.
    tokens: Vec<Token>,
    /// Compiled matcher.
    matcher: Matcher,
    /// Names of the named wildcards in order.
    param_names: Vec<String>,
    /// Name of every wildcard in order, `None` for anonymous ones.
    slots: Vec<Option<String>>,
    /// Anchored per-wildcard regexes for checking build values.
    validators: Vec<Regex>,
}

/// Returns the capture group name of the wildcard at `index`.
fn group_name(index: usize) -> String {
    format!("__w{index}")
}

fn syntax_error(pattern: &str, e: &regex::Error) -> RouterError {
    RouterError::Syntax {
        pattern: pattern.to_string(),
        message: e.to_string(),
    }
}

/// Compiles `fragment` anchored at both ends, mapping failures to syntax errors.
///
/// The fragment must be a valid regex on its own, so it cannot close the
/// group it is wrapped in.
fn compile_anchored(pattern: &str, fragment: &str) -> Result<Regex> {
    Regex::new(fragment).map_err(|e| syntax_error(pattern, &e))?;
    Regex::new(&format!("^(?:{fragment})$")).map_err(|e| syntax_error(pattern, &e))
}

impl CompiledRoute {
    /// Tokenizes and compiles a route template.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_wildroute::CompiledRoute;
    ///
    /// let route = CompiledRoute::new("/posts/:id#[0-9]+#/:slug").unwrap();
    /// let params = route.match_path("/posts/12/hello").unwrap();
    /// assert_eq!(params.get("id"), Some("12"));
    /// assert_eq!(params.get("slug"), Some("hello"));
    /// assert!(route.match_path("/posts/abc/hello").is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Syntax`] if a wildcard pattern is not a valid
    /// regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        let tokens = Tokenizer::new(pattern).tokenize();
        Self::compile(pattern.to_string(), tokens)
    }

    /// Compiles an already tokenized template.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Syntax`] if a wildcard pattern is not a valid
    /// regular expression.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self> {
        let pattern = to_template(&tokens);
        Self::compile(pattern, tokens)
    }

    fn compile(pattern: String, tokens: Vec<Token>) -> Result<Self> {
        let mut regex_str = String::from("^");
        let mut param_names = Vec::new();
        let mut slots = Vec::new();
        let mut validators = Vec::new();

        for token in &tokens {
            match token {
                Token::Literal(text) => regex_str.push_str(&regex::escape(text)),
                Token::Wildcard(w) => {
                    let fragment = w.effective_pattern();
                    validators.push(compile_anchored(&pattern, fragment)?);
                    regex_str.push_str(&format!("(?P<{}>{fragment})", group_name(slots.len())));
                    if let Some(name) = &w.name {
                        param_names.push(name.clone());
                    }
                    slots.push(w.name.clone());
                }
            }
        }

        regex_str.push('$');

        let matcher = if slots.is_empty() {
            let literal: String = tokens
                .iter()
                .filter_map(|t| match t {
                    Token::Literal(text) => Some(text.as_str()),
                    Token::Wildcard(_) => None,
                })
                .collect();
            Matcher::Static(literal)
        } else {
            Matcher::Pattern(Regex::new(&regex_str).map_err(|e| syntax_error(&pattern, &e))?)
        };

        Ok(Self {
            pattern,
            tokens,
            matcher,
            param_names,
            slots,
            validators,
        })
    }

    /// Returns the original template string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the template tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the names of the named wildcards, in template order.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Returns the number of wildcards, named or anonymous.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the template has no wildcards.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self.matcher, Matcher::Static(_))
    }

    /// Returns the compiled regex, or `None` for static routes.
    #[must_use]
    pub const fn regex(&self) -> Option<&Regex> {
        match &self.matcher {
            Matcher::Pattern(re) => Some(re),
            Matcher::Static(_) => None,
        }
    }

    /// Matches the whole path and returns one capture per wildcard, in
    /// template order.
    #[must_use]
    pub fn captures<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        match &self.matcher {
            Matcher::Static(literal) => (literal == path).then(Vec::new),
            Matcher::Pattern(re) => {
                let caps = re.captures(path)?;
                (0..self.slots.len())
                    .map(|i| caps.name(&group_name(i)).map(|m| m.as_str()))
                    .collect()
            }
        }
    }

    /// Matches the whole path and returns the named parameters.
    ///
    /// Anonymous wildcards must match but are left out. If a name repeats,
    /// the later capture wins.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let captures = self.captures(path)?;
        Some(
            self.slots
                .iter()
                .zip(captures)
                .filter_map(|(slot, value)| slot.as_deref().map(|name| (name, value)))
                .collect(),
        )
    }

    /// Rebuilds a path by substituting `params` into the template.
    ///
    /// `route` is the route name used in error reports.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if the template has an anonymous wildcard,
    /// a parameter is missing, or a value does not match its wildcard's
    /// pattern.
    pub fn build(&self, route: &str, params: &PathParams) -> std::result::Result<String, BuildError> {
        let mut path = String::new();
        let mut wildcards = self.validators.iter();

        for token in &self.tokens {
            match token {
                Token::Literal(text) => path.push_str(text),
                Token::Wildcard(w) => {
                    let validator = wildcards.next();
                    path.push_str(&Self::substitute(route, w, validator, params)?);
                }
            }
        }

        Ok(path)
    }

    fn substitute(
        route: &str,
        wildcard: &Wildcard,
        validator: Option<&Regex>,
        params: &PathParams,
    ) -> std::result::Result<String, BuildError> {
        let name = wildcard
            .name
            .as_deref()
            .ok_or_else(|| BuildError::AnonymousWildcard {
                route: route.to_string(),
            })?;

        let value = params
            .get(name)
            .ok_or_else(|| BuildError::MissingParameter {
                route: route.to_string(),
                param: name.to_string(),
            })?;

        if validator.is_some_and(|re| !re.is_match(value)) {
            return Err(BuildError::ParameterMismatch {
                route: route.to_string(),
                param: name.to_string(),
                pattern: wildcard.effective_pattern().to_string(),
                value: value.to_string(),
            });
        }

        Ok(value.to_string())
    }
}
