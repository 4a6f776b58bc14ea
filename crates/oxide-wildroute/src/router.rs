//! Main router implementation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::compiler::CompiledRoute;
use crate::error::{BuildError, Result};
use crate::params::PathParams;

/// A registered route: compiled template plus its target.
#[derive(Debug, Clone)]
pub struct Route<T> {
    /// Optional route name for path building.
    pub name: Option<String>,
    /// Compiled template.
    pub compiled: Arc<CompiledRoute>,
    /// Payload returned on match.
    pub target: T,
}

/// The outcome of a successful [`Router::match_path`].
#[derive(Debug)]
pub struct RouteMatch<'a, T> {
    /// Target of the matching route.
    pub target: &'a T,
    /// Values of the named wildcards.
    pub params: PathParams,
    /// Name of the matching route, if it has one.
    pub name: Option<&'a str>,
    /// Compiled template of the matching route.
    pub compiled: &'a CompiledRoute,
}

impl<'a, T> RouteMatch<'a, T> {
    /// Splits the match into target and parameters.
    #[must_use]
    pub fn into_parts(self) -> (&'a T, PathParams) {
        (self.target, self.params)
    }
}

/// An ordered collection of routes with a name table for path building.
///
/// Routes are tried in registration order; the first whose template
/// matches the whole path wins. Register all routes before sharing the
/// router: `match_path` and `build` take `&self` and are safe to call
/// concurrently, `add` requires exclusive access.
#[derive(Debug, Clone)]
pub struct Router<T> {
    /// Registered routes.
    routes: Vec<Route<T>>,
    /// Named routes for path building.
    named_routes: HashMap<String, Arc<CompiledRoute>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Creates a new empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            named_routes: HashMap::new(),
        }
    }

    /// Registers a route, optionally under a name.
    ///
    /// Registering a name again rebinds it to the new route. The earlier
    /// route stays in the match order.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Syntax`](crate::RouterError::Syntax) if a
    /// wildcard pattern is invalid. The router is unchanged in that case.
    pub fn add(&mut self, pattern: &str, target: T, name: Option<&str>) -> Result<()> {
        let compiled = match CompiledRoute::new(pattern) {
            Ok(compiled) => Arc::new(compiled),
            Err(e) => {
                warn!(pattern, error = %e, "Rejected route");
                return Err(e);
            }
        };

        if let Some(name) = name {
            let previous = self
                .named_routes
                .insert(name.to_string(), Arc::clone(&compiled));
            if let Some(previous) = previous {
                warn!(
                    name,
                    previous = previous.pattern(),
                    pattern,
                    "Route name rebound"
                );
            }
        }

        debug!(
            pattern,
            name = name.unwrap_or(""),
            params = ?compiled.param_names(),
            "Registered route"
        );

        self.routes.push(Route {
            name: name.map(String::from),
            compiled,
            target,
        });
        Ok(())
    }

    /// Registers a named route.
    ///
    /// # Errors
    ///
    /// See [`Router::add`].
    pub fn add_named(&mut self, name: &str, pattern: &str, target: T) -> Result<()> {
        self.add(pattern, target, Some(name))
    }

    /// Adds an unnamed route, builder style.
    ///
    /// # Errors
    ///
    /// See [`Router::add`].
    pub fn route(mut self, pattern: &str, target: T) -> Result<Self> {
        self.add(pattern, target, None)?;
        Ok(self)
    }

    /// Adds a named route, builder style.
    ///
    /// # Errors
    ///
    /// See [`Router::add`].
    pub fn named_route(mut self, name: &str, pattern: &str, target: T) -> Result<Self> {
        self.add(pattern, target, Some(name))?;
        Ok(self)
    }

    /// Resolves a path to the first route that matches it entirely.
    ///
    /// Returns `None` when no route matches.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_wildroute::Router;
    ///
    /// let router = Router::new()
    ///     .route("/static", "static")
    ///     .unwrap()
    ///     .route("/:test", "notail")
    ///     .unwrap();
    ///
    /// let m = router.match_path("/test").unwrap();
    /// assert_eq!(*m.target, "notail");
    /// assert_eq!(m.params.get("test"), Some("test"));
    /// assert!(router.match_path("/a/b").is_none());
    /// ```
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        let found = self.routes.iter().find_map(|route| {
            route
                .compiled
                .match_path(path)
                .map(|params| RouteMatch {
                    target: &route.target,
                    params,
                    name: route.name.as_deref(),
                    compiled: &route.compiled,
                })
        });

        match &found {
            Some(m) => debug!(path, pattern = m.compiled.pattern(), "Matched route"),
            None => debug!(path, "No route matched"),
        }

        found
    }

    /// Builds a path from a named route and parameter values.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_wildroute::{PathParams, Router};
    ///
    /// let mut router = Router::new();
    /// router
    ///     .add("/:test/:name#[a-z]+#/", "handler", Some("testroute"))
    ///     .unwrap();
    ///
    /// let params: PathParams = [("test", "hello"), ("name", "world")]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(router.build("testroute", &params).unwrap(), "/hello/world/");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Build`](crate::RouterError::Build) if the name
    /// is unknown, a parameter is missing or does not match its pattern, or
    /// the route has an anonymous wildcard.
    pub fn build(&self, name: &str, params: &PathParams) -> Result<String> {
        let compiled = self
            .named_routes
            .get(name)
            .ok_or_else(|| BuildError::UnknownRoute {
                name: name.to_string(),
            })?;
        Ok(compiled.build(name, params)?)
    }

    /// Builds a path from a named route and any iterator of name/value pairs.
    ///
    /// ```
    /// use oxide_wildroute::Router;
    ///
    /// let router = Router::new().named_route("user", "/users/:id", ()).unwrap();
    /// assert_eq!(router.build_from("user", [("id", "42")]).unwrap(), "/users/42");
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Router::build`].
    pub fn build_from<I, K, V>(&self, name: &str, params: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.build(name, &params.into_iter().collect())
    }

    /// Returns the compiled route bound to `name`.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&CompiledRoute> {
        self.named_routes.get(name).map(Arc::as_ref)
    }

    /// Returns the registered routes in match order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<T>> {
        self.routes.iter()
    }

    /// Returns the number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
