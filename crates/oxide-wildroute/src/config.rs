//! Declarative route tables.
//!
//! A route table lists routes in registration order and can be loaded from
//! JSON:
//!
//! ```
//! use oxide_wildroute::{RouteTable, Router};
//!
//! let table: RouteTable<String> = RouteTable::from_json(
//!     r#"{
//!         "routes": [
//!             { "pattern": "/static", "target": "static" },
//!             { "pattern": "/:test/:name#[a-z]+#/", "target": "handler", "name": "testroute" }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let router = Router::from_table(table).unwrap();
//! assert_eq!(router.len(), 2);
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::router::Router;

/// A single route definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef<T> {
    /// Route template.
    pub pattern: String,
    /// Payload returned on match.
    pub target: T,
    /// Optional name for path building.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl<T> RouteDef<T> {
    /// Creates an unnamed route definition.
    pub fn new(pattern: impl Into<String>, target: T) -> Self {
        Self {
            pattern: pattern.into(),
            target,
            name: None,
        }
    }

    /// Sets the route name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// An ordered list of route definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable<T> {
    /// Routes in registration order.
    #[serde(default = "Vec::new")]
    pub routes: Vec<RouteDef<T>>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<T> RouteTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route definition.
    #[must_use]
    pub fn route(mut self, def: RouteDef<T>) -> Self {
        self.routes.push(def);
        self
    }
}

impl<T: DeserializeOwned> RouteTable<T> {
    /// Parses a table from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Config`](crate::RouterError::Config) if the
    /// JSON does not describe a route table.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T> Router<T> {
    /// Builds a router from a table, registering routes in order.
    ///
    /// # Errors
    ///
    /// Returns the first registration error. No router is returned in that
    /// case.
    pub fn from_table(table: RouteTable<T>) -> Result<Self> {
        let mut router = Self::new();
        for def in table.routes {
            router.add(&def.pattern, def.target, def.name.as_deref())?;
        }
        Ok(router)
    }
}

impl<T> TryFrom<RouteTable<T>> for Router<T> {
    type Error = crate::error::RouterError;

    fn try_from(table: RouteTable<T>) -> Result<Self> {
        Self::from_table(table)
    }
}
