//! # oxide-wildroute
//!
//! Path routing over string templates with typed wildcards.
//!
//! This crate provides:
//! - A template tokenizer (literal text, `:name` wildcards, `#regex#` patterns)
//! - Route compilation into anchored matchers
//! - First-match routing in registration order
//! - Named routes for rebuilding paths from parameters
//! - Route tables loadable from JSON
//!
//! ## Quick Start
//!
//! ```
//! use oxide_wildroute::{PathParams, Router};
//!
//! let mut router = Router::new();
//! router.add("/static", "static", None).unwrap();
//! router
//!     .add("/users/:id#[0-9]+#", "user", Some("user_detail"))
//!     .unwrap();
//!
//! let m = router.match_path("/users/42").unwrap();
//! assert_eq!(*m.target, "user");
//! assert_eq!(m.params.get("id"), Some("42"));
//!
//! let params: PathParams = [("id", "7")].into_iter().collect();
//! assert_eq!(router.build("user_detail", &params).unwrap(), "/users/7");
//! ```
//!
//! ## Template Syntax
//!
//! | Template        | Meaning                                         |
//! |-----------------|-------------------------------------------------|
//! | `/static`       | literal text                                    |
//! | `/:id`          | wildcard `id`, one or more non-`/` characters   |
//! | `/:id#[0-9]+#`  | wildcard `id` matching the regex `[0-9]+`       |
//! | `/:#.+#`        | anonymous wildcard, matched but not extracted   |
//! | `/::id`         | literal `/:id`                                  |
//! | `/:::id`        | literal `/:` followed by wildcard `id`          |
//!
//! Matching always covers the whole path. Routes are tried in the order
//! they were added; register more specific routes first.
//!
//! ## Route Tables
//!
//! ```
//! use oxide_wildroute::{RouteDef, RouteTable, Router};
//!
//! let table = RouteTable::new()
//!     .route(RouteDef::new("/posts/:slug", "post").name("post"))
//!     .route(RouteDef::new("/:page", "page"));
//! let router = Router::from_table(table).unwrap();
//! assert_eq!(*router.match_path("/about").unwrap().target, "page");
//! ```

mod compiler;
mod config;
mod error;
mod params;
mod router;
mod token;
mod tokenizer;

pub use compiler::CompiledRoute;
pub use config::{RouteDef, RouteTable};
pub use error::{BuildError, Result, RouterError};
pub use params::PathParams;
pub use router::{Route, RouteMatch, Router};
pub use token::{DEFAULT_PATTERN, Token, Wildcard};
pub use tokenizer::{Tokenizer, to_template, tokenize};
