#![forbid(unsafe_code)]

//! A compressed radix-trie router for HTTP-style path patterns.
//!
//! A pattern is a sequence of segments separated by `/`. Each segment is
//! either a literal, a single named parameter `:name` that binds exactly
//! one path segment, or (only as the final construct of a pattern) a
//! catch-all `*name` that binds everything remaining:
//!
//! ```
//! # use trieroute::Router;
//! let mut router = Router::new();
//! router.insert("GET", "/users", "list_users").unwrap();
//! router.insert("GET", "/users/:id", "show_user").unwrap();
//! router.insert("GET", "/static/*path", "serve_static").unwrap();
//!
//! let (handler, params) = router.lookup("GET", "/users/42").unwrap();
//! assert_eq!(*handler, "show_user");
//! assert_eq!(params.unwrap().get("id"), Some("42"));
//! ```
//!
//! Routes are registered independently per method (`GET`, `POST`, ...
//! or any other opaque dispatch key); each method gets its own trie.
//! Registration never reorders or guesses: an ambiguous pair of
//! patterns is rejected at [`Router::insert`] time with a
//! [`Conflict`], rather than silently resolved by priority at lookup
//! time.
//!
//! See [`Router`] for the full API.

mod error;
mod params;
mod pattern;
mod router;
mod tree;

pub use error::{Conflict, InsertError, NodeKind};
pub use params::{DiscardParams, Params, ParamsPool, ParamsSink, PooledParams};
pub use router::Router;
