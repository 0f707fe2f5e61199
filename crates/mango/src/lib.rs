//! Mango selector compiler and matcher.
//!
//! # Overview
//!
//! This crate implements a subset of the CouchDB Mango selector syntax.
//! A selector document is validated and compiled once into a [`Selector`]
//! tree, which is then matched against any number of documents.
//!
//! Supported operators: `$eq`, `$ne`, `$lt`, `$lte`, `$gt`, `$gte`, `$and`,
//! `$or`. Any other `$`-prefixed key is rejected when the selector is built.
//! Values are compared with CouchDB collation (see [`mango_collate`]).
//!
//! # Example
//!
//! ```
//! use mango::Selector;
//! use serde_json::json;
//!
//! let selector = Selector::new(r#"{"name": "Paul", "age": {"$gte": 18}}"#).unwrap();
//!
//! let doc = json!({"name": "Paul", "age": 42});
//! assert!(selector.matches(doc.as_object().unwrap()).unwrap());
//!
//! let doc = json!({"name": "Paul"});
//! assert!(!selector.matches(doc.as_object().unwrap()).unwrap());
//! ```

pub mod builder;
pub mod error;
pub mod mango_cli;
pub mod matcher;
pub mod operator;
pub mod selector;
pub mod validate;

// Re-export the core public API
pub use builder::build;
pub use error::{BuildError, MatchError};
pub use mango_collate::{Collator, RawCollator};
pub use matcher::matches;
pub use operator::Operator;
pub use selector::{Document, Selector};
pub use validate::validate_keys;
