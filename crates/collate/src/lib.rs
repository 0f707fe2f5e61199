//! mango-collate - total ordering of JSON values
//!
//! This crate provides the collation rule used by Mango selectors to compare
//! document fields against query literals:
//!
//! ```text
//! null < false < true < numbers < strings < arrays < objects
//! ```
//!
//! # Example
//!
//! ```
//! use mango_collate::{Collator, RawCollator};
//! use serde_json::json;
//! use std::cmp::Ordering;
//!
//! let c = RawCollator;
//! assert_eq!(c.compare(&json!(null), &json!(false)), Ordering::Less);
//! assert_eq!(c.compare(&json!("a"), &json!(99)), Ordering::Greater);
//! assert!(c.equal(&json!(1), &json!(1.0)));
//! ```

pub mod collator;
pub mod raw;

pub use collator::Collator;
pub use raw::{compare, equal, type_rank, RawCollator};
