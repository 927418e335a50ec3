//! Cellgrid Order - total-order comparison for heterogeneous table columns.
//!
//! Table columns rarely hold one clean type: scores with gaps, names with
//! accents, dates next to blanks. This crate gives them a single, fixed
//! ordering policy:
//!
//! - Absent values (`None`, NaN) always sort **last**, in both directions
//! - Numbers compare numerically, exactly across signed/unsigned/float
//! - Timestamps compare by instant
//! - Booleans order `false` before `true`
//! - Strings collate accent- and case-insensitively, with deterministic ties
//! - Pairs of different kinds are stringified and collated; sorting a whole
//!   column groups mixed kinds instead
//!
//! # Quick Start
//!
//! ```rust
//! use cellgrid_order::{sort_by_value, Dir, Value};
//!
//! struct Member {
//!     name: String,
//!     score: Option<i64>,
//! }
//!
//! let mut members = vec![
//!     Member { name: "Ana".into(), score: Some(10) },
//!     Member { name: "Bo".into(), score: None },
//!     Member { name: "Cy".into(), score: Some(5) },
//! ];
//!
//! sort_by_value(&mut members, Dir::Desc, |m| {
//!     m.score.map(Value::from).unwrap_or(Value::None)
//! });
//!
//! let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
//! assert_eq!(names, ["Ana", "Cy", "Bo"]);
//! ```
//!
//! # Who sorts
//!
//! The comparator never reorders anything by itself. Callers either sort a
//! slice with [`sorted_indices`] / [`sort_by_value`], or send the
//! [`Dir`] to a server that returns the page already sorted.

mod collate;
mod ordering;
mod value;

pub use collate::collate;
pub use ordering::{
    compare, compare_by_orderings, compare_values, sort_by_value, sorted_indices, Dir, OrderBy,
    ParseDirError,
};
pub use value::{Number, Timestamp, Value};
