//! # Vista Core - Data Ingestion and Type Inference
//!
//! Vista is an interactive visualization tool; this crate is its data
//! layer. Given a tabular dataset, it decides per column what kind of data
//! it holds, converts the column storage to match that decision, and
//! detects cross-column relationships the plotting and graph views can use
//! to suggest linked columns.
//!
//! ## Quick Start
//!
//! ```rust
//! use vista_core::prelude::*;
//!
//! # fn example() -> vista_core::error::Result<()> {
//! let session = ViewSession::new();
//!
//! let table = Table::new(vec![
//!     Column::from_strings("id", ["1", "2", "3", "4", "5"]),
//!     Column::from_strings("score", ["1.5", "2.5", "3.5", "4.5", "5.5"]),
//!     Column::from_strings("label", ["a", "b", "a", "b", "a"]),
//! ])?;
//!
//! // Classifies every column, rewrites the column storage to match, and
//! // detects shared-domain relations, all under the session lock.
//! session.set_table(table)?;
//!
//! assert_eq!(
//!     session.column_types(),
//!     vec![
//!         SemanticType::IntegerData,
//!         SemanticType::Continuous,
//!         SemanticType::StringCategory,
//!     ]
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **`table`**: the in-memory tabular model on Arrow storage, with the
//!   canonical cell text rendering the heuristics operate on
//! - **`tree`**: tree-shaped datasets, installed without classification
//! - **`analyzers`**: domain extraction, type classification, storage
//!   conversion, and relation detection
//! - **`session`**: the lock-guarded context owning the active dataset and
//!   orchestrating the analysis pipeline on every load
//! - **`views`**: the `View` trait and kind-keyed registry that rendering
//!   components plug into
//! - **`sources`**: loaders that produce populated datasets, delegating
//!   file decoding to Arrow
//! - **`logging`**: optional `tracing` subscriber setup for hosts
//!
//! Column classification uses fixed ratio heuristics: a column that is
//! more than 95% numeric is continuous when over 1% of its rows carry a
//! fractional part, otherwise integer; integer and string columns split
//! into category versus data at 90% distinct values. See
//! [`analyzers::classify_columns`] for the exact rules.

pub mod analyzers;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod session;
pub mod sources;
pub mod table;
pub mod tree;
pub mod views;
