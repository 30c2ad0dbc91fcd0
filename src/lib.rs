//! # rowshape
//!
//! Automatic tabular schema inference from record type descriptors and
//! dynamic values.
//!
//! When a record type is written to a columnar store, somebody has to say
//! what the table looks like. rowshape derives that answer from the type
//! itself: it walks a record's field descriptors (or a dynamic mapping's
//! runtime values) and emits an ordered, deterministic list of typed
//! columns, with nullability and sort-key roles resolved along the way.
//!
//! ## Quick Start
//!
//! ```rust
//! use rowshape::{infer, ColumnType, Describe, FieldShape, RecordShape, Shape};
//!
//! struct Event {
//!     id: u64,
//!     source: String,
//!     payload: Option<Vec<u8>>,
//! }
//!
//! impl Describe for Event {
//!     fn shape() -> Shape {
//!         Shape::record(
//!             RecordShape::new("Event")
//!                 .field(FieldShape::new("id", u64::shape()).tagged(",key"))
//!                 .field(FieldShape::new("source", String::shape()))
//!                 .field(FieldShape::new("payload", <Option<Vec<u8>>>::shape())),
//!         )
//!     }
//! }
//!
//! # fn main() -> rowshape::Result<()> {
//! let schema = infer(&Event {
//!     id: 1,
//!     source: "api".into(),
//!     payload: None,
//! })?;
//!
//! assert_eq!(schema.key_columns(), vec!["id"]);
//! assert_eq!(
//!     schema.column("payload").unwrap().column_type,
//!     ColumnType::Bytes
//! );
//! assert!(!schema.column("payload").unwrap().required);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  infer / infer_map                          │
//! │   record descriptor ──► field walker ──► Schema             │
//! │   dynamic mapping   ──► map walker   ──► Schema (sorted)    │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────┬───────────┴───────────┬─────────────────────┐
//! │  Descriptors │   Logical resolver    │   Tag directives    │
//! ├──────────────┼───────────────────────┼─────────────────────┤
//! │ Shape        │ ints → intN/uintN     │ rename              │
//! │ RecordShape  │ text/bytes/timestamp  │ `-` skip            │
//! │ Describe     │ render capabilities   │ `key` sort marker   │
//! │              │ dynamic → any         │                     │
//! └──────────────┴───────────────────────┴─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Dynamic values and mappings
pub mod value;

/// Schema types, descriptors and inference
pub mod schema;

/// Table provisioning boundary
pub mod store;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use schema::{
    infer, infer_map, must_infer, must_infer_map, Column, ColumnType, Describe, FieldShape,
    RecordShape, RenderBytes, RenderText, Schema, Shape, SortOrder,
};
pub use store::{CreateTableRequest, TableStore};
pub use value::{Mapping, Value};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
