//! Schema inference module
//!
//! Derives a tabular schema (ordered, typed, optionally sort-marked columns)
//! from a value's type shape, with no external schema language.
//!
//! # Features
//!
//! - **Record flattening**: walks a record descriptor's fields in
//!   declaration order, splicing embedded records in place
//! - **Dynamic mappings**: one column per entry, canonically sorted by name
//! - **Tag directives**: per-field rename, skip and sort-key markers
//! - **Capability detection**: text- and byte-renderable types become
//!   `string`/`bytes` columns via explicit trait conformance

mod descriptor;
mod infer;
mod tags;
mod types;

pub use descriptor::{Describe, FieldShape, RecordShape, RenderBytes, RenderText, Shape};
pub use infer::{infer, infer_map, must_infer, must_infer_map};
pub use types::{Column, ColumnType, Schema, SortOrder};
