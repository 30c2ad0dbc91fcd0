//! Schema inference from type descriptors and dynamic mappings

use super::descriptor::{Describe, RecordShape, Shape};
use super::tags::Directive;
use super::types::{Column, ColumnType, Schema};
use crate::error::{Error, Result};
use crate::value::{Mapping, Value};
use tracing::debug;

/// Infer a table schema from a value's shape
///
/// Dispatches on the input's shape: a record type goes through field
/// flattening in declaration order; a string-keyed dynamic mapping produces
/// one column per entry, canonically sorted by name. Anything else is an
/// [`Error::UnsupportedTopShape`].
///
/// Record inference is purely type-driven; pass a reference to any value of
/// the record type (a default-constructed one works).
pub fn infer<T: Describe>(value: &T) -> Result<Schema> {
    let shape = T::shape();

    if let Shape::Record(record) = &shape {
        let columns = walk_record(record)?;
        debug!(
            record = record.name(),
            columns = columns.len(),
            "inferred record schema"
        );
        return Ok(Schema::new(columns));
    }

    match value.as_mapping() {
        Some(mapping) => {
            let columns = walk_mapping(mapping)?;
            debug!(columns = columns.len(), "inferred mapping schema");
            Ok(Schema::new(columns))
        }
        None => Err(Error::unsupported_top_shape(shape.to_string())),
    }
}

/// Infer a table schema from a dynamic mapping only
///
/// Identical to [`infer`] for mapping inputs, but never attempts record
/// resolution: any non-mapping input, record types included, is an
/// [`Error::UnsupportedTopShape`].
pub fn infer_map<T: Describe>(value: &T) -> Result<Schema> {
    let mapping = value
        .as_mapping()
        .ok_or_else(|| Error::unsupported_top_shape(T::shape().to_string()))?;

    let columns = walk_mapping(mapping)?;
    debug!(columns = columns.len(), "inferred mapping schema");
    Ok(Schema::new(columns))
}

/// [`infer`], panicking on error
pub fn must_infer<T: Describe>(value: &T) -> Schema {
    infer(value).expect("schema inference failed")
}

/// [`infer_map`], panicking on error
pub fn must_infer_map<T: Describe>(value: &T) -> Schema {
    infer_map(value).expect("schema inference failed")
}

// ============================================================================
// Struct field walker
// ============================================================================

/// Flatten a record descriptor into an ordered column list
///
/// Declaration-order, depth-first. Non-public fields are skipped silently;
/// embedded records are spliced in place, with every column forced optional
/// when the embedding is through the optional form. No duplicate-name
/// detection is performed; flattening two fields with the same name emits
/// both columns.
fn walk_record(record: &RecordShape) -> Result<Vec<Column>> {
    let mut columns = Vec::new();

    for field in record.fields() {
        if !field.is_public() {
            continue;
        }

        if field.is_inline() {
            let (inner, force_optional) = match field.shape() {
                Shape::Record(inner) => (inner, false),
                Shape::Optional(inner) => match inner.as_ref() {
                    Shape::Record(inner) => (inner, true),
                    other => {
                        return Err(Error::unsupported_embedding(
                            field.name(),
                            Shape::optional(other.clone()).to_string(),
                        ))
                    }
                },
                other => {
                    return Err(Error::unsupported_embedding(
                        field.name(),
                        other.to_string(),
                    ))
                }
            };

            let mut spliced = walk_record(inner)?;
            if force_optional {
                // the whole embedded group may be absent
                for column in &mut spliced {
                    column.required = false;
                }
            }
            columns.append(&mut spliced);
            continue;
        }

        let directive = Directive::parse(field.tag(), field.name());
        if directive.skip {
            continue;
        }

        let (column_type, nullable) = resolve(field.shape())
            .ok_or_else(|| Error::unsupported_leaf(field.name(), field.shape().to_string()))?;

        let mut column = Column::new(directive.name, column_type);
        column.required = !nullable;
        if directive.is_key {
            column = column.ascending();
        }
        columns.push(column);
    }

    Ok(columns)
}

// ============================================================================
// Dynamic map walker
// ============================================================================

/// Build one column per mapping entry, sorted by name
///
/// Keys must be strings; each value's runtime shape is resolved the same way
/// a declared field's static shape would be. The source mapping has no
/// meaningful order, so the column list is sorted by name (byte-wise
/// ascending) for determinism.
fn walk_mapping(mapping: &Mapping) -> Result<Vec<Column>> {
    let mut columns = Vec::with_capacity(mapping.len());

    for (key, value) in mapping.entries() {
        let Value::String(name) = key else {
            return Err(Error::unsupported_map_key(key.kind()));
        };

        let (column_type, nullable) = runtime_shape(value)
            .as_ref()
            .and_then(resolve)
            .ok_or_else(|| Error::unsupported_leaf(name, value.kind()))?;

        let mut column = Column::new(name, column_type);
        column.required = !nullable;
        columns.push(column);
    }

    columns.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(columns)
}

/// Shape of a dynamic value's runtime type
///
/// `None` for runtime kinds the column type set cannot carry (bool, float).
fn runtime_shape(value: &Value) -> Option<Shape> {
    match value {
        // an absent value constrains nothing
        Value::Null => Some(Shape::Dynamic),
        Value::Int8(_) => Some(Shape::Int8),
        Value::Int16(_) => Some(Shape::Int16),
        Value::Int32(_) => Some(Shape::Int32),
        Value::Int64(_) => Some(Shape::Int64),
        Value::Uint8(_) => Some(Shape::Uint8),
        Value::Uint16(_) => Some(Shape::Uint16),
        Value::Uint32(_) => Some(Shape::Uint32),
        Value::Uint64(_) => Some(Shape::Uint64),
        Value::String(_) => Some(Shape::Text),
        Value::Bytes(_) => Some(Shape::Bytes),
        Value::Timestamp(_) => Some(Shape::Timestamp),
        Value::List(_) | Value::Map(_) => Some(Shape::Dynamic),
        Value::Bool(_) | Value::Float64(_) => None,
    }
}

// ============================================================================
// Logical type resolver
// ============================================================================

/// Resolve a leaf shape to its logical column type and intrinsic
/// nullability
///
/// `None` means the shape is not resolvable as a leaf; record shapes land
/// here, since composite-typed named fields are not supported as leaves.
fn resolve(shape: &Shape) -> Option<(ColumnType, bool)> {
    match shape {
        Shape::Int8 => Some((ColumnType::Int8, false)),
        Shape::Int16 => Some((ColumnType::Int16, false)),
        Shape::Int32 => Some((ColumnType::Int32, false)),
        Shape::Int64 => Some((ColumnType::Int64, false)),
        Shape::Uint8 => Some((ColumnType::Uint8, false)),
        Shape::Uint16 => Some((ColumnType::Uint16, false)),
        Shape::Uint32 => Some((ColumnType::Uint32, false)),
        Shape::Uint64 => Some((ColumnType::Uint64, false)),
        Shape::Text => Some((ColumnType::String, false)),
        Shape::Bytes => Some((ColumnType::Bytes, false)),
        // renderable through a temporary reference even when conformance is
        // on the reference form only
        Shape::RendersText { .. } => Some((ColumnType::String, false)),
        Shape::RendersBytes { .. } => Some((ColumnType::Bytes, false)),
        Shape::Timestamp => Some((ColumnType::String, false)),
        Shape::Dynamic => Some((ColumnType::Any, true)),
        Shape::Optional(inner) => {
            let (column_type, _) = resolve(inner)?;
            Some((column_type, true))
        }
        Shape::Record(_) => None,
    }
}
