//! Type descriptors
//!
//! Inference never inspects language-level reflection metadata; it walks an
//! explicit, ownership-neutral descriptor tree instead. A [`Shape`] is a
//! closed description of a type: scalar kinds, a composite record with an
//! ordered field list, the optional (reference/pointer) form of another
//! shape, or an unconstrained dynamic slot. Types advertise their descriptor
//! through the [`Describe`] trait; record descriptors are built once per
//! record definition with [`RecordShape`] / [`FieldShape`].
//!
//! Text- and byte-rendering capabilities are explicit opt-in traits
//! ([`RenderText`], [`RenderBytes`]) rather than probed method signatures.
//! Whether a type conforms on its value form or only on its reference form
//! is recorded as a descriptor fact; the bounded `Shape` constructors keep
//! descriptors honest about it.

use crate::error::Result;
use crate::value::{Mapping, Value};
use chrono::{DateTime, TimeZone};
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// Capability traits
// ============================================================================

/// A type that knows how to render itself as text
///
/// Columns for such fields carry the `string` logical type; the row writer
/// collaborator calls [`RenderText::render_text`] when serializing.
pub trait RenderText {
    /// Render the value as its canonical textual form
    fn render_text(&self) -> Result<String>;
}

/// A type that knows how to render itself as a byte payload
///
/// Columns for such fields carry the `bytes` logical type.
pub trait RenderBytes {
    /// Render the value as its canonical binary form
    fn render_bytes(&self) -> Result<Vec<u8>>;
}

// ============================================================================
// Shape
// ============================================================================

/// Static description of a type's runtime shape
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 8-bit unsigned integer
    Uint8,
    /// 16-bit unsigned integer
    Uint16,
    /// 32-bit unsigned integer
    Uint32,
    /// 64-bit unsigned integer
    Uint64,
    /// UTF-8 text
    Text,
    /// Raw byte payload
    Bytes,
    /// Wall-clock timestamp, stored in its canonical textual encoding
    Timestamp,
    /// Conforms to [`RenderText`]; `ref_only` records conformance on the
    /// reference form only (the value form can still be rendered through a
    /// temporary reference)
    RendersText { ref_only: bool },
    /// Conforms to [`RenderBytes`]; `ref_only` as for `RendersText`
    RendersBytes { ref_only: bool },
    /// Unconstrained dynamic slot
    Dynamic,
    /// Composite record with an ordered field list
    Record(RecordShape),
    /// Optional (reference/pointer) form of the inner shape; the value may
    /// be entirely absent
    Optional(Box<Shape>),
}

impl Shape {
    /// Shape of a composite record
    pub fn record(record: RecordShape) -> Self {
        Shape::Record(record)
    }

    /// Optional form of `inner`
    pub fn optional(inner: Shape) -> Self {
        Shape::Optional(Box::new(inner))
    }

    /// Shape of a type conforming to [`RenderText`] on its value form
    pub fn renders_text<T: RenderText + ?Sized>() -> Self {
        Shape::RendersText { ref_only: false }
    }

    /// Shape of a type conforming to [`RenderText`] only on its reference
    /// form
    pub fn renders_text_by_ref<T>() -> Self
    where
        for<'a> &'a T: RenderText,
    {
        Shape::RendersText { ref_only: true }
    }

    /// Shape of a type conforming to [`RenderBytes`] on its value form
    pub fn renders_bytes<T: RenderBytes + ?Sized>() -> Self {
        Shape::RendersBytes { ref_only: false }
    }

    /// Shape of a type conforming to [`RenderBytes`] only on its reference
    /// form
    pub fn renders_bytes_by_ref<T>() -> Self
    where
        for<'a> &'a T: RenderBytes,
    {
        Shape::RendersBytes { ref_only: true }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Int8 => write!(f, "int8"),
            Shape::Int16 => write!(f, "int16"),
            Shape::Int32 => write!(f, "int32"),
            Shape::Int64 => write!(f, "int64"),
            Shape::Uint8 => write!(f, "uint8"),
            Shape::Uint16 => write!(f, "uint16"),
            Shape::Uint32 => write!(f, "uint32"),
            Shape::Uint64 => write!(f, "uint64"),
            Shape::Text => write!(f, "string"),
            Shape::Bytes => write!(f, "bytes"),
            Shape::Timestamp => write!(f, "timestamp"),
            Shape::RendersText { .. } => write!(f, "text-renderable"),
            Shape::RendersBytes { .. } => write!(f, "bytes-renderable"),
            Shape::Dynamic => write!(f, "any"),
            Shape::Record(record) => write!(f, "record {}", record.name()),
            Shape::Optional(inner) => write!(f, "optional {inner}"),
        }
    }
}

// ============================================================================
// Record descriptors
// ============================================================================

/// Descriptor of a composite record: a name and an ordered field list
#[derive(Debug, Clone, PartialEq)]
pub struct RecordShape {
    name: &'static str,
    fields: Vec<FieldShape>,
}

impl RecordShape {
    /// Create an empty record descriptor
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving declaration order
    #[must_use]
    pub fn field(mut self, field: FieldShape) -> Self {
        self.fields.push(field);
        self
    }

    /// Record name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldShape] {
        &self.fields
    }
}

/// Descriptor of one record field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    name: &'static str,
    tag: Option<&'static str>,
    shape: Shape,
    inline: bool,
    public: bool,
}

impl FieldShape {
    /// A plain named field
    pub fn new(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            tag: None,
            shape,
            inline: false,
            public: true,
        }
    }

    /// An embedded field: its columns are spliced in place of the field.
    /// The shape must be a record, or the optional form of one.
    pub fn inline(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            tag: None,
            shape,
            inline: true,
            public: true,
        }
    }

    /// Attach a tag directive (`name[,options]`)
    #[must_use]
    pub fn tagged(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Mark the field as not visible outside its record; such fields are
    /// silently skipped by inference
    #[must_use]
    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    /// Declared field identifier
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw tag directive, if any
    pub fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Field shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Whether this is an embedded (spliced) field
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    /// Whether the field is visible outside its record
    pub fn is_public(&self) -> bool {
        self.public
    }
}

// ============================================================================
// Describe
// ============================================================================

/// A type with a known static shape
///
/// Scalars, optionals and dynamic slots are covered by the blanket impls
/// below; record types implement this by hand (or via generated code),
/// returning a [`Shape::Record`] descriptor built once per definition.
pub trait Describe {
    /// The static shape descriptor of this type
    fn shape() -> Shape;

    /// Runtime view of this value as a dynamic mapping, when it is one
    ///
    /// Only mapping-shaped values override this; everything else keeps the
    /// `None` default, which makes it ineligible for map inference.
    fn as_mapping(&self) -> Option<&Mapping> {
        None
    }
}

macro_rules! describe_scalar {
    ($($ty:ty => $shape:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn shape() -> Shape {
                    Shape::$shape
                }
            }
        )*
    };
}

describe_scalar! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    // platform-width integers carry 64-bit intent
    isize => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    usize => Uint64,
    String => Text,
    Vec<u8> => Bytes,
}

impl Describe for &str {
    fn shape() -> Shape {
        Shape::Text
    }
}

impl Describe for &[u8] {
    fn shape() -> Shape {
        Shape::Bytes
    }
}

impl<Tz: TimeZone> Describe for DateTime<Tz> {
    fn shape() -> Shape {
        Shape::Timestamp
    }
}

impl<T: Describe> Describe for Option<T> {
    fn shape() -> Shape {
        Shape::optional(T::shape())
    }
}

impl<T: Describe> Describe for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }
}

impl Describe for Value {
    fn shape() -> Shape {
        Shape::Dynamic
    }

    fn as_mapping(&self) -> Option<&Mapping> {
        Value::as_mapping(self)
    }
}

impl Describe for Mapping {
    fn shape() -> Shape {
        Shape::Dynamic
    }

    fn as_mapping(&self) -> Option<&Mapping> {
        Some(self)
    }
}

impl Describe for serde_json::Value {
    fn shape() -> Shape {
        Shape::Dynamic
    }
}

impl<S> Describe for HashMap<String, Value, S> {
    fn shape() -> Shape {
        Shape::Dynamic
    }
}

impl Describe for BTreeMap<String, Value> {
    fn shape() -> Shape {
        Shape::Dynamic
    }
}

impl Describe for Vec<Value> {
    fn shape() -> Shape {
        Shape::Dynamic
    }
}

impl<const N: usize> Describe for [Value; N] {
    fn shape() -> Shape {
        Shape::Dynamic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    struct Checksum;

    impl RenderBytes for Checksum {
        fn render_bytes(&self) -> Result<Vec<u8>> {
            Ok(vec![0; 8])
        }
    }

    struct Address;

    impl RenderText for &Address {
        fn render_text(&self) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_scalar_shapes() {
        assert_eq!(i16::shape(), Shape::Int16);
        assert_eq!(isize::shape(), Shape::Int64);
        assert_eq!(usize::shape(), Shape::Uint64);
        assert_eq!(String::shape(), Shape::Text);
        assert_eq!(<Vec<u8>>::shape(), Shape::Bytes);
        assert_eq!(<DateTime<Utc>>::shape(), Shape::Timestamp);
    }

    #[test]
    fn test_optional_shapes() {
        assert_eq!(
            <Option<i64>>::shape(),
            Shape::Optional(Box::new(Shape::Int64))
        );
        assert_eq!(<Box<u32>>::shape(), Shape::Uint32);
    }

    #[test]
    fn test_dynamic_shapes() {
        assert_eq!(Value::shape(), Shape::Dynamic);
        assert_eq!(Mapping::shape(), Shape::Dynamic);
        assert_eq!(<BTreeMap<String, Value>>::shape(), Shape::Dynamic);
        assert_eq!(<[Value; 3]>::shape(), Shape::Dynamic);
        assert_eq!(serde_json::Value::shape(), Shape::Dynamic);
    }

    #[test]
    fn test_capability_conformance_facts() {
        assert_eq!(
            Shape::renders_bytes::<Checksum>(),
            Shape::RendersBytes { ref_only: false }
        );
        assert_eq!(
            Shape::renders_text_by_ref::<Address>(),
            Shape::RendersText { ref_only: true }
        );
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::Int64.to_string(), "int64");
        assert_eq!(Shape::optional(Shape::Text).to_string(), "optional string");
        assert_eq!(
            Shape::record(RecordShape::new("Event")).to_string(),
            "record Event"
        );
        assert_eq!(Shape::Dynamic.to_string(), "any");
    }
}
