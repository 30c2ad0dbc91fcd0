//! Integration tests through the public API
//!
//! Exercises the full flow: record descriptor → inferred schema →
//! create-table request attributes, plus the dynamic-mapping path fed from
//! JSON.

// test records are only ever inspected through their descriptors
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use rowshape::{
    infer, infer_map, Column, ColumnType, CreateTableRequest, Describe, FieldShape, Mapping,
    RecordShape, RenderText, Result, Schema, Shape, TableStore, Value,
};
use serde_json::json;

// ============================================================================
// A realistic record type
// ============================================================================

struct TraceId(u128);

impl RenderText for TraceId {
    fn render_text(&self) -> Result<String> {
        Ok(format!("{:032x}", self.0))
    }
}

struct AccessLog {
    timestamp: DateTime<Utc>,
    shard: u32,
    user: String,
    trace: TraceId,
    response_size: Option<i64>,
    context: Value,
}

impl Describe for AccessLog {
    fn shape() -> Shape {
        Shape::record(
            RecordShape::new("AccessLog")
                .field(
                    FieldShape::new("timestamp", <DateTime<Utc>>::shape()).tagged(",key"),
                )
                .field(FieldShape::new("shard", u32::shape()).tagged(",key"))
                .field(FieldShape::new("user", String::shape()))
                .field(FieldShape::new("trace", Shape::renders_text::<TraceId>()))
                .field(FieldShape::new("response_size", <Option<i64>>::shape()))
                .field(FieldShape::new("context", Value::shape())),
        )
    }
}

fn sample_log() -> AccessLog {
    AccessLog {
        timestamp: Utc::now(),
        shard: 12,
        user: "robot-loader".to_string(),
        trace: TraceId(7),
        response_size: None,
        context: Value::Null,
    }
}

#[test]
fn test_record_to_schema() {
    let schema = infer(&sample_log()).unwrap();

    assert_eq!(
        schema,
        Schema::new(vec![
            Column::new("timestamp", ColumnType::String).ascending(),
            Column::new("shard", ColumnType::Uint32).ascending(),
            Column::new("user", ColumnType::String),
            Column::new("trace", ColumnType::String),
            Column::new("response_size", ColumnType::Int64).optional(),
            Column::new("context", ColumnType::Any).optional(),
        ])
    );
    assert_eq!(schema.key_columns(), vec!["timestamp", "shard"]);
}

#[test]
fn test_schema_to_create_table_request() {
    let schema = infer(&sample_log()).unwrap();
    let request =
        CreateTableRequest::new("//logs/access", schema).with_attribute("dynamic", json!(false));

    let attributes = request.attributes().unwrap();
    assert_eq!(attributes["dynamic"], json!(false));
    assert_eq!(
        attributes["schema"][0],
        json!({
            "name": "timestamp",
            "type": "string",
            "required": true,
            "sort_order": "ascending",
        })
    );
    assert_eq!(attributes["schema"].as_array().unwrap().len(), 6);
}

#[test]
fn test_store_receives_schema_attribute() {
    struct CapturingStore(Vec<serde_json::Value>);

    impl TableStore for CapturingStore {
        fn create_table(&mut self, request: &CreateTableRequest) -> Result<()> {
            self.0.push(request.attributes()?);
            Ok(())
        }
    }

    let mut store = CapturingStore(Vec::new());
    let request = CreateTableRequest::new("//logs/access", infer(&sample_log()).unwrap());
    store.create_table(&request).unwrap();

    let names: Vec<_> = store.0[0]["schema"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["timestamp", "shard", "user", "trace", "response_size", "context"]
    );
}

// ============================================================================
// Dynamic path from JSON
// ============================================================================

#[test]
fn test_json_payload_to_schema() {
    let payload = Value::from(json!({
        "user": "robot-loader",
        "attempt": 3,
        "note": null,
        "meta": {"region": "eu"},
    }));

    let schema = infer_map(&payload).unwrap();

    assert_eq!(
        schema,
        Schema::new(vec![
            Column::new("attempt", ColumnType::Int64),
            Column::new("meta", ColumnType::Any).optional(),
            Column::new("note", ColumnType::Any).optional(),
            Column::new("user", ColumnType::String),
        ])
    );
}

#[test]
fn test_handwritten_mapping_matches_json_mapping() {
    let mut handwritten = Mapping::new();
    handwritten.insert("attempt", 3i64);
    handwritten.insert("user", "robot-loader");

    let from_json = Value::from(json!({"user": "robot-loader", "attempt": 3}));

    assert_eq!(
        infer_map(&handwritten).unwrap(),
        infer_map(&from_json).unwrap()
    );
}
