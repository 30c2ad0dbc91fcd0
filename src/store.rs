//! Table provisioning boundary
//!
//! The schemas this crate infers are consumed by a table-storage client when
//! it provisions a new table: the schema rides along as the `"schema"`
//! attribute of the create request, before the table accepts any row data.
//! Only that boundary is modeled here; transport, addressing and session
//! mechanics belong to the client.

use crate::error::Result;
use crate::schema::Schema;
use serde_json::{Map, Value};

/// A create-table request carrying the inferred schema as an attribute
#[derive(Debug, Clone)]
pub struct CreateTableRequest {
    path: String,
    schema: Schema,
    attributes: Map<String, Value>,
}

impl CreateTableRequest {
    /// Create a request for the table at `path` with the given schema
    pub fn new(path: impl Into<String>, schema: Schema) -> Self {
        Self {
            path: path.into(),
            schema,
            attributes: Map::new(),
        }
    }

    /// Attach an additional attribute to the request
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Target table path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The schema the table will be created with
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Render the full attribute map for the create call, with the schema
    /// under `"schema"`
    pub fn attributes(&self) -> Result<Value> {
        let mut attributes = self.attributes.clone();
        attributes.insert("schema".to_string(), serde_json::to_value(&self.schema)?);
        Ok(Value::Object(attributes))
    }
}

/// The table-creation collaborator seam
///
/// Implementations provision the table resource and attach the request's
/// attributes; they perform no inference of their own.
pub trait TableStore {
    /// Create the table described by `request`
    fn create_table(&mut self, request: &CreateTableRequest) -> Result<()>;
}
