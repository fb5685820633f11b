//! Resource records
//!
//! A [`Record`] is what every CRUD call takes: an optional entity id plus the
//! JSON fields to send. The id is kept apart from the fields so it can only
//! ever travel in the URL path.

use serde_json::{Map, Value};

use crate::errors::{HarvestError, Result};

/// Entity id plus body fields for a resource call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub id: Option<u64>,
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record addressing an existing entity and carrying no fields.
    pub fn with_id(id: u64) -> Self {
        Self { id: Some(id), fields: Map::new() }
    }

    /// Set a body field. An `id` key is routed to [`Record::id`] instead.
    ///
    /// An `id` value that is not a non-negative integer (or numeric string)
    /// is ignored and never reaches the body, so a later single-entity call
    /// fails with "requires an id". Use [`Record::from_value`] to have a bad
    /// id rejected up front.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == "id" {
            if let Ok(id) = parse_id(&value) {
                self.id = id;
            }
            return self;
        }
        self.fields.insert(key, value);
        self
    }

    /// Build a record from a JSON object, moving a top-level `id` out of the
    /// fields.
    ///
    /// # Errors
    /// Returns `HarvestError::Validation` if `value` is not an object or its
    /// `id` is not a non-negative integer (numeric strings are accepted).
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(HarvestError::Validation("record must be a JSON object".to_string()));
        };

        let id = match fields.remove("id") {
            Some(raw) => parse_id(&raw)?,
            None => None,
        };

        Ok(Self { id, fields })
    }

    /// The entity id, or a validation error naming the attempted action.
    ///
    /// # Errors
    /// Returns `HarvestError::Validation("{action} requires an id")` when the
    /// id is absent.
    pub fn require_id(&self, action: &str) -> Result<u64> {
        self.id.ok_or_else(|| HarvestError::Validation(format!("{action} requires an id")))
    }

    /// Request body: the fields only, never the id.
    pub fn body(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn parse_id(raw: &Value) -> Result<Option<u64>> {
    match raw {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| HarvestError::Validation(format!("invalid id: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| HarvestError::Validation(format!("invalid id: {s}"))),
        other => Err(HarvestError::Validation(format!("invalid id: {other}"))),
    }
}
