//! Core data models used by the library.
//!
//! Ticket dumps are loosely typed: the same key may hold a string in one
//! export and a number or boolean in the next. Records therefore keep the raw
//! JSON values and leave interpretation to the renderer, so a surprising type
//! costs one record, not the whole run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One support ticket, as read from a JSONL line.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Conversation transcript.
    #[serde(default)]
    pub text: Option<Value>,
    /// Ticket annotations (`ticketId`, `subject`, `customer_concerns`, ...).
    /// Unknown keys are kept and ignored.
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl TicketRecord {
    /// Metadata as an object, if present and actually an object.
    pub fn metadata_map(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref().and_then(Value::as_object)
    }

    /// Metadata entry by key; an explicit `null` counts as missing.
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.metadata_map()
            .and_then(|m| m.get(key))
            .filter(|v| !v.is_null())
    }

    /// Ticket id, if the record carries one.
    pub fn ticket_id(&self) -> Option<&Value> {
        self.meta("ticketId")
    }

    /// Ticket id for logs and console lines (`unknown` when absent).
    pub fn ticket_label(&self) -> String {
        self.ticket_id()
            .map(display_value)
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Text form of a metadata value.
///
/// Strings are printed without quotes, booleans as `True`/`False`, numbers as
/// written. Arrays and objects fall back to compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Truthiness of a metadata value: `false`, `0`, `""`, `[]` and `{}` are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// JSON type name, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result of processing a single record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// File created and attached to the vector store.
    Uploaded { ticket: String, file_id: String },
    /// Any step failed; the message is the error's display text.
    Failed { ticket: String, error: String },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }
}
