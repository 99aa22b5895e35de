use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One entry of the task sequence, held as the JSON it is stored as.
///
/// Entries created here are `{"text": .., "done": false}` objects. Entries
/// restored from storage are kept exactly as found, whatever their shape, so
/// the next save writes them back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(Value);

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self(json!({ "text": text.into(), "done": false }))
    }

    pub fn from_stored(value: Value) -> Self {
        Self(value)
    }

    /// Text shown in the row. Strings show as-is, other values as JSON,
    /// a missing `text` as nothing. A non-object entry shows itself.
    pub fn text(&self) -> String {
        let text = match &self.0 {
            Value::Object(fields) => match fields.get("text") {
                Some(text) => text,
                None => return String::new(),
            },
            other => other,
        };
        match text {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Whether `done` is set to a truthy value (`false`, `null`, `0` and
    /// `""` count as not done).
    pub fn is_done(&self) -> bool {
        self.0.get("done").is_some_and(is_truthy)
    }

    /// Sets `done` to `true`. Entries that are not objects have no fields to
    /// set and stay as they are; returns whether the entry is done afterwards.
    pub fn mark_done(&mut self) -> bool {
        match &mut self.0 {
            Value::Object(fields) => {
                fields.insert("done".to_string(), Value::Bool(true));
                true
            }
            _ => false,
        }
    }

    /// Row text for a task at 0-based `index`.
    pub fn label(&self, index: usize) -> String {
        let done = if self.is_done() { "(done)" } else { "" };
        format!("{}. {} {}", index + 1, self.text(), done)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
