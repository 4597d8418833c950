use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::validate::{QuestionRecord, UNKNOWN_ID};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("InputNotFound: {0}")]
    NotFound(String),
    #[error("Failed to read questions: {0}")]
    Read(String),
    #[error("MalformedInput: {0}")]
    Malformed(String),
}

/// Parsed question dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    pub records: Vec<QuestionRecord>,
    /// Records without an `id`; they are reported as `unknown`.
    pub missing_ids: usize,
}

/// Read and parse the question dataset at `path`.
pub fn load_questions(path: &Path) -> Result<QuestionSet, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path).map_err(|e| InputError::Read(e.to_string()))?;
    parse_questions(&raw)
}

/// Parse a JSON array of question objects.
/// Only `id` and `biblicalReference` are looked at; other fields are ignored.
pub fn parse_questions(raw: &str) -> Result<QuestionSet, InputError> {
    let root: Value = serde_json::from_str(raw).map_err(|e| InputError::Malformed(e.to_string()))?;
    let items = root
        .as_array()
        .ok_or_else(|| InputError::Malformed("expected a JSON array of questions".into()))?;

    let mut set = QuestionSet { records: Vec::with_capacity(items.len()), missing_ids: 0 };
    for (index, item) in items.iter().enumerate() {
        let obj = item
            .as_object()
            .ok_or_else(|| InputError::Malformed(format!("question #{} is not an object", index)))?;

        let id = match obj.get("id") {
            None | Some(Value::Null) => {
                set.missing_ids += 1;
                UNKNOWN_ID.to_string()
            }
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        let biblical_reference = match obj.get("biblicalReference") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(InputError::Malformed(format!(
                    "question {} has a non-text biblicalReference: {}",
                    id, other
                )))
            }
        };

        set.records.push(QuestionRecord { id, biblical_reference });
    }
    Ok(set)
}
