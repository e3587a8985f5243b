// src/project.rs - Field projection: header parts, detail blocks, tail remainder
use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::classify::RecordShape;
use crate::error::LineError;
use crate::timestamp;

/// Fixed-position header fields of a rendered record
#[derive(Debug)]
pub struct HeaderParts {
    pub severity: String,
    pub timestamp: DateTime<Local>,
    pub caller: Option<String>,
    pub logger: Option<String>,
    pub message: String,
}

/// Free-text blocks rendered after the JSON tail
#[derive(Debug, Default)]
pub struct DetailBlocks {
    pub stacktrace: Option<String>,
    pub error_verbose: Option<String>,
}

/// Zapdriver fields hidden by default; `--all` keeps them in the tail
const NOISE_FIELDS: &[&str] = &[
    "labels",
    "serviceContext",
    "logging.googleapis.com/labels",
    "logging.googleapis.com/sourceLocation",
];

/// Split a classified record into header parts, detail blocks and the tail
/// remainder, removing everything extracted from `fields` so nothing is
/// duplicated in the JSON tail.
pub fn project(
    fields: &mut Map<String, Value>,
    shape: RecordShape,
    show_all_fields: bool,
) -> Result<(HeaderParts, DetailBlocks), LineError> {
    let header = match shape {
        RecordShape::Zap => project_zap(fields)?,
        RecordShape::Zapdriver => project_zapdriver(fields)?,
    };

    if shape == RecordShape::Zapdriver && !show_all_fields {
        for key in NOISE_FIELDS {
            fields.remove(*key);
        }
    }

    // Detail fields leave the tail no matter what the all-fields option says
    let details = DetailBlocks {
        stacktrace: take_text(fields, "stacktrace"),
        error_verbose: take_text(fields, "errorVerbose"),
    };

    Ok((header, details))
}

fn project_zap(fields: &mut Map<String, Value>) -> Result<HeaderParts, LineError> {
    let raw_timestamp =
        take_value(fields, &["ts", "timestamp"]).ok_or(LineError::FieldType { field: "ts" })?;
    let timestamp = timestamp::normalize(&raw_timestamp)?;

    let severity =
        take_string(fields, "level").ok_or(LineError::FieldType { field: "level" })?;
    let caller = take_string(fields, "caller");
    let logger = take_string(fields, "logger");
    let message = take_string(fields, "msg")
        .or_else(|| take_string(fields, "message"))
        .ok_or(LineError::FieldType { field: "msg" })?;

    Ok(HeaderParts {
        severity,
        timestamp,
        caller,
        logger,
        message,
    })
}

fn project_zapdriver(fields: &mut Map<String, Value>) -> Result<HeaderParts, LineError> {
    let raw_timestamp = take_value(fields, &["time", "timestamp"])
        .ok_or(LineError::FieldType { field: "time" })?;
    let timestamp = timestamp::normalize(&raw_timestamp)?;

    let severity =
        take_string(fields, "severity").ok_or(LineError::FieldType { field: "severity" })?;
    let caller = take_string(fields, "caller");
    let logger = take_string(fields, "logger");
    let message =
        take_string(fields, "message").ok_or(LineError::FieldType { field: "message" })?;

    Ok(HeaderParts {
        severity,
        timestamp,
        caller,
        logger,
        message,
    })
}

/// Remove and return the first of `keys` bound to a non-null value
fn take_value(fields: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    for key in keys {
        if matches!(fields.get(*key), Some(value) if !value.is_null()) {
            return fields.remove(*key);
        }
    }
    None
}

/// Remove and return `key` when bound to a string. A value of any other
/// type stays in the map and reads as absent.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !matches!(fields.get(key), Some(Value::String(_))) {
        return None;
    }
    match fields.remove(key) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

/// Like `take_string`, but an empty string also stays in the map. Used for
/// the optional detail fields, where a type mismatch must not fail the line.
fn take_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !matches!(fields.get(key), Some(Value::String(text)) if !text.is_empty()) {
        return None;
    }
    match fields.remove(key) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}
