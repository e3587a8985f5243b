// src/classify.rs - Log line classification
use serde_json::{Map, Value};

use crate::error::LineError;

/// Recognized field-set pattern of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// Plain zap production encoder: `level` + `ts`/`timestamp` + `msg`/`message`
    Zap,
    /// Zapdriver (Stackdriver) encoder: `severity` + `time`/`timestamp` + `message`
    Zapdriver,
}

/// Parse one text line as a single top-level JSON object and tag its shape.
///
/// Exactly one value is read from the line, so trailing content after the
/// object is tolerated. A truncated object, invalid JSON, or a non-object
/// top-level value fails classification and the caller passes the raw line
/// through unchanged.
pub fn classify_line(line: &str) -> Result<(Map<String, Value>, RecordShape), LineError> {
    let mut stream = serde_json::Deserializer::from_str(line).into_iter::<Value>();

    let fields = match stream.next() {
        Some(Ok(Value::Object(map))) => map,
        Some(Ok(_)) => return Err(LineError::NotObject),
        Some(Err(err)) => return Err(LineError::Json(err)),
        None => return Err(LineError::NotObject),
    };

    let shape = detect_shape(&fields).ok_or(LineError::UnrecognizedShape)?;
    Ok((fields, shape))
}

fn detect_shape(fields: &Map<String, Value>) -> Option<RecordShape> {
    // zap's shape is checked first; a record carrying both field sets is zap
    if has(fields, "level")
        && (has(fields, "ts") || has(fields, "timestamp"))
        && (has(fields, "msg") || has(fields, "message"))
    {
        return Some(RecordShape::Zap);
    }

    if has(fields, "severity")
        && (has(fields, "time") || has(fields, "timestamp"))
        && has(fields, "message")
    {
        return Some(RecordShape::Zapdriver);
    }

    None
}

/// A key bound to JSON null counts as absent, like in the original encoders
fn has(fields: &Map<String, Value>, key: &str) -> bool {
    matches!(fields.get(key), Some(value) if !value.is_null())
}
