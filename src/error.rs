use serde_json::Value;

/// Per-line failures. All of these are recoverable: the processor prints the
/// raw line unchanged and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("does not look like a JSON line: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expecting a JSON object at the top level")]
    NotObject,

    #[error("not a known log line format")]
    UnrecognizedShape,

    #[error("unable to interpret timestamp value {0}")]
    Timestamp(Value),

    #[error("field '{field}' has an unexpected type")]
    FieldType { field: &'static str },

    #[error("unable to serialize remaining fields: {0}")]
    Serialization(serde_json::Error),
}

/// Run-level failures that terminate processing.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line too long: {length} > {max_length}")]
    LineTooLong { length: usize, max_length: usize },
}
