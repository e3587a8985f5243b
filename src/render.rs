// src/render.rs - JSON tail serialization
use serde_json::{Map, Value};

use crate::config::ProcessorConfig;
use crate::error::LineError;

/// Serialize the tail fields left after projection.
///
/// An empty remainder renders nothing at all. Layout is indented two-space
/// JSON when forced or when the field count exceeds the configured
/// threshold, compact single-line JSON otherwise.
pub fn render_tail(
    fields: &Map<String, Value>,
    config: &ProcessorConfig,
) -> Result<Option<String>, LineError> {
    if fields.is_empty() {
        return Ok(None);
    }

    let rendered = if config.multiline_forced || fields.len() > config.multiline_threshold {
        serde_json::to_string_pretty(fields)
    } else {
        serde_json::to_string(fields)
    };

    rendered.map(Some).map_err(LineError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_empty_remainder_renders_nothing() {
        let fields = Map::new();
        let result = render_tail(&fields, &ProcessorConfig::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_compact_below_threshold() {
        let fields = object(json!({"a": 1, "b": 2, "c": 3}));
        let tail = render_tail(&fields, &ProcessorConfig::default())
            .unwrap()
            .unwrap();
        assert!(!tail.contains('\n'));
    }

    #[test]
    fn test_multiline_above_threshold() {
        let fields = object(json!({"a": 1, "b": 2, "c": 3, "d": 4}));
        let tail = render_tail(&fields, &ProcessorConfig::default())
            .unwrap()
            .unwrap();
        assert!(tail.contains('\n'));
        assert!(tail.contains("  \"a\": 1"));
    }

    #[test]
    fn test_forced_multiline_ignores_threshold() {
        let fields = object(json!({"a": 1}));
        let config = ProcessorConfig {
            multiline_forced: true,
            ..ProcessorConfig::default()
        };
        let tail = render_tail(&fields, &config).unwrap().unwrap();
        assert!(tail.contains('\n'));
    }

    #[test]
    fn test_custom_threshold() {
        let fields = object(json!({"a": 1, "b": 2}));
        let config = ProcessorConfig {
            multiline_threshold: 1,
            ..ProcessorConfig::default()
        };
        let tail = render_tail(&fields, &config).unwrap().unwrap();
        assert!(tail.contains('\n'));
    }
}
