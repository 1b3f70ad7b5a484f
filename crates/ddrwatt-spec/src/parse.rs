//! Field extraction helpers for JSON ingestion.
//!
//! Extraction is done by hand instead of `#[derive(Deserialize)]` so that a
//! missing key or an uncoercible value is reported with the field name rather
//! than as an opaque serde error. Numeric strings coerce, matching the
//! behavior of the documents this library is fed in practice.

use serde_json::Value;

use crate::error::ModelError;

pub(crate) fn object_field<'a>(value: &'a Value, key: &str) -> Result<&'a Value, ModelError> {
    value.get(key).ok_or_else(|| ModelError::MissingField(key.to_string()))
}

pub(crate) fn f64_field(value: &Value, key: &str) -> Result<f64, ModelError> {
    let field = object_field(value, key)?;
    match field {
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(key, "number", field)),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid(key, "number", field)),
        _ => Err(invalid(key, "number", field)),
    }
}

pub(crate) fn u32_field(value: &Value, key: &str) -> Result<u32, ModelError> {
    let field = object_field(value, key)?;
    match field {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).map_err(|_| invalid(key, "integer", field))
            } else {
                // Integral floats (e.g. 8.0) are accepted, anything else is not.
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) => {
                        Ok(f as u32)
                    }
                    _ => Err(invalid(key, "integer", field)),
                }
            }
        }
        Value::String(s) => s.trim().parse::<u32>().map_err(|_| invalid(key, "integer", field)),
        _ => Err(invalid(key, "integer", field)),
    }
}

pub(crate) fn str_field_or_default(value: &Value, key: &str) -> String {
    value.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}

fn invalid(field: &str, expected: &'static str, value: &Value) -> ModelError {
    ModelError::InvalidType {
        field: field.to_string(),
        expected,
        value: value.to_string(),
    }
}
