use crate::error::BuildError;
use crate::operator::{is_operator, is_supported_operator};
use serde_json::{Map, Value};

/// Checks every `$`-prefixed key in a raw selector document.
///
/// Descends into nested objects and into the object elements of arrays.
/// Each key is checked before its value is explored, and an object is fully
/// explored before the next array element. Returns the first unsupported
/// operator found.
pub fn validate_keys(doc: &Map<String, Value>) -> Result<(), BuildError> {
    for (key, value) in doc {
        if is_operator(key) && !is_supported_operator(key) {
            return Err(BuildError::UnknownOperator(key.clone()));
        }
        validate_value(value)?;
    }
    Ok(())
}

fn validate_value(value: &Value) -> Result<(), BuildError> {
    match value {
        Value::Object(obj) => validate_keys(obj),
        Value::Array(items) => {
            for item in items {
                if let Value::Object(obj) = item {
                    validate_keys(obj)?;
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
