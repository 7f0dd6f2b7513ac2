use serde_json::json;

use crate::interpreter::RunResult;
use crate::value::Value;

/// Render a runtime value as JSON. Numbers without a fractional part
/// serialize as integers so a declared `5` round-trips as `5`, not `5.0`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Number(numeric_value) => {
            if numeric_value.fract() == 0.0
                && numeric_value.is_finite()
                && *numeric_value >= i64::MIN as f64
                && *numeric_value <= i64::MAX as f64
            {
                json!(*numeric_value as i64)
            } else {
                json!(numeric_value)
            }
        }
        Value::String(string_ref) => json!(string_ref.as_ref()),
    }
}

/// Serialize the whole result bundle: captured console text, ordered
/// error records, and the symbol snapshot in declaration order.
pub fn result_to_json(result: &RunResult) -> serde_json::Value {
    json!({
        "console": result.console_output,
        "errors": result
            .errors
            .iter()
            .map(|record| json!({
                "category": record.category.to_string(),
                "description": record.description,
            }))
            .collect::<Vec<_>>(),
        "symbols": result
            .symbols
            .iter()
            .map(|entry| json!({
                "id": entry.id,
                "type": entry.ty.to_string(),
                "value": value_to_json(&entry.value),
            }))
            .collect::<Vec<_>>(),
    })
}
