//! Value policy — how data values behave in conditionals and substitutions.

use serde_json::Value;

/// Whether a value keeps a conditional block alive.
///
/// Falsy: null, `false`, numeric zero, empty string, empty array or object.
/// Everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Display text for a substituted value.
///
/// Strings render verbatim (no quotes) and null renders empty; booleans,
/// numbers, and containers use the JSON text form.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), false)]
    #[case(json!(false), false)]
    #[case(json!(true), true)]
    #[case(json!(0), false)]
    #[case(json!(0.0), false)]
    #[case(json!(-1), true)]
    #[case(json!(42), true)]
    #[case(json!(""), false)]
    #[case(json!("x"), true)]
    #[case(json!([]), false)]
    #[case(json!([1]), true)]
    #[case(json!({}), false)]
    #[case(json!({"k": "v"}), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_truthy(&value), expected, "value: {value}");
    }

    #[rstest]
    #[case(json!(true), "true")]
    #[case(json!(false), "false")]
    #[case(json!(null), "")]
    #[case(json!("verbatim"), "verbatim")]
    #[case(json!(42), "42")]
    #[case(json!(2.5), "2.5")]
    #[case(json!([1, 2]), "[1,2]")]
    #[case(json!({"a": 1}), r#"{"a":1}"#)]
    fn stringification(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(render_value(&value), expected, "value: {value}");
    }
}
