//! JSON value helpers shared by hooks and validation.

use serde_json::{Number, Value};

/// Loose truthiness: absent, `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Whether a required field counts as not filled in.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        _ => false,
    }
}

/// Whole numbers as JSON integers, everything else as floats.
#[allow(clippy::cast_possible_truncation)]
pub fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9e15 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

/// Short rendering of a value for messages.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(Some(&falsy)), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!("a"), json!([]), json!({})] {
            assert!(is_truthy(Some(&truthy)), "{truthy} should be truthy");
        }
        assert!(!is_truthy(None));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(""))));
        assert!(is_blank(Some(&json!([]))));
        assert!(!is_blank(Some(&json!(false))));
        assert!(!is_blank(Some(&json!(0))));
    }

    #[test]
    fn test_number_keeps_integers() {
        assert_eq!(number(40.0), json!(40));
        assert_eq!(number(2.5), json!(2.5));
        assert_eq!(number(f64::NAN), Value::Null);
    }
}
