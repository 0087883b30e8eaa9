use serde_json::Value;

/// The text a field contributes to substring matching, or `None` when the
/// field can never match.
///
/// * strings and numbers match on their string form
/// * booleans, nulls, arrays and objects never match, whatever they contain
/// * the empty string and numeric zero never match either, not even an
///   empty query
pub fn matchable_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_and_numbers_contribute_text() {
        assert_eq!(matchable_text(&json!("Running")), Some("Running".into()));
        assert_eq!(matchable_text(&json!(42)), Some("42".into()));
        assert_eq!(matchable_text(&json!(-1.5)), Some("-1.5".into()));
    }

    #[test]
    fn test_structured_values_never_match() {
        assert_eq!(matchable_text(&json!(true)), None);
        assert_eq!(matchable_text(&json!(null)), None);
        assert_eq!(matchable_text(&json!(["urgent"])), None);
        assert_eq!(matchable_text(&json!({"nested": "urgent"})), None);
    }

    #[test]
    fn test_empty_string_and_zero_never_match() {
        assert_eq!(matchable_text(&json!("")), None);
        assert_eq!(matchable_text(&json!(0)), None);
        assert_eq!(matchable_text(&json!(0.0)), None);
    }
}
