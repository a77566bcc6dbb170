use serde_json::Value;

/// Truthiness of a string-encoded flag.
///
/// Only the leading token matters: after optional spaces or tabs, an optional sign
/// and any leading zeros, the value is true when the next character is `Y`,
/// `T` (either case) or a digit `1`-`9`. Trailing characters are ignored, so
/// `"yes"`, `"True"` and `"10px"` are true while `"0"`, `"false"`, `""` and
/// `"0.5"` are false.
pub fn string_bool(s: &str) -> bool {
    // line breaks are not skipped, only horizontal whitespace
    let rest = s.trim_start_matches([' ', '\t']);
    let rest = rest.strip_prefix(['+', '-']).unwrap_or(rest);
    let rest = rest.trim_start_matches('0');
    matches!(
        rest.chars().next(),
        Some('Y' | 'y' | 'T' | 't' | '1'..='9')
    )
}

/// Flag from a JSON value. Only strings are flags; JSON booleans and numbers
/// are not read, so they leave the caller's default in place.
pub fn value_bool(value: &Value) -> Option<bool> {
    value.as_str().map(string_bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy_strings() {
        for s in ["1", "true", "TRUE", "Yes", "y", "t", "  true", "\t\tyes", " \t1", "+1", "-2", "007", "9 lives"] {
            assert!(string_bool(s), "{:?} should be true", s);
        }
    }

    #[test]
    fn test_falsy_strings() {
        for s in ["0", "false", "", "maybe", "no", "FALSE", "   ", "000", "0.5", "-0", "on", "x1", "\n1", "\r\ntrue", "\u{2028}yes", "\u{a0}1"] {
            assert!(!string_bool(s), "{:?} should be false", s);
        }
    }

    #[test]
    fn test_value_bool() {
        assert_eq!(value_bool(&json!("true")), Some(true));
        assert_eq!(value_bool(&json!("false")), Some(false));
        assert_eq!(value_bool(&json!("\n1")), Some(false));
        assert_eq!(value_bool(&json!(true)), None);
        assert_eq!(value_bool(&json!(false)), None);
        assert_eq!(value_bool(&json!(1)), None);
        assert_eq!(value_bool(&json!(0)), None);
        assert_eq!(value_bool(&json!(null)), None);
        assert_eq!(value_bool(&json!({"on": true})), None);
        assert_eq!(value_bool(&json!(["true"])), None);
    }
}
