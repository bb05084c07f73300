use serde_json::json;

use super::{coerce_number, parse_numeric_text};
use crate::firestore::Value;

#[test]
fn integer_strings_stay_exact() {
	assert_eq!(parse_numeric_text("42"), Value::Integer(42));
	assert_eq!(parse_numeric_text("-7"), Value::Integer(-7));
	assert_eq!(parse_numeric_text("+7"), Value::Integer(7));
	assert_eq!(parse_numeric_text("9007199254740993"), Value::Integer(9_007_199_254_740_993));
}

#[test]
fn decimal_strings_parse_as_double() {
	assert_eq!(parse_numeric_text("3.14"), Value::Double(3.14));
	assert_eq!(parse_numeric_text(".5"), Value::Double(0.5));
	assert_eq!(parse_numeric_text("5."), Value::Double(5.0));
	assert_eq!(parse_numeric_text("1e3"), Value::Double(1000.0));
	assert_eq!(parse_numeric_text("2.5E-1"), Value::Double(0.25));
	assert_eq!(parse_numeric_text("99999999999999999999"), Value::Double(1e20));
}

#[test]
fn whitespace_is_trimmed_and_empty_is_zero() {
	assert_eq!(parse_numeric_text("  12\n"), Value::Integer(12));
	assert_eq!(parse_numeric_text(""), Value::Integer(0));
	assert_eq!(parse_numeric_text("   "), Value::Integer(0));
}

#[test]
fn radix_prefixes_are_honored() {
	assert_eq!(parse_numeric_text("0x1A"), Value::Integer(26));
	assert_eq!(parse_numeric_text("0o17"), Value::Integer(15));
	assert_eq!(parse_numeric_text("0b101"), Value::Integer(5));
	assert!(matches!(parse_numeric_text("0x"), Value::Double(v) if v.is_nan()));
	assert!(matches!(parse_numeric_text("0b102"), Value::Double(v) if v.is_nan()));
}

#[test]
fn infinity_spelling_matches_javascript() {
	assert_eq!(parse_numeric_text("Infinity"), Value::Double(f64::INFINITY));
	assert_eq!(parse_numeric_text("-Infinity"), Value::Double(f64::NEG_INFINITY));
	for text in ["inf", "infinity", "NaN", "nan"] {
		assert!(matches!(parse_numeric_text(text), Value::Double(v) if v.is_nan()), "{text} should be NaN");
	}
}

#[test]
fn garbage_becomes_nan() {
	for text in ["abc", "1_000", "12px", "1e", "--1", ".", "e5"] {
		assert!(matches!(parse_numeric_text(text), Value::Double(v) if v.is_nan()), "{text} should be NaN");
	}
}

#[test]
fn non_string_payloads_coerce_like_javascript() {
	assert_eq!(coerce_number(&json!(3.5)), Value::Double(3.5));
	assert_eq!(coerce_number(&json!(8)), Value::Integer(8));
	assert_eq!(coerce_number(&json!(true)), Value::Integer(1));
	assert_eq!(coerce_number(&json!(false)), Value::Integer(0));
	assert_eq!(coerce_number(&json!(null)), Value::Integer(0));
	assert!(matches!(coerce_number(&json!({ "a": 1 })), Value::Double(v) if v.is_nan()));
}

#[test]
fn arrays_coerce_through_their_joined_text() {
	assert_eq!(coerce_number(&json!([])), Value::Integer(0));
	assert_eq!(coerce_number(&json!([5])), Value::Integer(5));
	assert_eq!(coerce_number(&json!([" 2.5 "])), Value::Double(2.5));
	assert_eq!(coerce_number(&json!([[7]])), Value::Integer(7));
	assert_eq!(coerce_number(&json!([null])), Value::Integer(0));
	for raw in [json!([1, 2]), json!([true]), json!([{}]), json!(["x"])] {
		assert!(matches!(coerce_number(&raw), Value::Double(v) if v.is_nan()), "{raw} should be NaN");
	}
}
