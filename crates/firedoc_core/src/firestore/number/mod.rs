use serde_json::Value as JsonValue;

use crate::firestore::Value;

/// Coerce an `integerValue`/`doubleValue` payload to a number.
///
/// Follows JavaScript `Number(x)` conversion: strings are trimmed, empty means zero, radix
/// prefixes are honored, and anything unparseable becomes NaN. Arrays convert through their
/// joined text, so `[]` is zero and a one-element array takes its element's number. Decimal
/// integers that fit in `i64` stay exact.
pub fn coerce_number(raw: &JsonValue) -> Value {
	match raw {
		JsonValue::Null => Value::Integer(0),
		JsonValue::Bool(value) => Value::Integer(i64::from(*value)),
		JsonValue::Number(value) => Value::from_number(value),
		JsonValue::String(text) => parse_numeric_text(text),
		JsonValue::Array(items) => coerce_joined(items),
		JsonValue::Object(_) => Value::Double(f64::NAN),
	}
}

// `[a, b]` joins to "a,b", which never parses; a lone element joins to its own text.
fn coerce_joined(items: &[JsonValue]) -> Value {
	match items {
		[] => Value::Integer(0),
		[item] => match item {
			JsonValue::Null => Value::Integer(0),
			JsonValue::Bool(_) | JsonValue::Object(_) => Value::Double(f64::NAN),
			JsonValue::Number(_) | JsonValue::String(_) | JsonValue::Array(_) => coerce_number(item),
		},
		_ => Value::Double(f64::NAN),
	}
}

/// Parse numeric text with JavaScript string-to-number rules.
pub fn parse_numeric_text(text: &str) -> Value {
	let text = text.trim();
	if text.is_empty() {
		return Value::Integer(0);
	}

	if let Some(value) = parse_radix_literal(text) {
		return value;
	}

	let (negative, unsigned) = match text.as_bytes()[0] {
		b'-' => (true, &text[1..]),
		b'+' => (false, &text[1..]),
		_ => (false, text),
	};

	if unsigned == "Infinity" {
		return Value::Double(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
	}

	if !is_decimal_literal(unsigned) {
		return Value::Double(f64::NAN);
	}

	if let Ok(value) = text.parse::<i64>() {
		return Value::Integer(value);
	}

	Value::Double(text.parse::<f64>().unwrap_or(f64::NAN))
}

fn parse_radix_literal(text: &str) -> Option<Value> {
	let prefix = text.get(..2)?;
	let radix = match prefix {
		"0x" | "0X" => 16,
		"0o" | "0O" => 8,
		"0b" | "0B" => 2,
		_ => return None,
	};

	let digits = &text[2..];
	if digits.is_empty() || !digits.chars().all(|ch| ch.is_digit(radix)) {
		return Some(Value::Double(f64::NAN));
	}

	if let Ok(value) = i64::from_str_radix(digits, radix) {
		return Some(Value::Integer(value));
	}

	let wide = digits
		.chars()
		.filter_map(|ch| ch.to_digit(radix))
		.fold(0.0_f64, |acc, digit| acc * f64::from(radix) + f64::from(digit));
	Some(Value::Double(wide))
}

// digits [ "." digits ] [ exponent ], with at least one mantissa digit on either side of the dot
fn is_decimal_literal(text: &str) -> bool {
	let bytes = text.as_bytes();
	let mut pos = 0;

	let int_digits = count_digits(&bytes[pos..]);
	pos += int_digits;

	let mut frac_digits = 0;
	if bytes.get(pos) == Some(&b'.') {
		pos += 1;
		frac_digits = count_digits(&bytes[pos..]);
		pos += frac_digits;
	}

	if int_digits == 0 && frac_digits == 0 {
		return false;
	}

	if matches!(bytes.get(pos), Some(b'e' | b'E')) {
		pos += 1;
		if matches!(bytes.get(pos), Some(b'+' | b'-')) {
			pos += 1;
		}
		let exp_digits = count_digits(&bytes[pos..]);
		if exp_digits == 0 {
			return false;
		}
		pos += exp_digits;
	}

	pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests;
