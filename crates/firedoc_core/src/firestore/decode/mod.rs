use serde_json::{Map, Value as JsonValue};

use crate::firestore::number::coerce_number;
use crate::firestore::value::{FieldValue, MapValue, Value};
use crate::firestore::wire::{Tag, Wire, is_falsy};

/// Decode a Firestore typed value, or any container of typed values, into a plain value.
///
/// Never fails. Falsy input yields an empty array, untagged objects and arrays are decoded
/// member by member, and any other untagged input is returned as-is.
pub fn decode(input: &JsonValue) -> Value {
	match Wire::classify(input) {
		Wire::Absent => Value::Array(Vec::new()),
		Wire::Tagged { tag, raw } => decode_tagged(tag, raw),
		Wire::Object(map) => Value::Map(decode_fields(map)),
		Wire::Sequence(items) => Value::Array(items.iter().map(decode).collect()),
		Wire::Scalar(value) => Value::from_json(value),
	}
}

/// Decode a field-name to typed-value mapping, preserving key order.
pub fn decode_fields(fields: &Map<String, JsonValue>) -> MapValue {
	MapValue {
		fields: fields.iter().map(|(name, value)| FieldValue::new(name.as_str(), decode(value))).collect(),
	}
}

fn decode_tagged(tag: Tag, raw: &JsonValue) -> Value {
	match tag {
		Tag::Integer | Tag::Double => coerce_number(raw),
		Tag::Array => decode_array(raw),
		Tag::Map => decode_map(raw),
		Tag::GeoPoint => decode_geo_point(raw),
		Tag::String | Tag::Boolean | Tag::Null | Tag::Timestamp | Tag::Bytes | Tag::Reference => Value::from_json(raw),
	}
}

fn decode_array(raw: &JsonValue) -> Value {
	match raw.get("values") {
		Some(JsonValue::Array(values)) => Value::Array(values.iter().map(decode).collect()),
		_ => Value::Array(Vec::new()),
	}
}

fn decode_map(raw: &JsonValue) -> Value {
	match raw.get("fields") {
		Some(JsonValue::Object(fields)) => Value::Map(decode_fields(fields)),
		Some(other) if !is_falsy(other) => decode(other),
		_ => Value::Map(MapValue::default()),
	}
}

fn decode_geo_point(raw: &JsonValue) -> Value {
	let mut point = MapValue {
		fields: vec![FieldValue::new("latitude", Value::Integer(0)), FieldValue::new("longitude", Value::Integer(0))],
	};

	// Only object payloads contribute entries. A string or array payload is not spread into
	// index keys ("ab" does not become {"0": "a", "1": "b"}).
	if let JsonValue::Object(coords) = raw {
		for (name, value) in coords {
			point.insert(name, Value::from_json(value));
		}
	}

	Value::Map(point)
}
