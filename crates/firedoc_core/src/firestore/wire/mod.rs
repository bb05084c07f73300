use serde_json::{Map, Value as JsonValue};
use tracing::debug;

/// Recognized Firestore typed-value tag keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
	/// `arrayValue`: `{ values: [...] }`.
	Array,
	/// `bytesValue`: base64 payload string.
	Bytes,
	/// `booleanValue`.
	Boolean,
	/// `doubleValue`: JSON number or numeric string.
	Double,
	/// `geoPointValue`: `{ latitude, longitude }`.
	GeoPoint,
	/// `integerValue`: decimal string.
	Integer,
	/// `mapValue`: `{ fields: {...} }`.
	Map,
	/// `nullValue`.
	Null,
	/// `referenceValue`: document resource name.
	Reference,
	/// `stringValue`.
	String,
	/// `timestampValue`: RFC 3339 string.
	Timestamp,
}

impl Tag {
	/// Every recognized tag.
	pub const ALL: [Tag; 11] = [
		Tag::Array,
		Tag::Bytes,
		Tag::Boolean,
		Tag::Double,
		Tag::GeoPoint,
		Tag::Integer,
		Tag::Map,
		Tag::Null,
		Tag::Reference,
		Tag::String,
		Tag::Timestamp,
	];

	/// Wire key for this tag.
	pub fn key(self) -> &'static str {
		match self {
			Self::Array => "arrayValue",
			Self::Bytes => "bytesValue",
			Self::Boolean => "booleanValue",
			Self::Double => "doubleValue",
			Self::GeoPoint => "geoPointValue",
			Self::Integer => "integerValue",
			Self::Map => "mapValue",
			Self::Null => "nullValue",
			Self::Reference => "referenceValue",
			Self::String => "stringValue",
			Self::Timestamp => "timestampValue",
		}
	}

	/// Look up a tag by its wire key.
	pub fn from_key(key: &str) -> Option<Self> {
		let tag = match key {
			"arrayValue" => Self::Array,
			"bytesValue" => Self::Bytes,
			"booleanValue" => Self::Boolean,
			"doubleValue" => Self::Double,
			"geoPointValue" => Self::GeoPoint,
			"integerValue" => Self::Integer,
			"mapValue" => Self::Map,
			"nullValue" => Self::Null,
			"referenceValue" => Self::Reference,
			"stringValue" => Self::String,
			"timestampValue" => Self::Timestamp,
			_ => return None,
		};
		Some(tag)
	}
}

/// Shape of one JSON node as seen by the decoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wire<'a> {
	/// `null`, `false`, `0`, or `""`.
	Absent,
	/// Object carrying a recognized tag key.
	Tagged {
		/// First recognized tag in key order.
		tag: Tag,
		/// Payload stored under the tag key.
		raw: &'a JsonValue,
	},
	/// Object without any recognized tag key.
	Object(&'a Map<String, JsonValue>),
	/// JSON array.
	Sequence(&'a [JsonValue]),
	/// Truthy string, number, or `true`.
	Scalar(&'a JsonValue),
}

impl<'a> Wire<'a> {
	/// Classify one input node.
	///
	/// Objects carrying several tag keys resolve to the first tag in key order. That input is
	/// outside Firestore's wire contract; the remaining tags are ignored and reported at debug level.
	pub fn classify(input: &'a JsonValue) -> Self {
		if is_falsy(input) {
			return Self::Absent;
		}

		match input {
			JsonValue::Object(map) => match find_tag(map) {
				Some((tag, raw)) => Self::Tagged { tag, raw },
				None => Self::Object(map),
			},
			JsonValue::Array(items) => Self::Sequence(items),
			other => Self::Scalar(other),
		}
	}
}

/// JavaScript-style falsiness over JSON values.
pub fn is_falsy(input: &JsonValue) -> bool {
	match input {
		JsonValue::Null => true,
		JsonValue::Bool(value) => !value,
		JsonValue::Number(value) => value.as_f64().is_some_and(|item| item == 0.0),
		JsonValue::String(value) => value.is_empty(),
		JsonValue::Array(_) | JsonValue::Object(_) => false,
	}
}

fn find_tag(map: &Map<String, JsonValue>) -> Option<(Tag, &JsonValue)> {
	let mut tagged = map.iter().filter_map(|(key, raw)| Tag::from_key(key).map(|tag| (tag, raw)));
	let first = tagged.next()?;

	let ignored: Vec<&'static str> = tagged.map(|(tag, _)| tag.key()).collect();
	if !ignored.is_empty() {
		debug!(tag = first.0.key(), ?ignored, "typed value carries several tags; using the first");
	}

	Some(first)
}
