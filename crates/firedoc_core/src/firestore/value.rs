use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value as JsonValue};

/// Plain value produced by decoding Firestore typed values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Integer that fits in `i64`.
	Integer(i64),
	/// Floating point scalar, possibly non-finite.
	Double(f64),
	/// String scalar.
	String(Box<str>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Mapping with field order preserved.
	Map(MapValue),
}

/// Decoded mapping with field names preserved in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapValue {
	/// Decoded fields in input key order.
	pub fields: Vec<FieldValue>,
}

/// Named decoded field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field identifier.
	pub name: Box<str>,
	/// Decoded field payload.
	pub value: Value,
}

impl FieldValue {
	/// Build a named field.
	pub fn new(name: impl Into<Box<str>>, value: Value) -> Self {
		Self { name: name.into(), value }
	}
}

impl Value {
	/// Convert a JSON value verbatim, without interpreting any tags.
	pub fn from_json(input: &JsonValue) -> Self {
		match input {
			JsonValue::Null => Self::Null,
			JsonValue::Bool(value) => Self::Bool(*value),
			JsonValue::Number(value) => Self::from_number(value),
			JsonValue::String(value) => Self::String(value.as_str().into()),
			JsonValue::Array(items) => Self::Array(items.iter().map(Self::from_json).collect()),
			JsonValue::Object(map) => Self::Map(MapValue {
				fields: map.iter().map(|(name, value)| FieldValue::new(name.as_str(), Self::from_json(value))).collect(),
			}),
		}
	}

	/// Convert a JSON number, keeping integers exact where they fit.
	pub fn from_number(value: &Number) -> Self {
		match value.as_i64() {
			Some(item) => Self::Integer(item),
			None => Self::Double(value.as_f64().unwrap_or(f64::NAN)),
		}
	}

	/// Stable lowercase label for the value kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Integer(_) => "integer",
			Self::Double(_) => "double",
			Self::String(_) => "string",
			Self::Array(_) => "array",
			Self::Map(_) => "map",
		}
	}

	/// Borrow the string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Convert into a `serde_json` value; non-finite doubles become `null`.
	pub fn to_json(&self) -> JsonValue {
		match self {
			Self::Null => JsonValue::Null,
			Self::Bool(value) => JsonValue::Bool(*value),
			Self::Integer(value) => JsonValue::from(*value),
			Self::Double(value) => Number::from_f64(*value).map_or(JsonValue::Null, JsonValue::Number),
			Self::String(value) => JsonValue::String(value.to_string()),
			Self::Array(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
			Self::Map(map) => JsonValue::Object(map.fields.iter().map(|field| (field.name.to_string(), field.value.to_json())).collect()),
		}
	}
}

impl MapValue {
	/// Look up a field by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}

	/// Replace an existing field in place, or append a new one.
	pub fn insert(&mut self, name: &str, value: Value) {
		match self.fields.iter_mut().find(|field| field.name.as_ref() == name) {
			Some(field) => field.value = value,
			None => self.fields.push(FieldValue::new(name, value)),
		}
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the mapping has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(value) => serializer.serialize_bool(*value),
			Self::Integer(value) => serializer.serialize_i64(*value),
			Self::Double(value) if value.is_finite() => serializer.serialize_f64(*value),
			Self::Double(_) => serializer.serialize_unit(),
			Self::String(value) => serializer.serialize_str(value),
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Map(map) => map.serialize(serializer),
		}
	}
}

impl Serialize for MapValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut out = serializer.serialize_map(Some(self.fields.len()))?;
		for field in &self.fields {
			out.serialize_entry(field.name.as_ref(), &field.value)?;
		}
		out.end()
	}
}
