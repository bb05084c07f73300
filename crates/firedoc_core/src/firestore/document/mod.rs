use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::firestore::decode::decode_fields;
use crate::firestore::value::MapValue;
use crate::firestore::wire::is_falsy;
use crate::firestore::{FiredocError, Result};

/// Status code Firestore reports for missing documents.
const NOT_FOUND_CODE: i64 = 404;
/// Canonical status label for missing documents.
const NOT_FOUND_STATUS: &str = "NOT_FOUND";
/// Status label used when an error payload carries none.
const UNKNOWN_STATUS: &str = "UNKNOWN";

/// Firestore document envelope as returned by REST reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
	/// Full resource name, `projects/{p}/databases/{d}/documents/{path}`.
	#[serde(default)]
	pub name: String,
	/// Field name to typed value mapping.
	#[serde(default)]
	pub fields: Map<String, JsonValue>,
	/// Creation timestamp.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub create_time: Option<String>,
	/// Last update timestamp.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub update_time: Option<String>,
}

/// Response body of the list-documents endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
	/// Documents on this page. Firestore omits the key for empty pages.
	#[serde(default)]
	pub documents: Vec<Document>,
	/// Token for the next page, absent on the last one.
	#[serde(default)]
	pub next_page_token: Option<String>,
}

/// `error` payload carried by failed Firestore responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorStatus {
	/// HTTP-style status code.
	#[serde(default)]
	pub code: i64,
	/// Human-readable message.
	#[serde(default)]
	pub message: String,
	/// Canonical status label.
	#[serde(default)]
	pub status: String,
}

/// Document with its fields decoded into plain values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedDocument {
	/// Full resource name.
	pub name: String,
	/// Decoded fields in response order.
	pub fields: MapValue,
	/// Creation timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub create_time: Option<String>,
	/// Last update timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub update_time: Option<String>,
}

impl Document {
	/// Final path segment of the resource name.
	pub fn id(&self) -> &str {
		last_segment(&self.name)
	}

	/// Decode this document's fields.
	pub fn decode(&self) -> DecodedDocument {
		decode_document(self)
	}
}

impl DecodedDocument {
	/// Final path segment of the resource name.
	pub fn id(&self) -> &str {
		last_segment(&self.name)
	}
}

impl ErrorStatus {
	/// Whether the payload denotes a missing document.
	pub fn is_not_found(&self) -> bool {
		self.code == NOT_FOUND_CODE || self.status == NOT_FOUND_STATUS
	}

	/// Salvage whichever fields are usable from an `error` payload of unexpected shape.
	fn from_loose(payload: &JsonValue) -> Self {
		let Some(fields) = payload.as_object() else {
			return Self {
				code: 0,
				message: payload.as_str().map_or_else(|| payload.to_string(), str::to_owned),
				status: UNKNOWN_STATUS.to_owned(),
			};
		};

		let code = fields
			.get("code")
			.and_then(|code| match code {
				JsonValue::Number(value) => value.as_i64(),
				JsonValue::String(text) => text.trim().parse().ok(),
				_ => None,
			})
			.unwrap_or(0);
		let text = |key: &str| fields.get(key).and_then(JsonValue::as_str).map(str::to_owned);

		Self {
			code,
			message: text("message").unwrap_or_default(),
			status: text("status").unwrap_or_else(|| UNKNOWN_STATUS.to_owned()),
		}
	}

	fn into_error(self) -> FiredocError {
		if self.is_not_found() {
			return FiredocError::DocumentNotFound { message: self.message };
		}
		FiredocError::RequestFailed {
			code: self.code,
			status: self.status,
			message: self.message,
		}
	}
}

/// Decode a document's fields and carry its envelope metadata over unchanged.
pub fn decode_document(document: &Document) -> DecodedDocument {
	DecodedDocument {
		name: document.name.clone(),
		fields: decode_fields(&document.fields),
		create_time: document.create_time.clone(),
		update_time: document.update_time.clone(),
	}
}

/// Parse a single-document response body, surfacing `error` payloads as errors.
pub fn parse_document(body: &[u8]) -> Result<Document> {
	let raw: JsonValue = serde_json::from_slice(body)?;
	check_error(&raw)?;
	let document = Document::deserialize(&raw)?;
	debug!(name = %document.name, fields = document.fields.len(), "parsed document");
	Ok(document)
}

/// Parse a list-documents response body.
///
/// A body holding a single document (one with a `name`) is accepted as a one-item page.
pub fn parse_document_list(body: &[u8]) -> Result<ListDocumentsResponse> {
	let raw: JsonValue = serde_json::from_slice(body)?;
	check_error(&raw)?;

	if raw.get("name").is_some() {
		let document = Document::deserialize(&raw)?;
		debug!(name = %document.name, "list body holds a single document");
		return Ok(ListDocumentsResponse {
			documents: vec![document],
			next_page_token: None,
		});
	}

	let list = ListDocumentsResponse::deserialize(&raw)?;
	debug!(documents = list.documents.len(), next_page_token = ?list.next_page_token, "parsed document list");
	Ok(list)
}

/// Fail with not-found or request-failed when the body carries a truthy `error` payload.
pub fn check_error(raw: &JsonValue) -> Result<()> {
	let Some(error) = raw.get("error") else {
		return Ok(());
	};
	if is_falsy(error) {
		return Ok(());
	}

	let status = ErrorStatus::deserialize(error).unwrap_or_else(|_| ErrorStatus::from_loose(error));
	debug!(code = status.code, status = %status.status, "response carries error payload");
	Err(status.into_error())
}

fn last_segment(name: &str) -> &str {
	name.rsplit_once('/').map_or(name, |(_, id)| id)
}
