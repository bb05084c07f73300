use serde::Serialize;

use crate::firestore::document::{DecodedDocument, Document};
use crate::firestore::{FiredocError, Result, Value};

/// Note record assembled from a decoded `notes/{id}` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
	/// Document id.
	pub id: String,
	/// Full resource name.
	pub name: String,
	/// Note title.
	pub title: String,
	/// Note body text.
	pub body: String,
	/// Owning user id, when the document records one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
	/// Creation timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub create_time: Option<String>,
	/// Last update timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub update_time: Option<String>,
}

/// Client-side note selection.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
	/// Keep only notes owned by this user.
	pub user_id: Option<String>,
}

impl Note {
	/// Build a note from a decoded document. `title` and `body` are required strings.
	pub fn from_document(document: &DecodedDocument) -> Result<Self> {
		let id = document.id();
		Ok(Self {
			id: id.to_owned(),
			name: document.name.clone(),
			title: required_str(document, "title")?,
			body: required_str(document, "body")?,
			user_id: optional_str(document, "userId")?,
			create_time: document.create_time.clone(),
			update_time: document.update_time.clone(),
		})
	}

	/// Whether the note passes `filter`.
	pub fn matches(&self, filter: &NoteFilter) -> bool {
		filter.user_id.as_deref().is_none_or(|user| self.user_id.as_deref() == Some(user))
	}
}

/// Decode documents and build notes, preserving order.
pub fn notes_from_documents(documents: &[Document]) -> Result<Vec<Note>> {
	documents.iter().map(|document| Note::from_document(&document.decode())).collect()
}

fn required_str(document: &DecodedDocument, field: &'static str) -> Result<String> {
	optional_str(document, field)?.ok_or_else(|| FiredocError::NoteFieldMissing {
		document: document.id().to_owned(),
		field,
	})
}

fn optional_str(document: &DecodedDocument, field: &'static str) -> Result<Option<String>> {
	match document.fields.get(field) {
		None | Some(Value::Null) => Ok(None),
		Some(value) => value.as_str().map(|text| Some(text.to_owned())).ok_or_else(|| FiredocError::NoteFieldType {
			document: document.id().to_owned(),
			field,
			expected: "string",
			got: value.kind(),
		}),
	}
}
