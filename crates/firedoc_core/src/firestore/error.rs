use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FiredocError>;

/// Errors produced while reading Firestore response bodies and building records.
///
/// The value decoder itself never fails; these cover the envelope and record layers around it.
#[derive(Debug, Error)]
pub enum FiredocError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Response body was not valid JSON or did not match the expected envelope.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Firestore reported that the requested document does not exist.
	#[error("document not found: {message}")]
	DocumentNotFound {
		/// Server-provided message, usually naming the missing document path.
		message: String,
	},
	/// Firestore returned an error payload other than not-found.
	#[error("request failed: code={code}, status={status}: {message}")]
	RequestFailed {
		/// Numeric HTTP-style status code from the error payload.
		code: i64,
		/// Canonical status label such as `PERMISSION_DENIED`.
		status: String,
		/// Server-provided message.
		message: String,
	},
	/// Note document lacks a required field.
	#[error("note {document} is missing field {field}")]
	NoteFieldMissing {
		/// Document id.
		document: String,
		/// Missing field name.
		field: &'static str,
	},
	/// Note field exists but has the wrong decoded kind.
	#[error("note {document} field {field}: expected {expected}, got {got}")]
	NoteFieldType {
		/// Document id.
		document: String,
		/// Offending field name.
		field: &'static str,
		/// Expected decoded kind.
		expected: &'static str,
		/// Actual decoded kind.
		got: &'static str,
	},
	/// CLI input path argument was empty.
	#[error("invalid input path: {path:?}")]
	InvalidInputPath {
		/// User-provided path string.
		path: String,
	},
}
