mod decode;
mod document;
mod error;
mod note;
mod number;
mod value;
mod wire;

/// Typed-value decoding entry points.
pub use decode::{decode, decode_fields};
/// Document envelopes, response parsing, and error-payload detection.
pub use document::{DecodedDocument, Document, ErrorStatus, ListDocumentsResponse, check_error, decode_document, parse_document, parse_document_list};
/// Error and result aliases.
pub use error::{FiredocError, Result};
/// Note records built from decoded documents.
pub use note::{Note, NoteFilter, notes_from_documents};
/// Numeric payload coercion.
pub use number::{coerce_number, parse_numeric_text};
/// Decoded runtime value types.
pub use value::{FieldValue, MapValue, Value};
/// Wire tag enumeration and input classification.
pub use wire::{Tag, Wire, is_falsy};
