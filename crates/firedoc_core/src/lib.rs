//! Public library API for decoding Firestore REST typed documents.

/// Typed-value decoding, document envelopes, and note records.
pub mod firestore;
