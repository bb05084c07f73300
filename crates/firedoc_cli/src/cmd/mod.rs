/// Raw typed-value decode command.
pub mod decode;
/// Single-document decode command.
pub mod document;
/// Note listing command.
pub mod notes;
/// Decoded value text rendering.
pub mod print;
mod util;
