use std::io::Read;
use std::path::Path;

use firedoc::firestore::{FiredocError, Result};
use tracing::debug;

/// Input argument naming stdin.
pub(crate) const STDIN_INPUT: &str = "-";

/// Read a response body from a file path, or from stdin for `-`.
pub(crate) fn read_input(input: &str) -> Result<Vec<u8>> {
	if input.is_empty() {
		return Err(FiredocError::InvalidInputPath { path: input.to_owned() });
	}

	let bytes = if input == STDIN_INPUT {
		let mut buf = Vec::new();
		std::io::stdin().lock().read_to_end(&mut buf)?;
		buf
	} else {
		std::fs::read(Path::new(input))?
	};

	debug!(input = input_label(input), bytes = bytes.len(), "read input");
	Ok(bytes)
}

/// Display label for an input argument.
pub(crate) fn input_label(input: &str) -> &str {
	if input == STDIN_INPUT { "<stdin>" } else { input }
}

/// Serialize `payload` to stdout as JSON.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T, compact: bool) -> Result<()> {
	let text = if compact {
		serde_json::to_string(payload)?
	} else {
		serde_json::to_string_pretty(payload)?
	};
	println!("{text}");
	Ok(())
}

/// Render an optional string, `-` when absent.
pub(crate) fn opt_str(value: Option<&str>) -> &str {
	value.unwrap_or("-")
}
