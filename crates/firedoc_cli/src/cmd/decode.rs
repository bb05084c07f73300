use firedoc::firestore::decode;

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{emit_json, input_label, read_input};

#[derive(clap::Args)]
pub struct Args {
	/// JSON file to decode, or `-` for stdin.
	pub input: String,
	#[arg(long)]
	pub json: bool,
	/// Single-line JSON output; implies `--json`.
	#[arg(long)]
	pub compact: bool,
}

/// Decode any Firestore typed-value JSON and print the plain value.
pub fn run(args: Args) -> firedoc::firestore::Result<()> {
	let Args { input, json, compact } = args;

	let bytes = read_input(&input)?;
	let raw: serde_json::Value = serde_json::from_slice(&bytes)?;
	let value = decode(&raw);

	if json || compact {
		return emit_json(&value, compact);
	}

	println!("input: {}", input_label(&input));
	println!("kind: {}", value.kind());
	println!("decoded:");
	print_value(&value, 0, 0, PrintOptions::default());

	Ok(())
}
