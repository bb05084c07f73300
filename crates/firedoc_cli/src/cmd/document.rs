use firedoc::firestore::{Value, parse_document};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{emit_json, input_label, opt_str, read_input};

#[derive(clap::Args)]
pub struct Args {
	/// Single-document response body, or `-` for stdin.
	pub input: String,
	#[arg(long)]
	pub json: bool,
	/// Shorter text rendering with tighter truncation.
	#[arg(long)]
	pub brief: bool,
}

/// Parse one document response, reject error payloads, and print the decoded document.
pub fn run(args: Args) -> firedoc::firestore::Result<()> {
	let Args { input, json, brief } = args;

	let bytes = read_input(&input)?;
	let document = parse_document(&bytes)?.decode();

	if json {
		return emit_json(&document, false);
	}

	println!("input: {}", input_label(&input));
	println!("name: {}", document.name);
	println!("id: {}", document.id());
	println!("create_time: {}", opt_str(document.create_time.as_deref()));
	println!("update_time: {}", opt_str(document.update_time.as_deref()));
	println!("fields: {}", document.fields.len());
	let options = if brief { PrintOptions::compact() } else { PrintOptions::default() };
	print_value(&Value::Map(document.fields), 0, 0, options);

	Ok(())
}
