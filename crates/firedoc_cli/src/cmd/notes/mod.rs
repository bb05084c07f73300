use firedoc::firestore::{Note, NoteFilter, parse_document_list};
use tracing::warn;

use crate::cmd::print::truncate;
use crate::cmd::util::{emit_json, input_label, opt_str, read_input};

const BODY_PREVIEW_LEN: usize = 40;

#[derive(clap::Args)]
pub struct Args {
	/// List-documents response body (or a single document), or `-` for stdin.
	pub input: String,
	/// Keep only notes owned by this user id.
	#[arg(long = "user")]
	pub user_id: Option<String>,
	#[arg(long)]
	pub limit: Option<usize>,
	/// Warn about and skip documents that are not valid notes instead of failing.
	#[arg(long)]
	pub skip_invalid: bool,
	#[arg(long)]
	pub json: bool,
}

/// Build note records from a document list and print them.
pub fn run(args: Args) -> firedoc::firestore::Result<()> {
	let Args {
		input,
		user_id,
		limit,
		skip_invalid,
		json,
	} = args;

	let bytes = read_input(&input)?;
	let list = parse_document_list(&bytes)?;

	let mut notes = Vec::with_capacity(list.documents.len());
	for document in &list.documents {
		match Note::from_document(&document.decode()) {
			Ok(note) => notes.push(note),
			Err(err) if skip_invalid => warn!(document = document.id(), "skipping invalid note: {err}"),
			Err(err) => return Err(err),
		}
	}

	let filter = NoteFilter { user_id };
	notes.retain(|note| note.matches(&filter));
	if let Some(limit) = limit {
		notes.truncate(limit);
	}

	if json {
		let payload = NotesJson {
			input: input_label(&input).to_owned(),
			count: notes.len(),
			next_page_token: list.next_page_token,
			notes,
		};
		return emit_json(&payload, false);
	}

	println!("input: {}", input_label(&input));
	println!("notes: {}", notes.len());
	println!("next_page_token: {}", opt_str(list.next_page_token.as_deref()));
	println!("id\ttitle\tuser\tupdated\tbody");
	for note in &notes {
		println!(
			"{}\t{}\t{}\t{}\t{}",
			note.id,
			note.title,
			opt_str(note.user_id.as_deref()),
			opt_str(note.update_time.as_deref()),
			truncate(&note.body.replace('\n', " "), BODY_PREVIEW_LEN)
		);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct NotesJson {
	input: String,
	count: usize,
	next_page_token: Option<String>,
	notes: Vec<Note>,
}
