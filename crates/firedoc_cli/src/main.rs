#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod cmd;

#[derive(Parser)]
#[command(name = "firedoc", about = "Firestore REST typed-document decoding tools")]
struct Cli {
	/// Log debug events to stderr unless `RUST_LOG` says otherwise.
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Decode(cmd::decode::Args),
	Document(cmd::document::Args),
	Notes(cmd::notes::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Commands) -> firedoc::firestore::Result<()> {
	match command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Document(args) => cmd::document::run(args),
		Commands::Notes(args) => cmd::notes::run(args),
	}
}
