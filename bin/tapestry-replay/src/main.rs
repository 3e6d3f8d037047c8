//! Tapestry replay binary.
//!
//! Runs a scripted loom session against the in-memory host with the
//! interception enabled, then prints the items the script asked for.

mod replay;
mod script;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tapestry_loom::LoomConfig;
use tracing::info;

use crate::script::Script;

/// Replay command line arguments.
#[derive(Parser, Debug)]
#[command(name = "tapestry-replay")]
#[command(about = "Replay a scripted loom session with overflow layers intercepted")]
struct Args {
	/// Script to replay
	#[arg(value_name = "SCRIPT")]
	script: PathBuf,

	/// Interception config (TOML)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let config = match &args.config {
		Some(path) => LoomConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => LoomConfig::default(),
	};
	let script = Script::load(&args.script).with_context(|| format!("loading script {}", args.script.display()))?;
	info!(steps = script.steps.len(), script = %args.script.display(), "replaying");

	for line in replay::run(script, config).await? {
		println!("{line}");
	}
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("tapestry_loom=trace,tapestry_worker=debug,tapestry_replay=debug,info")
		} else {
			EnvFilter::new("tapestry_loom=info,tapestry_replay=info,warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
