//! Stats command: word, sentence, and top-word statistics.

use std::io;

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textclean_core::{Analyzer, Config, process};

use super::{read_input, write_stats};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// File to read. Reads standard input when omitted or `-`.
    pub file: Option<Utf8PathBuf>,

    /// Number of ranked words to show (overrides config).
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Normalize the input and print its statistics.
#[instrument(name = "cmd_stats", skip_all, fields(file = ?args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, top = ?args.top, "executing stats command");

    let raw = read_input(args.file.as_deref(), max_input_bytes)?;
    let limit = args.top.unwrap_or_else(|| config.top_words_limit());
    let stop_words = config.stop_words();

    let stats = Analyzer::new()
        .with_stop_words(&stop_words)
        .with_top_words(limit)
        .analyze(&process(&raw));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        write_stats(&mut io::stdout().lock(), &stats, limit)?;
    }

    Ok(())
}
