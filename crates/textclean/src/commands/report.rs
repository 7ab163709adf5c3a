//! Report command: cleaned text followed by its statistics.

use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use textclean_core::{Analyzer, Config, TextStats, process};

use super::{read_input, write_stats};

/// Arguments for the `report` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// File to read. Reads standard input when omitted or `-`.
    pub file: Option<Utf8PathBuf>,

    /// Number of ranked words to show (overrides config).
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    cleaned: &'a str,
    stats: &'a TextStats,
}

/// Clean the input and print the cleaned text with its statistics.
#[instrument(name = "cmd_report", skip_all, fields(file = ?args.file))]
pub fn cmd_report(
    args: ReportArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, top = ?args.top, "executing report command");

    let raw = read_input(args.file.as_deref(), max_input_bytes)?;
    let limit = args.top.unwrap_or_else(|| config.top_words_limit());
    let stop_words = config.stop_words();

    let cleaned = process(&raw);
    let stats = Analyzer::new()
        .with_stop_words(&stop_words)
        .with_top_words(limit)
        .analyze(&cleaned);

    if global_json {
        let output = ReportOutput {
            cleaned: &cleaned,
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "\n{}",
        "Cleaned Text:".if_supports_color(Stream::Stdout, |t| t.bold())
    )?;
    writeln!(out, "{cleaned}")?;
    writeln!(
        out,
        "\n{}",
        "Statistics:".if_supports_color(Stream::Stdout, |t| t.bold())
    )?;
    write_stats(&mut out, &stats, limit)?;

    Ok(())
}
