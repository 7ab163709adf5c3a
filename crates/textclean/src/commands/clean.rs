//! Clean command: print only the normalized text.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textclean_core::process;

use super::read_input;

/// Arguments for the `clean` subcommand.
#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// File to read. Reads standard input when omitted or `-`.
    pub file: Option<Utf8PathBuf>,
}

/// Normalize the input and print the result.
#[instrument(name = "cmd_clean", skip_all, fields(file = ?args.file))]
pub fn cmd_clean(
    args: CleanArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, "executing clean command");

    let raw = read_input(args.file.as_deref(), max_input_bytes)?;
    let cleaned = process(&raw);

    if global_json {
        let output = serde_json::json!({ "cleaned": cleaned });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{cleaned}");
    }

    Ok(())
}
