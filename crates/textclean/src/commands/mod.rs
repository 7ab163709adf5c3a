//! Command implementations.

use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context, bail};
use camino::Utf8Path;
use textclean_core::TextStats;

pub mod clean;
pub mod info;
pub mod report;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

#[cfg(windows)]
const STDIN_PROMPT: &str = "Enter your messy text (Ctrl+Z then Enter when done):";
#[cfg(not(windows))]
const STDIN_PROMPT: &str = "Enter your messy text (Ctrl+D when done):";

/// Read command input from a file, or from standard input when `file` is
/// `None` or `-`.
///
/// Invalid UTF-8 is replaced rather than rejected; the normalizer drops
/// every non-ASCII character anyway.
pub fn read_input(file: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_str() != STDIN_PATH => read_input_file(path, max_bytes),
        _ => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("{STDIN_PROMPT}");
            }
            read_bounded(stdin.lock(), max_bytes, "standard input")
        }
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    // Pseudo-files and pipes report a length of 0, and regular files can
    // grow after the preflight, so the read itself is bounded too.
    let file = File::open(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    read_bounded(file, max_bytes, path.as_str())
}

/// Read a stream to its end, failing once it exceeds `max_bytes`.
pub fn read_bounded<R: Read>(
    mut reader: R,
    max_bytes: Option<usize>,
    source: &str,
) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            reader
                .by_ref()
                .take(max as u64 + 1)
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {source}"))?;
            if bytes.len() > max {
                bail!("input too large: {source} exceeds {max} bytes");
            }
        }
        None => {
            reader
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {source}"))?;
        }
    }
    Ok(decode(bytes))
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "input is not valid UTF-8, replacing invalid sequences"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Write the labeled statistics block.
pub fn write_stats<W: Write>(out: &mut W, stats: &TextStats, limit: usize) -> io::Result<()> {
    writeln!(out, "Total Words: {}", stats.word_count)?;
    writeln!(out, "Total Sentences: {}", stats.sentence_count)?;
    writeln!(out, "Top {limit} Words (excluding stop words):")?;
    for entry in &stats.top_words {
        writeln!(out, "{}: {}", entry.word, entry.count)?;
    }
    Ok(())
}
