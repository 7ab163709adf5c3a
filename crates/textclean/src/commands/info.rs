//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use textclean_core::config::{Config, ConfigSources, user_config_dir};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    top_words: usize,
    stop_word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_stop_words: Option<Vec<String>>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            user_config_dir: user_config_dir().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            top_words: config.top_words_limit(),
            stop_word_count: config.stop_words().len(),
            extra_stop_words: config.extra_stop_words.clone(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = full_info.config.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    if let Some(ref dir) = full_info.config.user_config_dir {
        println!("{}: {}", "User config dir".dimmed(), dir);
    }
    println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
    if let Some(ref dir) = full_info.config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Analysis".bold().underline());
    match full_info.config.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }
    println!("{}: {}", "Top words".dimmed(), full_info.config.top_words);
    println!(
        "{}: {}",
        "Stopwords".dimmed(),
        full_info.config.stop_word_count
    );
    if let Some(ref extra) = full_info.config.extra_stop_words {
        println!("{}: {}", "Extra stopwords".dimmed(), extra.join(", "));
    }

    Ok(())
}
