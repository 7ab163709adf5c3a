//! Build helpers for textclean: man pages and shell completions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for textclean")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Only generate for this shell
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { out_dir, shell } => completions(&out_dir, shell),
    }
}

fn man(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = textclean::command();
    clap_mangen::generate_to(cmd, out_dir)?;
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn completions(out_dir: &Path, shell: Option<Shell>) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let shells = match shell {
        Some(shell) => vec![shell],
        None => vec![
            Shell::Bash,
            Shell::Elvish,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Zsh,
        ],
    };

    let mut cmd = textclean::command();
    let bin_name = cmd.get_name().to_string();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, &bin_name, out_dir)?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
