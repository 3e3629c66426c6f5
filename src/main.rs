use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sonic_sort::sort::{sort_with, Artist, MediaEntry, MediaType};
use sonic_sort::{Comparators, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sonic-sort", about = "Sort media library names and entries")]
struct Cli {
    /// Path to config.yml (default: ~/.config/sonic-sort/config.yml)
    #[arg(long, global = true, env = "SONIC_SORT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort newline-separated names
    Names {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
        /// Descending order
        #[arg(long)]
        reverse: bool,
    },
    /// Sort a JSON array of media entries and print their paths
    Entries {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
        /// Artist of the common parent directory
        #[arg(long)]
        parent_artist: Option<String>,
        /// Ignore the album year setting
        #[arg(long)]
        by_alpha: bool,
    },
    /// Sort a JSON array of artists by reading-or-name
    Artists {
        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}", e);
        std::process::exit(1);
    });

    init_tracing(&config);

    if let Err(e) = run(cli.command, &config) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter().into());

    // Logs go to stderr; stdout carries the sorted output
    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn run(command: Command, config: &Config) -> Result<()> {
    let comparators =
        Comparators::new(config.sort.clone()).context("Failed to build comparators")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Names { file, reverse } => {
            let input = read_input(file.as_deref())?;
            let mut names: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
            let order = comparators.string_order();
            names.sort_by(|a, b| {
                let ordering = order.compare(a, b);
                if reverse {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
            tracing::debug!("Sorted {} names", names.len());
            for name in names {
                writeln!(out, "{}", name)?;
            }
        }
        Command::Entries {
            file,
            parent_artist,
            by_alpha,
        } => {
            let input = read_input(file.as_deref())?;
            let mut entries: Vec<MediaEntry> =
                serde_json::from_str(&input).context("Failed to parse media entries")?;

            let comparator = if by_alpha {
                comparators.media_file_order_by_alpha()
            } else {
                let parent = parent_artist
                    .map(|artist| MediaEntry::new("", MediaType::Directory).with_artist(artist));
                comparators.media_file_order(parent.as_ref())
            };
            sort_with(&mut entries, &comparator, true);

            tracing::debug!("Sorted {} entries", entries.len());
            for entry in &entries {
                writeln!(out, "{}", entry.path)?;
            }
        }
        Command::Artists { file } => {
            let input = read_input(file.as_deref())?;
            let mut artists: Vec<Artist> =
                serde_json::from_str(&input).context("Failed to parse artists")?;
            sort_with(&mut artists, &comparators.artist_order(), true);
            for artist in &artists {
                writeln!(out, "{}", artist.name)?;
            }
        }
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
