use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use pathlib::settings::Settings;
use pathlib::{logging, PathError, PathHandle, WalkControl};

/// Inspect, search and rearrange filesystem paths.
#[derive(Parser, Debug)]
#[command(name = "pathlib", version)]
struct Cli {
    /// Settings file (defaults to the per-user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the metadata snapshot of a path.
    Info {
        path: String,
        #[arg(long)]
        json: bool,
    },
    /// List the immediate children of a directory.
    Ls { dir: String },
    /// Print every path below a directory, parents first.
    Walk {
        dir: String,
        /// Stop after this many entries.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print every path below a directory matching a regular expression.
    Find {
        dir: String,
        pattern: String,
        /// Stop at the first match.
        #[arg(long)]
        first: bool,
    },
    /// Create a directory and its missing parents.
    Mkdir {
        path: String,
        /// Octal permission bits, e.g. 755.
        #[arg(long, value_parser = parse_octal)]
        mode: Option<u32>,
    },
    /// Give a path a new final component, keeping its directory.
    Rename {
        path: String,
        name: String,
        #[arg(long)]
        force: bool,
    },
    /// Move a file or directory to a new full path.
    Mv {
        src: String,
        dst: String,
        #[arg(long)]
        force: bool,
    },
    /// Delete a file or a whole directory tree.
    Rm { path: String },
}

fn parse_octal(s: &str) -> Result<u32, String> {
    u32::from_str_radix(s.trim_start_matches("0o"), 8).map_err(|e| format!("`{s}`: {e}"))
}

fn handle(input: &str) -> Result<PathHandle> {
    PathHandle::expand_home(input).ok_or_else(|| anyhow!("cannot expand `{input}`: home directory unknown"))
}

fn run(cli: Cli, settings: &Settings) -> Result<()> {
    match cli.command {
        Command::Info { path, json } => {
            let h = handle(&path)?;
            let info = h.info().with_context(|| format!("cannot stat {h}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(info)?);
            } else {
                let kind = if info.is_dir { "directory" } else if info.is_regular { "file" } else { "other" };
                let modified = info
                    .modified_local()
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("{h}\t{kind}\t{}\t{:o}\t{modified}", info.len, info.mode & 0o7777);
            }
        }
        Command::Ls { dir } => {
            let h = handle(&dir)?;
            for child in h.list_dir().with_context(|| format!("cannot list {h}"))? {
                println!("{child}");
            }
        }
        Command::Walk { dir, limit } => {
            let h = handle(&dir)?;
            let mut printed = 0usize;
            h.walk(|entry, err| {
                if let Some(e) = err {
                    tracing::warn!("{entry}: {e}");
                }
                println!("{entry}");
                printed += 1;
                Ok::<_, PathError>(match limit {
                    Some(n) if printed >= n => WalkControl::Stop,
                    _ => WalkControl::Continue,
                })
            })
            .with_context(|| format!("cannot walk {h}"))?;
        }
        Command::Find { dir, pattern, first } => {
            let h = handle(&dir)?;
            h.find_files(&pattern, |entry, _| {
                println!("{entry}");
                Ok::<_, PathError>(if first { WalkControl::Stop } else { WalkControl::Continue })
            })
            .with_context(|| format!("cannot search {h}"))?;
        }
        Command::Mkdir { path, mode } => {
            let h = handle(&path)?;
            h.make_dir_all(mode.unwrap_or(settings.dir_mode))
                .with_context(|| format!("cannot create {h}"))?;
        }
        Command::Rename { path, name, force } => {
            let h = handle(&path)?;
            let renamed = h.rename(&name, force).with_context(|| format!("cannot rename {h}"))?;
            println!("{renamed}");
        }
        Command::Mv { src, dst, force } => {
            let h = handle(&src)?;
            let dest = handle(&dst)?;
            let moved = h
                .move_to(dest.into_path_buf(), force)
                .with_context(|| format!("cannot move {h}"))?;
            println!("{moved}");
        }
        Command::Rm { path } => {
            let h = handle(&path)?;
            h.delete().with_context(|| format!("cannot delete {h}"))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let filter = logging::filter_for(cli.verbose, &settings.log_filter);
    let _guard = match logging::init(&filter, cli.log_file.as_deref()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: cannot set up logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
