//! CLI for romlink.

mod commands;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use romlink_core::config::{self, RunConfig};
use std::path::PathBuf;

use commands::{run_csv, run_link, run_show};

/// Top-level CLI for romlink.
#[derive(Debug, Parser)]
#[command(name = "romlink")]
#[command(about = "romlink: normalized ROM filenames as a CSV catalog or a symlink directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Source/destination overrides shared by `csv` and `link`.
#[derive(Debug, Args)]
pub struct DirArgs {
    /// Directory to scan for ROM files (default: config, then current directory).
    #[arg(short = 's', long, value_name = "DIR")]
    pub src_dir: Option<PathBuf>,

    /// Directory to write into (default: config, then current directory).
    #[arg(short = 'd', long, value_name = "DIR")]
    pub dest_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Write a CSV catalog (title, filename, size) of all ROMs.
    Csv {
        #[command(flatten)]
        dirs: DirArgs,

        /// Catalog filename inside the destination directory (default: games.csv).
        #[arg(short = 'o', long, value_name = "FILE")]
        output_file: Option<String>,
    },

    /// Create symlinks named by normalized filenames.
    #[command(visible_alias = "ln")]
    Link {
        #[command(flatten)]
        dirs: DirArgs,
    },

    /// Print the normalized name, title and region for filenames.
    Show {
        /// Filenames or paths to ROM files.
        #[arg(required = true)]
        names: Vec<String>,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
                report_unrecognized();
                return Ok(());
            }
            Err(e) => e.exit(),
        };

        let Some(command) = cli.command else {
            report_unrecognized();
            return Ok(());
        };

        match command {
            CliCommand::Csv { dirs, output_file } => run_csv(&resolve(dirs, output_file)?)?,
            CliCommand::Link { dirs } => run_link(&resolve(dirs, None)?)?,
            CliCommand::Show { names } => run_show(&names)?,
        }

        Ok(())
    }
}

/// Merges CLI flags with the config file; the working directory is read here and nowhere else.
fn resolve(dirs: DirArgs, output_file: Option<String>) -> Result<RunConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let cwd = std::env::current_dir()?;
    let run = RunConfig::resolve(&cfg, &cwd, dirs.src_dir, dirs.dest_dir, output_file);
    tracing::debug!("run config: {:?}", run);
    Ok(run)
}

fn report_unrecognized() {
    tracing::warn!("unrecognized command");
    println!("Unrecognized command");
    println!("{}", Cli::command().render_usage());
}

#[cfg(test)]
mod tests;
