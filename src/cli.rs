use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{config::Config, dist, styles};

#[derive(Parser)]
#[command(author, version, about = "Build pipeline of the Air Alert web client")]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile the SCSS stylesheet into prefixed, minified CSS
    Styles {
        /// Output directory (defaults to the dist directory)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Assemble the host page, the wasm bundles and the stylesheet
    Dist {
        /// Keep existing files in the dist directory
        #[arg(long)]
        no_clean: bool,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    match args.command {
        Command::Styles { out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| cfg.dist.dir.clone());
            let written = styles::write(&cfg.styles, &out_dir)?;
            log::info!("Wrote {}", written.file.display());
        }
        Command::Dist { no_clean } => {
            if no_clean {
                cfg.dist.clean = false;
            }
            let written = dist::assemble(&cfg)?;
            log::info!(
                "Assembled {} files in {}",
                written.len(),
                cfg.dist.dir.display()
            );
        }
    }
    Ok(())
}
