//! reflectgen: generate reflection registration code from C++ headers.
//!
//! # Usage
//!
//! ```bash
//! # Scan a source tree, write gen/auto_generated.cpp
//! reflectgen gen engine/runtime/include
//!
//! # Several roots and an explicit output file
//! reflectgen -r engine/runtime/include -r game/include -o gen/reflection.cpp
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use reflectgen::{Generator, GeneratorConfig};

#[derive(Debug, Parser)]
#[command(name = "reflectgen", version, about = "Generate C++ reflection registration code")]
struct Cli {
    /// Directory receiving auto_generated.cpp
    output_dir: Option<PathBuf>,

    /// Directory scanned for headers
    input_dir: Option<PathBuf>,

    /// Additional header root (repeatable)
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    roots: Vec<PathBuf>,

    /// Output file, overrides OUTPUT_DIR
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,

    /// Log the run summary (info level).
    #[arg(short, long)]
    verbose: bool,

    /// Log every header and class (debug level).
    #[arg(short, long)]
    debug: bool,

    /// Log errors only.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }

    fn into_config(self) -> Result<GeneratorConfig> {
        let mut builder = GeneratorConfig::builder()
            .roots(self.input_dir)
            .roots(self.roots);
        if let Some(dir) = self.output_dir {
            builder = builder.output_dir(dir);
        }
        if let Some(file) = self.out {
            builder = builder.output(file);
        }
        builder
            .build()
            .context("usage: reflectgen [OUTPUT_DIR] [INPUT_DIR] [-r DIR]... [-o FILE]")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let config = cli.into_config()?;
    let generator = Generator::new(config)?;
    let summary = generator.run()?;
    if summary.registered == 0 {
        tracing::warn!("no registered classes found");
    }
    Ok(())
}
