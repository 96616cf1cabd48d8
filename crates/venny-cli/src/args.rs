//! Command-line argument definitions for the Venny CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each `--data` argument is one set; names, label contents,
//! output path, configuration file and logging verbosity are optional.

use clap::Parser;

use venny::Annotation;

/// Command-line arguments for the Venny diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Elements of one set, separated by whitespace. Quote items with
    /// spaces; `@path` reads one item per line from a file. Repeat for
    /// every set.
    #[arg(short, long, value_name = "DATA", required = true)]
    pub data: Vec<String>,

    /// Name of a set, in the order of the data arguments
    #[arg(short, long, value_name = "NAME")]
    pub name: Vec<String>,

    /// What region labels show: number, logic or percent
    #[arg(long, value_name = "FILL", value_delimiter = ',')]
    pub fill: Vec<Annotation>,

    /// Path to the output SVG file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Do not print the region summary
    #[arg(short = 'q', long)]
    pub no_show: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
