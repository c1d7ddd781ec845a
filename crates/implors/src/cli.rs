use std::path::PathBuf;

use clap::Parser;

use crate::color::Color;

/// List the implementor relationships a generated documentation tree announces
#[derive(Parser, Debug)]
#[command(name = "implors")]
#[command(
    about = "List the implementor relationships a generated documentation tree announces",
    long_about = None
)]
#[command(after_help = "\
EXAMPLES:
  implors target/doc                   All traits with registered implementors
  implors target/doc codec::Decode     Traits whose path contains the filter
  implors target/doc --module packline Only entries registered by packline
  implors target/doc --json            Machine-readable dump")]
pub struct Cli {
    /// Root of a generated documentation tree (the directory containing `implementors/`)
    pub docs_root: PathBuf,

    /// Only show traits whose path contains this substring
    pub trait_filter: Option<String>,

    /// Only show entries registered under this module key
    #[arg(long, value_name = "KEY")]
    pub module: Option<String>,

    /// Emit what the consumer observed as JSON instead of a listing
    #[arg(long)]
    pub json: bool,

    /// When to use colors in output.
    ///
    /// By default, `--color=auto` is active. Using just `--color` without an
    /// arg is equivalent to `--color=always`.
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        num_args = 0..=1,
        default_missing_value = "always"
    )]
    pub color: Color,
}
