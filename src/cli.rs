//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Ember project layout resolver
#[derive(Parser, Debug)]
#[command(name = "embernav")]
#[command(about = "Resolve Ember project layouts: location labels, asset URLs, symbol search")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Project manifest declaring module roots
    #[arg(short, long, global = true, default_value = "embernav.toml", value_name = "FILE")]
    pub project: PathBuf,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for embernav
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the owning root and location label for a file
    #[command(visible_alias = "c")]
    Classify(ClassifyArgs),

    /// Resolve a dev-server asset URL to its source file
    UrlToFile(UrlToFileArgs),

    /// Compute the dev-server URLs for a source file
    FileToUrls(FileToUrlsArgs),

    /// Look up a display name in the symbol index
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// List every display name known to the symbol index
    Names(NamesArgs),
}

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// File to classify
    #[arg(value_name = "FILE")]
    pub file: String,
}

/// Arguments for the url-to-file command
#[derive(Args, Debug)]
pub struct UrlToFileArgs {
    /// Served URL, e.g. http://localhost:4200/assets/my-app/components/foo.js
    #[arg(value_name = "URL")]
    pub url: String,
}

/// Arguments for the file-to-urls command
#[derive(Args, Debug)]
pub struct FileToUrlsArgs {
    /// Source file to map
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Dev server authority, e.g. localhost:4200
    #[arg(long, value_name = "HOST:PORT")]
    pub authority: String,
}

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Display name to look up
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Symbol index fixture (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub index: PathBuf,

    /// Include files outside the project's roots
    #[arg(long)]
    pub include_non_project: bool,
}

/// Arguments for the names command
#[derive(Args, Debug)]
pub struct NamesArgs {
    /// Symbol index fixture (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub index: PathBuf,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}
