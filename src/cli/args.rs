//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Content model, slug and media tooling for the recipe CMS
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sofra.toml, searched upward from cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "sofra.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the URL slug of each text
    Slug {
        /// Names or titles to slugify
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },

    /// List collections with their admin group and field count
    #[command(visible_alias = "ls")]
    Collections,

    /// Print collection declarations as JSON
    Schema {
        /// Collection slug; all collections when omitted
        collection: Option<String>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Run one document through its collection pipeline
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Check a dataset directory of `<collection>/<id>.json` documents
    #[command(visible_alias = "c")]
    Check {
        /// Dataset root directory
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: PathBuf,

        /// Treat findings as warnings instead of errors
        #[arg(long, short = 'w')]
        warn_only: bool,
    },

    /// Media upload tools
    #[command(subcommand)]
    Media(MediaCommand),
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Collection slug
    pub collection: String,

    /// JSON document file, or `-` for stdin
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Treat the document as an update (no default values)
    #[arg(short, long)]
    pub update: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Image uploaded with the document, checked against `aspectRatio`
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub upload: Option<PathBuf>,
}

/// `media` subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum MediaCommand {
    /// Check an image against an aspect-ratio preset
    Check {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Preset: 16x9, 1x1 or 9x16
        #[arg(short, long)]
        ratio: String,
    },

    /// Validate, rename and resize an upload, then print its Media document
    Ingest {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Preset: 16x9, 1x1 or 9x16
        #[arg(short, long)]
        ratio: String,

        /// Alternative text
        #[arg(short, long)]
        alt: Option<String>,

        /// Output directory (default: `[media] output`)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        out: Option<PathBuf>,
    },
}
