//! Sofra - content model, slug and media tooling for a recipe CMS.

mod cli;
mod collections;
mod config;
mod dataset;
mod document;
mod locale;
mod logger;
mod media;
mod schema;
mod slug;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, MediaCommand};
use config::{CmsConfig, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(CmsConfig::load(&cli)?);

    match &cli.command {
        Commands::Slug { text } => cli::slug::print_slugs(text),
        Commands::Collections => cli::schema::list_collections(),
        Commands::Schema { collection, pretty } => {
            cli::schema::print_schema(collection.as_deref(), *pretty)
        }
        Commands::Validate { args } => cli::validate::validate_document(args, &config),
        Commands::Check { dir, warn_only } => cli::check::check_dataset(dir, *warn_only, &config),
        Commands::Media(MediaCommand::Check { file, ratio }) => {
            cli::media::check_image(file, ratio, &config)
        }
        Commands::Media(MediaCommand::Ingest {
            file,
            ratio,
            alt,
            out,
        }) => cli::media::ingest_file(file, ratio, alt.as_deref(), out.as_ref(), &config),
    }
}
