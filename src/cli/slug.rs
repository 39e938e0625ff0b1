//! `sofra slug`: print slugs, one per line.

use std::io::{Write, stdout};

use anyhow::Result;

use crate::config::{SlugMode, cfg};
use crate::slug::slugify_with;

pub fn print_slugs(text: &[String]) -> Result<()> {
    let mut out = stdout().lock();
    write_slugs(&mut out, text, cfg().slug.transliterate)
}

fn write_slugs(out: &mut impl Write, text: &[String], mode: SlugMode) -> Result<()> {
    for input in text {
        writeln!(out, "{}", slugify_with(input, mode))?;
    }
    Ok(())
}
