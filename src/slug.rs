//! URL slug generation.
//!
//! `slugify` turns a human-entered name or title into the identifier used in
//! public URLs:
//!
//! 1. lowercase (Unicode rules, so `İ` becomes `i` + U+0307)
//! 2. map `ğ ü ş ı ö ç` to `g u s i o c`
//! 3. drop everything outside `[a-z0-9]`, whitespace and `-`
//! 4. collapse each whitespace run into a single `-`
//! 5. trim leading and trailing `-`
//!
//! The output only contains `[a-z0-9-]` and never starts or ends with `-`,
//! so `slugify(slugify(s)) == slugify(s)`.

use crate::config::SlugMode;

/// Slugify with the default Turkish transliteration.
pub fn slugify(input: &str) -> String {
    slugify_with(input, SlugMode::Turkish)
}

/// Slugify with an explicit transliteration mode.
pub fn slugify_with(input: &str, mode: SlugMode) -> String {
    match mode {
        SlugMode::Turkish => collapse(&input.to_lowercase()),
        SlugMode::Unicode => collapse(&deunicode::deunicode(input).to_lowercase()),
    }
}

/// Normalize an explicitly supplied slug: lowercase and trim surrounding
/// whitespace, leaving everything else as entered.
pub fn normalize_explicit(slug: &str) -> String {
    slug.to_lowercase().trim().to_string()
}

#[inline]
const fn transliterate(c: char) -> char {
    match c {
        'ğ' => 'g',
        'ü' => 'u',
        'ş' => 's',
        'ı' => 'i',
        'ö' => 'o',
        'ç' => 'c',
        c => c,
    }
}

/// Steps 2-5 over already-lowercased text.
fn collapse(lower: &str) -> String {
    let mut out = String::with_capacity(lower.len());
    let mut pending_separator = false;

    for c in lower.chars().map(transliterate) {
        if c.is_whitespace() {
            pending_separator = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            if pending_separator {
                out.push('-');
                pending_separator = false;
            }
            out.push(c);
        }
        // anything else is dropped without ending a whitespace run
    }

    out.trim_matches('-').to_string()
}
