//! Config field paths used in diagnostics.

/// Dotted path of a `sofra.toml` key, e.g. `media.tolerance`.
///
/// Sections expose their paths as associated constants:
///
/// ```ignore
/// diag.error(MediaConfig::OUTPUT, "cannot be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Table the key lives in; empty for top-level keys like `locale`.
    pub fn section(self) -> &'static str {
        self.0.split_once('.').map_or("", |(section, _)| section)
    }

    /// Key inside its section.
    pub fn key(self) -> &'static str {
        self.0.split_once('.').map_or(self.0, |(_, key)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_and_key() {
        let path = FieldPath::new("media.tolerance");
        assert_eq!(path.section(), "media");
        assert_eq!(path.key(), "tolerance");

        let top = FieldPath::new("locale");
        assert_eq!(top.section(), "");
        assert_eq!(top.key(), "locale");
    }
}
