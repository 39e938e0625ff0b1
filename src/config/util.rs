//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`.
/// Returns the absolute path to the config file if found.
///
/// ```text
/// /home/user/recipes/dataset/recipes/  ← cwd
/// /home/user/recipes/sofra.toml        ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Expand `~` and resolve relative paths against the project root.
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let expanded = PathBuf::from(shellexpand::tilde(&raw).as_ref());
    if expanded.is_absolute() {
        expanded
    } else {
        root.join(expanded)
    }
}

// ============================================================================
// tests
// ============================================================================
