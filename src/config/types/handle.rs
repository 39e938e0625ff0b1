//! Global config handle.
//!
//! `main` publishes the loaded config once. Commands that take no config
//! argument, like `sofra slug`, read it back through `cfg()`.

use crate::config::CmsConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<CmsConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(CmsConfig::default()));

#[inline]
pub fn cfg() -> Arc<CmsConfig> {
    CONFIG.load_full()
}

#[inline]
pub fn init_config(config: CmsConfig) -> Arc<CmsConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_init_replaces_global() {
        let mut config = CmsConfig::default();
        config.locale = Locale::En;
        let stored = init_config(config);
        assert_eq!(stored.locale, Locale::En);
        assert_eq!(cfg().locale, Locale::En);
        init_config(CmsConfig::default());
    }
}
