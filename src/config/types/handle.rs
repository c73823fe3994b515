//! Process-wide config handle.
//!
//! The config is loaded once at startup and shared read-only afterwards,
//! so a `OnceLock` is enough: no reload, no swap.

use super::ConfigError;
use crate::config::SiteConfig;
use std::sync::{Arc, OnceLock};

/// Global config storage.
static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// Install the loaded config for the rest of the process.
///
/// Fails with [`ConfigError::AlreadyInitialized`] on a second call.
pub fn init_config(config: SiteConfig) -> Result<Arc<SiteConfig>, ConfigError> {
    let arc = Arc::new(config);
    CONFIG
        .set(Arc::clone(&arc))
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(arc)
}

/// The installed config, or `None` before [`init_config`].
#[inline]
pub fn cfg() -> Option<Arc<SiteConfig>> {
    CONFIG.get().cloned()
}
