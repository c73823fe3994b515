//! Typed site configuration for a static blog.
//!
//! Loads `site.toml` (or `site.json`), fills in defaults, validates it and
//! hands back an immutable [`SiteConfig`] for the site generator to render
//! with.
//!
//! ```no_run
//! use sitecfg::{SiteConfig, init_config};
//!
//! let config = SiteConfig::discover(std::path::Path::new("."))?;
//! let config = init_config(config)?;
//! for item in &config.theme_config.nav {
//!     println!("{}", item.text());
//! }
//! # Ok::<(), sitecfg::ConfigError>(())
//! ```

pub mod config;
pub mod logger;

pub use config::{
    CONFIG_FILE_NAMES, ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigFormat, FieldPath,
    HeadTag, LastUpdated, LinkKind, LocaleConfig, Locales, MarkdownConfig, NavDropdown, NavItem,
    NavLink, Plugins, Sidebar, SidebarMode, SiteConfig, ThemeConfig, cfg, classify_link,
    init_config,
};
