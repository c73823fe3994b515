//! Site configuration management for `site.toml` / `site.json`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # head = [[tag, {attrs}]]
//! │   ├── locale     # [locales]
//! │   ├── markdown   # [markdownOptions]
//! │   ├── nav        # [[themeConfig.nav]]
//! │   ├── plugins    # plugins = [...]
//! │   └── theme      # [themeConfig]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   ├── format     # ConfigFormat
//! │   └── handle     # Process-wide config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! base = "/"
//! title = "Young sun"
//! description = "Youngsun's Blog"
//! dest = "./dist"
//! plugins = ["@vuepress/back-to-top"]
//! head = [["link", { rel = "icon", href = "/favicon.ico" }]]
//!
//! [markdownOptions]
//! lineNumbers = true
//!
//! [locales."/"]
//! lang = "zh-CN"
//!
//! [themeConfig]
//! sidebar = "auto"
//! lastUpdated = "Last updated"
//!
//! [[themeConfig.nav]]
//! text = "Home"
//! link = "/"
//! ```

pub mod section;
pub mod types;
mod util;

pub use util::{LinkKind, classify_link};

// Re-export from section/
pub use section::{
    DEFAULT_LAST_UPDATED_LABEL, HeadTag, LastUpdated, LocaleConfig, Locales, MarkdownConfig,
    NavDropdown, NavItem, NavLink, Plugins, Sidebar, SidebarMode, ThemeConfig,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigFormat, FieldPath, cfg, init_config,
};

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use types::config_fields;
use util::{find_config_file, join_base};

/// File names tried, in order, by [`SiteConfig::discover`].
pub const CONFIG_FILE_NAMES: &[&str] = &["site.toml", "site.json"];

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `site.toml`.
///
/// Every field is optional in the definition; omitted fields take the
/// values of [`SiteConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Root URL path the site is served under; starts and ends with `/`.
    pub base: String,

    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Theme identifier, empty for the framework's default theme.
    pub theme: String,

    /// Output directory for generated files.
    #[serde(alias = "dest")]
    pub destination: PathBuf,

    /// Only target evergreen browsers.
    pub evergreen: bool,

    /// Tags injected into every page's `<head>`.
    pub head: Vec<HeadTag>,

    /// Plugin identifiers, activated in order.
    pub plugins: Plugins,

    /// Markdown renderer options.
    #[serde(alias = "markdown")]
    pub markdown_options: MarkdownConfig,

    /// Path prefix → language.
    pub locales: Locales,

    /// Options passed through to the theme.
    pub theme_config: ThemeConfig,
}

config_fields!(SiteConfig => SiteFields {
    base: "base",
    head: "head",
    destination: "destination",
    locales: "locales",
    plugins: "plugins",
});

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base: "/".into(),
            title: String::new(),
            description: String::new(),
            theme: String::new(),
            destination: PathBuf::from("dist"),
            evergreen: false,
            head: Vec::new(),
            plugins: Plugins::default(),
            markdown_options: MarkdownConfig::default(),
            locales: Locales::default(),
            theme_config: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load and validate a config file.
    ///
    /// The format is picked from the file extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        crate::debug!("config"; "loading {} as {}", path.display(), format);
        Self::load_str_from(&content, format, &path.display().to_string())
    }

    /// Search upward from `start` for a config file, then [`load`](Self::load) it.
    pub fn discover(start: &Path) -> Result<Self, ConfigError> {
        let path = find_config_file(start, CONFIG_FILE_NAMES)
            .ok_or_else(|| ConfigError::NotFound(start.to_path_buf()))?;
        Self::load(&path)
    }

    /// Load and validate an in-memory definition.
    pub fn load_str(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        Self::load_str_from(content, format, "config")
    }

    fn load_str_from(content: &str, format: ConfigFormat, origin: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content, format)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, origin);
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse a definition and apply defaults, without validating.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        Self::parse_with_ignored(content, format).map(|(config, _)| config)
    }

    /// Parse content, collecting any unknown fields.
    fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let config: Self = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                    ignored.push(path.to_string());
                })?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                    ignored.push(path.to_string());
                })?;
                deserializer.end()?;
                config
            }
        };
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], origin: &str) {
        crate::log!("warning"; "unknown fields in {}, ignoring:", origin);
        for field in fields {
            crate::log!("warning"; "- {}", field);
        }
    }

    /// Serialize back to a definition that loads to an equal value.
    pub fn to_string_as(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
        }
    }

    /// Site URL of a page path, with `base` prepended.
    pub fn base_url_for(&self, path: &str) -> String {
        join_base(&self.base, path)
    }

    /// Title shown under `path`: the matching locale's override, if any.
    pub fn title_for(&self, path: &str) -> &str {
        self.locales
            .locale_for(path)
            .and_then(|locale| locale.title.as_deref())
            .unwrap_or(&self.title)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.validate_base(&mut diag);
        if self.destination.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.destination,
                "output directory is empty",
                "omit the field to use \"dist\"",
            );
        }

        section::validate_head(&self.head, &Self::FIELDS.head, &mut diag);
        self.locales.validate(&Self::FIELDS.locales, &mut diag);
        self.theme_config.validate(&mut diag);
        self.plugins.validate(&Self::FIELDS.plugins, &mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Validation)
    }

    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        if !self.base.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("{:?} must start with `/`", self.base),
                "use \"/\" or a sub-path like \"/blog/\"",
            );
        } else if !self.base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("{:?} must end with `/`", self.base),
                format!("use \"{}/\"", self.base),
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse TOML config with a minimal `base`/`title` prefix.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("base = \"/\"\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config, ConfigFormat::Toml).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
