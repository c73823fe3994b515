//! `[themeConfig]` configuration.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! sidebar = "auto"
//! lastUpdated = "Last updated"
//!
//! [[themeConfig.nav]]
//! text = "Home"
//! link = "/"
//! ```

use serde::{Deserialize, Serialize};

use super::nav::{NavItem, validate_nav};
use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;

/// Label used when `lastUpdated = true`.
pub const DEFAULT_LAST_UPDATED_LABEL: &str = "Last Updated";

/// Options passed through to the theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Navigation bar entries, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar mode.
    pub sidebar: Sidebar,

    /// Last-updated label, or `false` to hide it.
    pub last_updated: LastUpdated,
}

config_fields!(ThemeConfig => ThemeFields {
    nav: "themeConfig.nav",
    last_updated: "themeConfig.lastUpdated",
});

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_nav(&self.nav, &Self::FIELDS.nav, diag);

        if let LastUpdated::Label(label) = &self.last_updated
            && label.trim().is_empty()
        {
            diag.warn(
                Self::FIELDS.last_updated,
                "label is empty, set `lastUpdated = false` to hide it",
            );
        }
    }
}

/// `sidebar = true | false | "auto"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sidebar {
    Toggle(bool),
    Mode(SidebarMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarMode {
    /// Build the sidebar from the current page's headers.
    Auto,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::Toggle(false)
    }
}

impl Sidebar {
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Toggle(enabled) => *enabled,
            Self::Mode(_) => true,
        }
    }

    #[inline]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Mode(SidebarMode::Auto))
    }
}

/// `lastUpdated = false | true | "label"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LastUpdated {
    Toggle(bool),
    Label(String),
}

impl Default for LastUpdated {
    fn default() -> Self {
        Self::Toggle(false)
    }
}

impl LastUpdated {
    /// Label to render, `None` when disabled.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Toggle(false) => None,
            Self::Toggle(true) => Some(DEFAULT_LAST_UPDATED_LABEL),
            Self::Label(label) => Some(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let theme = &config.theme_config;
        assert_eq!(theme.sidebar, Sidebar::Toggle(false));
        assert!(!theme.sidebar.is_enabled());
        assert_eq!(theme.last_updated.label(), None);
    }

    #[test]
    fn test_sidebar_auto() {
        let config = test_parse_config("[themeConfig]\nsidebar = \"auto\"");
        assert!(config.theme_config.sidebar.is_auto());
        assert!(config.theme_config.sidebar.is_enabled());
    }

    #[test]
    fn test_sidebar_bool() {
        let config = test_parse_config("[themeConfig]\nsidebar = true");
        assert_eq!(config.theme_config.sidebar, Sidebar::Toggle(true));
        assert!(!config.theme_config.sidebar.is_auto());
    }

    #[test]
    fn test_sidebar_unknown_mode() {
        let toml = "[themeConfig]\nsidebar = \"left\"";
        assert!(SiteConfig::parse(toml, Default::default()).is_err());
    }

    #[test]
    fn test_last_updated() {
        let config = test_parse_config("[themeConfig]\nlastUpdated = \"最后一次更新于\"");
        assert_eq!(config.theme_config.last_updated.label(), Some("最后一次更新于"));

        let config = test_parse_config("[themeConfig]\nlastUpdated = true");
        assert_eq!(
            config.theme_config.last_updated.label(),
            Some(DEFAULT_LAST_UPDATED_LABEL)
        );

        let config = test_parse_config("[themeConfig]\nlastUpdated = false");
        assert_eq!(config.theme_config.last_updated, LastUpdated::Toggle(false));
    }

    #[test]
    fn test_empty_label_warns() {
        let theme = ThemeConfig {
            last_updated: LastUpdated::Label("  ".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
