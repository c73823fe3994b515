//! `[[themeConfig.nav]]` navigation bar entries.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[themeConfig.nav]]
//! text = "Friends"
//! items = [{ text = "Alice", link = "https://alice.example" }]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::{LinkKind, classify_link};
use crate::config::{ConfigDiagnostics, FieldPath};

/// A navigation bar entry: a direct link or a one-level dropdown.
///
/// Dropdown items are [`NavLink`]s and both shapes deny unknown keys, so a
/// dropdown inside a dropdown, an entry with both `link` and `items`, or a
/// misspelled key does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    Link(NavLink),
    Dropdown(NavDropdown),
}

/// Leaf entry pointing at a page or an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

/// Titled group of leaf entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavDropdown {
    pub text: String,
    pub items: Vec<NavLink>,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Whether the link leaves the site.
    pub fn is_external(&self) -> bool {
        classify_link(&self.link) == LinkKind::External
    }

    fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.key("text"), "nav text is empty");
        }

        if self.link.is_empty() {
            diag.error_with_hint(
                field.key("link"),
                format!("link of {:?} is empty", self.text),
                "use a site path like \"/about/\" or a full URL",
            );
            return;
        }

        if classify_link(&self.link) == LinkKind::Invalid {
            diag.error_with_hint(
                field.key("link"),
                format!("{:?} is neither a site path nor an absolute URL", self.link),
                format!("use \"/{}\" for a page on this site", self.link.trim_start_matches("./")),
            );
        }
    }
}

impl NavItem {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link(NavLink::new(text, link))
    }

    pub fn dropdown(text: impl Into<String>, items: Vec<NavLink>) -> Self {
        Self::Dropdown(NavDropdown {
            text: text.into(),
            items,
        })
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => &link.text,
            Self::Dropdown(dropdown) => &dropdown.text,
        }
    }

    /// All leaf links under this entry, in display order.
    pub fn links(&self) -> &[NavLink] {
        match self {
            Self::Link(link) => std::slice::from_ref(link),
            Self::Dropdown(dropdown) => &dropdown.items,
        }
    }

    pub const fn is_dropdown(&self) -> bool {
        matches!(self, Self::Dropdown(_))
    }
}

/// Validate every nav entry: non-empty text, usable links, no empty dropdown.
pub fn validate_nav(items: &[NavItem], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, item) in items.iter().enumerate() {
        let path = field.index(i);
        match item {
            NavItem::Link(link) => link.validate(&path, diag),
            NavItem::Dropdown(dropdown) => {
                if dropdown.text.trim().is_empty() {
                    diag.error(path.key("text"), "nav text is empty");
                }
                if dropdown.items.is_empty() {
                    diag.error_with_hint(
                        path.key("items"),
                        format!("dropdown {:?} has no items", dropdown.text),
                        "add at least one { text, link } entry or remove the dropdown",
                    );
                }
                for (j, link) in dropdown.items.iter().enumerate() {
                    link.validate(&path.key("items").index(j), diag);
                }
            }
        }
    }
}
