//! `head` tag injections.
//!
//! Each entry is a `[tag, { attr = value }]` pair:
//!
//! ```toml
//! head = [
//!     ["link", { rel = "icon", href = "/favicon.ico" }],
//!     ["meta", { name = "theme-color", content = "#3eaf7c" }],
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &["base", "link", "meta"];

/// One element to inject into every page's `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag(pub String, pub BTreeMap<String, String>);

impl HeadTag {
    pub fn new<K, V>(tag: impl Into<String>, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let attrs = attrs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self(tag.into(), attrs)
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.1
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.1.get(name).map(String::as_str)
    }

    /// Render as an HTML element, attributes in name order.
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.0);
        for (name, value) in &self.1 {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&escape_attr(value));
            html.push('"');
        }
        html.push('>');
        if !VOID_ELEMENTS.contains(&self.0.to_ascii_lowercase().as_str()) {
            html.push_str(&format!("</{}>", self.0));
        }
        html
    }

    fn is_valid_tag(tag: &str) -> bool {
        tag.starts_with(|c: char| c.is_ascii_alphabetic())
            && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

/// Validate every `head` entry has a usable tag name.
pub fn validate_head(tags: &[HeadTag], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, tag) in tags.iter().enumerate() {
        if tag.tag().is_empty() {
            diag.error_with_hint(
                field.index(i),
                "tag name is empty",
                "use a form like [\"link\", { rel = \"icon\", href = \"/favicon.ico\" }]",
            );
        } else if !HeadTag::is_valid_tag(tag.tag()) {
            diag.error(
                field.index(i),
                format!("`{}` is not a valid HTML tag name", tag.tag()),
            );
        }

        for name in tag.attrs().keys() {
            if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '=') {
                diag.error(
                    field.index(i),
                    format!("invalid attribute name {name:?} on <{}>", tag.tag()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.head.is_empty());
    }

    #[test]
    fn test_favicon() {
        let config = test_parse_config(
            r#"head = [["link", { rel = "icon", href = "/favicon.ico" }]]"#,
        );
        assert_eq!(config.head.len(), 1);
        let link = &config.head[0];
        assert_eq!(link.tag(), "link");
        assert_eq!(link.attr("rel"), Some("icon"));
        assert_eq!(link.attr("href"), Some("/favicon.ico"));
        assert_eq!(link.attr("type"), None);
    }

    #[test]
    fn test_order_preserved() {
        let config = test_parse_config(
            r##"head = [
    ["meta", { name = "theme-color", content = "#fff" }],
    ["link", { rel = "icon", href = "/favicon.ico" }],
    ["script", { src = "/app.js" }],
]"##,
        );
        let tags: Vec<_> = config.head.iter().map(HeadTag::tag).collect();
        assert_eq!(tags, ["meta", "link", "script"]);
    }

    #[test]
    fn test_to_html() {
        let link = HeadTag::new("link", [("rel", "icon"), ("href", "/favicon.ico")]);
        assert_eq!(link.to_html(), r#"<link href="/favicon.ico" rel="icon">"#);

        let script = HeadTag::new("script", [("src", "/a.js?x=1&y=\"2\"")]);
        assert_eq!(
            script.to_html(),
            r#"<script src="/a.js?x=1&amp;y=&quot;2&quot;"></script>"#
        );
    }

    #[test]
    fn test_validate() {
        let tags = vec![
            HeadTag::new("link", [("rel", "icon")]),
            HeadTag::new("", [("rel", "icon")]),
            HeadTag::new("my tag", Vec::<(String, String)>::new()),
            HeadTag::new("meta", [("bad name", "x")]),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_head(&tags, &FieldPath::new("head"), &mut diag);

        assert_eq!(diag.error_count(), 3);
        assert!(!diag.has_error_at("head[0]"));
        assert!(diag.has_error_at("head[1]"));
        assert!(diag.has_error_at("head[2]"));
        assert!(diag.has_error_at("head[3]"));
    }
}
