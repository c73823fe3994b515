//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field as written in `site.toml`.
///
/// Static paths come from each section's `FIELDS` table; element and key
/// paths are derived with [`FieldPath::index`] and [`FieldPath::key`].
///
/// ```ignore
/// diag.error(ThemeConfig::FIELDS.nav.index(3), "link is empty");
/// // [themeConfig.nav[3]] → link is empty
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of the `index`-th element of a sequence field.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.0)))
    }

    /// Path of a map entry or child field. Keys that are not bare
    /// identifiers are quoted the way TOML would quote them.
    pub fn key(&self, key: &str) -> Self {
        let bare = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if bare {
            Self(Cow::Owned(format!("{}.{key}", self.0)))
        } else {
            Self(Cow::Owned(format!("{}.{key:?}", self.0)))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Declare the field paths of a config section as `Section::FIELDS`.
///
/// ```ignore
/// config_fields!(ThemeConfig => ThemeFields {
///     nav: "themeConfig.nav",
/// });
/// ```
macro_rules! config_fields {
    ($section:ty => $fields:ident { $($name:ident: $path:literal),* $(,)? }) => {
        #[derive(Debug, Clone)]
        pub struct $fields {
            $(pub $name: $crate::config::FieldPath,)*
        }

        impl $section {
            pub const FIELDS: $fields = $fields {
                $($name: $crate::config::FieldPath::new($path),)*
            };
        }
    };
}

pub(crate) use config_fields;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_key() {
        let nav = FieldPath::new("themeConfig.nav");
        assert_eq!(nav.index(2).as_str(), "themeConfig.nav[2]");
        assert_eq!(
            nav.index(0).key("items").index(1).as_str(),
            "themeConfig.nav[0].items[1]"
        );
    }

    #[test]
    fn test_quoted_key() {
        let locales = FieldPath::new("locales");
        assert_eq!(locales.key("zh-CN").as_str(), "locales.zh-CN");
        assert_eq!(locales.key("/").as_str(), "locales.\"/\"");
        assert_eq!(locales.key("").as_str(), "locales.\"\"");
    }
}
