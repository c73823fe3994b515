//! `plugins` list.
//!
//! ```toml
//! plugins = ["@vuepress/back-to-top", "medium-zoom"]
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Plugin identifiers, activated by the external framework in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plugins(Vec<String>);

impl Plugins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|p| p == name)
    }

    /// Empty identifiers are errors. A repeated identifier is only warned
    /// about: what a double activation does is up to the framework.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for (i, name) in self.0.iter().enumerate() {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                diag.error_with_hint(
                    field.index(i),
                    "plugin name is empty",
                    "remove the entry or name a plugin like \"@vuepress/back-to-top\"",
                );
                continue;
            }
            if trimmed != name {
                diag.error(
                    field.index(i),
                    format!("plugin name {name:?} has surrounding whitespace"),
                );
            }
            if !seen.insert(trimmed) {
                diag.warn(field.index(i), format!("plugin {trimmed:?} is listed more than once"));
            }
        }
    }
}

impl Deref for Plugins {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Plugins {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
