//! `[markdownOptions]` configuration (alias `[markdown]`).

use serde::{Deserialize, Serialize};

/// Options handed to the external markdown renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkdownConfig {
    /// Render line numbers in fenced code blocks.
    pub line_numbers: bool,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.markdown_options.line_numbers);
    }

    #[test]
    fn test_line_numbers() {
        let config = test_parse_config("[markdownOptions]\nlineNumbers = true");
        assert!(config.markdown_options.line_numbers);
    }

    #[test]
    fn test_markdown_alias() {
        let config = test_parse_config("[markdown]\nlineNumbers = true");
        assert!(config.markdown_options.line_numbers);
    }
}
