//! Configuration section definitions.
//!
//! | Module     | Key               | Purpose                              |
//! |------------|-------------------|--------------------------------------|
//! | `head`     | `head`            | `<head>` tag injections              |
//! | `locale`   | `[locales]`       | Path prefix → language               |
//! | `markdown` | `[markdownOptions]` | Markdown renderer options          |
//! | `nav`      | `themeConfig.nav` | Navigation bar entries               |
//! | `plugins`  | `plugins`         | Plugin identifiers                   |
//! | `theme`    | `[themeConfig]`   | Sidebar, last-updated label, nav     |

mod head;
mod locale;
mod markdown;
mod nav;
mod plugins;
mod theme;

pub use head::{HeadTag, validate_head};
pub use locale::{LocaleConfig, Locales};
pub use markdown::MarkdownConfig;
pub use nav::{NavDropdown, NavItem, NavLink};
pub use plugins::Plugins;
pub use theme::{DEFAULT_LAST_UPDATED_LABEL, LastUpdated, Sidebar, SidebarMode, ThemeConfig};
