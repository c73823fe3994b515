//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Field paths used in diagnostics              |
//! | `format` | TOML / JSON definition formats               |
//! | `handle` | Process-wide read-only config handle         |

mod error;
mod field;
mod format;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use format::ConfigFormat;
pub use handle::{cfg, init_config};

pub(crate) use field::config_fields;
