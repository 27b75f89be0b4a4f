//! Configuration file support.
//!
//! An optional TOML file supplies the defaults that flags override at
//! runtime. A missing file is not an error; built-in defaults apply.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults};
