//! TOML config file loading.

mod loader;
mod paths;


pub use loader::{load_default, load_from_path, load_from_str, load_or_default};
pub use paths::default_config_path;
