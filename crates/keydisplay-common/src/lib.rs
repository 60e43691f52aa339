pub mod errors;
pub mod mode;

pub use errors::{ConfigError, FormatError};
pub use mode::EscapeMode;
