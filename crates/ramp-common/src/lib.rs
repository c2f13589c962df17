pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, RenderError, StoreError, StudioError};
pub use types::Rgb;

pub type Result<T> = std::result::Result<T, StudioError>;
