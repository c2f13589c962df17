//! Configuration schema types for Ramp Studio.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod export;
mod logging;
mod preview;
mod store;
mod sync;

pub use export::*;
pub use logging::*;
pub use preview::*;
pub use store::*;
pub use sync::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RampStudioConfig {
    pub store: StoreConfig,
    pub export: ExportConfig,
    pub preview: PreviewConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}
