//! Remote sync configuration types.

use serde::{Deserialize, Serialize};

/// Optional command run after the palette document is rewritten by a delete.
///
/// The document path is appended as the final argument. When `command` is
/// absent no remote is configured and deletes commit locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub command: Option<Vec<String>>,
}
