//! Pushing the palette document to a remote after a local rewrite.

use ramp_common::StoreError;
use std::path::Path;
use std::process::Command;
use tracing::info;

/// A remote copy of the palette document.
pub trait RemoteSync {
    /// Whether a remote exists at all. When it does not, local writes
    /// commit immediately.
    fn is_configured(&self) -> bool {
        true
    }

    /// Publish the document at `document`.
    fn push(&self, document: &Path) -> Result<(), StoreError>;
}

/// No remote configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemote;

impl RemoteSync for NoRemote {
    fn is_configured(&self) -> bool {
        false
    }

    fn push(&self, _document: &Path) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Runs an external command with the document path appended as the last
/// argument. A non-zero exit status is a failed push.
#[derive(Debug, Clone)]
pub struct CommandSync {
    program: String,
    args: Vec<String>,
}

impl CommandSync {
    /// Build from an argv list; `None` when the list is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl RemoteSync for CommandSync {
    fn push(&self, document: &Path) -> Result<(), StoreError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(document)
            .output()
            .map_err(|e| StoreError::Sync(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StoreError::Sync(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        info!(program = %self.program, document = %document.display(), "pushed palette document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_remote_is_unconfigured_and_succeeds() {
        assert!(!NoRemote.is_configured());
        assert!(NoRemote.push(Path::new("palettes.json")).is_ok());
    }

    #[test]
    fn command_sync_needs_a_program() {
        assert!(CommandSync::from_argv(&[]).is_none());
        let sync = CommandSync::from_argv(&["git".into(), "add".into()]).unwrap();
        assert!(sync.is_configured());
    }

    #[test]
    fn missing_program_is_a_sync_error() {
        let sync = CommandSync::from_argv(&["definitely-not-a-real-program-ramp".into()]).unwrap();
        let err = sync.push(Path::new("palettes.json")).unwrap_err();
        assert!(matches!(err, StoreError::Sync(_)));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_decides_success() {
        let ok = CommandSync::from_argv(&["true".into()]).unwrap();
        assert!(ok.push(Path::new("palettes.json")).is_ok());

        let fail = CommandSync::from_argv(&["false".into()]).unwrap();
        assert!(matches!(
            fail.push(Path::new("palettes.json")),
            Err(StoreError::Sync(_))
        ));
    }
}
