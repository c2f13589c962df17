use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the palette document on disk.
///
/// `Syntax` and `Shape` are the two data-format failures: the first means the
/// text is not JSON at all, the second means it is JSON but not an array of
/// palette records. A missing file is not an error (it loads as empty).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{path}: invalid JSON at line {line}, column {column}: {message}\n    {context}")]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
        /// Text of the offending line.
        context: String,
        message: String,
    },

    #[error("{path}: unexpected document shape: {message}")]
    Shape { path: PathBuf, message: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize palettes: {0}")]
    Serialize(String),

    #[error("remote sync failed: {0}")]
    Sync(String),
}

impl StoreError {
    /// True for malformed-document failures (as opposed to I/O or sync).
    pub fn is_data_format(&self) -> bool {
        matches!(self, StoreError::Syntax { .. } | StoreError::Shape { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to decode raster {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("raster dimension mismatch: expected {expected} samples, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("raster has zero width or height")]
    Empty,

    #[error("raster of {width}x{height} samples is too large")]
    TooLarge { width: usize, height: usize },

    #[error("raster contains no valid samples (all no-data)")]
    AllNoData,

    #[error("preview needs at least 2 colors, ramp has {0}")]
    TooFewColors(usize),

    #[error("failed to write preview {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("preview.max_dimension".into());
        assert_eq!(
            err.to_string(),
            "config validation error: preview.max_dimension"
        );
    }

    #[test]
    fn syntax_error_display_carries_position_and_context() {
        let err = StoreError::Syntax {
            path: PathBuf::from("palettes.json"),
            line: 3,
            column: 14,
            context: r##"  "colors": ["#fff",]"##.into(),
            message: "trailing comma".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("column 14"));
        assert!(msg.contains(r##""colors": ["#fff",]"##));
        assert!(err.is_data_format());
    }

    #[test]
    fn io_errors_are_not_data_format() {
        let err = StoreError::Write {
            path: PathBuf::from("/ro/palettes.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(!err.is_data_format());
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn studio_error_from_store() {
        let store_err = StoreError::Sync("remote rejected push".into());
        let err: StudioError = store_err.into();
        assert!(matches!(err, StudioError::Store(_)));
        assert!(err.to_string().contains("remote rejected push"));
    }

    #[test]
    fn studio_error_from_render() {
        let err: StudioError = RenderError::TooFewColors(1).into();
        assert!(matches!(err, StudioError::Render(_)));
        assert_eq!(err.to_string(), "preview needs at least 2 colors, ramp has 1");
    }

    #[test]
    fn studio_error_other() {
        let err = StudioError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
