use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;
use wal_palette::PaletteError;

use crate::models::BackendKind;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown backend: {0} (expected one of: colorthief, colorz, haishoku, schemer2, wal)")]
    UnknownBackend(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Backend {backend} failed")]
    Backend {
        backend: BackendKind,
        #[source]
        source: BackendError,
    },
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to load image {}: {}", .path.display(), .source)]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{0} wasn't found on your system")]
    ToolNotFound(String),

    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{backend} couldn't generate a suitable palette: got {found} colors, need {needed}")]
    InsufficientColors {
        backend: BackendKind,
        found: usize,
        needed: usize,
    },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_backend_message() {
        let error = DispatchError::UnknownBackend("pywal".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown backend: pywal (expected one of: colorthief, colorz, haishoku, schemer2, wal)"
        );
    }

    #[test]
    fn test_missing_argument_message() {
        let error = DispatchError::MissingArgument("image");
        assert_eq!(error.to_string(), "Missing required argument: image");
    }

    #[test]
    fn test_backend_error_keeps_source() {
        let error = DispatchError::Backend {
            backend: BackendKind::Wal,
            source: BackendError::ToolNotFound("Imagemagick".to_string()),
        };
        assert_eq!(error.to_string(), "Backend wal failed");
        assert_eq!(
            error.source().map(|e| e.to_string()),
            Some("Imagemagick wasn't found on your system".to_string())
        );
    }

    #[test]
    fn test_insufficient_colors_message() {
        let error = BackendError::InsufficientColors {
            backend: BackendKind::Colorz,
            found: 4,
            needed: 6,
        };
        assert_eq!(
            error.to_string(),
            "colorz couldn't generate a suitable palette: got 4 colors, need 6"
        );
    }

    #[test]
    fn test_backend_error_from_palette_error() {
        let palette_error = PaletteError::WrongLength {
            expected: 16,
            actual: 3,
        };
        let error: BackendError = palette_error.into();
        match error {
            BackendError::Palette(_) => {}
            _ => panic!("Expected Palette variant"),
        }
    }
}
