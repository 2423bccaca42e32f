use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading startup assets
///
/// Most of these are recoverable: a missing music track or a broken video
/// frame only degrades the shell. The caller decides which ones are fatal
/// (see `FrameSource::open`).
#[derive(Debug)]
pub enum AssetError {
    /// File or directory does not exist
    NotFound(PathBuf),

    /// File exists but could not be read
    Io(PathBuf, std::io::Error),

    /// Bytes could not be decoded into an image or a sound
    Decode {
        path: Option<PathBuf>,
        message: String,
    },

    /// Frame directory exists but holds no usable frames
    EmptySequence(PathBuf),

    /// Audio device or playback failure
    Audio(String),
}

impl AssetError {
    /// Builds an I/O error, mapping `NotFound` to its own variant
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AssetError::NotFound(path.to_path_buf())
        } else {
            AssetError::Io(path.to_path_buf(), err)
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        AssetError::Decode {
            path: None,
            message: message.into(),
        }
    }

    /// Attaches a path to a decode error that was raised without one
    pub fn at(self, path: &Path) -> Self {
        match self {
            AssetError::Decode { path: None, message } => AssetError::Decode {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path.display()),
            AssetError::Io(path, e) => write!(f, "IO error reading {}: {}", path.display(), e),
            AssetError::Decode {
                path: Some(path),
                message,
            } => write!(f, "Failed to decode {}: {}", path.display(), message),
            AssetError::Decode { path: None, message } => {
                write!(f, "Failed to decode asset: {}", message)
            }
            AssetError::EmptySequence(path) => {
                write!(f, "No frames found in {}", path.display())
            }
            AssetError::Audio(message) => write!(f, "Audio error: {}", message),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(_, e) => Some(e),
            _ => None,
        }
    }
}

impl From<AssetError> for String {
    fn from(error: AssetError) -> Self {
        error.to_string()
    }
}
