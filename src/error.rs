use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating icon assets
#[derive(Debug)]
pub enum IconError {
    /// Source logo does not exist
    SourceMissing(PathBuf),
    /// Failed to decode the source image
    ImageDecode { path: PathBuf, source: image::ImageError },
    /// Failed to resize or save one output variant
    ImageSave { path: PathBuf, source: image::ImageError },
    /// Failed to create the output or staging directory
    DirCreation { path: PathBuf, source: io::Error },
    /// Failed to spawn iconutil
    IconUtilLaunch(io::Error),
    /// iconutil ran but exited non-zero
    IconUtilFailed { exit_code: Option<i32> },
    /// Failed to encode one ICO directory entry
    IcoEncode { size: u32, source: io::Error },
    /// Failed to write the ICO container
    IcoWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::SourceMissing(path) => {
                write!(f, "source image not found: {}", path.display())
            }
            IconError::ImageDecode { path, source } => {
                write!(f, "failed to decode {}: {}", path.display(), source)
            }
            IconError::ImageSave { path, source } => {
                write!(f, "failed to save {}: {}", path.display(), source)
            }
            IconError::DirCreation { path, source } => {
                write!(
                    f,
                    "failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            IconError::IconUtilLaunch(e) => {
                write!(f, "failed to run iconutil: {}", e)
            }
            IconError::IconUtilFailed { exit_code } => match exit_code {
                Some(code) => write!(f, "iconutil failed (exit code {})", code),
                None => write!(f, "iconutil terminated by signal"),
            },
            IconError::IcoEncode { size, source } => {
                write!(f, "failed to encode {}x{} ICO entry: {}", size, size, source)
            }
            IconError::IcoWrite { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::ImageDecode { source, .. } => Some(source),
            IconError::ImageSave { source, .. } => Some(source),
            IconError::DirCreation { source, .. } => Some(source),
            IconError::IconUtilLaunch(e) => Some(e),
            IconError::IcoEncode { source, .. } => Some(source),
            IconError::IcoWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}
