use std::io;
use std::path::{Path, PathBuf};

pub type MirrorResult<T> = Result<T, MirrorError>;

#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {} to {}", src.display(), dest.display())]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MirrorError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path whose operation failed. For a failed copy, that's the destination.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
            Self::Copy { dest, .. } => dest,
        }
    }
}
