use camino::Utf8PathBuf;
use std::io;

/// Errors which stop a backup run. Anything that only affects one source is a `Notice`.
///
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("failed to create backup folder {path}")]
    CreateDestination {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}
