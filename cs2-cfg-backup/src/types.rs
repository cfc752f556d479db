use camino::Utf8PathBuf;
use common::error::MirrorError;
use common::types::MirrorStats;
use std::error::Error;
use std::{fmt, io};

/// One invocation of the tool, and the folder it writes into.
#[derive(Clone, Debug, PartialEq)]
pub struct BackupRun {
    pub timestamp: String,
    pub destination_root: Utf8PathBuf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserEntry {
    pub user_id: String,
    pub candidate_cfg_path: Utf8PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Something that stopped part of a backup from happening.
#[derive(Debug)]
pub enum Notice {
    MissingSource {
        what: &'static str,
        path: Utf8PathBuf,
    },
    NoUsers {
        path: Utf8PathBuf,
    },
    UserdataUnreadable {
        path: Utf8PathBuf,
        error: io::Error,
    },
    UserSkipped {
        user_id: String,
        path: Utf8PathBuf,
    },
    CopyFailed {
        what: String,
        error: MirrorError,
    },
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::CopyFailed { .. } | Notice::UserdataUnreadable { .. } => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MissingSource { what, path } => {
                write!(f, "{} folder does not exist: {} - skipping", what, path)
            }
            Notice::NoUsers { path } => write!(f, "no user ID folders found in {}", path),
            Notice::UserSkipped { user_id, path } => {
                write!(f, "no cfg folder for user ID {} at {}, skipping", user_id, path)
            }
            Notice::UserdataUnreadable { path, error } => {
                write!(f, "could not list user ID folders in {}: {}", path, error)
            }
            Notice::CopyFailed { what, error } => {
                write!(f, "backup of {} failed: {}", what, error)?;
                match error.source() {
                    Some(cause) => write!(f, ": {}", cause),
                    None => Ok(()),
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct BackupSummary {
    pub destination: Utf8PathBuf,
    pub main_config_found: bool,
    pub users_backed_up: usize,
    pub users_skipped: usize,
    pub users_failed: usize,
    pub notices: Vec<Notice>,
    pub stats: MirrorStats,
}

impl BackupSummary {
    pub fn new(destination: Utf8PathBuf) -> Self {
        Self {
            destination,
            main_config_found: false,
            users_backed_up: 0,
            users_skipped: 0,
            users_failed: 0,
            notices: Vec::new(),
            stats: MirrorStats::default(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(|n| n.severity() == Severity::Error)
    }
}
