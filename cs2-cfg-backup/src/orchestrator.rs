use crate::config::BackupConfig;
use crate::error::BackupError;
use crate::types::{BackupRun, BackupSummary, Notice, UserEntry};
use camino::{Utf8Path, Utf8PathBuf};
use crate::constants::{BACKUP_PREFIX, GAME_CFG_DEST, USER_DEST_PREFIX};
use common::file_copier::mirror_dir;
use common::types::{MirrorOutcome, Opts};
use common::{announce, verbose};
use std::{fs, io};
use time::OffsetDateTime;
use time::macros::format_description;

/// Backs up the game's cfg folder and every user's cfg folder into a new folder stamped with
/// the current local time.
///
pub fn run(config: &BackupConfig, opts: &Opts) -> Result<BackupSummary, BackupError> {
    run_at(config, local_now(), opts)
}

/// Missing sources, an unreadable userdata folder, and failures copying any one source are
/// recorded in the summary and the run carries on. Only failing to create the backup folder is
/// fatal.
///
pub fn run_at(
    config: &BackupConfig,
    now: OffsetDateTime,
    opts: &Opts,
) -> Result<BackupSummary, BackupError> {
    let run = begin_run(config, now, opts)?;
    let mut summary = BackupSummary::new(run.destination_root.clone());

    verbose!(opts, "Backup {} started", run.timestamp);
    verbose!(opts, "Backing up main game cfg folder");
    let game_cfg = config.game_cfg_dir();

    match mirror_dir(
        game_cfg.as_std_path(),
        run.destination_root.join(GAME_CFG_DEST).as_std_path(),
        opts,
    ) {
        Ok(MirrorOutcome::Mirrored(stats)) => {
            summary.main_config_found = true;
            summary.stats += stats;
        }
        Ok(MirrorOutcome::SourceMissing) => summary.notices.push(Notice::MissingSource {
            what: "game cfg",
            path: game_cfg,
        }),
        Err(error) => {
            summary.main_config_found = true;
            summary.notices.push(Notice::CopyFailed {
                what: "game cfg".to_string(),
                error,
            });
        }
    }

    let userdata_root = config.userdata_root();

    if !userdata_root.is_dir() {
        summary.notices.push(Notice::MissingSource {
            what: "userdata",
            path: userdata_root,
        });
        return Ok(summary);
    }

    let listing = discover_users(config, &userdata_root);
    backup_users(listing, userdata_root, &run, opts, &mut summary);

    Ok(summary)
}

fn backup_users(
    listing: io::Result<Vec<UserEntry>>,
    userdata_root: Utf8PathBuf,
    run: &BackupRun,
    opts: &Opts,
    summary: &mut BackupSummary,
) {
    let users = match listing {
        Ok(users) => users,
        Err(error) => {
            summary.notices.push(Notice::UserdataUnreadable {
                path: userdata_root,
                error,
            });
            return;
        }
    };

    if users.is_empty() {
        summary.notices.push(Notice::NoUsers {
            path: userdata_root,
        });
    }

    for user in users {
        backup_user(&user, run, opts, summary);
    }
}

fn backup_user(user: &UserEntry, run: &BackupRun, opts: &Opts, summary: &mut BackupSummary) {
    let dest = run
        .destination_root
        .join(format!("{}{}", USER_DEST_PREFIX, user.user_id));

    match mirror_dir(
        user.candidate_cfg_path.as_std_path(),
        dest.as_std_path(),
        opts,
    ) {
        Ok(MirrorOutcome::Mirrored(stats)) => {
            verbose!(opts, "Backed up cfg for user ID {}", user.user_id);
            summary.users_backed_up += 1;
            summary.stats += stats;
        }
        Ok(MirrorOutcome::SourceMissing) => {
            summary.users_skipped += 1;
            summary.notices.push(Notice::UserSkipped {
                user_id: user.user_id.clone(),
                path: user.candidate_cfg_path.clone(),
            });
        }
        Err(error) => {
            summary.users_failed += 1;
            summary.notices.push(Notice::CopyFailed {
                what: format!("user ID {}", user.user_id),
                error,
            });
        }
    }
}

/// Works out the timestamped destination and creates it. In noop mode it is only named.
///
pub fn begin_run(
    config: &BackupConfig,
    now: OffsetDateTime,
    opts: &Opts,
) -> Result<BackupRun, BackupError> {
    let timestamp = backup_timestamp(now);
    let destination_root = config
        .backup_root()
        .join(format!("{}{}", BACKUP_PREFIX, timestamp));

    announce!(opts, "creating {}", destination_root);

    if !opts.noop {
        fs::create_dir_all(&destination_root).map_err(|source| {
            BackupError::CreateDestination {
                path: destination_root.clone(),
                source,
            }
        })?;
    }

    Ok(BackupRun {
        timestamp,
        destination_root,
    })
}

/// Every directory directly under userdata is taken to be a Steam user ID. Names which aren't
/// UTF-8 can't be Steam IDs, so they're ignored. The list is sorted so runs are repeatable.
///
pub fn discover_users(
    config: &BackupConfig,
    userdata_root: &Utf8Path,
) -> io::Result<Vec<UserEntry>> {
    let mut users = Vec::new();

    for entry in fs::read_dir(userdata_root)? {
        let entry = entry?;

        if !entry.path().is_dir() {
            continue;
        }

        if let Ok(user_id) = entry.file_name().into_string() {
            users.push(UserEntry {
                candidate_cfg_path: config.user_cfg_dir(&user_id),
                user_id,
            });
        }
    }

    users.sort_by(|a, b| a.user_id.cmp(&b.user_id));
    Ok(users)
}

pub fn backup_timestamp(now: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]_[hour][minute]");
    now.format(&format)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// The local offset can't always be found (e.g. on some multi-threaded Unix processes), in
/// which case we stamp in UTC.
///
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
