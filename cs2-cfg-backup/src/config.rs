use camino::{Utf8Path, Utf8PathBuf};
use crate::constants::{
    BACKUP_DIR, CS2_APP_ID, CS2_GAME_DIR, DOCUMENTS_DIR, GAME_CFG_SUBPATH, STEAMAPPS_COMMON,
    USER_CFG_SUBPATH, USERDATA_DIR,
};

/// Where to find things and where to put them. Every fixed name the backup relies on lives
/// here, so a test (or a user with an odd Steam install) can point it somewhere else.
///
#[derive(Clone, Debug, PartialEq)]
pub struct BackupConfig {
    pub steam_root: Utf8PathBuf,
    pub home_root: Utf8PathBuf,
    pub game_dir: String,
    pub app_id: String,
    pub documents_dir: String,
    pub backup_dir: String,
}

impl BackupConfig {
    pub fn new(steam_root: Utf8PathBuf, home_root: Utf8PathBuf) -> Self {
        Self {
            steam_root,
            home_root,
            game_dir: CS2_GAME_DIR.to_string(),
            app_id: CS2_APP_ID.to_string(),
            documents_dir: DOCUMENTS_DIR.to_string(),
            backup_dir: BACKUP_DIR.to_string(),
        }
    }

    pub fn game_cfg_dir(&self) -> Utf8PathBuf {
        let install_dir = join_all(&self.steam_root, STEAMAPPS_COMMON).join(&self.game_dir);
        join_all(&install_dir, GAME_CFG_SUBPATH)
    }

    pub fn userdata_root(&self) -> Utf8PathBuf {
        self.steam_root.join(USERDATA_DIR)
    }

    pub fn user_cfg_dir(&self, user_id: &str) -> Utf8PathBuf {
        let app_dir = self.userdata_root().join(user_id).join(&self.app_id);
        join_all(&app_dir, USER_CFG_SUBPATH)
    }

    pub fn backup_root(&self) -> Utf8PathBuf {
        self.home_root.join(&self.documents_dir).join(&self.backup_dir)
    }
}

fn join_all(base: &Utf8Path, parts: &[&str]) -> Utf8PathBuf {
    parts.iter().fold(base.to_path_buf(), |path, part| path.join(part))
}

/// Falls back to the working directory if the home directory can't be found, or isn't UTF-8.
///
pub fn default_home_root() -> Utf8PathBuf {
    dirs::home_dir()
        .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."))
}

#[cfg(windows)]
pub fn default_steam_root(_home_root: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(r"C:\Program Files (x86)\Steam")
}

#[cfg(target_os = "macos")]
pub fn default_steam_root(home_root: &Utf8Path) -> Utf8PathBuf {
    home_root
        .join("Library")
        .join("Application Support")
        .join("Steam")
}

#[cfg(not(any(windows, target_os = "macos")))]
pub fn default_steam_root(home_root: &Utf8Path) -> Utf8PathBuf {
    home_root.join(".steam").join("steam")
}
