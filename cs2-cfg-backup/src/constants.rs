/// Steam's application id for Counter-Strike 2 (and CS:GO before it).
pub const CS2_APP_ID: &str = "730";

/// CS2 still installs into the old CS:GO directory.
pub const CS2_GAME_DIR: &str = "Counter-Strike Global Offensive";

/// Path from a game's install directory to its config folder.
pub const GAME_CFG_SUBPATH: &[&str] = &["game", "csgo", "cfg"];

/// Path from `<userdata>/<user id>/<app id>` to a user's config folder.
pub const USER_CFG_SUBPATH: &[&str] = &["local", "cfg"];

pub const STEAMAPPS_COMMON: &[&str] = &["steamapps", "common"];
pub const USERDATA_DIR: &str = "userdata";

pub const DOCUMENTS_DIR: &str = "Documents";
pub const BACKUP_DIR: &str = "CS2_Backups";
pub const BACKUP_PREFIX: &str = "backup_";
pub const GAME_CFG_DEST: &str = "game_cfg";
pub const USER_DEST_PREFIX: &str = "user_";
