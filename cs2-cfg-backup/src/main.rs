mod config;
mod constants;
mod error;
mod orchestrator;
mod report;
mod types;

use crate::config::{BackupConfig, default_home_root, default_steam_root};
use crate::types::BackupSummary;
use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use common::types::Opts;

#[derive(Parser)]
#[clap(version, about = "Backs up Counter-Strike 2 cfg folders", long_about = None)]
struct Cli {
    /// Steam install directory. Defaults to the platform's usual location
    #[clap(short, long)]
    steam_root: Option<Utf8PathBuf>,
    /// Home directory, under which Documents/CS2_Backups is written
    #[clap(short = 'H', long)]
    home: Option<Utf8PathBuf>,
    /// Game directory under steamapps/common
    #[clap(short, long)]
    game_dir: Option<String>,
    /// Print what would happen, without doing it
    #[clap(short, long)]
    noop: bool,
    /// Be verbose
    #[clap(short, long)]
    verbose: bool,
}

fn backup_config(cli: &Cli) -> BackupConfig {
    let home_root = cli.home.clone().unwrap_or_else(default_home_root);
    let steam_root = cli
        .steam_root
        .clone()
        .unwrap_or_else(|| default_steam_root(&home_root));

    let mut config = BackupConfig::new(steam_root, home_root);

    if let Some(game_dir) = &cli.game_dir {
        config.game_dir = game_dir.clone();
    }

    config
}

fn backup(config: &BackupConfig, opts: &Opts) -> anyhow::Result<BackupSummary> {
    orchestrator::run(config, opts)
        .with_context(|| format!("backup of {} could not run", config.steam_root))
}

fn main() {
    let cli = Cli::parse();

    let opts = Opts {
        verbose: cli.verbose,
        noop: cli.noop,
    };

    let config = backup_config(&cli);

    match backup(&config, &opts) {
        Ok(summary) => {
            report::print_summary(&summary);
            if summary.has_errors() {
                println!("Backup finished with errors");
            } else {
                println!("Backup complete");
            }
        }
        // Exit status is always 0. Problems are reported, not signalled.
        Err(e) => eprintln!("ERROR: {:#}", e),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_backup_config_overrides() {
        let cli = Cli::parse_from([
            "cs2-cfg-backup",
            "--steam-root",
            "/games/steam",
            "--home",
            "/home/test",
            "--game-dir",
            "Counter-Strike 2",
        ]);

        let config = backup_config(&cli);

        assert_eq!(Utf8PathBuf::from("/games/steam"), config.steam_root);
        assert_eq!(Utf8PathBuf::from("/home/test"), config.home_root);
        assert_eq!("Counter-Strike 2", config.game_dir);
        assert_eq!("730", config.app_id);
    }

    #[test]
    fn test_steam_root_follows_home() {
        let cli = Cli::parse_from(["cs2-cfg-backup", "-H", "/home/test"]);
        let config = backup_config(&cli);

        assert_eq!(
            default_steam_root(&Utf8PathBuf::from("/home/test")),
            config.steam_root
        );
    }
}
