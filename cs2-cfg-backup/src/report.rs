use crate::types::{BackupSummary, Notice, Severity};
use colored::Colorize;

pub fn notice_line(notice: &Notice) -> String {
    match notice.severity() {
        Severity::Warning => format!("{} {}", "WARNING:".yellow(), notice),
        Severity::Error => format!("{} {}", "ERROR:".red(), notice),
    }
}

pub fn totals_line(summary: &BackupSummary) -> String {
    let mut line = format!(
        "main cfg {}, {} user(s) backed up, {} skipped",
        if summary.main_config_found {
            "found"
        } else {
            "not found"
        },
        summary.users_backed_up,
        summary.users_skipped,
    );

    if summary.users_failed > 0 {
        line.push_str(&format!(", {} failed", summary.users_failed));
    }

    line
}

pub fn print_summary(summary: &BackupSummary) {
    for notice in &summary.notices {
        if notice.severity() == Severity::Error {
            eprintln!("{}", notice_line(notice));
        } else {
            println!("{}", notice_line(notice));
        }
    }

    println!();
    println!("{}", totals_line(summary));
    println!(
        "{} file(s), {} byte(s) copied to:\n  {}",
        summary.stats.files,
        summary.stats.bytes,
        summary.destination.as_str().bold()
    );
}
