pub mod check;
pub mod free_days;
pub mod hire;
pub mod idle_teams;
pub mod init;
pub mod list;
pub mod package;
pub mod report;
pub mod request;
pub mod row;
pub mod show;
pub mod structure;
pub mod team;
pub mod vacation;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use orgledger::parser::load_roster;
use orgledger::roster::Roster;

/// Path to the roster file within the orgledger directory
pub fn roster_path(dir: &Path) -> PathBuf {
    dir.join("roster.jsonl")
}

/// Load the roster from the given directory.
/// Returns the roster and the path to the roster file (needed for save_roster).
pub fn load_ledger(dir: &Path) -> Result<(Roster, PathBuf)> {
    let path = roster_path(dir);
    if !path.exists() {
        anyhow::bail!("Orgledger not initialized. Run 'ol init' first.");
    }
    let roster = load_roster(&path).context("Failed to load roster")?;
    Ok((roster, path))
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    s.parse::<NaiveDate>()
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", s))
}

/// The evaluation date: an explicit --as-of value, or today
pub fn as_of_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
