use anyhow::Result;
use chrono::Datelike;
use std::path::Path;
use orgledger::config::Config;
use orgledger::query::used_days_report;

pub fn run(dir: &Path, year: Option<i32>, as_of: Option<&str>, json: bool) -> Result<()> {
    let (roster, _path) = super::load_ledger(dir)?;
    let config = Config::load(dir)?;
    let as_of = super::as_of_date(as_of)?;
    let year = year.unwrap_or_else(|| as_of.year());

    let report = used_days_report(&roster, year, as_of, config.vacations.hours_per_day);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_empty() {
        println!("No vacation days used in {}", year);
    } else {
        println!("Used vacation days in {}:", year);
        for entry in &report {
            println!(
                "  {} ({}): {} day(s)",
                entry.name, entry.employee_id, entry.used_days
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use orgledger::parser::save_roster;
    use orgledger::roster::{Employee, Record, Roster, Vacation};
    use std::fs;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup_ledger(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        let path = super::super::roster_path(dir);
        let mut roster = Roster::new();
        roster.add_record(Record::Employee(Employee {
            id: 1,
            name: "Jan Kowalski".to_string(),
            ..Employee::default()
        }));
        roster.add_record(Record::Vacation(Vacation {
            id: 1,
            employee_id: 1,
            since: date(2025, 1, 1),
            until: date(2025, 1, 5),
            partial: false,
            hours: 0,
        }));
        save_roster(&roster, &path).unwrap();
    }

    #[test]
    fn test_report_defaults_to_evaluation_year() {
        let dir = tempdir().unwrap();
        setup_ledger(dir.path());
        assert!(run(dir.path(), None, Some("2025-09-29"), false).is_ok());
        assert!(run(dir.path(), None, Some("2025-09-29"), true).is_ok());
    }

    #[test]
    fn test_report_explicit_year() {
        let dir = tempdir().unwrap();
        setup_ledger(dir.path());
        assert!(run(dir.path(), Some(2019), Some("2025-09-29"), false).is_ok());
    }

    #[test]
    fn test_report_uninitialized() {
        let dir = tempdir().unwrap();
        assert!(run(dir.path(), None, None, false).is_err());
    }
}
