use anyhow::Result;
use std::path::Path;
use orgledger::query::idle_teams;

pub fn run(dir: &Path, year: i32, json: bool) -> Result<()> {
    let (roster, _path) = super::load_ledger(dir)?;

    let teams = idle_teams(&roster, year);

    if json {
        let output: Vec<_> = teams
            .iter()
            .map(|t| serde_json::json!({"id": t.id, "name": t.name}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if teams.is_empty() {
        println!("Every team had a vacation in {}", year);
    } else {
        println!("Teams without vacations in {}:", year);
        for team in teams {
            println!("  {} ({})", team.name, team.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use orgledger::parser::save_roster;
    use orgledger::roster::{Employee, Record, Roster, Team, Vacation};
    use std::fs;
    use tempfile::tempdir;

    fn setup_ledger(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        let path = super::super::roster_path(dir);
        let mut roster = Roster::new();
        roster.add_record(Record::Team(Team {
            id: 1,
            name: ".NET".to_string(),
        }));
        roster.add_record(Record::Team(Team {
            id: 2,
            name: "Java".to_string(),
        }));
        roster.add_record(Record::Employee(Employee {
            id: 1,
            name: "Jan Kowalski".to_string(),
            team_id: Some(1),
            ..Employee::default()
        }));
        roster.add_record(Record::Vacation(Vacation {
            id: 1,
            employee_id: 1,
            since: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            until: NaiveDate::from_ymd_opt(2019, 1, 5).unwrap(),
            partial: false,
            hours: 0,
        }));
        save_roster(&roster, &path).unwrap();
    }

    #[test]
    fn test_idle_teams_runs() {
        let dir = tempdir().unwrap();
        setup_ledger(dir.path());
        assert!(run(dir.path(), 2019, false).is_ok());
        assert!(run(dir.path(), 2019, true).is_ok());
    }

    #[test]
    fn test_idle_teams_uninitialized() {
        let dir = tempdir().unwrap();
        assert!(run(dir.path(), 2019, false).is_err());
    }
}
