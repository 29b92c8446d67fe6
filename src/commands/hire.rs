use anyhow::Result;
use std::path::Path;
use orgledger::parser::save_roster;
use orgledger::roster::{Employee, Record, RecordKind};

pub fn run(
    dir: &Path,
    name: &str,
    id: Option<u32>,
    team: Option<u32>,
    package: Option<u32>,
    superior: Option<u32>,
) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Employee name cannot be empty");
    }

    let (mut roster, path) = super::load_ledger(dir)?;

    let employee_id = match id {
        Some(id) => {
            if roster.get_employee(id).is_some() {
                anyhow::bail!("Employee with id {} already exists", id);
            }
            id
        }
        None => roster.next_id(RecordKind::Employee),
    };

    if let Some(team_id) = team
        && roster.get_team(team_id).is_none()
    {
        anyhow::bail!("Team {} does not exist", team_id);
    }
    if let Some(package_id) = package
        && roster.get_package(package_id).is_none()
    {
        anyhow::bail!("Vacation package {} does not exist", package_id);
    }
    // The superior may be hired later; the resolver tolerates a dangling
    // reference by ending the chain there
    if let Some(superior_id) = superior
        && roster.get_employee(superior_id).is_none()
    {
        eprintln!(
            "Warning: superior {} is not in the roster yet",
            superior_id
        );
    }

    roster.add_record(Record::Employee(Employee {
        id: employee_id,
        name: name.to_string(),
        team_id: team,
        package_id: package,
        superior_id: superior,
    }));

    save_roster(&roster, &path)?;
    println!("Hired '{}' (id {})", name, employee_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgledger::parser::load_roster;
    use orgledger::roster::{Roster, Team};
    use std::fs;
    use tempfile::tempdir;

    fn setup_ledger(dir: &Path, records: Vec<Record>) -> std::path::PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = super::super::roster_path(dir);
        let mut roster = Roster::new();
        for record in records {
            roster.add_record(record);
        }
        save_roster(&roster, &path).unwrap();
        path
    }

    #[test]
    fn test_hire_uninitialized() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), "Jan Kowalski", None, None, None, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not initialized"));
    }

    #[test]
    fn test_hire_assigns_next_id() {
        let dir = tempdir().unwrap();
        let path = setup_ledger(dir.path(), vec![]);

        run(dir.path(), "Jan Kowalski", None, None, None, None).unwrap();
        run(dir.path(), "Kamil Nowak", None, None, None, Some(1)).unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.get_employee(1).unwrap().name, "Jan Kowalski");
        assert_eq!(roster.get_employee(2).unwrap().superior_id, Some(1));
    }

    #[test]
    fn test_hire_duplicate_id_fails() {
        let dir = tempdir().unwrap();
        setup_ledger(dir.path(), vec![]);

        run(dir.path(), "Jan Kowalski", Some(1), None, None, None).unwrap();
        let result = run(dir.path(), "Kamil Nowak", Some(1), None, None, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[test]
    fn test_hire_unknown_team_fails() {
        let dir = tempdir().unwrap();
        setup_ledger(dir.path(), vec![]);

        let result = run(dir.path(), "Jan Kowalski", None, Some(7), None, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Team 7"));
    }

    #[test]
    fn test_hire_with_known_team() {
        let dir = tempdir().unwrap();
        let path = setup_ledger(
            dir.path(),
            vec![Record::Team(Team {
                id: 1,
                name: ".NET".to_string(),
            })],
        );

        run(dir.path(), "Jan Kowalski", None, Some(1), None, None).unwrap();
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.get_employee(1).unwrap().team_id, Some(1));
    }

    #[test]
    fn test_hire_empty_name_fails() {
        let dir = tempdir().unwrap();
        setup_ledger(dir.path(), vec![]);

        let result = run(dir.path(), "   ", None, None, None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_hire_dangling_superior_is_tolerated() {
        let dir = tempdir().unwrap();
        let path = setup_ledger(dir.path(), vec![]);

        run(dir.path(), "Jan Kowalski", None, None, None, Some(42)).unwrap();
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.get_employee(1).unwrap().superior_id, Some(42));
    }
}
