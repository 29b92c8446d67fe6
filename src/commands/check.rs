use anyhow::Result;
use std::path::Path;
use orgledger::check::check_all;

pub fn run(dir: &Path, json: bool) -> Result<()> {
    let (roster, _path) = super::load_ledger(dir)?;

    let result = check_all(&roster);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for cycle in &result.cycles {
            let ids: Vec<String> = cycle.iter().map(u32::to_string).collect();
            println!("Cycle in reporting chain: {}", ids.join(" -> "));
        }
        for orphan in &result.orphan_refs {
            println!(
                "Dangling {} reference: {} -> {}",
                orphan.relation, orphan.from, orphan.to
            );
        }
        for invalid in &result.invalid_ranges {
            println!("Vacation {} ends before it starts", invalid.vacation_id);
        }
        if result.ok && result.orphan_refs.is_empty() {
            println!("Roster OK");
        }
    }

    if !result.ok {
        anyhow::bail!("Roster check failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgledger::parser::save_roster;
    use orgledger::roster::{Employee, Record, Roster};
    use std::fs;
    use tempfile::tempdir;

    fn employee(id: u32, superior_id: Option<u32>) -> Record {
        Record::Employee(Employee {
            id,
            name: format!("Employee {}", id),
            superior_id,
            ..Employee::default()
        })
    }

    fn setup_ledger(dir: &Path, records: Vec<Record>) {
        fs::create_dir_all(dir).unwrap();
        let path = super::super::roster_path(dir);
        let mut roster = Roster::new();
        for record in records {
            roster.add_record(record);
        }
        save_roster(&roster, &path).unwrap();
    }

    #[test]
    fn test_check_clean_roster() {
        let dir = tempdir().unwrap();
        setup_ledger(dir.path(), vec![employee(1, None), employee(2, Some(1))]);
        assert!(run(dir.path(), false).is_ok());
        assert!(run(dir.path(), true).is_ok());
    }

    #[test]
    fn test_check_cycle_fails() {
        let dir = tempdir().unwrap();
        setup_ledger(
            dir.path(),
            vec![employee(1, Some(2)), employee(2, Some(1))],
        );
        let result = run(dir.path(), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_dangling_superior_passes() {
        let dir = tempdir().unwrap();
        setup_ledger(dir.path(), vec![employee(5, Some(99))]);
        assert!(run(dir.path(), false).is_ok());
    }
}
