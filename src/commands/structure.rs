use anyhow::{Context, Result};
use std::path::Path;
use orgledger::hierarchy::resolve_structures;

pub fn run(dir: &Path, json: bool) -> Result<()> {
    let (roster, _path) = super::load_ledger(dir)?;

    let employees: Vec<_> = roster.employees().cloned().collect();
    let (mut entries, _snapshot) =
        resolve_structures(&employees).context("Failed to resolve hierarchy")?;
    entries.sort_by_key(|e| (e.employee_id, e.row));

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No reporting relations");
    } else {
        for entry in &entries {
            let employee = roster
                .get_employee(entry.employee_id)
                .map(|e| e.name.as_str())
                .unwrap_or("?");
            let superior = roster
                .get_employee(entry.superior_id)
                .map(|e| e.name.as_str())
                .unwrap_or("?");
            println!(
                "{} ({}) -> {} ({}) [row {}]",
                employee, entry.employee_id, superior, entry.superior_id, entry.row
            );
        }
    }

    Ok(())
}
