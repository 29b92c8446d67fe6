use anyhow::{Context, Result};
use std::path::Path;
use orgledger::hierarchy::HierarchyResolver;

pub fn run(dir: &Path, employee: u32, superior: u32, json: bool) -> Result<()> {
    let (roster, _path) = super::load_ledger(dir)?;

    if roster.get_employee(employee).is_none() {
        anyhow::bail!("Employee {} not found", employee);
    }

    let employees: Vec<_> = roster.employees().cloned().collect();
    let mut resolver = HierarchyResolver::new();
    resolver
        .resolve(&employees)
        .context("Failed to resolve hierarchy")?;

    let row = resolver.superior_row(employee, superior);

    if json {
        let output = serde_json::json!({
            "employee_id": employee,
            "superior_id": superior,
            "row": row,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match row {
            Some(row) => println!(
                "Employee {} is {} row(s) below {}",
                employee, row, superior
            ),
            None => println!(
                "Employee {} has no superior {} in its reporting chain",
                employee, superior
            ),
        }
    }

    Ok(())
}
