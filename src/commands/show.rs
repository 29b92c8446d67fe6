use anyhow::Result;
use std::path::Path;
use orgledger::hierarchy::resolve_structures;

pub fn run(dir: &Path, id: u32, json: bool) -> Result<()> {
    let (roster, _path) = super::load_ledger(dir)?;

    let Some(employee) = roster.get_employee(id) else {
        anyhow::bail!("Employee {} not found", id);
    };

    let employees: Vec<_> = roster.employees().cloned().collect();
    let (entries, _snapshot) = resolve_structures(&employees)?;
    let mut chain: Vec<_> = entries.iter().filter(|e| e.employee_id == id).collect();
    chain.sort_by_key(|e| e.row);

    let mut vacations: Vec<_> = roster.vacations_of(id).collect();
    vacations.sort_by_key(|v| v.since);

    if json {
        let output = serde_json::json!({
            "id": employee.id,
            "name": employee.name,
            "team": employee.team_id.and_then(|t| roster.get_team(t)).map(|t| &t.name),
            "package": employee.package_id.and_then(|p| roster.get_package(p)).map(|p| &p.name),
            "superiors": chain.iter().map(|e| {
                serde_json::json!({"id": e.superior_id, "row": e.row})
            }).collect::<Vec<_>>(),
            "vacations": vacations.iter().map(|v| {
                serde_json::json!({
                    "since": v.since,
                    "until": v.until,
                    "partial": v.partial,
                })
            }).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} - {}", employee.id, employee.name);
        if let Some(team) = employee.team_id.and_then(|t| roster.get_team(t)) {
            println!("  Team: {}", team.name);
        }
        if let Some(package) = employee.package_id.and_then(|p| roster.get_package(p)) {
            println!(
                "  Package: {} ({} days in {})",
                package.name, package.granted_days, package.year
            );
        }
        if chain.is_empty() {
            println!("  No superiors");
        } else {
            println!("  Superiors:");
            for entry in &chain {
                let name = roster
                    .get_employee(entry.superior_id)
                    .map(|e| e.name.as_str())
                    .unwrap_or("?");
                println!("    row {}: {} ({})", entry.row, name, entry.superior_id);
            }
        }
        for vacation in &vacations {
            if vacation.partial {
                println!("  Vacation: {} ({}h partial)", vacation.since, vacation.hours);
            } else {
                println!("  Vacation: {} - {}", vacation.since, vacation.until);
            }
        }
    }

    Ok(())
}
