use anyhow::Result;
use chrono::Datelike;
use std::path::Path;
use orgledger::roster::Employee;

pub fn run(
    dir: &Path,
    team: Option<&str>,
    vacation_year: Option<i32>,
    json: bool,
) -> Result<()> {
    let (roster, _path) = super::load_ledger(dir)?;

    let team_id = match team {
        Some(name) => match roster.team_by_name(name) {
            Some(team) => Some(team.id),
            None => anyhow::bail!("Team '{}' not found", name),
        },
        None => None,
    };

    let mut employees: Vec<&Employee> = roster
        .employees()
        .filter(|e| team_id.is_none_or(|id| e.team_id == Some(id)))
        .filter(|e| {
            vacation_year.is_none_or(|year| {
                roster.vacations_of(e.id).any(|v| v.since.year() == year)
            })
        })
        .collect();
    employees.sort_by_key(|e| e.id);

    if json {
        let output: Vec<_> = employees
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.id,
                    "name": e.name,
                    "team_id": e.team_id,
                    "package_id": e.package_id,
                    "superior_id": e.superior_id,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if employees.is_empty() {
        println!("No employees found");
    } else {
        for employee in employees {
            let team_name = employee
                .team_id
                .and_then(|id| roster.get_team(id))
                .map(|t| t.name.as_str())
                .unwrap_or("-");
            println!("{} - {} [{}]", employee.id, employee.name, team_name);
        }
    }

    Ok(())
}
