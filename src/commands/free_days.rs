use anyhow::Result;
use std::path::Path;
use orgledger::config::Config;
use orgledger::vacations::free_days;

pub fn run(dir: &Path, id: u32, as_of: Option<&str>, json: bool) -> Result<()> {
    let (roster, _path) = super::load_ledger(dir)?;
    let config = Config::load(dir)?;
    let as_of = super::as_of_date(as_of)?;

    let Some(employee) = roster.get_employee(id) else {
        anyhow::bail!("Employee {} not found", id);
    };
    let Some(package_id) = employee.package_id else {
        anyhow::bail!("Employee {} has no vacation package assigned", id);
    };
    let Some(package) = roster.get_package(package_id) else {
        anyhow::bail!("Vacation package {} not found", package_id);
    };

    let vacations: Vec<_> = roster.vacations_of(id).cloned().collect();
    let free = free_days(
        employee,
        &vacations,
        package,
        as_of,
        config.vacations.hours_per_day,
    )?;

    if json {
        let output = serde_json::json!({
            "employee_id": id,
            "package_id": package_id,
            "year": package.year,
            "free_days": free,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} has {} free vacation day(s) left in {}",
            employee.name, free, package.year
        );
    }

    Ok(())
}
