use anyhow::Result;
use std::path::Path;
use orgledger::parser::save_roster;
use orgledger::roster::{Record, RecordKind, VacationPackage};

pub fn run(dir: &Path, name: &str, year: i32, days: u32, id: Option<u32>) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Package name cannot be empty");
    }

    let (mut roster, path) = super::load_ledger(dir)?;

    let package_id = match id {
        Some(id) => {
            if roster.get_package(id).is_some() {
                anyhow::bail!("Package with id {} already exists", id);
            }
            id
        }
        None => roster.next_id(RecordKind::Package),
    };

    roster.add_record(Record::Package(VacationPackage {
        id: package_id,
        name: name.to_string(),
        year,
        granted_days: days,
    }));

    save_roster(&roster, &path)?;
    println!(
        "Added package '{}' for {} ({} days, id {})",
        name, year, days, package_id
    );
    Ok(())
}
