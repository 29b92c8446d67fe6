use anyhow::Result;
use std::path::Path;
use orgledger::parser::save_roster;
use orgledger::roster::{Record, RecordKind, Vacation};

pub fn run(
    dir: &Path,
    employee: u32,
    since: &str,
    until: &str,
    hours: Option<u32>,
    id: Option<u32>,
) -> Result<()> {
    let (mut roster, path) = super::load_ledger(dir)?;

    if roster.get_employee(employee).is_none() {
        anyhow::bail!("Employee {} not found", employee);
    }

    let since = super::parse_date(since)?;
    let until = super::parse_date(until)?;
    if until < since {
        anyhow::bail!("Vacation cannot end before it starts");
    }
    if let Some(hours) = hours {
        if hours == 0 {
            anyhow::bail!("Partial vacation must cover at least one hour");
        }
        if since != until {
            anyhow::bail!("Partial vacation must start and end on the same day");
        }
    }

    let vacation_id = match id {
        Some(id) => {
            if roster.get_vacation(id).is_some() {
                anyhow::bail!("Vacation with id {} already exists", id);
            }
            id
        }
        None => roster.next_id(RecordKind::Vacation),
    };

    roster.add_record(Record::Vacation(Vacation {
        id: vacation_id,
        employee_id: employee,
        since,
        until,
        partial: hours.is_some(),
        hours: hours.unwrap_or(0),
    }));

    save_roster(&roster, &path)?;
    match hours {
        Some(hours) => println!(
            "Recorded {}h partial vacation on {} for employee {} (id {})",
            hours, since, employee, vacation_id
        ),
        None => println!(
            "Recorded vacation {} - {} for employee {} (id {})",
            since, until, employee, vacation_id
        ),
    }
    Ok(())
}
