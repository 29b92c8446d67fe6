use anyhow::Result;
use std::path::Path;
use orgledger::parser::save_roster;
use orgledger::roster::{Record, RecordKind, Team};

pub fn run(dir: &Path, name: &str, id: Option<u32>) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Team name cannot be empty");
    }

    let (mut roster, path) = super::load_ledger(dir)?;

    if roster.team_by_name(name).is_some() {
        anyhow::bail!("Team '{}' already exists", name);
    }

    let team_id = match id {
        Some(id) => {
            if roster.get_team(id).is_some() {
                anyhow::bail!("Team with id {} already exists", id);
            }
            id
        }
        None => roster.next_id(RecordKind::Team),
    };

    roster.add_record(Record::Team(Team {
        id: team_id,
        name: name.to_string(),
    }));

    save_roster(&roster, &path)?;
    println!("Added team '{}' (id {})", name, team_id);
    Ok(())
}
