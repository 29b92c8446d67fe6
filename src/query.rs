use crate::roster::{Employee, Roster, Team};
use crate::vacations::used_days;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One row of the used-days report
#[derive(Debug, Clone, Serialize)]
pub struct UsedDaysEntry {
    pub employee_id: u32,
    pub name: String,
    pub used_days: u32,
}

/// Employees of the named team that have at least one vacation starting in
/// `year`. Unknown team names yield an empty result.
pub fn team_members_with_vacations_in<'a>(
    roster: &'a Roster,
    team_name: &str,
    year: i32,
) -> Vec<&'a Employee> {
    let Some(team) = roster.team_by_name(team_name) else {
        return vec![];
    };

    let mut members: Vec<&Employee> = roster
        .members_of(team.id)
        .filter(|e| roster.vacations_of(e.id).any(|v| v.since.year() == year))
        .collect();
    members.sort_by_key(|e| e.id);
    members
}

/// Used vacation days per employee for `year`, evaluated at `as_of`.
/// Employees with no used days are omitted; ordered by employee id.
pub fn used_days_report(
    roster: &Roster,
    year: i32,
    as_of: NaiveDate,
    hours_per_day: u32,
) -> Vec<UsedDaysEntry> {
    let mut entries: Vec<UsedDaysEntry> = roster
        .employees()
        .map(|e| UsedDaysEntry {
            employee_id: e.id,
            name: e.name.clone(),
            used_days: used_days(e.id, roster.vacations_of(e.id), year, as_of, hours_per_day),
        })
        .filter(|entry| entry.used_days > 0)
        .collect();
    entries.sort_by_key(|entry| entry.employee_id);
    entries
}

/// Teams where no member has any vacation starting in `year`.
/// Ordered by team id.
pub fn idle_teams(roster: &Roster, year: i32) -> Vec<&Team> {
    let mut teams: Vec<&Team> = roster
        .teams()
        .filter(|team| {
            !roster
                .members_of(team.id)
                .any(|e| roster.vacations_of(e.id).any(|v| v.since.year() == year))
        })
        .collect();
    teams.sort_by_key(|t| t.id);
    teams
}
