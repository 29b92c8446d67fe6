//! Integration tests for vacation accounting and roster queries, driven
//! through a roster persisted to disk the way the CLI would build it.

use chrono::NaiveDate;
use orgledger::parser::{load_roster, save_roster};
use orgledger::query::{idle_teams, team_members_with_vacations_in, used_days_report};
use orgledger::roster::{Employee, Record, Roster, Team, Vacation, VacationPackage};
use orgledger::vacations::{HOURS_PER_DAY, can_request_vacation, free_days};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Evaluation date used throughout
fn as_of() -> NaiveDate {
    date(2025, 9, 29)
}

/// Two teams, three employees, one package, four vacations:
/// Jan (.NET): 2019 vacation, concluded 2025 vacation, future 2025 vacation.
/// Kamil (.NET): concluded 4-hour partial. Anna (Java): none.
fn seed_roster() -> Roster {
    let mut roster = Roster::new();
    roster.add_record(Record::Team(Team {
        id: 1,
        name: ".NET".to_string(),
    }));
    roster.add_record(Record::Team(Team {
        id: 2,
        name: "Java".to_string(),
    }));
    roster.add_record(Record::Package(VacationPackage {
        id: 1,
        name: "Standard".to_string(),
        year: 2025,
        granted_days: 20,
    }));

    for (id, name, team_id) in [
        (1, "Jan Kowalski", 1),
        (2, "Kamil Nowak", 1),
        (3, "Anna Mariacka", 2),
    ] {
        roster.add_record(Record::Employee(Employee {
            id,
            name: name.to_string(),
            team_id: Some(team_id),
            package_id: Some(1),
            superior_id: None,
        }));
    }

    for (id, employee_id, since, until, partial, hours) in [
        (1, 1, date(2019, 1, 1), date(2019, 1, 5), false, 0),
        (2, 1, date(2025, 1, 1), date(2025, 1, 5), false, 0),
        (3, 2, date(2025, 2, 1), date(2025, 2, 1), true, 4),
        (4, 1, date(2025, 10, 1), date(2025, 10, 5), false, 0),
    ] {
        roster.add_record(Record::Vacation(Vacation {
            id,
            employee_id,
            since,
            until,
            partial,
            hours,
        }));
    }

    roster
}

/// Persist and reload the seed, so every query below runs against a roster
/// that went through the JSONL codec.
fn persisted_seed() -> Roster {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.jsonl");
    save_roster(&seed_roster(), &path).unwrap();
    load_roster(&path).unwrap()
}

// ===========================================================================
// 1. Free days
// ===========================================================================

#[test]
fn test_free_days_full_vacation_concluded() {
    let roster = persisted_seed();
    let jan = roster.get_employee(1).unwrap();
    let vacations: Vec<_> = roster.vacations_of(1).cloned().collect();
    let package = roster.get_package(1).unwrap();

    let free = free_days(jan, &vacations, package, as_of(), HOURS_PER_DAY).unwrap();
    assert_eq!(free, 15); // 20 - 5; the 2019 and future vacations are ignored
}

#[test]
fn test_free_days_partial_vacation() {
    let roster = persisted_seed();
    let kamil = roster.get_employee(2).unwrap();
    let vacations: Vec<_> = roster.vacations_of(2).cloned().collect();
    let package = roster.get_package(1).unwrap();

    let free = free_days(kamil, &vacations, package, as_of(), HOURS_PER_DAY).unwrap();
    assert_eq!(free, 19); // 4h partial rounds up to one day
}

#[test]
fn test_free_days_no_vacations_returns_full_grant() {
    let roster = persisted_seed();
    let anna = roster.get_employee(3).unwrap();
    let vacations: Vec<_> = roster.vacations_of(3).cloned().collect();
    let package = roster.get_package(1).unwrap();

    let free = free_days(anna, &vacations, package, as_of(), HOURS_PER_DAY).unwrap();
    assert_eq!(free, 20);
}

#[test]
fn test_free_days_overused_clamps_to_zero() {
    let mut roster = seed_roster();
    // A 20-day March vacation pushes Jan to 25 used days
    roster.add_record(Record::Vacation(Vacation {
        id: 5,
        employee_id: 1,
        since: date(2025, 3, 1),
        until: date(2025, 3, 20),
        partial: false,
        hours: 0,
    }));

    let jan = roster.get_employee(1).unwrap();
    let vacations: Vec<_> = roster.vacations_of(1).cloned().collect();
    let package = roster.get_package(1).unwrap();

    let free = free_days(jan, &vacations, package, as_of(), HOURS_PER_DAY).unwrap();
    assert_eq!(free, 0);
}

// ===========================================================================
// 2. Vacation requests
// ===========================================================================

#[test]
fn test_can_request_with_remaining_days() {
    let roster = persisted_seed();
    let jan = roster.get_employee(1).unwrap();
    let vacations: Vec<_> = roster.vacations_of(1).cloned().collect();
    let package = roster.get_package(1).unwrap();

    let can = can_request_vacation(jan, &vacations, package, as_of(), HOURS_PER_DAY).unwrap();
    assert!(can);
}

#[test]
fn test_cannot_request_when_grant_exhausted() {
    let mut roster = seed_roster();
    roster.add_record(Record::Vacation(Vacation {
        id: 5,
        employee_id: 1,
        since: date(2025, 3, 1),
        until: date(2025, 3, 20),
        partial: false,
        hours: 0,
    }));

    let jan = roster.get_employee(1).unwrap();
    let vacations: Vec<_> = roster.vacations_of(1).cloned().collect();
    let package = roster.get_package(1).unwrap();

    let can = can_request_vacation(jan, &vacations, package, as_of(), HOURS_PER_DAY).unwrap();
    assert!(!can);
}

#[test]
fn test_can_request_with_no_vacations_at_all() {
    let roster = persisted_seed();
    let anna = roster.get_employee(3).unwrap();
    let vacations: Vec<_> = roster.vacations_of(3).cloned().collect();
    let package = roster.get_package(1).unwrap();

    let can = can_request_vacation(anna, &vacations, package, as_of(), HOURS_PER_DAY).unwrap();
    assert!(can);
}

// ===========================================================================
// 3. Roster queries
// ===========================================================================

#[test]
fn test_dotnet_members_with_2019_vacations() {
    let roster = persisted_seed();
    let members = team_members_with_vacations_in(&roster, ".NET", 2019);
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "Jan Kowalski");
}

#[test]
fn test_used_days_report_current_year() {
    let roster = persisted_seed();
    let report = used_days_report(&roster, 2025, as_of(), HOURS_PER_DAY);
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].name, "Jan Kowalski");
    assert_eq!(report[0].used_days, 5);
    assert_eq!(report[1].name, "Kamil Nowak");
    assert_eq!(report[1].used_days, 1);
}

#[test]
fn test_teams_without_vacations_in_2019() {
    let roster = persisted_seed();
    let idle = idle_teams(&roster, 2019);
    assert_eq!(idle.len(), 1);
    assert_eq!(idle[0].name, "Java");
}
