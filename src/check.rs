use crate::roster::Roster;
use serde::Serialize;
use std::collections::HashSet;

/// Result of checking the roster for issues
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub cycles: Vec<Vec<u32>>,
    pub orphan_refs: Vec<OrphanRef>,
    pub invalid_ranges: Vec<InvalidRange>,
    pub ok: bool,
}

/// A reference to a non-existent record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanRef {
    pub from: u32,
    pub to: u32,
    pub relation: String,
}

/// A vacation whose end date precedes its start date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidRange {
    pub vacation_id: u32,
}

/// Check for cycles in the reporting hierarchy
pub fn check_cycles(roster: &Roster) -> Vec<Vec<u32>> {
    let mut cycles = Vec::new();
    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();
    let mut path = Vec::new();

    let mut ids: Vec<u32> = roster.employees().map(|e| e.id).collect();
    ids.sort_unstable();

    for id in ids {
        if !visited.contains(&id) {
            find_cycles(roster, id, &mut visited, &mut rec_stack, &mut path, &mut cycles);
        }
    }

    cycles
}

fn find_cycles(
    roster: &Roster,
    id: u32,
    visited: &mut HashSet<u32>,
    rec_stack: &mut HashSet<u32>,
    path: &mut Vec<u32>,
    cycles: &mut Vec<Vec<u32>>,
) {
    visited.insert(id);
    rec_stack.insert(id);
    path.push(id);

    // Follow the (single) superior edge
    if let Some(superior_id) = roster.get_employee(id).and_then(|e| e.superior_id) {
        if roster.get_employee(superior_id).is_some() {
            if !visited.contains(&superior_id) {
                find_cycles(roster, superior_id, visited, rec_stack, path, cycles);
            } else if rec_stack.contains(&superior_id) {
                // Found a cycle - extract the cycle from path
                if let Some(pos) = path.iter().position(|x| *x == superior_id) {
                    let cycle: Vec<u32> = path[pos..].to_vec();
                    cycles.push(cycle);
                }
            }
        }
    }

    path.pop();
    rec_stack.remove(&id);
}

/// Check for references to non-existent records
pub fn check_orphans(roster: &Roster) -> Vec<OrphanRef> {
    let mut orphans = Vec::new();

    let mut employees: Vec<_> = roster.employees().collect();
    employees.sort_by_key(|e| e.id);

    for employee in employees {
        if let Some(superior_id) = employee.superior_id
            && roster.get_employee(superior_id).is_none()
        {
            orphans.push(OrphanRef {
                from: employee.id,
                to: superior_id,
                relation: "superior".to_string(),
            });
        }

        if let Some(team_id) = employee.team_id
            && roster.get_team(team_id).is_none()
        {
            orphans.push(OrphanRef {
                from: employee.id,
                to: team_id,
                relation: "team".to_string(),
            });
        }

        if let Some(package_id) = employee.package_id
            && roster.get_package(package_id).is_none()
        {
            orphans.push(OrphanRef {
                from: employee.id,
                to: package_id,
                relation: "package".to_string(),
            });
        }
    }

    let mut vacations: Vec<_> = roster.vacations().collect();
    vacations.sort_by_key(|v| v.id);

    for vacation in vacations {
        if roster.get_employee(vacation.employee_id).is_none() {
            orphans.push(OrphanRef {
                from: vacation.id,
                to: vacation.employee_id,
                relation: "vacation-employee".to_string(),
            });
        }
    }

    orphans
}

/// Check for vacations whose date range is inverted
pub fn check_ranges(roster: &Roster) -> Vec<InvalidRange> {
    let mut invalid: Vec<InvalidRange> = roster
        .vacations()
        .filter(|v| v.until < v.since)
        .map(|v| InvalidRange { vacation_id: v.id })
        .collect();
    invalid.sort_by_key(|r| r.vacation_id);
    invalid
}

/// Run all checks and return a summary
pub fn check_all(roster: &Roster) -> CheckResult {
    let cycles = check_cycles(roster);
    let orphan_refs = check_orphans(roster);
    let invalid_ranges = check_ranges(roster);

    // Orphan references are tolerated by the resolver (the chain just ends
    // there) - cycles and inverted ranges make the roster invalid
    let ok = cycles.is_empty() && invalid_ranges.is_empty();

    CheckResult {
        cycles,
        orphan_refs,
        invalid_ranges,
        ok,
    }
}
