use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An employee in the org roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    /// Team the employee belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u32>,
    /// Vacation package assigned to the employee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<u32>,
    /// Direct superior in the reporting chain (at most one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superior_id: Option<u32>,
}

/// A team grouping employees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Team {
    pub id: u32,
    pub name: String,
}

/// A vacation package: days granted for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VacationPackage {
    pub id: u32,
    pub name: String,
    pub year: i32,
    pub granted_days: u32,
}

/// A recorded vacation (full-day range, or a partial day measured in hours)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacation {
    pub id: u32,
    pub employee_id: u32,
    pub since: NaiveDate,
    pub until: NaiveDate,
    /// Partial-day vacation: counted by hours instead of the date range
    #[serde(default)]
    pub partial: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub hours: u32,
}

fn is_zero(val: &u32) -> bool {
    *val == 0
}

/// Record kind discriminator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Employee,
    Team,
    Package,
    Vacation,
}

/// A record in the roster file (employee, team, package, or vacation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Employee(Employee),
    Team(Team),
    Package(VacationPackage),
    Vacation(Vacation),
}

impl Record {
    pub fn id(&self) -> u32 {
        match self {
            Record::Employee(e) => e.id,
            Record::Team(t) => t.id,
            Record::Package(p) => p.id,
            Record::Vacation(v) => v.id,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Employee(_) => RecordKind::Employee,
            Record::Team(_) => RecordKind::Team,
            Record::Package(_) => RecordKind::Package,
            Record::Vacation(_) => RecordKind::Vacation,
        }
    }
}

/// The roster: employees, teams, vacation packages, and vacations.
///
/// Ids are unique within each record kind (an employee and a team may share
/// the numeric id 1). Records are kept in per-kind maps for that reason.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: HashMap<u32, Employee>,
    teams: HashMap<u32, Team>,
    packages: HashMap<u32, VacationPackage>,
    vacations: HashMap<u32, Vacation>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        match record {
            Record::Employee(e) => {
                self.employees.insert(e.id, e);
            }
            Record::Team(t) => {
                self.teams.insert(t.id, t);
            }
            Record::Package(p) => {
                self.packages.insert(p.id, p);
            }
            Record::Vacation(v) => {
                self.vacations.insert(v.id, v);
            }
        }
    }

    pub fn get_employee(&self, id: u32) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn get_employee_mut(&mut self, id: u32) -> Option<&mut Employee> {
        self.employees.get_mut(&id)
    }

    pub fn get_team(&self, id: u32) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn get_package(&self, id: u32) -> Option<&VacationPackage> {
        self.packages.get(&id)
    }

    pub fn get_vacation(&self, id: u32) -> Option<&Vacation> {
        self.vacations.get(&id)
    }

    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn packages(&self) -> impl Iterator<Item = &VacationPackage> {
        self.packages.values()
    }

    pub fn vacations(&self) -> impl Iterator<Item = &Vacation> {
        self.vacations.values()
    }

    /// All vacations recorded for one employee
    pub fn vacations_of(&self, employee_id: u32) -> impl Iterator<Item = &Vacation> {
        self.vacations
            .values()
            .filter(move |v| v.employee_id == employee_id)
    }

    /// All employees belonging to one team
    pub fn members_of(&self, team_id: u32) -> impl Iterator<Item = &Employee> {
        self.employees
            .values()
            .filter(move |e| e.team_id == Some(team_id))
    }

    /// Look up a team by its display name
    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.values().find(|t| t.name == name)
    }

    /// All records, for serialization (employees, teams, packages, vacations)
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.employees
            .values()
            .cloned()
            .map(Record::Employee)
            .chain(self.teams.values().cloned().map(Record::Team))
            .chain(self.packages.values().cloned().map(Record::Package))
            .chain(self.vacations.values().cloned().map(Record::Vacation))
    }

    /// Total number of records across all kinds
    pub fn len(&self) -> usize {
        self.employees.len() + self.teams.len() + self.packages.len() + self.vacations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Next unused id for a record kind (max + 1, starting at 1)
    pub fn next_id(&self, kind: RecordKind) -> u32 {
        let max = match kind {
            RecordKind::Employee => self.employees.keys().max(),
            RecordKind::Team => self.teams.keys().max(),
            RecordKind::Package => self.packages.keys().max(),
            RecordKind::Vacation => self.vacations.keys().max(),
        };
        max.copied().unwrap_or(0) + 1
    }
}
