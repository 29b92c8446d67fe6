pub mod check;
pub mod config;
pub mod hierarchy;
pub mod parser;
pub mod query;
pub mod roster;
pub mod vacations;

pub use check::{CheckResult, check_all, check_cycles, check_orphans};
pub use config::Config;
pub use hierarchy::{
    HierarchyError, HierarchyResolver, HierarchySnapshot, StructureEntry, resolve_structures,
};
pub use parser::{ParseError, load_roster, save_roster};
pub use query::{UsedDaysEntry, idle_teams, team_members_with_vacations_in, used_days_report};
pub use roster::{Employee, Record, RecordKind, Roster, Team, Vacation, VacationPackage};
pub use vacations::{HOURS_PER_DAY, VacationError, can_request_vacation, free_days, used_days};
