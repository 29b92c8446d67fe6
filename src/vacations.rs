//! Vacation-day accounting: used days, free days, and request eligibility.
//!
//! Day arithmetic only looks at vacations that have already concluded
//! relative to the evaluation date. Partial-day vacations are measured in
//! hours and rounded up to whole days.

use crate::roster::{Employee, Vacation, VacationPackage};
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Default conversion for partial-day vacations
pub const HOURS_PER_DAY: u32 = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VacationError {
    #[error("vacation package {package_id} is for year {package_year}, not {current_year}")]
    PackageYearMismatch {
        package_id: u32,
        package_year: i32,
        current_year: i32,
    },
    #[error("employee {employee_id} is not assigned vacation package {package_id}")]
    PackageMismatch { employee_id: u32, package_id: u32 },
}

/// Days of vacation the employee has used in `year`, counting only
/// vacations concluded before `as_of`. Vacations belonging to other
/// employees are ignored regardless of what the caller passes in.
pub fn used_days<'a>(
    employee_id: u32,
    vacations: impl IntoIterator<Item = &'a Vacation>,
    year: i32,
    as_of: NaiveDate,
    hours_per_day: u32,
) -> u32 {
    vacations
        .into_iter()
        .filter(|v| v.employee_id == employee_id && v.since.year() == year && v.until < as_of)
        .map(|v| {
            if v.partial {
                v.hours.div_ceil(hours_per_day)
            } else {
                ((v.until - v.since).num_days() + 1).max(0) as u32
            }
        })
        .sum()
}

/// Vacation days still free for the employee under the given package,
/// evaluated at `as_of`. The package must be for the evaluation year and
/// must be the one assigned to the employee. Never negative.
pub fn free_days<'a>(
    employee: &Employee,
    vacations: impl IntoIterator<Item = &'a Vacation>,
    package: &VacationPackage,
    as_of: NaiveDate,
    hours_per_day: u32,
) -> Result<u32, VacationError> {
    if package.year != as_of.year() {
        return Err(VacationError::PackageYearMismatch {
            package_id: package.id,
            package_year: package.year,
            current_year: as_of.year(),
        });
    }
    if employee.package_id != Some(package.id) {
        return Err(VacationError::PackageMismatch {
            employee_id: employee.id,
            package_id: package.id,
        });
    }

    let used = used_days(employee.id, vacations, package.year, as_of, hours_per_day);
    Ok(package.granted_days.saturating_sub(used))
}

/// Whether the employee can request another vacation: true iff at least
/// one free day remains under the package.
pub fn can_request_vacation<'a>(
    employee: &Employee,
    vacations: impl IntoIterator<Item = &'a Vacation>,
    package: &VacationPackage,
    as_of: NaiveDate,
    hours_per_day: u32,
) -> Result<bool, VacationError> {
    let free = free_days(employee, vacations, package, as_of, hours_per_day)?;
    Ok(free > 0)
}
