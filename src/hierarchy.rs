use crate::roster::Employee;
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// The reporting chain revisited an employee during a single walk.
    /// Fatal for the whole resolution pass: the input data must be fixed.
    #[error("cycle detected in reporting chain at employee {at} (walk started from {start})")]
    CycleDetected { start: u32, at: u32 },
}

/// A derived reporting edge: `superior_id` is `row` steps above `employee_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructureEntry {
    pub employee_id: u32,
    pub superior_id: u32,
    pub row: u32,
}

/// Immutable result of one resolution pass: employee -> superior -> row.
///
/// Snapshots are read-only; lookups never traverse. A new pass produces a
/// whole new snapshot rather than mutating an existing one, so a snapshot
/// handed to a caller stays valid no matter what happens later.
#[derive(Debug, Clone, Default)]
pub struct HierarchySnapshot {
    rows: HashMap<u32, HashMap<u32, u32>>,
}

impl HierarchySnapshot {
    /// Distance from `employee_id` up to `superior_id`, if the pair was
    /// recorded by the pass that built this snapshot. `None` means the two
    /// are not in a known ancestor relation - never a sentinel value.
    pub fn row(&self, employee_id: u32, superior_id: u32) -> Option<u32> {
        self.rows.get(&employee_id)?.get(&superior_id).copied()
    }

    /// Number of recorded (employee, superior) pairs
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolve ancestor chains for every employee in the collection.
///
/// For each employee the superior chain is walked breadth-first with a
/// FIFO queue seeded at (employee, row 0) and a visited set local to that
/// walk. Every resolvable hop emits one `StructureEntry` with row >= 1
/// (the direct superior is row 1). A chain ends at an employee with no
/// superior, or at a superior id absent from the collection - a dangling
/// reference terminates the chain without emitting an edge.
///
/// Revisiting any id within one walk (including the starting employee)
/// means the shared input contains a cycle; the whole pass fails and no
/// partial results are returned. Distances are intentionally recomputed
/// per starting employee: the same ancestor sits at different rows in
/// different chains.
pub fn resolve_structures(
    employees: &[Employee],
) -> Result<(Vec<StructureEntry>, HierarchySnapshot), HierarchyError> {
    let by_id: HashMap<u32, &Employee> = employees.iter().map(|e| (e.id, e)).collect();
    let mut entries = Vec::new();
    let mut rows: HashMap<u32, HashMap<u32, u32>> = HashMap::new();

    for employee in employees {
        let mut visited: HashSet<u32> = HashSet::new();
        let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
        queue.push_back((employee.id, 0));

        // Each iteration either fails or marks a previously unseen id, so a
        // walk is bounded by the size of the input even on malformed data.
        while let Some((current_id, row)) = queue.pop_front() {
            if !visited.insert(current_id) {
                return Err(HierarchyError::CycleDetected {
                    start: employee.id,
                    at: current_id,
                });
            }

            let Some(current) = by_id.get(&current_id) else {
                continue;
            };
            let Some(superior_id) = current.superior_id else {
                continue;
            };
            if !by_id.contains_key(&superior_id) {
                // Dangling superior reference: chain ends here, no edge
                continue;
            }

            let new_row = row + 1;
            entries.push(StructureEntry {
                employee_id: employee.id,
                superior_id,
                row: new_row,
            });
            rows.entry(employee.id).or_default().insert(superior_id, new_row);
            queue.push_back((superior_id, new_row));
        }
    }

    Ok((entries, HierarchySnapshot { rows }))
}

/// Resolves reporting hierarchies and answers row lookups against the most
/// recent successful pass.
///
/// `resolve` builds a fresh snapshot and swaps it in only on success; a
/// failed pass leaves the previous snapshot untouched, so lookups never
/// observe half-built state.
#[derive(Debug, Default)]
pub struct HierarchyResolver {
    snapshot: HierarchySnapshot,
}

impl HierarchyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a resolution pass and publish its snapshot, replacing the
    /// previous one wholesale. Returns every derived structure entry.
    pub fn resolve(
        &mut self,
        employees: &[Employee],
    ) -> Result<Vec<StructureEntry>, HierarchyError> {
        let (entries, snapshot) = resolve_structures(employees)?;
        self.snapshot = snapshot;
        Ok(entries)
    }

    /// Row of `superior_id` above `employee_id` per the last successful
    /// pass, or `None` if no such relation is recorded. O(1), no traversal.
    pub fn superior_row(&self, employee_id: u32, superior_id: u32) -> Option<u32> {
        self.snapshot.row(employee_id, superior_id)
    }

    /// The currently published snapshot
    pub fn snapshot(&self) -> &HierarchySnapshot {
        &self.snapshot
    }
}
