use crate::error::Result;
use crate::types::Store;
use std::collections::HashSet;

/// Validation result with collected errors and warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Checks a loaded document for duplicate ids and dangling references before
/// it's handed to the scheduler. Returns `Err` (bundling every error found)
/// rather than a single first-failure, so a caller can report everything
/// wrong with a file in one pass.
pub fn validate_store(store: &Store) -> Result<ValidationResult> {
    let mut result = ValidationResult::default();

    let school_ids: HashSet<_> = store.schools.iter().map(|s| &s.id).collect();
    check_duplicate_school_ids(store, &mut result);
    check_duplicate_teacher_ids(store, &mut result);

    for teacher in &store.all_teachers {
        let mut seen_assignment_ids = HashSet::new();
        for assignment in &teacher.assignments {
            if !seen_assignment_ids.insert(&assignment.id) {
                result.add_error(format!(
                    "Teacher '{}' has duplicate assignment id '{}'",
                    teacher.id, assignment.id
                ));
            }
            if !school_ids.contains(&assignment.school_id) {
                result.add_error(format!(
                    "Teacher '{}' assignment '{}' references unknown school '{}'",
                    teacher.id, assignment.id, assignment.school_id
                ));
            }
        }
    }

    for school in &store.schools {
        for locked in &school.locked_sessions {
            if locked.school_id != school.id {
                result.add_error(format!(
                    "Locked session '{}' is filed under school '{}' but carries school id '{}'",
                    locked.id, school.id, locked.school_id
                ));
            }
        }
        if school.days.is_empty() {
            result.add_warning(format!("School '{}' has no days configured", school.name));
        }
    }

    if let Some(active) = &store.active_school_id {
        if !school_ids.contains(active) {
            result.add_error(format!("active_school_id '{active}' does not name a known school"));
        }
    }

    if !result.is_valid() {
        return Err(anyhow::anyhow!(
            "Validation failed with {} errors:\n{}",
            result.errors.len(),
            result.errors.join("\n")
        ));
    }

    Ok(result)
}

fn check_duplicate_school_ids(store: &Store, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for school in &store.schools {
        if !seen.insert(&school.id) {
            result.add_error(format!("Duplicate school ID: '{}'", school.id));
        }
    }
}

fn check_duplicate_teacher_ids(store: &Store, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for teacher in &store.all_teachers {
        if !seen.insert(&teacher.id) {
            result.add_error(format!("Duplicate teacher ID: '{}'", teacher.id));
        }
    }
}
