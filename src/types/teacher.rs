use super::{AssignmentId, Day, SchoolId, TeacherId};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A teacher's commitment to teach a subject to a cross-product of
/// grades × arms, at a given weekly period count, in one school.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub school_id: SchoolId,
    pub subject: String,
    pub grades: Vec<String>,
    /// Subdivisions of a grade (e.g. "A", "B"). Empty means the grade
    /// itself is the class.
    #[serde(default)]
    pub arms: Vec<String>,
    /// 1..=10
    pub periods_per_week: u32,
    /// Assignments sharing an `option_group` tag (and school, and
    /// optionally grade — see `Config::senior_secondary`) are taught
    /// simultaneously as an OptionBlock.
    #[serde(default)]
    pub option_group: Option<String>,
    /// Explicit day whitelist. `None` means any of the school's days.
    #[serde(default)]
    pub allowed_days: Option<Vec<Day>>,
}

impl Assignment {
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty() || self.periods_per_week == 0
    }

    /// `(grade, arm)` pairs this assignment expands to. One pair with a
    /// blank arm if `arms` is empty.
    pub fn class_pairs(&self) -> Vec<(String, String)> {
        if self.arms.is_empty() {
            self.grades
                .iter()
                .map(|g| (g.clone(), String::new()))
                .collect()
        } else {
            self.grades
                .iter()
                .cartesian_product(self.arms.iter())
                .map(|(g, a)| (g.clone(), a.clone()))
                .collect()
        }
    }
}

/// Trims a "{grade} {arm}" combination into a display class name.
pub fn class_name(grade: &str, arm: &str) -> String {
    format!("{} {}", grade, arm).trim().to_string()
}

/// Teachers are global: they carry assignments across every school they
/// teach in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub assignments: Vec<Assignment>,
}

impl Teacher {
    pub fn assignments_for_school(&self, school_id: &SchoolId) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(move |a| &a.school_id == school_id)
    }
}
