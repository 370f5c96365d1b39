mod builder;
mod materializer;
mod oracle;
mod solver;
mod sports_injector;

pub use builder::*;
pub use materializer::*;
pub use oracle::*;
pub use solver::*;
pub use sports_injector::*;

use crate::config::Config;
use crate::error::SchedulerError;
use crate::types::{School, SchoolId, Teacher};
use indicatif::{ProgressBar, ProgressStyle};

/// Runs the whole pipeline across every school: clear boards, materialise
/// locked sessions, build placement units, search. There is exactly one
/// search phase here — unlike the optimizer pipeline this replaces, unit
/// building and the backtracking search aren't independently retryable
/// stages, so the progress bar marks message changes rather than percentage.
///
/// On failure every school's board is left cleared (per-school state after
/// a failed cross-school search isn't meaningful to keep around) and the
/// initiating school (or the first school, if none was active) carries the
/// error message.
pub fn generate(
    schools: &mut [School],
    teachers: &[Teacher],
    config: &Config,
    initiating: Option<&SchoolId>,
) -> crate::Result<()> {
    let progress = ProgressBar::new(100);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );

    progress.set_message("Clearing boards...");
    for school in schools.iter_mut() {
        school.clear_board();
    }

    progress.set_message("Materialising locked sessions...");
    for school in schools.iter_mut() {
        materialize(school);
    }

    progress.set_message("Building placement units...");
    let units = build_units(schools, teachers, config);

    progress.set_message("Searching for a valid timetable...");
    let solved = solve(schools, &units);

    if !solved {
        for school in schools.iter_mut() {
            school.clear_board();
        }
        let target = initiating
            .and_then(|id| schools.iter_mut().find(|s| &s.id == id))
            .or_else(|| schools.first_mut());
        let school_name = target.as_ref().map(|s| s.name.clone()).unwrap_or_default();
        if let Some(school) = target {
            school.error =
                Some(format!("could not generate a valid timetable for '{school_name}'"));
        }
        progress.finish_and_clear();
        return Err(SchedulerError::SolveFailure { school: school_name }.into());
    }

    if config.auto_inject_friday_sports {
        progress.set_message("Injecting Friday sports...");
        for school in schools.iter_mut() {
            inject_friday_sports(school, config);
        }
    }

    progress.set_message("Detecting conflicts...");
    for school in schools.iter_mut() {
        school.conflicts = crate::conflict::detect(school);
    }

    progress.finish_with_message("Timetable generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Assignment, AssignmentId, Day, SchoolId, TeacherId, TimeSlot, TimeSlotId};

    fn slot(id: &str, period: Option<u32>, range: &str, is_break: bool) -> TimeSlot {
        TimeSlot {
            id: TimeSlotId::from(id),
            period,
            time_range: range.to_string(),
            is_break,
            label: None,
            days: None,
        }
    }

    #[test]
    fn generate_succeeds_and_populates_the_initiating_school() {
        let mut school = School::new(SchoolId::from("s1"), "Test");
        school.days = vec![Day::from("Mon")];
        school.time_slots = vec![slot("p1", Some(1), "08:00-08:40", false)];
        let teacher = Teacher {
            id: TeacherId::from("t1"),
            name: "Asha".into(),
            assignments: vec![Assignment {
                id: AssignmentId::from("a1"),
                school_id: school.id.clone(),
                subject: "Math".into(),
                grades: vec!["Grade 7".into()],
                arms: vec![],
                periods_per_week: 1,
                option_group: None,
                allowed_days: None,
            }],
        };
        let mut schools = vec![school];
        let config = Config::default();
        let result = generate(&mut schools, &[teacher], &config, Some(&SchoolId::from("s1")));
        assert!(result.is_ok());
        assert_eq!(schools[0].board.sessions_at(&Day::from("Mon"), 1).len(), 1);
        assert!(schools[0].error.is_none());
    }

    #[test]
    fn generate_reports_failure_on_the_initiating_school_and_clears_boards() {
        let mut school = School::new(SchoolId::from("s1"), "Test");
        school.days = vec![Day::from("Mon")];
        school.time_slots = vec![
            slot("p1", Some(1), "08:00-08:40", false),
            slot("b1", None, "08:40-09:00", true),
        ];
        let teacher = Teacher {
            id: TeacherId::from("t1"),
            name: "Asha".into(),
            assignments: vec![Assignment {
                id: AssignmentId::from("a1"),
                school_id: school.id.clone(),
                subject: "Math".into(),
                grades: vec!["Grade 7".into()],
                arms: vec![],
                periods_per_week: 2,
                option_group: None,
                allowed_days: None,
            }],
        };
        let mut schools = vec![school];
        let config = Config::default();
        let result = generate(&mut schools, &[teacher], &config, Some(&SchoolId::from("s1")));
        assert!(result.is_err());
        assert!(schools[0].board.is_empty());
        assert!(schools[0].error.is_some());
    }
}
