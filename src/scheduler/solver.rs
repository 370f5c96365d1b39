use super::oracle::Oracle;
use crate::types::{Day, PlacementUnit, School, SchoolId};

/// One board slot this placement touched, recorded before the insertion so
/// a failed branch can unwind by truncation instead of a deep copy.
struct Checkpoint {
    school_id: SchoolId,
    day: Day,
    period: u32,
    len_before: usize,
}

/// Depth-first backtracking over `units` in builder-defined order. Tries
/// each owning school's days in list order, then teaching periods in
/// ascending order — the deterministic tie-break of property P9. Returns
/// `true` iff every unit found a placement; on `false` every board is back
/// to the state it had on entry (nothing partially placed leaks out).
pub fn solve(schools: &mut [School], units: &[PlacementUnit]) -> bool {
    solve_from(schools, units, 0)
}

fn solve_from(schools: &mut [School], units: &[PlacementUnit], index: usize) -> bool {
    let Some(unit) = units.get(index) else {
        return true;
    };
    let school_id = unit.school_id().clone();
    let Some(days) = schools.iter().find(|s| s.id == school_id).map(|s| s.days.clone()) else {
        return false;
    };

    for day in &days {
        let periods = schools
            .iter()
            .find(|s| s.id == school_id)
            .map(|s| s.teaching_periods(day))
            .unwrap_or_default();

        for period in periods {
            let placeable = Oracle::new(schools).can_place(unit, day, period);
            if !placeable {
                continue;
            }

            let checkpoints = place(schools, &school_id, day, period, unit);
            if solve_from(schools, units, index + 1) {
                return true;
            }
            restore(schools, &checkpoints);
        }
    }

    false
}

fn place(
    schools: &mut [School],
    school_id: &SchoolId,
    day: &Day,
    period: u32,
    unit: &PlacementUnit,
) -> Vec<Checkpoint> {
    let school = schools.iter_mut().find(|s| &s.id == school_id).expect("school exists");
    match unit {
        PlacementUnit::Single(session) => {
            let len_before = school.board.place(day.clone(), period, session.placed_at(day, period));
            vec![Checkpoint { school_id: school_id.clone(), day: day.clone(), period, len_before }]
        }
        PlacementUnit::Double(first, second) => {
            let next_period =
                school.next_teaching_period(day, period).expect("validated by the Oracle");
            let len_first = school.board.place(day.clone(), period, first.placed_at(day, period));
            let len_second =
                school.board.place(day.clone(), next_period, second.placed_at(day, next_period));
            vec![
                Checkpoint { school_id: school_id.clone(), day: day.clone(), period, len_before: len_first },
                Checkpoint {
                    school_id: school_id.clone(),
                    day: day.clone(),
                    period: next_period,
                    len_before: len_second,
                },
            ]
        }
        PlacementUnit::OptionBlock { sessions, .. } => {
            let mut first_len = None;
            for session in sessions {
                let len = school.board.place(day.clone(), period, session.placed_at(day, period));
                first_len.get_or_insert(len);
            }
            vec![Checkpoint {
                school_id: school_id.clone(),
                day: day.clone(),
                period,
                len_before: first_len.unwrap_or(0),
            }]
        }
    }
}

fn restore(schools: &mut [School], checkpoints: &[Checkpoint]) {
    for checkpoint in checkpoints {
        if let Some(school) = schools.iter_mut().find(|s| s.id == checkpoint.school_id) {
            school.board.truncate(&checkpoint.day, checkpoint.period, checkpoint.len_before);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::scheduler::build_units;
    use crate::types::{Assignment, AssignmentId, SchoolId, Teacher, TeacherId, TimeSlot, TimeSlotId};

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
    fn trivial_single_assignment_fits_as_a_double() {
        let mut school = School::new(SchoolId::from("s1"), "Test");
        school.days = vec![Day::from("Mon"), Day::from("Tue")];
        school.time_slots = vec![
            slot("p1", Some(1), "08:00-08:40", false),
            slot("p2", Some(2), "08:40-09:20", false),
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
        let units = build_units(&schools, &[teacher], &Config::default());
        assert!(solve(&mut schools, &units));
        assert_eq!(schools[0].board.sessions_at(&Day::from("Mon"), 1).len(), 1);
        assert_eq!(schools[0].board.sessions_at(&Day::from("Mon"), 2).len(), 1);
    }

    #[test]
    fn break_between_only_periods_forces_solve_failure() {
        let mut school = School::new(SchoolId::from("s1"), "Test");
        school.days = vec![Day::from("Mon")];
        school.time_slots = vec![
            slot("p1", Some(1), "08:00-08:40", false),
            slot("b1", None, "08:40-09:00", true),
            slot("p2", Some(2), "09:00-09:40", false),
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
        let units = build_units(&schools, &[teacher], &Config::default());
        assert!(!solve(&mut schools, &units));
        assert!(schools[0].board.is_empty());
    }
}
