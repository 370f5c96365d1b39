use crate::types::{overlaps, parse_range, Day, PlacementUnit, School, TimetableSession};

/// Answers "is this unit placeable at (school, day, period)?" against every
/// school's board. Read-only: never mutates a board. The solver is
/// responsible for placing a unit only after every one of its sessions
/// passes here, and for placing them all atomically.
pub struct Oracle<'a> {
    schools: &'a [School],
}

impl<'a> Oracle<'a> {
    pub fn new(schools: &'a [School]) -> Self {
        Self { schools }
    }

    fn school(&self, id: &crate::types::SchoolId) -> Option<&School> {
        self.schools.iter().find(|s| &s.id == id)
    }

    pub fn can_place(&self, unit: &PlacementUnit, day: &Day, period: u32) -> bool {
        match unit {
            PlacementUnit::Single(s) => self.fits_rules_1_to_4(s, day, period),
            PlacementUnit::Double(first, second) => {
                if !self.fits_rules_1_to_4(first, day, period) {
                    return false;
                }
                let Some(school) = self.school(&first.school_id) else {
                    return false;
                };
                let Some(next_period) = school.next_teaching_period(day, period) else {
                    return false;
                };
                self.fits_rules_1_to_4(second, day, next_period)
            }
            PlacementUnit::OptionBlock { sessions, .. } => {
                sessions.iter().all(|s| self.fits_rules_1_to_4(s, day, period))
            }
        }
    }

    /// Rules 1–4 of the Constraint Oracle, evaluated for one session against
    /// the board state as it currently stands (a block's own sibling
    /// sessions are never on the board yet when this runs, so rules 1–2
    /// naturally never compare a session against its own unplaced block).
    fn fits_rules_1_to_4(&self, session: &TimetableSession, day: &Day, period: u32) -> bool {
        let Some(school) = self.school(&session.school_id) else {
            return false;
        };

        // Rule 1: slot-level class clash.
        let occupying = school.board.sessions_at(day, period);
        if occupying.iter().any(|existing| {
            existing.classes.iter().any(|c| c == "all")
                || existing.classes.iter().any(|c| session.classes.contains(c))
        }) {
            return false;
        }

        // Rule 2: same class, same day, same subject already placed.
        let target_subject = session.uniqueness_subject();
        let day_clash = school
            .board
            .slots()
            .filter(|(d, _, _)| *d == day)
            .flat_map(|(_, _, sessions)| sessions.iter())
            .any(|existing| {
                !existing.is_locked
                    && existing.uniqueness_subject() == target_subject
                    && existing.classes.iter().any(|c| session.classes.contains(c))
            });
        if day_clash {
            return false;
        }

        // Rule 3: teacher wall-clock clash, across every school. A malformed
        // time range makes this slot unusable regardless of clashes.
        let Some(candidate_range) = school
            .time_slot_for_period(period)
            .and_then(|slot| parse_range(&slot.time_range))
        else {
            return false;
        };
        if let Some(teacher_id) = &session.teacher_id {
            for other_school in self.schools {
                for (other_day, other_period, sessions) in other_school.board.slots() {
                    if other_day != day {
                        continue;
                    }
                    for existing in sessions {
                        if existing.is_locked || existing.teacher_id.as_ref() != Some(teacher_id) {
                            continue;
                        }
                        let Some(existing_range) = other_school
                            .time_slot_for_period(other_period)
                            .and_then(|slot| parse_range(&slot.time_range))
                        else {
                            return false;
                        };
                        if overlaps(&candidate_range, &existing_range) {
                            return false;
                        }
                    }
                }
            }
        }

        // Rule 4: explicit day whitelist.
        if let Some(allowed) = &session.allowed_days {
            if !allowed.contains(day) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DoublePart, SchoolId, SessionId, TeacherId, TimeSlot, TimeSlotId};

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

    fn session(id: &str, teacher: &str, class: &str, part: Option<DoublePart>, school_id: &str) -> TimetableSession {
        TimetableSession {
            id: SessionId::from(id),
            subject: "Math".into(),
            actual_subject: None,
            teacher_name: teacher.into(),
            teacher_id: Some(TeacherId::from(teacher)),
            class_name: class.into(),
            classes: vec![class.into()],
            day: Day::from(""),
            period: 0,
            part,
            option_group: None,
            is_locked: false,
            school_id: SchoolId::from(school_id),
            allowed_days: None,
        }
    }

    #[test]
    fn double_rejected_when_break_sits_between_periods() {
        let mut school = School::new(SchoolId::from("s1"), "Test");
        school.days = vec![Day::from("Mon")];
        school.time_slots = vec![
            slot("p1", Some(1), "08:00-08:40", false),
            slot("b1", None, "08:40-09:00", true),
            slot("p2", Some(2), "09:00-09:40", false),
        ];
        let schools = vec![school];
        let oracle = Oracle::new(&schools);
        let first = session("a", "T", "Grade 7", Some(DoublePart::First), "s1");
        let second = session("a", "T", "Grade 7", Some(DoublePart::Second), "s1");
        let unit = PlacementUnit::Double(first, second);
        assert!(!oracle.can_place(&unit, &Day::from("Mon"), 1));
    }

    #[test]
    fn cross_school_teacher_overlap_is_rejected() {
        let mut school_a = School::new(SchoolId::from("a"), "School A");
        school_a.days = vec![Day::from("Mon")];
        school_a.time_slots = vec![slot("p1", Some(1), "08:00-08:40", false)];
        school_a.board.place(
            Day::from("Mon"),
            1,
            session("existing", "T", "Grade 7", None, "a"),
        );

        let mut school_b = School::new(SchoolId::from("b"), "School B");
        school_b.days = vec![Day::from("Mon")];
        school_b.time_slots = vec![slot("p1", Some(1), "08:20-09:00", false)];

        let schools = vec![school_a, school_b];
        let oracle = Oracle::new(&schools);
        let candidate = PlacementUnit::Single(session("new", "T", "Grade 8", None, "b"));
        assert!(!oracle.can_place(&candidate, &Day::from("Mon"), 1));
    }

    #[test]
    fn non_overlapping_cross_school_times_are_allowed() {
        let mut school_a = School::new(SchoolId::from("a"), "School A");
        school_a.days = vec![Day::from("Mon")];
        school_a.time_slots = vec![slot("p1", Some(1), "08:00-08:40", false)];
        school_a.board.place(
            Day::from("Mon"),
            1,
            session("existing", "T", "Grade 7", None, "a"),
        );

        let mut school_b = School::new(SchoolId::from("b"), "School B");
        school_b.days = vec![Day::from("Mon")];
        school_b.time_slots = vec![slot("p1", Some(1), "08:40-09:20", false)];

        let schools = vec![school_a, school_b];
        let oracle = Oracle::new(&schools);
        let candidate = PlacementUnit::Single(session("new", "T", "Grade 8", None, "b"));
        assert!(oracle.can_place(&candidate, &Day::from("Mon"), 1));
    }
}
