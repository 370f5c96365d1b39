use crate::types::{ClassScope, LockedDay, School, TimetableSession};

/// Places one synthetic, already-locked session per concrete `LockedSession`
/// onto `school`'s board. Masters (`is_weekly_master`, `day == AllWeek`) are
/// hidden records used only to group their already-persisted per-day
/// children (see `Store::add_locked_session`) and are skipped here.
pub fn materialize(school: &mut School) {
    let entries: Vec<_> = school
        .locked_sessions
        .iter()
        .filter(|l| !l.is_weekly_master)
        .cloned()
        .collect();

    for entry in entries {
        let LockedDay::Specific(day) = entry.day.clone() else {
            continue;
        };
        let classes = match &entry.class_name {
            ClassScope::All => vec!["all".to_string()],
            ClassScope::Specific(name) => vec![name.clone()],
        };
        let session = TimetableSession {
            id: crate::types::SessionId::from(entry.id.0.clone()),
            subject: entry.activity_name.clone(),
            actual_subject: None,
            teacher_name: String::new(),
            teacher_id: None,
            class_name: classes[0].clone(),
            classes,
            day: day.clone(),
            period: entry.period,
            part: None,
            option_group: None,
            is_locked: true,
            school_id: school.id.clone(),
            allowed_days: None,
        };
        school.board.place(day, entry.period, session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassScope, Day, LockedDay, LockedSession, LockedSessionId, SchoolId};

    #[test]
    fn places_one_session_per_concrete_entry_and_skips_masters() {
        let mut school = School::new(SchoolId::from("s1"), "Test");
        school.locked_sessions = vec![
            LockedSession {
                id: LockedSessionId::from("locked-1"),
                school_id: school.id.clone(),
                activity_name: "Assembly".into(),
                day: LockedDay::AllWeek,
                period: 1,
                class_name: ClassScope::All,
                is_weekly_master: true,
                weekly_id: None,
            },
            LockedSession {
                id: LockedSessionId::from("locked-1-Mon"),
                school_id: school.id.clone(),
                activity_name: "Assembly".into(),
                day: LockedDay::Specific(Day::from("Mon")),
                period: 1,
                class_name: ClassScope::All,
                is_weekly_master: false,
                weekly_id: Some(LockedSessionId::from("locked-1")),
            },
        ];
        materialize(&mut school);
        let sessions = school.board.sessions_at(&Day::from("Mon"), 1);
        assert_eq!(sessions.len(), 1);
        assert!(sessions[0].is_locked);
        assert_eq!(sessions[0].classes, vec!["all".to_string()]);
    }
}
