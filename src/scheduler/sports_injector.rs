use crate::config::Config;
use crate::types::{School, SessionId, TimetableSession};

/// Opt-in post-processor (`Config::auto_inject_friday_sports`): pins a
/// whole-school "Sports" session into the last teaching period on Friday
/// for senior-secondary schools. Runs after a successful search and never
/// participates in backtracking — a slot that's already occupied is left
/// alone rather than forcing a re-search.
pub fn inject_friday_sports(school: &mut School, _config: &Config) {
    if !school.name_suggests_secondary() {
        return;
    }
    let Some(friday) =
        school.days.iter().find(|d| d.0.eq_ignore_ascii_case("friday")).cloned()
    else {
        return;
    };
    let Some(&last_period) = school.teaching_periods(&friday).last() else {
        return;
    };
    if !school.board.sessions_at(&friday, last_period).is_empty() {
        return;
    }

    let session = TimetableSession {
        id: SessionId::from(format!("sports-{}", school.id)),
        subject: "Sports".to_string(),
        actual_subject: None,
        teacher_name: String::new(),
        teacher_id: None,
        class_name: "all".to_string(),
        classes: vec!["all".to_string()],
        day: friday.clone(),
        period: last_period,
        part: None,
        option_group: None,
        is_locked: true,
        school_id: school.id.clone(),
        allowed_days: None,
    };
    school.board.place(friday, last_period, session);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Day, SchoolId, TimeSlot, TimeSlotId};

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
    fn injects_sports_into_last_friday_period_for_senior_secondary() {
        let mut school = School::new(SchoolId::from("s1"), "Example Secondary School");
        school.days = vec![Day::from("Monday"), Day::from("Friday")];
        school.time_slots = vec![
            slot("p1", Some(1), "08:00-08:40", false),
            slot("p2", Some(2), "08:40-09:20", false),
        ];
        let config = Config::default();
        inject_friday_sports(&mut school, &config);
        let sessions = school.board.sessions_at(&Day::from("Friday"), 2);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].subject, "Sports");
    }

    #[test]
    fn skips_an_already_occupied_slot() {
        let mut school = School::new(SchoolId::from("s1"), "Example Secondary School");
        school.days = vec![Day::from("Friday")];
        school.time_slots = vec![slot("p1", Some(1), "08:00-08:40", false)];
        school.board.place(
            Day::from("Friday"),
            1,
            TimetableSession {
                id: SessionId::from("existing"),
                subject: "Math".into(),
                actual_subject: None,
                teacher_name: "T".into(),
                teacher_id: None,
                class_name: "Grade 12".into(),
                classes: vec!["Grade 12".into()],
                day: Day::from("Friday"),
                period: 1,
                part: None,
                option_group: None,
                is_locked: false,
                school_id: school.id.clone(),
                allowed_days: None,
            },
        );
        let config = Config::default();
        inject_friday_sports(&mut school, &config);
        let sessions = school.board.sessions_at(&Day::from("Friday"), 1);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, SessionId::from("existing"));
    }
}
