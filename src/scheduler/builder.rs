use crate::config::Config;
use crate::types::{class_name, Day, DoublePart, PlacementUnit, School, SessionId, Teacher, TimetableSession};
use std::collections::HashMap;

/// Phase 1: expand every teacher's assignments into atomic placement units.
///
/// Order matters for first-fit success: OptionBlocks are the most
/// constrained (many sessions must land in one slot), then Doubles, then
/// plain Singles.
pub fn build_units(schools: &[School], teachers: &[Teacher], config: &Config) -> Vec<PlacementUnit> {
    let schools_by_id: HashMap<_, _> = schools.iter().map(|s| (s.id.clone(), s)).collect();
    let mut next_id = SessionIdMinter::default();
    let mut option_blocks = Vec::new();
    let mut doubles = Vec::new();
    let mut singles = Vec::new();

    let mut option_members: HashMap<OptionGroupKey, Vec<OptionMember>> = HashMap::new();

    for teacher in teachers {
        for assignment in &teacher.assignments {
            if assignment.is_empty() || assignment.subject == "Assembly" {
                continue;
            }

            if let Some(tag) = &assignment.option_group {
                let school_is_secondary = schools_by_id
                    .get(&assignment.school_id)
                    .map(|s| s.name_suggests_secondary())
                    .unwrap_or(false);
                for (grade, arm) in assignment.class_pairs() {
                    let senior = config.is_senior_secondary(school_is_secondary, &grade);
                    let key = OptionGroupKey {
                        school_id: assignment.school_id.clone(),
                        tag: tag.clone(),
                        grade: if senior { Some(grade.clone()) } else { None },
                    };
                    option_members.entry(key).or_default().push(OptionMember {
                        teacher_id: teacher.id.clone(),
                        teacher_name: teacher.name.clone(),
                        subject: assignment.subject.clone(),
                        school_id: assignment.school_id.clone(),
                        class_name: class_name(&grade, &arm),
                        periods_per_week: assignment.periods_per_week,
                        allowed_days: assignment.allowed_days.clone(),
                    });
                }
                continue;
            }

            for (grade, arm) in assignment.class_pairs() {
                let class = class_name(&grade, &arm);
                let mut remaining = assignment.periods_per_week;

                if config.auto_double {
                    while remaining >= 2 {
                        let id = next_id.mint();
                        let first = plain_session(
                            id.clone(),
                            assignment,
                            teacher,
                            &class,
                            Some(DoublePart::First),
                        );
                        let second =
                            plain_session(id, assignment, teacher, &class, Some(DoublePart::Second));
                        doubles.push(PlacementUnit::Double(first, second));
                        remaining -= 2;
                    }
                }

                for _ in 0..remaining {
                    let session = plain_session(next_id.mint(), assignment, teacher, &class, None);
                    singles.push(PlacementUnit::Single(session));
                }
            }
        }
    }

    for (key, members) in option_members {
        let max_periods = members.iter().map(|m| m.periods_per_week).max().unwrap_or(0);
        for block in 0..max_periods {
            let mut seen_teachers = std::collections::HashSet::new();
            let mut sessions = Vec::new();
            for member in &members {
                if member.periods_per_week <= block {
                    continue;
                }
                if !seen_teachers.insert(member.teacher_id.clone()) {
                    continue;
                }
                sessions.push(TimetableSession {
                    id: next_id.mint(),
                    subject: format!("Option {}", key.tag),
                    actual_subject: Some(member.subject.clone()),
                    teacher_name: member.teacher_name.clone(),
                    teacher_id: Some(member.teacher_id.clone()),
                    class_name: member.class_name.clone(),
                    classes: vec![member.class_name.clone()],
                    day: Day::new(""),
                    period: 0,
                    part: None,
                    option_group: Some(key.tag.clone()),
                    is_locked: false,
                    school_id: member.school_id.clone(),
                    allowed_days: member.allowed_days.clone(),
                });
            }
            if !sessions.is_empty() {
                option_blocks.push(PlacementUnit::OptionBlock {
                    sessions,
                    group_tag: key.tag.clone(),
                });
            }
        }
    }

    let mut units = Vec::with_capacity(option_blocks.len() + doubles.len() + singles.len());
    units.extend(option_blocks);
    units.extend(doubles);
    units.extend(singles);
    units
}

#[derive(Default)]
struct SessionIdMinter(u64);

impl SessionIdMinter {
    fn mint(&mut self) -> SessionId {
        self.0 += 1;
        SessionId::from(format!("sess-{}", self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct OptionGroupKey {
    school_id: crate::types::SchoolId,
    tag: String,
    grade: Option<String>,
}

struct OptionMember {
    teacher_id: crate::types::TeacherId,
    teacher_name: String,
    subject: String,
    school_id: crate::types::SchoolId,
    class_name: String,
    periods_per_week: u32,
    allowed_days: Option<Vec<Day>>,
}

fn plain_session(
    id: SessionId,
    assignment: &crate::types::Assignment,
    teacher: &Teacher,
    class: &str,
    part: Option<DoublePart>,
) -> TimetableSession {
    TimetableSession {
        id,
        subject: assignment.subject.clone(),
        actual_subject: None,
        teacher_name: teacher.name.clone(),
        teacher_id: Some(teacher.id.clone()),
        class_name: class.to_string(),
        classes: vec![class.to_string()],
        day: Day::new(""),
        period: 0,
        part,
        option_group: None,
        is_locked: false,
        school_id: assignment.school_id.clone(),
        allowed_days: assignment.allowed_days.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Assignment, AssignmentId, SchoolId, TeacherId};

    fn teacher_with(assignment: Assignment) -> Teacher {
        Teacher {
            id: TeacherId::from("t1"),
            name: "Asha".into(),
            assignments: vec![assignment],
        }
    }

    #[test]
    fn splits_even_periods_into_doubles_only() {
        let assignment = Assignment {
            id: AssignmentId::from("a1"),
            school_id: SchoolId::from("s1"),
            subject: "Math".into(),
            grades: vec!["Grade 7".into()],
            arms: vec![],
            periods_per_week: 4,
            option_group: None,
            allowed_days: None,
        };
        let units = build_units(&[], &[teacher_with(assignment)], &Config::default());
        assert_eq!(units.len(), 2);
        assert!(units.iter().all(|u| matches!(u, PlacementUnit::Double(_, _))));
    }

    #[test]
    fn odd_periods_leave_one_single() {
        let assignment = Assignment {
            id: AssignmentId::from("a1"),
            school_id: SchoolId::from("s1"),
            subject: "Math".into(),
            grades: vec!["Grade 7".into()],
            arms: vec![],
            periods_per_week: 3,
            option_group: None,
            allowed_days: None,
        };
        let units = build_units(&[], &[teacher_with(assignment)], &Config::default());
        let doubles = units.iter().filter(|u| matches!(u, PlacementUnit::Double(_, _))).count();
        let singles = units.iter().filter(|u| matches!(u, PlacementUnit::Single(_))).count();
        assert_eq!(doubles, 1);
        assert_eq!(singles, 1);
    }

    #[test]
    fn disabling_auto_double_yields_all_singles() {
        let assignment = Assignment {
            id: AssignmentId::from("a1"),
            school_id: SchoolId::from("s1"),
            subject: "Math".into(),
            grades: vec!["Grade 7".into()],
            arms: vec![],
            periods_per_week: 4,
            option_group: None,
            allowed_days: None,
        };
        let mut config = Config::default();
        config.auto_double = false;
        let units = build_units(&[], &[teacher_with(assignment)], &config);
        assert_eq!(units.len(), 4);
        assert!(units.iter().all(|u| matches!(u, PlacementUnit::Single(_))));
    }

    #[test]
    fn assembly_assignments_are_skipped() {
        let assignment = Assignment {
            id: AssignmentId::from("a1"),
            school_id: SchoolId::from("s1"),
            subject: "Assembly".into(),
            grades: vec!["Grade 7".into()],
            arms: vec![],
            periods_per_week: 1,
            option_group: None,
            allowed_days: None,
        };
        let units = build_units(&[], &[teacher_with(assignment)], &Config::default());
        assert!(units.is_empty());
    }

    #[test]
    fn option_group_members_become_blocks_sized_to_the_max() {
        let t1 = teacher_with(Assignment {
            id: AssignmentId::from("a1"),
            school_id: SchoolId::from("s1"),
            subject: "Physics".into(),
            grades: vec!["Grade 10".into()],
            arms: vec!["P".into()],
            periods_per_week: 2,
            option_group: Some("A".into()),
            allowed_days: None,
        });
        let mut t2 = teacher_with(Assignment {
            id: AssignmentId::from("a2"),
            school_id: SchoolId::from("s1"),
            subject: "Biology".into(),
            grades: vec!["Grade 10".into()],
            arms: vec!["P".into()],
            periods_per_week: 2,
            option_group: Some("A".into()),
            allowed_days: None,
        });
        t2.id = TeacherId::from("t2");
        let units = build_units(&[], &[t1, t2], &Config::default());
        assert_eq!(units.len(), 2);
        for unit in &units {
            match unit {
                PlacementUnit::OptionBlock { sessions, group_tag } => {
                    assert_eq!(group_tag, "A");
                    assert_eq!(sessions.len(), 2);
                }
                _ => panic!("expected OptionBlock"),
            }
        }
    }
}
