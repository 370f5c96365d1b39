use crate::types::{Conflict, ConflictKind, School};
use std::collections::HashMap;

/// Runs over every occupied slot in `school`'s board and emits a fresh
/// conflict list. Pure: never mutates the board, only observes it. Called
/// after a solve and after every hand-edit (`mutation::move_session`).
pub fn detect(school: &School) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (_day, _period, sessions) in school.board.slots() {
        let mut by_teacher: HashMap<&crate::types::TeacherId, Vec<&crate::types::SessionId>> =
            HashMap::new();
        let mut by_class: HashMap<&str, Vec<&crate::types::SessionId>> = HashMap::new();

        for session in sessions {
            if session.is_locked {
                continue;
            }
            if let Some(teacher_id) = &session.teacher_id {
                by_teacher.entry(teacher_id).or_default().push(&session.id);
            }
            for class in &session.classes {
                by_class.entry(class.as_str()).or_default().push(&session.id);
            }
        }

        for ids in by_teacher.values() {
            if distinct_count(ids) >= 2 {
                for id in dedup(ids) {
                    conflicts.push(Conflict {
                        session_id: id.clone(),
                        kind: ConflictKind::Teacher,
                        message: "teacher is double-booked in this slot".to_string(),
                    });
                }
            }
        }

        for ids in by_class.values() {
            if distinct_count(ids) >= 2 {
                for id in dedup(ids) {
                    conflicts.push(Conflict {
                        session_id: id.clone(),
                        kind: ConflictKind::Class,
                        message: "class is double-booked in this slot".to_string(),
                    });
                }
            }
        }
    }

    conflicts
}

fn distinct_count(ids: &[&crate::types::SessionId]) -> usize {
    dedup(ids).len()
}

fn dedup(ids: &[&crate::types::SessionId]) -> Vec<&crate::types::SessionId> {
    let mut seen = Vec::new();
    for id in ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}
