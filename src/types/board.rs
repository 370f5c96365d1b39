use super::{Day, DoublePart, SessionId, TimetableSession};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A school's per-day placement state. Slots are sparse: only occupied
/// periods appear. Ordered by period within a day (`BTreeMap`); sessions
/// within one slot keep insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    days: BTreeMap<Day, BTreeMap<u32, Vec<TimetableSession>>>,
}

impl Board {
    pub fn sessions_at(&self, day: &Day, period: u32) -> &[TimetableSession] {
        self.days
            .get(day)
            .and_then(|slots| slots.get(&period))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All occupied (day, period, sessions) slots, in day-then-period order.
    pub fn slots(&self) -> impl Iterator<Item = (&Day, u32, &[TimetableSession])> {
        self.days.iter().flat_map(|(day, slots)| {
            slots.iter().map(move |(&period, sessions)| (day, period, sessions.as_slice()))
        })
    }

    /// Appends one session to the slot, creating it if absent. Returns the
    /// slot's length *before* the append — this is the undo-log value a
    /// caller needs to later truncate back to.
    pub fn place(&mut self, day: Day, period: u32, session: TimetableSession) -> usize {
        let slot = self.days.entry(day).or_default().entry(period).or_default();
        let len_before = slot.len();
        slot.push(session);
        len_before
    }

    /// Removes the first session matching `session_id` (and `part`, if
    /// given) from the slot. Drops the slot entirely if it becomes empty.
    /// No-op (returns `None`) if nothing matches — a `from` location with
    /// no match is a tolerated no-op.
    pub fn remove(
        &mut self,
        day: &Day,
        period: u32,
        session_id: &SessionId,
        part: Option<DoublePart>,
    ) -> Option<TimetableSession> {
        let slots = self.days.get_mut(day)?;
        let slot = slots.get_mut(&period)?;
        let idx = slot.iter().position(|s| {
            &s.id == session_id && (part.is_none() || s.part == part)
        })?;
        let removed = slot.remove(idx);
        if slot.is_empty() {
            slots.remove(&period);
        }
        if slots.is_empty() {
            self.days.remove(day);
        }
        Some(removed)
    }

    /// Truncates the slot at (day, period) back to `len`, used by the
    /// solver's undo log to unwind a failed branch. Removes the slot (and
    /// day entry) entirely if `len == 0`.
    pub fn truncate(&mut self, day: &Day, period: u32, len: usize) {
        if let Some(slots) = self.days.get_mut(day) {
            if let Some(slot) = slots.get_mut(&period) {
                slot.truncate(len);
                if slot.is_empty() {
                    slots.remove(&period);
                }
            }
            if slots.is_empty() {
                self.days.remove(day);
            }
        }
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SchoolId, TeacherId};

    fn session(id: &str) -> TimetableSession {
        TimetableSession {
            id: SessionId::from(id),
            subject: "Math".into(),
            actual_subject: None,
            teacher_name: "T".into(),
            teacher_id: Some(TeacherId::from("t1")),
            class_name: "Grade 7".into(),
            classes: vec!["Grade 7".into()],
            day: Day::from("Mon"),
            period: 1,
            part: None,
            option_group: None,
            is_locked: false,
            school_id: SchoolId::from("s1"),
            allowed_days: None,
        }
    }

    #[test]
    fn place_then_remove_empties_slot() {
        let mut board = Board::default();
        let day = Day::from("Mon");
        board.place(day.clone(), 1, session("a"));
        assert_eq!(board.sessions_at(&day, 1).len(), 1);

        board.remove(&day, 1, &SessionId::from("a"), None);
        assert!(board.sessions_at(&day, 1).is_empty());
        assert!(board.is_empty());
    }

    #[test]
    fn truncate_restores_undo_log_point() {
        let mut board = Board::default();
        let day = Day::from("Mon");
        let len_before = board.place(day.clone(), 1, session("a"));
        assert_eq!(len_before, 0);
        board.place(day.clone(), 1, session("b"));
        assert_eq!(board.sessions_at(&day, 1).len(), 2);

        board.truncate(&day, 1, len_before);
        assert!(board.sessions_at(&day, 1).is_empty());
    }
}
