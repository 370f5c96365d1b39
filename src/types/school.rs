use super::{Board, Conflict, Day, LockedSession, SchoolId, TimeSlot};
use serde::{Deserialize, Serialize};

/// A school: its own day order, its own period grid, its own locked
/// sessions and its own board. Schools share the global pool of teachers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub days: Vec<Day>,
    pub time_slots: Vec<TimeSlot>,
    pub locked_sessions: Vec<LockedSession>,
    #[serde(default)]
    pub board: Board,
    #[serde(default)]
    pub conflicts: Vec<Conflict>,
    #[serde(default)]
    pub error: Option<String>,
}

impl School {
    pub fn new(id: SchoolId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            days: Vec::new(),
            time_slots: Vec::new(),
            locked_sessions: Vec::new(),
            board: Board::default(),
            conflicts: Vec::new(),
            error: None,
        }
    }

    /// "Senior secondary" substring heuristic's half that lives on the
    /// school (name inspection); the grade half lives in `Config`.
    pub fn name_suggests_secondary(&self) -> bool {
        self.name.to_lowercase().contains("secondary")
    }

    /// Re-numbers `time_slots` as 1, 2, … in list order. A slot that is a
    /// break on every day (`is_break` with no `days` subset) gets
    /// `period = None`; everything else, including a break excluded on some
    /// days, gets a real number so it can act as a teaching slot where the
    /// break doesn't apply.
    pub fn renumber_time_slots(&mut self) {
        let mut next = 1u32;
        for slot in &mut self.time_slots {
            if slot.is_break && slot.days.is_none() {
                slot.period = None;
            } else {
                slot.period = Some(next);
                next += 1;
            }
        }
    }

    /// Indices into `time_slots` of the slots that are teaching slots on
    /// `day`, preserving their position in the overall grid — needed to
    /// tell "consecutive in the per-day filtered list" apart from
    /// "consecutive in the school's schedule".
    fn teaching_slot_indices(&self, day: &Day) -> Vec<usize> {
        self.time_slots
            .iter()
            .enumerate()
            .filter(|(_, ts)| ts.is_teaching_on(day))
            .map(|(i, _)| i)
            .collect()
    }

    /// The ordered list of teaching period numbers on `day`.
    pub fn teaching_periods(&self, day: &Day) -> Vec<u32> {
        self.teaching_slot_indices(day)
            .into_iter()
            .filter_map(|i| self.time_slots[i].period)
            .collect()
    }

    /// The teaching period immediately following `period` on `day`, or
    /// `None` if `period` is the last teaching period, unknown, or the
    /// underlying time slots are not neighbours in the overall grid (a
    /// non-teaching slot sits between them).
    pub fn next_teaching_period(&self, day: &Day, period: u32) -> Option<u32> {
        let indices = self.teaching_slot_indices(day);
        let pos = indices
            .iter()
            .position(|&i| self.time_slots[i].period == Some(period))?;
        let idx = indices[pos];
        if pos + 1 >= indices.len() {
            return None;
        }
        if indices[pos + 1] != idx + 1 {
            return None;
        }
        self.time_slots[idx + 1].period
    }

    pub fn are_adjacent(&self, day: &Day, p_i: u32, p_j: u32) -> bool {
        self.next_teaching_period(day, p_i) == Some(p_j)
    }

    pub fn time_slot_for_period(&self, period: u32) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|ts| ts.period == Some(period))
    }

    /// Clears the board, conflicts and any prior solve error. Called
    /// whenever an input that affects scheduling mutates: teacher
    /// add/remove/update, a time-slot edit, or a locked-session edit.
    pub fn clear_board(&mut self) {
        self.board.clear();
        self.conflicts.clear();
        self.error = None;
    }
}
