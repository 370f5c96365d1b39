use super::{
    ClassScope, LockedDay, LockedSession, LockedSessionId, NewLockedSession, School, SchoolId,
    Teacher, TeacherId, TimeSlot,
};
use serde::{Deserialize, Serialize};

/// How the reporter groups a school's board into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Class,
    Teacher,
    Arm,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Class
    }
}

/// The whole persisted document: every school, the global teacher pool, and
/// which school/view the UI currently has open. All mutation goes through
/// this type so board-invalidation (clearing a school's board when an input
/// that feeds scheduling changes) happens in one place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    pub schools: Vec<School>,
    pub all_teachers: Vec<Teacher>,
    pub active_school_id: Option<SchoolId>,
    #[serde(default)]
    pub view_mode: ViewMode,
}

/// Mints `{prefix}-{n}` where `n` is one past the highest numeric suffix
/// already in use among `existing`. Avoids persisting counter state: a
/// freshly loaded document picks up exactly where the file it was saved
/// from left off.
fn next_id(prefix: &str, existing: impl Iterator<Item = String>) -> String {
    let next = existing
        .filter_map(|id| id.strip_prefix(prefix)?.strip_prefix('-')?.parse::<u64>().ok())
        .max()
        .map(|n| n + 1)
        .unwrap_or(1);
    format!("{prefix}-{next}")
}

fn mint_locked_id_for(school: &School) -> LockedSessionId {
    LockedSessionId::from(next_id("locked", school.locked_sessions.iter().map(|l| l.id.0.clone())))
}

impl Store {
    pub fn school(&self, id: &SchoolId) -> Option<&School> {
        self.schools.iter().find(|s| &s.id == id)
    }

    pub fn school_mut(&mut self, id: &SchoolId) -> Option<&mut School> {
        self.schools.iter_mut().find(|s| &s.id == id)
    }

    pub fn teacher(&self, id: &TeacherId) -> Option<&Teacher> {
        self.all_teachers.iter().find(|t| &t.id == id)
    }

    fn mint_school_id(&self) -> SchoolId {
        SchoolId::from(next_id("school", self.schools.iter().map(|s| s.id.0.clone())))
    }

    fn mint_teacher_id(&self) -> TeacherId {
        TeacherId::from(next_id("teacher", self.all_teachers.iter().map(|t| t.id.0.clone())))
    }

    pub fn add_school(&mut self, name: impl Into<String>) -> SchoolId {
        let id = self.mint_school_id();
        self.schools.push(School::new(id.clone(), name));
        id
    }

    /// Unknown id: no-op. Otherwise drops the school, strips its
    /// assignments from every teacher, and drops any teacher left with no
    /// assignments anywhere.
    pub fn remove_school(&mut self, school_id: &SchoolId) {
        let before = self.schools.len();
        self.schools.retain(|s| &s.id != school_id);
        if self.schools.len() == before {
            return;
        }
        for teacher in &mut self.all_teachers {
            teacher.assignments.retain(|a| &a.school_id != school_id);
        }
        self.all_teachers.retain(|t| !t.assignments.is_empty());
        if self.active_school_id.as_ref() == Some(school_id) {
            self.active_school_id = None;
        }
    }

    pub fn rename_school(&mut self, school_id: &SchoolId, name: impl Into<String>) {
        if let Some(school) = self.school_mut(school_id) {
            school.name = name.into();
        }
    }

    /// Board clearing on teacher add/remove/update invalidates the boards of
    /// every school touched by the teacher's assignments (old set and new
    /// set both, for `update_teacher`).
    fn clear_boards_for(&mut self, school_ids: impl IntoIterator<Item = SchoolId>) {
        for id in school_ids {
            if let Some(school) = self.school_mut(&id) {
                school.clear_board();
            }
        }
    }

    pub fn add_teacher(&mut self, mut teacher: Teacher) -> TeacherId {
        let id = self.mint_teacher_id();
        teacher.id = id.clone();
        let touched: Vec<_> = teacher.assignments.iter().map(|a| a.school_id.clone()).collect();
        self.all_teachers.push(teacher);
        self.clear_boards_for(touched);
        id
    }

    /// Unknown id: no-op.
    pub fn remove_teacher(&mut self, teacher_id: &TeacherId) {
        let Some(pos) = self.all_teachers.iter().position(|t| &t.id == teacher_id) else {
            return;
        };
        let removed = self.all_teachers.remove(pos);
        let touched: Vec<_> = removed.assignments.into_iter().map(|a| a.school_id).collect();
        self.clear_boards_for(touched);
    }

    /// Unknown id: no-op. Clears boards for both the teacher's old and new
    /// assignment school sets, then replaces the record wholesale.
    pub fn update_teacher(&mut self, mut teacher: Teacher) {
        let Some(pos) = self.all_teachers.iter().position(|t| t.id == teacher.id) else {
            return;
        };
        let mut touched: Vec<_> =
            self.all_teachers[pos].assignments.iter().map(|a| a.school_id.clone()).collect();
        touched.extend(teacher.assignments.iter().map(|a| a.school_id.clone()));
        teacher.id = self.all_teachers[pos].id.clone();
        self.all_teachers[pos] = teacher;
        self.clear_boards_for(touched);
    }

    /// Unknown school: no-op. Replaces the grid, renumbers periods, and
    /// clears the board — a time-slot edit invalidates any prior solve.
    pub fn update_time_slots(&mut self, school_id: &SchoolId, slots: Vec<TimeSlot>) {
        let Some(school) = self.school_mut(school_id) else {
            return;
        };
        school.time_slots = slots;
        school.renumber_time_slots();
        school.clear_board();
    }

    /// Appends a locked session (expanding `LockedDay::AllWeek` into one
    /// hidden master plus one concrete child per school day sharing a
    /// `weekly_id`), then clears the owning school's board. Returns the id
    /// the caller should use to remove the whole family later: the master's
    /// id for an all-week entry, the single entry's id otherwise. No-op
    /// (returns `None`) for an unknown school.
    pub fn add_locked_session(&mut self, req: NewLockedSession) -> Option<LockedSessionId> {
        let idx = self.schools.iter().position(|s| s.id == req.school_id)?;
        match req.day {
            LockedDay::AllWeek => {
                let master_id = mint_locked_id_for(&self.schools[idx]);
                self.schools[idx].locked_sessions.push(LockedSession {
                    id: master_id.clone(),
                    school_id: req.school_id.clone(),
                    activity_name: req.activity_name.clone(),
                    day: LockedDay::AllWeek,
                    period: req.period,
                    class_name: req.class_name.clone(),
                    is_weekly_master: true,
                    weekly_id: None,
                });
                let days = self.schools[idx].days.clone();
                for day in days {
                    let child_id = mint_locked_id_for(&self.schools[idx]);
                    self.schools[idx].locked_sessions.push(LockedSession {
                        id: child_id,
                        school_id: req.school_id.clone(),
                        activity_name: req.activity_name.clone(),
                        day: LockedDay::Specific(day),
                        period: req.period,
                        class_name: req.class_name.clone(),
                        is_weekly_master: false,
                        weekly_id: Some(master_id.clone()),
                    });
                }
                self.schools[idx].clear_board();
                Some(master_id)
            }
            LockedDay::Specific(day) => {
                let id = mint_locked_id_for(&self.schools[idx]);
                self.schools[idx].locked_sessions.push(LockedSession {
                    id: id.clone(),
                    school_id: req.school_id.clone(),
                    activity_name: req.activity_name,
                    day: LockedDay::Specific(day),
                    period: req.period,
                    class_name: req.class_name,
                    is_weekly_master: false,
                    weekly_id: None,
                });
                self.schools[idx].clear_board();
                Some(id)
            }
        }
    }

    /// Removes the whole family sharing `id`'s weekly grouping (the master
    /// plus every child, or just a standalone entry) and clears the board.
    /// Unknown id: no-op.
    pub fn remove_locked_session(&mut self, school_id: &SchoolId, id: &LockedSessionId) {
        let Some(school) = self.school_mut(school_id) else {
            return;
        };
        let Some(entry) = school.locked_sessions.iter().find(|l| &l.id == id) else {
            return;
        };
        let family_key = entry.weekly_id.clone().unwrap_or_else(|| entry.id.clone());
        school
            .locked_sessions
            .retain(|l| l.id != family_key && l.weekly_id.as_ref() != Some(&family_key));
        school.clear_board();
    }

    /// Runs the full pipeline (unit building, lock materialisation,
    /// backtracking search) across every school, since teachers are shared
    /// globally and a teacher clash can span schools. Whichever school
    /// initiated the request only matters for which error message the
    /// caller sees; every school's board is attempted.
    pub fn generate(&mut self, config: &crate::config::Config) -> crate::Result<()> {
        let initiating = self.active_school_id.clone();
        crate::scheduler::generate(&mut self.schools, &self.all_teachers, config, initiating.as_ref())
    }

    /// Unknown school, unknown session, or a `from` location that doesn't
    /// hold it: no-op. Never consults the Oracle — a manual move can create
    /// a conflict, and `mutation::move_session` re-runs the Conflict
    /// Detector itself, so `is_conflict` reflects the move immediately.
    pub fn move_session(
        &mut self,
        school_id: &SchoolId,
        session_id: &super::SessionId,
        from: (super::Day, u32),
        to: (super::Day, u32),
    ) {
        if let Some(school) = self.school_mut(school_id) {
            crate::mutation::move_session(school, session_id, from, to);
        }
    }

    /// Wipes a school's board, conflicts and solve error back to empty.
    pub fn clear(&mut self, school_id: &SchoolId) {
        if let Some(school) = self.school_mut(school_id) {
            school.clear_board();
        }
    }

    /// Equivalent to `clear()`; the name reflects user intent rather than
    /// a different operation (spec.md §4.9).
    pub fn resolve_conflicts(&mut self, school_id: &SchoolId) {
        self.clear(school_id);
    }

    pub fn is_conflict(&self, school_id: &SchoolId, session_id: &super::SessionId) -> bool {
        self.school(school_id)
            .map(|school| school.conflicts.iter().any(|c| &c.session_id == session_id))
            .unwrap_or(false)
    }
}
