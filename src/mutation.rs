use crate::types::{Day, School, SessionId};

/// Moves the first session matching `session_id` from `from` to `to`,
/// updating its stored period, then re-runs the Conflict Detector over the
/// resulting board (spec.md §4.9). A `from` location that doesn't hold it
/// is a tolerated no-op, matching `Store`'s unknown-id posture elsewhere.
/// Never consults the constraint oracle — a hand move can create a
/// conflict, and that conflict is surfaced immediately as data here, not
/// rejected.
pub fn move_session(school: &mut School, session_id: &SessionId, from: (Day, u32), to: (Day, u32)) {
    let (from_day, from_period) = from;
    let (to_day, to_period) = to;
    let Some(mut session) = school.board.remove(&from_day, from_period, session_id, None) else {
        return;
    };
    session.day = to_day.clone();
    session.period = to_period;
    school.board.place(to_day, to_period, session);
    school.conflicts = crate::conflict::detect(school);
}
