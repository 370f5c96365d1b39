use super::{Day, SchoolId, SessionId, TeacherId};
use serde::{Deserialize, Serialize};

/// Which half of a Double unit a session is. Derived ordering follows
/// declaration order (`First < Second`) so callers can sort placed parts
/// back into sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DoublePart {
    First,
    Second,
}

/// One placed (or placeable) teaching session. A Double's two sessions
/// share `id`; an OptionBlock's member sessions share `option_group`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableSession {
    pub id: SessionId,
    pub subject: String,
    /// Set for OptionBlock members: the real subject behind the
    /// `"Option <tag>"` placeholder in `subject`.
    pub actual_subject: Option<String>,
    pub teacher_name: String,
    /// `None` for locked/synthetic sessions.
    pub teacher_id: Option<TeacherId>,
    pub class_name: String,
    /// The set of classes occupying this slot. For ordinary teaching
    /// sessions this is `[class_name]`; for a locked session with
    /// `ClassScope::All` it is `["all"]`.
    pub classes: Vec<String>,
    pub day: Day,
    pub period: u32,
    pub part: Option<DoublePart>,
    pub option_group: Option<String>,
    pub is_locked: bool,
    pub school_id: SchoolId,
    /// Copied from the source assignment at build time so the Oracle can
    /// check rule 4 without looking the assignment back up.
    pub allowed_days: Option<Vec<Day>>,
}

impl TimetableSession {
    pub fn shares_class_with(&self, other: &TimetableSession) -> bool {
        self.classes.iter().any(|c| other.classes.contains(c))
    }

    /// The subject used for the "same subject can't repeat same day"
    /// uniqueness rule: `actual_subject` if present, else `subject`.
    pub fn uniqueness_subject(&self) -> &str {
        self.actual_subject.as_deref().unwrap_or(&self.subject)
    }

    /// A copy of this session fixed at a concrete board position, built from
    /// the builder's placeholder template.
    pub fn placed_at(&self, day: &Day, period: u32) -> TimetableSession {
        let mut session = self.clone();
        session.day = day.clone();
        session.period = period;
        session
    }
}

/// The atomic thing the solver places: a Single, a Double pair, or an
/// OptionBlock. Replaces the source's field-presence dynamic record with an
/// exhaustively-matchable tagged variant.
#[derive(Debug, Clone)]
pub enum PlacementUnit {
    Single(TimetableSession),
    Double(TimetableSession, TimetableSession),
    OptionBlock {
        sessions: Vec<TimetableSession>,
        group_tag: String,
    },
}

impl PlacementUnit {
    pub fn school_id(&self) -> &SchoolId {
        match self {
            PlacementUnit::Single(s) => &s.school_id,
            PlacementUnit::Double(s, _) => &s.school_id,
            PlacementUnit::OptionBlock { sessions, .. } => &sessions[0].school_id,
        }
    }

    /// How many atomic sessions this unit carries.
    pub fn session_count(&self) -> usize {
        match self {
            PlacementUnit::Single(_) => 1,
            PlacementUnit::Double(_, _) => 2,
            PlacementUnit::OptionBlock { sessions, .. } => sessions.len(),
        }
    }
}
