use super::{Day, LockedSessionId, SchoolId};
use serde::{Deserialize, Serialize};

/// Either a concrete day, or the weekly template marker that expands into
/// one child per day at materialisation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockedDay {
    Specific(Day),
    AllWeek,
}

/// Which classes a locked session blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassScope {
    All,
    Specific(String),
}

/// A pre-pinned activity (Assembly, Sports, …) that occupies a slot before
/// the solver runs and constrains placement. A `day == AllWeek` entry is a
/// hidden master record; `materialize` (see `scheduler::materializer`)
/// expands it into one concrete child per school day, each carrying
/// `weekly_id` pointing back at the master.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockedSession {
    pub id: LockedSessionId,
    pub school_id: SchoolId,
    pub activity_name: String,
    pub day: LockedDay,
    pub period: u32,
    pub class_name: ClassScope,
    pub is_weekly_master: bool,
    pub weekly_id: Option<LockedSessionId>,
}

/// What a caller supplies to pin a new activity; the store fills in ids,
/// `is_weekly_master` and `weekly_id` and, for `LockedDay::AllWeek`, expands
/// it into one concrete child per school day sharing a `weekly_id`.
#[derive(Debug, Clone)]
pub struct NewLockedSession {
    pub school_id: SchoolId,
    pub activity_name: String,
    pub day: LockedDay,
    pub period: u32,
    pub class_name: ClassScope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishes_scopes() {
        assert_eq!(ClassScope::All, ClassScope::All);
        assert_ne!(
            ClassScope::Specific("Grade 7".into()),
            ClassScope::Specific("Grade 8".into())
        );
    }
}
