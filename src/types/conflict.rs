use super::SessionId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    Teacher,
    Class,
}

/// One conflict record, emitted per offending session so every session
/// involved in a clash is individually flagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    pub session_id: SessionId,
    pub kind: ConflictKind,
    pub message: String,
}
