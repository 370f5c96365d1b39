use crate::error::Result;
use crate::types::School;

/// The full school record (board, locked sessions, conflicts) as JSON.
pub fn generate_json_report(school: &School) -> Result<String> {
    Ok(serde_json::to_string_pretty(school)?)
}

/// Summary statistics as JSON, cheap to compute from the board alone.
#[derive(serde::Serialize)]
pub struct JsonSummary {
    pub school_name: String,
    pub placed_sessions: usize,
    pub conflict_count: usize,
    pub has_error: bool,
    pub generated_at: String,
}

pub fn generate_json_summary(school: &School) -> Result<String> {
    let placed_sessions: usize =
        school.board.slots().map(|(_, _, sessions)| sessions.len()).sum();
    let summary = JsonSummary {
        school_name: school.name.clone(),
        placed_sessions,
        conflict_count: school.conflicts.len(),
        has_error: school.error.is_some(),
        generated_at: chrono::Utc::now().to_rfc3339(),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}
