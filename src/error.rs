use thiserror::Error;

/// Domain-specific errors for the timetable engine
#[derive(Error, Debug)]
pub enum SchedulerError {
    // Input/Parse errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("Failed to parse config '{file}': {message}")]
    ConfigParse { file: String, message: String },

    // Solver errors
    #[error("Could not generate a valid timetable for school '{school}'")]
    SolveFailure { school: String },

    // Soft error: a time slot's range could not be parsed. Never surfaced to
    // a caller directly; the Oracle treats the slot as permanently unusable
    // and this may cascade into a SolveFailure.
    #[error("Invalid time range '{range}' on slot '{slot_id}'")]
    InvalidTimeRange { slot_id: String, range: String },

    #[error("Unknown {kind} '{id}'")]
    UnknownEntity { kind: String, id: String },

    #[error("Illegal mutation: {message}")]
    IllegalMutation { message: String },
}

/// Use anyhow::Result at application boundaries
pub type Result<T> = anyhow::Result<T>;
