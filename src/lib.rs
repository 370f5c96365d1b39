//! Multi-school timetable generation: a depth-first constraint solver that
//! places teaching sessions, doubles and option-group blocks onto each
//! school's weekly grid while respecting locked sessions and cross-school
//! teacher availability.
//!
//! # Example
//!
//! ```no_run
//! use timetable_engine::config::Config;
//! use timetable_engine::types::Store;
//!
//! let mut store = Store::default();
//! let config = Config::default();
//! store.generate(&config).unwrap();
//! ```

pub mod config;
pub mod conflict;
pub mod error;
pub mod mutation;
pub mod parser;
pub mod reporter;
pub mod scheduler;
pub mod types;

pub use error::{Result, SchedulerError};
