mod json;
mod markdown;
mod text;

pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::error::Result;
use crate::types::{School, TeacherId};
use std::fs;
use std::path::Path;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

/// Generate all reports for a school and write them to `output_dir`.
pub fn generate_reports(school: &School, output_dir: &Path, formats: &[OutputFormat]) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for format in formats {
        match format {
            OutputFormat::Json => {
                let json = generate_json_report(school)?;
                fs::write(output_dir.join("timetable.json"), json)?;
            }
            OutputFormat::Markdown => {
                let md = generate_markdown_report(school);
                fs::write(output_dir.join("timetable.md"), md)?;
            }
            OutputFormat::Text => {
                let txt = generate_text_report(school);
                fs::write(output_dir.join("timetable.txt"), txt)?;
            }
        }
    }

    Ok(())
}

/// Every distinct period number across a school's grid, ascending —
/// the row axis shared by the markdown and text grid reports.
pub(crate) fn all_periods(school: &School) -> Vec<u32> {
    let mut periods: Vec<u32> = school.time_slots.iter().filter_map(|ts| ts.period).collect();
    periods.sort_unstable();
    periods.dedup();
    periods
}

/// A teacher's own weekly schedule, read off `school`'s board. `None` if the
/// teacher has no sessions at this school at all.
pub fn generate_teacher_schedule(school: &School, teacher_id: &TeacherId) -> Option<String> {
    let mut lines = vec![format!("# Schedule at {}", school.name), String::new()];
    let mut any = false;

    for day in &school.days {
        let mut day_lines = Vec::new();
        for period in school.teaching_periods(day) {
            for session in school.board.sessions_at(day, period) {
                if session.teacher_id.as_ref() == Some(teacher_id) {
                    any = true;
                    day_lines.push(format!(
                        "  Period {}: {} ({})",
                        period, session.subject, session.class_name
                    ));
                }
            }
        }
        if !day_lines.is_empty() {
            lines.push(format!("## {}", day));
            lines.extend(day_lines);
        }
    }

    if !any {
        return None;
    }
    Some(lines.join("\n"))
}
