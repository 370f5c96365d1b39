use super::all_periods;
use crate::types::School;
use colored::Colorize;

/// Terminal-colored grid report: a row per period, a column per day, cells
/// for any session whose id is in `school.conflicts` rendered in red.
pub fn generate_text_report(school: &School) -> String {
    let mut lines = Vec::new();

    lines.push("═".repeat(60));
    lines.push(format!("  TIMETABLE: {}", school.name));
    lines.push("═".repeat(60));
    lines.push(String::new());

    if let Some(error) = &school.error {
        lines.push(format!("{}", format!("Solve error: {error}").red().bold()));
        lines.push(String::new());
    }

    for period in all_periods(school) {
        lines.push(format!("Period {period}").bold().to_string());
        for day in &school.days {
            if !school.teaching_periods(day).contains(&period) {
                continue;
            }
            let sessions = school.board.sessions_at(day, period);
            if sessions.is_empty() {
                lines.push(format!("  {day}: free"));
                continue;
            }
            for session in sessions {
                let is_conflict = school.conflicts.iter().any(|c| c.session_id == session.id);
                let text = format!(
                    "  {day}: {} — {} ({})",
                    session.subject, session.teacher_name, session.class_name
                );
                lines.push(if is_conflict { text.red().to_string() } else { text });
            }
        }
    }
    lines.push(String::new());

    lines.push("─".repeat(40));
    if school.conflicts.is_empty() {
        lines.push("CONFLICTS: none".green().to_string());
    } else {
        lines.push(format!("CONFLICTS: {}", school.conflicts.len()).red().bold().to_string());
        for conflict in &school.conflicts {
            lines.push(format!("  ! {} ({:?}): {}", conflict.session_id, conflict.kind, conflict.message));
        }
    }
    lines.push("─".repeat(40));

    lines.join("\n")
}

/// Print a one-line summary to stdout.
pub fn print_summary(school: &School) {
    println!();
    if school.error.is_some() {
        println!("{}", "✗ Timetable generation failed".red().bold());
    } else if school.conflicts.is_empty() {
        println!("{}", "✓ Timetable generated, no conflicts".green().bold());
    } else {
        println!(
            "{}",
            format!("⚠ Timetable generated with {} conflicts", school.conflicts.len()).yellow().bold()
        );
    }
    println!();
}
