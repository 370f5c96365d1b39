use super::all_periods;
use crate::types::School;

/// A day-by-period grid table of `school`'s board, plus a conflict section.
pub fn generate_markdown_report(school: &School) -> String {
    let mut lines = vec![
        format!("# Timetable: {}", school.name),
        String::new(),
    ];

    if let Some(error) = &school.error {
        lines.push(format!("**Solve error:** {error}"));
        lines.push(String::new());
    }

    lines.push("## Grid\n".to_string());
    let header: Vec<String> =
        std::iter::once("Period".to_string()).chain(school.days.iter().map(|d| d.to_string())).collect();
    lines.push(format!("| {} |", header.join(" | ")));
    lines.push(format!("|{}|", "---|".repeat(header.len())));

    for period in all_periods(school) {
        let mut row = vec![format!("{}", period)];
        for day in &school.days {
            if !school.teaching_periods(day).contains(&period) {
                row.push("—".to_string());
                continue;
            }
            let cell = cell_text(school, day, period);
            row.push(cell);
        }
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines.push(String::new());

    lines.push("## Conflicts\n".to_string());
    if school.conflicts.is_empty() {
        lines.push("None.".to_string());
    } else {
        lines.push("| Session | Kind | Message |".to_string());
        lines.push("|---------|------|---------|".to_string());
        for conflict in &school.conflicts {
            lines.push(format!(
                "| {} | {:?} | {} |",
                conflict.session_id, conflict.kind, conflict.message
            ));
        }
    }

    lines.join("\n")
}

fn cell_text(school: &School, day: &crate::types::Day, period: u32) -> String {
    let sessions = school.board.sessions_at(day, period);
    if sessions.is_empty() {
        return "Free".to_string();
    }
    sessions
        .iter()
        .map(|s| {
            if s.is_locked {
                format!("*{}*", s.subject)
            } else {
                format!("{} — {} ({})", s.subject, s.teacher_name, s.class_name)
            }
        })
        .collect::<Vec<_>>()
        .join("<br>")
}
