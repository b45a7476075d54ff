//! Plain-text summaries of estimated issues.

use crate::estimation::ESTIMATED_HOURS_FIELD;

/// Marker for a priority label, with a bullet for anything unrecognized.
pub fn priority_symbol(priority: &str) -> &'static str {
    match priority.trim().to_lowercase().as_str() {
        "critical" => "🔥",
        "high" => "⬆️",
        "medium" => "➡️",
        "low" => "⬇️",
        _ => "•",
    }
}

/// Render one line per issue plus a totals line.
///
/// Expects records enriched by
/// [`Estimator::batch_extract`](crate::Estimator::batch_extract); a
/// record without an estimate is shown with zero hours. Entries that are
/// not objects are skipped. The result carries no trailing newline.
pub fn render_summary(issues: &[serde_json::Value]) -> String {
    let mut lines = Vec::with_capacity(issues.len() + 1);
    let mut total: u64 = 0;
    let mut counted: usize = 0;

    for fields in issues.iter().filter_map(|issue| issue.as_object()) {
        let symbol = fields
            .get("priority")
            .and_then(|v| v.as_str())
            .map(priority_symbol)
            .unwrap_or("•");
        let title = fields
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("(untitled)");
        let hours = fields
            .get(ESTIMATED_HOURS_FIELD)
            .and_then(|v| v.as_u64())
            .unwrap_or(0);

        let line = match fields.get("number").and_then(|v| v.as_i64()) {
            Some(number) => format!("{} #{} {} ({}h)", symbol, number, title, hours),
            None => format!("{} {} ({}h)", symbol, title, hours),
        };
        lines.push(line);

        total += hours;
        counted += 1;
    }

    let noun = if counted == 1 { "issue" } else { "issues" };
    lines.push(format!("Total: {}h across {} {}", total, counted, noun));

    lines.join("\n")
}
