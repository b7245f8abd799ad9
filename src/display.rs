// src/display.rs

use crate::filter::parse_timestamp;
use crate::models::Entry;
use chrono::{DateTime, Utc};

/// Relative age used in entry headers. Future timestamps and anything a week
/// or older fall back to the calendar date; unparsable input is shown as-is.
pub fn format_time_ago(created_at: &str, now: DateTime<Utc>) -> String {
    let Some(date) = parse_timestamp(created_at) else {
        return created_at.to_string();
    };
    let diff_days = (now - date).num_seconds().div_euclid(86_400);
    match diff_days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", diff_days),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

/// 渲染一条日志卡片；展开时显示全文
pub fn render_card(entry: &Entry, now: DateTime<Utc>, expanded: bool) -> String {
    let tags = entry.tag_list();
    let mut out = format!(
        "[{}] {}\n  {} | {} tags\n",
        entry.id,
        entry.title,
        format_time_ago(&entry.created_at, now),
        tags.len()
    );

    let summary = entry.summary.as_deref().unwrap_or(&entry.content);
    let body = if expanded { entry.content.as_str() } else { summary };
    out.push_str(body.trim_end());
    out.push('\n');

    if !expanded && entry.content.chars().count() > summary.chars().count() {
        out.push_str(&format!("  (read more: devreplay show {})\n", entry.id));
    }
    if !tags.is_empty() {
        out.push_str(&format!("  # {}\n", tags.join("  # ")));
    }
    out
}
