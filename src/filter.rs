// src/filter.rs

use crate::models::Entry;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::ValueEnum;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Dashboard filter state. An empty `search` and `tag: None` match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    pub search: String,
    pub tag: Option<String>,
    pub sort: SortOrder,
}

/// 解析时间戳：RFC3339、无时区的 ISO 时间（按 UTC 处理）或纯日期
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Returns the visible entries in display order. Filtering happens before
/// sorting and the sort is stable; unparsable timestamps rank oldest.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &EntryQuery) -> Vec<&'a Entry> {
    let needle = query.search.to_lowercase();
    let tag = query.tag.as_deref().filter(|t| !t.is_empty());

    let mut visible: Vec<(Option<DateTime<Utc>>, &Entry)> = entries
        .iter()
        .filter(|e| matches_search(e, &needle))
        .filter(|e| tag.map_or(true, |t| e.tag_list().contains(&t)))
        .map(|e| (parse_timestamp(&e.created_at), e))
        .collect();

    visible.sort_by(|(a, _), (b, _)| compare(a, b, query.sort));
    visible.into_iter().map(|(_, e)| e).collect()
}

fn matches_search(entry: &Entry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    entry.title.to_lowercase().contains(needle)
        || entry.content.to_lowercase().contains(needle)
        || entry
            .summary
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
}

fn compare(a: &Option<DateTime<Utc>>, b: &Option<DateTime<Utc>>, sort: SortOrder) -> Ordering {
    // None < Some，无效日期视为最早
    match sort {
        SortOrder::Newest => b.cmp(a),
        SortOrder::Oldest => a.cmp(b),
    }
}
