// src/models.rs

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 摘要与提示截取的字符数
pub const EXCERPT_CHARS: usize = 100;

/// Server-assigned entry id. The API may send it as a number or a string;
/// either way it is only ever shown and echoed back in a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        EntryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Str(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => EntryId(n.to_string()),
            RawId::Str(s) => EntryId(s),
        })
    }
}

/// A journal entry as returned by the entries API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Option<String>, // 逗号分隔的标签
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Entry {
    /// Tags as stored, split and trimmed, with empty segments dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.as_deref().map(split_tags).unwrap_or_default()
    }
}

/// 拆分逗号分隔的标签字符串，去除空白并丢弃空片段
pub fn split_tags(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Raw form input for a new entry, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub tags: String,
}

/// Body of `POST /entries/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub tags: String,
    pub summary: String,
    pub tip: String,
}

impl NewEntry {
    /// Builds the request body. `summary` and `tip` are fixed here and never
    /// recomputed afterwards.
    pub fn from_draft(draft: &EntryDraft) -> Self {
        let tip = excerpt(&draft.content, EXCERPT_CHARS);
        NewEntry {
            title: draft.title.clone(),
            content: draft.content.clone(),
            tags: split_tags(&draft.tags).join(", "),
            summary: format!("{}...", tip),
            tip,
        }
    }
}

/// 按字符（而非字节）截取前 n 个字符
fn excerpt(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
