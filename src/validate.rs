// src/validate.rs

use crate::models::EntryDraft;
use std::collections::BTreeMap;
use std::fmt;

const MIN_TITLE_CHARS: usize = 3;
const MIN_CONTENT_CHARS: usize = 10;
const MIN_TAG_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Content,
    Tags,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Tags => "tags",
        };
        f.write_str(name)
    }
}

/// Per-field error messages. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("  {}: {}", field, msg))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// 提交前校验表单字段
pub fn validate_draft(draft: &EntryDraft) -> ValidationErrors {
    let mut errors = BTreeMap::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.insert(Field::Title, "Title is required".to_string());
    } else if title.chars().count() < MIN_TITLE_CHARS {
        errors.insert(
            Field::Title,
            format!("Title must be at least {} characters", MIN_TITLE_CHARS),
        );
    }

    let content = draft.content.trim();
    if content.is_empty() {
        errors.insert(Field::Content, "Content is required".to_string());
    } else if content.chars().count() < MIN_CONTENT_CHARS {
        errors.insert(
            Field::Content,
            format!("Content must be at least {} characters", MIN_CONTENT_CHARS),
        );
    }

    // 任意一个片段过短即整体无效，空片段也算
    if !draft.tags.trim().is_empty()
        && draft
            .tags
            .split(',')
            .any(|t| t.trim().chars().count() < MIN_TAG_CHARS)
    {
        errors.insert(
            Field::Tags,
            format!("Each tag must be at least {} characters", MIN_TAG_CHARS),
        );
    }

    ValidationErrors(errors)
}
