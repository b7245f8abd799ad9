// src/commands.rs

use crate::answer::AnswerSource;
use crate::api::ApiClient;
use crate::display::render_card;
use crate::error::{JournalError, Result};
use crate::filter::{filter_entries, EntryQuery, SortOrder};
use crate::models::{EntryDraft, EntryId, NewEntry};
use crate::tags::{add_suggested_tag, all_tags, TagTable};
use crate::validate::validate_draft;
use chrono::Utc;
use std::env;
use std::io::{Read, Write};
use std::process::Command;
use tracing::info;

/// 处理 'list' 命令
pub async fn handle_list(
    client: &ApiClient,
    out: &mut impl Write,
    search: Option<String>,
    tag: Option<String>,
    sort: SortOrder,
) -> Result<()> {
    let entries = client.list_entries().await?;
    info!("loaded {} entries", entries.len());

    let vocabulary = all_tags(&entries);
    if !vocabulary.is_empty() {
        writeln!(out, "Tags: {}", vocabulary.join(", "))?;
        writeln!(out, "{}", "─".repeat(40))?;
    }

    let query = EntryQuery {
        search: search.unwrap_or_default(),
        tag,
        sort,
    };
    let visible = filter_entries(&entries, &query);
    if visible.is_empty() {
        writeln!(out, "No entries found.")?;
        return Ok(());
    }

    let now = Utc::now();
    for entry in visible {
        write!(out, "{}", render_card(entry, now, false))?;
        writeln!(out, "{}", "─".repeat(40))?;
    }
    Ok(())
}

/// 处理 'tags' 命令
pub async fn handle_tags(client: &ApiClient, out: &mut impl Write) -> Result<()> {
    let entries = client.list_entries().await?;
    for tag in all_tags(&entries) {
        writeln!(out, "{}", tag)?;
    }
    Ok(())
}

/// 处理 'show' 命令
pub async fn handle_show(
    client: &ApiClient,
    answers: &dyn AnswerSource,
    out: &mut impl Write,
    id: String,
    no_answer: bool,
) -> Result<()> {
    let entry = client.get_entry(&EntryId::new(id)).await?;
    write!(out, "{}", render_card(&entry, Utc::now(), true))?;

    if !no_answer {
        writeln!(out, "{}", "─".repeat(40))?;
        writeln!(out, "Generating answer...")?;
        out.flush()?;
        let answer = answers.answer(&entry).await;
        writeln!(out, "Answer: {}", answer)?;
    }
    Ok(())
}

/// 处理 'new' 命令
pub async fn handle_new(
    client: &ApiClient,
    out: &mut impl Write,
    title: String,
    message: Option<String>,
    tags: Option<String>,
    suggest: bool,
) -> Result<()> {
    let content = match message {
        Some(msg) => msg,
        None => read_from_editor()?,
    };

    let mut draft = EntryDraft {
        title,
        content,
        tags: tags.unwrap_or_default(),
    };
    if suggest {
        for tag in TagTable::builtin().suggest(&draft.title) {
            draft.tags = add_suggested_tag(&draft.tags, &tag);
        }
    }

    // 校验失败时不发起任何请求
    let errors = validate_draft(&draft);
    if !errors.is_empty() {
        return Err(JournalError::Validation(errors));
    }

    let created = client.create_entry(&NewEntry::from_draft(&draft)).await?;
    info!("created entry {}", created.id);
    writeln!(out, "✓ Entry #{} saved.", created.id)?;
    Ok(())
}

/// 处理 'suggest' 命令
pub fn handle_suggest(out: &mut impl Write, title: Vec<String>) -> Result<()> {
    let suggestions = TagTable::builtin().suggest(&title.join(" "));
    if suggestions.is_empty() {
        writeln!(out, "No suggestions.")?;
        return Ok(());
    }
    for tag in suggestions {
        writeln!(out, "{}", tag)?;
    }
    Ok(())
}

fn read_from_editor() -> Result<String> {
    let temp_file = tempfile::NamedTempFile::new()?;
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor).arg(temp_file.path()).status()?;

    if !status.success() {
        return Err(JournalError::EditorError);
    }
    let mut buf = String::new();
    temp_file.reopen()?.read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::PlaceholderAnswer;
    use crate::test_support::spawn_server;
    use crate::validate::Field;
    use serde_json::json;
    use std::time::Duration;

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn new_posts_draft_and_reports_id() {
        let (client, captured) = spawn_server().await;
        let mut out = Vec::new();
        handle_new(
            &client,
            &mut out,
            "Cache layer".into(),
            Some("Added a redis cache in front of the API".into()),
            Some(" Backend ,Caching".into()),
            false,
        )
        .await
        .unwrap();

        assert_eq!(text(out), "✓ Entry #42 saved.\n");
        let sent = captured.lock().unwrap().clone().unwrap();
        assert_eq!(
            sent,
            json!({
                "title": "Cache layer",
                "content": "Added a redis cache in front of the API",
                "tags": "Backend, Caching",
                "summary": "Added a redis cache in front of the API...",
                "tip": "Added a redis cache in front of the API"
            })
        );
    }

    #[tokio::test]
    async fn new_merges_suggested_tags() {
        let (client, captured) = spawn_server().await;
        let mut out = Vec::new();
        handle_new(
            &client,
            &mut out,
            "api work".into(),
            Some("long enough content".into()),
            Some("rust, API".into()),
            true,
        )
        .await
        .unwrap();

        let sent = captured.lock().unwrap().clone().unwrap();
        assert_eq!(sent["tags"], "rust, API, Backend, Integration");
    }

    #[tokio::test]
    async fn new_with_suggest_still_rejects_empty_tag_segment() {
        let (client, captured) = spawn_server().await;
        let mut out = Vec::new();
        let err = handle_new(
            &client,
            &mut out,
            "api work".into(),
            Some("long enough content".into()),
            Some("ab,".into()),
            true,
        )
        .await
        .unwrap_err();

        match err {
            JournalError::Validation(errors) => assert_eq!(
                errors.get(Field::Tags),
                Some("Each tag must be at least 2 characters")
            ),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(captured.lock().unwrap().is_none());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn list_prints_vocabulary_and_cards() {
        let (client, _) = spawn_server().await;
        let mut out = Vec::new();
        handle_list(&client, &mut out, None, None, SortOrder::Newest)
            .await
            .unwrap();

        let out = text(out);
        assert!(out.starts_with("Tags: API, Debugging\n"));
        let react = out.find("[2] Learn React").unwrap();
        let api = out.find("[1] Fix API bug").unwrap();
        assert!(react < api, "newest entry should come first:\n{}", out);
    }

    #[tokio::test]
    async fn list_applies_tag_and_search() {
        let (client, _) = spawn_server().await;

        let mut out = Vec::new();
        handle_list(&client, &mut out, None, Some("Debugging".into()), SortOrder::Newest)
            .await
            .unwrap();
        let out = text(out);
        assert!(out.contains("[1] Fix API bug"));
        assert!(!out.contains("Learn React"));

        let mut out = Vec::new();
        handle_list(&client, &mut out, Some("HOOKS".into()), None, SortOrder::Oldest)
            .await
            .unwrap();
        let out = text(out);
        assert!(out.contains("[2] Learn React"));
        assert!(!out.contains("Fix API bug"));

        let mut out = Vec::new();
        handle_list(&client, &mut out, Some("nothing like this".into()), None, SortOrder::Newest)
            .await
            .unwrap();
        assert!(text(out).ends_with("No entries found.\n"));
    }

    #[tokio::test]
    async fn tags_prints_one_per_line() {
        let (client, _) = spawn_server().await;
        let mut out = Vec::new();
        handle_tags(&client, &mut out).await.unwrap();
        assert_eq!(text(out), "API\nDebugging\n");
    }

    #[tokio::test]
    async fn show_prints_full_entry_and_answer() {
        let (client, _) = spawn_server().await;
        let answers = PlaceholderAnswer {
            delay: Duration::ZERO,
        };
        let mut out = Vec::new();
        handle_show(&client, &answers, &mut out, "1".into(), false)
            .await
            .unwrap();

        let out = text(out);
        assert!(out.starts_with("[1] Fix API bug\n"));
        assert!(out.contains("Debugged the api call\n"));
        assert!(out.contains("Generating answer...\n"));
        assert!(out.ends_with("Answer: This is an AI-generated answer for: Debugged the api call\n"));
    }

    #[tokio::test]
    async fn show_can_skip_answer() {
        let (client, _) = spawn_server().await;
        let answers = PlaceholderAnswer::default();
        let mut out = Vec::new();
        handle_show(&client, &answers, &mut out, "1".into(), true)
            .await
            .unwrap();
        assert!(!text(out).contains("Answer:"));
    }

    #[test]
    fn suggest_prints_tags_or_fallback() {
        let mut out = Vec::new();
        handle_suggest(&mut out, vec!["React".into(), "API".into()]).unwrap();
        assert!(text(out).starts_with("React\nJavaScript\n"));

        let mut out = Vec::new();
        handle_suggest(&mut out, vec!["lunch".into()]).unwrap();
        assert_eq!(text(out), "No suggestions.\n");
    }
}
