use crate::parser::ParsedSession;
use crate::{Error, Result};
use chrono::{Local, Utc};
use mempersist_types::{Message, ThreadMetadata, ThreadPayload};
use std::path::Path;

/// Source tag expected by the Nowledge Mem importer
const SOURCE: &str = "claude-code";

/// Fixed persist_method tag recorded in thread metadata
const PERSIST_METHOD: &str = "mem-persist-cli";

/// Assemble the upload payload for one parsed session.
///
/// `thread_id` is `{project_name}_{YYYYMMDD}_{HHMMSS}` from the construction
/// time, not from message timestamps. Fails when no conversational messages
/// were extracted; an empty thread is a reported condition, never an upload.
pub fn build_thread_payload(
    project_path: &Path,
    session_file: &Path,
    parsed: ParsedSession,
    custom_title: Option<&str>,
) -> Result<ThreadPayload> {
    if parsed.messages.is_empty() {
        return Err(Error::EmptySession {
            session_file: session_file.to_path_buf(),
        });
    }

    let project_name = project_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());

    let now = Local::now();
    let thread_id = format!("{}_{}", project_name, now.format("%Y%m%d_%H%M%S"));

    let title = match custom_title {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => format!("Claude Code Session - {}", now.format("%Y-%m-%d")),
    };

    let participants = collect_participants(&parsed.messages);

    let session_file_name = session_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| session_file.display().to_string());

    Ok(ThreadPayload {
        thread_id,
        title,
        participants,
        source: SOURCE.to_string(),
        project: project_name,
        workspace: project_path.display().to_string(),
        import_date: Utc::now().to_rfc3339(),
        metadata: ThreadMetadata {
            session_file: session_file_name,
            total_lines_in_file: parsed.total_lines,
            messages_extracted: parsed.messages.len(),
            lines_skipped: parsed.skipped_lines,
            persist_method: PERSIST_METHOD.to_string(),
        },
        messages: parsed.messages,
    })
}

/// Distinct roles actually present, in first-appearance order
fn collect_participants(messages: &[Message]) -> Vec<String> {
    let mut participants: Vec<String> = Vec::new();
    for message in messages {
        let role = message.role.to_string();
        if !participants.contains(&role) {
            participants.push(role);
        }
    }
    participants
}
