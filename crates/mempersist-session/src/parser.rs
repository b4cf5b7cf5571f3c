use crate::schema::SessionRecord;
use crate::{Error, Result};
use mempersist_types::{Message, Role};
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Maximum stored content length per message, in characters.
/// Over-length content is truncated silently, with no marker.
pub const MAX_CONTENT_CHARS: usize = 15_000;

/// Flattened content at or below this length is tool-echo noise, not a turn
const MIN_CONTENT_CHARS: usize = 5;

/// Result of one streaming pass over a session file
#[derive(Debug)]
pub struct ParsedSession {
    pub messages: Vec<Message>,
    pub total_lines: usize,
    pub skipped_lines: usize,
}

/// Parse a session log and extract conversational messages in line order.
///
/// `max_messages` caps extraction at the earliest N conversational records;
/// 0 means unlimited. Raw lines are still counted past the cap. Malformed
/// lines are counted and skipped, never fatal: a read of a file mid-append
/// may see a truncated trailing line.
pub fn parse_session_file(path: &Path, max_messages: usize) -> Result<ParsedSession> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut messages = Vec::new();
    let mut total_lines = 0usize;
    let mut skipped_lines = 0usize;

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            // Non-UTF8 bytes invalidate one line, not the whole file
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                total_lines += 1;
                skipped_lines += 1;
                continue;
            }
            Err(err) => return Err(Error::Io(err)),
        };
        total_lines += 1;

        if line.trim().is_empty() {
            continue;
        }

        // Past the cap, lines are only counted
        if max_messages > 0 && messages.len() >= max_messages {
            continue;
        }

        let record: SessionRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(_) => {
                skipped_lines += 1;
                continue;
            }
        };

        let (role, record) = match record {
            SessionRecord::User(rec) => (Role::User, rec),
            SessionRecord::Assistant(rec) => (Role::Assistant, rec),
            SessionRecord::Unknown => continue,
        };

        let Some(body) = record.message else {
            continue;
        };

        let content = sanitize_content(&body.flatten_text());
        if content.chars().count() <= MIN_CONTENT_CHARS {
            continue;
        }

        messages.push(Message {
            role,
            content: clamp_content(content),
            timestamp: record.timestamp,
        });
    }

    Ok(ParsedSession {
        messages,
        total_lines,
        skipped_lines,
    })
}

/// Strip control characters below U+0020 (and DEL) except newline, carriage
/// return, and tab
fn sanitize_content(content: &str) -> String {
    content
        .chars()
        .filter(|c| {
            !matches!(
                c,
                '\u{00}'..='\u{08}' | '\u{0b}' | '\u{0c}' | '\u{0e}'..='\u{1f}' | '\u{7f}'
            )
        })
        .collect()
}

fn clamp_content(content: String) -> String {
    if content.chars().count() <= MAX_CONTENT_CHARS {
        content
    } else {
        content.chars().take(MAX_CONTENT_CHARS).collect()
    }
}
