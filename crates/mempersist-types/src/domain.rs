use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversational role recorded in a Claude Code session log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized conversational turn extracted from one log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: Option<String>,
}

/// Upload payload for the `/threads` endpoint
///
/// Immutable after construction; message order is the original log line
/// order and is never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadPayload {
    pub thread_id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub participants: Vec<String>,
    pub source: String,
    pub project: String,
    pub workspace: String,
    pub import_date: String,
    pub metadata: ThreadMetadata,
}

/// Diagnostic metadata attached to an uploaded thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadMetadata {
    pub session_file: String,
    pub total_lines_in_file: usize,
    pub messages_extracted: usize,
    pub lines_skipped: usize,
    pub persist_method: String,
}
