use serde::Deserialize;

/// One decoded line of a session log.
///
/// Only `user` and `assistant` records are conversational; every other type
/// (summaries, tool telemetry, file-history snapshots) collapses into
/// `Unknown` and is safely skippable.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub(crate) enum SessionRecord {
    User(ConversationRecord),
    Assistant(ConversationRecord),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConversationRecord {
    #[serde(default)]
    pub message: Option<MessageBody>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// The nested message object: a bare string or structured content blocks
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MessageBody {
    Text(String),
    Structured(StructuredMessage),
}

#[derive(Debug, Deserialize)]
pub(crate) struct StructuredMessage {
    #[serde(default, deserialize_with = "deserialize_content")]
    pub content: Vec<ContentBlock>,
}

/// Content blocks within a structured message
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub(crate) enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Unknown,
}

fn deserialize_content<'de, D>(deserializer: D) -> Result<Vec<ContentBlock>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrBlocks {
        String(String),
        Blocks(Vec<ContentBlock>),
    }

    match StringOrBlocks::deserialize(deserializer)? {
        StringOrBlocks::String(s) => Ok(vec![ContentBlock::Text { text: s }]),
        StringOrBlocks::Blocks(blocks) => Ok(blocks),
    }
}

impl MessageBody {
    /// Flatten to a single string, concatenating text blocks in order and
    /// ignoring non-textual blocks (tool invocations, images)
    pub fn flatten_text(&self) -> String {
        match self {
            MessageBody::Text(text) => text.clone(),
            MessageBody::Structured(msg) => {
                let mut out = String::new();
                for block in &msg.content {
                    if let ContentBlock::Text { text } = block {
                        out.push_str(text);
                    }
                }
                out
            }
        }
    }
}
