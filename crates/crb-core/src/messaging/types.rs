use crate::domain::{ChatId, ChatKind, FileRef, UserId};

/// One message received from the messaging platform.
///
/// Built once by the platform adapter; platform-specific fields stay in the
/// adapter. Not persisted anywhere.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub chat_kind: ChatKind,
    /// Absent for messages without an identifiable sender (e.g. anonymous
    /// channel posts).
    pub sender: Option<UserId>,
    pub content: MessageContent,
}

/// Classified message content.
///
/// The adapter decides the tag exactly once; the relay dispatch matches on it
/// exhaustively instead of probing for fields.
#[derive(Clone, Debug)]
pub enum MessageContent {
    /// `/name` command, lowercased, without the leading slash or bot suffix.
    Command(String),
    /// Photo-size variants as delivered by the platform, ascending resolution.
    Photo(Vec<FileRef>),
    /// Single video reference.
    Video(FileRef),
    /// Plain text.
    Text(String),
    /// Anything else (stickers, locations, ...).
    Empty,
}
