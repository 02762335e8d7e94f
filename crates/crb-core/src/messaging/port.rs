use async_trait::async_trait;

use crate::{
    domain::{ChannelId, ChatId, FileRef, MessageRef},
    Result,
};

/// Outbound messenger port.
///
/// Telegram is the only implementation today; tests drive the relay through
/// an in-memory recording implementation.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    /// Publish a previously-uploaded photo to a channel, by file id.
    async fn send_photo(&self, channel: &ChannelId, file: &FileRef) -> Result<()>;

    /// Publish a previously-uploaded video to a channel, by file id.
    async fn send_video(&self, channel: &ChannelId, file: &FileRef) -> Result<()>;

    /// Answer the originating conversation with plain text.
    async fn reply_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef>;
}
