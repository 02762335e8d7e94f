use tracing::info;

use crate::{
    config::Config,
    messaging::{
        port::MessagingPort,
        types::{InboundMessage, MessageContent},
    },
    security, Result,
};

/// Fixed reply texts. Authorized messages get exactly one of these;
/// unauthorized ones get nothing.
pub mod replies {
    pub const GREETING: &str = "Hi! 👋\n\n\
        Forward me a channel post with a photo or video \
        and I will publish the media to your channel.";

    pub const PHOTO_SENT: &str = "✅ Photo sent to channel.";

    pub const VIDEO_SENT: &str = "✅ Video sent to channel.";

    pub const NO_MEDIA: &str = "I see a message, but it has no photo or video.\n\
        Forward me a channel post with media (photo/video).";

    pub const NO_MEDIA_IN_MESSAGE: &str = "This message has no photo or video 🤷‍♂️";
}

/// Authorize and dispatch one inbound message.
///
/// Unauthorized messages are dropped without any outbound call. Send errors
/// are not handled here; they propagate to the caller with no local state to
/// roll back.
pub async fn handle_message(
    cfg: &Config,
    port: &dyn MessagingPort,
    msg: &InboundMessage,
) -> Result<()> {
    if !security::is_allowed(msg, cfg.owner_id) {
        return Ok(());
    }

    match &msg.content {
        MessageContent::Command(name) if name == "start" => {
            port.reply_text(msg.chat_id, replies::GREETING).await?;
        }
        MessageContent::Photo(sizes) => match sizes.last() {
            // Size variants arrive ascending by resolution; the last one is
            // conventionally the largest and is forwarded unmodified.
            Some(file) => {
                port.send_photo(&cfg.target_channel, file).await?;
                port.reply_text(msg.chat_id, replies::PHOTO_SENT).await?;
                info!(
                    "photo from user {} forwarded to {}",
                    cfg.owner_id.0, cfg.target_channel.0
                );
            }
            // Unreachable given adapter classification; kept as a guard.
            None => {
                port.reply_text(msg.chat_id, replies::NO_MEDIA_IN_MESSAGE)
                    .await?;
            }
        },
        MessageContent::Video(file) => {
            port.send_video(&cfg.target_channel, file).await?;
            port.reply_text(msg.chat_id, replies::VIDEO_SENT).await?;
            info!(
                "video from user {} forwarded to {}",
                cfg.owner_id.0, cfg.target_channel.0
            );
        }
        MessageContent::Command(_) | MessageContent::Text(_) | MessageContent::Empty => {
            port.reply_text(msg.chat_id, replies::NO_MEDIA).await?;
        }
    }

    Ok(())
}
