//! Telegram update handling.
//!
//! The single message handler classifies the raw `Message` into the core's
//! inbound model once, at the boundary, then hands it to the relay dispatch.
//! Errors from the dispatch (failed outbound sends) are returned as-is so the
//! dispatcher's error handler reports them.

use std::sync::Arc;

use teloxide::types::{Chat, Message};

use crb_core::{
    domain::{ChatId, ChatKind, FileRef, UserId},
    messaging::types::{InboundMessage, MessageContent},
    relay, Error,
};

use crate::router::AppState;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> Result<(), Error> {
    let inbound = classify(&msg);
    relay::handle_message(&state.cfg, state.messenger.as_ref(), &inbound).await
}

fn classify(msg: &Message) -> InboundMessage {
    InboundMessage {
        chat_id: ChatId(msg.chat.id.0),
        chat_kind: chat_kind(&msg.chat),
        sender: msg.from().map(|u| UserId(u.id.0 as i64)),
        content: classify_content(msg),
    }
}

fn chat_kind(chat: &Chat) -> ChatKind {
    if chat.is_private() {
        ChatKind::Private
    } else if chat.is_group() || chat.is_supergroup() {
        ChatKind::Group
    } else if chat.is_channel() {
        ChatKind::Channel
    } else {
        ChatKind::Other
    }
}

fn classify_content(msg: &Message) -> MessageContent {
    if let Some(text) = msg.text() {
        if let Some(name) = parse_command(text) {
            return MessageContent::Command(name);
        }
        return MessageContent::Text(text.to_string());
    }

    if let Some(sizes) = msg.photo() {
        return MessageContent::Photo(
            sizes.iter().map(|p| FileRef(p.file.id.clone())).collect(),
        );
    }

    if let Some(video) = msg.video() {
        return MessageContent::Video(FileRef(video.file.id.clone()));
    }

    MessageContent::Empty
}

/// Telegram may send `/cmd@botname arg1 ...`; only the bare lowercased name
/// matters here. Non-command text returns `None`.
fn parse_command(text: &str) -> Option<String> {
    let first = text.trim().split_whitespace().next().unwrap_or("");
    if !first.starts_with('/') {
        return None;
    }

    let name = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    if name.is_empty() {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_command() {
        assert_eq!(parse_command("/start"), Some("start".to_string()));
    }

    #[test]
    fn strips_botname_suffix_and_args() {
        assert_eq!(
            parse_command("/Start@MyRelayBot now please"),
            Some("start".to_string())
        );
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse_command("hello /start"), None);
        assert_eq!(parse_command("/"), None);
    }
}
