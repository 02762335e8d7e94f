use tracing::{info, warn};

use crate::{
    domain::{ChatKind, UserId},
    messaging::types::InboundMessage,
};

// ============== Authorization ==============

/// True only for the configured owner writing in a direct (private) chat.
///
/// Evaluated fresh per message. A `false` here means the caller takes no
/// action at all, not even an error reply: strangers probing the bot get
/// total silence.
pub fn is_allowed(msg: &InboundMessage, owner: UserId) -> bool {
    let Some(sender) = msg.sender else {
        return false;
    };

    if sender != owner {
        warn!("got message from unauthorized user {}", sender.0);
        return false;
    }

    if msg.chat_kind != ChatKind::Private {
        info!("ignoring non-private chat message: {}", msg.chat_id.0);
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChatId;
    use crate::messaging::types::MessageContent;

    fn msg(sender: Option<i64>, chat_kind: ChatKind) -> InboundMessage {
        InboundMessage {
            chat_id: ChatId(7),
            chat_kind,
            sender: sender.map(UserId),
            content: MessageContent::Empty,
        }
    }

    #[test]
    fn owner_in_private_chat_is_allowed() {
        assert!(is_allowed(&msg(Some(42), ChatKind::Private), UserId(42)));
    }

    #[test]
    fn wrong_sender_is_rejected() {
        assert!(!is_allowed(&msg(Some(99), ChatKind::Private), UserId(42)));
    }

    #[test]
    fn absent_sender_is_rejected() {
        assert!(!is_allowed(&msg(None, ChatKind::Private), UserId(42)));
    }

    #[test]
    fn non_private_chats_are_rejected_even_for_owner() {
        assert!(!is_allowed(&msg(Some(42), ChatKind::Group), UserId(42)));
        assert!(!is_allowed(&msg(Some(42), ChatKind::Channel), UserId(42)));
        assert!(!is_allowed(&msg(Some(42), ChatKind::Other), UserId(42)));
    }
}
