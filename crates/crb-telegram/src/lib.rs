//! Telegram adapter (teloxide).
//!
//! This crate implements the `crb-core` MessagingPort over the Telegram Bot
//! API and owns the long-polling loop.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InputFile, Recipient},
};

pub mod handlers;
pub mod router;

use crb_core::{
    domain::{ChannelId, ChatId, FileRef, MessageId, MessageRef},
    errors::Error,
    messaging::port::MessagingPort,
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    /// Numeric channel ids (`-100...`) address the chat directly; anything
    /// else is treated as a channel username.
    fn tg_recipient(channel: &ChannelId) -> Recipient {
        match channel.0.parse::<i64>() {
            Ok(id) => Recipient::Id(teloxide::types::ChatId(id)),
            Err(_) => Recipient::ChannelUsername(channel.0.clone()),
        }
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_photo(&self, channel: &ChannelId, file: &FileRef) -> Result<()> {
        self.bot
            .send_photo(
                Self::tg_recipient(channel),
                InputFile::file_id(file.0.clone()),
            )
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn send_video(&self, channel: &ChannelId, file: &FileRef) -> Result<()> {
        self.bot
            .send_video(
                Self::tg_recipient(channel),
                InputFile::file_id(file.0.clone()),
            )
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn reply_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .await
            .map_err(Self::map_err)?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_channel_id_becomes_chat_recipient() {
        let r = TelegramMessenger::tg_recipient(&ChannelId("-1001234567890".to_string()));
        assert_eq!(r, Recipient::Id(teloxide::types::ChatId(-1001234567890)));
    }

    #[test]
    fn username_channel_id_becomes_username_recipient() {
        let r = TelegramMessenger::tg_recipient(&ChannelId("@mychan".to_string()));
        assert_eq!(r, Recipient::ChannelUsername("@mychan".to_string()));
    }
}
