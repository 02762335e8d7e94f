use std::sync::Arc;

use teloxide::{
    dispatching::Dispatcher, dptree, error_handlers::LoggingErrorHandler, prelude::*,
};
use tracing::info;

use crb_core::{config::Config, messaging::port::MessagingPort};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Long-poll for updates until the process is killed.
pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        info!("relay bot started: @{}", me.username());
    }
    info!("owner: {}", cfg.owner_id.0);
    info!("target channel: {}", cfg.target_channel.0);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState { cfg, messenger });

    let handler = Update::filter_message().endpoint(handlers::handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .error_handler(LoggingErrorHandler::with_custom_text("relay"))
        .build()
        .dispatch()
        .await;

    Ok(())
}
