use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    services::notifier::{Notifier, NotifyError, TelegramNotifier},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when Telegram credentials are missing; submissions then fail.
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl AppState {
    pub fn new(config: Config, notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self { config, notifier }
    }

    /// Builds the Telegram notifier from the configured credentials, if any.
    pub fn from_config(config: Config) -> Result<Self, NotifyError> {
        let notifier: Option<Arc<dyn Notifier>> = match config.telegram_credentials() {
            Some((token, chat_id)) => Some(Arc::new(TelegramNotifier::new(
                &config.telegram_api_base,
                token,
                chat_id,
                config.notify_timeout_secs,
            )?)),
            None => None,
        };

        Ok(Self::new(config, notifier))
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
