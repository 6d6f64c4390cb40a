use std::time::Duration;

use dwed_chat_core::config::DEFAULT_API_BASE;
use dwed_chat_core::{ChatBackend, ChatError, ChatReply, ChatRequest, ClientConfig};
use futures_util::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// Backend location, fixed at build time (`DWED_API_BASE`, `DWED_TIMEOUT_SECS`).
pub fn client_config() -> ClientConfig {
    let base = option_env!("DWED_API_BASE").unwrap_or(DEFAULT_API_BASE);
    let config = ClientConfig::new(base);
    match option_env!("DWED_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok()) {
        Some(0) => config.with_timeout(None),
        Some(secs) => config.with_timeout(Some(Duration::from_secs(secs))),
        None => config,
    }
}

/// `POST /api/chat` over the browser's fetch API.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl ChatBackend for HttpBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        let url = self.config.chat_url();
        let call = Box::pin(post_chat(&url, request));

        let Some(limit) = self.config.request_timeout else {
            return call.await;
        };
        let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
        match select(call, Box::pin(TimeoutFuture::new(millis))).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => Err(ChatError::Timeout(limit)),
        }
    }
}

async fn post_chat(url: &str, request: &ChatRequest) -> Result<ChatReply, ChatError> {
    let resp = Request::post(url)
        .json(request)
        .map_err(|e| ChatError::Network(format!("Serialize error: {e}")))?
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(ChatError::Status(resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| ChatError::Malformed(e.to_string()))?;
    ChatReply::from_json(&body)
}
