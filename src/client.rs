use dwed_chat_core::{ChatBackend, ChatError, ChatReply, ChatRequest, ClientConfig};

use crate::errors::AppError;

/// `POST /api/chat` over reqwest, for the terminal client.
pub struct ReqwestBackend {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestBackend {
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(AppError::HttpClient)?;
        Ok(Self { http, config })
    }

    fn transport_error(&self, e: reqwest::Error) -> ChatError {
        if e.is_timeout() {
            ChatError::Timeout(self.config.request_timeout.unwrap_or_default())
        } else if e.is_decode() || e.is_body() {
            ChatError::Malformed(e.to_string())
        } else {
            ChatError::Network(e.to_string())
        }
    }
}

impl ChatBackend for ReqwestBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        let resp = self
            .http
            .post(self.config.chat_url())
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        ChatReply::from_json(&body)
    }
}
