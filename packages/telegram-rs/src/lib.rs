//! Minimal Telegram Bot API client.
//!
//! Covers exactly what a notifier bot needs: posting a photo with a caption
//! and posting an HTML-formatted message to a chat.

pub mod error;
pub mod models;

pub use error::{Result, TelegramError};
pub use models::Message;

use std::path::Path;

use reqwest::multipart;

use crate::models::ApiResponse;

const BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct TelegramOptions {
    pub bot_token: String,
}

#[derive(Debug, Clone)]
pub struct TelegramService {
    options: TelegramOptions,
    client: reqwest::Client,
}

impl TelegramService {
    pub fn new(options: TelegramOptions) -> Self {
        Self {
            options,
            client: reqwest::Client::new(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", BASE_URL, self.options.bot_token, method)
    }

    /// Upload a photo from disk and post it to a chat with a caption.
    ///
    /// The caption may use Telegram's HTML formatting.
    pub async fn send_photo(
        &self,
        chat_id: &str,
        photo: &Path,
        caption: &str,
    ) -> Result<Message> {
        let bytes = tokio::fs::read(photo).await?;
        let file_name = photo
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo.png".to_string());

        let form = multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .text("parse_mode", "HTML")
            .part("photo", multipart::Part::bytes(bytes).file_name(file_name));

        let resp = self
            .client
            .post(self.method_url("sendPhoto"))
            .multipart(form)
            .send()
            .await?;

        Self::unwrap_response(resp).await
    }

    /// Post an HTML-formatted text message to a chat.
    pub async fn send_message(&self, chat_id: &str, html: &str) -> Result<Message> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": html,
            "parse_mode": "HTML",
        });

        let resp = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await?;

        Self::unwrap_response(resp).await
    }

    async fn unwrap_response(resp: reqwest::Response) -> Result<Message> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(%status, body, "Telegram API call failed");
            return Err(TelegramError::Api(format!("{status}: {body}")));
        }

        let api_resp: ApiResponse<Message> = resp.json().await?;
        if !api_resp.ok {
            let description = api_resp
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(TelegramError::Api(description));
        }
        api_resp
            .result
            .ok_or_else(|| TelegramError::Api("ok response with no result".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url_embeds_token() {
        let service = TelegramService::new(TelegramOptions {
            bot_token: "123:abc".into(),
        });
        assert_eq!(
            service.method_url("sendPhoto"),
            "https://api.telegram.org/bot123:abc/sendPhoto"
        );
    }

    #[test]
    fn test_error_envelope_deserializes() {
        let raw = r#"{ "ok": false, "description": "Bad Request: chat not found" }"#;
        let resp: ApiResponse<Message> = serde_json::from_str(raw).unwrap();
        assert!(!resp.ok);
        assert_eq!(
            resp.description.as_deref(),
            Some("Bad Request: chat not found")
        );
        assert!(resp.result.is_none());
    }
}
