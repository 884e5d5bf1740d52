use serde::Deserialize;

/// Bot API response envelope. `result` is absent when `ok` is false.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub description: Option<String>,
    pub result: Option<T>,
}

/// The subset of a Telegram message the notifier cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
}
