use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::Campaign;
use super::DataSource;

pub type GatewayBox = Arc<dyn Gateway + Send + Sync>;

pub struct ChatPrompt {
    pub text: String,
    pub connected_sources: Vec<String>,
}

impl ChatPrompt {
    pub fn new(text: &str, connected_sources: Vec<String>) -> ChatPrompt {
        return ChatPrompt {
            text: text.to_string(),
            connected_sources,
        };
    }
}

pub struct ChatReply {
    pub text: String,
    pub campaigns: Vec<Campaign>,
    pub processing_time: u64,
}

/// Backend acknowledgement for connect and disconnect calls. The estimated
/// time is advisory only and never drives client state.
pub struct ConnectAck {
    pub status: String,
    pub estimated_time: Option<u64>,
    pub message: String,
}

#[async_trait]
pub trait Gateway {
    /// Fetches all known data sources with their current statuses. Called
    /// once at session start.
    async fn list_sources(&self) -> Result<Vec<DataSource>>;

    /// Requests a connection to the addressed data source.
    async fn connect_source(&self, id: &str) -> Result<ConnectAck>;

    /// Requests a disconnect for the addressed data source. Callers treat
    /// failures as advisory; local state has already moved on.
    async fn disconnect_source(&self, id: &str) -> Result<ConnectAck>;

    /// Submits a chat message together with the connected-source context and
    /// resolves with the assistant's reply and any generated campaigns.
    async fn send_message(&self, prompt: ChatPrompt) -> Result<ChatReply>;
}
