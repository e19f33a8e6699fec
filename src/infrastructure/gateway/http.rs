#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Campaign;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatReply;
use crate::domain::models::ConnectAck;
use crate::domain::models::DataSource;
use crate::domain::models::Gateway;
use crate::domain::models::SourceStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SourceWire {
    id: String,
    name: String,
    status: String,
    #[serde(rename = "lastUpdated")]
    last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "dataPoints")]
    data_points: Option<u32>,
}

impl SourceWire {
    fn into_data_source(self) -> DataSource {
        let status = match self.status.as_str() {
            "connected" => match (self.last_updated, self.data_points) {
                (Some(last_updated), Some(data_points)) => SourceStatus::Connected {
                    last_updated,
                    data_points,
                },
                _ => {
                    tracing::warn!(
                        source = self.id,
                        "Connected source is missing its fields, treating as disconnected"
                    );
                    SourceStatus::Disconnected
                }
            },
            "connecting" => SourceStatus::Connecting,
            "error" => SourceStatus::Error,
            _ => SourceStatus::Disconnected,
        };

        return DataSource::new_with_status(&self.id, &self.name, status);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ListSourcesResponse {
    sources: Vec<SourceWire>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ConnectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    credentials: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ConnectResponse {
    status: String,
    #[serde(default)]
    estimated_time: Option<u64>,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChatContext {
    connected_sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChatRequest {
    message: String,
    context: ChatContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChatResponse {
    response: String,
    campaigns: Vec<Campaign>,
    processing_time: u64,
}

pub struct HttpGateway {
    url: String,
    timeout: String,
}

impl Default for HttpGateway {
    fn default() -> HttpGateway {
        return HttpGateway {
            url: Config::get(ConfigKey::ApiURL),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl HttpGateway {
    fn request_timeout(&self) -> Result<Duration> {
        return Ok(Duration::from_millis(self.timeout.parse::<u64>()?));
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    #[allow(clippy::implicit_return)]
    async fn list_sources(&self) -> Result<Vec<DataSource>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/api/data-sources", url = self.url))
            .timeout(self.request_timeout()?)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Failed to list data sources");
            bail!("Failed to list data sources");
        }

        let body = res.json::<ListSourcesResponse>().await?;
        let sources = body
            .sources
            .into_iter()
            .map(|e| return e.into_data_source())
            .collect::<Vec<DataSource>>();

        return Ok(sources);
    }

    #[allow(clippy::implicit_return)]
    async fn connect_source(&self, id: &str) -> Result<ConnectAck> {
        let res = reqwest::Client::new()
            .post(format!(
                "{url}/api/data-sources/{id}/connect",
                url = self.url
            ))
            .json(&ConnectRequest::default())
            .timeout(self.request_timeout()?)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                source = id,
                "Failed to connect data source"
            );
            bail!(format!("Failed to connect {id}"));
        }

        let body = res.json::<ConnectResponse>().await?;
        return Ok(ConnectAck {
            status: body.status,
            estimated_time: body.estimated_time,
            message: body.message,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn disconnect_source(&self, id: &str) -> Result<ConnectAck> {
        let res = reqwest::Client::new()
            .delete(format!(
                "{url}/api/data-sources/{id}/disconnect",
                url = self.url
            ))
            .timeout(self.request_timeout()?)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                source = id,
                "Failed to disconnect data source"
            );
            bail!(format!("Failed to disconnect {id}"));
        }

        let body = res.json::<ConnectResponse>().await?;
        return Ok(ConnectAck {
            status: body.status,
            estimated_time: body.estimated_time,
            message: body.message,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn send_message(&self, prompt: ChatPrompt) -> Result<ChatReply> {
        let req = ChatRequest {
            message: prompt.text,
            context: ChatContext {
                connected_sources: prompt.connected_sources,
            },
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/chat/message", url = self.url))
            .json(&req)
            .timeout(self.request_timeout()?)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Failed to send chat message");
            bail!("Failed to send chat message");
        }

        let body = res.json::<ChatResponse>().await?;
        tracing::debug!(body = ?body, "Chat response");

        return Ok(ChatReply {
            text: body.response,
            campaigns: body.campaigns,
            processing_time: body.processing_time,
        });
    }
}
