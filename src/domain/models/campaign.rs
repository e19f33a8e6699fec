#[cfg(test)]
#[path = "campaign_test.rs"]
mod tests;
use anyhow::Result;
use chrono::DateTime;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// A generated campaign proposal. Produced by the backend and treated as an
/// immutable value; the payload is kept opaque and only rendered or copied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub confidence: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "jsonPayload")]
    pub payload: serde_json::Value,
}

impl Campaign {
    pub fn confidence_percent(&self) -> u8 {
        return (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8;
    }

    pub fn payload_pretty(&self) -> Result<String> {
        return Ok(serde_json::to_string_pretty(&self.payload)?);
    }

    pub fn summary(&self) -> String {
        return format!(
            "{kind} · {percent}% confidence",
            kind = self.kind,
            percent = self.confidence_percent()
        );
    }
}
