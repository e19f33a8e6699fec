#[cfg(test)]
#[path = "connections_test.rs"]
mod tests;
use std::collections::HashSet;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::DataSource;
use crate::domain::models::GatewayBox;

/// Owns the data-source list and drives each source through its connection
/// state machine. Gateway calls are dispatched to the actions worker; their
/// resolutions come back through `complete_connect`/`fail_connect`.
#[derive(Default)]
pub struct Connections {
    sources: Vec<DataSource>,
    pending: HashSet<String>,
    pub demo_mode: bool,
}

impl Connections {
    pub fn fallback_sources() -> Vec<DataSource> {
        return vec![
            DataSource::new("google_ads", "Google Ads"),
            DataSource::new("shopify", "Shopify"),
            DataSource::new("facebook_page", "Facebook Page"),
        ];
    }

    /// Loads the source list from the gateway. A failed fetch is not fatal:
    /// the fixed fallback set is used instead and demo mode is flagged so the
    /// UI can surface an advisory banner.
    pub async fn initialize(&mut self, gateway: &GatewayBox) {
        match gateway.list_sources().await {
            Ok(sources) => {
                self.sources = sources;
                self.demo_mode = false;
            }
            Err(err) => {
                tracing::warn!(error = ?err, "Failed to fetch data sources, entering demo mode");
                self.sources = Connections::fallback_sources();
                self.demo_mode = true;
            }
        }
    }

    /// Optimistically marks the source as connecting and dispatches the
    /// gateway call. Repeat invocations while a connect for the same id is in
    /// flight are suppressed, as are connects for sources already connected.
    pub fn connect(&mut self, id: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.pending.contains(id) {
            tracing::debug!(source = id, "Connect already in flight, ignoring");
            return Ok(());
        }

        let source_op = self.sources.iter_mut().find(|e| return e.id == id);
        if source_op.is_none() {
            bail!(format!("There is no data source named {id}."));
        }

        let source = source_op.unwrap();
        if source.begin_connect().is_err() {
            tracing::debug!(source = id, status = source.status.label(), "Connect is a no-op");
            return Ok(());
        }

        self.pending.insert(id.to_string());
        tx.send(Action::ConnectSource(id.to_string()))?;

        return Ok(());
    }

    pub fn complete_connect(&mut self, id: &str, data_points: u32) {
        self.pending.remove(id);
        if let Some(source) = self.sources.iter_mut().find(|e| return e.id == id) {
            if let Err(err) = source.complete_connect(data_points) {
                tracing::warn!(error = ?err, source = id, "Dropping stale connect acknowledgement");
            }
        }
    }

    pub fn fail_connect(&mut self, id: &str) {
        self.pending.remove(id);
        if let Some(source) = self.sources.iter_mut().find(|e| return e.id == id) {
            if let Err(err) = source.fail_connect() {
                tracing::warn!(error = ?err, source = id, "Dropping stale connect rejection");
            }
        }
    }

    /// Reverts the source locally and dispatches the gateway call. The local
    /// transition is unconditional: the user's intent to stop using a source
    /// outranks backend confirmation, so a failed call is only ever logged.
    pub fn disconnect(&mut self, id: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let source_op = self.sources.iter_mut().find(|e| return e.id == id);
        if source_op.is_none() {
            bail!(format!("There is no data source named {id}."));
        }

        source_op.unwrap().disconnect();
        tx.send(Action::DisconnectSource(id.to_string()))?;

        return Ok(());
    }

    pub fn sources(&self) -> &[DataSource] {
        return &self.sources;
    }

    pub fn connected_ids(&self) -> Vec<String> {
        return self
            .sources
            .iter()
            .filter(|e| return e.is_connected())
            .map(|e| return e.id.to_string())
            .collect();
    }
}
