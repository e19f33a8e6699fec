#[cfg(test)]
#[path = "data_source_test.rs"]
mod tests;
use anyhow::bail;
use anyhow::Result;
use chrono::DateTime;
use chrono::Utc;

/// Connection state of a data source. `Connected` carries the fields that
/// only exist while connected, so they cannot outlive the status.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceStatus {
    Disconnected,
    Connecting,
    Connected {
        last_updated: DateTime<Utc>,
        data_points: u32,
    },
    Error,
}

impl SourceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SourceStatus::Disconnected => return "disconnected",
            SourceStatus::Connecting => return "connecting",
            SourceStatus::Connected { .. } => return "connected",
            SourceStatus::Error => return "error",
        }
    }
}

#[derive(Clone, Debug)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub status: SourceStatus,
}

impl DataSource {
    pub fn new(id: &str, name: &str) -> DataSource {
        return DataSource::new_with_status(id, name, SourceStatus::Disconnected);
    }

    pub fn new_with_status(id: &str, name: &str, status: SourceStatus) -> DataSource {
        return DataSource {
            id: id.to_string(),
            name: name.to_string(),
            status,
        };
    }

    pub fn is_connected(&self) -> bool {
        return matches!(self.status, SourceStatus::Connected { .. });
    }

    pub fn begin_connect(&mut self) -> Result<()> {
        match self.status {
            SourceStatus::Disconnected | SourceStatus::Error => {
                self.status = SourceStatus::Connecting;
                return Ok(());
            }
            _ => {
                bail!(format!(
                    "{id} cannot start connecting while {status}",
                    id = self.id,
                    status = self.status.label()
                ));
            }
        }
    }

    pub fn complete_connect(&mut self, data_points: u32) -> Result<()> {
        if self.status != SourceStatus::Connecting {
            bail!(format!(
                "{id} cannot complete a connect while {status}",
                id = self.id,
                status = self.status.label()
            ));
        }

        self.status = SourceStatus::Connected {
            last_updated: Utc::now(),
            data_points,
        };

        return Ok(());
    }

    pub fn fail_connect(&mut self) -> Result<()> {
        if self.status != SourceStatus::Connecting {
            bail!(format!(
                "{id} cannot fail a connect while {status}",
                id = self.id,
                status = self.status.label()
            ));
        }

        self.status = SourceStatus::Error;
        return Ok(());
    }

    // Disconnecting reflects the user's intent to stop using a source. It is
    // honored from every state, backend acknowledged or not.
    pub fn disconnect(&mut self) {
        self.status = SourceStatus::Disconnected;
    }
}
