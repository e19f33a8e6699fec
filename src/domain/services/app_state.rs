#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;
use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::actions::help_text;
use super::CampaignLedger;
use super::ChatSession;
use super::Connections;
use super::MessageList;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GatewayBox;
use crate::domain::models::SlashCommand;
use crate::domain::models::SourceStatus;

pub struct AppState {
    pub campaigns: CampaignLedger,
    pub chat: ChatSession,
    pub connections: Connections,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub message_list: MessageList,
    pub scroll: Scroll,
}

impl Default for AppState {
    fn default() -> AppState {
        return AppState {
            campaigns: CampaignLedger::default(),
            chat: ChatSession::default(),
            connections: Connections::default(),
            last_known_height: 0,
            last_known_width: 0,
            message_list: MessageList::default(),
            scroll: Scroll::default(),
        };
    }
}

impl AppState {
    pub async fn new(gateway: &GatewayBox) -> AppState {
        let mut app_state = AppState::default();
        app_state.connections.initialize(gateway).await;
        app_state.sync_dependants();

        return app_state;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    /// Runs a parsed slash command. Returns true when the UI loop should
    /// exit.
    pub fn handle_slash_command(
        &mut self,
        command: &SlashCommand,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if command.is_quit() {
            return Ok(true);
        }

        if command.is_help() {
            self.chat.push_notice(&help_text());
        } else if command.is_sources() {
            let listing = self.format_sources();
            self.chat.push_notice(&listing);
        } else if command.is_connect() {
            match command.first_arg() {
                Some(id) => {
                    if let Err(err) = self.connections.connect(id, tx) {
                        self.push_command_error(&err);
                    }
                }
                None => {
                    self.chat
                        .push_error("You must specify a data source with `/connect`. Run `/sources` to see the available ids.");
                }
            }
        } else if command.is_disconnect() {
            match command.first_arg() {
                Some(id) => {
                    if let Err(err) = self.connections.disconnect(id, tx) {
                        self.push_command_error(&err);
                    }
                }
                None => {
                    self.chat
                        .push_error("You must specify a data source with `/disconnect`. Run `/sources` to see the available ids.");
                }
            }
        } else if command.is_copy_campaign() {
            match self.campaigns.payload_from_slash_command(command) {
                Ok(payload) => {
                    tx.send(Action::CopyPayload(payload))?;
                }
                Err(err) => {
                    self.push_command_error(&err);
                }
            }
        }

        self.sync_dependants();
        self.scroll.last();

        return Ok(false);
    }

    pub fn send_chat(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let connected = self.connections.connected_ids();
        self.chat.send(text, connected, tx)?;
        self.sync_dependants();

        return Ok(());
    }

    /// Applies a worker-reported resolution to the owning controller.
    pub fn apply_event(&mut self, event: Event) {
        match event {
            Event::SourceConnected { id, data_points } => {
                self.connections.complete_connect(&id, data_points);
            }
            Event::SourceConnectFailed(id) => {
                self.connections.fail_connect(&id);
            }
            Event::ChatReply(reply) => {
                self.chat.handle_reply(reply);
                self.campaigns.replace_from_messages(self.chat.messages());
            }
            Event::ChatFailed() => {
                self.chat.handle_failure();
            }
            Event::Advisory(message) => {
                self.chat.push(message);
            }
            _ => (),
        }

        self.sync_dependants();
    }

    fn format_sources(&self) -> String {
        let listing = self
            .connections
            .sources()
            .iter()
            .map(|source| {
                let mut line = format!(
                    "- ({id}) {name}: {status}",
                    id = source.id,
                    name = source.name,
                    status = source.status.label()
                );
                if let SourceStatus::Connected {
                    last_updated,
                    data_points,
                } = &source.status
                {
                    line = format!(
                        "{line}, {data_points} data points, updated {updated}",
                        updated = last_updated.format("%H:%M:%S")
                    );
                }

                return line;
            })
            .collect::<Vec<String>>();

        return listing.join("\n");
    }

    fn push_command_error(&mut self, err: &anyhow::Error) {
        self.chat.push_error(&format!(
            "There was an error running your command:\n\n{err}"
        ));
    }

    fn sync_dependants(&mut self) {
        self.message_list
            .set_messages(self.chat.messages(), self.last_known_width);

        self.scroll
            .set_state(self.message_list.len(), self.last_known_height);

        if self.chat.is_waiting() {
            self.scroll.last();
        }
    }
}
