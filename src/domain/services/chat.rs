#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatReply;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

pub const WELCOME_TEXT: &str = "Hello! I'm your campaign assistant. Connect your data sources and tell me what kind of campaign you'd like to create.";
pub const LOADING_TEXT: &str =
    "Analyzing your request and generating campaign recommendations...";
pub const SEND_FAILED_TEXT: &str = "Sorry, I encountered an error while processing your request. Please make sure the backend is running and try again.";

/// Owns the append-only message log and mediates the chat request cycle. At
/// most one send is in flight; while it is, a loading placeholder sits at the
/// end of the log until the reply or failure replaces it.
pub struct ChatSession {
    messages: Vec<Message>,
    waiting: bool,
}

impl Default for ChatSession {
    fn default() -> ChatSession {
        return ChatSession {
            messages: vec![Message::new(Author::Assistant, WELCOME_TEXT)],
            waiting: false,
        };
    }
}

impl ChatSession {
    /// Validates and dispatches a chat message. Blank input and sends while a
    /// request is in flight are suppressed without touching the log.
    pub fn send(
        &mut self,
        text: &str,
        connected_sources: Vec<String>,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        if text.trim().is_empty() || self.waiting {
            tracing::debug!(waiting = self.waiting, "Suppressed chat send");
            return Ok(());
        }

        self.messages.push(Message::new(Author::User, text));
        self.messages
            .push(Message::new_with_type(Author::Assistant, MessageType::Loading, LOADING_TEXT));
        self.waiting = true;

        tx.send(Action::ChatRequest(ChatPrompt::new(text, connected_sources)))?;

        return Ok(());
    }

    pub fn handle_reply(&mut self, reply: ChatReply) {
        self.remove_placeholder();
        self.messages.push(Message::new_with_campaigns(
            Author::Assistant,
            &reply.text,
            reply.campaigns,
        ));
        self.waiting = false;
    }

    pub fn handle_failure(&mut self) {
        self.remove_placeholder();
        self.messages
            .push(Message::new_with_type(Author::Assistant, MessageType::Error, SEND_FAILED_TEXT));
        self.waiting = false;
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn push_notice(&mut self, text: &str) {
        self.messages.push(Message::new(Author::Assistant, text));
    }

    pub fn push_error(&mut self, text: &str) {
        self.messages
            .push(Message::new_with_type(Author::Assistant, MessageType::Error, text));
    }

    pub fn last_user_text(&self) -> Option<String> {
        return self
            .messages
            .iter()
            .rev()
            .find(|e| return e.author == Author::User)
            .map(|e| return e.text.to_string());
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn is_waiting(&self) -> bool {
        return self.waiting;
    }

    fn remove_placeholder(&mut self) {
        self.messages.retain(|e| return !e.is_loading());
    }
}
