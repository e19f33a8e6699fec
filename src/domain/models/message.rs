#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use chrono::DateTime;
use chrono::Utc;

use super::Author;
use super::Campaign;

static MESSAGE_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    Error,
    Loading,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub id: String,
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub campaigns: Vec<Campaign>,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message::new_with_type(author, MessageType::Normal, text);
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        let timestamp = Utc::now();
        return Message {
            id: create_id(&timestamp),
            author,
            text: text.to_string().replace('\t', "  "),
            timestamp,
            campaigns: vec![],
            mtype,
        };
    }

    pub fn new_with_campaigns(author: Author, text: &str, campaigns: Vec<Campaign>) -> Message {
        let mut message = Message::new_with_type(author, MessageType::Normal, text);
        message.campaigns = campaigns;
        return message;
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn is_loading(&self) -> bool {
        return self.mtype == MessageType::Loading;
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                if word.len() + char_count + 1 > line_max_width {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word.len() + 1;
                } else {
                    current_lines.push(word);
                    char_count += word.len() + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}

// Ids are creation-time derived, with a process-wide sequence breaking ties
// between messages created in the same millisecond.
fn create_id(timestamp: &DateTime<Utc>) -> String {
    let seq = MESSAGE_SEQ.fetch_add(1, Ordering::Relaxed);
    return format!("{}-{seq}", timestamp.timestamp_millis());
}
