#[cfg(test)]
#[path = "message_list_test.rs"]
mod tests;
use ratatui::prelude::Backend;
use ratatui::prelude::Color;
use ratatui::prelude::Modifier;
use ratatui::prelude::Rect;
use ratatui::prelude::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

fn author_style(author: &Author) -> Style {
    let color = match author {
        Author::User => Color::Cyan,
        Author::Assistant => Color::LightGreen,
    };

    return Style::default().fg(color).add_modifier(Modifier::BOLD);
}

fn text_style(mtype: MessageType) -> Style {
    match mtype {
        MessageType::Normal => return Style::default(),
        MessageType::Error => return Style::default().fg(Color::Red),
        MessageType::Loading => {
            return Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        }
    }
}

/// Renders the message log as wrapped lines, with campaign proposals numbered
/// beneath the message that carried them. The numbers match the campaign
/// ledger so `/copy N` has a visible referent.
#[derive(Default)]
pub struct MessageList {
    lines: Vec<Line<'static>>,
}

impl MessageList {
    pub fn set_messages(&mut self, messages: &[Message], line_max_width: u16) {
        let mut lines: Vec<Line<'static>> = vec![];
        let mut campaign_number = 0;

        for message in messages {
            let header = format!(
                "{author} · {time}",
                author = message.author.to_string(),
                time = message.timestamp.format("%H:%M:%S")
            );
            lines.push(Line::from(Span::styled(header, author_style(&message.author))));

            let body_style = text_style(message.message_type());
            for text_line in message.as_string_lines(line_max_width.saturating_sub(2).into()) {
                lines.push(Line::from(Span::styled(text_line, body_style)));
            }

            for campaign in &message.campaigns {
                campaign_number += 1;
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("({campaign_number}) {}", campaign.summary()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));

                if let Ok(payload) = campaign.payload_pretty() {
                    for payload_line in payload.split('\n') {
                        lines.push(Line::from(Span::styled(
                            payload_line.to_string(),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                }
            }

            lines.push(Line::from(""));
        }

        self.lines = lines;
    }

    pub fn len(&self) -> u16 {
        return self.lines.len() as u16;
    }

    pub fn is_empty(&self) -> bool {
        return self.lines.is_empty();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, position: u16) {
        frame.render_widget(
            Paragraph::new(Text::from(self.lines.clone())).scroll((position, 0)),
            rect,
        );
    }
}
