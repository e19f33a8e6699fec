use test_utils::campaign_fixture;

use super::MessageList;
use crate::domain::models::Author;
use crate::domain::models::Campaign;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

fn line_text(list: &MessageList, index: usize) -> String {
    return list.lines[index]
        .spans
        .iter()
        .map(|e| return e.content.to_string())
        .collect::<Vec<String>>()
        .join("");
}

#[test]
fn it_builds_header_body_and_separator_lines() {
    let mut list = MessageList::default();
    list.set_messages(&[Message::new(Author::Assistant, "Hello")], 80);

    // Header, body, trailing blank.
    assert_eq!(list.len(), 3);
    assert!(line_text(&list, 0).starts_with("Campfire · "));
    assert_eq!(line_text(&list, 1), "Hello");
    assert_eq!(line_text(&list, 2), "");
}

#[test]
fn it_wraps_long_bodies() {
    let mut list = MessageList::default();
    list.set_messages(
        &[Message::new(
            Author::Assistant,
            "The quick brown fox jumps over the lazy dog",
        )],
        22,
    );

    assert_eq!(list.len(), 5);
}

#[test]
fn it_numbers_campaigns_across_the_whole_log() {
    let campaign: Campaign = serde_json::from_str(campaign_fixture()).unwrap();
    let messages = vec![
        Message::new_with_campaigns(Author::Assistant, "First.", vec![campaign.clone()]),
        Message::new_with_campaigns(Author::Assistant, "Second.", vec![campaign]),
    ];

    let mut list = MessageList::default();
    list.set_messages(&messages, 120);

    let rendered = (0..list.lines.len())
        .map(|idx| return line_text(&list, idx))
        .collect::<Vec<String>>()
        .join("\n");

    assert!(rendered.contains("(1) cart_abandonment · 85% confidence"));
    assert!(rendered.contains("(2) cart_abandonment · 85% confidence"));
}

#[test]
fn it_renders_campaign_payload_lines() {
    let campaign: Campaign = serde_json::from_str(campaign_fixture()).unwrap();
    let messages = vec![Message::new_with_campaigns(
        Author::Assistant,
        "Here you go.",
        vec![campaign],
    )];

    let mut list = MessageList::default();
    list.set_messages(&messages, 120);

    let rendered = (0..list.lines.len())
        .map(|idx| return line_text(&list, idx))
        .collect::<Vec<String>>()
        .join("\n");

    assert!(rendered.contains("\"objective\": \"cart_abandonment\""));
}

#[test]
fn it_handles_an_empty_log() {
    let mut list = MessageList::default();
    list.set_messages(&[], 80);

    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn it_styles_loading_placeholders() {
    let mut list = MessageList::default();
    list.set_messages(
        &[Message::new_with_type(
            Author::Assistant,
            MessageType::Loading,
            "Analyzing...",
        )],
        80,
    );

    assert_eq!(line_text(&list, 1), "Analyzing...");
}
