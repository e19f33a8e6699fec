use test_utils::campaign_fixture;

use super::Author;
use super::Campaign;
use super::Message;
use super::MessageType;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::Assistant, "Hi there!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.author.to_string(), "Campfire");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.message_type(), MessageType::Normal);
    assert!(msg.campaigns.is_empty());
    assert!(!msg.is_loading());
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(Author::Assistant, "\t\tHi there!");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Assistant, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_flags_loading_placeholders() {
    let msg = Message::new_with_type(Author::Assistant, MessageType::Loading, "Thinking...");
    assert!(msg.is_loading());
}

#[test]
fn it_executes_new_with_campaigns() {
    let campaign: Campaign = serde_json::from_str(campaign_fixture()).unwrap();
    let msg = Message::new_with_campaigns(
        Author::Assistant,
        "Here is your campaign.",
        vec![campaign.clone()],
    );

    assert_eq!(msg.message_type(), MessageType::Normal);
    assert_eq!(msg.campaigns.len(), 1);
    assert_eq!(msg.campaigns[0], campaign);
}

#[test]
fn it_creates_unique_ids() {
    let first = Message::new(Author::User, "one");
    let second = Message::new(Author::User, "two");
    assert_ne!(first.id, second.id);
}

#[test]
fn it_wraps_string_lines() {
    let msg = Message::new(
        Author::Assistant,
        "The quick brown fox jumps over the lazy dog",
    );
    let lines = msg.as_string_lines(20);

    assert_eq!(
        lines,
        vec![
            "The quick brown fox".to_string(),
            "jumps over the lazy".to_string(),
            "dog".to_string(),
        ]
    );
}

#[test]
fn it_keeps_blank_lines_when_wrapping() {
    let msg = Message::new(Author::Assistant, "first\n\nsecond");
    let lines = msg.as_string_lines(20);

    assert_eq!(
        lines,
        vec!["first".to_string(), " ".to_string(), "second".to_string()]
    );
}
