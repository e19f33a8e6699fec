use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_plain_chat_text() {
    let text = "Create a cart abandonment campaign";
    assert!(SlashCommand::parse(text).is_none());
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_not_quit() {
    let cmd = SlashCommand::parse("/sources").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_short_connect() {
    let cmd = SlashCommand::parse("/con shopify").unwrap();
    assert!(cmd.is_connect());
}
#[test]
fn it_is_connect() {
    let cmd = SlashCommand::parse("/connect shopify").unwrap();
    assert!(cmd.is_connect());
}
#[test]
fn it_is_not_connect() {
    let cmd = SlashCommand::parse("/disconnect shopify").unwrap();
    assert!(!cmd.is_connect());
}

#[test]
fn it_is_short_disconnect() {
    let cmd = SlashCommand::parse("/dis shopify").unwrap();
    assert!(cmd.is_disconnect());
}
#[test]
fn it_is_disconnect() {
    let cmd = SlashCommand::parse("/disconnect shopify").unwrap();
    assert!(cmd.is_disconnect());
}
#[test]
fn it_is_not_disconnect() {
    let cmd = SlashCommand::parse("/connect shopify").unwrap();
    assert!(!cmd.is_disconnect());
}

#[test]
fn it_is_short_sources() {
    let cmd = SlashCommand::parse("/s").unwrap();
    assert!(cmd.is_sources());
}
#[test]
fn it_is_sources() {
    let cmd = SlashCommand::parse("/sources").unwrap();
    assert!(cmd.is_sources());
}

#[test]
fn it_is_short_copy_campaign() {
    let cmd = SlashCommand::parse("/c 1").unwrap();
    assert!(cmd.is_copy_campaign());
}
#[test]
fn it_is_copy_campaign_without_index() {
    let cmd = SlashCommand::parse("/copy").unwrap();
    assert!(cmd.is_copy_campaign());
}

#[test]
fn it_is_short_help() {
    let cmd = SlashCommand::parse("/h").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_help() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.is_help());
}

#[test]
fn it_returns_the_first_arg() {
    let cmd = SlashCommand::parse("/connect shopify extra").unwrap();
    assert_eq!(cmd.first_arg(), Some("shopify"));
}
#[test]
fn it_returns_no_first_arg() {
    let cmd = SlashCommand::parse("/connect").unwrap();
    assert_eq!(cmd.first_arg(), None);
}
#[test]
fn it_skips_blank_args() {
    let cmd = SlashCommand::parse("/connect  shopify").unwrap();
    assert_eq!(cmd.first_arg(), Some("shopify"));
}
