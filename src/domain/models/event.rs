use tui_textarea::Input;

use super::ChatReply;
use super::Message;

pub enum Event {
    Advisory(Message),
    ChatFailed(),
    ChatReply(ChatReply),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLR(),
    KeyboardEnter(),
    KeyboardPaste(String),
    SourceConnected { id: String, data_points: u32 },
    SourceConnectFailed(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
