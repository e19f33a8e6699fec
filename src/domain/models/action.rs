use super::ChatPrompt;

pub enum Action {
    ChatRequest(ChatPrompt),
    ConnectSource(String),
    CopyPayload(String),
    DisconnectSource(String),
}
