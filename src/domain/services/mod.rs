pub mod actions;
mod app_state;
mod campaigns;
mod chat;
pub mod clipboard;
mod connections;
pub mod events;
mod message_list;
mod scroll;

pub use app_state::*;
pub use campaigns::*;
pub use chat::*;
pub use connections::*;
pub use message_list::*;
pub use scroll::*;
