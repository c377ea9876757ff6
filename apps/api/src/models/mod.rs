pub mod conversation;
pub mod notification;

pub use conversation::{ConversationRow, MessageRow};
pub use notification::NotificationRow;
