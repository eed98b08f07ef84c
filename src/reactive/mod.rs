pub mod dispatch;
pub mod shared_value;

pub use dispatch::{Mailbox, MessageSender, ModalMessage};
pub use shared_value::{PresentationValues, SharedValue, Writer};
