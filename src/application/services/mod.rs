pub mod notification_manager;
pub mod request_slot;

pub use notification_manager::NotificationManager;
pub use request_slot::{Completion, RequestSlot, with_timeout};
