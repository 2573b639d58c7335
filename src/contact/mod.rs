//! Contact message delivery

mod error;
mod message;
mod simulated;
mod traits;

pub use error::SendError;
pub use message::ContactMessage;
pub use simulated::{SimulatedSender, DEFAULT_DELAY};
pub use traits::ContactSender;

#[cfg(test)]
pub use traits::MockContactSender;
