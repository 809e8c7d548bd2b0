//! Chat session state and orchestration.

pub mod service;
pub mod session;
pub mod simulate;

pub use service::{ChatReply, ChatService};
pub use session::{ResponseMode, SessionContext};
