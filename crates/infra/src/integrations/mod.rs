//! External service integrations

pub mod erp;
pub mod messaging;

pub use erp::{AccessTokenProvider, ErpClient, PasswordGrantAuth};
pub use messaging::MessagingClient;
