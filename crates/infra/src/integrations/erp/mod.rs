//! ERP integration API adapter
//!
//! # Architecture
//!
//! - **Auth**: `PasswordGrantAuth` - OAuth2 password grant against
//!   `{base}/oauth/token`, token cached for the lifetime of the client
//! - **Client**: `ErpClient` - implements the `SalesDataSource` port over the
//!   `{base}/integration/v1/fetch/{resource}` endpoints
//!
//! # Error Handling
//!
//! - Token request rejected or malformed: `SalesDigestError::Auth`
//! - Non-success fetch status, transport failure or unreadable payload:
//!   `SalesDigestError::Fetch`
//! - No retries; every call is a single attempt

pub mod auth;
pub mod client;

pub use auth::{AccessTokenProvider, PasswordGrantAuth};
pub use client::ErpClient;
