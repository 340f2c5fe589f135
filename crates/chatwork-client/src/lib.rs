//! Blocking HTTP client for the Chatwork REST API.
//!
//! This crate provides a typed client for the Chatwork v2 API
//! (`https://api.chatwork.com/v2`). Every call is a single synchronous request
//! authenticated with the `X-ChatWorkToken` header.
//!
//! # Example
//!
//! ```no_run
//! use chatwork_client::{ClientConfig, SendMessage, SendTask, factory};
//!
//! # fn example() -> chatwork_client::Result<()> {
//! let client = factory(ClientConfig::new("secret"))?;
//!
//! // Post to a room
//! client.send_message(SendMessage::new(123, "Hello!"))?;
//!
//! // Leave yourself a note
//! client.send_message_to_my_chat("remember the milk")?;
//!
//! // Assign a task due at a Unix time
//! client.send_task(SendTask::new(123, "Review the draft", vec![456]).with_limit(1.7e9))?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Me**: own profile
//! - **Rooms**: list, inspect, update, leave or delete
//! - **Messages**: list, post, post to my chat
//! - **Tasks**: list per room, list my tasks, add
//! - **Files**: list, upload
//!
//! Endpoints without a dedicated method are reachable through the generic
//! [`ChatworkClient::get`], [`post`](ChatworkClient::post),
//! [`put`](ChatworkClient::put) and [`delete`](ChatworkClient::delete) helpers.

pub mod api;
pub mod client;
pub mod error;
pub mod query;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{ChatworkClient, ClientBuilder, DEFAULT_BASE_URL, TOKEN_HEADER};
pub use error::{Error, Result};
pub use transport::{
    FilePart, Method, Multipart, RequestBody, ReqwestTransport, Transport, TransportRequest,
    TransportResponse,
};
pub use types::*;

// Re-export API types that are commonly used with query methods
pub use api::{MessagesQuery, MyTasksQuery, RoomTasksQuery};

/// Minimal client configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ClientConfig {
    /// API token sent as `X-ChatWorkToken`.
    pub token: String,
}

impl ClientConfig {
    /// Create a configuration from a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Create a client for the public API from a configuration.
pub fn factory(config: ClientConfig) -> Result<ChatworkClient> {
    ChatworkClient::builder().token(config.token).build()
}
