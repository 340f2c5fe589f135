//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};
use crate::query::{to_pairs, with_query};
use crate::transport::{
    Method, Multipart, RequestBody, ReqwestTransport, Transport, TransportRequest,
};

/// Base URL of the Chatwork v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.chatwork.com/v2";

/// Header carrying the API token.
pub const TOKEN_HEADER: &str = "X-ChatWorkToken";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Chatwork API client.
///
/// Every method blocks until the transport returns. Cloning is cheap and
/// clones share the same configuration.
///
/// # Example
///
/// ```no_run
/// use chatwork_client::{ChatworkClient, SendMessage};
///
/// # fn example() -> chatwork_client::Result<()> {
/// let client = ChatworkClient::builder().token("secret").build()?;
///
/// for room in client.get_rooms()? {
///     println!("{} {}", room.room_id, room.name);
/// }
/// client.send_message(SendMessage::new(123, "Hello!"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ChatworkClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    transport: Box<dyn Transport>,
    /// Base URL without a trailing slash.
    base_url: String,
    /// Headers sent with every request, the token among them.
    headers: Vec<(String, String)>,
}

impl fmt::Debug for ChatworkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatworkClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl ChatworkClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the public API with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verb helpers
    //
    // `Ok(None)` means the server answered 204 No Content.
    // ─────────────────────────────────────────────────────────────────────────

    /// Make a GET request. `params` go into the query string; pass `&()` for none.
    pub fn get<T, P>(&self, endpoint: &str, params: &P) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let path = with_query(endpoint, params)?;
        self.send_request(Method::Get, &path, RequestBody::Empty)
    }

    /// Make a POST request with a form-encoded body.
    pub fn post<T, P>(&self, endpoint: &str, payload: &P) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let fields = to_pairs(payload)?;
        self.send_request(Method::Post, endpoint, RequestBody::Form(fields))
    }

    /// Make a POST request with a multipart body.
    pub fn post_multipart<T>(&self, endpoint: &str, payload: Multipart) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.send_request(Method::Post, endpoint, RequestBody::Multipart(payload))
    }

    /// Make a PUT request. Parameters go into the query string, not the body.
    pub fn put<T, P>(&self, endpoint: &str, params: &P) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let path = with_query(endpoint, params)?;
        self.send_request(Method::Put, &path, RequestBody::Empty)
    }

    /// Make a DELETE request. Parameters go into the query string.
    pub fn delete<T, P>(&self, endpoint: &str, params: &P) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let path = with_query(endpoint, params)?;
        self.send_request(Method::Delete, &path, RequestBody::Empty)
    }

    /// Dispatch a request and decode the response.
    ///
    /// 200 decodes the JSON body (an empty body counts as no data), 204 is
    /// `Ok(None)`, every other status is an error.
    pub fn send_request<T>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let request = TransportRequest {
            method,
            url: self.url(path),
            headers: self.inner.headers.clone(),
            body,
        };

        tracing::debug!(%method, path, "sending Chatwork request");
        let response = self.inner.transport.send(request)?;
        tracing::debug!(%method, path, status = response.status, "received Chatwork response");

        match response.status {
            200 if response.body.iter().all(u8::is_ascii_whitespace) => Ok(None),
            200 => Ok(Some(serde_json::from_slice(&response.body)?)),
            204 => Ok(None),
            status => {
                tracing::warn!(%method, path, status, "Chatwork request failed");
                Err(Error::from_status(status, &response.body))
            }
        }
    }

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.inner.base_url, path)
        } else {
            format!("{}/{}", self.inner.base_url, path)
        }
    }
}

/// Turn "no data" into an error for endpoints that must return a body.
pub(crate) fn require<T>(value: Option<T>, path: &str) -> Result<T> {
    value.ok_or_else(|| Error::EmptyResponse(path.to_string()))
}

/// Builder for creating a [`ChatworkClient`].
pub struct ClientBuilder {
    token: Option<String>,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    transport: Option<Box<dyn Transport>>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            transport: None,
        }
    }

    /// Set the API token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the base URL (defaults to [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout. Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent. Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Send requests through a custom transport.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ChatworkClient> {
        let token = self
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Config("token is required".to_string()))?;

        HeaderValue::from_str(&token).map_err(|_| Error::Config("Invalid token".to_string()))?;

        // Parse to validate, keep the caller's spelling minus the trailing slash
        Url::parse(&self.base_url)?;
        let base_url = self.base_url.trim_end_matches('/').to_string();

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("chatwork-client/{}", env!("CARGO_PKG_VERSION")));
                Box::new(ReqwestTransport::new(self.timeout, &user_agent)?)
            }
        };

        Ok(ChatworkClient {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                headers: vec![(TOKEN_HEADER.to_string(), token)],
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
