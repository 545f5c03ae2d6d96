//! HTTP transport client for the Zabbix JSON-RPC 2.0 API
//!
//! One [`Client`] owns one endpoint URL, one API token and one request-id
//! counter. Every remote call is a single synchronous HTTP POST, with no pooling
//! beyond what reqwest manages internally, no retries, no caching.
//!
//! # Thread Safety
//!
//! A `Client` can be shared across tasks freely. The endpoint, token and
//! timeout are immutable after construction; the request-id counter is the
//! only shared mutable state and it is an atomic, so concurrent callers
//! always get unique, strictly increasing identifiers.
//!
//! # Cancellation
//!
//! Dropping the future returned by [`Client::request`] aborts the in-flight
//! HTTP call. [`Client::request_with_timeout`] adds a per-call deadline on
//! top of the client-wide one; either deadline expiring yields
//! [`Error::Timeout`].

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use serde_json::Value;
use zapi_core::{Error, Params, Result, RpcRequest, RpcResponse};

/// Default HTTP timeout applied by [`Client::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Content type the Zabbix API expects on POST bodies.
const CONTENT_TYPE: &str = "application/json-rpc";

/// Procedures that must NOT carry an auth token.
///
/// The API rejects tokens on these bootstrap calls, so the exception is a
/// static table rather than anything inferred from the method name's shape.
const NO_AUTH_METHODS: &[&str] = &["apiinfo.version"];

/// Zabbix API client
///
/// # Examples
///
/// ```rust,no_run
/// use zapi_client::Client;
///
/// # async fn example() -> zapi_core::Result<()> {
/// let client = Client::new("http://zabbix.example.com/api_jsonrpc.php", "token")?;
/// let version = client.api_version().await?;
/// println!("server speaks {version}");
/// # Ok(())
/// # }
/// ```
pub struct Client {
    url: String,
    token: String,
    http: reqwest::Client,
    /// Monotonic request-id counter; first allocated id is 1
    request_id: AtomicI64,
}

impl Client {
    /// Create a client with the default 30 second timeout
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, token, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom HTTP timeout
    pub fn with_timeout(
        url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            token: token.into(),
            http,
            request_id: AtomicI64::new(0),
        })
    }

    /// The endpoint URL this client talks to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one JSON-RPC request and return the raw result payload
    ///
    /// The envelope is built from the next counter value, the method name and
    /// the given params; the auth token is injected unless the method is on
    /// the no-auth allow-list. Callers with no parameters pass
    /// [`Params::empty`]; the API wants `{}`, never a missing member.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] for a non-2xx status (the body is not parsed)
    /// - [`Error::Transport`] / [`Error::Timeout`] for network failures
    /// - [`Error::Decode`] when the body is not a valid envelope
    /// - [`Error::Api`] when the envelope carries a structured error
    /// - [`Error::IdMismatch`] when the echoed id is not the one sent
    #[tracing::instrument(skip(self, params), fields(url = %self.url))]
    pub async fn request(&self, method: &str, params: Params) -> Result<Value> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst) + 1;

        let mut request = RpcRequest::new(method, params, id);
        if !NO_AUTH_METHODS.contains(&method) {
            request.auth = Some(self.token.clone());
        }

        tracing::debug!(id, "sending api request");

        let response = self
            .http
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .json(&request)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.bytes().await.map_err(classify_reqwest_error)?;
        let envelope: RpcResponse =
            serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))?;

        if let Some(error) = envelope.error {
            tracing::error!(id, code = error.code, "api request failed");
            return Err(Error::Api {
                method: method.to_string(),
                error,
            });
        }

        // Misdelivered responses are a transport fault, not a decode fault.
        if envelope.id != Some(id) {
            return Err(Error::IdMismatch {
                expected: id,
                actual: envelope.id.unwrap_or(0),
            });
        }

        Ok(envelope.result.unwrap_or(Value::Null))
    }

    /// [`Client::request`] with an additional per-call deadline
    ///
    /// The deadline expiring cancels the in-flight HTTP call and yields
    /// [`Error::Timeout`], the same kind the client-wide timeout produces.
    pub async fn request_with_timeout(
        &self,
        method: &str,
        params: Params,
        timeout: Duration,
    ) -> Result<Value> {
        tokio::time::timeout(timeout, self.request(method, params))
            .await
            .map_err(|_| Error::Timeout)?
    }

    /// Probe the server version via `apiinfo.version`
    ///
    /// The one call in the surface that must go out without an auth token.
    pub async fn api_version(&self) -> Result<String> {
        let result = self.request("apiinfo.version", Params::empty()).await?;
        serde_json::from_value(result).map_err(|e| Error::Decode(e.to_string()))
    }
}

/// Map reqwest failures onto the taxonomy: deadline expiry is `Timeout`,
/// everything else below HTTP is `Transport`.
fn classify_reqwest_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Transport(e.to_string())
    }
}
