use crate::resource::HttpHeaders;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Callback a calling layer may fire when the API rejects the session.
pub type UnauthorizedHandler = Arc<dyn Fn(Option<&Value>) + Send + Sync>;

/// Settings used to build the HTTP transport for each request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    /// Total request timeout
    pub timeout: Duration,
    /// Timeout for establishing the connection
    pub connect_timeout: Duration,
    /// Idle connections kept per host
    pub pool_max_idle_per_host: usize,
    /// Optional User-Agent header sent by the transport
    pub user_agent: Option<String>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        TransportSettings {
            timeout: Duration::from_secs(300), // 5 minutes
            connect_timeout: Duration::from_secs(10),
            pool_max_idle_per_host: 50,
            user_agent: None,
        }
    }
}

impl TransportSettings {
    /// Set the total request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an HTTP client from these settings
    pub fn build_client(&self) -> reqwest::Result<Client> {
        let mut builder = ClientBuilder::new()
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout);
        if let Some(ref user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        builder.build()
    }
}

/// Configuration for a REST service client
///
/// Immutable once handed to a [`RestServiceClient`](crate::RestServiceClient).
#[derive(Clone)]
pub struct ClientConfiguration {
    base_url: String,
    default_headers: HttpHeaders,
    transport: TransportSettings,
    on_unauthorized: Option<UnauthorizedHandler>,
    debug: bool,
}

impl ClientConfiguration {
    /// Create a configuration with the given base URL and default headers
    pub fn new(base_url: impl Into<String>, default_headers: HttpHeaders) -> Self {
        ClientConfiguration {
            base_url: base_url.into(),
            default_headers,
            transport: TransportSettings::default(),
            on_unauthorized: None,
            debug: cfg!(debug_assertions),
        }
    }

    /// Replace the transport settings
    pub fn with_transport(mut self, transport: TransportSettings) -> Self {
        self.transport = transport;
        self
    }

    /// Register the logout callback
    pub fn with_on_unauthorized<F>(mut self, handler: F) -> Self
    where
        F: Fn(Option<&Value>) + Send + Sync + 'static,
    {
        self.on_unauthorized = Some(Arc::new(handler));
        self
    }

    /// Enable or disable request/response body dumps
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Get the base URL routes are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the headers sent with every request
    pub fn default_headers(&self) -> &HttpHeaders {
        &self.default_headers
    }

    /// Get the transport settings
    pub fn transport(&self) -> &TransportSettings {
        &self.transport
    }

    /// Get the logout callback, if any
    pub fn on_unauthorized(&self) -> Option<&UnauthorizedHandler> {
        self.on_unauthorized.as_ref()
    }

    /// Check if body dumps are enabled
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Fire the logout callback, if one is registered.
    ///
    /// The request pipeline never calls this; it is up to the caller to
    /// decide which failures end the session.
    pub fn notify_unauthorized(&self, payload: Option<&Value>) {
        if let Some(ref handler) = self.on_unauthorized {
            handler(payload);
        }
    }
}

impl fmt::Debug for ClientConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfiguration")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("transport", &self.transport)
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .field("debug", &self.debug)
            .finish()
    }
}
