use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Failure of a single request, generic over the decoded API error payload `E`.
#[derive(Debug, Error)]
pub enum NetworkingError<E> {
    /// Base URL and route do not form a valid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Response could not be interpreted, or a 401 body did not decode
    #[error("invalid response")]
    InvalidResponse,

    /// No network route to the server
    #[error("no internet connection")]
    NoConnection,

    /// Error payload returned by the API
    #[error("API error (status {status})")]
    ApiError { status: u16, error: E },

    /// Any other transport failure
    #[error("unexpected error: {0}")]
    Unexpected(#[source] reqwest::Error),

    /// Body did not decode into the expected type
    #[error("{message}: {source}")]
    ParsingFailure {
        #[source]
        source: serde_json::Error,
        message: String,
    },
}

impl<E> NetworkingError<E> {
    /// Classify a transport failure as either lost connectivity or an unexpected error
    pub fn from_transport(err: reqwest::Error) -> Self {
        if is_no_connection(&err) {
            NetworkingError::NoConnection
        } else {
            NetworkingError::Unexpected(err)
        }
    }

    /// Classify a failure while reading the response body
    ///
    /// Timeouts and lost connections are transport failures; anything else
    /// means the response framing could not be read.
    pub fn from_body_read(err: reqwest::Error) -> Self {
        if err.is_timeout() || is_no_connection(&err) {
            Self::from_transport(err)
        } else {
            NetworkingError::InvalidResponse
        }
    }

    /// Create a parsing failure with a message naming the target type
    pub fn parsing(source: serde_json::Error, type_name: &str) -> Self {
        NetworkingError::ParsingFailure {
            source,
            message: format!("Failed parsing object: {}", type_name),
        }
    }

    /// Get the HTTP status code if this is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetworkingError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the decoded error payload if this is an API error
    pub fn api_error(&self) -> Option<&E> {
        match self {
            NetworkingError::ApiError { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Check if this is an API error with status 401
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}

// ENETUNREACH / EHOSTUNREACH; the matching ErrorKind variants need Rust 1.83
#[cfg(any(target_os = "linux", target_os = "android"))]
const UNREACHABLE_OS_ERRORS: [i32; 2] = [101, 113];
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
))]
const UNREACHABLE_OS_ERRORS: [i32; 2] = [51, 65];
#[cfg(windows)]
const UNREACHABLE_OS_ERRORS: [i32; 2] = [10051, 10065];
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    windows
)))]
const UNREACHABLE_OS_ERRORS: [i32; 0] = [];

/// Lost connection or no route to the network. Refused connections and
/// DNS failures are not included.
fn is_lost_route(io_err: &io::Error) -> bool {
    match io_err.kind() {
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::NotConnected
        | io::ErrorKind::BrokenPipe => true,
        _ => io_err
            .raw_os_error()
            .is_some_and(|code| UNREACHABLE_OS_ERRORS.contains(&code)),
    }
}

fn is_no_connection(err: &reqwest::Error) -> bool {
    if err.is_timeout() {
        return false;
    }

    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if is_lost_route(io_err) {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

/// Result type for REST operations
pub type Result<T, E> = std::result::Result<T, NetworkingError<E>>;
