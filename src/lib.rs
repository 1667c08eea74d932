//! # restwire - minimal async REST client
//!
//! A small client for JSON REST services. Each call takes a resource
//! descriptor (method + route), an optional JSON body and extra headers,
//! performs one HTTP round trip and decodes the response either into the
//! caller's success type or into the caller's API error type.
//!
//! ## Features
//!
//! - Resource descriptors and a [`Resource`] trait for endpoint enums
//! - Default headers with per-call overrides
//! - Status-driven decoding into typed success and error payloads
//! - A closed error taxonomy, [`NetworkingError`], one value per failed call
//! - Request/response body dumps through `tracing` when debugging
//!
//! ## Basic Usage
//!
//! ```no_run
//! use restwire::{ClientConfiguration, HttpHeaders, NetworkingError, ResourceDescriptor, RestServiceClient};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct ApiFailure {
//!     code: String,
//! }
//!
//! # async fn run() -> Result<(), NetworkingError<ApiFailure>> {
//! let mut headers = HttpHeaders::new();
//! headers.insert("Accept".to_string(), "application/json".to_string());
//!
//! let client = RestServiceClient::new(ClientConfiguration::new("https://api.example.com", headers));
//!
//! let user: User = client
//!     .request::<User, ApiFailure>(ResourceDescriptor::get("/users/1"), None, None)
//!     .await?;
//!
//! println!("User: {} ({})", user.name, user.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Handling errors
//!
//! ```no_run
//! use restwire::{json, ClientConfiguration, HttpHeaders, NetworkingError, ResourceDescriptor, RestServiceClient};
//! # #[derive(serde::Deserialize)] struct Session { token: String }
//! # #[derive(Debug, serde::Deserialize)] struct ApiFailure { code: String }
//!
//! # async fn run(client: RestServiceClient) {
//! let params = json!({"user": "a", "pass": "b"});
//! let result = client
//!     .request::<Session, ApiFailure>(ResourceDescriptor::post("/login"), params.as_object(), None)
//!     .await;
//!
//! match result {
//!     Ok(session) => println!("token {}", session.token),
//!     Err(NetworkingError::ApiError { status: 401, error }) => {
//!         client.config().notify_unauthorized(None);
//!         println!("rejected: {}", error.code);
//!     }
//!     Err(NetworkingError::NoConnection) => println!("offline"),
//!     Err(other) => println!("failed: {}", other),
//! }
//! # }
//! ```

pub mod client;
pub mod debug;
pub mod error;
pub mod resource;
pub mod rest;

// Re-export main types for convenience
pub use client::{ClientConfiguration, TransportSettings, UnauthorizedHandler};
pub use error::{NetworkingError, Result};
pub use resource::{HttpHeaders, HttpMethod, InvalidMethod, Parameters, Resource, ResourceDescriptor};
pub use rest::RestServiceClient;

// Re-export serde_json for convenience
pub use serde_json::json;
