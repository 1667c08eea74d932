use crate::client::ClientConfiguration;
use crate::debug::{dump, REQUEST_TITLE, RESPONSE_TITLE};
use crate::error::{NetworkingError, Result};
use crate::resource::{HttpHeaders, HttpMethod, Parameters, Resource};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::type_name;
use tracing::{debug, warn};
use url::Url;

/// Client for a single REST service
///
/// Every call performs exactly one HTTP round trip with a transport built
/// from the configuration's [`TransportSettings`](crate::TransportSettings).
/// The client holds no mutable state, so it can be shared between any
/// number of concurrent calls.
#[derive(Debug, Clone)]
pub struct RestServiceClient {
    config: ClientConfiguration,
}

impl RestServiceClient {
    /// Create a client owning the given configuration
    pub fn new(configuration: ClientConfiguration) -> Self {
        RestServiceClient {
            config: configuration,
        }
    }

    /// Get the configuration this client was created with
    pub fn config(&self) -> &ClientConfiguration {
        &self.config
    }

    /// Make a request and decode the response into `T`, or the API error payload into `E`
    ///
    /// # Arguments
    /// * `resource` - Endpoint method and route
    /// * `parameters` - JSON body, ignored for GET
    /// * `headers` - Extra headers, overriding the configured defaults
    ///
    /// # Returns
    /// The decoded success value or exactly one [`NetworkingError`]
    pub async fn request<T, E>(
        &self,
        resource: impl Resource,
        parameters: Option<&Parameters>,
        headers: Option<&HttpHeaders>,
    ) -> Result<T, E>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        self.request_with(resource, parameters, headers).await
    }

    /// Same as [`request`](Self::request), with any serializable value as the body
    ///
    /// A body that fails to serialize is dropped and the request is sent
    /// without one.
    pub async fn request_with<T, E, P>(
        &self,
        resource: impl Resource,
        parameters: Option<&P>,
        headers: Option<&HttpHeaders>,
    ) -> Result<T, E>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let descriptor = resource.descriptor();
        let full_url = format!("{}{}", self.config.base_url(), descriptor.route);

        let url = Url::parse(&full_url).map_err(|err| {
            NetworkingError::<E>::InvalidRequest(format!("Invalid URL: {} ({})", full_url, err))
        })?;

        let mut header_map = self.merge_headers::<E>(headers)?;

        let mut body = None;
        if descriptor.method != HttpMethod::Get {
            if let Some(parameters) = parameters {
                match serde_json::to_vec_pretty(parameters) {
                    Ok(data) => {
                        if self.config.debug() {
                            dump(&full_url, &data, REQUEST_TITLE);
                        }
                        body = Some(data);
                    }
                    Err(err) => {
                        debug!("parameters not serializable, sending without body: {}", err);
                    }
                }
            }
        }
        if body.is_some() && !header_map.contains_key(CONTENT_TYPE) {
            header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let client = self
            .config
            .transport()
            .build_client()
            .map_err(NetworkingError::<E>::Unexpected)?;

        let mut request = client
            .request(descriptor.method.into(), url)
            .headers(header_map);
        if let Some(body) = body {
            request = request.body(body);
        }

        debug!(method = %descriptor.method, url = %full_url, "sending request");

        let response = request.send().await.map_err(|err| {
            warn!(method = %descriptor.method, url = %full_url, "transport failure: {}", err);
            NetworkingError::<E>::from_transport(err)
        })?;
        let status = response.status().as_u16();

        let data = response.bytes().await.map_err(|err| {
            warn!(url = %full_url, status, "unreadable response: {}", err);
            NetworkingError::<E>::from_body_read(err)
        })?;

        debug!(url = %full_url, status, "received response");
        if self.config.debug() {
            dump(&full_url, &data, RESPONSE_TITLE);
        }

        match status {
            401 => {
                return Err(match serde_json::from_slice::<E>(&data) {
                    Ok(error) => NetworkingError::ApiError { status, error },
                    Err(_) => NetworkingError::InvalidResponse,
                });
            }
            400 | 402..=599 => {
                // names the success type, not E
                return Err(match serde_json::from_slice::<E>(&data) {
                    Ok(error) => NetworkingError::ApiError { status, error },
                    Err(err) => NetworkingError::parsing(err, type_name::<T>()),
                });
            }
            _ => {}
        }

        serde_json::from_slice::<T>(&data)
            .map_err(|err| NetworkingError::parsing(err, type_name::<T>()))
    }

    /// Merge default headers with per-call headers, the latter winning on collision
    fn merge_headers<E>(&self, headers: Option<&HttpHeaders>) -> Result<HeaderMap, E> {
        let mut header_map = HeaderMap::new();
        for (key, value) in self
            .config
            .default_headers()
            .iter()
            .chain(headers.into_iter().flatten())
        {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                NetworkingError::InvalidRequest(format!("Invalid header name: {}", key))
            })?;
            let value = HeaderValue::from_bytes(value.as_bytes()).map_err(|_| {
                NetworkingError::InvalidRequest(format!("Invalid value for header {}", key))
            })?;
            header_map.insert(name, value);
        }
        Ok(header_map)
    }
}
