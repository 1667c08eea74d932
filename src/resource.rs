use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Header name to value mapping, one value per name.
pub type HttpHeaders = HashMap<String, String>;

/// Schema-free JSON object used as a request body.
pub type Parameters = serde_json::Map<String, Value>;

/// HTTP methods supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a method name other than GET, POST, PUT or DELETE.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid HTTP method: {0}")]
pub struct InvalidMethod(pub String);

impl FromStr for HttpMethod {
    type Err = InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(InvalidMethod(other.to_string())),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One API endpoint: a method and a route appended verbatim to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    pub method: HttpMethod,
    pub route: String,
}

impl ResourceDescriptor {
    pub fn new(method: HttpMethod, route: impl Into<String>) -> Self {
        ResourceDescriptor {
            method,
            route: route.into(),
        }
    }

    pub fn get(route: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, route)
    }

    pub fn post(route: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, route)
    }

    pub fn put(route: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, route)
    }

    pub fn delete(route: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, route)
    }
}

/// Anything that can name an endpoint, typically an enum of the API's routes.
///
/// ```
/// use restwire::{HttpMethod, Resource, ResourceDescriptor};
///
/// enum UserApi {
///     Get(u64),
///     Login,
/// }
///
/// impl Resource for UserApi {
///     fn descriptor(&self) -> ResourceDescriptor {
///         match self {
///             UserApi::Get(id) => ResourceDescriptor::get(format!("/users/{id}")),
///             UserApi::Login => ResourceDescriptor::new(HttpMethod::Post, "/login"),
///         }
///     }
/// }
///
/// assert_eq!(UserApi::Get(1).descriptor().route, "/users/1");
/// ```
pub trait Resource {
    fn descriptor(&self) -> ResourceDescriptor;
}

impl Resource for ResourceDescriptor {
    fn descriptor(&self) -> ResourceDescriptor {
        self.clone()
    }
}

impl<R: Resource + ?Sized> Resource for &R {
    fn descriptor(&self) -> ResourceDescriptor {
        (**self).descriptor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_round_trip_names() {
        for method in [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
        ] {
            assert_eq!(method.as_str().parse::<HttpMethod>(), Ok(method));
            assert_eq!(method.to_string(), method.as_str());
        }
    }

    #[test]
    fn test_method_rejects_unknown() {
        let err = "PATCH".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err, InvalidMethod("PATCH".to_string()));
        assert!("get".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_method_into_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn test_descriptor_keeps_route_verbatim() {
        let resource = ResourceDescriptor::post("/users?x=a b");
        assert_eq!(resource.method, HttpMethod::Post);
        assert_eq!(resource.route, "/users?x=a b");
        assert_eq!(resource.descriptor(), resource);
    }
}
