use std::fmt::{Display, Formatter};
use std::str::FromStr;
use actix_cors::Cors;
use actix_web::http::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use thiserror::Error;
use url::Url;

/// A browser origin (`scheme://host[:port]`) that may call the API with credentials.
///
/// Held in its ASCII serialization, which is what browsers send in `Origin`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AllowedOrigin(String);

impl AllowedOrigin {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AllowedOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum InvalidOriginError {
    #[error("origin is not a valid URL: {0}: {1}")]
    Malformed(String, #[source] url::ParseError),
    #[error("origin must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
    #[error("origin has no host: {0}")]
    MissingHost(String),
    #[error("origin must not carry a user name or password: {0}")]
    HasCredentials(String),
    #[error("origin must not carry a path, query or fragment: {0}")]
    HasPath(String),
}

impl FromStr for AllowedOrigin {
    type Err = InvalidOriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s).map_err(|e| InvalidOriginError::Malformed(s.to_string(), e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidOriginError::UnsupportedScheme(s.to_string()))
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(InvalidOriginError::MissingHost(s.to_string()))
        }

        if !url.username().is_empty() || url.password().is_some() {
            return Err(InvalidOriginError::HasCredentials(s.to_string()))
        }

        // http(s) URLs always have at least "/" as their path.
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidOriginError::HasPath(s.to_string()))
        }

        Ok(Self(url.origin().ascii_serialization()))
    }
}

pub fn middleware_factory(allowed_origins: &[AllowedOrigin]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin.as_str()))
        .allowed_headers([CONTENT_TYPE, ACCEPT, ACCEPT_LANGUAGE])
        .allowed_methods(["GET"])
        // the browser only forwards the admin cookie on credentialed requests.
        .supports_credentials()
        .max_age(3600)
}
