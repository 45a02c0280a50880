/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use http::uri::{PathAndQuery, Uri};
use sdk_types::Region;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

pub type Result = std::result::Result<Endpoint, ResolveEndpointError>;

/// Resolve the endpoint for an operation from a set of parameters
///
/// Implemented for closures so that tests and callers can substitute a resolver inline:
/// ```rust
/// use sdk_http::endpoint::{ResolveEndpoint, ResolveEndpointError};
/// struct Params;
/// let resolver = |_: &Params| -> sdk_http::endpoint::Result {
///     Err(ResolveEndpointError::message("no endpoints here"))
/// };
/// assert!(resolver.resolve_endpoint(&Params).is_err());
/// ```
pub trait ResolveEndpoint<Params>: Send + Sync {
    fn resolve_endpoint(&self, params: &Params) -> Result;
}

// Implement the resolver trait for all closures and functions that take
// `Params` and return a `std::result::Result<Endpoint, ResolveEndpointError>`
impl<Resolver, Params> ResolveEndpoint<Params> for Resolver
where
    Resolver: Fn(&Params) -> Result + Send + Sync,
{
    fn resolve_endpoint(&self, params: &Params) -> Result {
        (self)(params)
    }
}

// Static `Endpoint`s can be passed in place of a function that dynamically resolves `Endpoint`s.
impl<T> ResolveEndpoint<T> for Endpoint {
    fn resolve_endpoint(&self, _: &T) -> Result {
        Ok(self.clone())
    }
}

type BoxError = Box<dyn StdError + Send + Sync>;

/// Endpoint Resolution Error
#[derive(Debug)]
pub struct ResolveEndpointError {
    message: String,
    source: Option<BoxError>,
}

impl ResolveEndpointError {
    /// Create an [`ResolveEndpointError`] with a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(self, source: impl Into<BoxError>) -> Self {
        Self {
            source: Some(source.into()),
            ..self
        }
    }
}

impl fmt::Display for ResolveEndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for ResolveEndpointError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|err| err.as_ref() as _)
    }
}

/// API Endpoint
///
/// The base URI that operation paths are appended to, plus the region requests against it
/// must be signed for when that differs from the client's region (eg. global endpoints).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
    signing_region: Option<Region>,
}

impl Endpoint {
    /// Create a new endpoint from a URI. The URI must have a scheme and an authority.
    pub fn new(uri: Uri) -> std::result::Result<Self, ResolveEndpointError> {
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(ResolveEndpointError::message(format!(
                "endpoint `{}` must include a scheme and a host",
                uri
            )));
        }
        Ok(Endpoint {
            uri,
            signing_region: None,
        })
    }

    /// Parse an endpoint from a string, eg. `https://route53.amazonaws.com`
    pub fn parse(endpoint: &str) -> std::result::Result<Self, ResolveEndpointError> {
        let uri = Uri::from_str(endpoint).map_err(|err| {
            ResolveEndpointError::message(format!("invalid endpoint URI `{}`", endpoint))
                .with_source(err)
        })?;
        Self::new(uri)
    }

    pub fn with_signing_region(mut self, region: Region) -> Self {
        self.signing_region = Some(region);
        self
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn signing_region(&self) -> Option<&Region> {
        self.signing_region.as_ref()
    }

    /// Sets the endpoint on `uri`, prefixing the endpoint's path to the request path
    pub fn set_endpoint(&self, uri: &mut Uri) -> std::result::Result<(), ResolveEndpointError> {
        let (scheme, authority) = match (self.uri.scheme(), self.uri.authority()) {
            (Some(scheme), Some(authority)) => (scheme.clone(), authority.clone()),
            _ => {
                return Err(ResolveEndpointError::message(
                    "endpoint must include a scheme and a host",
                ))
            }
        };
        let path_and_query = PathAndQuery::from_str(&Self::merge_paths(&self.uri, uri))
            .map_err(|err| {
                ResolveEndpointError::message("resolved endpoint produced an invalid path")
                    .with_source(err)
            })?;
        let new_uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query)
            .build()
            .map_err(|err| {
                ResolveEndpointError::message("resolved endpoint produced an invalid URI")
                    .with_source(err)
            })?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Endpoint, ResolveEndpoint, ResolveEndpointError};
    use http::Uri;
    use sdk_types::Region;

    #[test]
    fn set_endpoint_keeps_path_and_query() {
        let ep = Endpoint::parse("https://m2.us-east-1.amazonaws.com").unwrap();
        let mut uri = Uri::from_static("/applications?maxResults=5");
        ep.set_endpoint(&mut uri).unwrap();
        assert_eq!(
            uri,
            Uri::from_static("https://m2.us-east-1.amazonaws.com/applications?maxResults=5")
        );
    }

    #[test]
    fn endpoint_custom_port() {
        let ep = Endpoint::parse("http://localhost:8000").unwrap();
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri).unwrap();
        assert_eq!(uri, Uri::from_static("http://localhost:8000/"));
    }

    #[test]
    fn endpoint_with_path() {
        for endpoint in &[
            // check that trailing slashes are properly normalized
            "https://proxy.example.com/private",
            "https://proxy.example.com/private/",
        ] {
            let ep = Endpoint::parse(endpoint).unwrap();
            let mut uri = Uri::from_static("/2013-04-01/hostedzone/Z1?x=y");
            ep.set_endpoint(&mut uri).unwrap();
            assert_eq!(
                uri,
                Uri::from_static("https://proxy.example.com/private/2013-04-01/hostedzone/Z1?x=y")
            );
        }
    }

    #[test]
    fn endpoints_need_a_host() {
        assert!(Endpoint::parse("/just/a/path").is_err());
        assert!(Endpoint::parse("not a uri").is_err());
    }

    #[test]
    fn static_endpoints_and_closures_resolve() {
        let ep = Endpoint::parse("https://waf.amazonaws.com")
            .unwrap()
            .with_signing_region(Region::from_static("us-east-1"));
        let resolved = ep.resolve_endpoint(&()).unwrap();
        assert_eq!(
            resolved.signing_region(),
            Some(&Region::from_static("us-east-1"))
        );

        let failing =
            |_: &()| -> super::Result { Err(ResolveEndpointError::message("misconfigured")) };
        assert_eq!(
            format!("{}", failing.resolve_endpoint(&()).unwrap_err()),
            "misconfigured"
        );
    }
}
