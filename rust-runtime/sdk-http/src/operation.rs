/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::body::SdkBody;
use crate::property_bag::{PropertyBag, SharedPropertyBag};
use std::borrow::Cow;
use std::error::Error;
use std::sync::MutexGuard;
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// An error that occurs while building an operation from its input
///
/// No request is dispatched when construction fails.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A required field was not set
    #[error("`{field}` was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    /// A field was set to a value that cannot be sent
    #[error("`{field}` was invalid: {details}")]
    InvalidField {
        field: &'static str,
        details: String,
    },

    /// The body of the request could not be serialized
    #[error("failed to serialize the request body")]
    SerializationError(#[source] BoxError),

    /// The assembled request was not a valid HTTP request
    #[error("failed to assemble the HTTP request")]
    InvalidRequest(#[from] http::Error),

    /// The request could not be signed, eg. no signer was configured
    ///
    /// This is a client configuration problem rather than a problem with the input.
    #[error("failed to sign the request")]
    SigningFailure(#[source] BoxError),

    #[error("error during request construction: {0}")]
    Other(BoxError),
}

impl BuildError {
    /// The name of the offending field for `MissingField` and `InvalidField` errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BuildError::MissingField { field, .. } | BuildError::InvalidField { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, BuildError::MissingField { .. })
    }

    pub fn is_signing_failure(&self) -> bool {
        matches!(self, BuildError::SigningFailure(_))
    }
}

/// Borrow a required input member
///
/// Fails with [`BuildError::MissingField`] when the member is unset.
pub fn required<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T, BuildError> {
    value.as_ref().ok_or(BuildError::MissingField {
        field,
        details: "cannot be unset",
    })
}

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        BuildError::SerializationError(err.into())
    }
}

impl From<crate::protocol::xml::XmlError> for BuildError {
    fn from(err: crate::protocol::xml::XmlError) -> Self {
        BuildError::SerializationError(err.into())
    }
}

#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn into_request_response(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }

    pub fn from_parts(request: Request, parts: Parts<H>) -> Self {
        Operation { request, parts }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties()
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties_mut()
    }

    pub fn response_handler(&self) -> &H {
        &self.parts.response_handler
    }
}

impl<H: Clone> Operation<H> {
    pub fn try_clone(&self) -> Option<Self> {
        let request = self.request.try_clone()?;
        Some(Self {
            request,
            parts: self.parts.clone(),
        })
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see [`Request::augment`](Request::augment))
    properties: SharedPropertyBag,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: SharedPropertyBag::new(),
        }
    }

    pub fn from_parts(inner: http::Request<SdkBody>, properties: SharedPropertyBag) -> Self {
        Request { inner, properties }
    }

    /// Allows modification of the HTTP request and associated properties with a fallible closure.
    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let properties: &mut PropertyBag = &mut self.properties.acquire();
            f(self.inner, properties)?
        };
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.properties.acquire()
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.properties.acquire()
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    /// Attempt to clone this request. Fails when the body is a stream.
    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::new(cloned_body);
        *cloned_request.method_mut() = self.inner.method().clone();
        *cloned_request.uri_mut() = self.inner.uri().clone();
        *cloned_request.version_mut() = self.inner.version();
        *cloned_request.headers_mut() = self.inner.headers().clone();
        Some(Request {
            inner: cloned_request,
            properties: self.properties.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, SharedPropertyBag) {
        (self.inner, self.properties)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Request};
    use http::header::{AUTHORIZATION, CONTENT_LENGTH};
    use http::Uri;

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("http://www.amazon.com"))
                .method("POST")
                .header(CONTENT_LENGTH, 456)
                .header(AUTHORIZATION, "Token: hello")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        request.properties_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(request.uri(), &Uri::from_static("http://www.amazon.com"));
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token: hello"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "456");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
        assert_eq!(config.acquire().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn streaming_requests_cannot_be_cloned() {
        let request = Request::new(http::Request::new(SdkBody::from(hyper::Body::from(
            "stream",
        ))));
        assert!(request.try_clone().is_none());
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = BuildError::MissingField {
            field: "ApplicationId",
            details: "cannot be empty or unset",
        };
        assert_eq!(err.field(), Some("ApplicationId"));
        assert!(err.is_missing_field());
        assert_eq!(
            format!("{}", err),
            "`ApplicationId` was missing. cannot be empty or unset"
        );
    }
}
