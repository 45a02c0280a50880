/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error types returned by the generated service clients

use crate::retry::{classify_code, ErrorKind, ProvideErrorKind};
use std::fmt;

/// Generic error metadata
///
/// Every error returned by a service carries a `code`, a `message` and the `request_id`
/// the service assigned to the failed request, when they were present on the response.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request id returned by the service.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request id assigned by the service.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `Error` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

/// The set of errors a service has modeled
///
/// Each service client defines an `ErrorKind` enum with one variant per modeled error code
/// and an `Unhandled` variant for everything else.
pub trait ModeledErrorKind: fmt::Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Map a (sanitized) error code to a kind. Unknown or absent codes map to `Unhandled`.
    fn from_code(code: Option<&str>) -> Self;

    /// The retry classification the service model assigns to this kind, if any
    fn retryable_error_kind(&self) -> Option<ErrorKind>;
}

/// An error returned by a service, tagged with the service's error kind
///
/// This preserves the kind, the raw code string, the message and whether the error
/// may be retried.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceError<K> {
    kind: K,
    meta: Error,
    retryable: bool,
}

impl<K: ModeledErrorKind> ServiceError<K> {
    /// Create a `ServiceError` for an explicit kind
    pub fn new(kind: K, meta: Error) -> Self {
        let retryable = kind.retryable_error_kind().is_some()
            || meta.code().and_then(classify_code).is_some();
        Self {
            kind,
            meta,
            retryable,
        }
    }

    /// Create a `ServiceError` from generic metadata, deriving the kind from the code
    pub fn generic(meta: Error) -> Self {
        let kind = K::from_code(meta.code());
        Self::new(kind, meta)
    }

    /// Mark this error as retryable regardless of its modeled kind
    ///
    /// Used for errors the transport layer knows are transient, eg. a `503` without a modeled code.
    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = self.retryable || retryable;
        self
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn meta(&self) -> &Error {
        &self.meta
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }
}

impl<K: ModeledErrorKind> ProvideErrorKind for ServiceError<K> {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        self.kind.retryable_error_kind()
    }

    fn code(&self) -> Option<&str> {
        self.meta.code()
    }
}

impl<K: fmt::Debug> fmt::Display for ServiceError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.meta.code(), self.meta.message()) {
            (Some(code), Some(message)) => write!(f, "{}: {}", code, message),
            (Some(code), None) => write!(f, "{}", code),
            (None, Some(message)) => write!(f, "{:?}: {}", self.kind, message),
            (None, None) => write!(f, "{:?}", self.kind),
        }
    }
}

impl<K: fmt::Debug> std::error::Error for ServiceError<K> {}

#[cfg(test)]
mod test {
    use super::{Error, ModeledErrorKind, ServiceError};
    use crate::retry::{ErrorKind, ProvideErrorKind};

    #[derive(Debug, Clone, PartialEq)]
    enum TestKind {
        InternalServiceException,
        NotFoundException,
        Unhandled,
    }

    impl ModeledErrorKind for TestKind {
        fn from_code(code: Option<&str>) -> Self {
            match code {
                Some("InternalServiceException") => TestKind::InternalServiceException,
                Some("NotFoundException") => TestKind::NotFoundException,
                _ => TestKind::Unhandled,
            }
        }

        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            match self {
                TestKind::InternalServiceException => Some(ErrorKind::ServerError),
                _ => None,
            }
        }
    }

    #[test]
    fn kind_is_derived_from_code() {
        let err: ServiceError<TestKind> = ServiceError::generic(
            Error::builder()
                .code("NotFoundException")
                .message("no such alias")
                .request_id("abc-123")
                .build(),
        );
        assert_eq!(err.kind(), &TestKind::NotFoundException);
        assert_eq!(err.message(), Some("no such alias"));
        assert_eq!(err.request_id(), Some("abc-123"));
        assert!(!err.is_retryable());
        assert_eq!(format!("{}", err), "NotFoundException: no such alias");
    }

    #[test]
    fn modeled_retryable_kind() {
        let err: ServiceError<TestKind> =
            ServiceError::generic(Error::builder().code("InternalServiceException").build());
        assert!(err.is_retryable());
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    }

    #[test]
    fn throttling_codes_are_retryable_even_when_unmodeled() {
        let err: ServiceError<TestKind> =
            ServiceError::generic(Error::builder().code("ThrottlingException").build());
        assert_eq!(err.kind(), &TestKind::Unhandled);
        assert!(err.is_retryable());
    }

    #[test]
    fn display_generic_error() {
        let err = Error::builder().code("Oops").message("it broke").build();
        assert_eq!(
            format!("{}", err),
            "Error { code: \"Oops\", message: \"it broke\" }"
        );
    }
}
