/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::endpoint::ResolveEndpointError;
use crate::operation::BuildError;
use bytes::Bytes;
use sdk_types::retry::ErrorKind;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Successful SDK Result
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<Bytes>,
    pub parsed: O,
}

/// Failed SDK Result
///
/// Every failure mode of an operation surfaces as one of these variants. Nothing panics across
/// the client boundary.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BuildError),

    /// No endpoint could be resolved for the request. It was not dispatched over the network.
    EndpointResolutionFailure(ResolveEndpointError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(ConnectorError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<Bytes>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError {
        raw: http::Response<Bytes>,
        err: E,
    },
}

impl<E> SdkError<E> {
    /// The service error, if the service responded with one
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Convert into the service error, if the service responded with one
    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// The raw response, when one was received
    pub fn raw_response(&self) -> Option<&http::Response<Bytes>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// The construction error, when the operation failed before it was sent
    pub fn construction_failure(&self) -> Option<&BuildError> {
        match self {
            SdkError::ConstructionFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl<E> Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::EndpointResolutionFailure(err) => {
                write!(f, "failed to resolve endpoint: {}", err)
            }
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "response error: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err) => Some(err),
            SdkError::EndpointResolutionFailure(err) => Some(err),
            SdkError::DispatchFailure(err) => Some(err),
            SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConnectorErrorKind {
    /// A timeout occurred while processing the request
    Timeout,

    /// A user-caused error (eg. invalid HTTP request)
    User,

    /// Socket/IO error
    Io,

    /// An unclassified error, eg. the task carrying the request was dropped
    Other,
}

/// Error from the underlying connector
///
/// Connector exists to attach a `ConnectorErrorKind` to what would otherwise be an opaque `BoxError`
/// that comes off a potentially generic or dynamic connector.
/// The attached `kind` is used to determine what retry behavior should occur (if any) based on the
/// connector error.
#[derive(Debug)]
pub struct ConnectorError {
    err: BoxError,
    kind: ConnectorErrorKind,
}

impl Display for ConnectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConnectorErrorKind::Timeout => write!(f, "timeout: {}", self.err),
            ConnectorErrorKind::User => write!(f, "user error: {}", self.err),
            ConnectorErrorKind::Io => write!(f, "io error: {}", self.err),
            ConnectorErrorKind::Other => write!(f, "{}", self.err),
        }
    }
}

impl Error for ConnectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.err.as_ref())
    }
}

impl ConnectorError {
    pub fn timeout(err: BoxError) -> Self {
        Self {
            err,
            kind: ConnectorErrorKind::Timeout,
        }
    }

    pub fn user(err: BoxError) -> Self {
        Self {
            err,
            kind: ConnectorErrorKind::User,
        }
    }

    pub fn io(err: BoxError) -> Self {
        Self {
            err,
            kind: ConnectorErrorKind::Io,
        }
    }

    pub fn other(err: BoxError) -> Self {
        Self {
            err,
            kind: ConnectorErrorKind::Other,
        }
    }

    pub fn kind(&self) -> ConnectorErrorKind {
        self.kind
    }

    pub fn is_io(&self) -> bool {
        matches!(self.kind, ConnectorErrorKind::Io)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ConnectorErrorKind::Timeout)
    }

    pub fn is_user(&self) -> bool {
        matches!(self.kind, ConnectorErrorKind::User)
    }

    /// The retry classification for this connector error
    ///
    /// Timeouts and io failures are transient. User errors and unclassified errors are not retried.
    pub fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self.kind {
            ConnectorErrorKind::Timeout | ConnectorErrorKind::Io => {
                Some(ErrorKind::TransientError)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ConnectorError, SdkError};
    use crate::operation::BuildError;
    use sdk_types::retry::ErrorKind;
    use std::error::Error;

    #[test]
    fn display_construction_failure() {
        let err: SdkError<std::io::Error> = SdkError::ConstructionFailure(BuildError::MissingField {
            field: "Name",
            details: "cannot be unset",
        });
        assert_eq!(
            format!("{}", err),
            "failed to construct request: `Name` was missing. cannot be unset"
        );
        assert!(err.source().is_some());
        assert!(err.construction_failure().unwrap().is_missing_field());
    }

    #[test]
    fn connector_error_classification() {
        assert_eq!(
            ConnectorError::timeout("slow".into()).retryable_error_kind(),
            Some(ErrorKind::TransientError)
        );
        assert_eq!(ConnectorError::user("bad".into()).retryable_error_kind(), None);
        assert_eq!(
            format!("{}", ConnectorError::io("connection reset".into())),
            "io error: connection reset"
        );
    }
}
