/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_types::error::{ModeledErrorKind, ServiceError};
use sdk_types::retry::ErrorKind as RetryErrorKind;

/// Error returned by every m2 operation
pub type Error = ServiceError<ErrorKind>;

/// The modeled m2 errors
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    AccessDeniedException,
    ConflictException,
    InternalServerException,
    ResourceNotFoundException,
    ServiceQuotaExceededException,
    ThrottlingException,
    ValidationException,
    /// An error code this client does not model
    Unhandled,
}

impl ErrorKind {
    pub fn code(&self) -> Option<&'static str> {
        Some(match self {
            ErrorKind::AccessDeniedException => "AccessDeniedException",
            ErrorKind::ConflictException => "ConflictException",
            ErrorKind::InternalServerException => "InternalServerException",
            ErrorKind::ResourceNotFoundException => "ResourceNotFoundException",
            ErrorKind::ServiceQuotaExceededException => "ServiceQuotaExceededException",
            ErrorKind::ThrottlingException => "ThrottlingException",
            ErrorKind::ValidationException => "ValidationException",
            ErrorKind::Unhandled => return None,
        })
    }
}

impl ModeledErrorKind for ErrorKind {
    fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("AccessDeniedException") => ErrorKind::AccessDeniedException,
            Some("ConflictException") => ErrorKind::ConflictException,
            Some("InternalServerException") => ErrorKind::InternalServerException,
            Some("ResourceNotFoundException") => ErrorKind::ResourceNotFoundException,
            Some("ServiceQuotaExceededException") => ErrorKind::ServiceQuotaExceededException,
            Some("ThrottlingException") => ErrorKind::ThrottlingException,
            Some("ValidationException") => ErrorKind::ValidationException,
            _ => ErrorKind::Unhandled,
        }
    }

    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match self {
            ErrorKind::InternalServerException => Some(RetryErrorKind::ServerError),
            ErrorKind::ThrottlingException => Some(RetryErrorKind::ThrottlingError),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};
    use sdk_types::error::ModeledErrorKind;

    #[test]
    fn codes_round_trip() {
        for kind in [
            ErrorKind::ConflictException,
            ErrorKind::ResourceNotFoundException,
            ErrorKind::ValidationException,
        ]
        .iter()
        {
            assert_eq!(&ErrorKind::from_code(kind.code()), kind);
        }
        assert_eq!(ErrorKind::from_code(Some("Teapot")), ErrorKind::Unhandled);
    }

    #[test]
    fn throttling_is_retryable() {
        let err = Error::generic(
            sdk_types::error::Error::builder()
                .code("ThrottlingException")
                .build(),
        );
        assert_eq!(err.kind(), &ErrorKind::ThrottlingException);
        assert!(err.is_retryable());
    }
}
