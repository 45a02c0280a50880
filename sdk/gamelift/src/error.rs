/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_types::error::{ModeledErrorKind, ServiceError};
use sdk_types::retry::ErrorKind as RetryErrorKind;

/// Error returned by every GameLift operation
pub type Error = ServiceError<ErrorKind>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    ConflictException,
    FleetCapacityExceededException,
    IdempotentParameterMismatchException,
    InternalServiceException,
    InvalidFleetStatusException,
    InvalidRequestException,
    LimitExceededException,
    NotFoundException,
    TaggingFailedException,
    TerminalRoutingStrategyException,
    UnauthorizedException,
    UnsupportedRegionException,
    Unhandled,
}

macro_rules! codes {
    ($($kind:ident),+) => {
        impl ErrorKind {
            pub fn code(&self) -> Option<&'static str> {
                match self {
                    $(ErrorKind::$kind => Some(stringify!($kind)),)+
                    ErrorKind::Unhandled => None,
                }
            }
        }

        fn kind_from_code(code: &str) -> ErrorKind {
            match code {
                $(stringify!($kind) => ErrorKind::$kind,)+
                _ => ErrorKind::Unhandled,
            }
        }
    };
}

codes!(
    ConflictException,
    FleetCapacityExceededException,
    IdempotentParameterMismatchException,
    InternalServiceException,
    InvalidFleetStatusException,
    InvalidRequestException,
    LimitExceededException,
    NotFoundException,
    TaggingFailedException,
    TerminalRoutingStrategyException,
    UnauthorizedException,
    UnsupportedRegionException
);

impl ModeledErrorKind for ErrorKind {
    fn from_code(code: Option<&str>) -> Self {
        code.map(kind_from_code).unwrap_or(ErrorKind::Unhandled)
    }

    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match self {
            ErrorKind::InternalServiceException => Some(RetryErrorKind::ServerError),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};

    #[test]
    fn terminal_aliases_are_not_retried() {
        let err = Error::generic(
            sdk_types::error::Error::builder()
                .code("TerminalRoutingStrategyException")
                .message("alias prod is terminal")
                .build(),
        );
        assert_eq!(err.kind(), &ErrorKind::TerminalRoutingStrategyException);
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "TerminalRoutingStrategyException: alias prod is terminal");
    }
}
