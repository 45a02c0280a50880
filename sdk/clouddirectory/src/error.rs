/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_types::error::{ModeledErrorKind, ServiceError};
use sdk_types::retry::ErrorKind as RetryErrorKind;

/// Error returned by every CloudDirectory operation
pub type Error = ServiceError<ErrorKind>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    AccessDeniedException,
    DirectoryAlreadyExistsException,
    DirectoryDeletedException,
    DirectoryNotDisabledException,
    DirectoryNotEnabledException,
    InternalServiceException,
    InvalidArnException,
    InvalidNextTokenException,
    InvalidTaggingRequestException,
    LimitExceededException,
    ResourceNotFoundException,
    RetryableConflictException,
    SchemaAlreadyExistsException,
    ValidationException,
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
    AccessDeniedException,
    DirectoryAlreadyExistsException,
    DirectoryDeletedException,
    DirectoryNotDisabledException,
    DirectoryNotEnabledException,
    InternalServiceException,
    InvalidArnException,
    InvalidNextTokenException,
    InvalidTaggingRequestException,
    LimitExceededException,
    ResourceNotFoundException,
    RetryableConflictException,
    SchemaAlreadyExistsException,
    ValidationException
);

impl ModeledErrorKind for ErrorKind {
    fn from_code(code: Option<&str>) -> Self {
        code.map(kind_from_code).unwrap_or(ErrorKind::Unhandled)
    }

    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match self {
            ErrorKind::InternalServiceException => Some(RetryErrorKind::ServerError),
            ErrorKind::RetryableConflictException => Some(RetryErrorKind::TransientError),
            _ => None,
        }
    }
}
