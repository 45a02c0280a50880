/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_types::error::{ModeledErrorKind, ServiceError};
use sdk_types::retry::ErrorKind as RetryErrorKind;

/// Error returned by every Route 53 operation
pub type Error = ServiceError<ErrorKind>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    ConflictingDomainExists,
    DelegationSetNotAvailable,
    DelegationSetNotReusable,
    HostedZoneAlreadyExists,
    HostedZoneNotEmpty,
    HostedZoneNotFound,
    InvalidChangeBatch,
    InvalidDomainName,
    InvalidInput,
    InvalidVPCId,
    NoSuchChange,
    NoSuchDelegationSet,
    NoSuchHostedZone,
    PriorRequestNotComplete,
    Throttling,
    TooManyHostedZones,
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
    ConflictingDomainExists,
    DelegationSetNotAvailable,
    DelegationSetNotReusable,
    HostedZoneAlreadyExists,
    HostedZoneNotEmpty,
    HostedZoneNotFound,
    InvalidChangeBatch,
    InvalidDomainName,
    InvalidInput,
    InvalidVPCId,
    NoSuchChange,
    NoSuchDelegationSet,
    NoSuchHostedZone,
    PriorRequestNotComplete,
    Throttling,
    TooManyHostedZones
);

impl ModeledErrorKind for ErrorKind {
    fn from_code(code: Option<&str>) -> Self {
        code.map(kind_from_code).unwrap_or(ErrorKind::Unhandled)
    }

    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match self {
            // the zone is still processing an earlier change batch
            ErrorKind::PriorRequestNotComplete | ErrorKind::Throttling => {
                Some(RetryErrorKind::ThrottlingError)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};
    use sdk_types::error::ModeledErrorKind;

    #[test]
    fn codes_match_variant_names() {
        assert_eq!(ErrorKind::from_code(Some("InvalidVPCId")), ErrorKind::InvalidVPCId);
        assert_eq!(ErrorKind::NoSuchHostedZone.code(), Some("NoSuchHostedZone"));
        assert_eq!(ErrorKind::from_code(Some("NoSuchZone")), ErrorKind::Unhandled);
        assert_eq!(ErrorKind::from_code(None), ErrorKind::Unhandled);
    }

    #[test]
    fn prior_requests_are_retried() {
        let err = Error::generic(
            sdk_types::error::Error::builder()
                .code("PriorRequestNotComplete")
                .build(),
        );
        assert!(err.is_retryable());
        let err = Error::generic(sdk_types::error::Error::builder().code("HostedZoneNotEmpty").build());
        assert!(!err.is_retryable());
    }
}
