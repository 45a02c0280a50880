/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_types::error::{ModeledErrorKind, ServiceError};
use sdk_types::retry::ErrorKind as RetryErrorKind;

/// Error returned by every WAF Classic operation
pub type Error = ServiceError<ErrorKind>;

macro_rules! error_kinds {
    ($($kind:ident => $code:literal,)+) => {
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum ErrorKind {
            $(
                #[doc = concat!("`", $code, "`")]
                $kind,
            )+
            Unhandled,
        }

        impl ErrorKind {
            pub fn code(&self) -> Option<&'static str> {
                match self {
                    $(ErrorKind::$kind => Some($code),)+
                    ErrorKind::Unhandled => None,
                }
            }
        }

        fn kind_from_code(code: &str) -> ErrorKind {
            match code {
                $($code => ErrorKind::$kind,)+
                _ => ErrorKind::Unhandled,
            }
        }
    };
}

error_kinds! {
    WafBadRequestException => "WAFBadRequestException",
    WafDisallowedNameException => "WAFDisallowedNameException",
    WafInternalErrorException => "WAFInternalErrorException",
    WafInvalidAccountException => "WAFInvalidAccountException",
    WafInvalidOperationException => "WAFInvalidOperationException",
    WafInvalidParameterException => "WAFInvalidParameterException",
    WafLimitsExceededException => "WAFLimitsExceededException",
    WafNonEmptyEntityException => "WAFNonEmptyEntityException",
    WafNonexistentContainerException => "WAFNonexistentContainerException",
    WafNonexistentItemException => "WAFNonexistentItemException",
    WafReferencedItemException => "WAFReferencedItemException",
    WafStaleDataException => "WAFStaleDataException",
    WafTagOperationException => "WAFTagOperationException",
    WafTagOperationInternalErrorException => "WAFTagOperationInternalErrorException",
}

impl ModeledErrorKind for ErrorKind {
    fn from_code(code: Option<&str>) -> Self {
        code.map(kind_from_code).unwrap_or(ErrorKind::Unhandled)
    }

    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match self {
            ErrorKind::WafInternalErrorException
            | ErrorKind::WafTagOperationInternalErrorException => {
                Some(RetryErrorKind::ServerError)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::ErrorKind;
    use sdk_types::error::ModeledErrorKind;

    #[test]
    fn wire_codes() {
        assert_eq!(
            ErrorKind::from_code(Some("WAFStaleDataException")),
            ErrorKind::WafStaleDataException
        );
        assert_eq!(
            ErrorKind::WafNonexistentItemException.code(),
            Some("WAFNonexistentItemException")
        );
        assert_eq!(
            ErrorKind::from_code(Some("WafStaleDataException")),
            ErrorKind::Unhandled
        );
        // a stale change token needs a new token, not a retry
        assert_eq!(ErrorKind::WafStaleDataException.retryable_error_kind(), None);
    }
}
