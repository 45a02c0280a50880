/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_types::region::{SigningRegion, SigningService};
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

pub type SigningError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum SigningAlgorithm {
    SigV4,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SigningRequirements {
    /// A signature MAY be added if credentials are defined
    Optional,

    /// A signature MUST be added.
    ///
    /// If no signer is configured, signing fails.
    Required,

    /// A signature MUST NOT be added.
    Disabled,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signing_requirements: SigningRequirements,
}

impl OperationSigningConfig {
    /// The signing configuration used by most operations
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signing_requirements: SigningRequirements::Required,
        }
    }

    /// Configuration for operations that are sent without a signature, eg. Route53 `TestDNSAnswer`
    pub fn unsigned() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signing_requirements: SigningRequirements::Disabled,
        }
    }
}

/// Request specific signing configuration
#[derive(Debug)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

/// Signs an HTTP request
///
/// Implementations add the signature headers (eg. `Authorization`, `X-Amz-Date`) to `request`.
/// The body is always fully loaded when the signer is invoked.
pub trait SignRequest: Send + Sync {
    fn sign(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        request: &mut http::Request<&[u8]>,
    ) -> Result<(), SigningError>;
}

/// A signer shared between a client and its requests
#[derive(Clone)]
pub struct SharedSigner(Arc<dyn SignRequest>);

impl SharedSigner {
    pub fn new(signer: impl SignRequest + 'static) -> Self {
        SharedSigner(Arc::new(signer))
    }
}

impl fmt::Debug for SharedSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSigner")
    }
}

impl SignRequest for SharedSigner {
    fn sign(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        request: &mut http::Request<&[u8]>,
    ) -> Result<(), SigningError> {
        self.0.sign(operation_config, request_config, request)
    }
}

#[cfg(any(test, feature = "test-util"))]
pub mod test_util {
    use super::{OperationSigningConfig, RequestConfig, SignRequest, SigningError};
    use http::header::{HeaderValue, AUTHORIZATION};
    use std::time::UNIX_EPOCH;

    /// Writes the signing scope into the `Authorization` header instead of a signature
    ///
    /// The header reads `TEST {epoch seconds}/{region}/{service}/{body length}`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ScopeSigner;

    impl SignRequest for ScopeSigner {
        fn sign(
            &self,
            _operation_config: &OperationSigningConfig,
            request_config: &RequestConfig<'_>,
            request: &mut http::Request<&[u8]>,
        ) -> Result<(), SigningError> {
            let ts = request_config
                .request_ts
                .duration_since(UNIX_EPOCH)?
                .as_secs();
            let value = format!(
                "TEST {}/{}/{}/{}",
                ts,
                request_config.region.as_ref(),
                request_config.service.as_ref(),
                request.body().len()
            );
            request
                .headers_mut()
                .insert(AUTHORIZATION, HeaderValue::from_str(&value)?);
            Ok(())
        }
    }
}
