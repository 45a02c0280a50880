/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::signer::{
    OperationSigningConfig, RequestConfig, SharedSigner, SignRequest, SigningError,
    SigningRequirements,
};
use sdk_http::middleware::MapRequest;
use sdk_http::operation::Request;
use sdk_http::property_bag::PropertyBag;
use sdk_types::region::{SigningRegion, SigningService};
use std::time::SystemTime;
use thiserror::Error;

/// Middleware stage to sign requests
///
/// SigningStage will load configuration from the request property bag and add a signature.
///
/// Prior to signing, the following fields MUST be present in the property bag:
/// - [`OperationSigningConfig`](OperationSigningConfig): Operation specific signing configuration.
///   When signing is disabled for the operation nothing else is read and the request is unchanged.
/// - [`SigningRegion`](SigningRegion): The region used when signing the request, eg. `us-east-1`
/// - [`SigningService`](SigningService): The name of the service to use when signing the request, eg. `route53`
/// - [`SharedSigner`](SharedSigner): The signer. It MAY be absent if signing is optional.
///
/// The following fields MAY be present in the property bag:
/// - [`SystemTime`](SystemTime): The timestamp to use when signing the request. If this field is not present
///   [`SystemTime::now`](SystemTime::now) will be used.
#[derive(Clone, Debug, Default)]
pub struct SigningStage;

impl SigningStage {
    pub fn new() -> Self {
        SigningStage
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("No signer in the property bag")]
    MissingSigner,
    #[error("No signing region in the property bag")]
    MissingSigningRegion,
    #[error("No signing service in the property bag")]
    MissingSigningService,
    #[error("No signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("The request body could not be signed by this configuration")]
    InvalidBodyType,
    #[error("Signing failed")]
    SigningFailure(#[source] SigningError),
}

enum SigningDecision<'a> {
    Skip,
    Sign(
        &'a OperationSigningConfig,
        RequestConfig<'a>,
        &'a SharedSigner,
    ),
}

/// Extract a signing config from a [`PropertyBag`](sdk_http::property_bag::PropertyBag)
fn signing_config(config: &PropertyBag) -> Result<SigningDecision<'_>, SigningStageError> {
    let operation_config = config
        .get::<OperationSigningConfig>()
        .ok_or(SigningStageError::MissingSigningConfig)?;
    let signer = match (operation_config.signing_requirements, config.get::<SharedSigner>()) {
        (SigningRequirements::Disabled, _) => return Ok(SigningDecision::Skip),
        (SigningRequirements::Optional, None) => return Ok(SigningDecision::Skip),
        (SigningRequirements::Required, None) => return Err(SigningStageError::MissingSigner),
        (_, Some(signer)) => signer,
    };
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    let request_config = RequestConfig {
        request_ts: config
            .get::<SystemTime>()
            .copied()
            .unwrap_or_else(SystemTime::now),
        region,
        service,
    };
    Ok(SigningDecision::Sign(operation_config, request_config, signer))
}

impl MapRequest for SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|req, config| {
            let (operation_config, request_config, signer) = match signing_config(config)? {
                SigningDecision::Skip => {
                    tracing::trace!("signing disabled for this request");
                    return Ok(req);
                }
                SigningDecision::Sign(operation_config, request_config, signer) => {
                    (operation_config, request_config, signer)
                }
            };

            // Only fully loaded bodies can be signed
            let (parts, body) = req.into_parts();
            let signable_body = body.bytes().ok_or(SigningStageError::InvalidBodyType)?;
            let mut signable_request = http::Request::from_parts(parts, signable_body);

            signer
                .sign(operation_config, &request_config, &mut signable_request)
                .map_err(SigningStageError::SigningFailure)?;
            let (signed_parts, _) = signable_request.into_parts();
            Ok(http::Request::from_parts(signed_parts, body))
        })
    }
}
