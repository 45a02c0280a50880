/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Endpoint resolution for AWS services
//!
//! Each operation stores its [`Params`] and a [`SharedEndpointResolver`] in the request property
//! bag. [`EndpointStage`] resolves the endpoint from them right before the request is signed.

pub mod partition;

pub use partition::PartitionResolver;

use sdk_http::endpoint::{ResolveEndpoint, ResolveEndpointError};
use sdk_http::middleware::MapRequest;
use sdk_http::operation::Request;
use sdk_http::property_bag::PropertyBag;
use sdk_types::region::{Region, SigningRegion};
use std::sync::Arc;

/// An endpoint resolver shared by a client and all of its in-flight requests
pub type SharedEndpointResolver = Arc<dyn ResolveEndpoint<Params>>;

/// Parameters used to resolve an endpoint
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    region: Option<Region>,
    use_fips: bool,
    use_dual_stack: bool,
    endpoint: Option<String>,
}

impl Params {
    pub fn builder() -> ParamsBuilder {
        ParamsBuilder::default()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn use_fips(&self) -> bool {
        self.use_fips
    }

    pub fn use_dual_stack(&self) -> bool {
        self.use_dual_stack
    }

    /// An endpoint that overrides the resolved one, eg. `http://localhost:8000`
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParamsBuilder {
    inner: Params,
}

impl ParamsBuilder {
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.inner.region = region.into();
        self
    }

    pub fn use_fips(mut self, use_fips: bool) -> Self {
        self.inner.use_fips = use_fips;
        self
    }

    pub fn use_dual_stack(mut self, use_dual_stack: bool) -> Self {
        self.inner.use_dual_stack = use_dual_stack;
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<Option<String>>) -> Self {
        self.inner.endpoint = endpoint.into();
        self
    }

    pub fn build(self) -> Params {
        self.inner
    }
}

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&SharedEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, resolver: SharedEndpointResolver) {
    properties.insert(resolver);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// EndpointStage implements [`MapRequest`](sdk_http::middleware::MapRequest). It will:
/// 1. Load an endpoint resolver and the endpoint [`Params`] from the property bag.
/// 2. Resolve the endpoint.
/// 3. Apply the endpoint to the URI in the request.
/// 4. Set the `SigningRegion` in the property bag to drive downstream signing middleware.
#[derive(Clone, Debug, Default)]
pub struct EndpointStage;

impl EndpointStage {
    pub fn new() -> Self {
        EndpointStage
    }
}

impl MapRequest for EndpointStage {
    type Error = ResolveEndpointError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let resolver = get_endpoint_resolver(props)
                .cloned()
                .ok_or_else(|| ResolveEndpointError::message("no endpoint resolver was set"))?;
            let params = props
                .get::<Params>()
                .cloned()
                .ok_or_else(|| ResolveEndpointError::message("no endpoint parameters were set"))?;
            let endpoint = resolver.resolve_endpoint(&params)?;
            tracing::debug!(endpoint = %endpoint.uri(), base_region = ?params.region(), "resolved endpoint");
            let signing_region = endpoint
                .signing_region()
                .or_else(|| params.region())
                .cloned()
                .map(SigningRegion::from);
            if let Some(signing_region) = signing_region {
                props.insert::<SigningRegion>(signing_region);
            }
            endpoint.set_endpoint(http_req.uri_mut())?;
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::partition::GlobalEndpoint;
    use crate::{set_endpoint_resolver, EndpointStage, Params, PartitionResolver};
    use http::Uri;
    use sdk_http::body::SdkBody;
    use sdk_http::endpoint::ResolveEndpointError;
    use sdk_http::middleware::MapRequest;
    use sdk_http::operation;
    use sdk_types::region::{Region, SigningRegion};
    use std::sync::Arc;

    fn request(path: &'static str) -> operation::Request {
        operation::Request::new(
            http::Request::builder()
                .uri(path)
                .body(SdkBody::empty())
                .unwrap(),
        )
    }

    #[test]
    fn default_endpoint_updates_request() {
        let mut req = request("/applications/abc");
        {
            let mut props = req.properties_mut();
            set_endpoint_resolver(&mut props, Arc::new(PartitionResolver::regional("m2")));
            props.insert(
                Params::builder()
                    .region(Region::new("us-west-2"))
                    .build(),
            );
        }
        let req = EndpointStage::new().apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from(Region::new("us-west-2")))
        );
        let (req, _) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://m2.us-west-2.amazonaws.com/applications/abc")
        );
    }

    #[test]
    fn global_endpoints_set_the_signing_region() {
        let mut req = request("/2013-04-01/hostedzone");
        {
            let mut props = req.properties_mut();
            set_endpoint_resolver(
                &mut props,
                Arc::new(PartitionResolver::global(
                    "route53",
                    &[GlobalEndpoint {
                        partition: "aws",
                        hostname: "route53.amazonaws.com",
                        signing_region: "us-east-1",
                    }],
                )),
            );
            props.insert(Params::builder().region(Region::new("eu-west-1")).build());
        }
        let req = EndpointStage::new().apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("us-east-1"))
        );
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("https://route53.amazonaws.com/2013-04-01/hostedzone")
        );
    }

    #[test]
    fn resolver_failures_are_returned() {
        let mut req = request("/");
        {
            let mut props = req.properties_mut();
            set_endpoint_resolver(
                &mut props,
                Arc::new(|_: &Params| -> sdk_http::endpoint::Result {
                    Err(ResolveEndpointError::message("misconfigured"))
                }),
            );
            props.insert(Params::default());
        }
        let err = EndpointStage::new().apply(req).expect_err("should fail");
        assert_eq!(format!("{}", err), "misconfigured");
    }

    #[test]
    fn missing_params_fail() {
        let req = request("/");
        let err = EndpointStage::new().apply(req).expect_err("no resolver");
        assert_eq!(format!("{}", err), "no endpoint resolver was set");
    }
}
