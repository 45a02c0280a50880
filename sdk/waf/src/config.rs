/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Configuration for the WAF Classic client

use sdk_client::retry;
use sdk_client::rt::spawn::{default_async_spawn, AsyncSpawn, SharedAsyncSpawn};
use sdk_endpoint::partition::GlobalEndpoint;
use sdk_endpoint::{set_endpoint_resolver, Params, PartitionResolver, SharedEndpointResolver};
use sdk_http::body::SdkBody;
use sdk_http::endpoint::ResolveEndpoint;
use sdk_http::operation::{self, Metadata, Operation};
use sdk_sig_auth::signer::{OperationSigningConfig, SharedSigner, SignRequest};
use sdk_types::region::{self, Region, SigningService};
use std::fmt;
use std::sync::Arc;

pub(crate) const SERVICE_NAME: &str = "waf";
const SIGNING_SERVICE: &str = "waf";
const ENDPOINT_PREFIX: &str = "waf";

/// WAF Classic is global within the `aws` partition
const GLOBAL_ENDPOINTS: &[GlobalEndpoint] = &[GlobalEndpoint {
    partition: "aws",
    hostname: "waf.amazonaws.com",
    signing_region: "us-east-1",
}];

/// Service configuration for AWS WAF Classic
///
/// ```rust,no_run
/// use waf::{Config, Region};
/// let conf = Config::builder().region(Region::new("us-west-2")).build();
/// ```
pub struct Config {
    region: Option<Region>,
    endpoint_resolver: SharedEndpointResolver,
    endpoint_url: Option<String>,
    use_fips: bool,
    use_dual_stack: bool,
    signer: Option<SharedSigner>,
    retry_config: retry::Config,
    async_spawn: Option<SharedAsyncSpawn>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .field("use_fips", &self.use_fips)
            .field("use_dual_stack", &self.use_dual_stack)
            .field("signer", &self.signer)
            .field("retry_config", &self.retry_config)
            .field("async_spawn", &self.async_spawn)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    pub fn use_fips(&self) -> bool {
        self.use_fips
    }

    pub fn use_dual_stack(&self) -> bool {
        self.use_dual_stack
    }

    pub fn retry_config(&self) -> &retry::Config {
        &self.retry_config
    }

    /// The executor used by `Client::spawn` and `Client::call_with`
    pub fn async_spawn(&self) -> Option<&SharedAsyncSpawn> {
        self.async_spawn.as_ref()
    }

    /// Parameters handed to the endpoint resolver
    pub fn endpoint_params(&self) -> Params {
        Params::builder()
            .region(self.region.clone())
            .use_fips(self.use_fips)
            .use_dual_stack(self.use_dual_stack)
            .endpoint(self.endpoint_url.clone())
            .build()
    }

    /// Wrap `request` into an operation carrying everything the runtime needs to send it
    pub(crate) fn new_operation<H>(
        &self,
        request: http::Request<SdkBody>,
        handler: H,
        operation_name: &'static str,
    ) -> Operation<H> {
        let mut request = operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            set_endpoint_resolver(&mut props, self.endpoint_resolver.clone());
            props.insert(self.endpoint_params());
            props.insert(OperationSigningConfig::default_config());
            props.insert(SigningService::from_static(SIGNING_SERVICE));
            if let Some(signer) = &self.signer {
                props.insert(signer.clone());
            }
        }
        Operation::new(request, handler).with_metadata(Metadata::new(operation_name, SERVICE_NAME))
    }
}

/// Builder for [`Config`]
#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_resolver: Option<SharedEndpointResolver>,
    endpoint_url: Option<String>,
    use_fips: bool,
    use_dual_stack: bool,
    signer: Option<SharedSigner>,
    retry_config: Option<retry::Config>,
    async_spawn: Option<SharedAsyncSpawn>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The region to send requests to
    ///
    /// When unset, the region is read from the environment (`AWS_REGION`, then
    /// `AWS_DEFAULT_REGION`).
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.region = region.into();
        self
    }

    /// Replace the default partition based endpoint resolver
    ///
    /// By default every region of the `aws` partition resolves to `waf.amazonaws.com`, signed
    /// for `us-east-1`.
    pub fn endpoint_resolver(mut self, resolver: impl ResolveEndpoint<Params> + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(resolver));
        self
    }

    /// Send every request to `url` instead of the resolved endpoint, eg. `http://localhost:8000`
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn use_fips(mut self, use_fips: bool) -> Self {
        self.use_fips = use_fips;
        self
    }

    pub fn use_dual_stack(mut self, use_dual_stack: bool) -> Self {
        self.use_dual_stack = use_dual_stack;
        self
    }

    /// The SigV4 signer. Operations fail to sign when no signer is configured.
    pub fn signer(mut self, signer: impl SignRequest + 'static) -> Self {
        self.signer = Some(SharedSigner::new(signer));
        self
    }

    pub fn retry_config(mut self, retry_config: retry::Config) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    /// The executor for `Client::spawn` and `Client::call_with`
    ///
    /// Defaults to the tokio runtime that is current when [`Builder::build`] is called.
    pub fn async_spawn(mut self, async_spawn: impl AsyncSpawn + 'static) -> Self {
        self.async_spawn = Some(SharedAsyncSpawn::new(async_spawn));
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region.or_else(region::default_provider),
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(PartitionResolver::global(ENDPOINT_PREFIX, GLOBAL_ENDPOINTS))
            }),
            endpoint_url: self.endpoint_url,
            use_fips: self.use_fips,
            use_dual_stack: self.use_dual_stack,
            signer: self.signer,
            retry_config: self.retry_config.unwrap_or_default(),
            async_spawn: self.async_spawn.or_else(default_async_spawn),
        }
    }
}
