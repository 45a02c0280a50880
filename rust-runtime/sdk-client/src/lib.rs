/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A client that dispatches operations for the generated AWS service clients.
//!
//! The [`Client`] owns a connector and a retry strategy. Each attempt of an operation runs
//! through the same steps:
//!
//! 1. the endpoint is resolved from the resolver and parameters in the property bag
//!    ([`EndpointStage`](sdk_endpoint::EndpointStage)),
//! 2. the request is signed ([`SigningStage`](sdk_sig_auth::middleware::SigningStage)),
//! 3. the request is sent with the connector and the response body is read,
//! 4. the response is parsed by the operation's response handler.
//!
//! A request that cannot be signed (eg. no signer is configured for a SigV4 operation) fails
//! with [`BuildError::SigningFailure`](sdk_http::operation::BuildError::SigningFailure) inside
//! a `ConstructionFailure`, before anything is sent.
//!
//! Failed attempts are classified by [`AwsErrorRetryPolicy`](retry::AwsErrorRetryPolicy) and
//! retried by the [`Standard`](retry::Standard) strategy.

pub mod conns;
pub mod retry;
pub mod rt;
#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;

use crate::conns::DynConnector;
use crate::retry::AwsErrorRetryPolicy;
use bytes::Bytes;
use sdk_endpoint::EndpointStage;
use sdk_http::middleware::MapRequest;
use sdk_http::operation::{self, BuildError, Operation};
use sdk_http::response::ParseStrictResponse;
use sdk_http::result::{SdkError, SdkSuccess};
use sdk_sig_auth::middleware::SigningStage;
use sdk_types::retry::{ProvideErrorKind, RetryKind};
use std::fmt;
use tracing::Instrument;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An operation input that can be turned into a dispatchable [`Operation`]
///
/// Every generated `<Operation>Input` implements this trait. `make_operation` validates the
/// input and serializes it; it never performs any I/O.
pub trait OperationInput: Clone + Send + Sync + 'static {
    /// The service configuration the operation is built against
    type Config;
    /// Response handler of the operation
    type Handler: ParseStrictResponse<Output = Result<Self::Output, Self::Error>>
        + Clone
        + Send
        + Sync
        + 'static;
    type Output: Send + 'static;
    type Error: ProvideErrorKind + Send + 'static;

    /// Name of the operation, eg. `CreateHostedZone`
    const NAME: &'static str;

    fn make_operation(
        &self,
        config: &Self::Config,
    ) -> Result<Operation<Self::Handler>, BuildError>;
}

/// Smithy service client.
///
/// The service client is customizable in a number of ways (see [`Builder`]), but most
/// generated clients construct it from their `Config` and only pick the connector.
///
/// With the `rustls` feature enabled, a client using a hyper based HTTPS connector can be
/// created with [`Builder::rustls`].
///
/// ```rust,ignore
/// let client = sdk_client::Builder::new().rustls().build();
/// ```
#[derive(Clone)]
pub struct Client {
    connector: DynConnector,
    retry: retry::Standard,
    retry_policy: AwsErrorRetryPolicy,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("connector", &self.connector)
            .field("retry", &self.retry)
            .finish()
    }
}

/// A builder that provides more customization options when constructing a [`Client`].
///
/// To start, call [`Builder::new`]. Then, chain the method calls to configure the `Builder`.
/// When configured to your liking, call [`Builder::build`].
#[derive(Debug, Default)]
pub struct Builder<C = ()> {
    connector: C,
    retry_config: retry::Config,
}

impl Builder<()> {
    pub fn new() -> Self {
        Builder::default()
    }

    /// Use a hyper based HTTPS connector with rustls
    #[cfg(feature = "rustls")]
    pub fn rustls(self) -> Builder<DynConnector> {
        self.connector(conns::https())
    }
}

impl<C> Builder<C> {
    /// Specify the connector for the eventual client to use.
    pub fn connector(self, connector: impl Into<DynConnector>) -> Builder<DynConnector> {
        Builder {
            connector: connector.into(),
            retry_config: self.retry_config,
        }
    }

    /// Set the retry configuration
    pub fn retry_config(mut self, retry_config: retry::Config) -> Self {
        self.retry_config = retry_config;
        self
    }
}

impl Builder<DynConnector> {
    pub fn build(self) -> Client {
        Client {
            connector: self.connector,
            retry: retry::Standard::new(self.retry_config),
            retry_policy: AwsErrorRetryPolicy::new(),
        }
    }
}

impl Client {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Validate `input`, then dispatch it
    ///
    /// Validation failures are returned as a `ConstructionFailure` before anything is sent.
    pub async fn send<I>(
        &self,
        input: &I,
        config: &I::Config,
    ) -> Result<I::Output, SdkError<I::Error>>
    where
        I: OperationInput,
    {
        let operation = match input.make_operation(config) {
            Ok(operation) => operation,
            Err(err) => {
                tracing::warn!(
                    operation = I::NAME,
                    field = err.field().unwrap_or("<none>"),
                    error = %err,
                    "invalid operation input"
                );
                return Err(SdkError::ConstructionFailure(err));
            }
        };
        self.call(operation).await
    }

    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E>(&self, input: Operation<O>) -> Result<T, SdkError<E>>
    where
        O: ParseStrictResponse<Output = Result<T, E>> + Clone + Send + Sync,
        E: ProvideErrorKind,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E>(
        &self,
        input: Operation<O>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseStrictResponse<Output = Result<T, E>> + Clone + Send + Sync,
        E: ProvideErrorKind,
    {
        let (operation, service) = input
            .metadata()
            .map(|metadata| (metadata.name().to_string(), metadata.service().to_string()))
            .unwrap_or_default();
        let span = tracing::info_span!("send_operation", operation = %operation, service = %service);
        self.dispatch_with_retries(input).instrument(span).await
    }

    async fn dispatch_with_retries<O, T, E>(
        &self,
        input: Operation<O>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseStrictResponse<Output = Result<T, E>> + Clone + Send + Sync,
        E: ProvideErrorKind,
    {
        let (mut request, parts) = input.into_request_response();
        let handler = parts.response_handler;
        let mut retries = self.retry.new_request_policy();
        loop {
            // streaming bodies can't be cloned: those requests get a single attempt
            let next_request = request.try_clone();
            tracing::debug!(attempt = retries.attempts(), "dispatching request");
            let result = self.attempt(request, &handler).await;
            let retry_kind = match &result {
                Ok(_) => {
                    retries.succeeded();
                    RetryKind::NotRetryable
                }
                Err(err) => self.retry_policy.classify_error(err),
            };
            if result.is_ok() || retry_kind == RetryKind::NotRetryable {
                return result;
            }
            let (next_request, delay) = match (next_request, retries.should_retry(&retry_kind)) {
                (Some(next_request), Some(delay)) => (next_request, delay),
                _ => {
                    tracing::debug!(kind = ?retry_kind, "not retrying: attempts or retry quota exhausted");
                    return result;
                }
            };
            drop(result);
            tracing::debug!(kind = ?retry_kind, delay = ?delay, "retrying request");
            tokio::time::sleep(delay).await;
            request = next_request;
        }
    }

    async fn attempt<O, T, E>(
        &self,
        request: operation::Request,
        handler: &O,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseStrictResponse<Output = Result<T, E>>,
    {
        let request = EndpointStage::new()
            .apply(request)
            .map_err(SdkError::EndpointResolutionFailure)?;
        let request = SigningStage::new()
            .apply(request)
            .map_err(|err| SdkError::ConstructionFailure(BuildError::SigningFailure(err.into())))?;
        let (request, _properties) = request.into_parts();
        let response = self
            .connector
            .call(request)
            .await
            .map_err(SdkError::DispatchFailure)?;
        let (parts, body) = response.into_parts();
        tracing::trace!(status = %parts.status, "received response");
        let body = match hyper::body::to_bytes(body).await {
            Ok(body) => body,
            Err(err) => {
                return Err(SdkError::ResponseError {
                    raw: http::Response::from_parts(parts, Bytes::new()),
                    err,
                })
            }
        };
        let response = http::Response::from_parts(parts, body);
        match handler.parse(&response) {
            Ok(parsed) => Ok(SdkSuccess {
                raw: response,
                parsed,
            }),
            Err(err) => Err(SdkError::ServiceError { raw: response, err }),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::retry;
    use crate::test_connection::TestConnection;
    use crate::{Builder, Client};
    use bytes::Bytes;
    use sdk_endpoint::{set_endpoint_resolver, Params};
    use sdk_http::body::SdkBody;
    use sdk_http::endpoint::{Endpoint, ResolveEndpointError};
    use sdk_http::operation::{self, Metadata, Operation};
    use sdk_http::response::ParseStrictResponse;
    use sdk_http::result::SdkError;
    use sdk_sig_auth::signer::OperationSigningConfig;
    use sdk_types::retry::{ErrorKind, ProvideErrorKind};
    use sdk_types::region::{Region, SigningService};
    use std::sync::Arc;
    use std::time::Duration;

    fn is_send_sync<T: Send + Sync>(_: &T) {}

    #[derive(Debug)]
    struct TestError {
        status: u16,
    }

    impl ProvideErrorKind for TestError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            if self.status == 503 {
                Some(ErrorKind::ServerError)
            } else {
                None
            }
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    #[derive(Clone)]
    struct EchoStatus;

    impl ParseStrictResponse for EchoStatus {
        type Output = Result<String, TestError>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).to_string())
            } else {
                Err(TestError {
                    status: response.status().as_u16(),
                })
            }
        }
    }

    fn operation(
        resolver: sdk_endpoint::SharedEndpointResolver,
    ) -> Operation<EchoStatus> {
        let mut request = operation::Request::new(
            http::Request::builder()
                .uri("/applications/abc")
                .method("DELETE")
                .body(SdkBody::empty())
                .unwrap(),
        );
        {
            let mut props = request.properties_mut();
            set_endpoint_resolver(&mut props, resolver);
            props.insert(Params::builder().region(Region::new("us-east-1")).build());
            props.insert(OperationSigningConfig::unsigned());
            props.insert(SigningService::from_static("m2"));
        }
        Operation::new(request, EchoStatus)
            .with_metadata(Metadata::new("DeleteApplication", "m2"))
    }

    fn local_endpoint() -> sdk_endpoint::SharedEndpointResolver {
        Arc::new(Endpoint::parse("https://m2.us-east-1.amazonaws.com").unwrap())
    }

    fn expected_request() -> http::Request<SdkBody> {
        http::Request::builder()
            .method("DELETE")
            .uri("https://m2.us-east-1.amazonaws.com/applications/abc")
            .body(SdkBody::empty())
            .unwrap()
    }

    fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
        http::Response::builder().status(status).body(body).unwrap()
    }

    fn client(conn: TestConnection<&'static str>) -> Client {
        Builder::new()
            .connector(conn)
            .retry_config(retry::Config::default().with_base(|| 1_f64))
            .build()
    }

    #[test]
    fn client_is_send_sync() {
        let client = client(TestConnection::new(vec![]));
        is_send_sync(&client);
    }

    #[tokio::test]
    async fn successful_call() {
        let conn = TestConnection::new(vec![(expected_request(), response(200, "ok"))]);
        let client = client(conn.clone());
        let output = client.call(operation(local_endpoint())).await.unwrap();
        assert_eq!(output, "ok");
        conn.assert_requests_match(&[]);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_modeled_server_errors() {
        let conn = TestConnection::new(vec![
            (expected_request(), response(503, "")),
            (expected_request(), response(503, "")),
            (expected_request(), response(200, "finally")),
        ]);
        let client = client(conn.clone());
        let output = client.call(operation(local_endpoint())).await.unwrap();
        assert_eq!(output, "finally");
        conn.assert_requests_match(&[]);
        assert_eq!(client.retry.quota_available(), 495);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_attempts() {
        let conn = TestConnection::new(vec![
            (expected_request(), response(503, "")),
            (expected_request(), response(503, "")),
            (expected_request(), response(503, "")),
        ]);
        let client = client(conn.clone());
        let err = client
            .call(operation(local_endpoint()))
            .await
            .expect_err("all attempts fail");
        assert_eq!(err.service_error().unwrap().status, 503);
        assert_eq!(conn.requests().len(), 3);
    }

    #[tokio::test]
    async fn unretryable_errors_are_returned_immediately() {
        let conn = TestConnection::new(vec![(expected_request(), response(404, ""))]);
        let client = client(conn.clone());
        let err = client
            .call(operation(local_endpoint()))
            .await
            .expect_err("not found");
        assert_eq!(err.raw_response().unwrap().status(), 404);
        assert_eq!(conn.requests().len(), 1);
    }

    #[tokio::test]
    async fn endpoint_failures_never_reach_the_connector() {
        let conn = TestConnection::<&'static str>::new(vec![]);
        let client = client(conn.clone());
        let resolver: sdk_endpoint::SharedEndpointResolver =
            Arc::new(|_: &Params| -> sdk_http::endpoint::Result {
                Err(ResolveEndpointError::message("no endpoint for you"))
            });
        let err = client
            .call(operation(resolver))
            .await
            .expect_err("endpoint resolution fails");
        assert!(matches!(err, SdkError::EndpointResolutionFailure(_)));
        assert!(conn.requests().is_empty());
    }

    #[tokio::test]
    async fn missing_signer_is_a_signing_failure() {
        let conn = TestConnection::<&'static str>::new(vec![]);
        let client = client(conn.clone());
        let mut operation = operation(local_endpoint());
        operation
            .properties_mut()
            .insert(OperationSigningConfig::default_config());
        let err = client
            .call(operation)
            .await
            .expect_err("there is no signer");
        let build_error = err.construction_failure().expect("construction failure");
        assert!(build_error.is_signing_failure());
        assert!(!build_error.is_missing_field());
        assert!(conn.requests().is_empty());
    }

    #[tokio::test]
    async fn dispatch_failures() {
        // the connection has no responses loaded so the call fails in the connector
        let conn = TestConnection::<&'static str>::new(vec![]);
        let client = client(conn);
        let err = client
            .call(operation(local_endpoint()))
            .await
            .expect_err("dispatch fails");
        match err {
            SdkError::DispatchFailure(err) => assert!(!err.is_timeout()),
            other => panic!("expected a dispatch failure, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn retry_after_is_honoured() {
        let throttled = http::Response::builder()
            .status(429)
            .header("x-amz-retry-after", "1500")
            .body("")
            .unwrap();
        let conn = TestConnection::new(vec![
            (expected_request(), throttled),
            (expected_request(), response(200, "ok")),
        ]);
        let client = client(conn.clone());
        let start = tokio::time::Instant::now();
        let output = client.call(operation(local_endpoint())).await.unwrap();
        assert_eq!(output, "ok");
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
