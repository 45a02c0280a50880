/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Module with client connectors useful for testing.

use http::header::{HeaderName, CONTENT_TYPE};
use http::Request;
use sdk_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::oneshot;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Test Connection to capture a single request
#[derive(Debug, Clone)]
pub struct CaptureRequestHandler(Arc<Mutex<Inner>>);

#[derive(Debug)]
struct Inner {
    response: Option<http::Response<SdkBody>>,
    sender: Option<oneshot::Sender<http::Request<SdkBody>>>,
}

/// Receiver for [`CaptureRequestHandler`](CaptureRequestHandler)
#[derive(Debug)]
pub struct CaptureRequestReceiver {
    receiver: oneshot::Receiver<http::Request<SdkBody>>,
}

impl CaptureRequestReceiver {
    pub fn expect_request(mut self) -> http::Request<SdkBody> {
        self.receiver.try_recv().expect("no request was received")
    }

    pub fn expect_no_request(mut self) {
        self.receiver
            .try_recv()
            .expect_err("expected no request to be sent");
    }
}

impl tower::Service<http::Request<SdkBody>> for CaptureRequestHandler {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<SdkBody>) -> Self::Future {
        let mut inner = self.0.lock().unwrap();
        inner
            .sender
            .take()
            .expect("already sent")
            .send(req)
            .expect("channel not ready");
        std::future::ready(Ok(inner
            .response
            .take()
            .expect("could not handle second request")))
    }
}

/// Test connection used to capture a single request
///
/// If response is `None`, it will reply with a 200 response with an empty body
///
/// Example:
/// ```rust,ignore
/// let (conn, request) = capture_request(None);
/// let client = route53::Client::from_conf_conn(conf, conn);
/// let _ = client.test_dns_answer(input).await;
/// // TestDNSAnswer should be unsigned
/// assert_eq!(
///     request.expect_request().headers().get("AUTHORIZATION"),
///     None
/// );
/// ```
pub fn capture_request(
    response: Option<http::Response<SdkBody>>,
) -> (CaptureRequestHandler, CaptureRequestReceiver) {
    let (tx, rx) = oneshot::channel();
    (
        CaptureRequestHandler(Arc::new(Mutex::new(Inner {
            response: Some(response.unwrap_or_else(|| {
                http::Response::builder()
                    .status(200)
                    .body(SdkBody::empty())
                    .expect("unreachable")
            })),
            sender: Some(tx),
        }))),
        CaptureRequestReceiver { receiver: rx },
    )
}

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        assert_eq!(actual.method(), expected.method(), "Method mismatch");
        assert_eq!(actual.uri(), expected.uri(), "URI mismatch");
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(
                    actual_header.to_str().unwrap(),
                    value.to_str().unwrap(),
                    "Header mismatch for {:?}",
                    name
                );
            }
        }
        let actual_body = actual.body().bytes().unwrap_or(&[]);
        let expected_body = expected.body().bytes().unwrap_or(&[]);
        let is_json = actual
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("json"))
            .unwrap_or(false);
        if is_json && !expected_body.is_empty() {
            let actual_json: serde_json::Value =
                serde_json::from_slice(actual_body).expect("actual body is not JSON");
            let expected_json: serde_json::Value =
                serde_json::from_slice(expected_body).expect("expected body is not JSON");
            assert_eq!(actual_json, expected_json, "JSON body mismatch");
        } else {
            assert_eq!(
                std::str::from_utf8(actual_body),
                std::str::from_utf8(expected_body),
                "Body mismatch"
            );
        }
    }
}

/// TestConnection for use with a [`Client`](crate::Client).
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// The generic parameter `B` is the type of the response body.
/// For more complex use cases, see [Tower Test](https://docs.rs/tower-test/0.4.0/tower_test/)
/// Usage example:
/// ```rust
/// use sdk_client::test_connection::TestConnection;
/// use sdk_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = sdk_client::Builder::new().connector(conn).build();
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// Need a clone impl that ignores `B`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining_requests = self.data.lock().unwrap().len();
        let actual_requests = self.requests().len();
        assert_eq!(
            remaining_requests, 0,
            "Expected {} additional requests ({} were made)",
            remaining_requests, actual_requests
        );
    }
}

impl<B> tower::Service<http::Request<SdkBody>> for TestConnection<B>
where
    SdkBody: From<B>,
{
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = self.data.lock().unwrap().pop() {
            self.requests
                .lock()
                .unwrap()
                .push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(SdkBody::from)))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

impl<B> From<TestConnection<B>> for crate::conns::DynConnector
where
    B: Send + 'static,
    SdkBody: From<B>,
{
    fn from(conn: TestConnection<B>) -> Self {
        crate::conns::DynConnector::new::<_, SdkBody>(conn)
    }
}

impl From<CaptureRequestHandler> for crate::conns::DynConnector {
    fn from(conn: CaptureRequestHandler) -> Self {
        crate::conns::DynConnector::new::<_, SdkBody>(conn)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::{capture_request, TestConnection};
    use http::header::CONTENT_TYPE;
    use sdk_http::body::SdkBody;
    use tower::{Service, ServiceExt};

    #[tokio::test]
    async fn records_requests() {
        let mut conn = TestConnection::new(vec![(
            http::Request::builder()
                .uri("https://gamelift.us-east-1.amazonaws.com/")
                .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                .body(SdkBody::from(r#"{"AliasId": "alias-1"}"#))
                .unwrap(),
            http::Response::builder().status(200).body("{}").unwrap(),
        )]);
        let response = conn
            .ready()
            .await
            .unwrap()
            .call(
                http::Request::builder()
                    .uri("https://gamelift.us-east-1.amazonaws.com/")
                    .header(CONTENT_TYPE, "application/x-amz-json-1.1")
                    .body(SdkBody::from(r#"{"AliasId":"alias-1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        conn.assert_requests_match(&[]);
    }

    #[tokio::test]
    async fn no_more_data() {
        let mut conn = TestConnection::<&'static str>::new(vec![]);
        let err = conn
            .call(http::Request::new(SdkBody::empty()))
            .await
            .expect_err("no responses loaded");
        assert_eq!(format!("{}", err), "No more data");
        assert!(conn.requests().is_empty());
    }

    #[tokio::test]
    async fn capture_a_single_request() {
        let (mut conn, request) = capture_request(None);
        let response = conn
            .call(
                http::Request::builder()
                    .uri("/2013-04-01/testdnsanswer")
                    .body(SdkBody::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(request.expect_request().uri(), "/2013-04-01/testdnsanswer");
    }
}
