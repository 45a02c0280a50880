/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Type-erased connectors and the default HTTPS connector

use sdk_http::body::SdkBody;
use sdk_http::result::ConnectorError;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tower::util::BoxCloneService;
use tower::{Service, ServiceExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

type BoxedConnector =
    BoxCloneService<http::Request<SdkBody>, http::Response<SdkBody>, ConnectorError>;

/// A connector that can be shared between clients and tasks
///
/// Any [`tower::Service`] from `http::Request<SdkBody>` to `http::Response<B>` can be used as
/// a connector. Its errors are mapped to [`ConnectorError`]s; `hyper` errors are classified
/// so that timeouts and io failures can be retried.
#[derive(Clone)]
pub struct DynConnector(Arc<Mutex<BoxedConnector>>);

impl fmt::Debug for DynConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynConnector")
    }
}

impl DynConnector {
    pub fn new<S, B>(connector: S) -> Self
    where
        S: Service<http::Request<SdkBody>, Response = http::Response<B>> + Clone + Send + 'static,
        S::Error: Into<BoxError> + 'static,
        S::Future: Send + 'static,
        SdkBody: From<B>,
        B: 'static,
    {
        let service = connector
            .map_response(|response: http::Response<B>| response.map(SdkBody::from))
            .map_err(|err: S::Error| to_connector_error(err.into()));
        DynConnector(Arc::new(Mutex::new(BoxCloneService::new(service))))
    }

    /// Send a request once the connector is ready
    pub async fn call(
        &self,
        request: http::Request<SdkBody>,
    ) -> Result<http::Response<SdkBody>, ConnectorError> {
        let mut service = self
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        service.ready().await?.call(request).await
    }
}

/// Classify an error returned by a connector
pub fn to_connector_error(err: BoxError) -> ConnectorError {
    let err = match err.downcast::<ConnectorError>() {
        Ok(connector_error) => return *connector_error,
        Err(err) => err,
    };
    match err.downcast::<hyper::Error>() {
        Ok(hyper_error) => hyper_error_kind(*hyper_error),
        Err(err) => ConnectorError::other(err),
    }
}

fn hyper_error_kind(err: hyper::Error) -> ConnectorError {
    if err.is_timeout() {
        ConnectorError::timeout(err.into())
    } else if err.is_user() {
        ConnectorError::user(err.into())
    } else if err.is_closed() || err.is_canceled() || err.is_connect() || err.is_incomplete_message()
    {
        ConnectorError::io(err.into())
    } else {
        ConnectorError::other(err.into())
    }
}

/// A hyper client with a rustls HTTPS connector using the platform's root certificates
///
/// Both HTTP/1.1 and HTTP/2 are enabled; plain `http` endpoints (eg. a local override) are
/// allowed.
#[cfg(feature = "rustls")]
pub fn https() -> DynConnector {
    let https = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build();
    DynConnector::new(hyper::Client::builder().build::<_, SdkBody>(https))
}

#[cfg(test)]
mod test {
    use crate::conns::{to_connector_error, DynConnector};
    use sdk_http::body::SdkBody;
    use sdk_http::result::{ConnectorError, ConnectorErrorKind};

    #[tokio::test]
    async fn mock_connector_round_trip() {
        let (service, mut handle) =
            tower_test::mock::pair::<http::Request<SdkBody>, http::Response<&'static str>>();
        let connector = DynConnector::new(service);
        let server = tokio::spawn(async move {
            let (request, send) = handle.next_request().await.expect("a request was sent");
            assert_eq!(request.uri(), "https://waf.amazonaws.com/");
            send.send_response(http::Response::new("{}"));
        });
        let response = connector
            .call(
                http::Request::builder()
                    .uri("https://waf.amazonaws.com/")
                    .body(SdkBody::empty())
                    .unwrap(),
            )
            .await
            .expect("success");
        assert_eq!(response.body().bytes(), Some("{}".as_bytes()));
        server.await.unwrap();
    }

    #[test]
    fn connector_errors_pass_through() {
        let err = to_connector_error(Box::new(ConnectorError::timeout("slow".into())));
        assert_eq!(err.kind(), ConnectorErrorKind::Timeout);
    }

    #[test]
    fn unknown_errors_are_other() {
        let err = to_connector_error("something broke".into());
        assert_eq!(err.kind(), ConnectorErrorKind::Other);
    }
}
