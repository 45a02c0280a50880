/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error and body handling shared by the AWS JSON 1.1 and REST-JSON protocols

use crate::protocol::{is_retryable_status, request_id};
use bytes::Bytes;
use sdk_types::error::{ModeledErrorKind, ServiceError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::borrow::Cow;

pub const AWS_JSON_1_1: &str = "application/x-amz-json-1.1";
pub const APPLICATION_JSON: &str = "application/json";

/// Header carrying the error type on JSON protocol responses
const X_AMZN_ERROR_TYPE: &str = "x-amzn-errortype";

/// Strip the namespace and any trailing metadata from a raw error code
///
/// Codes may be returned as `aws.protocoltests.restjson#FooError:http://internal.amazon.com/...`;
/// only `FooError` is significant.
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

#[derive(Deserialize, Default)]
struct ErrorBody<'a> {
    #[serde(borrow, rename = "__type")]
    type_: Option<Cow<'a, str>>,
    #[serde(borrow)]
    code: Option<Cow<'a, str>>,
    #[serde(borrow, alias = "Message", alias = "errorMessage")]
    message: Option<Cow<'a, str>>,
}

/// Parse the generic error metadata out of a JSON error response
///
/// The code is read from the `x-amzn-errortype` header first, then from the `__type` or `code`
/// body members. A body that is not JSON is tolerated; only the header is used in that case.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> sdk_types::error::Error {
    let body: ErrorBody = if response.body().iter().all(u8::is_ascii_whitespace) {
        ErrorBody::default()
    } else {
        serde_json::from_slice(response.body()).unwrap_or_default()
    };
    let header_code = response
        .headers()
        .get(X_AMZN_ERROR_TYPE)
        .and_then(|value| value.to_str().ok());
    let code = header_code
        .or_else(|| body.type_.as_deref())
        .or_else(|| body.code.as_deref())
        .map(sanitize_error_code);

    let mut builder = sdk_types::error::Error::builder();
    if let Some(code) = code {
        builder = builder.code(code);
    }
    if let Some(message) = body.message.as_deref() {
        builder = builder.message(message);
    }
    if let Some(request_id) = request_id(response) {
        builder = builder.request_id(request_id);
    }
    builder.build()
}

/// Deserialize a JSON response body, treating an empty body as the default value
pub fn deserialize_body<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        Ok(T::default())
    } else {
        serde_json::from_slice(body)
    }
}

/// Parse an error response into a service error of kind `K`
pub fn parse_error<K: ModeledErrorKind>(response: &http::Response<Bytes>) -> ServiceError<K> {
    ServiceError::generic(parse_generic_error(response))
        .with_retryable(is_retryable_status(response.status()))
}

/// Parse a JSON protocol response
///
/// Error statuses are parsed as service errors. A success response whose body can't be
/// deserialized is reported as an unhandled service error.
pub fn parse_response<T, K>(response: &http::Response<Bytes>) -> Result<T, ServiceError<K>>
where
    T: DeserializeOwned + Default,
    K: ModeledErrorKind,
{
    if !response.status().is_success() {
        return Err(parse_error(response));
    }
    deserialize_body(response.body()).map_err(|err| {
        let mut meta = sdk_types::error::Error::builder()
            .message(format!("failed to deserialize response: {}", err));
        if let Some(request_id) = request_id(response) {
            meta = meta.request_id(request_id);
        }
        ServiceError::generic(meta.build())
    })
}

#[cfg(test)]
mod test {
    use super::{deserialize_body, parse_generic_error, parse_response, sanitize_error_code};
    use bytes::Bytes;
    use serde::Deserialize;

    #[test]
    fn error_code_sanitization() {
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("com.amazonaws.gamelift#NotFoundException"),
            "NotFoundException"
        );
        assert_eq!(sanitize_error_code("ConflictException"), "ConflictException");
    }

    #[test]
    fn code_from_header_wins() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "ResourceNotFoundException:http://internal")
            .header("x-amzn-requestid", "req-1")
            .body(Bytes::from_static(
                br#"{"__type": "Other", "message": "application abc not found"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("application abc not found"));
        assert_eq!(err.request_id(), Some("req-1"));
    }

    #[test]
    fn code_from_body() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{"__type": "com.amazonaws.waf#WAFStaleDataException", "Message": "stale"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("WAFStaleDataException"));
        assert_eq!(err.message(), Some("stale"));
    }

    #[test]
    fn non_json_error_body() {
        let response = http::Response::builder()
            .status(503)
            .body(Bytes::from_static(b"<html>service unavailable</html>"))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }

    #[derive(Deserialize, Default, Debug, PartialEq)]
    struct Output {
        #[serde(rename = "FleetId")]
        fleet_id: Option<String>,
    }

    #[test]
    fn empty_bodies_deserialize_to_default() {
        assert_eq!(deserialize_body::<Output>(b"").unwrap(), Output::default());
        assert_eq!(
            deserialize_body::<Output>(br#"{"FleetId": "fleet-1"}"#).unwrap(),
            Output {
                fleet_id: Some("fleet-1".to_string())
            }
        );
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestKind {
        FleetCapacityExceededException,
        Unhandled,
    }

    impl sdk_types::error::ModeledErrorKind for TestKind {
        fn from_code(code: Option<&str>) -> Self {
            match code {
                Some("FleetCapacityExceededException") => TestKind::FleetCapacityExceededException,
                _ => TestKind::Unhandled,
            }
        }

        fn retryable_error_kind(&self) -> Option<sdk_types::retry::ErrorKind> {
            None
        }
    }

    #[test]
    fn parse_modeled_error_response() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{"__type": "FleetCapacityExceededException", "Message": "full"}"#,
            ))
            .unwrap();
        let err = parse_response::<Output, TestKind>(&response).expect_err("error status");
        assert_eq!(err.kind(), &TestKind::FleetCapacityExceededException);
        assert!(!err.is_retryable());
    }

    #[test]
    fn unparseable_success_is_unhandled() {
        let response = http::Response::builder()
            .status(200)
            .header("x-amzn-requestid", "req-2")
            .body(Bytes::from_static(br#"{"FleetId": "#))
            .unwrap();
        let err = parse_response::<Output, TestKind>(&response).expect_err("truncated body");
        assert_eq!(err.kind(), &TestKind::Unhandled);
        assert_eq!(err.request_id(), Some("req-2"));
    }

    #[test]
    fn server_errors_are_retryable() {
        let response = http::Response::builder()
            .status(503)
            .body(Bytes::new())
            .unwrap();
        let err = parse_response::<Output, TestKind>(&response).expect_err("unavailable");
        assert!(err.is_retryable());
    }
}
