/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Wire protocol helpers for the AWS JSON, REST-JSON and REST-XML protocols

pub mod json;
pub mod xml;

/// Header carrying the request id on JSON protocol responses
pub const AMZN_REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Read the request id the service attached to a response
pub fn request_id<B>(response: &http::Response<B>) -> Option<&str> {
    response
        .headers()
        .get(AMZN_REQUEST_ID_HEADER)
        .or_else(|| response.headers().get("x-amz-request-id"))
        .and_then(|value| value.to_str().ok())
}

/// Whether a status code describes a failure the service expects clients to retry
pub fn is_retryable_status(status: http::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}
