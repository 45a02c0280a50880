/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;

/// `ParseStrictResponse` parses a fully loaded HTTP response
///
/// Every operation in the generated clients has a unit struct implementing this trait with
/// `Output = Result<OperationOutput, ServiceError>`. Failure to deserialize a successful
/// response is reported as an unhandled service error.
pub trait ParseStrictResponse {
    type Output;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output;
}
