/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! HTTP specific retry behaviors
//!
//! For protocol agnostic retries, see `sdk_types::retry`.

use sdk_types::retry::{ProvideErrorKind, RetryKind};

pub trait ClassifyResponse {
    /// Classify an error response into a `RetryKind`
    fn classify<E, B>(&self, err: &E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind;
}
