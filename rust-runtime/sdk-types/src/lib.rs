/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Types shared by every generated service client: regions, error metadata, retry
//! classification and timestamps.

pub mod date_time;
pub mod error;
pub mod idempotency_token;
pub mod region;
pub mod retry;

pub use date_time::DateTime;
pub use region::{Region, SigningRegion, SigningService};
