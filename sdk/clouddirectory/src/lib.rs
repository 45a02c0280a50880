/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Amazon CloudDirectory
//!
//! Operations on directories, schemas and tags. Requests are REST-JSON under
//! `/amazonclouddirectory/2017-01-11`; the ARN of the directory or schema an operation acts on
//! is sent in the `x-amz-data-partition` header.

pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use client::Client;
pub use config::Config;
pub use error::{Error, ErrorKind};
pub use sdk_http::result::SdkError;
pub use sdk_types::region::Region;
