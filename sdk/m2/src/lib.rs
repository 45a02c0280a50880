/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! AWS Mainframe Modernization (`m2`)
//!
//! Create, run and monitor mainframe applications and their batch jobs. The service speaks
//! REST-JSON and every operation is signed with SigV4.

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
