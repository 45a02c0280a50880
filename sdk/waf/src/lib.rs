/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! AWS WAF Classic
//!
//! IP sets and web ACLs. Every change to a WAF Classic resource is made with a change token
//! obtained from [`GetChangeToken`](input::GetChangeTokenInput); its propagation is tracked with
//! [`GetChangeTokenStatus`](input::GetChangeTokenStatusInput).
//!
//! WAF Classic speaks AWS JSON 1.1 and has a single global endpoint, `waf.amazonaws.com`.

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
