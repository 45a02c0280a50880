/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Amazon GameLift
//!
//! Aliases, fleets and game sessions. GameLift speaks AWS JSON 1.1: every operation is a
//! `POST /` naming its operation in the `X-Amz-Target` header.

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
