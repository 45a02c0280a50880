/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Amazon Route 53
//!
//! Hosted zones, record set changes and DNS answer testing. Route 53 speaks REST-XML under
//! `/2013-04-01` and has one global endpoint per partition.
//!
//! Resource ids returned by Route 53 carry a type prefix, eg. `/hostedzone/Z1D633PJN98FT9`.
//! Inputs accept ids with or without that prefix: it is removed before the request is built.

pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

mod resource_id;
mod xml_deser;
mod xml_ser;

pub use client::Client;
pub use config::Config;
pub use error::{Error, ErrorKind};
pub use sdk_http::result::SdkError;
pub use sdk_types::region::Region;
