/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! HTTP building blocks shared by the generated service clients: request bodies, operations
//! and their property bags, endpoint handling, response parsing and protocol error decoding.

pub mod body;
pub mod endpoint;
pub mod label;
pub mod middleware;
pub mod operation;
pub mod property_bag;
pub mod protocol;
pub mod query;
pub mod response;
pub mod result;
pub mod retry;
