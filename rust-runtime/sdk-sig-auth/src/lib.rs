/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! AWS Signature Authentication Package
//!
//! The signature algorithm itself is supplied by the caller through [`signer::SignRequest`].
//! This crate only decides when a request is signed and with which region and service.

pub mod middleware;
pub mod signer;
