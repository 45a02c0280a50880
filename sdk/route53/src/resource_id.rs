/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Route 53 returns ids such as `/hostedzone/Z1D633PJN98FT9` but expects the bare id in request
//! paths and query strings. Only inputs are trimmed: ids in responses are left as returned.

use sdk_http::label;
use sdk_http::operation::BuildError;

const PREFIXES: &[&str] = &[
    "/hostedzone/",
    "hostedzone/",
    "/change/",
    "change/",
    "/delegationset/",
    "delegationset/",
];

/// Strip the resource type prefix from `resource_id`, if it has one
pub(crate) fn trim_resource_id(resource_id: &str) -> &str {
    PREFIXES
        .iter()
        .find_map(|prefix| resource_id.strip_prefix(prefix))
        .unwrap_or(resource_id)
}

/// Read a required id label, without its resource type prefix
///
/// An id that is nothing but a prefix is as unusable as an empty one.
pub(crate) fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, BuildError> {
    let id = trim_resource_id(label::required(value, field)?);
    if id.is_empty() {
        return Err(BuildError::MissingField {
            field,
            details: "cannot be empty or unset",
        });
    }
    Ok(id)
}
