/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs

use crate::model::{ChangeInfo, DelegationSet, HostedZone, RrType, Vpc};

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateHostedZoneOutput {
    pub hosted_zone: Option<HostedZone>,
    pub change_info: Option<ChangeInfo>,
    pub delegation_set: Option<DelegationSet>,
    pub vpc: Option<Vpc>,
    /// URL of the new hosted zone, from the `Location` header
    pub location: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetHostedZoneOutput {
    pub hosted_zone: Option<HostedZone>,
    /// Unset for private hosted zones
    pub delegation_set: Option<DelegationSet>,
    pub vpcs: Vec<Vpc>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteHostedZoneOutput {
    pub change_info: Option<ChangeInfo>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListHostedZonesOutput {
    pub hosted_zones: Vec<HostedZone>,
    pub marker: Option<String>,
    pub is_truncated: bool,
    /// Pass as `marker` to fetch the next page. Only set when `is_truncated` is.
    pub next_marker: Option<String>,
    pub max_items: Option<i32>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeResourceRecordSetsOutput {
    pub change_info: Option<ChangeInfo>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetChangeOutput {
    pub change_info: Option<ChangeInfo>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestDnsAnswerOutput {
    pub nameserver: Option<String>,
    pub record_name: Option<String>,
    pub record_type: Option<RrType>,
    pub record_data: Vec<String>,
    /// DNS response code, eg. `NOERROR` or `NXDOMAIN`
    pub response_code: Option<String>,
    pub protocol: Option<String>,
}
