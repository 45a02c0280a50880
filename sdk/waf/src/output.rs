/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs

use crate::model::{ChangeTokenStatus, IpSet, IpSetSummary, WebAcl};
use serde::Deserialize;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetChangeTokenOutput {
    pub change_token: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetChangeTokenStatusOutput {
    pub change_token_status: Option<ChangeTokenStatus>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIpSetOutput {
    #[serde(rename = "IPSet")]
    pub ip_set: Option<IpSet>,
    pub change_token: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GetIpSetOutput {
    #[serde(rename = "IPSet")]
    pub ip_set: Option<IpSet>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIpSetOutput {
    pub change_token: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIpSetOutput {
    pub change_token: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIpSetsOutput {
    pub next_marker: Option<String>,
    #[serde(rename = "IPSets")]
    pub ip_sets: Option<Vec<IpSetSummary>>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateWebAclOutput {
    #[serde(rename = "WebACL")]
    pub web_acl: Option<WebAcl>,
    pub change_token: Option<String>,
}
