/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs

use crate::model::{Alias, FleetAttributes, GameSession};
use serde::Deserialize;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAliasOutput {
    pub alias: Option<Alias>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAliasOutput {
    pub alias: Option<Alias>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolveAliasOutput {
    pub fleet_id: Option<String>,
    pub fleet_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeleteAliasOutput {}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAliasesOutput {
    pub aliases: Option<Vec<Alias>>,
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGameSessionOutput {
    pub game_session: Option<GameSession>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFleetAttributesOutput {
    pub fleet_attributes: Option<Vec<FleetAttributes>>,
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeleteFleetOutput {}
