/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs

use crate::model::Directory;
use serde::Deserialize;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDirectoryOutput {
    pub directory_arn: Option<String>,
    pub name: Option<String>,
    /// Identifier of the directory's root object
    pub object_identifier: Option<String>,
    pub applied_schema_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDirectoryOutput {
    pub directory_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDirectoryOutput {
    pub directory: Option<Directory>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDirectoriesOutput {
    pub directories: Option<Vec<Directory>>,
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableDirectoryOutput {
    pub directory_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisableDirectoryOutput {
    pub directory_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSchemaOutput {
    pub schema_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TagResourceOutput {}
