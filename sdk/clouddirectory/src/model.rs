/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_types::DateTime;
use serde::{Deserialize, Serialize};

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DirectoryState {
    Deleted,
    Disabled,
    Enabled,
    /// A state this version of the client does not know about
    Unknown(String),
}

impl DirectoryState {
    pub fn as_str(&self) -> &str {
        match self {
            DirectoryState::Deleted => "DELETED",
            DirectoryState::Disabled => "DISABLED",
            DirectoryState::Enabled => "ENABLED",
            DirectoryState::Unknown(value) => value.as_str(),
        }
    }
}

impl From<&str> for DirectoryState {
    fn from(s: &str) -> Self {
        match s {
            "DELETED" => DirectoryState::Deleted,
            "DISABLED" => DirectoryState::Disabled,
            "ENABLED" => DirectoryState::Enabled,
            other => DirectoryState::Unknown(other.to_string()),
        }
    }
}

impl From<String> for DirectoryState {
    fn from(s: String) -> Self {
        DirectoryState::from(s.as_str())
    }
}

impl From<DirectoryState> for String {
    fn from(state: DirectoryState) -> Self {
        state.as_str().to_string()
    }
}

/// A directory and its lifecycle state
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Directory {
    pub name: Option<String>,
    pub directory_arn: Option<String>,
    pub state: Option<DirectoryState>,
    pub creation_date_time: Option<DateTime>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}
