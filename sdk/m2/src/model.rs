/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shapes shared by the m2 inputs and outputs

use sdk_types::DateTime;
use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value this version of the client does not know about
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }
    };
}

string_enum! {
    /// The runtime engine an application is deployed on
    pub enum EngineType {
        Bluage => "bluage",
        Microfocus => "microfocus",
    }
}

string_enum! {
    pub enum ApplicationLifecycle {
        Available => "Available",
        Created => "Created",
        Creating => "Creating",
        Deleting => "Deleting",
        DeletingFromEnvironment => "Deleting From Environment",
        Failed => "Failed",
        Ready => "Ready",
        Running => "Running",
        Starting => "Starting",
        Stopped => "Stopped",
        Stopping => "Stopping",
    }
}

string_enum! {
    pub enum ApplicationVersionLifecycle {
        Available => "Available",
        Creating => "Creating",
        Failed => "Failed",
    }
}

string_enum! {
    pub enum BatchJobExecutionStatus {
        Cancelled => "Cancelled",
        Cancelling => "Cancelling",
        Dispatching => "Dispatching",
        Failed => "Failed",
        Holding => "Holding",
        Running => "Running",
        Submitting => "Submitting",
        Succeeded => "Succeeded",
        SucceededWithWarning => "Succeeded With Warning",
    }
}

string_enum! {
    pub enum BatchJobType {
        Jes2 => "JES2",
        Jes3 => "JES3",
        Vse => "VSE",
    }
}

/// The application definition, either inline or stored in S3
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Definition {
    /// Definition content as a JSON document
    Content(String),
    /// `s3://` location of the definition
    S3Location(String),
}

/// A batch job defined by a file in the application's catalog
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileBatchJobDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<String>,
}

impl FileBatchJobDefinition {
    pub fn new(file_name: impl Into<String>) -> Self {
        FileBatchJobDefinition {
            file_name: Some(file_name.into()),
            folder_path: None,
        }
    }

    pub fn folder_path(mut self, folder_path: impl Into<String>) -> Self {
        self.folder_path = Some(folder_path.into());
        self
    }
}

/// A batch job defined by a script
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptBatchJobDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
}

impl ScriptBatchJobDefinition {
    pub fn new(script_name: impl Into<String>) -> Self {
        ScriptBatchJobDefinition {
            script_name: Some(script_name.into()),
        }
    }
}

/// Identifies the batch job to run
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchJobIdentifier {
    FileBatchJobIdentifier(FileBatchJobDefinition),
    ScriptBatchJobIdentifier(ScriptBatchJobDefinition),
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub name: Option<String>,
    pub description: Option<String>,
    pub application_id: Option<String>,
    pub application_arn: Option<String>,
    pub application_version: Option<i32>,
    pub status: Option<ApplicationLifecycle>,
    pub engine_type: Option<EngineType>,
    pub creation_time: Option<DateTime>,
    pub environment_id: Option<String>,
    pub last_start_time: Option<DateTime>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationVersionSummary {
    pub application_version: Option<i32>,
    pub creation_time: Option<DateTime>,
    pub status: Option<ApplicationVersionLifecycle>,
    pub status_reason: Option<String>,
}

#[cfg(test)]
mod test {
    use super::{BatchJobIdentifier, Definition, EngineType, FileBatchJobDefinition};

    #[test]
    fn unknown_enum_values_are_preserved() {
        let engine: EngineType = serde_json::from_str("\"cobol-9000\"").unwrap();
        assert_eq!(engine, EngineType::Unknown("cobol-9000".to_string()));
        assert_eq!(serde_json::to_string(&engine).unwrap(), "\"cobol-9000\"");
        assert_eq!(EngineType::from("bluage"), EngineType::Bluage);
    }

    #[test]
    fn unions_serialize_as_single_member_objects() {
        assert_eq!(
            serde_json::to_string(&Definition::S3Location("s3://bucket/app.json".into())).unwrap(),
            r#"{"s3Location":"s3://bucket/app.json"}"#
        );
        let job = BatchJobIdentifier::FileBatchJobIdentifier(
            FileBatchJobDefinition::new("IEFBR14.jcl").folder_path("jcl"),
        );
        assert_eq!(
            serde_json::to_string(&job).unwrap(),
            r#"{"fileBatchJobIdentifier":{"fileName":"IEFBR14.jcl","folderPath":"jcl"}}"#
        );
    }
}
