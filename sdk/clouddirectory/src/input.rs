/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs
//!
//! Required members, in the order they are validated:
//!
//! | Operation | Required |
//! |---|---|
//! | `CreateDirectory` | `Name`, `SchemaArn` |
//! | `DeleteDirectory` | `DirectoryArn` |
//! | `GetDirectory` | `DirectoryArn` |
//! | `ListDirectories` | |
//! | `EnableDirectory` | `DirectoryArn` |
//! | `DisableDirectory` | `DirectoryArn` |
//! | `CreateSchema` | `Name` |
//! | `TagResource` | `ResourceArn`, `Tags` |

use crate::config::Config;
use crate::error::Error;
use crate::model::{DirectoryState, Tag};
use crate::output::*;
use http::header::CONTENT_TYPE;
use http::Method;
use sdk_client::OperationInput;
use sdk_http::body::SdkBody;
use sdk_http::operation::{required, BuildError, Operation};
use sdk_http::protocol::json::APPLICATION_JSON;
use serde::Serialize;

const BASE_PATH: &str = "/amazonclouddirectory/2017-01-11";

/// Header carrying the ARN of the directory or schema an operation acts on
const DATA_PARTITION: &str = "x-amz-data-partition";

fn request_builder(method: Method, path: &str) -> http::request::Builder {
    http::Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE_PATH, path))
}

fn json_request<T: Serialize>(
    builder: http::request::Builder,
    body: &T,
) -> Result<http::Request<SdkBody>, BuildError> {
    let body = serde_json::to_vec(body)?;
    Ok(builder
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .body(SdkBody::from(body))?)
}

/// A request whose only member is the data partition header
fn partition_request(
    method: Method,
    path: &str,
    arn: &str,
) -> Result<http::Request<SdkBody>, BuildError> {
    Ok(request_builder(method, path)
        .header(DATA_PARTITION, arn)
        .body(SdkBody::empty())?)
}

/// See [`CreateDirectoryInput`](crate::input::CreateDirectoryInput)
pub mod create_directory_input {
    /// A builder for [`CreateDirectoryInput`](crate::input::CreateDirectoryInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        schema_arn: Option<String>,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        /// ARN of the published schema the directory is created from
        pub fn schema_arn(mut self, schema_arn: impl Into<String>) -> Self {
            self.schema_arn = Some(schema_arn.into());
            self
        }

        pub fn build(self) -> crate::input::CreateDirectoryInput {
            crate::input::CreateDirectoryInput {
                name: self.name,
                schema_arn: self.schema_arn,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDirectoryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip)]
    pub schema_arn: Option<String>,
}

impl CreateDirectoryInput {
    pub fn builder() -> create_directory_input::Builder {
        create_directory_input::Builder::default()
    }
}

impl OperationInput for CreateDirectoryInput {
    type Config = Config;
    type Handler = crate::operation::CreateDirectory;
    type Output = CreateDirectoryOutput;
    type Error = Error;
    const NAME: &'static str = "CreateDirectory";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.name, "Name")?;
        let schema_arn = required(&self.schema_arn, "SchemaArn")?;
        let request = json_request(
            request_builder(Method::PUT, "/directory/create").header(DATA_PARTITION, schema_arn),
            self,
        )?;
        Ok(conf.new_operation(
            request,
            crate::operation::CreateDirectory::new(),
            Self::NAME,
        ))
    }
}

/// See [`DeleteDirectoryInput`](crate::input::DeleteDirectoryInput)
pub mod delete_directory_input {
    /// A builder for [`DeleteDirectoryInput`](crate::input::DeleteDirectoryInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        directory_arn: Option<String>,
    }

    impl Builder {
        pub fn directory_arn(mut self, directory_arn: impl Into<String>) -> Self {
            self.directory_arn = Some(directory_arn.into());
            self
        }

        pub fn build(self) -> crate::input::DeleteDirectoryInput {
            crate::input::DeleteDirectoryInput {
                directory_arn: self.directory_arn,
            }
        }
    }
}

/// Deletes a directory. Only disabled directories can be deleted.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteDirectoryInput {
    pub directory_arn: Option<String>,
}

impl DeleteDirectoryInput {
    pub fn builder() -> delete_directory_input::Builder {
        delete_directory_input::Builder::default()
    }
}

impl OperationInput for DeleteDirectoryInput {
    type Config = Config;
    type Handler = crate::operation::DeleteDirectory;
    type Output = DeleteDirectoryOutput;
    type Error = Error;
    const NAME: &'static str = "DeleteDirectory";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let directory_arn = required(&self.directory_arn, "DirectoryArn")?;
        let request = partition_request(Method::PUT, "/directory", directory_arn)?;
        Ok(conf.new_operation(
            request,
            crate::operation::DeleteDirectory::new(),
            Self::NAME,
        ))
    }
}

/// See [`GetDirectoryInput`](crate::input::GetDirectoryInput)
pub mod get_directory_input {
    /// A builder for [`GetDirectoryInput`](crate::input::GetDirectoryInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        directory_arn: Option<String>,
    }

    impl Builder {
        pub fn directory_arn(mut self, directory_arn: impl Into<String>) -> Self {
            self.directory_arn = Some(directory_arn.into());
            self
        }

        pub fn build(self) -> crate::input::GetDirectoryInput {
            crate::input::GetDirectoryInput {
                directory_arn: self.directory_arn,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetDirectoryInput {
    pub directory_arn: Option<String>,
}

impl GetDirectoryInput {
    pub fn builder() -> get_directory_input::Builder {
        get_directory_input::Builder::default()
    }
}

impl OperationInput for GetDirectoryInput {
    type Config = Config;
    type Handler = crate::operation::GetDirectory;
    type Output = GetDirectoryOutput;
    type Error = Error;
    const NAME: &'static str = "GetDirectory";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let directory_arn = required(&self.directory_arn, "DirectoryArn")?;
        let request = partition_request(Method::POST, "/directory/get", directory_arn)?;
        Ok(conf.new_operation(
            request,
            crate::operation::GetDirectory::new(),
            Self::NAME,
        ))
    }
}

/// See [`ListDirectoriesInput`](crate::input::ListDirectoriesInput)
pub mod list_directories_input {
    use crate::model::DirectoryState;

    /// A builder for [`ListDirectoriesInput`](crate::input::ListDirectoriesInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i32>,
        state: Option<DirectoryState>,
    }

    impl Builder {
        pub fn next_token(mut self, next_token: impl Into<String>) -> Self {
            self.next_token = Some(next_token.into());
            self
        }

        pub fn max_results(mut self, max_results: i32) -> Self {
            self.max_results = Some(max_results);
            self
        }

        /// Only list directories in this state
        pub fn state(mut self, state: impl Into<DirectoryState>) -> Self {
            self.state = Some(state.into());
            self
        }

        pub fn build(self) -> crate::input::ListDirectoriesInput {
            crate::input::ListDirectoriesInput {
                next_token: self.next_token,
                max_results: self.max_results,
                state: self.state,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDirectoriesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "state", skip_serializing_if = "Option::is_none")]
    pub state: Option<DirectoryState>,
}

impl ListDirectoriesInput {
    pub fn builder() -> list_directories_input::Builder {
        list_directories_input::Builder::default()
    }
}

impl OperationInput for ListDirectoriesInput {
    type Config = Config;
    type Handler = crate::operation::ListDirectories;
    type Output = ListDirectoriesOutput;
    type Error = Error;
    const NAME: &'static str = "ListDirectories";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let request = json_request(request_builder(Method::POST, "/directory/list"), self)?;
        Ok(conf.new_operation(
            request,
            crate::operation::ListDirectories::new(),
            Self::NAME,
        ))
    }
}

/// See [`EnableDirectoryInput`](crate::input::EnableDirectoryInput)
pub mod enable_directory_input {
    /// A builder for [`EnableDirectoryInput`](crate::input::EnableDirectoryInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        directory_arn: Option<String>,
    }

    impl Builder {
        pub fn directory_arn(mut self, directory_arn: impl Into<String>) -> Self {
            self.directory_arn = Some(directory_arn.into());
            self
        }

        pub fn build(self) -> crate::input::EnableDirectoryInput {
            crate::input::EnableDirectoryInput {
                directory_arn: self.directory_arn,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct EnableDirectoryInput {
    pub directory_arn: Option<String>,
}

impl EnableDirectoryInput {
    pub fn builder() -> enable_directory_input::Builder {
        enable_directory_input::Builder::default()
    }
}

impl OperationInput for EnableDirectoryInput {
    type Config = Config;
    type Handler = crate::operation::EnableDirectory;
    type Output = EnableDirectoryOutput;
    type Error = Error;
    const NAME: &'static str = "EnableDirectory";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let directory_arn = required(&self.directory_arn, "DirectoryArn")?;
        let request = partition_request(Method::PUT, "/directory/enable", directory_arn)?;
        Ok(conf.new_operation(
            request,
            crate::operation::EnableDirectory::new(),
            Self::NAME,
        ))
    }
}

/// See [`DisableDirectoryInput`](crate::input::DisableDirectoryInput)
pub mod disable_directory_input {
    /// A builder for [`DisableDirectoryInput`](crate::input::DisableDirectoryInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        directory_arn: Option<String>,
    }

    impl Builder {
        pub fn directory_arn(mut self, directory_arn: impl Into<String>) -> Self {
            self.directory_arn = Some(directory_arn.into());
            self
        }

        pub fn build(self) -> crate::input::DisableDirectoryInput {
            crate::input::DisableDirectoryInput {
                directory_arn: self.directory_arn,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DisableDirectoryInput {
    pub directory_arn: Option<String>,
}

impl DisableDirectoryInput {
    pub fn builder() -> disable_directory_input::Builder {
        disable_directory_input::Builder::default()
    }
}

impl OperationInput for DisableDirectoryInput {
    type Config = Config;
    type Handler = crate::operation::DisableDirectory;
    type Output = DisableDirectoryOutput;
    type Error = Error;
    const NAME: &'static str = "DisableDirectory";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let directory_arn = required(&self.directory_arn, "DirectoryArn")?;
        let request = partition_request(Method::PUT, "/directory/disable", directory_arn)?;
        Ok(conf.new_operation(
            request,
            crate::operation::DisableDirectory::new(),
            Self::NAME,
        ))
    }
}

/// See [`CreateSchemaInput`](crate::input::CreateSchemaInput)
pub mod create_schema_input {
    /// A builder for [`CreateSchemaInput`](crate::input::CreateSchemaInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        pub fn build(self) -> crate::input::CreateSchemaInput {
            crate::input::CreateSchemaInput { name: self.name }
        }
    }
}

/// Creates a new schema in the development state
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSchemaInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateSchemaInput {
    pub fn builder() -> create_schema_input::Builder {
        create_schema_input::Builder::default()
    }
}

impl OperationInput for CreateSchemaInput {
    type Config = Config;
    type Handler = crate::operation::CreateSchema;
    type Output = CreateSchemaOutput;
    type Error = Error;
    const NAME: &'static str = "CreateSchema";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.name, "Name")?;
        let request = json_request(request_builder(Method::PUT, "/schema/create"), self)?;
        Ok(conf.new_operation(
            request,
            crate::operation::CreateSchema::new(),
            Self::NAME,
        ))
    }
}

/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    use crate::model::Tag;

    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource_arn: Option<String>,
        tags: Option<Vec<Tag>>,
    }

    impl Builder {
        pub fn resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
            self.resource_arn = Some(resource_arn.into());
            self
        }

        /// Append a tag. May be called repeatedly.
        pub fn tags(mut self, tag: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(tag);
            self
        }

        pub fn set_tags(mut self, tags: Option<Vec<Tag>>) -> Self {
            self.tags = tags;
            self
        }

        pub fn build(self) -> crate::input::TagResourceInput {
            crate::input::TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl TagResourceInput {
    pub fn builder() -> tag_resource_input::Builder {
        tag_resource_input::Builder::default()
    }
}

impl OperationInput for TagResourceInput {
    type Config = Config;
    type Handler = crate::operation::TagResource;
    type Output = TagResourceOutput;
    type Error = Error;
    const NAME: &'static str = "TagResource";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.resource_arn, "ResourceArn")?;
        required(&self.tags, "Tags")?;
        let request = json_request(request_builder(Method::PUT, "/tags/add"), self)?;
        Ok(conf.new_operation(
            request,
            crate::operation::TagResource::new(),
            Self::NAME,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sdk_types::region::Region;

    const DIRECTORY: &str =
        "arn:aws:clouddirectory:us-west-2:123456789012:directory/AXQXDXvdgkOWktRXV4HnRa8";

    fn conf() -> Config {
        Config::builder().region(Region::new("us-west-2")).build()
    }

    fn body(op: &Operation<impl Sized>) -> serde_json::Value {
        serde_json::from_slice(op.request().http().body().bytes().unwrap()).unwrap()
    }

    #[test]
    fn create_directory() {
        let op = CreateDirectoryInput::builder()
            .name("people")
            .schema_arn("arn:aws:clouddirectory:us-west-2:123456789012:schema/published/person/1")
            .build()
            .make_operation(&conf())
            .unwrap();
        let request = op.request().http();
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(
            request.uri(),
            "/amazonclouddirectory/2017-01-11/directory/create"
        );
        assert_eq!(
            request.headers()[DATA_PARTITION],
            "arn:aws:clouddirectory:us-west-2:123456789012:schema/published/person/1"
        );
        // the schema travels in the header only
        assert_eq!(body(&op), serde_json::json!({"Name": "people"}));
    }

    #[test]
    fn create_directory_required_fields() {
        let err = CreateDirectoryInput::builder()
            .schema_arn("arn")
            .build()
            .make_operation(&conf())
            .unwrap_err();
        assert_eq!(err.field(), Some("Name"));
        let err = CreateDirectoryInput::builder()
            .name("people")
            .build()
            .make_operation(&conf())
            .unwrap_err();
        assert_eq!(err.field(), Some("SchemaArn"));
    }

    #[test]
    fn directory_operations_use_the_partition_header() {
        let op = DisableDirectoryInput::builder()
            .directory_arn(DIRECTORY)
            .build()
            .make_operation(&conf())
            .unwrap();
        let request = op.request().http();
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(
            request.uri(),
            "/amazonclouddirectory/2017-01-11/directory/disable"
        );
        assert_eq!(request.headers()[DATA_PARTITION], DIRECTORY);
        assert!(request.body().bytes().unwrap().is_empty());
    }

    #[test]
    fn invalid_header_values_are_rejected() {
        let err = GetDirectoryInput::builder()
            .directory_arn("arn\nwith a newline")
            .build()
            .make_operation(&conf())
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidRequest(_)));
    }

    #[test]
    fn list_directories_body() {
        let op = ListDirectoriesInput::builder()
            .max_results(10)
            .state(DirectoryState::Enabled)
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(
            body(&op),
            serde_json::json!({"MaxResults": 10, "state": "ENABLED"})
        );
    }

    #[test]
    fn tag_resource() {
        let err = TagResourceInput::builder()
            .resource_arn(DIRECTORY)
            .build()
            .make_operation(&conf())
            .unwrap_err();
        assert_eq!(err.field(), Some("Tags"));

        let op = TagResourceInput::builder()
            .resource_arn(DIRECTORY)
            .tags(Tag::new("team", "identity"))
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(op.request().http().uri(), "/amazonclouddirectory/2017-01-11/tags/add");
        assert_eq!(
            body(&op),
            serde_json::json!({
                "ResourceArn": DIRECTORY,
                "Tags": [{"Key": "team", "Value": "identity"}]
            })
        );
    }
}
