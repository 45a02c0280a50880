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
//! | `CreateApplication` | `name`, `engineType`, `definition` |
//! | `GetApplication` | `applicationId` |
//! | `DeleteApplication` | `applicationId` |
//! | `ListApplications` | |
//! | `StartApplication` | `applicationId` |
//! | `StopApplication` | `applicationId` |
//! | `StartBatchJob` | `applicationId`, `batchJobIdentifier` |
//! | `GetBatchJobExecution` | `applicationId`, `executionId` |
//! | `CancelBatchJobExecution` | `applicationId`, `executionId` |

use crate::config::Config;
use crate::error::Error;
use crate::model::{BatchJobIdentifier, Definition, EngineType};
use crate::output::*;
use http::header::CONTENT_TYPE;
use http::Method;
use sdk_client::OperationInput;
use sdk_http::body::SdkBody;
use sdk_http::label::{self, EncodingStrategy};
use sdk_http::operation::{required, BuildError, Operation};
use sdk_http::protocol::json::APPLICATION_JSON;
use sdk_http::query;
use serde::Serialize;
use std::collections::HashMap;

fn request_builder(method: Method, uri: String) -> http::request::Builder {
    http::Request::builder().method(method).uri(uri)
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

fn empty_request(builder: http::request::Builder) -> Result<http::Request<SdkBody>, BuildError> {
    Ok(builder.body(SdkBody::empty())?)
}

fn application_path(application_id: &str) -> String {
    format!(
        "/applications/{}",
        label::fmt_string(application_id, EncodingStrategy::Default)
    )
}

fn execution_path(application_id: &str, execution_id: &str) -> String {
    format!(
        "{}/batch-job-executions/{}",
        application_path(application_id),
        label::fmt_string(execution_id, EncodingStrategy::Default)
    )
}

/// See [`CreateApplicationInput`](crate::input::CreateApplicationInput)
pub mod create_application_input {
    use crate::model::{Definition, EngineType};
    use std::collections::HashMap;

    /// A builder for [`CreateApplicationInput`](crate::input::CreateApplicationInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        description: Option<String>,
        engine_type: Option<EngineType>,
        definition: Option<Definition>,
        tags: Option<HashMap<String, String>>,
        kms_key_id: Option<String>,
        role_arn: Option<String>,
        client_token: Option<String>,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        pub fn description(mut self, description: impl Into<String>) -> Self {
            self.description = Some(description.into());
            self
        }

        pub fn engine_type(mut self, engine_type: impl Into<EngineType>) -> Self {
            self.engine_type = Some(engine_type.into());
            self
        }

        pub fn definition(mut self, definition: Definition) -> Self {
            self.definition = Some(definition);
            self
        }

        /// Add a single tag to the application
        pub fn tags(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.tags
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value.into());
            self
        }

        pub fn kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
            self.kms_key_id = Some(kms_key_id.into());
            self
        }

        pub fn role_arn(mut self, role_arn: impl Into<String>) -> Self {
            self.role_arn = Some(role_arn.into());
            self
        }

        /// Idempotency token. A random token is used when unset.
        pub fn client_token(mut self, client_token: impl Into<String>) -> Self {
            self.client_token = Some(client_token.into());
            self
        }

        pub fn build(self) -> crate::input::CreateApplicationInput {
            crate::input::CreateApplicationInput {
                name: self.name,
                description: self.description,
                engine_type: self.engine_type,
                definition: self.definition,
                tags: self.tags,
                kms_key_id: self.kms_key_id,
                role_arn: self.role_arn,
                client_token: self.client_token,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<EngineType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Definition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

impl CreateApplicationInput {
    pub fn builder() -> create_application_input::Builder {
        create_application_input::Builder::default()
    }
}

impl OperationInput for CreateApplicationInput {
    type Config = Config;
    type Handler = crate::operation::CreateApplication;
    type Output = CreateApplicationOutput;
    type Error = Error;
    const NAME: &'static str = "CreateApplication";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.name, "name")?;
        required(&self.engine_type, "engineType")?;
        required(&self.definition, "definition")?;
        let mut body = self.clone();
        if body.client_token.is_none() {
            body.client_token = Some(conf.make_token());
        }
        let request = json_request(
            request_builder(Method::POST, "/applications".to_string()),
            &body,
        )?;
        Ok(conf.new_operation(
            request,
            crate::operation::CreateApplication::new(),
            Self::NAME,
        ))
    }
}

/// See [`GetApplicationInput`](crate::input::GetApplicationInput)
pub mod get_application_input {
    /// A builder for [`GetApplicationInput`](crate::input::GetApplicationInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        application_id: Option<String>,
    }

    impl Builder {
        pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
            self.application_id = Some(application_id.into());
            self
        }

        pub fn build(self) -> crate::input::GetApplicationInput {
            crate::input::GetApplicationInput {
                application_id: self.application_id,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetApplicationInput {
    pub application_id: Option<String>,
}

impl GetApplicationInput {
    pub fn builder() -> get_application_input::Builder {
        get_application_input::Builder::default()
    }
}

impl OperationInput for GetApplicationInput {
    type Config = Config;
    type Handler = crate::operation::GetApplication;
    type Output = GetApplicationOutput;
    type Error = Error;
    const NAME: &'static str = "GetApplication";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let application_id = label::required(&self.application_id, "applicationId")?;
        let request = empty_request(request_builder(
            Method::GET,
            application_path(application_id),
        ))?;
        Ok(conf.new_operation(
            request,
            crate::operation::GetApplication::new(),
            Self::NAME,
        ))
    }
}

/// See [`DeleteApplicationInput`](crate::input::DeleteApplicationInput)
pub mod delete_application_input {
    /// A builder for [`DeleteApplicationInput`](crate::input::DeleteApplicationInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        application_id: Option<String>,
    }

    impl Builder {
        pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
            self.application_id = Some(application_id.into());
            self
        }

        pub fn build(self) -> crate::input::DeleteApplicationInput {
            crate::input::DeleteApplicationInput {
                application_id: self.application_id,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteApplicationInput {
    pub application_id: Option<String>,
}

impl DeleteApplicationInput {
    pub fn builder() -> delete_application_input::Builder {
        delete_application_input::Builder::default()
    }
}

impl OperationInput for DeleteApplicationInput {
    type Config = Config;
    type Handler = crate::operation::DeleteApplication;
    type Output = DeleteApplicationOutput;
    type Error = Error;
    const NAME: &'static str = "DeleteApplication";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let application_id = label::required(&self.application_id, "applicationId")?;
        let request = empty_request(request_builder(
            Method::DELETE,
            application_path(application_id),
        ))?;
        Ok(conf.new_operation(
            request,
            crate::operation::DeleteApplication::new(),
            Self::NAME,
        ))
    }
}

/// See [`ListApplicationsInput`](crate::input::ListApplicationsInput)
pub mod list_applications_input {
    /// A builder for [`ListApplicationsInput`](crate::input::ListApplicationsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i32>,
        names: Option<Vec<String>>,
        environment_id: Option<String>,
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

        /// Only list applications with this name. May be called repeatedly.
        pub fn names(mut self, name: impl Into<String>) -> Self {
            self.names.get_or_insert_with(Vec::new).push(name.into());
            self
        }

        pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
            self.environment_id = Some(environment_id.into());
            self
        }

        pub fn build(self) -> crate::input::ListApplicationsInput {
            crate::input::ListApplicationsInput {
                next_token: self.next_token,
                max_results: self.max_results,
                names: self.names,
                environment_id: self.environment_id,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListApplicationsInput {
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
    pub names: Option<Vec<String>>,
    pub environment_id: Option<String>,
}

impl ListApplicationsInput {
    pub fn builder() -> list_applications_input::Builder {
        list_applications_input::Builder::default()
    }
}

impl OperationInput for ListApplicationsInput {
    type Config = Config;
    type Handler = crate::operation::ListApplications;
    type Output = ListApplicationsOutput;
    type Error = Error;
    const NAME: &'static str = "ListApplications";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let mut uri = String::from("/applications");
        let mut query = query::Writer::new(&mut uri);
        query.push_opt("nextToken", self.next_token.as_ref());
        query.push_opt("maxResults", self.max_results);
        if let Some(names) = &self.names {
            query.push_list("names", names);
        }
        query.push_opt("environmentId", self.environment_id.as_ref());
        let request = empty_request(request_builder(Method::GET, uri))?;
        Ok(conf.new_operation(
            request,
            crate::operation::ListApplications::new(),
            Self::NAME,
        ))
    }
}

/// See [`StartApplicationInput`](crate::input::StartApplicationInput)
pub mod start_application_input {
    /// A builder for [`StartApplicationInput`](crate::input::StartApplicationInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        application_id: Option<String>,
    }

    impl Builder {
        pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
            self.application_id = Some(application_id.into());
            self
        }

        pub fn build(self) -> crate::input::StartApplicationInput {
            crate::input::StartApplicationInput {
                application_id: self.application_id,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct StartApplicationInput {
    pub application_id: Option<String>,
}

impl StartApplicationInput {
    pub fn builder() -> start_application_input::Builder {
        start_application_input::Builder::default()
    }
}

impl OperationInput for StartApplicationInput {
    type Config = Config;
    type Handler = crate::operation::StartApplication;
    type Output = StartApplicationOutput;
    type Error = Error;
    const NAME: &'static str = "StartApplication";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let application_id = label::required(&self.application_id, "applicationId")?;
        let request = empty_request(request_builder(
            Method::POST,
            format!("{}/start", application_path(application_id)),
        ))?;
        Ok(conf.new_operation(
            request,
            crate::operation::StartApplication::new(),
            Self::NAME,
        ))
    }
}

/// See [`StopApplicationInput`](crate::input::StopApplicationInput)
pub mod stop_application_input {
    /// A builder for [`StopApplicationInput`](crate::input::StopApplicationInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        application_id: Option<String>,
        force_stop: Option<bool>,
    }

    impl Builder {
        pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
            self.application_id = Some(application_id.into());
            self
        }

        /// Stop the application even if batch jobs are still running
        pub fn force_stop(mut self, force_stop: bool) -> Self {
            self.force_stop = Some(force_stop);
            self
        }

        pub fn build(self) -> crate::input::StopApplicationInput {
            crate::input::StopApplicationInput {
                application_id: self.application_id,
                force_stop: self.force_stop,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopApplicationInput {
    #[serde(skip)]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_stop: Option<bool>,
}

impl StopApplicationInput {
    pub fn builder() -> stop_application_input::Builder {
        stop_application_input::Builder::default()
    }
}

impl OperationInput for StopApplicationInput {
    type Config = Config;
    type Handler = crate::operation::StopApplication;
    type Output = StopApplicationOutput;
    type Error = Error;
    const NAME: &'static str = "StopApplication";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let application_id = label::required(&self.application_id, "applicationId")?;
        let request = json_request(
            request_builder(
                Method::POST,
                format!("{}/stop", application_path(application_id)),
            ),
            self,
        )?;
        Ok(conf.new_operation(
            request,
            crate::operation::StopApplication::new(),
            Self::NAME,
        ))
    }
}

/// See [`StartBatchJobInput`](crate::input::StartBatchJobInput)
pub mod start_batch_job_input {
    use crate::model::BatchJobIdentifier;
    use std::collections::HashMap;

    /// A builder for [`StartBatchJobInput`](crate::input::StartBatchJobInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        application_id: Option<String>,
        batch_job_identifier: Option<BatchJobIdentifier>,
        job_params: Option<HashMap<String, String>>,
    }

    impl Builder {
        pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
            self.application_id = Some(application_id.into());
            self
        }

        pub fn batch_job_identifier(mut self, batch_job_identifier: BatchJobIdentifier) -> Self {
            self.batch_job_identifier = Some(batch_job_identifier);
            self
        }

        /// Add a single job parameter
        pub fn job_params(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.job_params
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value.into());
            self
        }

        pub fn build(self) -> crate::input::StartBatchJobInput {
            crate::input::StartBatchJobInput {
                application_id: self.application_id,
                batch_job_identifier: self.batch_job_identifier,
                job_params: self.job_params,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBatchJobInput {
    #[serde(skip)]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_job_identifier: Option<BatchJobIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_params: Option<HashMap<String, String>>,
}

impl StartBatchJobInput {
    pub fn builder() -> start_batch_job_input::Builder {
        start_batch_job_input::Builder::default()
    }
}

impl OperationInput for StartBatchJobInput {
    type Config = Config;
    type Handler = crate::operation::StartBatchJob;
    type Output = StartBatchJobOutput;
    type Error = Error;
    const NAME: &'static str = "StartBatchJob";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let application_id = label::required(&self.application_id, "applicationId")?;
        required(&self.batch_job_identifier, "batchJobIdentifier")?;
        let request = json_request(
            request_builder(
                Method::POST,
                format!("{}/batch-job", application_path(application_id)),
            ),
            self,
        )?;
        Ok(conf.new_operation(
            request,
            crate::operation::StartBatchJob::new(),
            Self::NAME,
        ))
    }
}

/// See [`GetBatchJobExecutionInput`](crate::input::GetBatchJobExecutionInput)
pub mod get_batch_job_execution_input {
    /// A builder for [`GetBatchJobExecutionInput`](crate::input::GetBatchJobExecutionInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        application_id: Option<String>,
        execution_id: Option<String>,
    }

    impl Builder {
        pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
            self.application_id = Some(application_id.into());
            self
        }

        pub fn execution_id(mut self, execution_id: impl Into<String>) -> Self {
            self.execution_id = Some(execution_id.into());
            self
        }

        pub fn build(self) -> crate::input::GetBatchJobExecutionInput {
            crate::input::GetBatchJobExecutionInput {
                application_id: self.application_id,
                execution_id: self.execution_id,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetBatchJobExecutionInput {
    pub application_id: Option<String>,
    pub execution_id: Option<String>,
}

impl GetBatchJobExecutionInput {
    pub fn builder() -> get_batch_job_execution_input::Builder {
        get_batch_job_execution_input::Builder::default()
    }
}

impl OperationInput for GetBatchJobExecutionInput {
    type Config = Config;
    type Handler = crate::operation::GetBatchJobExecution;
    type Output = GetBatchJobExecutionOutput;
    type Error = Error;
    const NAME: &'static str = "GetBatchJobExecution";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let application_id = label::required(&self.application_id, "applicationId")?;
        let execution_id = label::required(&self.execution_id, "executionId")?;
        let request = empty_request(request_builder(
            Method::GET,
            execution_path(application_id, execution_id),
        ))?;
        Ok(conf.new_operation(
            request,
            crate::operation::GetBatchJobExecution::new(),
            Self::NAME,
        ))
    }
}

/// See [`CancelBatchJobExecutionInput`](crate::input::CancelBatchJobExecutionInput)
pub mod cancel_batch_job_execution_input {
    /// A builder for [`CancelBatchJobExecutionInput`](crate::input::CancelBatchJobExecutionInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        application_id: Option<String>,
        execution_id: Option<String>,
    }

    impl Builder {
        pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
            self.application_id = Some(application_id.into());
            self
        }

        pub fn execution_id(mut self, execution_id: impl Into<String>) -> Self {
            self.execution_id = Some(execution_id.into());
            self
        }

        pub fn build(self) -> crate::input::CancelBatchJobExecutionInput {
            crate::input::CancelBatchJobExecutionInput {
                application_id: self.application_id,
                execution_id: self.execution_id,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CancelBatchJobExecutionInput {
    pub application_id: Option<String>,
    pub execution_id: Option<String>,
}

impl CancelBatchJobExecutionInput {
    pub fn builder() -> cancel_batch_job_execution_input::Builder {
        cancel_batch_job_execution_input::Builder::default()
    }
}

impl OperationInput for CancelBatchJobExecutionInput {
    type Config = Config;
    type Handler = crate::operation::CancelBatchJobExecution;
    type Output = CancelBatchJobExecutionOutput;
    type Error = Error;
    const NAME: &'static str = "CancelBatchJobExecution";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let application_id = label::required(&self.application_id, "applicationId")?;
        let execution_id = label::required(&self.execution_id, "executionId")?;
        let request = empty_request(request_builder(
            Method::POST,
            format!("{}/cancel", execution_path(application_id, execution_id)),
        ))?;
        Ok(conf.new_operation(
            request,
            crate::operation::CancelBatchJobExecution::new(),
            Self::NAME,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::ScriptBatchJobDefinition;
    use sdk_types::idempotency_token::IdempotencyTokenProvider;
    use sdk_types::region::Region;

    fn conf() -> Config {
        Config::builder()
            .region(Region::new("us-west-2"))
            .idempotency_token_provider(IdempotencyTokenProvider::fixed(
                "00000000-0000-4000-8000-000000000000",
            ))
            .build()
    }

    fn body(op: &Operation<impl Sized>) -> serde_json::Value {
        serde_json::from_slice(op.request().http().body().bytes().unwrap()).unwrap()
    }

    #[test]
    fn create_application_checks_fields_in_order() {
        let input = CreateApplicationInput::builder()
            .definition(Definition::Content("{}".into()))
            .build();
        let err = input.make_operation(&conf()).unwrap_err();
        assert_eq!(err.field(), Some("name"));

        let input = CreateApplicationInput::builder()
            .name("payroll")
            .definition(Definition::Content("{}".into()))
            .build();
        let err = input.make_operation(&conf()).unwrap_err();
        assert_eq!(err.field(), Some("engineType"));
    }

    #[test]
    fn create_application_fills_client_token() {
        let input = CreateApplicationInput::builder()
            .name("payroll")
            .engine_type(EngineType::Microfocus)
            .definition(Definition::S3Location("s3://defs/payroll.json".into()))
            .build();
        let op = input.make_operation(&conf()).unwrap();
        assert_eq!(op.request().http().method(), Method::POST);
        assert_eq!(op.request().http().uri(), "/applications");
        assert_eq!(
            body(&op),
            serde_json::json!({
                "name": "payroll",
                "engineType": "microfocus",
                "definition": {"s3Location": "s3://defs/payroll.json"},
                "clientToken": "00000000-0000-4000-8000-000000000000"
            })
        );
        // the caller's input is not modified
        assert_eq!(input.client_token, None);
    }

    #[test]
    fn labels_are_encoded() {
        let op = GetBatchJobExecutionInput::builder()
            .application_id("app/1")
            .execution_id("exec 2")
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(
            op.request().http().uri(),
            "/applications/app%2F1/batch-job-executions/exec%202"
        );
    }

    #[test]
    fn empty_labels_are_missing() {
        let err = DeleteApplicationInput::builder()
            .application_id("")
            .build()
            .make_operation(&conf())
            .unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(err.field(), Some("applicationId"));
    }

    #[test]
    fn list_applications_query() {
        let op = ListApplicationsInput::builder()
            .max_results(5)
            .names("payroll")
            .names("billing")
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(
            op.request().http().uri(),
            "/applications?maxResults=5&names=payroll&names=billing"
        );
        assert!(op.request().http().body().bytes().unwrap().is_empty());
    }

    #[test]
    fn start_batch_job_body() {
        let op = StartBatchJobInput::builder()
            .application_id("abc")
            .batch_job_identifier(BatchJobIdentifier::ScriptBatchJobIdentifier(
                ScriptBatchJobDefinition::new("nightly.sh"),
            ))
            .job_params("DATE", "2021-03-05")
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(op.request().http().uri(), "/applications/abc/batch-job");
        assert_eq!(
            body(&op),
            serde_json::json!({
                "batchJobIdentifier": {"scriptBatchJobIdentifier": {"scriptName": "nightly.sh"}},
                "jobParams": {"DATE": "2021-03-05"}
            })
        );

        let err = StartBatchJobInput::builder()
            .application_id("abc")
            .build()
            .make_operation(&conf())
            .unwrap_err();
        assert_eq!(err.field(), Some("batchJobIdentifier"));
    }

    #[test]
    fn operations_carry_metadata() {
        let op = StopApplicationInput::builder()
            .application_id("abc")
            .force_stop(true)
            .build()
            .make_operation(&conf())
            .unwrap();
        let metadata = op.metadata().unwrap();
        assert_eq!(metadata.name(), "StopApplication");
        assert_eq!(metadata.service(), "m2");
        assert_eq!(body(&op), serde_json::json!({"forceStop": true}));
    }
}
