/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs

use crate::model::{
    ApplicationLifecycle, ApplicationSummary, ApplicationVersionSummary, BatchJobExecutionStatus,
    BatchJobIdentifier, BatchJobType, EngineType,
};
use sdk_types::DateTime;
use serde::Deserialize;
use std::collections::HashMap;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationOutput {
    pub application_arn: Option<String>,
    pub application_id: Option<String>,
    pub application_version: Option<i32>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApplicationOutput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub application_id: Option<String>,
    pub application_arn: Option<String>,
    pub status: Option<ApplicationLifecycle>,
    pub latest_version: Option<ApplicationVersionSummary>,
    pub deployed_version: Option<ApplicationVersionSummary>,
    pub engine_type: Option<EngineType>,
    pub creation_time: Option<DateTime>,
    pub last_start_time: Option<DateTime>,
    pub tags: Option<HashMap<String, String>>,
    pub environment_id: Option<String>,
    pub target_group_arns: Option<Vec<String>>,
    pub kms_key_id: Option<String>,
    pub role_arn: Option<String>,
    pub status_reason: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeleteApplicationOutput {}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsOutput {
    pub applications: Option<Vec<ApplicationSummary>>,
    /// Pass to the next `ListApplications` call to fetch the following page
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StartApplicationOutput {}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StopApplicationOutput {}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBatchJobOutput {
    pub execution_id: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBatchJobExecutionOutput {
    pub execution_id: Option<String>,
    pub application_id: Option<String>,
    pub job_id: Option<String>,
    pub job_name: Option<String>,
    pub job_type: Option<BatchJobType>,
    pub job_user: Option<String>,
    pub status: Option<BatchJobExecutionStatus>,
    pub start_time: Option<DateTime>,
    pub end_time: Option<DateTime>,
    pub status_reason: Option<String>,
    pub return_code: Option<String>,
    pub batch_job_identifier: Option<BatchJobIdentifier>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CancelBatchJobExecutionOutput {}
