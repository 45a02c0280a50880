/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Response handlers, one per operation

use crate::error::Error;
use crate::output::*;
use bytes::Bytes;
use sdk_http::protocol::json;
use sdk_http::response::ParseStrictResponse;

macro_rules! rest_json_operation {
    ($($(#[$meta:meta])* $name:ident => $output:ty;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default)]
            pub struct $name {
                _private: (),
            }

            impl $name {
                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseStrictResponse for $name {
                type Output = Result<$output, Error>;

                fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                    json::parse_response(response)
                }
            }
        )+
    };
}

rest_json_operation! {
    /// Creates an application from a definition
    CreateApplication => CreateApplicationOutput;
    GetApplication => GetApplicationOutput;
    /// Deletes an application. Running applications must be stopped first.
    DeleteApplication => DeleteApplicationOutput;
    /// Lists applications, one page at a time
    ListApplications => ListApplicationsOutput;
    StartApplication => StartApplicationOutput;
    StopApplication => StopApplicationOutput;
    /// Starts a batch job on a running application
    StartBatchJob => StartBatchJobOutput;
    GetBatchJobExecution => GetBatchJobExecutionOutput;
    CancelBatchJobExecution => CancelBatchJobExecutionOutput;
}
