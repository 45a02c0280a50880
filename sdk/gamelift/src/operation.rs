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

macro_rules! aws_json_operation {
    ($($name:ident => $output:ty;)+) => {
        $(
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

aws_json_operation! {
    CreateAlias => CreateAliasOutput;
    DescribeAlias => DescribeAliasOutput;
    ResolveAlias => ResolveAliasOutput;
    DeleteAlias => DeleteAliasOutput;
    ListAliases => ListAliasesOutput;
    CreateGameSession => CreateGameSessionOutput;
    DescribeFleetAttributes => DescribeFleetAttributesOutput;
    DeleteFleet => DeleteFleetOutput;
}
