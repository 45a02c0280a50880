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
    /// Creates a directory from a published schema
    CreateDirectory => CreateDirectoryOutput;
    DeleteDirectory => DeleteDirectoryOutput;
    GetDirectory => GetDirectoryOutput;
    ListDirectories => ListDirectoriesOutput;
    EnableDirectory => EnableDirectoryOutput;
    /// Disables a directory. Disabled directories reject reads and writes.
    DisableDirectory => DisableDirectoryOutput;
    CreateSchema => CreateSchemaOutput;
    TagResource => TagResourceOutput;
}

#[cfg(test)]
mod test {
    use super::{DisableDirectory, ListDirectories};
    use crate::error::ErrorKind;
    use crate::model::DirectoryState;
    use bytes::Bytes;
    use sdk_http::response::ParseStrictResponse;

    #[test]
    fn parse_list_directories() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"Directories":[{"Name":"people","State":"DISABLED"}],"NextToken":"t2"}"#,
            ))
            .unwrap();
        let output = ListDirectories::new().parse(&response).unwrap();
        let directories = output.directories.unwrap();
        assert_eq!(directories.len(), 1);
        assert_eq!(directories[0].state, Some(DirectoryState::Disabled));
        assert_eq!(output.next_token.as_deref(), Some("t2"));
    }

    #[test]
    fn parse_error_header() {
        let response = http::Response::builder()
            .status(400)
            .header(
                "x-amzn-errortype",
                "DirectoryNotDisabledException:http://internal.amazon.com/coral/com.amazonaws.clouddirectory/",
            )
            .header("x-amzn-requestid", "2c1d7e0f-aaaa")
            .body(Bytes::from_static(br#"{"Message":"disable the directory first"}"#))
            .unwrap();
        let err = DisableDirectory::new().parse(&response).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::DirectoryNotDisabledException);
        assert_eq!(err.message(), Some("disable the directory first"));
        assert_eq!(err.request_id(), Some("2c1d7e0f-aaaa"));
        assert!(!err.is_retryable());
    }
}
