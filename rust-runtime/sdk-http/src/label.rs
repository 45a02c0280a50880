/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Formatting values as Smithy
//! [httpLabel](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httplabel-trait)

use crate::operation::BuildError;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must be percent-encoded in a label. Unreserved characters
/// (`A-Z a-z 0-9 - . _ ~`) pass through untouched.
pub(crate) const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingStrategy {
    /// Encode every reserved character, including `/`
    Default,
    /// Leave `/` unencoded so that the label may span several path segments
    Greedy,
}

pub fn fmt_string<T: AsRef<str>>(t: T, strategy: EncodingStrategy) -> String {
    let uri_set = if strategy == EncodingStrategy::Greedy {
        GREEDY
    } else {
        BASE_SET
    };
    utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

/// Read a required path label
///
/// A label that is unset or empty would produce an ambiguous path, so both are reported as
/// [`BuildError::MissingField`].
pub fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, BuildError> {
    match value.as_deref() {
        Some(label) if !label.is_empty() => Ok(label),
        _ => Err(BuildError::MissingField {
            field,
            details: "cannot be empty or unset",
        }),
    }
}

#[cfg(test)]
mod test {
    use crate::label::{fmt_string, required, EncodingStrategy};
    use http::Uri;
    use proptest::proptest;

    #[test]
    fn greedy_params() {
        assert_eq!(fmt_string("a/b", EncodingStrategy::Default), "a%2Fb");
        assert_eq!(fmt_string("a/b", EncodingStrategy::Greedy), "a/b");
    }

    #[test]
    fn arns_are_encoded() {
        assert_eq!(
            fmt_string(
                "arn:aws:clouddirectory:us-west-2:123:directory/abc",
                EncodingStrategy::Default
            ),
            "arn%3Aaws%3Aclouddirectory%3Aus-west-2%3A123%3Adirectory%2Fabc"
        );
    }

    #[test]
    fn empty_labels_are_missing() {
        let err = required(&Some(String::new()), "applicationId").unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(err.field(), Some("applicationId"));
        assert!(required(&None, "Id").unwrap_err().is_missing_field());
        assert_eq!(required(&Some("Z1".to_string()), "Id").unwrap(), "Z1");
    }

    proptest! {
        #[test]
        fn test_encode_request(s: String) {
            let _: Uri = format!("http://host.example.com/{}", fmt_string(&s, EncodingStrategy::Default))
                .parse()
                .expect("all strings should be encoded properly");
            let _: Uri = format!("http://host.example.com/{}", fmt_string(&s, EncodingStrategy::Greedy))
                .parse()
                .expect("all strings should be encoded properly");
        }
    }
}
