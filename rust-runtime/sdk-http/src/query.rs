/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Utilities for writing Smithy
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)
//! parameters

use crate::label::BASE_SET;
use percent_encoding::utf8_percent_encode;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Appends query parameters to a path
///
/// The first parameter is introduced with `?`, later ones with `&`. Keys and values are
/// percent-encoded.
#[derive(Debug)]
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    pub fn push_kv(&mut self, key: &str, value: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(key));
        self.out.push('=');
        self.out.push_str(&fmt_string(value));
        self.prefix = '&';
    }

    /// Push the pair if `value` is set
    pub fn push_opt<T: ToString>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.push_kv(key, &value.to_string());
        }
    }

    /// Push one pair per value, as used for list-valued query parameters
    pub fn push_list<T: AsRef<str>>(&mut self, key: &str, values: &[T]) {
        for value in values {
            self.push_kv(key, value.as_ref());
        }
    }
}

#[cfg(test)]
mod test {
    use super::{fmt_string, Writer};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=;,?").as_str(), "%26%3D%3B%2C%3F");
        assert_eq!(fmt_string("www.example.com.").as_str(), "www.example.com.");
    }

    #[test]
    fn writer_prefixes() {
        let mut path = String::from("/2013-04-01/hostedzone");
        let mut writer = Writer::new(&mut path);
        writer.push_opt("marker", Some("Z1"));
        writer.push_opt::<u32>("maxitems", None);
        writer.push_opt("maxitems", Some(10));
        assert_eq!(path, "/2013-04-01/hostedzone?marker=Z1&maxitems=10");

        let mut path = String::from("/applications?x=y");
        Writer::new(&mut path).push_list("names", &["a b", "c"]);
        assert_eq!(path, "/applications?x=y&names=a%20b&names=c");
    }
}
