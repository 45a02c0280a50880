/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Tokens for idempotent operations, eg. the `clientToken` of m2 `CreateApplication`

use std::sync::Arc;

/// Format 128 random bits as a version 4 UUID
pub fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        } else if str_idx == 14 {
            // version
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            // variant
            if str_idx == 19 {
                dat |= 0b0000_1000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Generates idempotency tokens for inputs that leave them unset
#[derive(Debug, Clone)]
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

#[derive(Debug, Clone)]
enum Inner {
    Random,
    Static(Arc<str>),
}

impl IdempotencyTokenProvider {
    /// Random UUIDs drawn from `fastrand`
    pub fn random() -> Self {
        IdempotencyTokenProvider {
            inner: Inner::Random,
        }
    }

    /// Always returns `token`. Intended for tests that assert on request bodies.
    pub fn fixed(token: impl Into<Arc<str>>) -> Self {
        IdempotencyTokenProvider {
            inner: Inner::Static(token.into()),
        }
    }

    pub fn make_idempotency_token(&self) -> String {
        match &self.inner {
            Inner::Random => uuid_v4(fastrand::u128(..)),
            Inner::Static(token) => token.to_string(),
        }
    }
}

impl Default for IdempotencyTokenProvider {
    fn default() -> Self {
        Self::random()
    }
}

#[cfg(test)]
mod test {
    use super::{uuid_v4, IdempotencyTokenProvider};

    #[test]
    fn uuid_layout() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(u128::MAX), "ffffffff-ffff-4fff-ffff-ffffffffffff");
    }

    #[test]
    fn random_tokens_differ() {
        let provider = IdempotencyTokenProvider::random();
        let token = provider.make_idempotency_token();
        assert_eq!(token.len(), 36);
        assert_ne!(token, provider.make_idempotency_token());
    }

    #[test]
    fn fixed_tokens() {
        let provider = IdempotencyTokenProvider::fixed("token-1");
        assert_eq!(provider.make_idempotency_token(), "token-1");
        assert_eq!(provider.clone().make_idempotency_token(), "token-1");
    }
}
