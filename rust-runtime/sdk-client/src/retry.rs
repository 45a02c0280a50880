/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Retry support
//!
//! [`Standard`] is a token bucket retry strategy shared by every request a client sends.
//! [`AwsErrorRetryPolicy`] decides whether a failed attempt may be retried at all.

use sdk_http::result::SdkError;
use sdk_http::retry::ClassifyResponse;
use sdk_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

// 2^30 seconds is far beyond any sensible `max_backoff`
const MAX_BACKOFF_EXPONENT: u32 = 30;

/// Retry configuration
#[derive(Debug, Clone)]
pub struct Config {
    initial_retry_tokens: usize,
    retry_cost: usize,
    no_retry_increment: usize,
    timeout_retry_cost: usize,
    max_attempts: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl Config {
    /// Override `b` in the exponential backoff computation
    ///
    /// By default, `base` is a randomly generated value between 0 and 1. In tests, it can
    /// be helpful to override this:
    /// ```rust
    /// use sdk_client::retry::Config;
    /// let conf = Config::default().with_base(|| 1_f64);
    /// ```
    pub fn with_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }

    /// Override the maximum number of attempts
    ///
    /// `max_attempts` must be set to a value of at least `1` (indicating that retries are disabled).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Disable retries: every request is attempted exactly once
    pub fn disabled() -> Self {
        Self::default().with_max_attempts(1)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_retry_tokens: INITIAL_RETRY_TOKENS,
            retry_cost: RETRY_COST,
            no_retry_increment: 1,
            timeout_retry_cost: 10,
            max_attempts: MAX_ATTEMPTS,
            max_backoff: Duration::from_secs(20),
            // by default, use a random base for exponential backoff
            base: fastrand::f64,
        }
    }
}

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_TOKENS: usize = 500;
const RETRY_COST: usize = 5;

/// Manage retries for a client
///
/// The token bucket is shared by every clone of the strategy, each request gets its own
/// [`RequestRetries`] to count its attempts.
#[derive(Debug, Clone)]
pub struct Standard {
    shared: Arc<Mutex<CrossRequestRetryState>>,
}

impl Standard {
    pub fn new(config: Config) -> Self {
        Standard {
            shared: Arc::new(Mutex::new(CrossRequestRetryState::new(config))),
        }
    }

    /// Retry state for a single request
    pub fn new_request_policy(&self) -> RequestRetries {
        RequestRetries {
            attempts: 1,
            last_quota_usage: None,
            shared: self.shared.clone(),
        }
    }

    /// Tokens currently available in the retry bucket
    pub fn quota_available(&self) -> usize {
        lock(&self.shared).quota_available
    }
}

impl Default for Standard {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn lock(state: &Mutex<CrossRequestRetryState>) -> MutexGuard<'_, CrossRequestRetryState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
struct CrossRequestRetryState {
    quota_available: usize,
    config: Config,
}

impl CrossRequestRetryState {
    fn new(config: Config) -> Self {
        CrossRequestRetryState {
            quota_available: config.initial_retry_tokens,
            config,
        }
    }

    fn quota_release(&mut self, value: Option<usize>) {
        let released = value.unwrap_or(self.config.no_retry_increment);
        self.quota_available =
            (self.quota_available + released).min(self.config.initial_retry_tokens);
    }

    /// Attempt to acquire retry quota for `ErrorKind`
    ///
    /// If quota is available, the amount of quota consumed is returned.
    /// If no quota is available, `None` is returned.
    fn quota_acquire(&mut self, err: &ErrorKind) -> Option<usize> {
        let retry_cost = if err == &ErrorKind::TransientError {
            self.config.timeout_retry_cost
        } else {
            self.config.retry_cost
        };
        if retry_cost > self.quota_available {
            None
        } else {
            self.quota_available -= retry_cost;
            Some(retry_cost)
        }
    }
}

/// Retry state of a single request
///
/// `shared` captures cross-request retry state, whereas `attempts` and `last_quota_usage`
/// capture retry state local to this request.
#[derive(Debug, Clone)]
pub struct RequestRetries {
    attempts: u32,
    last_quota_usage: Option<usize>,
    shared: Arc<Mutex<CrossRequestRetryState>>,
}

impl RequestRetries {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Record a successful attempt, releasing quota back into the bucket
    pub fn succeeded(&self) {
        lock(&self.shared).quota_release(self.last_quota_usage);
    }

    /// Decide whether to retry after a failed attempt
    ///
    /// Returns the delay before the next attempt, or `None` when the request should not be
    /// retried.
    pub fn should_retry(&mut self, retry_kind: &RetryKind) -> Option<Duration> {
        let mut shared = lock(&self.shared);
        if self.attempts >= shared.config.max_attempts {
            return None;
        }
        let backoff = match retry_kind {
            RetryKind::Explicit(dur) => *dur,
            RetryKind::Error(kind) => {
                let quota_used = shared.quota_acquire(kind)?;
                self.last_quota_usage = Some(quota_used);
                let b = (shared.config.base)();
                let exponent = self.attempts.saturating_sub(1).min(MAX_BACKOFF_EXPONENT) as i32;
                // `max` also maps a NaN base to zero
                let backoff = (b * 2_f64.powi(exponent))
                    .max(0.0)
                    .min(shared.config.max_backoff.as_secs_f64());
                Duration::from_secs_f64(backoff)
            }
            _ => return None,
        };
        self.attempts += 1;
        Some(backoff)
    }
}

/// A retry policy that models AWS error codes
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header is checked
/// 2. The modeled error retry mode is checked
/// 3. The code is checked against a predetermined list of throttling errors & transient error codes
/// 4. The status code is checked against a predetermined list of status codes
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct AwsErrorRetryPolicy;

const TRANSIENT_ERROR_STATUS_CODES: &[u16] = &[500, 502, 503, 504];
const THROTTLING_STATUS_CODE: u16 = 429;

impl AwsErrorRetryPolicy {
    /// Create an `AwsErrorRetryPolicy` with the default set of known error & status codes
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }

    /// Classify the result of an attempt
    ///
    /// Failures that happen before the request is sent are never retried. Timeouts and io
    /// errors from the connector are transient, as are responses whose body could not be read.
    pub fn classify_error<E>(&self, err: &SdkError<E>) -> RetryKind
    where
        E: ProvideErrorKind,
    {
        match err {
            SdkError::ServiceError { err, raw } => self.classify(err, raw),
            SdkError::DispatchFailure(err) => match err.retryable_error_kind() {
                Some(kind) => RetryKind::Error(kind),
                None => RetryKind::NotRetryable,
            },
            SdkError::ResponseError { .. } => RetryKind::Error(ErrorKind::TransientError),
            SdkError::ConstructionFailure(_) | SdkError::EndpointResolutionFailure(_) => {
                RetryKind::NotRetryable
            }
        }
    }
}

impl ClassifyResponse for AwsErrorRetryPolicy {
    fn classify<E, B>(&self, err: &E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind,
    {
        if let Some(retry_after_delay) = response
            .headers()
            .get("x-amz-retry-after")
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.parse::<u64>().ok())
        {
            return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
        }
        if let Some(kind) = err.retryable_error_kind() {
            return RetryKind::Error(kind);
        };
        if let Some(kind) = err.code().and_then(sdk_types::retry::classify_code) {
            return RetryKind::Error(kind);
        }
        let status = response.status().as_u16();
        if status == THROTTLING_STATUS_CODE {
            return RetryKind::Error(ErrorKind::ThrottlingError);
        }
        if TRANSIENT_ERROR_STATUS_CODES.contains(&status) {
            return RetryKind::Error(ErrorKind::TransientError);
        };
        RetryKind::NotRetryable
    }
}

#[cfg(test)]
mod test {
    use crate::retry::{AwsErrorRetryPolicy, Config, Standard};
    use sdk_http::result::{ConnectorError, SdkError};
    use sdk_http::retry::ClassifyResponse;
    use sdk_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::time::Duration;

    fn test_config() -> Config {
        Config::default().with_base(|| 1_f64)
    }

    fn server_error() -> RetryKind {
        RetryKind::Error(ErrorKind::ServerError)
    }

    #[test]
    fn eventual_success() {
        let strategy = Standard::new(test_config());
        let mut policy = strategy.new_request_policy();
        let dur = policy.should_retry(&server_error()).expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.quota_available(), 495);

        let dur = policy.should_retry(&server_error()).expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(strategy.quota_available(), 490);

        policy.succeeded();
        assert_eq!(strategy.quota_available(), 495);
    }

    #[test]
    fn no_more_attempts() {
        let strategy = Standard::new(test_config());
        let mut policy = strategy.new_request_policy();
        assert_eq!(
            policy.should_retry(&server_error()),
            Some(Duration::from_secs(1))
        );
        assert_eq!(
            policy.should_retry(&server_error()),
            Some(Duration::from_secs(2))
        );
        assert_eq!(policy.attempts(), 3);
        assert_eq!(policy.should_retry(&server_error()), None);
        assert_eq!(strategy.quota_available(), 490);
    }

    #[test]
    fn no_quota() {
        let mut conf = test_config();
        conf.initial_retry_tokens = 5;
        let strategy = Standard::new(conf);
        let mut policy = strategy.new_request_policy();
        assert_eq!(
            policy.should_retry(&server_error()),
            Some(Duration::from_secs(1))
        );
        assert_eq!(strategy.quota_available(), 0);
        assert_eq!(policy.should_retry(&server_error()), None);
        assert_eq!(strategy.quota_available(), 0);
    }

    #[test]
    fn transient_errors_cost_more() {
        let strategy = Standard::new(test_config());
        let mut policy = strategy.new_request_policy();
        policy
            .should_retry(&RetryKind::Error(ErrorKind::TransientError))
            .expect("should retry");
        assert_eq!(strategy.quota_available(), 490);
    }

    #[test]
    fn success_never_overflows_the_bucket() {
        let strategy = Standard::new(test_config());
        strategy.new_request_policy().succeeded();
        assert_eq!(strategy.quota_available(), 500);
    }

    #[test]
    fn backoff_timing() {
        let strategy = Standard::new(test_config().with_max_attempts(5));
        let mut policy = strategy.new_request_policy();
        for expected in &[1, 2, 4, 8] {
            assert_eq!(
                policy.should_retry(&server_error()),
                Some(Duration::from_secs(*expected))
            );
        }
        assert_eq!(policy.should_retry(&server_error()), None);
        assert_eq!(strategy.quota_available(), 480);
    }

    #[test]
    fn max_backoff_time() {
        let mut conf = test_config().with_max_attempts(5);
        conf.max_backoff = Duration::from_secs(3);
        let strategy = Standard::new(conf);
        let mut policy = strategy.new_request_policy();
        for expected in &[1, 2, 3, 3] {
            assert_eq!(
                policy.should_retry(&server_error()),
                Some(Duration::from_secs(*expected))
            );
        }
        assert_eq!(policy.should_retry(&server_error()), None);
    }

    #[test]
    fn explicit_delays_still_count_attempts() {
        let strategy = Standard::new(test_config());
        let mut policy = strategy.new_request_policy();
        let explicit = RetryKind::Explicit(Duration::from_millis(50));
        assert_eq!(policy.should_retry(&explicit), Some(Duration::from_millis(50)));
        assert_eq!(policy.should_retry(&explicit), Some(Duration::from_millis(50)));
        assert_eq!(policy.should_retry(&explicit), None);
        assert_eq!(strategy.quota_available(), 500);
    }

    #[test]
    fn backoff_is_capped_for_many_attempts() {
        let strategy = Standard::new(test_config().with_max_attempts(40));
        let mut policy = strategy.new_request_policy();
        let mut delays = Vec::new();
        while let Some(delay) = policy.should_retry(&server_error()) {
            delays.push(delay);
        }
        assert_eq!(delays.len(), 39);
        assert_eq!(delays.last(), Some(&Duration::from_secs(20)));
        assert!(delays.iter().all(|delay| *delay <= Duration::from_secs(20)));
    }

    #[test]
    fn disabled_retries() {
        let strategy = Standard::new(Config::disabled());
        let mut policy = strategy.new_request_policy();
        assert_eq!(policy.should_retry(&server_error()), None);
    }

    struct UnmodeledError;

    struct CodedError {
        code: &'static str,
    }

    impl ProvideErrorKind for UnmodeledError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    impl ProvideErrorKind for CodedError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            Some(self.code)
        }
    }

    fn response(status: u16) -> http::Response<&'static str> {
        http::Response::builder().status(status).body("error!").unwrap()
    }

    #[test]
    fn classify_by_code() {
        let policy = AwsErrorRetryPolicy::new();
        assert_eq!(
            policy.classify(&CodedError { code: "Throttling" }, &response(400)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            policy.classify(&CodedError { code: "RequestTimeout" }, &response(400)),
            RetryKind::Error(ErrorKind::TransientError)
        );
        assert_eq!(
            policy.classify(&CodedError { code: "NoSuchHostedZone" }, &response(404)),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn classify_by_status() {
        let policy = AwsErrorRetryPolicy::new();
        assert_eq!(
            policy.classify(&UnmodeledError, &response(503)),
            RetryKind::Error(ErrorKind::TransientError)
        );
        assert_eq!(
            policy.classify(&UnmodeledError, &response(429)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            policy.classify(&UnmodeledError, &response(400)),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn retry_after_header() {
        let policy = AwsErrorRetryPolicy::new();
        let res = http::Response::builder()
            .header("x-amz-retry-after", "5000")
            .status(500)
            .body("error!")
            .unwrap();
        assert_eq!(
            policy.classify(&UnmodeledError, &res),
            RetryKind::Explicit(Duration::from_millis(5000))
        );
    }

    #[test]
    fn connector_errors() {
        let policy = AwsErrorRetryPolicy::new();
        let timeout: SdkError<CodedError> =
            SdkError::DispatchFailure(ConnectorError::timeout("too slow".into()));
        assert_eq!(
            policy.classify_error(&timeout),
            RetryKind::Error(ErrorKind::TransientError)
        );
        let user: SdkError<CodedError> =
            SdkError::DispatchFailure(ConnectorError::user("bad request".into()));
        assert_eq!(policy.classify_error(&user), RetryKind::NotRetryable);
    }
}
