/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use m2::input::{
    CancelBatchJobExecutionInput, CreateApplicationInput, DeleteApplicationInput,
    GetApplicationInput, StartBatchJobInput,
};
use m2::model::{
    ApplicationLifecycle, BatchJobIdentifier, Definition, EngineType, ScriptBatchJobDefinition,
};
use m2::{Client, Config, ErrorKind, Region, SdkError};
use sdk_client::conns::DynConnector;
use sdk_client::retry;
use sdk_client::rt::spawn::test_util::ManualSpawn;
use sdk_client::rt::spawn::SpawnError;
use sdk_client::test_connection::TestConnection;
use sdk_endpoint::Params;
use sdk_http::body::SdkBody;
use sdk_http::endpoint::ResolveEndpointError;
use sdk_sig_auth::signer::test_util::ScopeSigner;
use sdk_types::idempotency_token::IdempotencyTokenProvider;
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_test::traced_test;

fn conf() -> m2::config::Builder {
    Config::builder()
        .region(Region::new("us-west-2"))
        .signer(ScopeSigner)
}

fn request(method: &str, uri: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(SdkBody::from(body))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder()
        .status(status)
        .header("x-amzn-requestid", "5f1c7a2e-0000-4000-8000-000000000001")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn delete_application() {
    let conn = TestConnection::new(vec![(
        request(
            "DELETE",
            "https://m2.us-west-2.amazonaws.com/applications/abc",
            "",
        ),
        response(200, "{}"),
    )]);
    let client = Client::from_conf_conn(conf().build(), conn.clone());
    client
        .delete_application(DeleteApplicationInput::builder().application_id("abc").build())
        .await
        .expect("success");
    conn.assert_requests_match(&[]);
    let authorization = conn.requests()[0].actual.headers()["authorization"]
        .to_str()
        .unwrap()
        .to_string();
    assert!(authorization.starts_with("TEST "));
    assert!(authorization.ends_with("/us-west-2/m2/0"));
}

#[tokio::test]
async fn cancel_batch_job_execution() {
    let conn = TestConnection::new(vec![(
        request(
            "POST",
            "https://m2.us-west-2.amazonaws.com/applications/abc/batch-job-executions/exec-1/cancel",
            "",
        ),
        response(200, "{}"),
    )]);
    let client = Client::from_conf_conn(conf().build(), conn.clone());
    client
        .cancel_batch_job_execution(
            CancelBatchJobExecutionInput::builder()
                .application_id("abc")
                .execution_id("exec-1")
                .build(),
        )
        .await
        .expect("success");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn create_application() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://m2.us-west-2.amazonaws.com/applications")
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"name":"payroll","engineType":"bluage","definition":{"content":"{}"},"clientToken":"token-1"}"#,
            ))
            .unwrap(),
        response(
            200,
            r#"{"applicationArn":"arn:aws:m2:us-west-2:123456789012:app/abc","applicationId":"abc","applicationVersion":1}"#,
        ),
    )]);
    let client = Client::from_conf_conn(
        conf()
            .idempotency_token_provider(IdempotencyTokenProvider::fixed("token-1"))
            .build(),
        conn.clone(),
    );
    let output = client
        .create_application(
            CreateApplicationInput::builder()
                .name("payroll")
                .engine_type(EngineType::Bluage)
                .definition(Definition::Content("{}".into()))
                .build(),
        )
        .await
        .expect("success");
    assert_eq!(output.application_id.as_deref(), Some("abc"));
    assert_eq!(output.application_version, Some(1));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
#[traced_test]
async fn missing_fields_are_never_sent() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(conf().build(), conn.clone());
    let err = client
        .delete_application(DeleteApplicationInput::builder().build())
        .await
        .expect_err("applicationId is required");
    match err {
        SdkError::ConstructionFailure(err) => {
            assert!(err.is_missing_field());
            assert_eq!(err.field(), Some("applicationId"));
        }
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert!(conn.requests().is_empty());
    assert!(logs_contain("invalid operation input"));
    logs_assert(|lines: &[&str]| {
        match lines.iter().filter(|line| line.contains("WARN")).count() {
            1 => Ok(()),
            n => Err(format!("expected exactly one warning, found {}", n)),
        }
    });
}

#[tokio::test]
async fn endpoint_resolution_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let conf = conf()
        .endpoint_resolver(|_: &Params| -> sdk_http::endpoint::Result {
            Err(ResolveEndpointError::message("no endpoint in this region"))
        })
        .build();
    let client = Client::from_conf_conn(conf, conn.clone());
    let err = client
        .get_application(GetApplicationInput::builder().application_id("abc").build())
        .await
        .expect_err("resolution fails");
    assert!(matches!(err, SdkError::EndpointResolutionFailure(_)));
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn endpoint_url_override() {
    let conn = TestConnection::new(vec![(
        request("GET", "http://localhost:8000/applications/abc", ""),
        response(200, r#"{"applicationId":"abc","status":"Running"}"#),
    )]);
    let client = Client::from_conf_conn(
        conf().endpoint_url("http://localhost:8000").build(),
        conn.clone(),
    );
    let output = client
        .get_application(GetApplicationInput::builder().application_id("abc").build())
        .await
        .expect("success");
    assert_eq!(output.status, Some(ApplicationLifecycle::Running));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn repeated_calls_are_independent() {
    let body = r#"{"applicationId":"abc","name":"payroll","engineType":"microfocus"}"#;
    let conn = TestConnection::new(vec![
        (
            request("GET", "https://m2.us-west-2.amazonaws.com/applications/abc", ""),
            response(200, body),
        ),
        (
            request("GET", "https://m2.us-west-2.amazonaws.com/applications/abc", ""),
            response(200, body),
        ),
    ]);
    let client = Client::from_conf_conn(conf().build(), conn.clone());
    let input = GetApplicationInput::builder().application_id("abc").build();
    let first = client.get_application(input.clone()).await.expect("success");
    let second = client.get_application(input).await.expect("success");
    assert_eq!(first, second);
    assert_eq!(first.engine_type, Some(EngineType::Microfocus));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn modeled_errors_carry_the_request_id() {
    let conn = TestConnection::new(vec![(
        request(
            "DELETE",
            "https://m2.us-west-2.amazonaws.com/applications/abc",
            "",
        ),
        response(
            409,
            r#"{"__type":"ConflictException","message":"application is running","resourceId":"abc"}"#,
        ),
    )]);
    let client = Client::from_conf_conn(conf().build(), conn.clone());
    let err = client
        .delete_application(DeleteApplicationInput::builder().application_id("abc").build())
        .await
        .expect_err("conflict");
    let err = err.into_service_error().expect("service error");
    assert_eq!(err.kind(), &ErrorKind::ConflictException);
    assert_eq!(err.message(), Some("application is running"));
    assert_eq!(
        err.request_id(),
        Some("5f1c7a2e-0000-4000-8000-000000000001")
    );
}

#[tokio::test(start_paused = true)]
async fn internal_server_errors_are_retried() {
    let conn = TestConnection::new(vec![
        (
            request("GET", "https://m2.us-west-2.amazonaws.com/applications/abc", ""),
            response(500, r#"{"__type":"InternalServerException","message":"oops"}"#),
        ),
        (
            request("GET", "https://m2.us-west-2.amazonaws.com/applications/abc", ""),
            response(200, r#"{"applicationId":"abc"}"#),
        ),
    ]);
    let client = Client::from_conf_conn(
        conf()
            .retry_config(retry::Config::default().with_base(|| 1_f64))
            .build(),
        conn.clone(),
    );
    let output = client
        .get_application(GetApplicationInput::builder().application_id("abc").build())
        .await
        .expect("second attempt succeeds");
    assert_eq!(output.application_id.as_deref(), Some("abc"));
    conn.assert_requests_match(&[]);
}

/// Responds to `GET /applications/{id}` with that id, so each outcome can be traced to its call
fn echo_connector() -> DynConnector {
    DynConnector::new(tower::service_fn(|request: http::Request<SdkBody>| async move {
        let id = request
            .uri()
            .path()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Ok::<_, Infallible>(
            http::Response::builder()
                .status(200)
                .body(SdkBody::from(format!(r#"{{"applicationId":"{}"}}"#, id)))
                .unwrap(),
        )
    }))
}

#[tokio::test]
async fn spawned_operations_complete_in_any_order() {
    let executor = ManualSpawn::new();
    let client = Client::from_conf_conn(
        conf().async_spawn(executor.clone()).build(),
        echo_connector(),
    );
    let handles = (0..4)
        .map(|i| {
            client
                .spawn(
                    GetApplicationInput::builder()
                        .application_id(format!("app-{}", i))
                        .build(),
                )
                .expect("executor accepts the task")
        })
        .collect::<Vec<_>>();
    assert_eq!(executor.pending(), 4);

    for task in executor.take_tasks().into_iter().rev() {
        task.await;
    }
    for (i, handle) in handles.into_iter().enumerate() {
        let output = handle.await.expect("success");
        assert_eq!(output.application_id, Some(format!("app-{}", i)));
    }
}

#[tokio::test]
async fn spawn_reports_validation_failures_through_the_handle() {
    let executor = ManualSpawn::new();
    let client = Client::from_conf_conn(
        conf().async_spawn(executor.clone()).build(),
        echo_connector(),
    );
    let handle = client
        .spawn(GetApplicationInput::builder().build())
        .expect("executor accepts the task");
    for task in executor.take_tasks() {
        task.await;
    }
    let err = handle.await.expect_err("applicationId is required");
    assert_eq!(
        err.construction_failure().and_then(|err| err.field()),
        Some("applicationId")
    );
}

#[test]
fn spawn_needs_an_executor() {
    // built outside of a runtime, so there is no default executor
    let client = Client::from_conf_conn(conf().build(), echo_connector());
    let err = client
        .spawn(GetApplicationInput::builder().application_id("abc").build())
        .expect_err("no executor");
    assert!(matches!(err, SpawnError::NoExecutor));
}

#[tokio::test]
async fn callbacks_receive_the_submitted_input() {
    let executor = ManualSpawn::new();
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("https://m2.us-west-2.amazonaws.com/applications/abc/batch-job")
            .body(SdkBody::from(
                r#"{"batchJobIdentifier":{"scriptBatchJobIdentifier":{"scriptName":"nightly.sh"}}}"#,
            ))
            .unwrap(),
        response(200, r#"{"executionId":"exec-1"}"#),
    )]);
    let client = Client::from_conf_conn(
        conf().async_spawn(executor.clone()).build(),
        conn.clone(),
    );
    let input = StartBatchJobInput::builder()
        .application_id("abc")
        .batch_job_identifier(BatchJobIdentifier::ScriptBatchJobIdentifier(
            ScriptBatchJobDefinition::new("nightly.sh"),
        ))
        .build();
    let expected = input.clone();

    let ran = Arc::new(AtomicBool::new(false));
    let (tx, rx) = tokio::sync::oneshot::channel();
    client
        .call_with(input, (ran.clone(), tx), |_client, submitted, outcome, (ran, tx)| {
            ran.store(true, Ordering::SeqCst);
            let _ = tx.send((submitted.clone(), outcome.map(|output| output.execution_id)));
        })
        .expect("executor accepts the task");
    // nothing runs until the executor does
    assert!(!ran.load(Ordering::SeqCst));
    assert!(conn.requests().is_empty());

    for task in executor.take_tasks() {
        task.await;
    }
    let (submitted, outcome) = rx.await.expect("callback ran");
    assert!(ran.load(Ordering::SeqCst));
    assert_eq!(submitted, expected);
    assert_eq!(outcome.expect("success").as_deref(), Some("exec-1"));
    conn.assert_requests_match(&[]);
}
