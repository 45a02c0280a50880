/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Provides an [`AsyncSpawn`] trait that runs a task in the background, and implementations of
//! `AsyncSpawn` for different async runtimes.
//!
//! Clients use it to run operations off the calling task: [`spawn_outcome`] returns an
//! [`OperationHandle`] that resolves with the operation's outcome.

use pin_project::pin_project;
use sdk_http::result::{ConnectorError, SdkError};
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::oneshot;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A unit of work submitted to an executor
pub type Task = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("no executor was configured to run the operation")]
    NoExecutor,
    #[error("the executor refused to run the operation")]
    Rejected(#[source] BoxError),
}

/// Runs tasks in the background
pub trait AsyncSpawn: Debug + Send + Sync {
    /// Submit `task` for execution. Implementations must not run the task on the calling thread.
    fn spawn(&self, task: Task) -> Result<(), SpawnError>;
}

impl<T> AsyncSpawn for Arc<T>
where
    T: AsyncSpawn + ?Sized,
{
    fn spawn(&self, task: Task) -> Result<(), SpawnError> {
        T::spawn(self, task)
    }
}

/// Wrapper type for sharable `AsyncSpawn`
#[derive(Clone, Debug)]
pub struct SharedAsyncSpawn(Arc<dyn AsyncSpawn>);

impl SharedAsyncSpawn {
    pub fn new(spawn: impl AsyncSpawn + 'static) -> Self {
        Self(Arc::new(spawn))
    }
}

impl From<Arc<dyn AsyncSpawn>> for SharedAsyncSpawn {
    fn from(spawn: Arc<dyn AsyncSpawn>) -> Self {
        SharedAsyncSpawn(spawn)
    }
}

impl AsyncSpawn for SharedAsyncSpawn {
    fn spawn(&self, task: Task) -> Result<(), SpawnError> {
        self.0.spawn(task)
    }
}

/// Implementation of [`AsyncSpawn`] for Tokio
#[derive(Debug, Clone)]
pub struct TokioSpawn {
    handle: tokio::runtime::Handle,
}

impl TokioSpawn {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        TokioSpawn { handle }
    }

    /// Capture the runtime that is running the current thread, if any
    pub fn current() -> Option<Self> {
        tokio::runtime::Handle::try_current().ok().map(Self::new)
    }
}

impl AsyncSpawn for TokioSpawn {
    fn spawn(&self, task: Task) -> Result<(), SpawnError> {
        // the handle is detached; the task reports through its own channel
        drop(self.handle.spawn(task));
        Ok(())
    }
}

/// The executor used when none is configured explicitly
///
/// This is the tokio runtime current at the time of the call, or `None` outside of a runtime.
pub fn default_async_spawn() -> Option<SharedAsyncSpawn> {
    TokioSpawn::current().map(SharedAsyncSpawn::new)
}

/// Future of an operation running on an executor
///
/// If the task is dropped before it produces an outcome (eg. the runtime shut down), the handle
/// resolves to a `DispatchFailure`.
#[pin_project]
#[derive(Debug)]
pub struct OperationHandle<T, E> {
    #[pin]
    rx: oneshot::Receiver<Result<T, SdkError<E>>>,
}

impl<T, E> Future for OperationHandle<T, E> {
    type Output = Result<T, SdkError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().rx.poll(cx).map(|received| match received {
            Ok(outcome) => outcome,
            Err(_) => Err(SdkError::DispatchFailure(ConnectorError::other(
                "the task running the operation was dropped before it completed".into(),
            ))),
        })
    }
}

/// Run `operation` on `spawner`, returning a handle to its outcome
pub fn spawn_outcome<T, E, F>(
    spawner: Option<&SharedAsyncSpawn>,
    operation: F,
) -> Result<OperationHandle<T, E>, SpawnError>
where
    F: Future<Output = Result<T, SdkError<E>>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let spawner = spawner.ok_or(SpawnError::NoExecutor)?;
    let (tx, rx) = oneshot::channel();
    spawner.spawn(Box::pin(async move {
        // the caller may have dropped the handle
        let _ = tx.send(operation.await);
    }))?;
    Ok(OperationHandle { rx })
}

/// Run `operation` on `spawner`, then hand its outcome to `callback` on the same task
pub fn spawn_with_callback<T, E, F, C>(
    spawner: Option<&SharedAsyncSpawn>,
    operation: F,
    callback: C,
) -> Result<(), SpawnError>
where
    F: Future<Output = Result<T, SdkError<E>>> + Send + 'static,
    C: FnOnce(Result<T, SdkError<E>>) + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let spawner = spawner.ok_or(SpawnError::NoExecutor)?;
    spawner.spawn(Box::pin(async move {
        callback(operation.await);
    }))
}

#[cfg(any(test, feature = "test-util"))]
pub mod test_util {
    use super::{AsyncSpawn, SpawnError, Task};
    use std::fmt;
    use std::sync::{Arc, Mutex};

    /// An executor that queues tasks until the test runs them
    ///
    /// Tests drive the queue explicitly, eg. in reverse submission order.
    #[derive(Clone, Default)]
    pub struct ManualSpawn {
        tasks: Arc<Mutex<Vec<Task>>>,
    }

    impl fmt::Debug for ManualSpawn {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("ManualSpawn")
                .field("pending", &self.pending())
                .finish()
        }
    }

    impl ManualSpawn {
        pub fn new() -> Self {
            Self::default()
        }

        /// Remove every queued task, in submission order
        pub fn take_tasks(&self) -> Vec<Task> {
            std::mem::take(&mut *self.tasks.lock().unwrap())
        }

        pub fn pending(&self) -> usize {
            self.tasks.lock().unwrap().len()
        }
    }

    impl AsyncSpawn for ManualSpawn {
        fn spawn(&self, task: Task) -> Result<(), SpawnError> {
            self.tasks.lock().unwrap().push(task);
            Ok(())
        }
    }

    /// An executor that refuses every task
    #[derive(Debug, Clone, Default)]
    pub struct RejectingSpawn;

    impl AsyncSpawn for RejectingSpawn {
        fn spawn(&self, _task: Task) -> Result<(), SpawnError> {
            Err(SpawnError::Rejected("executor is shut down".into()))
        }
    }
}

#[cfg(test)]
mod test {
    use super::test_util::{ManualSpawn, RejectingSpawn};
    use super::{spawn_outcome, spawn_with_callback, SharedAsyncSpawn, SpawnError, TokioSpawn};
    use sdk_http::result::SdkError;
    use std::sync::{Arc, Mutex};

    type Outcome = Result<u32, SdkError<std::io::Error>>;

    #[tokio::test]
    async fn tokio_spawn_resolves_handle() {
        let spawner = SharedAsyncSpawn::new(TokioSpawn::current().expect("inside a runtime"));
        let handle = spawn_outcome(Some(&spawner), async { Outcome::Ok(5) }).unwrap();
        assert_eq!(handle.await.unwrap(), 5);
    }

    #[test]
    fn no_executor() {
        let err = spawn_outcome(None, async { Outcome::Ok(5) }).expect_err("no executor");
        assert!(matches!(err, SpawnError::NoExecutor));
    }

    #[test]
    fn rejected_tasks() {
        let spawner = SharedAsyncSpawn::new(RejectingSpawn);
        let err = spawn_outcome(Some(&spawner), async { Outcome::Ok(5) }).expect_err("rejected");
        assert!(matches!(err, SpawnError::Rejected(_)));
    }

    #[tokio::test]
    async fn dropped_task_breaks_handle() {
        let manual = ManualSpawn::new();
        let spawner = SharedAsyncSpawn::new(manual.clone());
        let handle = spawn_outcome(Some(&spawner), async { Outcome::Ok(5) }).unwrap();
        drop(manual.take_tasks());
        match handle.await {
            Err(SdkError::DispatchFailure(err)) => assert!(!err.is_io()),
            other => panic!("expected a dispatch failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn reverse_order_execution() {
        let manual = ManualSpawn::new();
        let spawner = SharedAsyncSpawn::new(manual.clone());
        let handles: Vec<_> = (0..5)
            .map(|i| spawn_outcome(Some(&spawner), async move { Outcome::Ok(i) }).unwrap())
            .collect();
        assert_eq!(manual.pending(), 5);
        for task in manual.take_tasks().into_iter().rev() {
            task.await;
        }
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.await.unwrap(), i as u32);
        }
    }

    #[tokio::test]
    async fn callback_runs_on_the_executor() {
        let manual = ManualSpawn::new();
        let spawner = SharedAsyncSpawn::new(manual.clone());
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        spawn_with_callback(Some(&spawner), async { Outcome::Ok(7) }, move |outcome| {
            *sink.lock().unwrap() = Some(outcome.unwrap());
        })
        .unwrap();
        // nothing runs until the executor does
        assert_eq!(*seen.lock().unwrap(), None);
        for task in manual.take_tasks() {
            task.await;
        }
        assert_eq!(*seen.lock().unwrap(), Some(7));
    }
}
