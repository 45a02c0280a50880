/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::Config;
use crate::error::Error;
use crate::input::*;
use crate::output::*;
use sdk_client::conns::DynConnector;
use sdk_client::rt::spawn::{spawn_outcome, spawn_with_callback, OperationHandle, SpawnError};
use sdk_client::OperationInput;
use sdk_http::result::SdkError;
use std::sync::Arc;

#[derive(Debug)]
struct Handle {
    client: sdk_client::Client,
    conf: Config,
}

/// Client for Amazon GameLift
///
/// Every operation can be sent three ways:
/// - awaited directly, with [`Client::call`] or the per-operation methods,
/// - as a spawned task whose outcome is awaited later, with [`Client::spawn`],
/// - as a spawned task that hands its outcome to a callback, with [`Client::call_with`].
///
/// Cloning a client is cheap: clones share the connector, configuration and retry state.
///
/// ```rust,no_run
/// # async fn docs(
/// #     signer: impl sdk_sig_auth::signer::SignRequest + 'static,
/// # ) -> Result<(), Box<dyn std::error::Error>> {
/// use gamelift::input::ResolveAliasInput;
/// use gamelift::{Client, Config, Region};
///
/// // `signer` implements SigV4
/// let conf = Config::builder()
///     .region(Region::new("us-west-2"))
///     .signer(signer)
///     .build();
/// let client = Client::from_conf(conf);
/// let fleet = client
///     .resolve_alias(ResolveAliasInput::builder().alias_id("alias-a1b2").build())
///     .await?
///     .fleet_id;
/// println!("alias-a1b2 points at {:?}", fleet);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    /// Create a client that sends requests over HTTPS
    #[cfg(feature = "rustls")]
    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, sdk_client::conns::https())
    }

    pub fn from_conf_conn(conf: Config, conn: impl Into<DynConnector>) -> Self {
        let client = sdk_client::Builder::new()
            .connector(conn)
            .retry_config(conf.retry_config().clone())
            .build();
        Client {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    /// Send `input` and wait for its outcome
    pub async fn call<I>(&self, input: I) -> Result<I::Output, SdkError<Error>>
    where
        I: OperationInput<Config = Config, Error = Error>,
    {
        self.handle.client.send(&input, &self.handle.conf).await
    }

    /// Send `input` on the configured executor
    ///
    /// The returned handle resolves to the same outcome [`Client::call`] would produce.
    pub fn spawn<I>(&self, input: I) -> Result<OperationHandle<I::Output, Error>, SpawnError>
    where
        I: OperationInput<Config = Config, Error = Error>,
    {
        let client = self.clone();
        spawn_outcome(self.conf().async_spawn(), async move {
            client.call(input).await
        })
    }

    /// Send `input` on the configured executor, then run `handler` with its outcome
    ///
    /// `handler` runs on the executor and receives this client, the input as it was submitted,
    /// the outcome and `context`.
    pub fn call_with<I, C, F>(&self, input: I, context: C, handler: F) -> Result<(), SpawnError>
    where
        I: OperationInput<Config = Config, Error = Error>,
        C: Send + 'static,
        F: FnOnce(&Client, &I, Result<I::Output, SdkError<Error>>, C) + Send + 'static,
    {
        let client = self.clone();
        let submitted = input.clone();
        let callback_client = self.clone();
        spawn_with_callback(
            self.conf().async_spawn(),
            async move { client.call(input).await },
            move |outcome| handler(&callback_client, &submitted, outcome, context),
        )
    }
}

macro_rules! operations {
    ($($(#[$meta:meta])* $method:ident($input:ty) -> $output:ty;)+) => {
        impl Client {
            $(
                $(#[$meta])*
                pub async fn $method(&self, input: $input) -> Result<$output, SdkError<Error>> {
                    self.call(input).await
                }
            )+
        }
    };
}

operations! {
    create_alias(CreateAliasInput) -> CreateAliasOutput;
    describe_alias(DescribeAliasInput) -> DescribeAliasOutput;
    resolve_alias(ResolveAliasInput) -> ResolveAliasOutput;
    delete_alias(DeleteAliasInput) -> DeleteAliasOutput;
    list_aliases(ListAliasesInput) -> ListAliasesOutput;
    /// Starts a game session on a fleet, or on the fleet an alias resolves to
    create_game_session(CreateGameSessionInput) -> CreateGameSessionOutput;
    describe_fleet_attributes(DescribeFleetAttributesInput) -> DescribeFleetAttributesOutput;
    delete_fleet(DeleteFleetInput) -> DeleteFleetOutput;
}
