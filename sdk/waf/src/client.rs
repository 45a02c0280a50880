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

/// Client for AWS WAF Classic
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
/// use waf::input::{CreateIpSetInput, GetChangeTokenInput};
/// use waf::{Client, Config, Region};
///
/// // `signer` implements SigV4
/// let conf = Config::builder()
///     .region(Region::new("us-east-1"))
///     .signer(signer)
///     .build();
/// let client = Client::from_conf(conf);
/// let token = client
///     .get_change_token(GetChangeTokenInput::builder().build())
///     .await?
///     .change_token
///     .unwrap_or_default();
/// client
///     .create_ip_set(
///         CreateIpSetInput::builder()
///             .name("office")
///             .change_token(token)
///             .build(),
///     )
///     .await?;
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
    /// `AWSWAF_20150824.GetChangeToken`
    get_change_token(GetChangeTokenInput) -> GetChangeTokenOutput;
    /// `AWSWAF_20150824.GetChangeTokenStatus`
    get_change_token_status(GetChangeTokenStatusInput) -> GetChangeTokenStatusOutput;
    /// `AWSWAF_20150824.CreateIPSet`
    create_ip_set(CreateIpSetInput) -> CreateIpSetOutput;
    /// `AWSWAF_20150824.GetIPSet`
    get_ip_set(GetIpSetInput) -> GetIpSetOutput;
    /// `AWSWAF_20150824.UpdateIPSet`
    update_ip_set(UpdateIpSetInput) -> UpdateIpSetOutput;
    /// `AWSWAF_20150824.DeleteIPSet`
    delete_ip_set(DeleteIpSetInput) -> DeleteIpSetOutput;
    /// `AWSWAF_20150824.ListIPSets`
    list_ip_sets(ListIpSetsInput) -> ListIpSetsOutput;
    /// `AWSWAF_20150824.CreateWebACL`
    create_web_acl(CreateWebAclInput) -> CreateWebAclOutput;
}
