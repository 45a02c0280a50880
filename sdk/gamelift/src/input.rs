/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs
//!
//! Required members, in the order they are validated:
//!
//! | Operation | Required |
//! |---|---|
//! | `CreateAlias` | `Name`, `RoutingStrategy` |
//! | `DescribeAlias` | `AliasId` |
//! | `ResolveAlias` | `AliasId` |
//! | `DeleteAlias` | `AliasId` |
//! | `ListAliases` | |
//! | `CreateGameSession` | `MaximumPlayerSessionCount` |
//! | `DescribeFleetAttributes` | |
//! | `DeleteFleet` | `FleetId` |

use crate::config::Config;
use crate::error::Error;
use crate::model::{GameProperty, RoutingStrategy, RoutingStrategyType, Tag};
use crate::output::*;
use http::header::CONTENT_TYPE;
use http::Method;
use sdk_client::OperationInput;
use sdk_http::body::SdkBody;
use sdk_http::operation::{required, BuildError, Operation};
use sdk_http::protocol::json::AWS_JSON_1_1;
use serde::Serialize;

const TARGET_PREFIX: &str = "GameLift";

/// Build an AWS JSON 1.1 request for `operation`
fn rpc_request<T: Serialize>(
    operation: &'static str,
    body: &T,
) -> Result<http::Request<SdkBody>, BuildError> {
    let body = serde_json::to_vec(body)?;
    Ok(http::Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(CONTENT_TYPE, AWS_JSON_1_1)
        .header("x-amz-target", format!("{}.{}", TARGET_PREFIX, operation))
        .body(SdkBody::from(body))?)
}

/// See [`CreateAliasInput`](crate::input::CreateAliasInput)
pub mod create_alias_input {
    use crate::model::{RoutingStrategy, Tag};

    /// A builder for [`CreateAliasInput`](crate::input::CreateAliasInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        description: Option<String>,
        routing_strategy: Option<RoutingStrategy>,
        tags: Option<Vec<Tag>>,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        pub fn description(mut self, description: impl Into<String>) -> Self {
            self.description = Some(description.into());
            self
        }

        pub fn routing_strategy(mut self, routing_strategy: RoutingStrategy) -> Self {
            self.routing_strategy = Some(routing_strategy);
            self
        }

        pub fn tags(mut self, tag: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(tag);
            self
        }

        pub fn build(self) -> crate::input::CreateAliasInput {
            crate::input::CreateAliasInput {
                name: self.name,
                description: self.description,
                routing_strategy: self.routing_strategy,
                tags: self.tags,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAliasInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_strategy: Option<RoutingStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateAliasInput {
    pub fn builder() -> create_alias_input::Builder {
        create_alias_input::Builder::default()
    }
}

impl OperationInput for CreateAliasInput {
    type Config = Config;
    type Handler = crate::operation::CreateAlias;
    type Output = CreateAliasOutput;
    type Error = Error;
    const NAME: &'static str = "CreateAlias";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.name, "Name")?;
        required(&self.routing_strategy, "RoutingStrategy")?;
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(request, crate::operation::CreateAlias::new(), Self::NAME))
    }
}

/// The input of the operations that act on a single alias
macro_rules! alias_id_input {
    ($(#[$meta:meta])* $input:ident, $builder_mod:ident, $handler:ident, $output:ty) => {
        #[doc = concat!("See [`", stringify!($input), "`](crate::input::", stringify!($input), ")")]
        pub mod $builder_mod {
            #[doc = concat!("A builder for [`", stringify!($input), "`](crate::input::", stringify!($input), ")")]
            #[non_exhaustive]
            #[derive(Debug, Clone, Default)]
            pub struct Builder {
                alias_id: Option<String>,
            }

            impl Builder {
                /// Alias id or ARN
                pub fn alias_id(mut self, alias_id: impl Into<String>) -> Self {
                    self.alias_id = Some(alias_id.into());
                    self
                }

                pub fn build(self) -> crate::input::$input {
                    crate::input::$input {
                        alias_id: self.alias_id,
                    }
                }
            }
        }

        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $input {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub alias_id: Option<String>,
        }

        impl $input {
            pub fn builder() -> $builder_mod::Builder {
                $builder_mod::Builder::default()
            }
        }

        impl OperationInput for $input {
            type Config = Config;
            type Handler = crate::operation::$handler;
            type Output = $output;
            type Error = Error;
            const NAME: &'static str = stringify!($handler);

            fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
                required(&self.alias_id, "AliasId")?;
                let request = rpc_request(Self::NAME, self)?;
                Ok(conf.new_operation(request, crate::operation::$handler::new(), Self::NAME))
            }
        }
    };
}

alias_id_input!(DescribeAliasInput, describe_alias_input, DescribeAlias, DescribeAliasOutput);
alias_id_input!(
    /// Find the fleet an alias currently points to
    ResolveAliasInput,
    resolve_alias_input,
    ResolveAlias,
    ResolveAliasOutput
);
alias_id_input!(DeleteAliasInput, delete_alias_input, DeleteAlias, DeleteAliasOutput);

/// See [`ListAliasesInput`](crate::input::ListAliasesInput)
pub mod list_aliases_input {
    use crate::model::RoutingStrategyType;

    /// A builder for [`ListAliasesInput`](crate::input::ListAliasesInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        routing_strategy_type: Option<RoutingStrategyType>,
        name: Option<String>,
        limit: Option<i32>,
        next_token: Option<String>,
    }

    impl Builder {
        pub fn routing_strategy_type(mut self, routing_strategy_type: RoutingStrategyType) -> Self {
            self.routing_strategy_type = Some(routing_strategy_type);
            self
        }

        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        pub fn limit(mut self, limit: i32) -> Self {
            self.limit = Some(limit);
            self
        }

        pub fn next_token(mut self, next_token: impl Into<String>) -> Self {
            self.next_token = Some(next_token.into());
            self
        }

        pub fn build(self) -> crate::input::ListAliasesInput {
            crate::input::ListAliasesInput {
                routing_strategy_type: self.routing_strategy_type,
                name: self.name,
                limit: self.limit,
                next_token: self.next_token,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAliasesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_strategy_type: Option<RoutingStrategyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListAliasesInput {
    pub fn builder() -> list_aliases_input::Builder {
        list_aliases_input::Builder::default()
    }
}

impl OperationInput for ListAliasesInput {
    type Config = Config;
    type Handler = crate::operation::ListAliases;
    type Output = ListAliasesOutput;
    type Error = Error;
    const NAME: &'static str = "ListAliases";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(request, crate::operation::ListAliases::new(), Self::NAME))
    }
}

/// See [`CreateGameSessionInput`](crate::input::CreateGameSessionInput)
pub mod create_game_session_input {
    use crate::model::GameProperty;

    /// A builder for [`CreateGameSessionInput`](crate::input::CreateGameSessionInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        fleet_id: Option<String>,
        alias_id: Option<String>,
        maximum_player_session_count: Option<i32>,
        name: Option<String>,
        game_properties: Option<Vec<GameProperty>>,
        creator_id: Option<String>,
        idempotency_token: Option<String>,
        game_session_data: Option<String>,
        location: Option<String>,
    }

    impl Builder {
        /// The fleet to place the session on. Exactly one of fleet and alias is expected.
        pub fn fleet_id(mut self, fleet_id: impl Into<String>) -> Self {
            self.fleet_id = Some(fleet_id.into());
            self
        }

        pub fn alias_id(mut self, alias_id: impl Into<String>) -> Self {
            self.alias_id = Some(alias_id.into());
            self
        }

        pub fn maximum_player_session_count(mut self, count: i32) -> Self {
            self.maximum_player_session_count = Some(count);
            self
        }

        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        pub fn game_properties(mut self, property: GameProperty) -> Self {
            self.game_properties
                .get_or_insert_with(Vec::new)
                .push(property);
            self
        }

        pub fn creator_id(mut self, creator_id: impl Into<String>) -> Self {
            self.creator_id = Some(creator_id.into());
            self
        }

        /// Caller-chosen id used as the game session id suffix. Reusing it returns the
        /// existing session instead of creating a new one.
        pub fn idempotency_token(mut self, idempotency_token: impl Into<String>) -> Self {
            self.idempotency_token = Some(idempotency_token.into());
            self
        }

        pub fn game_session_data(mut self, game_session_data: impl Into<String>) -> Self {
            self.game_session_data = Some(game_session_data.into());
            self
        }

        pub fn location(mut self, location: impl Into<String>) -> Self {
            self.location = Some(location.into());
            self
        }

        pub fn build(self) -> crate::input::CreateGameSessionInput {
            crate::input::CreateGameSessionInput {
                fleet_id: self.fleet_id,
                alias_id: self.alias_id,
                maximum_player_session_count: self.maximum_player_session_count,
                name: self.name,
                game_properties: self.game_properties,
                creator_id: self.creator_id,
                idempotency_token: self.idempotency_token,
                game_session_data: self.game_session_data,
                location: self.location,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGameSessionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_player_session_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_properties: Option<Vec<GameProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_session_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CreateGameSessionInput {
    pub fn builder() -> create_game_session_input::Builder {
        create_game_session_input::Builder::default()
    }
}

impl OperationInput for CreateGameSessionInput {
    type Config = Config;
    type Handler = crate::operation::CreateGameSession;
    type Output = CreateGameSessionOutput;
    type Error = Error;
    const NAME: &'static str = "CreateGameSession";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(
            &self.maximum_player_session_count,
            "MaximumPlayerSessionCount",
        )?;
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(
            request,
            crate::operation::CreateGameSession::new(),
            Self::NAME,
        ))
    }
}

/// See [`DescribeFleetAttributesInput`](crate::input::DescribeFleetAttributesInput)
pub mod describe_fleet_attributes_input {
    /// A builder for [`DescribeFleetAttributesInput`](crate::input::DescribeFleetAttributesInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        fleet_ids: Option<Vec<String>>,
        limit: Option<i32>,
        next_token: Option<String>,
    }

    impl Builder {
        /// Describe only this fleet. May be called repeatedly; all fleets are described when
        /// no id is given.
        pub fn fleet_ids(mut self, fleet_id: impl Into<String>) -> Self {
            self.fleet_ids
                .get_or_insert_with(Vec::new)
                .push(fleet_id.into());
            self
        }

        pub fn limit(mut self, limit: i32) -> Self {
            self.limit = Some(limit);
            self
        }

        pub fn next_token(mut self, next_token: impl Into<String>) -> Self {
            self.next_token = Some(next_token.into());
            self
        }

        pub fn build(self) -> crate::input::DescribeFleetAttributesInput {
            crate::input::DescribeFleetAttributesInput {
                fleet_ids: self.fleet_ids,
                limit: self.limit,
                next_token: self.next_token,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFleetAttributesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeFleetAttributesInput {
    pub fn builder() -> describe_fleet_attributes_input::Builder {
        describe_fleet_attributes_input::Builder::default()
    }
}

impl OperationInput for DescribeFleetAttributesInput {
    type Config = Config;
    type Handler = crate::operation::DescribeFleetAttributes;
    type Output = DescribeFleetAttributesOutput;
    type Error = Error;
    const NAME: &'static str = "DescribeFleetAttributes";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(
            request,
            crate::operation::DescribeFleetAttributes::new(),
            Self::NAME,
        ))
    }
}

/// See [`DeleteFleetInput`](crate::input::DeleteFleetInput)
pub mod delete_fleet_input {
    /// A builder for [`DeleteFleetInput`](crate::input::DeleteFleetInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        fleet_id: Option<String>,
    }

    impl Builder {
        pub fn fleet_id(mut self, fleet_id: impl Into<String>) -> Self {
            self.fleet_id = Some(fleet_id.into());
            self
        }

        pub fn build(self) -> crate::input::DeleteFleetInput {
            crate::input::DeleteFleetInput {
                fleet_id: self.fleet_id,
            }
        }
    }
}

/// Deletes a fleet. The fleet must be scaled down to zero instances first.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFleetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
}

impl DeleteFleetInput {
    pub fn builder() -> delete_fleet_input::Builder {
        delete_fleet_input::Builder::default()
    }
}

impl OperationInput for DeleteFleetInput {
    type Config = Config;
    type Handler = crate::operation::DeleteFleet;
    type Output = DeleteFleetOutput;
    type Error = Error;
    const NAME: &'static str = "DeleteFleet";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.fleet_id, "FleetId")?;
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(request, crate::operation::DeleteFleet::new(), Self::NAME))
    }
}
