/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_types::DateTime;
use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value this version of the client does not know about
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }
    };
}

string_enum! {
    pub enum RoutingStrategyType {
        Simple => "SIMPLE",
        Terminal => "TERMINAL",
    }
}

string_enum! {
    pub enum GameSessionStatus {
        Activating => "ACTIVATING",
        Active => "ACTIVE",
        Error => "ERROR",
        Terminated => "TERMINATED",
        Terminating => "TERMINATING",
    }
}

string_enum! {
    pub enum PlayerSessionCreationPolicy {
        AcceptAll => "ACCEPT_ALL",
        DenyAll => "DENY_ALL",
    }
}

string_enum! {
    pub enum FleetStatus {
        Activating => "ACTIVATING",
        Active => "ACTIVE",
        Building => "BUILDING",
        Deleting => "DELETING",
        Downloading => "DOWNLOADING",
        Error => "ERROR",
        New => "NEW",
        NotFound => "NOT_FOUND",
        Terminated => "TERMINATED",
        Validating => "VALIDATING",
    }
}

string_enum! {
    pub enum FleetType {
        OnDemand => "ON_DEMAND",
        Spot => "SPOT",
    }
}

/// Where an alias sends players
///
/// A `SIMPLE` strategy points at a fleet, a `TERMINAL` strategy returns `message` to the
/// client instead.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoutingStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<RoutingStrategyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RoutingStrategy {
    pub fn simple(fleet_id: impl Into<String>) -> Self {
        RoutingStrategy {
            r#type: Some(RoutingStrategyType::Simple),
            fleet_id: Some(fleet_id.into()),
            message: None,
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        RoutingStrategy {
            r#type: Some(RoutingStrategyType::Terminal),
            fleet_id: None,
            message: Some(message.into()),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alias {
    pub alias_id: Option<String>,
    pub name: Option<String>,
    pub alias_arn: Option<String>,
    pub description: Option<String>,
    pub routing_strategy: Option<RoutingStrategy>,
    pub creation_time: Option<DateTime>,
    pub last_updated_time: Option<DateTime>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameProperty {
    pub key: String,
    pub value: String,
}

impl GameProperty {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        GameProperty {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSession {
    pub game_session_id: Option<String>,
    pub name: Option<String>,
    pub fleet_id: Option<String>,
    pub fleet_arn: Option<String>,
    pub creation_time: Option<DateTime>,
    pub termination_time: Option<DateTime>,
    pub current_player_session_count: Option<i32>,
    pub maximum_player_session_count: Option<i32>,
    pub status: Option<GameSessionStatus>,
    pub game_properties: Option<Vec<GameProperty>>,
    pub ip_address: Option<String>,
    pub dns_name: Option<String>,
    pub port: Option<i32>,
    pub player_session_creation_policy: Option<PlayerSessionCreationPolicy>,
    pub creator_id: Option<String>,
    pub location: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FleetAttributes {
    pub fleet_id: Option<String>,
    pub fleet_arn: Option<String>,
    pub fleet_type: Option<FleetType>,
    pub instance_type: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub creation_time: Option<DateTime>,
    pub termination_time: Option<DateTime>,
    pub status: Option<FleetStatus>,
    pub build_id: Option<String>,
    pub script_id: Option<String>,
    pub operating_system: Option<String>,
}

#[cfg(test)]
mod test {
    use super::{Alias, RoutingStrategy, RoutingStrategyType};

    #[test]
    fn routing_strategy_members() {
        assert_eq!(
            serde_json::to_value(RoutingStrategy::terminal("come back later")).unwrap(),
            serde_json::json!({"Type": "TERMINAL", "Message": "come back later"})
        );
    }

    #[test]
    fn deserialize_alias() {
        let alias: Alias = serde_json::from_str(
            r#"{
                "AliasId": "alias-a1b2",
                "Name": "prod",
                "RoutingStrategy": {"Type": "SIMPLE", "FleetId": "fleet-1"},
                "CreationTime": 1.6e9
            }"#,
        )
        .unwrap();
        let strategy = alias.routing_strategy.unwrap();
        assert_eq!(strategy.r#type, Some(RoutingStrategyType::Simple));
        assert_eq!(strategy.fleet_id.as_deref(), Some("fleet-1"));
        assert_eq!(alias.creation_time.unwrap().secs(), 1_600_000_000);
    }
}
