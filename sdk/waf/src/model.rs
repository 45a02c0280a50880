/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

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
    pub enum ChangeTokenStatus {
        Insync => "INSYNC",
        Pending => "PENDING",
        Provisioned => "PROVISIONED",
    }
}

string_enum! {
    pub enum ChangeAction {
        Delete => "DELETE",
        Insert => "INSERT",
    }
}

string_enum! {
    pub enum IpSetDescriptorType {
        Ipv4 => "IPV4",
        Ipv6 => "IPV6",
    }
}

string_enum! {
    pub enum WafActionType {
        Allow => "ALLOW",
        Block => "BLOCK",
        Count => "COUNT",
    }
}

string_enum! {
    pub enum WafRuleType {
        Group => "GROUP",
        RateBased => "RATE_BASED",
        Regular => "REGULAR",
    }
}

/// An address range in CIDR notation
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpSetDescriptor {
    pub r#type: IpSetDescriptorType,
    pub value: String,
}

impl IpSetDescriptor {
    pub fn ipv4(cidr: impl Into<String>) -> Self {
        IpSetDescriptor {
            r#type: IpSetDescriptorType::Ipv4,
            value: cidr.into(),
        }
    }

    pub fn ipv6(cidr: impl Into<String>) -> Self {
        IpSetDescriptor {
            r#type: IpSetDescriptorType::Ipv6,
            value: cidr.into(),
        }
    }
}

/// Insert a descriptor into, or delete it from, an IP set
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpSetUpdate {
    pub action: ChangeAction,
    #[serde(rename = "IPSetDescriptor")]
    pub ip_set_descriptor: IpSetDescriptor,
}

impl IpSetUpdate {
    pub fn insert(descriptor: IpSetDescriptor) -> Self {
        IpSetUpdate {
            action: ChangeAction::Insert,
            ip_set_descriptor: descriptor,
        }
    }

    pub fn delete(descriptor: IpSetDescriptor) -> Self {
        IpSetUpdate {
            action: ChangeAction::Delete,
            ip_set_descriptor: descriptor,
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpSet {
    #[serde(rename = "IPSetId")]
    pub ip_set_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "IPSetDescriptors")]
    pub ip_set_descriptors: Option<Vec<IpSetDescriptor>>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpSetSummary {
    #[serde(rename = "IPSetId")]
    pub ip_set_id: Option<String>,
    pub name: Option<String>,
}

/// What a web ACL does with a request that matches (or, as a default action, matches no rule)
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WafAction {
    pub r#type: WafActionType,
}

impl WafAction {
    pub fn new(action: WafActionType) -> Self {
        WafAction { r#type: action }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActivatedRule {
    pub priority: Option<i32>,
    pub rule_id: Option<String>,
    pub action: Option<WafAction>,
    pub r#type: Option<WafRuleType>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebAcl {
    #[serde(rename = "WebACLId")]
    pub web_acl_id: Option<String>,
    pub name: Option<String>,
    pub metric_name: Option<String>,
    pub default_action: Option<WafAction>,
    pub rules: Option<Vec<ActivatedRule>>,
    #[serde(rename = "WebACLArn")]
    pub web_acl_arn: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
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
