/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_types::date_time::DateTime;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
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

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Propagation state of a change to the Route 53 name servers
    pub enum ChangeStatus {
        Pending => "PENDING",
        Insync => "INSYNC",
    }
}

string_enum! {
    pub enum ChangeAction {
        Create => "CREATE",
        Delete => "DELETE",
        Upsert => "UPSERT",
    }
}

string_enum! {
    /// DNS record type
    pub enum RrType {
        A => "A",
        Aaaa => "AAAA",
        Caa => "CAA",
        Cname => "CNAME",
        Ds => "DS",
        Mx => "MX",
        Naptr => "NAPTR",
        Ns => "NS",
        Ptr => "PTR",
        Soa => "SOA",
        Spf => "SPF",
        Srv => "SRV",
        Txt => "TXT",
    }
}

/// A hosted zone as returned by Route 53. `id` carries the `/hostedzone/` prefix.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostedZone {
    pub id: Option<String>,
    pub name: Option<String>,
    pub caller_reference: Option<String>,
    pub config: Option<HostedZoneConfig>,
    pub resource_record_set_count: Option<i64>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostedZoneConfig {
    pub comment: Option<String>,
    pub private_zone: Option<bool>,
}

impl HostedZoneConfig {
    pub fn new(comment: Option<String>, private_zone: bool) -> Self {
        HostedZoneConfig {
            comment,
            private_zone: Some(private_zone),
        }
    }
}

/// A VPC to associate with a private hosted zone
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vpc {
    pub vpc_region: Option<String>,
    pub vpc_id: Option<String>,
}

impl Vpc {
    pub fn new(vpc_region: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Vpc {
            vpc_region: Some(vpc_region.into()),
            vpc_id: Some(vpc_id.into()),
        }
    }
}

/// The name servers assigned to a hosted zone
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DelegationSet {
    pub id: Option<String>,
    pub caller_reference: Option<String>,
    pub name_servers: Vec<String>,
}

/// A submitted change. `id` carries the `/change/` prefix.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeInfo {
    pub id: String,
    pub status: ChangeStatus,
    pub submitted_at: DateTime,
    pub comment: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    pub value: String,
}

impl ResourceRecord {
    pub fn new(value: impl Into<String>) -> Self {
        ResourceRecord {
            value: value.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecordSet {
    pub name: String,
    pub r#type: RrType,
    pub set_identifier: Option<String>,
    pub weight: Option<i64>,
    pub ttl: Option<i64>,
    pub resource_records: Vec<ResourceRecord>,
}

impl ResourceRecordSet {
    pub fn new(name: impl Into<String>, r#type: RrType) -> Self {
        ResourceRecordSet {
            name: name.into(),
            r#type,
            set_identifier: None,
            weight: None,
            ttl: None,
            resource_records: Vec::new(),
        }
    }

    pub fn ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Weighted routing: both an identifier and a weight are needed
    pub fn weighted(mut self, set_identifier: impl Into<String>, weight: i64) -> Self {
        self.set_identifier = Some(set_identifier.into());
        self.weight = Some(weight);
        self
    }

    pub fn record(mut self, value: impl Into<String>) -> Self {
        self.resource_records.push(ResourceRecord::new(value));
        self
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub action: ChangeAction,
    pub resource_record_set: ResourceRecordSet,
}

impl Change {
    pub fn new(action: ChangeAction, resource_record_set: ResourceRecordSet) -> Self {
        Change {
            action,
            resource_record_set,
        }
    }
}

/// Changes applied atomically: either all of them succeed or none do
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeBatch {
    pub comment: Option<String>,
    pub changes: Vec<Change>,
}

impl ChangeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn change(mut self, change: Change) -> Self {
        self.changes.push(change);
        self
    }
}
