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
//! | `CreateHostedZone` | `Name`, `CallerReference` |
//! | `GetHostedZone` | `Id` |
//! | `DeleteHostedZone` | `Id` |
//! | `ListHostedZones` | |
//! | `ChangeResourceRecordSets` | `HostedZoneId`, `ChangeBatch` |
//! | `GetChange` | `Id` |
//! | `TestDNSAnswer` | `HostedZoneId`, `RecordName`, `RecordType` |
//!
//! Hosted zone, change and delegation set ids may be given with their `/hostedzone/`, `/change/`
//! or `/delegationset/` prefix.

use crate::config::Config;
use crate::error::Error;
use crate::model::{ChangeBatch, HostedZoneConfig, RrType, Vpc};
use crate::output::*;
use crate::resource_id::{self, trim_resource_id};
use crate::xml_ser;
use http::header::CONTENT_TYPE;
use http::Method;
use sdk_client::OperationInput;
use sdk_http::body::SdkBody;
use sdk_http::label::{self, EncodingStrategy};
use sdk_http::operation::{required, BuildError, Operation};
use sdk_http::protocol::xml::APPLICATION_XML;
use sdk_http::query;
use sdk_sig_auth::signer::OperationSigningConfig;

const BASE_PATH: &str = "/2013-04-01";

fn request_builder(method: Method, path: &str) -> http::request::Builder {
    http::Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE_PATH, path))
}

fn xml_request(
    builder: http::request::Builder,
    body: Vec<u8>,
) -> Result<http::Request<SdkBody>, BuildError> {
    Ok(builder
        .header(CONTENT_TYPE, APPLICATION_XML)
        .body(SdkBody::from(body))?)
}

fn empty_request(builder: http::request::Builder) -> Result<http::Request<SdkBody>, BuildError> {
    Ok(builder.body(SdkBody::empty())?)
}

fn hosted_zone_path(id: &str) -> String {
    format!(
        "/hostedzone/{}",
        label::fmt_string(id, EncodingStrategy::Default)
    )
}

/// See [`CreateHostedZoneInput`](crate::input::CreateHostedZoneInput)
pub mod create_hosted_zone_input {
    use crate::model::{HostedZoneConfig, Vpc};

    /// A builder for [`CreateHostedZoneInput`](crate::input::CreateHostedZoneInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        vpc: Option<Vpc>,
        caller_reference: Option<String>,
        hosted_zone_config: Option<HostedZoneConfig>,
        delegation_set_id: Option<String>,
    }

    impl Builder {
        /// The domain name, eg. `example.com`
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        /// Makes the zone private to `vpc`
        pub fn vpc(mut self, vpc: Vpc) -> Self {
            self.vpc = Some(vpc);
            self
        }

        /// A unique string identifying the request, so that it can be retried safely
        pub fn caller_reference(mut self, caller_reference: impl Into<String>) -> Self {
            self.caller_reference = Some(caller_reference.into());
            self
        }

        pub fn hosted_zone_config(mut self, hosted_zone_config: HostedZoneConfig) -> Self {
            self.hosted_zone_config = Some(hosted_zone_config);
            self
        }

        /// Reuse the name servers of a reusable delegation set
        pub fn delegation_set_id(mut self, delegation_set_id: impl Into<String>) -> Self {
            self.delegation_set_id = Some(delegation_set_id.into());
            self
        }

        pub fn build(self) -> crate::input::CreateHostedZoneInput {
            crate::input::CreateHostedZoneInput {
                name: self.name,
                vpc: self.vpc,
                caller_reference: self.caller_reference,
                hosted_zone_config: self.hosted_zone_config,
                delegation_set_id: self.delegation_set_id,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CreateHostedZoneInput {
    pub name: Option<String>,
    pub vpc: Option<Vpc>,
    pub caller_reference: Option<String>,
    pub hosted_zone_config: Option<HostedZoneConfig>,
    pub delegation_set_id: Option<String>,
}

impl CreateHostedZoneInput {
    pub fn builder() -> create_hosted_zone_input::Builder {
        create_hosted_zone_input::Builder::default()
    }
}

impl OperationInput for CreateHostedZoneInput {
    type Config = Config;
    type Handler = crate::operation::CreateHostedZone;
    type Output = CreateHostedZoneOutput;
    type Error = Error;
    const NAME: &'static str = "CreateHostedZone";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.name, "Name")?;
        required(&self.caller_reference, "CallerReference")?;
        let input = CreateHostedZoneInput {
            delegation_set_id: self
                .delegation_set_id
                .as_deref()
                .map(|id| trim_resource_id(id).to_string()),
            ..self.clone()
        };
        let body = xml_ser::ser_create_hosted_zone(&input)?;
        let request = xml_request(request_builder(Method::POST, "/hostedzone"), body)?;
        Ok(conf.new_operation(
            request,
            crate::operation::CreateHostedZone::new(),
            Self::NAME,
        ))
    }
}

/// See [`GetHostedZoneInput`](crate::input::GetHostedZoneInput)
pub mod get_hosted_zone_input {
    /// A builder for [`GetHostedZoneInput`](crate::input::GetHostedZoneInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        id: Option<String>,
    }

    impl Builder {
        /// The hosted zone id, with or without its `/hostedzone/` prefix
        pub fn id(mut self, id: impl Into<String>) -> Self {
            self.id = Some(id.into());
            self
        }

        pub fn build(self) -> crate::input::GetHostedZoneInput {
            crate::input::GetHostedZoneInput { id: self.id }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetHostedZoneInput {
    pub id: Option<String>,
}

impl GetHostedZoneInput {
    pub fn builder() -> get_hosted_zone_input::Builder {
        get_hosted_zone_input::Builder::default()
    }
}

impl OperationInput for GetHostedZoneInput {
    type Config = Config;
    type Handler = crate::operation::GetHostedZone;
    type Output = GetHostedZoneOutput;
    type Error = Error;
    const NAME: &'static str = "GetHostedZone";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let id = resource_id::required(&self.id, "Id")?;
        let request = empty_request(request_builder(Method::GET, &hosted_zone_path(id)))?;
        Ok(conf.new_operation(
            request,
            crate::operation::GetHostedZone::new(),
            Self::NAME,
        ))
    }
}

/// See [`DeleteHostedZoneInput`](crate::input::DeleteHostedZoneInput)
pub mod delete_hosted_zone_input {
    /// A builder for [`DeleteHostedZoneInput`](crate::input::DeleteHostedZoneInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        id: Option<String>,
    }

    impl Builder {
        /// The hosted zone id, with or without its `/hostedzone/` prefix
        pub fn id(mut self, id: impl Into<String>) -> Self {
            self.id = Some(id.into());
            self
        }

        pub fn build(self) -> crate::input::DeleteHostedZoneInput {
            crate::input::DeleteHostedZoneInput { id: self.id }
        }
    }
}

/// Only zones holding nothing but their NS and SOA records can be deleted
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteHostedZoneInput {
    pub id: Option<String>,
}

impl DeleteHostedZoneInput {
    pub fn builder() -> delete_hosted_zone_input::Builder {
        delete_hosted_zone_input::Builder::default()
    }
}

impl OperationInput for DeleteHostedZoneInput {
    type Config = Config;
    type Handler = crate::operation::DeleteHostedZone;
    type Output = DeleteHostedZoneOutput;
    type Error = Error;
    const NAME: &'static str = "DeleteHostedZone";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let id = resource_id::required(&self.id, "Id")?;
        let request = empty_request(request_builder(Method::DELETE, &hosted_zone_path(id)))?;
        Ok(conf.new_operation(
            request,
            crate::operation::DeleteHostedZone::new(),
            Self::NAME,
        ))
    }
}

/// See [`ListHostedZonesInput`](crate::input::ListHostedZonesInput)
pub mod list_hosted_zones_input {
    /// A builder for [`ListHostedZonesInput`](crate::input::ListHostedZonesInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        marker: Option<String>,
        max_items: Option<i32>,
        delegation_set_id: Option<String>,
    }

    impl Builder {
        /// `NextMarker` of the previous page
        pub fn marker(mut self, marker: impl Into<String>) -> Self {
            self.marker = Some(marker.into());
            self
        }

        pub fn max_items(mut self, max_items: i32) -> Self {
            self.max_items = Some(max_items);
            self
        }

        /// Only list zones using this reusable delegation set
        pub fn delegation_set_id(mut self, delegation_set_id: impl Into<String>) -> Self {
            self.delegation_set_id = Some(delegation_set_id.into());
            self
        }

        pub fn build(self) -> crate::input::ListHostedZonesInput {
            crate::input::ListHostedZonesInput {
                marker: self.marker,
                max_items: self.max_items,
                delegation_set_id: self.delegation_set_id,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListHostedZonesInput {
    pub marker: Option<String>,
    pub max_items: Option<i32>,
    pub delegation_set_id: Option<String>,
}

impl ListHostedZonesInput {
    pub fn builder() -> list_hosted_zones_input::Builder {
        list_hosted_zones_input::Builder::default()
    }
}

impl OperationInput for ListHostedZonesInput {
    type Config = Config;
    type Handler = crate::operation::ListHostedZones;
    type Output = ListHostedZonesOutput;
    type Error = Error;
    const NAME: &'static str = "ListHostedZones";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let mut path = String::from("/hostedzone");
        let mut query = query::Writer::new(&mut path);
        query.push_opt("marker", self.marker.as_ref());
        query.push_opt("maxitems", self.max_items);
        query.push_opt(
            "delegationsetid",
            self.delegation_set_id.as_deref().map(trim_resource_id),
        );
        let request = empty_request(request_builder(Method::GET, &path))?;
        Ok(conf.new_operation(
            request,
            crate::operation::ListHostedZones::new(),
            Self::NAME,
        ))
    }
}

/// See [`ChangeResourceRecordSetsInput`](crate::input::ChangeResourceRecordSetsInput)
pub mod change_resource_record_sets_input {
    use crate::model::ChangeBatch;

    /// A builder for [`ChangeResourceRecordSetsInput`](crate::input::ChangeResourceRecordSetsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        hosted_zone_id: Option<String>,
        change_batch: Option<ChangeBatch>,
    }

    impl Builder {
        pub fn hosted_zone_id(mut self, hosted_zone_id: impl Into<String>) -> Self {
            self.hosted_zone_id = Some(hosted_zone_id.into());
            self
        }

        pub fn change_batch(mut self, change_batch: ChangeBatch) -> Self {
            self.change_batch = Some(change_batch);
            self
        }

        pub fn build(self) -> crate::input::ChangeResourceRecordSetsInput {
            crate::input::ChangeResourceRecordSetsInput {
                hosted_zone_id: self.hosted_zone_id,
                change_batch: self.change_batch,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeResourceRecordSetsInput {
    pub hosted_zone_id: Option<String>,
    pub change_batch: Option<ChangeBatch>,
}

impl ChangeResourceRecordSetsInput {
    pub fn builder() -> change_resource_record_sets_input::Builder {
        change_resource_record_sets_input::Builder::default()
    }
}

impl OperationInput for ChangeResourceRecordSetsInput {
    type Config = Config;
    type Handler = crate::operation::ChangeResourceRecordSets;
    type Output = ChangeResourceRecordSetsOutput;
    type Error = Error;
    const NAME: &'static str = "ChangeResourceRecordSets";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let hosted_zone_id = resource_id::required(&self.hosted_zone_id, "HostedZoneId")?;
        let change_batch = required(&self.change_batch, "ChangeBatch")?;
        let body = xml_ser::ser_change_resource_record_sets(change_batch)?;
        let path = format!("{}/rrset/", hosted_zone_path(hosted_zone_id));
        let request = xml_request(request_builder(Method::POST, &path), body)?;
        Ok(conf.new_operation(
            request,
            crate::operation::ChangeResourceRecordSets::new(),
            Self::NAME,
        ))
    }
}

/// See [`GetChangeInput`](crate::input::GetChangeInput)
pub mod get_change_input {
    /// A builder for [`GetChangeInput`](crate::input::GetChangeInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        id: Option<String>,
    }

    impl Builder {
        /// The change id, with or without its `/change/` prefix
        pub fn id(mut self, id: impl Into<String>) -> Self {
            self.id = Some(id.into());
            self
        }

        pub fn build(self) -> crate::input::GetChangeInput {
            crate::input::GetChangeInput { id: self.id }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GetChangeInput {
    pub id: Option<String>,
}

impl GetChangeInput {
    pub fn builder() -> get_change_input::Builder {
        get_change_input::Builder::default()
    }
}

impl OperationInput for GetChangeInput {
    type Config = Config;
    type Handler = crate::operation::GetChange;
    type Output = GetChangeOutput;
    type Error = Error;
    const NAME: &'static str = "GetChange";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let id = resource_id::required(&self.id, "Id")?;
        let path = format!("/change/{}", label::fmt_string(id, EncodingStrategy::Default));
        let request = empty_request(request_builder(Method::GET, &path))?;
        Ok(conf.new_operation(request, crate::operation::GetChange::new(), Self::NAME))
    }
}

/// See [`TestDnsAnswerInput`](crate::input::TestDnsAnswerInput)
pub mod test_dns_answer_input {
    use crate::model::RrType;

    /// A builder for [`TestDnsAnswerInput`](crate::input::TestDnsAnswerInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        hosted_zone_id: Option<String>,
        record_name: Option<String>,
        record_type: Option<RrType>,
        resolver_ip: Option<String>,
        edns0_client_subnet_ip: Option<String>,
        edns0_client_subnet_mask: Option<String>,
    }

    impl Builder {
        pub fn hosted_zone_id(mut self, hosted_zone_id: impl Into<String>) -> Self {
            self.hosted_zone_id = Some(hosted_zone_id.into());
            self
        }

        pub fn record_name(mut self, record_name: impl Into<String>) -> Self {
            self.record_name = Some(record_name.into());
            self
        }

        pub fn record_type(mut self, record_type: RrType) -> Self {
            self.record_type = Some(record_type);
            self
        }

        /// Simulate a request from this resolver. Defaults to a Route 53 internal resolver.
        pub fn resolver_ip(mut self, resolver_ip: impl Into<String>) -> Self {
            self.resolver_ip = Some(resolver_ip.into());
            self
        }

        pub fn edns0_client_subnet_ip(mut self, ip: impl Into<String>) -> Self {
            self.edns0_client_subnet_ip = Some(ip.into());
            self
        }

        pub fn edns0_client_subnet_mask(mut self, mask: impl Into<String>) -> Self {
            self.edns0_client_subnet_mask = Some(mask.into());
            self
        }

        pub fn build(self) -> crate::input::TestDnsAnswerInput {
            crate::input::TestDnsAnswerInput {
                hosted_zone_id: self.hosted_zone_id,
                record_name: self.record_name,
                record_type: self.record_type,
                resolver_ip: self.resolver_ip,
                edns0_client_subnet_ip: self.edns0_client_subnet_ip,
                edns0_client_subnet_mask: self.edns0_client_subnet_mask,
            }
        }
    }
}

/// Input of `TestDNSAnswer`. This operation is sent unsigned.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct TestDnsAnswerInput {
    pub hosted_zone_id: Option<String>,
    pub record_name: Option<String>,
    pub record_type: Option<RrType>,
    pub resolver_ip: Option<String>,
    pub edns0_client_subnet_ip: Option<String>,
    pub edns0_client_subnet_mask: Option<String>,
}

impl TestDnsAnswerInput {
    pub fn builder() -> test_dns_answer_input::Builder {
        test_dns_answer_input::Builder::default()
    }
}

impl OperationInput for TestDnsAnswerInput {
    type Config = Config;
    type Handler = crate::operation::TestDnsAnswer;
    type Output = TestDnsAnswerOutput;
    type Error = Error;
    const NAME: &'static str = "TestDNSAnswer";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let hosted_zone_id = resource_id::required(&self.hosted_zone_id, "HostedZoneId")?;
        let record_name = required(&self.record_name, "RecordName")?;
        let record_type = required(&self.record_type, "RecordType")?;
        let mut path = String::from("/testdnsanswer");
        let mut query = query::Writer::new(&mut path);
        query.push_kv("hostedzoneid", hosted_zone_id);
        query.push_kv("recordname", record_name);
        query.push_kv("recordtype", record_type.as_str());
        query.push_opt("resolverip", self.resolver_ip.as_ref());
        query.push_opt("edns0clientsubnetip", self.edns0_client_subnet_ip.as_ref());
        query.push_opt("edns0clientsubnetmask", self.edns0_client_subnet_mask.as_ref());
        let request = empty_request(request_builder(Method::GET, &path))?;
        let mut operation =
            conf.new_operation(request, crate::operation::TestDnsAnswer::new(), Self::NAME);
        operation
            .properties_mut()
            .insert(OperationSigningConfig::unsigned());
        Ok(operation)
    }
}
