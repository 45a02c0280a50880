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
//! | `GetChangeToken` | |
//! | `GetChangeTokenStatus` | `ChangeToken` |
//! | `CreateIPSet` | `Name`, `ChangeToken` |
//! | `GetIPSet` | `IPSetId` |
//! | `UpdateIPSet` | `IPSetId`, `ChangeToken`, `Updates` |
//! | `DeleteIPSet` | `IPSetId`, `ChangeToken` |
//! | `ListIPSets` | |
//! | `CreateWebACL` | `Name`, `MetricName`, `DefaultAction`, `ChangeToken` |

use crate::config::Config;
use crate::error::Error;
use crate::model::{IpSetUpdate, Tag, WafAction};
use crate::output::*;
use http::header::CONTENT_TYPE;
use http::Method;
use sdk_client::OperationInput;
use sdk_http::body::SdkBody;
use sdk_http::operation::{required, BuildError, Operation};
use sdk_http::protocol::json::AWS_JSON_1_1;
use serde::Serialize;

const TARGET_PREFIX: &str = "AWSWAF_20150824";

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

/// See [`GetChangeTokenInput`](crate::input::GetChangeTokenInput)
pub mod get_change_token_input {
    /// A builder for [`GetChangeTokenInput`](crate::input::GetChangeTokenInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {}

    impl Builder {
        pub fn build(self) -> crate::input::GetChangeTokenInput {
            crate::input::GetChangeTokenInput {}
        }
    }
}

/// Requests a token for the next change to a WAF resource
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetChangeTokenInput {}

impl GetChangeTokenInput {
    pub fn builder() -> get_change_token_input::Builder {
        get_change_token_input::Builder::default()
    }
}

impl OperationInput for GetChangeTokenInput {
    type Config = Config;
    type Handler = crate::operation::GetChangeToken;
    type Output = GetChangeTokenOutput;
    type Error = Error;
    const NAME: &'static str = "GetChangeToken";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(
            request,
            crate::operation::GetChangeToken::new(),
            Self::NAME,
        ))
    }
}

/// See [`GetChangeTokenStatusInput`](crate::input::GetChangeTokenStatusInput)
pub mod get_change_token_status_input {
    /// A builder for [`GetChangeTokenStatusInput`](crate::input::GetChangeTokenStatusInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        change_token: Option<String>,
    }

    impl Builder {
        pub fn change_token(mut self, change_token: impl Into<String>) -> Self {
            self.change_token = Some(change_token.into());
            self
        }

        pub fn build(self) -> crate::input::GetChangeTokenStatusInput {
            crate::input::GetChangeTokenStatusInput {
                change_token: self.change_token,
            }
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetChangeTokenStatusInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl GetChangeTokenStatusInput {
    pub fn builder() -> get_change_token_status_input::Builder {
        get_change_token_status_input::Builder::default()
    }
}

impl OperationInput for GetChangeTokenStatusInput {
    type Config = Config;
    type Handler = crate::operation::GetChangeTokenStatus;
    type Output = GetChangeTokenStatusOutput;
    type Error = Error;
    const NAME: &'static str = "GetChangeTokenStatus";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.change_token, "ChangeToken")?;
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(
            request,
            crate::operation::GetChangeTokenStatus::new(),
            Self::NAME,
        ))
    }
}

/// See [`CreateIpSetInput`](crate::input::CreateIpSetInput)
pub mod create_ip_set_input {
    /// A builder for [`CreateIpSetInput`](crate::input::CreateIpSetInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        change_token: Option<String>,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        pub fn change_token(mut self, change_token: impl Into<String>) -> Self {
            self.change_token = Some(change_token.into());
            self
        }

        pub fn build(self) -> crate::input::CreateIpSetInput {
            crate::input::CreateIpSetInput {
                name: self.name,
                change_token: self.change_token,
            }
        }
    }
}

/// Input of `CreateIPSet`
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIpSetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl CreateIpSetInput {
    pub fn builder() -> create_ip_set_input::Builder {
        create_ip_set_input::Builder::default()
    }
}

impl OperationInput for CreateIpSetInput {
    type Config = Config;
    type Handler = crate::operation::CreateIpSet;
    type Output = CreateIpSetOutput;
    type Error = Error;
    const NAME: &'static str = "CreateIPSet";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.name, "Name")?;
        required(&self.change_token, "ChangeToken")?;
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(request, crate::operation::CreateIpSet::new(), Self::NAME))
    }
}

/// See [`GetIpSetInput`](crate::input::GetIpSetInput)
pub mod get_ip_set_input {
    /// A builder for [`GetIpSetInput`](crate::input::GetIpSetInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        ip_set_id: Option<String>,
    }

    impl Builder {
        pub fn ip_set_id(mut self, ip_set_id: impl Into<String>) -> Self {
            self.ip_set_id = Some(ip_set_id.into());
            self
        }

        pub fn build(self) -> crate::input::GetIpSetInput {
            crate::input::GetIpSetInput {
                ip_set_id: self.ip_set_id,
            }
        }
    }
}

/// Input of `GetIPSet`
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetIpSetInput {
    #[serde(rename = "IPSetId", skip_serializing_if = "Option::is_none")]
    pub ip_set_id: Option<String>,
}

impl GetIpSetInput {
    pub fn builder() -> get_ip_set_input::Builder {
        get_ip_set_input::Builder::default()
    }
}

impl OperationInput for GetIpSetInput {
    type Config = Config;
    type Handler = crate::operation::GetIpSet;
    type Output = GetIpSetOutput;
    type Error = Error;
    const NAME: &'static str = "GetIPSet";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.ip_set_id, "IPSetId")?;
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(request, crate::operation::GetIpSet::new(), Self::NAME))
    }
}

/// See [`UpdateIpSetInput`](crate::input::UpdateIpSetInput)
pub mod update_ip_set_input {
    use crate::model::IpSetUpdate;

    /// A builder for [`UpdateIpSetInput`](crate::input::UpdateIpSetInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        ip_set_id: Option<String>,
        change_token: Option<String>,
        updates: Option<Vec<IpSetUpdate>>,
    }

    impl Builder {
        pub fn ip_set_id(mut self, ip_set_id: impl Into<String>) -> Self {
            self.ip_set_id = Some(ip_set_id.into());
            self
        }

        pub fn change_token(mut self, change_token: impl Into<String>) -> Self {
            self.change_token = Some(change_token.into());
            self
        }

        /// Append an update. May be called repeatedly.
        pub fn updates(mut self, update: IpSetUpdate) -> Self {
            self.updates.get_or_insert_with(Vec::new).push(update);
            self
        }

        pub fn build(self) -> crate::input::UpdateIpSetInput {
            crate::input::UpdateIpSetInput {
                ip_set_id: self.ip_set_id,
                change_token: self.change_token,
                updates: self.updates,
            }
        }
    }
}

/// Input of `UpdateIPSet`
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIpSetInput {
    #[serde(rename = "IPSetId", skip_serializing_if = "Option::is_none")]
    pub ip_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<IpSetUpdate>>,
}

impl UpdateIpSetInput {
    pub fn builder() -> update_ip_set_input::Builder {
        update_ip_set_input::Builder::default()
    }
}

impl OperationInput for UpdateIpSetInput {
    type Config = Config;
    type Handler = crate::operation::UpdateIpSet;
    type Output = UpdateIpSetOutput;
    type Error = Error;
    const NAME: &'static str = "UpdateIPSet";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.ip_set_id, "IPSetId")?;
        required(&self.change_token, "ChangeToken")?;
        required(&self.updates, "Updates")?;
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(request, crate::operation::UpdateIpSet::new(), Self::NAME))
    }
}

/// See [`DeleteIpSetInput`](crate::input::DeleteIpSetInput)
pub mod delete_ip_set_input {
    /// A builder for [`DeleteIpSetInput`](crate::input::DeleteIpSetInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        ip_set_id: Option<String>,
        change_token: Option<String>,
    }

    impl Builder {
        pub fn ip_set_id(mut self, ip_set_id: impl Into<String>) -> Self {
            self.ip_set_id = Some(ip_set_id.into());
            self
        }

        pub fn change_token(mut self, change_token: impl Into<String>) -> Self {
            self.change_token = Some(change_token.into());
            self
        }

        pub fn build(self) -> crate::input::DeleteIpSetInput {
            crate::input::DeleteIpSetInput {
                ip_set_id: self.ip_set_id,
                change_token: self.change_token,
            }
        }
    }
}

/// Input of `DeleteIPSet`. Only empty IP sets can be deleted.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIpSetInput {
    #[serde(rename = "IPSetId", skip_serializing_if = "Option::is_none")]
    pub ip_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
}

impl DeleteIpSetInput {
    pub fn builder() -> delete_ip_set_input::Builder {
        delete_ip_set_input::Builder::default()
    }
}

impl OperationInput for DeleteIpSetInput {
    type Config = Config;
    type Handler = crate::operation::DeleteIpSet;
    type Output = DeleteIpSetOutput;
    type Error = Error;
    const NAME: &'static str = "DeleteIPSet";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.ip_set_id, "IPSetId")?;
        required(&self.change_token, "ChangeToken")?;
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(request, crate::operation::DeleteIpSet::new(), Self::NAME))
    }
}

/// See [`ListIpSetsInput`](crate::input::ListIpSetsInput)
pub mod list_ip_sets_input {
    /// A builder for [`ListIpSetsInput`](crate::input::ListIpSetsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        next_marker: Option<String>,
        limit: Option<i32>,
    }

    impl Builder {
        pub fn next_marker(mut self, next_marker: impl Into<String>) -> Self {
            self.next_marker = Some(next_marker.into());
            self
        }

        pub fn limit(mut self, limit: i32) -> Self {
            self.limit = Some(limit);
            self
        }

        pub fn build(self) -> crate::input::ListIpSetsInput {
            crate::input::ListIpSetsInput {
                next_marker: self.next_marker,
                limit: self.limit,
            }
        }
    }
}

/// Input of `ListIPSets`
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIpSetsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl ListIpSetsInput {
    pub fn builder() -> list_ip_sets_input::Builder {
        list_ip_sets_input::Builder::default()
    }
}

impl OperationInput for ListIpSetsInput {
    type Config = Config;
    type Handler = crate::operation::ListIpSets;
    type Output = ListIpSetsOutput;
    type Error = Error;
    const NAME: &'static str = "ListIPSets";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(request, crate::operation::ListIpSets::new(), Self::NAME))
    }
}

/// See [`CreateWebAclInput`](crate::input::CreateWebAclInput)
pub mod create_web_acl_input {
    use crate::model::{Tag, WafAction};

    /// A builder for [`CreateWebAclInput`](crate::input::CreateWebAclInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        metric_name: Option<String>,
        default_action: Option<WafAction>,
        change_token: Option<String>,
        tags: Option<Vec<Tag>>,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        /// CloudWatch metric name. Alphanumeric only, and immutable once created.
        pub fn metric_name(mut self, metric_name: impl Into<String>) -> Self {
            self.metric_name = Some(metric_name.into());
            self
        }

        pub fn default_action(mut self, default_action: WafAction) -> Self {
            self.default_action = Some(default_action);
            self
        }

        pub fn change_token(mut self, change_token: impl Into<String>) -> Self {
            self.change_token = Some(change_token.into());
            self
        }

        pub fn tags(mut self, tag: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(tag);
            self
        }

        pub fn build(self) -> crate::input::CreateWebAclInput {
            crate::input::CreateWebAclInput {
                name: self.name,
                metric_name: self.metric_name,
                default_action: self.default_action,
                change_token: self.change_token,
                tags: self.tags,
            }
        }
    }
}

/// Input of `CreateWebACL`
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateWebAclInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<WafAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateWebAclInput {
    pub fn builder() -> create_web_acl_input::Builder {
        create_web_acl_input::Builder::default()
    }
}

impl OperationInput for CreateWebAclInput {
    type Config = Config;
    type Handler = crate::operation::CreateWebAcl;
    type Output = CreateWebAclOutput;
    type Error = Error;
    const NAME: &'static str = "CreateWebACL";

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        required(&self.name, "Name")?;
        required(&self.metric_name, "MetricName")?;
        required(&self.default_action, "DefaultAction")?;
        required(&self.change_token, "ChangeToken")?;
        let request = rpc_request(Self::NAME, self)?;
        Ok(conf.new_operation(request, crate::operation::CreateWebAcl::new(), Self::NAME))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{IpSetDescriptor, WafActionType};
    use sdk_types::region::Region;

    fn conf() -> Config {
        Config::builder().region(Region::new("us-east-1")).build()
    }

    fn body(op: &Operation<impl Sized>) -> serde_json::Value {
        serde_json::from_slice(op.request().http().body().bytes().unwrap()).unwrap()
    }

    fn target(op: &Operation<impl Sized>) -> String {
        op.request().http().headers()["x-amz-target"]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn targets_use_the_wire_operation_name() {
        let op = GetIpSetInput::builder()
            .ip_set_id("ips-1")
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(target(&op), "AWSWAF_20150824.GetIPSet");
        assert_eq!(body(&op), serde_json::json!({"IPSetId": "ips-1"}));
        assert_eq!(op.metadata().unwrap().name(), "GetIPSet");

        let op = GetChangeTokenInput::builder()
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(target(&op), "AWSWAF_20150824.GetChangeToken");
        assert_eq!(op.request().http().body().bytes(), Some(&b"{}"[..]));
    }

    #[test]
    fn update_ip_set() {
        let input = UpdateIpSetInput::builder()
            .ip_set_id("ips-1")
            .change_token("abcd12f2-46da-4fdb-b8d5-fbd4c466928f")
            .build();
        assert_eq!(
            input.make_operation(&conf()).unwrap_err().field(),
            Some("Updates")
        );

        let op = UpdateIpSetInput::builder()
            .ip_set_id("ips-1")
            .change_token("abcd12f2-46da-4fdb-b8d5-fbd4c466928f")
            .updates(IpSetUpdate::delete(IpSetDescriptor::ipv4("192.0.2.44/32")))
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(
            body(&op),
            serde_json::json!({
                "IPSetId": "ips-1",
                "ChangeToken": "abcd12f2-46da-4fdb-b8d5-fbd4c466928f",
                "Updates": [{
                    "Action": "DELETE",
                    "IPSetDescriptor": {"Type": "IPV4", "Value": "192.0.2.44/32"}
                }]
            })
        );
    }

    #[test]
    fn create_web_acl_required_fields() {
        let builder = CreateWebAclInput::builder();
        let err = builder.clone().build().make_operation(&conf()).unwrap_err();
        assert_eq!(err.field(), Some("Name"));

        let builder = builder.name("edge").metric_name("edge");
        let err = builder.clone().build().make_operation(&conf()).unwrap_err();
        assert_eq!(err.field(), Some("DefaultAction"));

        let builder = builder.default_action(WafAction::new(WafActionType::Allow));
        let err = builder.clone().build().make_operation(&conf()).unwrap_err();
        assert_eq!(err.field(), Some("ChangeToken"));

        let op = builder
            .change_token("token")
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(target(&op), "AWSWAF_20150824.CreateWebACL");
        assert_eq!(
            body(&op),
            serde_json::json!({
                "Name": "edge",
                "MetricName": "edge",
                "DefaultAction": {"Type": "ALLOW"},
                "ChangeToken": "token"
            })
        );
    }
}
