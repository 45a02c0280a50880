/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Response handlers, one per operation

use crate::error::Error;
use crate::output::*;
use crate::xml_deser;
use bytes::Bytes;
use sdk_http::protocol::xml;
use sdk_http::response::ParseStrictResponse;

macro_rules! rest_xml_operation {
    ($($name:ident => $output:ty, $deser:path;)+) => {
        $(
            #[derive(Debug, Clone, Default)]
            pub struct $name {
                _private: (),
            }

            impl $name {
                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseStrictResponse for $name {
                type Output = Result<$output, Error>;

                fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                    xml::parse_response(response, $deser)
                }
            }
        )+
    };
}

rest_xml_operation! {
    GetHostedZone => GetHostedZoneOutput, xml_deser::deser_get_hosted_zone;
    DeleteHostedZone => DeleteHostedZoneOutput, xml_deser::deser_delete_hosted_zone;
    ListHostedZones => ListHostedZonesOutput, xml_deser::deser_list_hosted_zones;
    ChangeResourceRecordSets => ChangeResourceRecordSetsOutput, xml_deser::deser_change_resource_record_sets;
    GetChange => GetChangeOutput, xml_deser::deser_get_change;
    TestDnsAnswer => TestDnsAnswerOutput, xml_deser::deser_test_dns_answer;
}

#[derive(Debug, Clone, Default)]
pub struct CreateHostedZone {
    _private: (),
}

impl CreateHostedZone {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ParseStrictResponse for CreateHostedZone {
    type Output = Result<CreateHostedZoneOutput, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        let mut output: CreateHostedZoneOutput =
            xml::parse_response(response, xml_deser::deser_create_hosted_zone)?;
        output.location = response
            .headers()
            .get(http::header::LOCATION)
            .and_then(|location| location.to_str().ok())
            .map(str::to_string);
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use super::{CreateHostedZone, GetHostedZone, TestDnsAnswer};
    use crate::error::ErrorKind;
    use crate::model::RrType;
    use bytes::Bytes;
    use sdk_http::response::ParseStrictResponse;

    #[test]
    fn location_header() {
        let response = http::Response::builder()
            .status(201)
            .header(
                "Location",
                "https://route53.amazonaws.com/2013-04-01/hostedzone/Z1D633PJN98FT9",
            )
            .body(Bytes::from_static(
                b"<CreateHostedZoneResponse><HostedZone><Id>/hostedzone/Z1D633PJN98FT9</Id></HostedZone></CreateHostedZoneResponse>",
            ))
            .unwrap();
        let output = CreateHostedZone::new().parse(&response).unwrap();
        assert_eq!(
            output.location.as_deref(),
            Some("https://route53.amazonaws.com/2013-04-01/hostedzone/Z1D633PJN98FT9")
        );
        assert!(output.hosted_zone.is_some());
    }

    #[test]
    fn no_such_hosted_zone() {
        let response = http::Response::builder()
            .status(404)
            .body(Bytes::from_static(
                br#"<?xml version="1.0"?>
<ErrorResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
  <Error><Type>Sender</Type><Code>NoSuchHostedZone</Code><Message>No hosted zone found with ID: Z9</Message></Error>
  <RequestId>6c0f2c8a-0001</RequestId>
</ErrorResponse>"#,
            ))
            .unwrap();
        let err = GetHostedZone::new().parse(&response).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NoSuchHostedZone);
        assert_eq!(err.request_id(), Some("6c0f2c8a-0001"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn dns_answer() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"<TestDNSAnswerResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
   <Nameserver>ns-2048.awsdns-64.com</Nameserver>
   <RecordName>www.example.com</RecordName>
   <RecordType>A</RecordType>
   <RecordData>
      <RecordDataEntry>192.0.2.249</RecordDataEntry>
   </RecordData>
   <ResponseCode>NOERROR</ResponseCode>
   <Protocol>UDP</Protocol>
</TestDNSAnswerResponse>"#,
            ))
            .unwrap();
        let output = TestDnsAnswer::new().parse(&response).unwrap();
        assert_eq!(output.record_type, Some(RrType::A));
        assert_eq!(output.record_data, vec!["192.0.2.249".to_string()]);
        assert_eq!(output.response_code.as_deref(), Some("NOERROR"));
    }
}
