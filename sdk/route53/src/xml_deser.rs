/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::model::{ChangeInfo, ChangeStatus, DelegationSet, HostedZone, HostedZoneConfig, Vpc};
use crate::output::*;
use quick_xml::Reader;
use sdk_http::protocol::xml::{
    from_xml, next_start, read_parsed, read_text_content, skip_element, XmlError,
};
use sdk_types::date_time::DateTime;

type XmlReader<'a> = Reader<&'a [u8]>;

fn expect_root<'a>(body: &'a [u8], expected: &str) -> Result<XmlReader<'a>, XmlError> {
    let (reader, root) = from_xml(body)?;
    if root != expected {
        return Err(XmlError::MissingElement(expected.to_string()));
    }
    Ok(reader)
}

fn read_timestamp(reader: &mut XmlReader<'_>) -> Result<DateTime, XmlError> {
    read_parsed(reader)
}

/// Collect the text of every `<item>` child of the current element
fn read_string_list(reader: &mut XmlReader<'_>, item: &str) -> Result<Vec<String>, XmlError> {
    let mut values = Vec::new();
    while let Some(tag) = next_start(reader)? {
        if tag == item {
            values.push(read_text_content(reader)?);
        } else {
            skip_element(reader)?;
        }
    }
    Ok(values)
}

fn deser_hosted_zone(reader: &mut XmlReader<'_>) -> Result<HostedZone, XmlError> {
    let mut zone = HostedZone::default();
    while let Some(tag) = next_start(reader)? {
        match tag.as_str() {
            "Id" => zone.id = Some(read_text_content(reader)?),
            "Name" => zone.name = Some(read_text_content(reader)?),
            "CallerReference" => zone.caller_reference = Some(read_text_content(reader)?),
            "Config" => zone.config = Some(deser_hosted_zone_config(reader)?),
            "ResourceRecordSetCount" => zone.resource_record_set_count = Some(read_parsed(reader)?),
            _ => skip_element(reader)?,
        }
    }
    Ok(zone)
}

fn deser_hosted_zone_config(reader: &mut XmlReader<'_>) -> Result<HostedZoneConfig, XmlError> {
    let mut config = HostedZoneConfig::default();
    while let Some(tag) = next_start(reader)? {
        match tag.as_str() {
            "Comment" => config.comment = Some(read_text_content(reader)?),
            "PrivateZone" => config.private_zone = Some(read_parsed(reader)?),
            _ => skip_element(reader)?,
        }
    }
    Ok(config)
}

fn deser_change_info(reader: &mut XmlReader<'_>) -> Result<ChangeInfo, XmlError> {
    let (mut id, mut status, mut submitted_at, mut comment) = (None, None, None, None);
    while let Some(tag) = next_start(reader)? {
        match tag.as_str() {
            "Id" => id = Some(read_text_content(reader)?),
            "Status" => status = Some(read_parsed::<ChangeStatus>(reader)?),
            "SubmittedAt" => submitted_at = Some(read_timestamp(reader)?),
            "Comment" => comment = Some(read_text_content(reader)?),
            _ => skip_element(reader)?,
        }
    }
    let missing = |name: &str| XmlError::MissingElement(format!("ChangeInfo/{}", name));
    Ok(ChangeInfo {
        id: id.ok_or_else(|| missing("Id"))?,
        status: status.ok_or_else(|| missing("Status"))?,
        submitted_at: submitted_at.ok_or_else(|| missing("SubmittedAt"))?,
        comment,
    })
}

fn deser_delegation_set(reader: &mut XmlReader<'_>) -> Result<DelegationSet, XmlError> {
    let mut set = DelegationSet::default();
    while let Some(tag) = next_start(reader)? {
        match tag.as_str() {
            "Id" => set.id = Some(read_text_content(reader)?),
            "CallerReference" => set.caller_reference = Some(read_text_content(reader)?),
            "NameServers" => set.name_servers = read_string_list(reader, "NameServer")?,
            _ => skip_element(reader)?,
        }
    }
    Ok(set)
}

fn deser_vpc(reader: &mut XmlReader<'_>) -> Result<Vpc, XmlError> {
    let mut vpc = Vpc::default();
    while let Some(tag) = next_start(reader)? {
        match tag.as_str() {
            "VPCRegion" => vpc.vpc_region = Some(read_text_content(reader)?),
            "VPCId" => vpc.vpc_id = Some(read_text_content(reader)?),
            _ => skip_element(reader)?,
        }
    }
    Ok(vpc)
}

pub(crate) fn deser_create_hosted_zone(body: &[u8]) -> Result<CreateHostedZoneOutput, XmlError> {
    let mut reader = expect_root(body, "CreateHostedZoneResponse")?;
    let mut output = CreateHostedZoneOutput::default();
    while let Some(tag) = next_start(&mut reader)? {
        match tag.as_str() {
            "HostedZone" => output.hosted_zone = Some(deser_hosted_zone(&mut reader)?),
            "ChangeInfo" => output.change_info = Some(deser_change_info(&mut reader)?),
            "DelegationSet" => output.delegation_set = Some(deser_delegation_set(&mut reader)?),
            "VPC" => output.vpc = Some(deser_vpc(&mut reader)?),
            _ => skip_element(&mut reader)?,
        }
    }
    Ok(output)
}

pub(crate) fn deser_get_hosted_zone(body: &[u8]) -> Result<GetHostedZoneOutput, XmlError> {
    let mut reader = expect_root(body, "GetHostedZoneResponse")?;
    let mut output = GetHostedZoneOutput::default();
    while let Some(tag) = next_start(&mut reader)? {
        match tag.as_str() {
            "HostedZone" => output.hosted_zone = Some(deser_hosted_zone(&mut reader)?),
            "DelegationSet" => output.delegation_set = Some(deser_delegation_set(&mut reader)?),
            "VPCs" => {
                while let Some(tag) = next_start(&mut reader)? {
                    if tag == "VPC" {
                        output.vpcs.push(deser_vpc(&mut reader)?);
                    } else {
                        skip_element(&mut reader)?;
                    }
                }
            }
            _ => skip_element(&mut reader)?,
        }
    }
    Ok(output)
}

pub(crate) fn deser_list_hosted_zones(body: &[u8]) -> Result<ListHostedZonesOutput, XmlError> {
    let mut reader = expect_root(body, "ListHostedZonesResponse")?;
    let mut output = ListHostedZonesOutput::default();
    while let Some(tag) = next_start(&mut reader)? {
        match tag.as_str() {
            "HostedZones" => {
                while let Some(tag) = next_start(&mut reader)? {
                    if tag == "HostedZone" {
                        output.hosted_zones.push(deser_hosted_zone(&mut reader)?);
                    } else {
                        skip_element(&mut reader)?;
                    }
                }
            }
            "Marker" => output.marker = Some(read_text_content(&mut reader)?),
            "IsTruncated" => output.is_truncated = read_parsed(&mut reader)?,
            "NextMarker" => output.next_marker = Some(read_text_content(&mut reader)?),
            "MaxItems" => output.max_items = Some(read_parsed(&mut reader)?),
            _ => skip_element(&mut reader)?,
        }
    }
    Ok(output)
}

/// Responses whose only member is a `ChangeInfo`
fn deser_change_info_response(
    body: &[u8],
    root: &str,
) -> Result<Option<ChangeInfo>, XmlError> {
    let mut reader = expect_root(body, root)?;
    let mut change_info = None;
    while let Some(tag) = next_start(&mut reader)? {
        match tag.as_str() {
            "ChangeInfo" => change_info = Some(deser_change_info(&mut reader)?),
            _ => skip_element(&mut reader)?,
        }
    }
    Ok(change_info)
}

pub(crate) fn deser_delete_hosted_zone(body: &[u8]) -> Result<DeleteHostedZoneOutput, XmlError> {
    Ok(DeleteHostedZoneOutput {
        change_info: deser_change_info_response(body, "DeleteHostedZoneResponse")?,
    })
}

pub(crate) fn deser_change_resource_record_sets(
    body: &[u8],
) -> Result<ChangeResourceRecordSetsOutput, XmlError> {
    Ok(ChangeResourceRecordSetsOutput {
        change_info: deser_change_info_response(body, "ChangeResourceRecordSetsResponse")?,
    })
}

pub(crate) fn deser_get_change(body: &[u8]) -> Result<GetChangeOutput, XmlError> {
    Ok(GetChangeOutput {
        change_info: deser_change_info_response(body, "GetChangeResponse")?,
    })
}

pub(crate) fn deser_test_dns_answer(body: &[u8]) -> Result<TestDnsAnswerOutput, XmlError> {
    let mut reader = expect_root(body, "TestDNSAnswerResponse")?;
    let mut output = TestDnsAnswerOutput::default();
    while let Some(tag) = next_start(&mut reader)? {
        match tag.as_str() {
            "Nameserver" => output.nameserver = Some(read_text_content(&mut reader)?),
            "RecordName" => output.record_name = Some(read_text_content(&mut reader)?),
            "RecordType" => output.record_type = Some(read_parsed(&mut reader)?),
            "RecordData" => output.record_data = read_string_list(&mut reader, "RecordDataEntry")?,
            "ResponseCode" => output.response_code = Some(read_text_content(&mut reader)?),
            "Protocol" => output.protocol = Some(read_text_content(&mut reader)?),
            _ => skip_element(&mut reader)?,
        }
    }
    Ok(output)
}
