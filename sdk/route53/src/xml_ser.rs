/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::input::CreateHostedZoneInput;
use crate::model::{Change, ChangeBatch, HostedZoneConfig, ResourceRecordSet, Vpc};
use quick_xml::Writer;
use sdk_http::protocol::xml::{
    to_xml, write_optional_display, write_optional_text, write_text_element, XmlError,
};
use std::io::{self, Write};

pub(crate) const NAMESPACE: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

pub(crate) fn ser_create_hosted_zone(input: &CreateHostedZoneInput) -> Result<Vec<u8>, XmlError> {
    to_xml("CreateHostedZoneRequest", NAMESPACE, |w| {
        write_optional_text(w, "Name", input.name.as_deref())?;
        if let Some(vpc) = &input.vpc {
            ser_vpc(w, vpc)?;
        }
        write_optional_text(w, "CallerReference", input.caller_reference.as_deref())?;
        if let Some(config) = &input.hosted_zone_config {
            ser_hosted_zone_config(w, config)?;
        }
        write_optional_text(w, "DelegationSetId", input.delegation_set_id.as_deref())?;
        Ok(())
    })
}

pub(crate) fn ser_change_resource_record_sets(batch: &ChangeBatch) -> Result<Vec<u8>, XmlError> {
    to_xml("ChangeResourceRecordSetsRequest", NAMESPACE, |w| {
        w.create_element("ChangeBatch").write_inner_content(|w| {
            write_optional_text(w, "Comment", batch.comment.as_deref())?;
            w.create_element("Changes").write_inner_content(|w| {
                for change in &batch.changes {
                    ser_change(w, change)?;
                }
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })
}

fn ser_vpc<W: Write>(writer: &mut Writer<W>, vpc: &Vpc) -> io::Result<()> {
    writer.create_element("VPC").write_inner_content(|w| {
        write_optional_text(w, "VPCRegion", vpc.vpc_region.as_deref())?;
        write_optional_text(w, "VPCId", vpc.vpc_id.as_deref())?;
        Ok(())
    })?;
    Ok(())
}

fn ser_hosted_zone_config<W: Write>(
    writer: &mut Writer<W>,
    config: &HostedZoneConfig,
) -> io::Result<()> {
    writer
        .create_element("HostedZoneConfig")
        .write_inner_content(|w| {
            write_optional_text(w, "Comment", config.comment.as_deref())?;
            write_optional_display(w, "PrivateZone", config.private_zone)?;
            Ok(())
        })?;
    Ok(())
}

fn ser_change<W: Write>(writer: &mut Writer<W>, change: &Change) -> io::Result<()> {
    writer.create_element("Change").write_inner_content(|w| {
        write_text_element(w, "Action", change.action.as_str())?;
        ser_resource_record_set(w, &change.resource_record_set)
    })?;
    Ok(())
}

fn ser_resource_record_set<W: Write>(
    writer: &mut Writer<W>,
    set: &ResourceRecordSet,
) -> io::Result<()> {
    writer
        .create_element("ResourceRecordSet")
        .write_inner_content(|w| {
            write_text_element(w, "Name", &set.name)?;
            write_text_element(w, "Type", set.r#type.as_str())?;
            write_optional_text(w, "SetIdentifier", set.set_identifier.as_deref())?;
            write_optional_display(w, "Weight", set.weight)?;
            write_optional_display(w, "TTL", set.ttl)?;
            if !set.resource_records.is_empty() {
                w.create_element("ResourceRecords").write_inner_content(|w| {
                    for record in &set.resource_records {
                        w.create_element("ResourceRecord").write_inner_content(|w| {
                            write_text_element(w, "Value", &record.value)
                        })?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::ser_change_resource_record_sets;
    use crate::model::{Change, ChangeAction, ChangeBatch, ResourceRecordSet, RrType};
    use pretty_assertions::assert_eq;

    #[test]
    fn change_batch_document() {
        let batch = ChangeBatch::new().comment("cut over").change(Change::new(
            ChangeAction::Upsert,
            ResourceRecordSet::new("www.example.com", RrType::Cname)
                .ttl(300)
                .record("lb.example.com"),
        ));
        let doc = String::from_utf8(ser_change_resource_record_sets(&batch).unwrap()).unwrap();
        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <ChangeResourceRecordSetsRequest xmlns=\"https://route53.amazonaws.com/doc/2013-04-01/\">\
             <ChangeBatch><Comment>cut over</Comment><Changes><Change><Action>UPSERT</Action>\
             <ResourceRecordSet><Name>www.example.com</Name><Type>CNAME</Type><TTL>300</TTL>\
             <ResourceRecords><ResourceRecord><Value>lb.example.com</Value></ResourceRecord>\
             </ResourceRecords></ResourceRecordSet></Change></Changes></ChangeBatch>\
             </ChangeResourceRecordSetsRequest>"
        );
    }
}
