/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! REST-XML helpers built on `quick-xml`
//!
//! Request bodies are written with [`to_xml`] and the `write_*` helpers. Response bodies are
//! read one element at a time: [`from_xml`] positions a reader inside the root element and
//! [`next_start`] walks its children.

use crate::protocol::{is_retryable_status, request_id};
use bytes::Bytes;
use sdk_types::error::{ModeledErrorKind, ServiceError};
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::{self, Write};
use thiserror::Error;

pub const APPLICATION_XML: &str = "application/xml";

/// Errors that can occur while reading or writing XML
#[derive(Debug, Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document ended before the current element was closed.
    #[error("unexpected end of document in <{0}>")]
    UnexpectedEof(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

/// Serialize a document with an XML declaration and a namespaced root element
pub fn to_xml<F>(root_element: &str, namespace: &str, body: F) -> Result<Vec<u8>, XmlError>
where
    F: FnOnce(&mut Writer<&mut Vec<u8>>) -> io::Result<()>,
{
    let mut buf = Vec::with_capacity(256);
    let mut writer = Writer::new(&mut buf);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element(root_element)
        .with_attribute(("xmlns", namespace))
        .write_inner_content(body)?;
    Ok(buf)
}

/// Write a simple `<tag>text</tag>` element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
pub fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for any optional value with a `Display` form (numbers, booleans).
pub fn write_optional_display<W: Write, T: std::fmt::Display>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<T>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

/// Create a reader over `xml` positioned just inside the root element
///
/// Returns the reader and the local name of the root element.
pub fn from_xml(xml: &[u8]) -> Result<(Reader<&[u8]>, String), XmlError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().expand_empty_elements = true;

    // Skip the XML declaration and find the root element.
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                return Ok((reader, name));
            }
            Event::Eof => return Err(XmlError::MissingElement("root element".to_string())),
            // Skip declaration, comments, processing instructions, whitespace.
            _ => {}
        }
    }
}

/// Advance to the next child element of the current element
///
/// Returns the local name of the child, with the reader positioned inside it, or `None` once the
/// end tag of the current element has been consumed.
pub fn next_start(reader: &mut Reader<&[u8]>) -> Result<Option<String>, XmlError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                return Ok(Some(
                    String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                ))
            }
            Event::End(_) => return Ok(None),
            Event::Eof => return Err(XmlError::UnexpectedEof("element".to_string())),
            _ => {}
        }
    }
}

/// Read the text content of the current element and consume its end tag.
pub fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                let name = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                match quick_xml::escape::resolve_predefined_entity(&name) {
                    Some(resolved) => text.push_str(resolved),
                    None => {
                        return Err(XmlError::ParseError(format!(
                            "unsupported entity reference &{};",
                            name
                        )))
                    }
                }
            }
            Event::Start(_) => {
                skip_element(reader)?;
            }
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(XmlError::UnexpectedEof("text content".to_string())),
            _ => {}
        }
    }
}

/// Skip over the current element and all its children.
pub fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => return Err(XmlError::UnexpectedEof("skipped element".to_string())),
            _ => {}
        }
    }
}

/// Read the text content of the current element and parse it
pub fn read_parsed<T>(reader: &mut Reader<&[u8]>) -> Result<T, XmlError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let text = read_text_content(reader)?;
    text.trim()
        .parse()
        .map_err(|err: T::Err| XmlError::ParseError(format!("invalid value '{}': {}", text, err)))
}

/// Parse the generic error metadata out of a REST-XML error response
///
/// ```xml
/// <ErrorResponse>
///   <Error>
///     <Type>Sender</Type>
///     <Code>NoSuchHostedZone</Code>
///     <Message>No hosted zone found with ID: Z1</Message>
///   </Error>
///   <RequestId>a2b5e6f1-0000-0000-0000-000000000000</RequestId>
/// </ErrorResponse>
/// ```
///
/// Unwrapped `<Error>` documents are accepted as well.
pub fn parse_generic_error(
    response: &http::Response<Bytes>,
) -> Result<sdk_types::error::Error, XmlError> {
    let mut builder = sdk_types::error::Error::builder();
    if let Some(request_id) = request_id(response) {
        builder = builder.request_id(request_id);
    }
    if response.body().iter().all(u8::is_ascii_whitespace) {
        return Ok(builder.build());
    }
    let (mut reader, root) = from_xml(response.body())?;
    if root == "Error" {
        builder = read_error_element(&mut reader, builder)?;
        return Ok(builder.build());
    }
    while let Some(tag) = next_start(&mut reader)? {
        match tag.as_str() {
            "Error" => builder = read_error_element(&mut reader, builder)?,
            "RequestId" => builder = builder.request_id(read_text_content(&mut reader)?),
            _ => skip_element(&mut reader)?,
        }
    }
    Ok(builder.build())
}

/// Parse an error response into a service error of kind `K`
///
/// A body that is not a well formed error document yields an unhandled error carrying the
/// parse failure as its message.
pub fn parse_error<K: ModeledErrorKind>(response: &http::Response<Bytes>) -> ServiceError<K> {
    let meta = parse_generic_error(response).unwrap_or_else(|err| {
        let mut builder =
            sdk_types::error::Error::builder().message(format!("invalid error response: {}", err));
        if let Some(request_id) = request_id(response) {
            builder = builder.request_id(request_id);
        }
        builder.build()
    });
    ServiceError::generic(meta).with_retryable(is_retryable_status(response.status()))
}

/// Parse a REST-XML response with `parse_body`
///
/// Error statuses are parsed as service errors. A success response whose body can't be parsed
/// is reported as an unhandled service error.
pub fn parse_response<T, K, F>(
    response: &http::Response<Bytes>,
    parse_body: F,
) -> Result<T, ServiceError<K>>
where
    K: ModeledErrorKind,
    F: FnOnce(&[u8]) -> Result<T, XmlError>,
{
    if !response.status().is_success() {
        return Err(parse_error(response));
    }
    parse_body(response.body()).map_err(|err| {
        let mut meta = sdk_types::error::Error::builder()
            .message(format!("failed to deserialize response: {}", err));
        if let Some(request_id) = request_id(response) {
            meta = meta.request_id(request_id);
        }
        ServiceError::generic(meta.build())
    })
}

fn read_error_element(
    reader: &mut Reader<&[u8]>,
    mut builder: sdk_types::error::Builder,
) -> Result<sdk_types::error::Builder, XmlError> {
    while let Some(tag) = next_start(reader)? {
        match tag.as_str() {
            "Code" => builder = builder.code(read_text_content(reader)?),
            "Message" => builder = builder.message(read_text_content(reader)?),
            "RequestId" => builder = builder.request_id(read_text_content(reader)?),
            _ => skip_element(reader)?,
        }
    }
    Ok(builder)
}

#[cfg(test)]
mod test {
    use super::{
        from_xml, next_start, parse_generic_error, parse_response, read_parsed, read_text_content,
        skip_element, to_xml, write_optional_text, write_text_element, XmlError,
    };
    use bytes::Bytes;
    use pretty_assertions::assert_eq;

    #[test]
    fn write_namespaced_document() {
        let doc = to_xml("CreateHostedZoneRequest", "https://example.com/doc/", |w| {
            write_text_element(w, "Name", "example.com & co")?;
            write_optional_text(w, "DelegationSetId", None)?;
            Ok(())
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(doc).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <CreateHostedZoneRequest xmlns=\"https://example.com/doc/\">\
             <Name>example.com &amp; co</Name></CreateHostedZoneRequest>"
        );
    }

    #[test]
    fn walk_children() {
        let xml = br#"<?xml version="1.0"?>
            <Root xmlns="https://example.com/doc/">
                <Name>a &amp; b</Name>
                <Nested><Deep>1</Deep></Nested>
                <Empty/>
                <Count>42</Count>
            </Root>"#;
        let (mut reader, root) = from_xml(xml).unwrap();
        assert_eq!(root, "Root");
        let mut seen = vec![];
        while let Some(tag) = next_start(&mut reader).unwrap() {
            match tag.as_str() {
                "Name" => seen.push(read_text_content(&mut reader).unwrap()),
                "Count" => seen.push(read_parsed::<u32>(&mut reader).unwrap().to_string()),
                "Empty" => seen.push(format!("[{}]", read_text_content(&mut reader).unwrap())),
                _ => skip_element(&mut reader).unwrap(),
            }
        }
        assert_eq!(seen, vec!["a & b", "[]", "42"]);
    }

    #[test]
    fn parse_wrapped_error() {
        let response = http::Response::builder()
            .status(404)
            .body(Bytes::from_static(
                br#"<?xml version="1.0"?>
<ErrorResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
  <Error>
    <Type>Sender</Type>
    <Code>NoSuchHostedZone</Code>
    <Message>No hosted zone found with ID: Z1</Message>
  </Error>
  <RequestId>a2b5e6f1-1111</RequestId>
</ErrorResponse>"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), Some("NoSuchHostedZone"));
        assert_eq!(err.message(), Some("No hosted zone found with ID: Z1"));
        assert_eq!(err.request_id(), Some("a2b5e6f1-1111"));
    }

    #[test]
    fn parse_unwrapped_error() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "from-header")
            .body(Bytes::from_static(
                b"<Error><Code>Throttling</Code><Message>Rate exceeded</Message></Error>",
            ))
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), Some("Throttling"));
        assert_eq!(err.request_id(), Some("from-header"));
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestKind {
        NoSuchHostedZone,
        Unhandled,
    }

    impl sdk_types::error::ModeledErrorKind for TestKind {
        fn from_code(code: Option<&str>) -> Self {
            match code {
                Some("NoSuchHostedZone") => TestKind::NoSuchHostedZone,
                _ => TestKind::Unhandled,
            }
        }

        fn retryable_error_kind(&self) -> Option<sdk_types::retry::ErrorKind> {
            None
        }
    }

    fn read_name(body: &[u8]) -> Result<String, XmlError> {
        let (mut reader, _) = from_xml(body)?;
        let mut name = String::new();
        while let Some(tag) = next_start(&mut reader)? {
            match tag.as_str() {
                "Name" => name = read_text_content(&mut reader)?,
                _ => skip_element(&mut reader)?,
            }
        }
        Ok(name)
    }

    #[test]
    fn parse_successful_response() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                b"<HostedZone><Id>/hostedzone/Z1</Id><Name>example.com.</Name></HostedZone>",
            ))
            .unwrap();
        let name = parse_response::<_, TestKind, _>(&response, read_name).unwrap();
        assert_eq!(name, "example.com.");
    }

    #[test]
    fn parse_error_status() {
        let response = http::Response::builder()
            .status(404)
            .body(Bytes::from_static(
                b"<ErrorResponse><Error><Code>NoSuchHostedZone</Code></Error><RequestId>r-1</RequestId></ErrorResponse>",
            ))
            .unwrap();
        let err = parse_response::<_, TestKind, _>(&response, read_name).expect_err("404");
        assert_eq!(err.kind(), &TestKind::NoSuchHostedZone);
        assert_eq!(err.request_id(), Some("r-1"));
    }

    #[test]
    fn malformed_error_bodies_are_unhandled() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "r-2")
            .body(Bytes::from_static(b"<ErrorResponse><Error><Code>"))
            .unwrap();
        let err = parse_response::<_, TestKind, _>(&response, read_name).expect_err("400");
        assert_eq!(err.kind(), &TestKind::Unhandled);
        assert_eq!(err.request_id(), Some("r-2"));
        assert!(err
            .message()
            .unwrap_or_default()
            .starts_with("invalid error response"));
    }
}
