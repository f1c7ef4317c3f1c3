//! multistatus 解析测试：命名空间前缀、空元素、带属性的类型节点、异常响应体。

use crate::error::WebdavError;
use crate::tests::{file_props, folder_props, multistatus_xml, response_xml};
use crate::webdav::functions::parse_multi_status;

#[test]
fn parse_prefixed_multistatus() {
    let xml = multistatus_xml(&[
        response_xml("/dav/", folder_props()),
        response_xml("/dav/a.txt", &file_props(42)),
    ]);

    let multi_status = parse_multi_status(xml.as_bytes()).unwrap();
    assert_eq!(multi_status.responses.len(), 2);

    let folder = &multi_status.responses[0];
    assert_eq!(folder.href, "/dav/");
    let prop = &folder.propstats[0].prop;
    assert!(prop.resource_type.as_ref().unwrap().is_collection.is_some());
    assert_eq!(prop.content_length, None);

    let file = &multi_status.responses[1];
    let prop = &file.propstats[0].prop;
    assert_eq!(prop.content_length, Some(42));
    assert_eq!(prop.content_type.as_deref(), Some("text/plain"));
    assert_eq!(prop.etag.as_deref(), Some("\"abc-42\""));
    assert_eq!(
        prop.last_modified.as_deref(),
        Some("Tue, 13 Jan 1998 10:00:00 GMT")
    );
    assert!(
        prop.resource_type
            .as_ref()
            .and_then(|rt| rt.is_collection.as_ref())
            .is_none()
    );
    assert_eq!(file.propstats[0].status_code(), Some(200));
    assert!(file.propstats[0].is_success());
}

#[test]
fn parse_default_namespace_multistatus() {
    let xml = r#"<?xml version="1.0"?>
<multistatus xmlns="DAV:">
  <response>
    <href>/files/report.pdf</href>
    <propstat>
      <prop>
        <getcontentlength>1024</getcontentlength>
        <displayname>report.pdf</displayname>
        <quota-used-bytes>500</quota-used-bytes>
        <quota-available-bytes>-3</quota-available-bytes>
      </prop>
      <status>HTTP/1.1 200 OK</status>
    </propstat>
  </response>
</multistatus>"#;

    let multi_status = parse_multi_status(xml.as_bytes()).unwrap();
    let prop = &multi_status.responses[0].propstats[0].prop;
    assert_eq!(prop.content_length, Some(1024));
    assert_eq!(prop.display_name.as_deref(), Some("report.pdf"));
    assert_eq!(prop.quota_used_bytes, Some(500));
    assert_eq!(prop.quota_available_bytes, Some(-3));
}

#[test]
fn empty_property_elements_are_absent() {
    // <propname/> 请求的响应：只有属性名，没有值
    let props = "<D:getcontentlength/><D:getlastmodified/><D:getetag/><D:creationdate/><D:ishidden/><D:iscollection/><D:quota-used-bytes/><D:resourcetype/>";
    let xml = multistatus_xml(&[response_xml("/dav/a.txt", props)]);

    let multi_status = parse_multi_status(xml.as_bytes()).unwrap();
    let prop = &multi_status.responses[0].propstats[0].prop;
    assert_eq!(prop.content_length, None);
    assert_eq!(prop.last_modified, None);
    assert_eq!(prop.etag, None);
    assert_eq!(prop.creation_date, None);
    assert_eq!(prop.is_hidden, None);
    assert_eq!(prop.is_collection, None);
    assert_eq!(prop.quota_used_bytes, None);
    assert!(
        prop.resource_type
            .as_ref()
            .and_then(|rt| rt.is_collection.as_ref())
            .is_none()
    );
}

#[test]
fn typed_properties_with_attributes() {
    let props = r#"<D:ishidden xmlns:b="urn:uuid:c2f41010-65b3-11d1-a29f-00aa00c14882/" b:dt="boolean">1</D:ishidden><D:iscollection b:dt="boolean" xmlns:b="urn:uuid:c2f41010-65b3-11d1-a29f-00aa00c14882/">true</D:iscollection><D:getcontentlength b:dt="int" xmlns:b="urn:uuid:c2f41010-65b3-11d1-a29f-00aa00c14882/">7</D:getcontentlength>"#;
    let xml = multistatus_xml(&[response_xml("/dav/x", props)]);

    let multi_status = parse_multi_status(xml.as_bytes()).unwrap();
    let prop = &multi_status.responses[0].propstats[0].prop;
    assert_eq!(prop.is_hidden, Some(1));
    assert_eq!(prop.is_collection, Some(1));
    assert_eq!(prop.content_length, Some(7));
}

#[test]
fn multistatus_without_responses_is_empty() {
    let xml = r#"<D:multistatus xmlns:D="DAV:"></D:multistatus>"#;
    let multi_status = parse_multi_status(xml.as_bytes()).unwrap();
    assert!(multi_status.responses.is_empty());
}

#[test]
fn empty_body_is_malformed() {
    assert!(matches!(
        parse_multi_status(b""),
        Err(WebdavError::MalformedResponse(_))
    ));
    assert!(matches!(
        parse_multi_status(b"   \n  "),
        Err(WebdavError::MalformedResponse(_))
    ));
}

#[test]
fn non_multistatus_root_is_malformed() {
    let html = b"<html><body>401 Unauthorized</body></html>";
    assert!(matches!(
        parse_multi_status(html),
        Err(WebdavError::MalformedResponse(_))
    ));
}

#[test]
fn plain_text_body_is_malformed() {
    assert!(matches!(
        parse_multi_status(b"Not Found"),
        Err(WebdavError::MalformedResponse(_))
    ));
}

#[test]
fn invalid_integer_property_is_malformed() {
    let xml = multistatus_xml(&[response_xml(
        "/dav/a.txt",
        "<D:getcontentlength>abc</D:getcontentlength>",
    )]);
    assert!(matches!(
        parse_multi_status(xml.as_bytes()),
        Err(WebdavError::MalformedResponse(_))
    ));
}

#[test]
fn invalid_utf8_is_malformed() {
    assert!(matches!(
        parse_multi_status(&[0xff, 0xfe, 0x3c]),
        Err(WebdavError::MalformedResponse(_))
    ));
}
