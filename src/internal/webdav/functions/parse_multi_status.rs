use quick_xml::Reader;
use quick_xml::de::from_str;
use quick_xml::events::Event;

use crate::internal::error::WebdavError;
use crate::webdav::structs::MultiStatus;

const MULTISTATUS_ROOT: &[u8] = b"multistatus";

/// 把 PROPFIND 响应体解析成 [`MultiStatus`]
///
/// 响应状态码不做校验，是否拿到 `multistatus` 根节点才是成功的依据：
/// 空响应体、非 XML、根节点缺失或不是 `multistatus` 都返回 `MalformedResponse`
pub fn parse_multi_status(body: &[u8]) -> Result<MultiStatus, WebdavError> {
    let xml_text = std::str::from_utf8(body)
        .map_err(|e| WebdavError::MalformedResponse(e.to_string()))?;

    match root_element_name(xml_text)? {
        Some(name) if name == MULTISTATUS_ROOT => {}
        Some(name) => {
            return Err(WebdavError::MalformedResponse(format!(
                "根节点不是 multistatus: {}",
                String::from_utf8_lossy(&name)
            )));
        }
        None => {
            return Err(WebdavError::MalformedResponse(
                "响应中没有 XML 根节点".to_string(),
            ));
        }
    }

    from_str(xml_text).map_err(|e| WebdavError::MalformedResponse(e.to_string()))
}

/// 读取第一个元素的本地名（去掉命名空间前缀）
fn root_element_name(xml_text: &str) -> Result<Option<Vec<u8>>, WebdavError> {
    let mut reader = Reader::from_str(xml_text);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(Some(e.local_name().as_ref().to_vec()));
            }
            Ok(Event::Eof) => return Ok(None),
            Ok(_) => continue,
            Err(e) => return Err(WebdavError::MalformedResponse(e.to_string())),
        }
    }
}
