//! `<prop>` 子节点的反序列化辅助函数。
//!
//! 属性节点可能带 `dt` 等属性、可能是空元素（`<propname/>` 请求的响应全是空元素），
//! 所以统一先按文本节点读取，空白文本视为"不存在"，再转换成目标类型。

use serde::{Deserialize, Deserializer, de::Error};

/// 只关心文本内容的节点，忽略节点上的属性
#[derive(Debug, Deserialize, Default)]
struct TextNode {
    #[serde(rename = "$text", default)]
    value: Option<String>,
}

fn read_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let node: Option<TextNode> = Option::deserialize(deserializer)?;
    Ok(node
        .and_then(|n| n.value)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// 纯文本属性（etag、content-type、日期原文等）
pub(crate) fn de_opt_text<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    read_text(deserializer)
}

pub(crate) fn de_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    read_text(deserializer)?
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| D::Error::custom(format!("无效的整数 {s:?}: {e}")))
        })
        .transpose()
}

pub(crate) fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    read_text(deserializer)?
        .map(|s| {
            s.parse::<i64>()
                .map_err(|e| D::Error::custom(format!("无效的整数 {s:?}: {e}")))
        })
        .transpose()
}

/// 以整数表示的布尔标记（`ishidden` / `iscollection`），兼容 `true` / `false`
pub(crate) fn de_opt_flag<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    read_text(deserializer)?
        .map(|s| match s.to_ascii_lowercase().as_str() {
            "true" => Ok(1),
            "false" => Ok(0),
            other => other
                .parse::<u8>()
                .map_err(|e| D::Error::custom(format!("无效的布尔标记 {s:?}: {e}"))),
        })
        .transpose()
}
