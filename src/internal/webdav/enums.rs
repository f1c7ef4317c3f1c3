use reqwest::Method;

use crate::internal::error::WebdavError;

use super::constants::{PROPFIND_ALLPROP_BODY, PROPFIND_PROPNAME_BODY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebDavMethod {
    PROPFIND,
    MKCOL,
    GET,
    PUT,
}

impl WebDavMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebDavMethod::PROPFIND => "PROPFIND",
            WebDavMethod::MKCOL => "MKCOL",
            WebDavMethod::GET => "GET",
            WebDavMethod::PUT => "PUT",
        }
    }

    pub fn to_head_method(&self) -> Result<Method, WebdavError> {
        match self {
            WebDavMethod::GET => Ok(Method::GET),
            WebDavMethod::PUT => Ok(Method::PUT),
            // 扩展方法只能按字节构造
            WebDavMethod::PROPFIND | WebDavMethod::MKCOL => {
                Method::from_bytes(self.as_str().as_bytes())
                    .map_err(|e| WebdavError::InvalidRequest(e.to_string()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// 仅返回当前资源
    Zero,
    /// 返回当前资源及直接子资源
    One,
    /// 指定层数，原样写入 Depth 头
    Levels(u32),
    /// 返回当前资源及所有子资源（谨慎使用）
    Infinity,
}

impl Depth {
    pub fn to_header_value(&self) -> String {
        match self {
            Depth::Zero => "0".to_string(),
            Depth::One => "1".to_string(),
            Depth::Levels(n) => n.to_string(),
            Depth::Infinity => "infinity".to_string(),
        }
    }
}

impl From<u32> for Depth {
    fn from(value: u32) -> Self {
        match value {
            0 => Depth::Zero,
            1 => Depth::One,
            n => Depth::Levels(n),
        }
    }
}

/// PROPFIND 请求体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropfindRequest {
    /// `<propname/>`：只要属性名，列目录默认使用
    #[default]
    PropName,
    /// `<allprop/>`：要全部属性，读取单个资源元数据时使用
    AllProp,
}

impl PropfindRequest {
    pub fn body(&self) -> &'static str {
        match self {
            PropfindRequest::PropName => PROPFIND_PROPNAME_BODY,
            PropfindRequest::AllProp => PROPFIND_ALLPROP_BODY,
        }
    }
}
