/// 列目录用的PROPFIND请求体，只请求属性名
pub const PROPFIND_PROPNAME_BODY: &str = r#"<?xml version="1.0" encoding="utf-8" ?><propfind xmlns="DAV:"><propname/></propfind>"#;

/// 读取单个资源用的PROPFIND请求体，请求全部属性
pub const PROPFIND_ALLPROP_BODY: &str = r#"<?xml version="1.0" encoding="utf-8" ?><propfind xmlns="DAV:"><allprop/></propfind>"#;

/// PROPFIND 请求体的 Content-Type
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// Depth 请求头名
pub const DEPTH_HEADER: &str = "Depth";
