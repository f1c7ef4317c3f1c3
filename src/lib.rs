/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口：WebDAV 客户端门面
pub use internal::client::structs::webdav_client::WebdavClient;
pub use internal::client::structs::byte_stream::ByteStream;

pub mod config {
    use crate::internal;
    pub use internal::config::structs::webdav_config::WebdavConfig;
    pub use internal::config::functions::resolve_url::resolve_url;
}

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::credential::Credential;
}

pub mod error {
    use crate::internal;
    pub use internal::error::*;
}

pub mod item {
    use crate::internal;
    pub use internal::item::structs::item::*;
}

/// 对外提供webdav基础访问能力，不能限制死在客户端门面中，以防有人自己要用
pub mod webdav {
    pub mod functions {
        use crate::internal;
        pub use internal::webdav::functions::parse_multi_status::*;
        pub use internal::webdav::functions::send_request::*;
    }

    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod traits {
        pub use crate::internal::webdav::raw_xml::impl_multi_status::*;
    }

    pub mod structs {
        pub use crate::internal::webdav::raw_xml::raw_file::*;
    }
}
