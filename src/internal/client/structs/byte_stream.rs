use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

use crate::internal::error::WebdavError;

/// `download` 返回的响应体数据流
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, WebdavError>> + Send>>;
