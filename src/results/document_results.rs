use crate::error;
use crate::results::server_results::ResponseHeaders;
use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    id: Option<String>,
    rev: String,
    headers: ResponseHeaders,
}

impl MutationResult {
    pub(crate) fn new(id: Option<String>, rev: impl Into<String>, status: StatusCode) -> Self {
        Self {
            id,
            rev: rev.into(),
            headers: ResponseHeaders::new(status),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn rev(&self) -> &str {
        &self.rev
    }

    pub fn headers(&self) -> ResponseHeaders {
        self.headers
    }
}

/// What the double returns in place of a document attachment reference: the
/// full payload on a plain get, only a length placeholder on a
/// revision-qualified get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentStub {
    Content(Bytes),
    Length(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetResult {
    content: Value,
    attachment: Option<AttachmentStub>,
    rev: Option<String>,
}

impl GetResult {
    pub(crate) fn new(content: Value, attachment: Option<AttachmentStub>, rev: Option<String>) -> Self {
        Self {
            content,
            attachment,
            rev,
        }
    }

    pub fn content_as<V: DeserializeOwned>(&self) -> error::Result<V> {
        serde_json::from_value(self.content.clone())
            .map_err(error::Error::decoding_failure_from_serde)
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn attachment(&self) -> Option<&AttachmentStub> {
        self.attachment.as_ref()
    }

    pub fn rev(&self) -> Option<&str> {
        self.rev.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadResult {
    etag: String,
}

impl HeadResult {
    pub(crate) fn new(etag: impl Into<String>) -> Self {
        Self { etag: etag.into() }
    }

    pub fn etag(&self) -> &str {
        &self.etag
    }
}
