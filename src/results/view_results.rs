use crate::results::server_results::ResponseHeaders;
use crate::results::streams::ByteStream;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRow {
    pub key: Value,
    pub value: Value,
}

impl ViewRow {
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult {
    rows: Vec<ViewRow>,
    headers: ResponseHeaders,
}

impl ViewResult {
    pub(crate) fn new(rows: Vec<ViewRow>, headers: ResponseHeaders) -> Self {
        Self { rows, headers }
    }

    pub fn rows(&self) -> &[ViewRow] {
        &self.rows
    }

    pub fn headers(&self) -> ResponseHeaders {
        self.headers
    }

    pub fn into_rows(self) -> Vec<ViewRow> {
        self.rows
    }
}

/// A list's document body plus the byte stream the serialized body is pushed
/// onto after the configured delay.
#[derive(Debug)]
pub struct ListResult {
    doc: Value,
    headers: ResponseHeaders,
    body: ByteStream,
}

impl ListResult {
    pub(crate) fn new(doc: Value, headers: ResponseHeaders, body: ByteStream) -> Self {
        Self { doc, headers, body }
    }

    pub fn doc(&self) -> &Value {
        &self.doc
    }

    pub fn headers(&self) -> ResponseHeaders {
        self.headers
    }

    pub fn into_body(self) -> ByteStream {
        self.body
    }
}
