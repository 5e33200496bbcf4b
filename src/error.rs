/*
 *
 *  * Copyright (c) 2025 Couchbase, Inc.
 *  *
 *  * Licensed under the Apache License, Version 2.0 (the "License");
 *  * you may not use this file except in compliance with the License.
 *  * You may obtain a copy of the License at
 *  *
 *  *    http://www.apache.org/licenses/LICENSE-2.0
 *  *
 *  * Unless required by applicable law or agreed to in writing, software
 *  * distributed under the License is distributed on an "AS IS" BASIS,
 *  * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  * See the License for the specific language governing permissions and
 *  * limitations under the License.
 *
 */

use crate::fixture::DeclaredError;
use http::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};
use std::error::Error as StdError;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn document_not_found() -> Self {
        Self::new(ErrorKind::DocumentNotFound)
    }

    pub(crate) fn document_conflict() -> Self {
        Self::new(ErrorKind::DocumentConflict)
    }

    pub(crate) fn view_not_found() -> Self {
        Self::new(ErrorKind::ViewNotFound)
    }

    pub(crate) fn list_not_found() -> Self {
        Self::new(ErrorKind::ListNotFound)
    }

    pub(crate) fn authentication_failure() -> Self {
        Self::new(ErrorKind::AuthenticationFailure)
    }

    pub(crate) fn invalid_argument(arg: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(InvalidArgumentErrorKind {
            msg: msg.into(),
            arg: Some(arg.into()),
        }))
    }

    pub(crate) fn from_declared(declared: &DeclaredError) -> Self {
        Self::new(ErrorKind::FixtureDeclared(FixtureDeclaredErrorKind {
            message: declared.message.clone(),
            status_code: declared.status_code,
        }))
    }

    // We don't use a From impl as it'd be a blanket coverage and we want to
    // distinguish encoding from decoding.
    pub(crate) fn encoding_failure_from_serde(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::EncodingFailure(format!("encoding failed: {e}")))
    }

    // We don't use a From impl as it'd be a blanket coverage and we want to
    // distinguish encoding from decoding.
    pub(crate) fn decoding_failure_from_serde(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::DecodingFailure(format!("decoding failed: {e}")))
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind.as_ref() {
            ErrorKind::DocumentNotFound => StatusCode::NOT_FOUND,
            ErrorKind::DocumentConflict => StatusCode::CONFLICT,
            ErrorKind::ViewNotFound => StatusCode::NOT_FOUND,
            ErrorKind::ListNotFound => StatusCode::NOT_FOUND,
            ErrorKind::AuthenticationFailure => StatusCode::UNAUTHORIZED,
            ErrorKind::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ErrorKind::FixtureDeclared(declared) => {
                StatusCode::from_u16(declared.status_code)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ErrorKind::EncodingFailure(_) | ErrorKind::DecodingFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The body a real client would have surfaced for this failure. The
    /// original double used three distinct shapes depending on the call site
    /// and downstream assertions depend on the exact field names, so each kind
    /// maps onto its historical shape.
    pub fn wire_body(&self) -> WireErrorBody {
        match self.kind.as_ref() {
            ErrorKind::ViewNotFound => WireErrorBody::Query {
                err: StatusCode::NOT_FOUND.as_u16(),
                doc: None,
            },
            ErrorKind::ListNotFound => WireErrorBody::Query {
                err: StatusCode::NOT_FOUND.as_u16(),
                doc: Some(json!({})),
            },
            ErrorKind::AuthenticationFailure => WireErrorBody::Auth {
                status_code: StatusCode::UNAUTHORIZED.as_u16(),
                message: self.kind.to_string(),
            },
            _ => WireErrorBody::Document {
                message: self.kind.to_string(),
                status_code: self.status_code().as_u16(),
            },
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl StdError for Error {}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    DocumentNotFound,
    DocumentConflict,
    ViewNotFound,
    ListNotFound,
    AuthenticationFailure,
    InvalidArgument(InvalidArgumentErrorKind),
    FixtureDeclared(FixtureDeclaredErrorKind),
    EncodingFailure(String),
    DecodingFailure(String),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ErrorKind::InvalidArgument(invalid_arg_kind) => {
                return write!(f, "{}", invalid_arg_kind.msg);
            }
            ErrorKind::FixtureDeclared(declared) => {
                return write!(f, "{}", declared.message);
            }
            ErrorKind::EncodingFailure(msg) => return write!(f, "encoding failure: {msg}"),
            ErrorKind::DecodingFailure(msg) => return write!(f, "decoding failure: {msg}"),
            ErrorKind::DocumentNotFound => "Document not found",
            ErrorKind::DocumentConflict => "Document update conflict",
            ErrorKind::ViewNotFound => "View not found",
            ErrorKind::ListNotFound => "List not found",
            ErrorKind::AuthenticationFailure => "name or password is incorrect",
        };

        write!(f, "{msg}")
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InvalidArgumentErrorKind {
    pub(crate) msg: String,
    pub arg: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FixtureDeclaredErrorKind {
    pub message: String,
    pub status_code: u16,
}

/// Serialized forms matching the original double byte-for-byte: document
/// lifecycle failures carry `message`/`status-code`, view and list lookups a
/// bare numeric `err` (lists with an empty `doc`), authentication a
/// `status_code`/`message` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireErrorBody {
    Document {
        message: String,
        #[serde(rename = "status-code")]
        status_code: u16,
    },
    Query {
        err: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        doc: Option<Value>,
    },
    Auth {
        status_code: u16,
        message: String,
    },
}
