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

//! The injected data set every call resolves against.
//!
//! A [`FixtureSet`] is installed on a server handle before the test body
//! runs and replaced between tests. Rows are never removed by the emulated
//! operations, only flagged uninserted, so a test can assert against the
//! full set afterwards.

use crate::results::server_results::ResponseHeaders;
use crate::results::view_results::{ViewResult, ViewRow};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureSet {
    #[serde(default)]
    pub rows: Vec<FixtureDoc>,
    #[serde(default)]
    pub uuids: Vec<String>,
}

impl FixtureSet {
    pub fn new(rows: Vec<FixtureDoc>, uuids: Vec<String>) -> Self {
        Self { rows, uuids }
    }

    // First match wins; duplicate ids are undefined behavior.
    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }
}

/// One fixture-defined document. Field names on disk match the historical
/// fixture files (`datasetid`, `err`, `insertErr`, `rawdata`), so existing
/// JSON row sets load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDoc {
    #[serde(rename = "datasetid")]
    pub id: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub inserted: bool,
    #[serde(rename = "err", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<DeclaredError>,
    #[serde(rename = "insertErr", default, skip_serializing_if = "Option::is_none")]
    pub insert_error: Option<DeclaredError>,
    #[serde(rename = "rawdata", default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl FixtureDoc {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            data,
            inserted: false,
            error: None,
            insert_error: None,
            raw_data: None,
            file: None,
        }
    }

    pub fn inserted(mut self, inserted: bool) -> Self {
        self.inserted = inserted;
        self
    }

    pub fn error(mut self, error: DeclaredError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn insert_error(mut self, insert_error: DeclaredError) -> Self {
        self.insert_error = Some(insert_error);
        self
    }

    pub fn raw_data(mut self, raw_data: impl Into<Bytes>) -> Self {
        self.raw_data = Some(raw_data.into());
        self
    }

    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub(crate) fn declared_error(&self) -> Option<&DeclaredError> {
        self.error.as_ref()
    }

    // An insert error only applies when a read error is also declared; an
    // `insertErr` on its own is ignored. Historical behavior, kept as-is.
    pub(crate) fn declared_insert_error(&self) -> Option<&DeclaredError> {
        self.error.as_ref()?;
        self.insert_error.as_ref().or(self.error.as_ref())
    }
}

/// A failure the fixture forces for a given document, overriding whatever the
/// emulation would otherwise have computed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeclaredError {
    pub message: String,
    #[serde(rename = "status-code")]
    pub status_code: u16,
}

impl DeclaredError {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}

pub type ViewFn = Arc<dyn Fn(&[FixtureDoc]) -> Vec<ViewRow> + Send + Sync>;

pub type ListFn = Arc<dyn Fn(&ViewResult) -> ListOutcome + Send + Sync>;

/// A named transformation of row data into key/value pairs, looked up by
/// exact `"design/view"` match. A `file` source reloads the row set from
/// disk at query time; otherwise the descriptor's own rows are used, falling
/// back to the shared fixture rows.
#[derive(Clone)]
pub struct ViewDescriptor {
    pub name: String,
    pub func: ViewFn,
    pub rows: Option<Vec<FixtureDoc>>,
    pub file: Option<PathBuf>,
}

impl ViewDescriptor {
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(&[FixtureDoc]) -> Vec<ViewRow> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
            rows: None,
            file: None,
        }
    }

    pub fn rows(mut self, rows: Vec<FixtureDoc>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl Debug for ViewDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewDescriptor")
            .field("name", &self.name)
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

/// A named transformation applied to a view's output, looked up by exact
/// `"design/list"` match.
#[derive(Clone)]
pub struct ListDescriptor {
    pub name: String,
    pub func: ListFn,
}

impl ListDescriptor {
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(&ViewResult) -> ListOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }
}

impl Debug for ListDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// What a list function produces: a document body plus the headers the list
/// wants surfaced alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOutcome {
    pub doc: Value,
    pub headers: ResponseHeaders,
}

impl ListOutcome {
    pub fn new(doc: Value, headers: ResponseHeaders) -> Self {
        Self { doc, headers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_error_requires_read_error() {
        let alone = FixtureDoc::new("a", json!({})).insert_error(DeclaredError::new("ins", 500));
        assert!(alone.declared_insert_error().is_none());

        let both = FixtureDoc::new("b", json!({}))
            .error(DeclaredError::new("read", 500))
            .insert_error(DeclaredError::new("ins", 503));
        assert_eq!(both.declared_insert_error().unwrap().message, "ins");

        let read_only = FixtureDoc::new("c", json!({})).error(DeclaredError::new("read", 500));
        assert_eq!(read_only.declared_insert_error().unwrap().message, "read");
    }

    #[test]
    fn test_fixture_rows_load_with_historical_field_names() {
        let set: FixtureSet = serde_json::from_value(json!({
            "rows": [
                {
                    "datasetid": "doc-1",
                    "data": {"mimetype": "text/plain"},
                    "err": {"message": "gone", "status-code": 404}
                }
            ],
            "uuids": ["a", "b", "c"]
        }))
        .unwrap();

        assert_eq!(set.rows[0].id, "doc-1");
        assert!(!set.rows[0].inserted);
        assert_eq!(set.rows[0].error.as_ref().unwrap().status_code, 404);
        assert_eq!(set.position("doc-1"), Some(0));
        assert_eq!(set.position("doc-2"), None);
    }
}
