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

use crate::clients::{lock_state, missing_fixture, SharedFixture};
use crate::error;
use crate::fixture::FixtureDoc;
use crate::options::document_options::{DestroyOptions, GetOptions, InsertOptions};
use crate::options::server_options::LatencyProfile;
use crate::options::view_options::ViewOptions;
use crate::results::document_results::{AttachmentStub, GetResult, HeadResult, MutationResult};
use crate::results::server_results::ResponseHeaders;
use crate::results::streams::ByteStream;
use crate::results::view_results::{ListResult, ViewResult, ViewRow};
use bytes::Bytes;
use http::StatusCode;
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tracing::debug;

const FIXED_REV: &str = "1";
const FIXED_ETAG: &str = "\"0001\"";
// What a revision-qualified get reports instead of real content.
const ATTACHMENT_LENGTH_PLACEHOLDER: u64 = 10;

#[derive(Clone)]
pub(crate) struct DatabaseClient {
    fixture: SharedFixture,
    name: String,
    latency: LatencyProfile,
}

impl DatabaseClient {
    pub fn new(fixture: SharedFixture, name: String, latency: LatencyProfile) -> Self {
        Self {
            fixture,
            name,
            latency,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shared_fixture(&self) -> SharedFixture {
        self.fixture.clone()
    }

    pub async fn insert(
        &self,
        id: String,
        doc: Value,
        opts: InsertOptions,
    ) -> error::Result<MutationResult> {
        debug!("Insert against {}: id={id}", self.name);

        // Design documents never touch the fixture rows.
        if is_design_document(&id, &doc) {
            return Ok(MutationResult::new(Some(id), FIXED_REV, StatusCode::OK));
        }

        if id.is_empty() {
            return Err(error::Error::document_not_found());
        }

        let mut state = lock_state(&self.fixture);
        let data = state.data.as_mut().ok_or_else(missing_fixture)?;

        let Some(i) = data.position(&id) else {
            let row = FixtureDoc::new(id.clone(), doc).inserted(true);
            data.rows.push(row);
            return Ok(MutationResult::new(Some(id), FIXED_REV, StatusCode::CREATED));
        };

        let row = &mut data.rows[i];
        if row.inserted && opts.rev.is_none() {
            return Err(error::Error::document_conflict());
        }

        propagate_blob_timestamp(&mut row.data, &doc);

        if let Some(declared) = row.declared_insert_error() {
            return Err(error::Error::from_declared(declared));
        }

        row.inserted = true;
        Ok(MutationResult::new(Some(id), FIXED_REV, StatusCode::OK))
    }

    pub async fn get(&self, id: String, opts: GetOptions) -> error::Result<GetResult> {
        debug!("Get against {}: id={id}", self.name);

        let mut state = lock_state(&self.fixture);
        let data = state.data.as_mut().ok_or_else(missing_fixture)?;

        let Some(i) = data.position(&id) else {
            return Err(error::Error::document_not_found());
        };

        let row = &mut data.rows[i];
        if !row.inserted {
            return Err(error::Error::document_not_found());
        }

        let declared = row.declared_error().map(error::Error::from_declared);

        if opts.rev.is_none() {
            // The attachment reference is written back into the fixture so a
            // test can assert the store round-tripped it, even when the read
            // itself is declared to fail.
            stamp_blob_attachment(&mut row.data, &id);
            if let Some(err) = declared {
                return Err(err);
            }
            Ok(GetResult::new(
                row.data.clone(),
                row.raw_data.clone().map(AttachmentStub::Content),
                Some(FIXED_REV.to_string()),
            ))
        } else {
            if let Some(err) = declared {
                return Err(err);
            }
            Ok(GetResult::new(
                json!({"metadata": {}}),
                Some(AttachmentStub::Length(ATTACHMENT_LENGTH_PLACEHOLDER)),
                None,
            ))
        }
    }

    pub async fn head(&self, id: String) -> error::Result<HeadResult> {
        // Only id presence is checked, never existence.
        if id.is_empty() {
            return Err(error::Error::invalid_argument("id", "Missing ID"));
        }
        Ok(HeadResult::new(FIXED_ETAG))
    }

    /// Marks the document uninserted and, after the configured delay, hands
    /// back the payload it held.
    pub async fn destroy(&self, id: String, _opts: DestroyOptions) -> error::Result<Value> {
        debug!("Destroy against {}: id={id}", self.name);

        let prior = {
            let mut state = lock_state(&self.fixture);
            let data = state.data.as_mut().ok_or_else(missing_fixture)?;

            let Some(i) = data.position(&id) else {
                return Err(error::Error::document_not_found());
            };

            let row = &mut data.rows[i];
            if !row.inserted {
                return Err(error::Error::document_not_found());
            }
            if let Some(declared) = row.declared_error() {
                return Err(error::Error::from_declared(declared));
            }

            row.inserted = false;
            row.data.clone()
        };

        tokio::time::sleep(self.latency.destroy).await;
        Ok(prior)
    }

    pub async fn view(
        &self,
        design: &str,
        view_name: &str,
        opts: ViewOptions,
    ) -> error::Result<ViewResult> {
        debug!("View against {}: {design}/{view_name}", self.name);

        // Snapshot under the lock; user view functions run outside it.
        let (views, fixture_rows) = {
            let state = lock_state(&self.fixture);
            (
                state.views.clone(),
                state.data.as_ref().map(|data| data.rows.clone()),
            )
        };

        let Some(views) = views else {
            // Default view: every fixture row in fixture order, params ignored.
            let rows = fixture_rows.ok_or_else(missing_fixture)?;
            let rows = rows
                .iter()
                .map(|row| {
                    serde_json::to_value(row)
                        .map(|value| ViewRow::new(Value::Array(Vec::new()), value))
                        .map_err(error::Error::encoding_failure_from_serde)
                })
                .collect::<error::Result<Vec<_>>>()?;
            return Ok(ViewResult::new(rows, ResponseHeaders::new(StatusCode::OK)));
        };

        let name = format!("{design}/{view_name}");
        let Some(descriptor) = views.iter().find(|view| view.name == name) else {
            return Err(error::Error::view_not_found());
        };

        let source = if let Some(file) = &descriptor.file {
            let text = tokio::fs::read_to_string(file).await.map_err(|e| {
                error::Error::invalid_argument("file", format!("failed to read view rows: {e}"))
            })?;
            serde_json::from_str(&text).map_err(error::Error::decoding_failure_from_serde)?
        } else if let Some(rows) = &descriptor.rows {
            rows.clone()
        } else {
            fixture_rows.ok_or_else(missing_fixture)?
        };

        let mut rows = (descriptor.func)(&source);

        if let (Some(start), Some(end)) = (&opts.start_key, &opts.end_key) {
            rows.retain(|row| key_within_range(&row.key, start, end));
            rows.sort_by_key(|row| joined_key(&row.key));
        }

        Ok(ViewResult::new(rows, ResponseHeaders::new(StatusCode::OK)))
    }

    pub async fn view_with_list(
        &self,
        design: &str,
        view_name: &str,
        list_name: &str,
        opts: ViewOptions,
    ) -> error::Result<ListResult> {
        debug!("List against {}: {design}/{list_name}", self.name);

        let lists = { lock_state(&self.fixture).lists.clone() };
        let Some(lists) = lists else {
            return Err(error::Error::list_not_found());
        };

        let name = format!("{design}/{list_name}");
        let Some(descriptor) = lists.iter().find(|list| list.name == name) else {
            return Err(error::Error::list_not_found());
        };

        let view_result = self.view(design, view_name, opts).await?;
        let outcome = (descriptor.func)(&view_result);

        let payload =
            serde_json::to_vec(&outcome.doc).map_err(error::Error::encoding_failure_from_serde)?;
        let (tx, rx) = mpsc::channel(1);
        let delay = self.latency.list_stream;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Bytes::from(payload)).await;
        });

        Ok(ListResult::new(
            outcome.doc,
            outcome.headers,
            ByteStream::new(rx),
        ))
    }

    pub async fn insert_attachment(
        &self,
        id: &str,
        name: &str,
        content_type: &str,
    ) -> error::Result<MutationResult> {
        debug!("Attachment insert against {}: id={id} name={name}", self.name);

        if id.is_empty() || name.is_empty() || content_type.is_empty() {
            return Err(error::Error::document_not_found());
        }
        Ok(MutationResult::new(
            Some(id.to_string()),
            FIXED_REV,
            StatusCode::OK,
        ))
    }

    pub async fn get_attachment(&self, id: &str, name: &str) -> error::Result<ByteStream> {
        debug!("Attachment get against {}: id={id} name={name}", self.name);

        enum Source {
            File(std::path::PathBuf),
            Bytes(Bytes),
        }

        let source = {
            let state = lock_state(&self.fixture);
            let data = state.data.as_ref().ok_or_else(missing_fixture)?;

            let Some(i) = data.position(id) else {
                return Err(error::Error::document_not_found());
            };

            let row = &data.rows[i];
            if let Some(file) = &row.file {
                Source::File(file.clone())
            } else if let Some(raw) = &row.raw_data {
                Source::Bytes(raw.clone())
            } else {
                return Err(error::Error::document_not_found());
            }
        };

        match source {
            Source::File(path) => {
                let bytes = tokio::fs::read(&path).await.map_err(|e| {
                    error::Error::invalid_argument(
                        "file",
                        format!("failed to read attachment: {e}"),
                    )
                })?;
                Ok(ByteStream::from_bytes(Bytes::from(bytes)))
            }
            Source::Bytes(bytes) => Ok(ByteStream::from_bytes(bytes)),
        }
    }

    pub async fn destroy_attachment(
        &self,
        _id: &str,
        _name: &str,
        _rev: Option<&str>,
    ) -> error::Result<Value> {
        Ok(json!({}))
    }
}

fn is_design_document(id: &str, doc: &Value) -> bool {
    id.starts_with("_design/") || doc.get("views").is_some() || doc.get("lists").is_some()
}

const BLOB_METADATA_PTR: &str = "/metadata/datastore/blobmetadata";

// Emulates a real store copying attachment metadata on write. Only fixture
// rows that carry a metadata object participate.
fn propagate_blob_timestamp(row_data: &mut Value, incoming: &Value) {
    if row_data.get("metadata").is_none() {
        return;
    }
    let Some(timestamp) = incoming
        .pointer(&format!("{BLOB_METADATA_PTR}/timestamp"))
        .cloned()
    else {
        return;
    };
    if let Some(Value::Object(blob)) = row_data.pointer_mut(BLOB_METADATA_PTR) {
        blob.insert("timestamp".to_string(), timestamp);
    }
}

fn stamp_blob_attachment(row_data: &mut Value, id: &str) {
    if row_data.get("metadata").is_none() {
        return;
    }
    if let Some(Value::Object(blob)) = row_data.pointer_mut(BLOB_METADATA_PTR) {
        blob.insert("attachment".to_string(), json!({"id": id, "rev": FIXED_REV}));
    }
}

fn component_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn joined_key(key: &Value) -> String {
    match key {
        Value::Array(parts) => parts
            .iter()
            .map(component_str)
            .collect::<Vec<_>>()
            .join(","),
        other => component_str(other),
    }
}

fn first_component(key: &Value) -> Option<&Value> {
    match key {
        Value::Array(parts) => parts.first(),
        other => Some(other),
    }
}

// Inclusive on both ends; a null upper bound means unbounded above.
fn key_within_range(key: &Value, start: &Value, end: &Value) -> bool {
    let Some(first) = first_component(key) else {
        return false;
    };
    let first = component_str(first);

    if let Some(lower) = first_component(start) {
        if !lower.is_null() && first < component_str(lower) {
            return false;
        }
    }
    if let Some(upper) = first_component(end) {
        if !upper.is_null() && first > component_str(upper) {
            return false;
        }
    }
    true
}
