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

use crate::clients::{lock_state, DatabaseClient, SharedFixture};
use crate::error;
use crate::results::document_results::MutationResult;
use crate::results::streams::ByteStream;
use bytes::BytesMut;
use serde_json::Value;

/// Attachment operations scoped to one database handle.
#[derive(Clone)]
pub struct AttachmentStore {
    client: DatabaseClient,
}

impl AttachmentStore {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Opens a write destination for an attachment body. The call itself
    /// resolves immediately; bytes written to the returned writer land on the
    /// matching fixture document's raw data when the writer closes.
    pub async fn insert(
        &self,
        id: impl Into<String>,
        name: impl AsRef<str>,
        content_type: impl AsRef<str>,
    ) -> error::Result<(MutationResult, AttachmentWriter)> {
        let id = id.into();
        let result = self
            .client
            .insert_attachment(&id, name.as_ref(), content_type.as_ref())
            .await?;
        let writer = AttachmentWriter::new(self.client.shared_fixture(), id);
        Ok((result, writer))
    }

    pub async fn get(
        &self,
        id: impl AsRef<str>,
        name: impl AsRef<str>,
    ) -> error::Result<ByteStream> {
        self.client
            .get_attachment(id.as_ref(), name.as_ref())
            .await
    }

    pub async fn destroy(
        &self,
        id: impl AsRef<str>,
        name: impl AsRef<str>,
        rev: Option<&str>,
    ) -> error::Result<Value> {
        self.client
            .destroy_attachment(id.as_ref(), name.as_ref(), rev)
            .await
    }
}

/// Buffers attachment bytes and persists them onto the matching fixture
/// document when closed. Dropping the writer counts as closing it; bytes for
/// an id with no fixture row are discarded.
#[derive(Debug)]
pub struct AttachmentWriter {
    fixture: SharedFixture,
    doc_id: String,
    buf: BytesMut,
    closed: bool,
}

impl AttachmentWriter {
    pub(crate) fn new(fixture: SharedFixture, doc_id: String) -> Self {
        Self {
            fixture,
            doc_id,
            buf: BytesMut::new(),
            closed: false,
        }
    }

    pub fn write(&mut self, chunk: impl AsRef<[u8]>) {
        self.buf.extend_from_slice(chunk.as_ref());
    }

    pub fn close(mut self) {
        self.persist();
    }

    fn persist(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        let bytes = self.buf.split().freeze();
        let mut state = lock_state(&self.fixture);
        if let Some(data) = state.data.as_mut() {
            if let Some(i) = data.position(&self.doc_id) {
                data.rows[i].raw_data = Some(bytes);
            }
        }
    }
}

impl Drop for AttachmentWriter {
    fn drop(&mut self) {
        self.persist();
    }
}
