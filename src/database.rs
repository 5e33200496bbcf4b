use crate::attachment::AttachmentStore;
use crate::clients::DatabaseClient;
use crate::error;
use serde_json::{json, Value};

/// A document-scoped handle, the double of a `use`/`scope`d database.
#[derive(Clone)]
pub struct Database {
    pub(crate) client: DatabaseClient,
}

impl Database {
    pub(crate) fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    pub fn name(&self) -> &str {
        self.client.name()
    }

    pub fn attachments(&self) -> AttachmentStore {
        AttachmentStore::new(self.client.clone())
    }

    pub async fn info(&self) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn replicate(
        &self,
        _target: impl AsRef<str>,
        _params: impl Into<Option<Value>>,
    ) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn compact(&self) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn changes(&self, _params: impl Into<Option<Value>>) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn follow(&self, _params: impl Into<Option<Value>>) -> error::Result<Value> {
        Ok(json!({}))
    }
}
