use crate::database::Database;
use crate::error;
use crate::options::document_options::{DestroyOptions, GetOptions, InsertOptions};
use crate::results::document_results::{GetResult, HeadResult, MutationResult};
use serde::Serialize;
use serde_json::{json, Value};

impl Database {
    pub async fn insert<V: Serialize>(
        &self,
        id: impl Into<String>,
        doc: V,
        options: impl Into<Option<InsertOptions>>,
    ) -> error::Result<MutationResult> {
        let doc = serde_json::to_value(doc).map_err(error::Error::encoding_failure_from_serde)?;
        let options = options.into().unwrap_or_default();
        self.client.insert(id.into(), doc, options).await
    }

    pub async fn get(
        &self,
        id: impl Into<String>,
        options: impl Into<Option<GetOptions>>,
    ) -> error::Result<GetResult> {
        let options = options.into().unwrap_or_default();
        self.client.get(id.into(), options).await
    }

    pub async fn head(&self, id: impl Into<String>) -> error::Result<HeadResult> {
        self.client.head(id.into()).await
    }

    pub async fn destroy(
        &self,
        id: impl Into<String>,
        options: impl Into<Option<DestroyOptions>>,
    ) -> error::Result<Value> {
        let options = options.into().unwrap_or_default();
        self.client.destroy(id.into(), options).await
    }

    pub async fn copy(
        &self,
        _source: impl AsRef<str>,
        _destination: impl AsRef<str>,
        _params: impl Into<Option<Value>>,
    ) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn bulk(
        &self,
        _docs: Value,
        _params: impl Into<Option<Value>>,
    ) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn all_docs(&self, _params: impl Into<Option<Value>>) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn fetch(
        &self,
        _ids: &[String],
        _params: impl Into<Option<Value>>,
    ) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn show(
        &self,
        _design: impl AsRef<str>,
        _show_name: impl AsRef<str>,
        _id: impl AsRef<str>,
        _params: impl Into<Option<Value>>,
    ) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn update_with_handler(
        &self,
        _design: impl AsRef<str>,
        _handler_name: impl AsRef<str>,
    ) -> error::Result<Value> {
        Ok(json!({}))
    }
}
