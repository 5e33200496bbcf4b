use crate::clients::{lock_state, missing_fixture, DatabaseClient, FixtureState, SharedFixture};
use crate::error;
use crate::fixture::{FixtureSet, ListDescriptor, ViewDescriptor};
use crate::options::server_options::MockServerOptions;
use crate::results::server_results::{StatusResult, UuidsResult};
use http::StatusCode;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct ServerClient {
    fixture: SharedFixture,
    opts: MockServerOptions,
}

impl ServerClient {
    pub fn new(opts: MockServerOptions) -> Self {
        Self {
            fixture: Arc::new(Mutex::new(FixtureState::default())),
            opts,
        }
    }

    pub fn options(&self) -> &MockServerOptions {
        &self.opts
    }

    pub fn database_client(&self, name: String) -> DatabaseClient {
        DatabaseClient::new(self.fixture.clone(), name, self.opts.latency.clone())
    }

    pub fn set_fixture(&self, data: Option<FixtureSet>) {
        lock_state(&self.fixture).data = data;
    }

    pub fn set_views(&self, views: Option<Vec<ViewDescriptor>>) {
        lock_state(&self.fixture).views = views;
    }

    pub fn set_lists(&self, lists: Option<Vec<ListDescriptor>>) {
        lock_state(&self.fixture).lists = lists;
    }

    pub async fn create_database(&self, name: &str) -> error::Result<StatusResult> {
        debug!("Creating database {name}");
        Ok(StatusResult::new(StatusCode::CREATED))
    }

    pub async fn destroy_database(&self, name: &str) -> error::Result<StatusResult> {
        debug!("Destroying database {name}");
        Ok(StatusResult::new(StatusCode::OK))
    }

    pub async fn get_database(&self, _name: &str) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn list_databases(&self) -> error::Result<Vec<String>> {
        Ok(vec!["dstest".to_string(), "datastore".to_string()])
    }

    pub async fn compact_database(
        &self,
        _name: &str,
        _design: Option<&str>,
    ) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn replicate(
        &self,
        _source: &str,
        _target: &str,
        _params: Option<Value>,
    ) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn changes(&self, _name: &str, _params: Option<Value>) -> error::Result<Value> {
        Ok(json!({}))
    }

    pub async fn follow(&self, _name: &str, _params: Option<Value>) -> error::Result<Value> {
        Ok(json!({}))
    }

    /// Always a single identifier: the fixture's third uuid entry, delivered
    /// after the configured delay.
    pub async fn uuids(&self) -> error::Result<UuidsResult> {
        tokio::time::sleep(self.opts.latency.uuid_fetch).await;

        let uuid = {
            let state = lock_state(&self.fixture);
            let data = state.data.as_ref().ok_or_else(missing_fixture)?;
            data.uuids.get(2).cloned().ok_or_else(|| {
                error::Error::invalid_argument(
                    "uuids",
                    "fixture must supply at least three uuids",
                )
            })?
        };

        Ok(UuidsResult::new(vec![uuid]))
    }

    pub async fn authenticate(&self, username: &str, _password: &str) -> error::Result<()> {
        if username == "xxx" {
            debug!("Rejecting credentials for {username}");
            return Err(error::Error::authentication_failure());
        }
        Ok(())
    }
}
