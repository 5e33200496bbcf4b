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

use crate::clients::ServerClient;
use crate::database::Database;
use crate::error;
use crate::fixture::{FixtureSet, ListDescriptor, ViewDescriptor};
use crate::options::server_options::MockServerOptions;
use crate::results::server_results::{StatusResult, UuidsResult};
use serde_json::Value;

/// The server-level handle, standing in for a connected CouchDB client.
///
/// Nothing is dialed; every call resolves against the fixture installed via
/// [`Server::set_fixture`]. Handles are cheap to clone and share one fixture.
#[derive(Clone)]
pub struct Server {
    client: ServerClient,
}

impl Server {
    pub fn new(opts: impl Into<Option<MockServerOptions>>) -> Self {
        let opts = opts.into().unwrap_or_default();
        Self {
            client: ServerClient::new(opts),
        }
    }

    pub fn config(&self) -> &MockServerOptions {
        self.client.options()
    }

    pub fn database(&self, name: impl Into<String>) -> Database {
        Database::new(self.client.database_client(name.into()))
    }

    /// Alias for [`Server::database`], matching the client being doubled.
    pub fn scope(&self, name: impl Into<String>) -> Database {
        self.database(name)
    }

    /// Installs the fixture set answered by every subsequent call. Passing
    /// `None` clears it; tests replace the fixture between runs rather than
    /// cleaning up documents.
    pub fn set_fixture(&self, data: impl Into<Option<FixtureSet>>) {
        self.client.set_fixture(data.into());
    }

    /// Registers named test views. `None` restores the default view, which
    /// enumerates every fixture row.
    pub fn set_views(&self, views: impl Into<Option<Vec<ViewDescriptor>>>) {
        self.client.set_views(views.into());
    }

    pub fn set_lists(&self, lists: impl Into<Option<Vec<ListDescriptor>>>) {
        self.client.set_lists(lists.into());
    }

    pub async fn create_database(&self, name: impl AsRef<str>) -> error::Result<StatusResult> {
        self.client.create_database(name.as_ref()).await
    }

    pub async fn destroy_database(&self, name: impl AsRef<str>) -> error::Result<StatusResult> {
        self.client.destroy_database(name.as_ref()).await
    }

    pub async fn get_database(&self, name: impl AsRef<str>) -> error::Result<Value> {
        self.client.get_database(name.as_ref()).await
    }

    pub async fn list_databases(&self) -> error::Result<Vec<String>> {
        self.client.list_databases().await
    }

    pub async fn compact_database(
        &self,
        name: impl AsRef<str>,
        design: Option<&str>,
    ) -> error::Result<Value> {
        self.client.compact_database(name.as_ref(), design).await
    }

    pub async fn replicate(
        &self,
        source: impl AsRef<str>,
        target: impl AsRef<str>,
        params: impl Into<Option<Value>>,
    ) -> error::Result<Value> {
        self.client
            .replicate(source.as_ref(), target.as_ref(), params.into())
            .await
    }

    pub async fn changes(
        &self,
        name: impl AsRef<str>,
        params: impl Into<Option<Value>>,
    ) -> error::Result<Value> {
        self.client.changes(name.as_ref(), params.into()).await
    }

    pub async fn follow(
        &self,
        name: impl AsRef<str>,
        params: impl Into<Option<Value>>,
    ) -> error::Result<Value> {
        self.client.follow(name.as_ref(), params.into()).await
    }

    pub async fn uuids(&self) -> error::Result<UuidsResult> {
        self.client.uuids().await
    }

    pub async fn authenticate(
        &self,
        username: impl AsRef<str>,
        password: impl AsRef<str>,
    ) -> error::Result<()> {
        self.client
            .authenticate(username.as_ref(), password.as_ref())
            .await
    }
}
