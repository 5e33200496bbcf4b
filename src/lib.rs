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

//! An in-memory test double for a CouchDB client. Install a
//! [`fixture::FixtureSet`] on a [`server::Server`] handle and every document,
//! view, list, and attachment call resolves against it, including the error
//! conditions the fixture declares inline.

pub mod attachment;
mod clients;
pub mod database;
pub mod database_crud;
pub mod database_views;
pub mod error;
pub mod fixture;
pub mod options;
pub mod results;
pub mod server;
