use crate::error;
use crate::fixture::{FixtureSet, ListDescriptor, ViewDescriptor};
use std::sync::{Arc, Mutex, MutexGuard};

mod database_client;
mod server_client;

pub(crate) use database_client::DatabaseClient;
pub(crate) use server_client::ServerClient;

/// The one shared mutable resource. Injected once per test, mutated in place
/// by calls that simulate writes, replaced between tests.
#[derive(Debug, Default)]
pub(crate) struct FixtureState {
    pub(crate) data: Option<FixtureSet>,
    pub(crate) views: Option<Vec<ViewDescriptor>>,
    pub(crate) lists: Option<Vec<ListDescriptor>>,
}

pub(crate) type SharedFixture = Arc<Mutex<FixtureState>>;

// A panic while holding the lock belongs to the panicking test; later calls
// still get to see the fixture.
pub(crate) fn lock_state(fixture: &SharedFixture) -> MutexGuard<'_, FixtureState> {
    fixture.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn missing_fixture() -> error::Error {
    error::Error::invalid_argument("fixture", "no fixture data installed")
}
