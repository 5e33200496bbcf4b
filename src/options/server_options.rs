use std::time::Duration;

/// Configuration for a mock server handle. The `url` is carried for callers
/// that assert against their connection config; nothing is ever dialed.
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct MockServerOptions {
    pub url: Option<String>,
    pub latency: LatencyProfile,
}

impl MockServerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }
}

/// Simulated completion delays. The defaults match the timers the original
/// double hardcoded; tests that don't care about asynchrony can zero them.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct LatencyProfile {
    pub uuid_fetch: Duration,
    pub destroy: Duration,
    pub list_stream: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            uuid_fetch: Duration::from_millis(50),
            destroy: Duration::from_millis(200),
            list_stream: Duration::from_millis(500),
        }
    }
}

impl LatencyProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            uuid_fetch: Duration::ZERO,
            destroy: Duration::ZERO,
            list_stream: Duration::ZERO,
        }
    }

    pub fn uuid_fetch(mut self, uuid_fetch: Duration) -> Self {
        self.uuid_fetch = uuid_fetch;
        self
    }

    pub fn destroy(mut self, destroy: Duration) -> Self {
        self.destroy = destroy;
        self
    }

    pub fn list_stream(mut self, list_stream: Duration) -> Self {
        self.list_stream = list_stream;
        self
    }
}
