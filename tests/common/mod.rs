use couchmock::options::server_options::{LatencyProfile, MockServerOptions};
use couchmock::server::Server;
use std::sync::Once;
use std::time::Duration;
use uuid::Uuid;

static INIT: Once = Once::new();

pub fn new_key() -> String {
    Uuid::new_v4().to_string()
}

/// A server with near-zero simulated latency so the suite stays fast.
pub fn test_server() -> Server {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });

    Server::new(
        MockServerOptions::new()
            .url("http://foo:5984")
            .latency(
                LatencyProfile::new()
                    .uuid_fetch(Duration::from_millis(1))
                    .destroy(Duration::from_millis(1))
                    .list_stream(Duration::from_millis(5)),
            ),
    )
}
