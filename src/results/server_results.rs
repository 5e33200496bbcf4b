use http::StatusCode;

/// The slice of response headers the double reports: just the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeaders {
    status: StatusCode,
}

impl ResponseHeaders {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
        }
    }
}

/// Result of the canned database admin calls (create, destroy); carries only
/// the status the original reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResult {
    headers: ResponseHeaders,
}

impl StatusResult {
    pub(crate) fn new(status: StatusCode) -> Self {
        Self {
            headers: ResponseHeaders::new(status),
        }
    }

    pub fn headers(&self) -> ResponseHeaders {
        self.headers
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidsResult {
    uuids: Vec<String>,
}

impl UuidsResult {
    pub(crate) fn new(uuids: Vec<String>) -> Self {
        Self { uuids }
    }

    pub fn uuids(&self) -> &[String] {
        &self.uuids
    }
}
