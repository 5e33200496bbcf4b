use serde_json::Value;

/// Query parameters for view (and list) evaluation. Keys are JSON values
/// because view keys are arbitrary JSON; range filtering only engages when
/// both ends are supplied.
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct ViewOptions {
    pub start_key: Option<Value>,
    pub end_key: Option<Value>,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_key(mut self, start_key: impl Into<Value>) -> Self {
        self.start_key = Some(start_key.into());
        self
    }

    pub fn end_key(mut self, end_key: impl Into<Value>) -> Self {
        self.end_key = Some(end_key.into());
        self
    }
}
