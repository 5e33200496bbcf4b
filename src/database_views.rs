use crate::database::Database;
use crate::error;
use crate::options::view_options::ViewOptions;
use crate::results::view_results::{ListResult, ViewResult};
use serde_json::{json, Value};

impl Database {
    pub async fn view(
        &self,
        design: impl AsRef<str>,
        view_name: impl AsRef<str>,
        options: impl Into<Option<ViewOptions>>,
    ) -> error::Result<ViewResult> {
        let options = options.into().unwrap_or_default();
        self.client
            .view(design.as_ref(), view_name.as_ref(), options)
            .await
    }

    pub async fn view_with_list(
        &self,
        design: impl AsRef<str>,
        view_name: impl AsRef<str>,
        list_name: impl AsRef<str>,
        options: impl Into<Option<ViewOptions>>,
    ) -> error::Result<ListResult> {
        let options = options.into().unwrap_or_default();
        self.client
            .view_with_list(
                design.as_ref(),
                view_name.as_ref(),
                list_name.as_ref(),
                options,
            )
            .await
    }

    pub async fn compact_view(&self, _design: impl AsRef<str>) -> error::Result<Value> {
        Ok(json!({}))
    }
}
