//! Content API wire types

use serde::{Deserialize, Serialize};

/// A content template as listed by the Content API
///
/// Only `friendly_name` and `sid` drive resolution; the rest is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub friendly_name: String,
    pub sid: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub date_updated: Option<String>,
}

impl Template {
    pub fn new(friendly_name: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            sid: sid.into(),
            language: None,
            date_updated: None,
        }
    }
}

/// Body of `GET /v1/Content`
#[derive(Debug, Clone, Deserialize)]
pub struct ContentListResponse {
    pub contents: Vec<Template>,
}
