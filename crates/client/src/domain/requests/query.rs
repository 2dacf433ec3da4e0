use serde::{Deserialize, Serialize};

/// Paging and search parameters shared by every listing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindAllQuery {
    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
}

impl Default for FindAllQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search: String::new(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}
