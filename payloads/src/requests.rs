use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
}

/// Query parameters for listing posts.
///
/// Pages are 1-indexed, following the `_page`/`_limit` convention of the
/// JSON API the app talks to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostQuery {
    #[serde(rename = "_page")]
    pub page: i64,
    #[serde(rename = "_limit")]
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title_like: Option<String>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            title_like: None,
        }
    }
}

impl PostQuery {
    pub fn page(page: i64) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Renders the query as URL key-value pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("_page".to_string(), self.page.to_string()),
            ("_limit".to_string(), self.limit.to_string()),
        ];
        if let Some(title_like) = &self.title_like {
            pairs.push(("title_like".to_string(), title_like.clone()));
        }
        pairs
    }
}
