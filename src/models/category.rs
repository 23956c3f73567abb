use serde::{Deserialize, Serialize};

use super::comment::string_field;

/// Article category returned by the category list endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, deserialize_with = "string_field")]
    pub canonical: Option<String>,
    #[serde(default, deserialize_with = "string_field")]
    pub name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl Category {
    /// Returns the key used to request articles for this category,
    /// preferring the canonical slug over the display name.
    pub fn key(&self) -> Option<&str> {
        self.canonical.as_deref().or(self.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn key_prefers_canonical_over_name() {
        let with_canonical: Category =
            serde_json::from_value(serde_json::json!({ "canonical": "news", "name": "News" }))
                .unwrap();
        assert_eq!(with_canonical.key(), Some("news"));

        let name_only: Category =
            serde_json::from_value(serde_json::json!({ "name": "News" })).unwrap();
        assert_eq!(name_only.key(), Some("News"));
    }
}
