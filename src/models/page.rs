//! Typed comment page and the single parse step for the backend's
//! response envelopes.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

use super::comment::{string_field, Comment, RawComment};

/// One page of comments from the cursor-paginated endpoint. `next_page_id`
/// is an opaque cursor, only ever compared for equality.
#[derive(Debug, Clone)]
pub struct CommentPage {
    pub items: Vec<Comment>,
    pub has_more: bool,
    pub next_page_id: Option<String>,
    pub page_id: Option<String>,
    pub total: u32,
    pub amount: u32,
}

impl CommentPage {
    /// Parses a comments response body. The backend returns one of:
    ///
    /// - `{ data: { data: [...], hasMore, nextPageId, total, amount }, errorCode }`
    /// - `{ data: [...], hasMore, nextPageId, total }`
    /// - `{ items: [...], hasMore, nextPageId, total }`
    /// - a bare array
    ///
    /// Anything else is a schema violation and fails the call.
    pub fn from_json(value: Value) -> Result<Self> {
        let envelope: CommentEnvelope = serde_json::from_value(value)?;
        Ok(envelope.into())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CommentEnvelope {
    Nested { data: PageBody },
    Flat(PageBody),
    Bare(Vec<RawComment>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageBody {
    #[serde(alias = "items")]
    data: Vec<RawComment>,
    #[serde(default)]
    has_more: bool,
    #[serde(default, deserialize_with = "string_field")]
    next_page_id: Option<String>,
    #[serde(default, deserialize_with = "string_field")]
    page_id: Option<String>,
    #[serde(default)]
    total: u32,
    #[serde(default)]
    amount: u32,
}

impl From<CommentEnvelope> for CommentPage {
    fn from(envelope: CommentEnvelope) -> Self {
        let body = match envelope {
            CommentEnvelope::Nested { data } => data,
            CommentEnvelope::Flat(body) => body,
            CommentEnvelope::Bare(items) => PageBody {
                data: items,
                has_more: false,
                next_page_id: None,
                page_id: None,
                total: 0,
                amount: 0,
            },
        };
        Self {
            items: body.data.into_iter().map(Comment::from).collect(),
            has_more: body.has_more,
            next_page_id: body.next_page_id,
            page_id: body.page_id,
            total: body.total,
            amount: body.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CommentPage;
    use serde_json::json;

    #[test]
    fn nested_envelope_parses() {
        let page = CommentPage::from_json(json!({
            "data": {
                "data": [{ "id": 1 }, { "id": 2 }],
                "hasMore": true,
                "nextPageId": 2,
                "pageId": null,
                "total": 5,
                "amount": 2
            },
            "errorCode": null
        }))
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, "2");
        assert!(page.has_more);
        assert_eq!(page.next_page_id.as_deref(), Some("2"));
        assert_eq!(page.total, 5);
        assert_eq!(page.amount, 2);
    }

    #[test]
    fn flat_envelope_parses() {
        let page = CommentPage::from_json(json!({
            "data": [{ "id": "a" }],
            "hasMore": false,
            "total": 1
        }))
        .unwrap();

        assert_eq!(page.items.len(), 1);
        assert!(!page.has_more);
        assert!(page.next_page_id.is_none());
    }

    #[test]
    fn items_envelope_parses() {
        let page = CommentPage::from_json(json!({
            "items": [{ "id": "a" }, { "id": "b" }],
            "hasMore": true,
            "nextPageId": "b"
        }))
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_page_id.as_deref(), Some("b"));
    }

    #[test]
    fn bare_array_parses_as_final_page() {
        let page = CommentPage::from_json(json!([{ "id": "a" }])).unwrap();

        assert_eq!(page.items.len(), 1);
        assert!(!page.has_more);
        assert!(page.next_page_id.is_none());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn unknown_shapes_fail_instead_of_defaulting() {
        assert!(CommentPage::from_json(json!({ "rows": [] })).is_err());
        assert!(CommentPage::from_json(json!("nonsense")).is_err());
    }
}
