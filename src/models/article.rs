//! Article models: the wire shape and the normalized list/detail views.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::Category;
use super::comment::{flag_field, string_field, Comment, RawComment};

/// Article exactly as the content API returns it.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default, deserialize_with = "string_field")]
    pub canonical: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub upperdeck: Option<String>,
    #[serde(default)]
    pub article_lead: Option<String>,
    #[serde(default)]
    pub teaser: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub publish_dt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_desc: Option<String>,
    #[serde(default)]
    pub meta_keyword: Option<String>,
    #[serde(default, deserialize_with = "flag_field")]
    pub allow_comment: bool,
    #[serde(default, deserialize_with = "flag_field")]
    pub display_emoticon: bool,
    #[serde(default)]
    pub lang_id: Option<String>,
    #[serde(default)]
    pub documents: Vec<ArticleDocument>,
    #[serde(default)]
    pub body: Vec<ArticleBodyBlock>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tags: Vec<Value>,
    #[serde(default)]
    pub comments: Vec<RawComment>,
}

/// Document attached to an article; the default one supplies the featured image.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDocument {
    #[serde(default, deserialize_with = "string_field")]
    pub canonical: Option<String>,
    #[serde(default)]
    pub is_default: Option<i64>,
}

/// One block of rich body content.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ArticleBodyBlock {
    #[serde(default)]
    pub body: Option<String>,
}

/// Minimal article fields used by list/card views.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub canonical: String,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub image: String,
    pub date: String,
    pub author: String,
}

impl ArticleSummary {
    pub(crate) fn from_raw(raw: RawArticle, base_url: &str) -> Self {
        Self {
            canonical: raw.canonical.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            category: raw
                .upperdeck
                .unwrap_or_else(|| "Uncategorized".to_string()),
            excerpt: raw.article_lead.or(raw.teaser).unwrap_or_default(),
            image: raw
                .image_path
                .map(|path| format!("{base_url}{path}"))
                .unwrap_or_default(),
            date: raw.publish_dt.unwrap_or_default(),
            author: raw.author.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Full article view with rich content, related data and embedded comments.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    pub canonical: String,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub image: String,
    pub date: String,
    pub author: String,
    pub meta_title: String,
    pub meta_desc: String,
    pub meta_keyword: String,
    pub allow_comment: bool,
    pub display_emoticon: bool,
    pub lang_id: String,
    pub content: String,
    pub documents: Vec<ArticleDocument>,
    pub categories: Vec<Category>,
    pub tags: Vec<Value>,
    pub body: Vec<ArticleBodyBlock>,
    pub comments: Vec<Comment>,
}

impl ArticleDetail {
    pub(crate) fn from_raw(raw: RawArticle, base_url: &str) -> Self {
        // Featured image comes from the default document when one exists,
        // otherwise from the plain image path.
        let featured = raw
            .documents
            .iter()
            .find(|doc| doc.is_default == Some(1))
            .and_then(|doc| doc.canonical.as_deref())
            .zip(raw.canonical.as_deref())
            .map(|(doc, article)| format!("{base_url}/article/{article}/document/{doc}"));
        let image = featured
            .or_else(|| {
                raw.image_path
                    .as_ref()
                    .map(|path| format!("{base_url}{path}"))
            })
            .unwrap_or_default();

        // Main content is the first body block, falling back to the lead.
        let content = raw
            .body
            .first()
            .and_then(|block| block.body.clone())
            .filter(|text| !text.is_empty())
            .or_else(|| raw.article_lead.clone())
            .unwrap_or_default();

        Self {
            canonical: raw.canonical.unwrap_or_default(),
            title: raw.title.clone().unwrap_or_default(),
            category: raw
                .upperdeck
                .unwrap_or_else(|| "Uncategorized".to_string()),
            excerpt: raw
                .article_lead
                .clone()
                .or(raw.teaser)
                .unwrap_or_default(),
            image,
            date: raw.publish_dt.unwrap_or_default(),
            author: raw.author.unwrap_or_else(|| "Unknown".to_string()),
            meta_title: raw
                .meta_title
                .or(raw.title)
                .unwrap_or_default(),
            meta_desc: raw
                .meta_desc
                .or(raw.article_lead)
                .unwrap_or_default(),
            meta_keyword: raw.meta_keyword.unwrap_or_default(),
            allow_comment: raw.allow_comment,
            display_emoticon: raw.display_emoticon,
            lang_id: raw.lang_id.unwrap_or_else(|| "en".to_string()),
            content,
            documents: raw.documents,
            categories: raw.categories,
            tags: raw.tags,
            body: raw.body,
            comments: raw.comments.into_iter().map(Comment::from).collect(),
        }
    }
}
