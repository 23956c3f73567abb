use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comment exactly as the content API returns it. Ids arrive as strings or
/// numbers depending on the backend version, so they are coerced up front.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    #[serde(default, deserialize_with = "string_field")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_field")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub reply_count: Option<u32>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub comment_value: Option<String>,
    #[serde(default)]
    pub created_dt: Option<String>,
    #[serde(default)]
    pub comment_like: Option<i64>,
    #[serde(default)]
    pub comment_dislike: Option<i64>,
    #[serde(default, deserialize_with = "flag_field")]
    pub is_own_comment: bool,
    #[serde(default, deserialize_with = "string_field")]
    pub modified_dt: Option<String>,
}

/// View-friendly comment produced from the wire shape. Identity is `id`;
/// uniqueness is enforced by callers, not by the source API.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub parent_id: Option<String>,
    pub reply_count: u32,
    pub author: String,
    pub text: String,
    pub created_at: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub is_own: bool,
    pub modified_at: Option<String>,
}

impl From<RawComment> for Comment {
    fn from(raw: RawComment) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            parent_id: raw.parent_id,
            reply_count: raw.reply_count.unwrap_or(0),
            author: raw
                .player_name
                .unwrap_or_else(|| "Anonymous".to_string()),
            text: raw.comment_value.unwrap_or_default(),
            created_at: raw.created_dt.unwrap_or_default(),
            like_count: raw.comment_like.unwrap_or(0),
            dislike_count: raw.comment_dislike.unwrap_or(0),
            is_own: raw.is_own_comment,
            modified_at: raw.modified_dt,
        }
    }
}

impl Comment {
    /// Parses `created_at` into a timestamp. The backend emits RFC 3339 for
    /// newer rows and `YYYY-MM-DD HH:MM:SS` for older ones.
    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%d %H:%M:%S")
                    .map(|naive| naive.and_utc())
                    .ok()
            })
    }
}

/// Coerces a string-or-number JSON field into a non-empty string.
pub(crate) fn string_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|val| match val {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }))
}

/// Coerces a bool-or-number JSON field into a bool.
pub(crate) fn flag_field<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => matches!(text.trim(), "1" | "true"),
        _ => false,
    })
}
