use crate::auth::SessionResponse;
use crate::config::ContentConfig;
use crate::error::{ContentError, Result};
use crate::models::{
    ArticleDetail, ArticleSummary, Category, Comment, CommentPage, Enveloped, RawArticle,
    RawComment, UserProfile,
};
use crate::rate_limiter::RequestPacer;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

const SESSION_HEADER: &str = "x-session";

#[derive(Clone)]
pub struct ContentClient {
    http: HttpClient,
    config: ContentConfig,
    pacer: RequestPacer,
}

impl ContentClient {
    pub fn new(config: ContentConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        let pacer = RequestPacer::new(config.cooldown);
        Ok(Self {
            http,
            config,
            pacer,
        })
    }

    pub fn new_with_pacer(config: ContentConfig, pacer: RequestPacer) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self {
            http,
            config,
            pacer,
        })
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    pub fn pacer(&self) -> &RequestPacer {
        &self.pacer
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send_with_body(Method::GET, path, Option::<&Value>::None).await
    }

    pub async fn get_with_query<T>(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.pacer.pace().await;
        let mut request = self.http.get(self.url_for(path));
        if let Some(params) = query {
            request = request.query(params);
        }
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(Method::POST, path, Some(body)).await
    }

    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.pacer.pace().await;
        let response = self.http.post(self.url_for(path)).form(form).send().await?;
        Self::parse_json(response).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(Method::PATCH, path, Some(body)).await
    }

    pub async fn send_with_body<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.pacer.pace().await;
        let url = self.url_for(path);
        let mut request = self.http.request(method, url);
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    pub async fn send_expect_empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.pacer.pace().await;
        let url = self.url_for(path);
        let mut request = self.http.request(method, url);
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        Self::ensure_success(response).await
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        let trimmed = path.trim_start_matches('/');
        base.push_str(trimmed);
        base
    }

    fn media_root(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(ContentError::from)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            Err(ContentError::Authentication(format!(
                "Access denied ({}) - {}",
                status, body
            )))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(build_http_error(status, &body))
        }
    }

    async fn ensure_success(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            Err(ContentError::Authentication(format!(
                "Access denied ({}) - {}",
                status, body
            )))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(build_http_error(status, &body))
        }
    }

    /// Fetches all article categories. The backend takes the parent filter
    /// as a form-urlencoded POST.
    pub async fn get_categories(&self, parent_id: Option<i64>) -> Result<Vec<Category>> {
        let payload = CategoryListRequest { parent_id };
        let value: Value = self.post_form("article/categories/list", &payload).await?;
        let envelope: Enveloped<Vec<Category>> = serde_json::from_value(value)?;
        Ok(envelope.into_inner())
    }

    pub async fn get_articles_by_category(
        &self,
        category_key: &str,
        query: &ArticleListQuery,
    ) -> Result<Vec<ArticleSummary>> {
        let path = format!("article/categories/{}", category_key);
        let page = query.page.to_string();
        let limit = query.limit.to_string();
        let params = [
            ("page", page.as_str()),
            ("limit", limit.as_str()),
            ("language", self.config.language.as_str()),
        ];
        let value: Value = self.get_with_query(&path, Some(&params)).await?;
        let envelope: Enveloped<Vec<RawArticle>> = serde_json::from_value(value)?;
        let base = self.media_root().to_string();
        Ok(envelope
            .into_inner()
            .into_iter()
            .map(|raw| ArticleSummary::from_raw(raw, &base))
            .collect())
    }

    /// Fetches an article by its canonical slug and normalizes the nested
    /// detail payload (featured image, body content, meta fallbacks).
    pub async fn get_article_detail(&self, canonical: &str) -> Result<ArticleDetail> {
        let path = format!("article/{}", canonical);
        let value: Value = self.get(&path).await?;
        let envelope: Enveloped<RawArticle> = serde_json::from_value(value)?;
        Ok(ArticleDetail::from_raw(envelope.into_inner(), self.media_root()))
    }

    /// Fetches one page of comments. This is the only I/O primitive the
    /// comment locator uses; cursor requests send `pageId`, first requests
    /// fall back to the numeric `page`.
    pub async fn fetch_comment_page(
        &self,
        canonical: &str,
        request: &CommentPageRequest,
    ) -> Result<CommentPage> {
        let path = format!("article/{}/comment", canonical);
        let limit = request.limit.to_string();
        let page = request.page.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("limit", limit.as_str()),
            ("language", self.config.language.as_str()),
        ];
        if let Some(parent) = request.parent_id.as_deref() {
            params.push(("parentId", parent));
        }
        match request.page_id.as_deref() {
            Some(cursor) => params.push(("pageId", cursor)),
            None => params.push(("page", page.as_str())),
        }
        let value: Value = self.get_with_query(&path, Some(&params)).await?;
        CommentPage::from_json(value)
    }

    pub async fn get_comment_detail(&self, canonical: &str, comment_id: &str) -> Result<Comment> {
        let path = format!("article/{}/comment/{}", canonical, comment_id);
        let value: Value = self.get(&path).await?;
        let envelope: Enveloped<RawComment> = serde_json::from_value(value)?;
        Ok(Comment::from(envelope.into_inner()))
    }

    pub async fn add_comment(&self, canonical: &str, text: &str, rating: Option<i32>) -> Result<()> {
        let path = format!("article/{}/comment", canonical);
        let payload = CommentCreateRequest { text, rating };
        self.send_expect_empty(Method::POST, &path, Some(&payload)).await
    }

    pub async fn update_comment(&self, canonical: &str, comment_id: &str, text: &str) -> Result<()> {
        let path = format!("article/{}/comment/{}", canonical, comment_id);
        let payload = CommentUpdateRequest { text };
        self.send_expect_empty(Method::PATCH, &path, Some(&payload)).await
    }

    pub async fn delete_comment(&self, canonical: &str, comment_id: &str) -> Result<()> {
        let path = format!("article/{}/comment/{}", canonical, comment_id);
        self.send_expect_empty(Method::DELETE, &path, None::<&Value>).await
    }

    pub async fn add_reply(
        &self,
        canonical: &str,
        comment_id: &str,
        text: &str,
        mentioned_user: Option<&str>,
    ) -> Result<()> {
        let path = format!("article/{}/comment/{}/replies", canonical, comment_id);
        let payload = ReplyCreateRequest {
            text,
            mentioned_user,
        };
        self.send_expect_empty(Method::POST, &path, Some(&payload)).await
    }

    pub async fn add_reaction(&self, comment_id: &str, reaction: ReactionKind) -> Result<()> {
        let path = format!("article/comment/{}/reactions", comment_id);
        let payload = ReactionRequest { kind: reaction };
        self.send_expect_empty(Method::POST, &path, Some(&payload)).await
    }

    pub async fn validate_session(&self) -> Result<()> {
        self.send_expect_empty(Method::GET, "auth/validate-session", None::<&Value>).await
    }

    /// Exchanges the current session token for a fresh one. The caller is
    /// responsible for rebuilding the client with the new token.
    pub async fn refresh_session(&self) -> Result<SessionResponse> {
        self.post("auth/refresh-token", &Value::Object(Default::default())).await
    }

    pub async fn logout(&self) -> Result<()> {
        self.send_expect_empty(
            Method::POST,
            "auth/logout",
            Some(&Value::Object(Default::default())),
        )
        .await
    }

    pub async fn get_profile(&self) -> Result<UserProfile> {
        self.get("auth/profile").await
    }
}

fn build_http_client(config: &ContentConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT_LANGUAGE, header_value(config.language.clone())?);
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    if let Some(token) = &config.session_token {
        let name = HeaderName::from_static(SESSION_HEADER);
        headers.insert(name, header_value(token.clone())?);
    }

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| ContentError::Other(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| ContentError::Other(err.to_string()))
}

fn build_http_error(status: StatusCode, body: &str) -> ContentError {
    let code = extract_error_code(body);
    ContentError::http(status, code, body.to_string())
}

fn extract_error_code(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body).ok().and_then(|value| {
        value
            .get("errorCode")
            .or_else(|| value.get("code"))
            .and_then(|c| c.as_str())
            .map(|s| s.to_string())
    })
}

/// Pagination inputs for category article listings.
#[derive(Debug, Clone)]
pub struct ArticleListQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for ArticleListQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// Pagination inputs for the comments endpoint. `page_id` is the opaque
/// cursor from a previous page; when unset the numeric `page` is sent.
#[derive(Debug, Clone)]
pub struct CommentPageRequest {
    pub parent_id: Option<String>,
    pub page_id: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for CommentPageRequest {
    fn default() -> Self {
        Self {
            parent_id: None,
            page_id: None,
            page: 1,
            limit: 10,
        }
    }
}

/// Reaction types the backend accepts for a comment.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
    Love,
    Angry,
    Sad,
}

#[derive(Debug, Serialize)]
struct CategoryListRequest {
    #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
    parent_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct CommentCreateRequest<'a> {
    text: &'a str,
    rating: Option<i32>,
}

#[derive(Debug, Serialize)]
struct CommentUpdateRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyCreateRequest<'a> {
    text: &'a str,
    mentioned_user: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ReactionRequest {
    #[serde(rename = "type")]
    kind: ReactionKind,
}
