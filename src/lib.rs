//! Typed content API client crate used by the blog front-end services.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod locator;
pub mod models;
pub mod rate_limiter;

pub use auth::{Credentials, SessionResponse};
pub use client::{ArticleListQuery, CommentPageRequest, ContentClient, ReactionKind};
pub use config::ContentConfig;
pub use error::{ContentError, Result};
pub use locator::{
    CommentThread, Drained, StopCause, FIND_PAGE_CAP, LOCATE_PAGE_LIMIT, REPLY_PAGE_CAP,
};
pub use models::{
    ArticleBodyBlock, ArticleDetail, ArticleDocument, ArticleSummary, Category, Comment,
    CommentPage, RawArticle, RawComment, UserProfile,
};
pub use rate_limiter::RequestPacer;
