//! Cursor-paginated comment lookup.
//!
//! The comments endpoint pages with an opaque `pageId` cursor and often
//! returns only a handful of items per call, so locating one comment (or
//! every reply under it) means walking pages until the backend runs dry.
//! Both walks share one drain primitive with per-call dedup bookkeeping and
//! a loop guard against misbehaving cursors.

use std::collections::HashSet;
use std::future::Future;

use tracing::{debug, warn};

use crate::client::{CommentPageRequest, ContentClient};
use crate::error::Result;
use crate::models::{Comment, CommentPage};

/// Page size requested by locate crawls.
pub const LOCATE_PAGE_LIMIT: u32 = 100;
/// Fetch cap for the top-level comment search.
pub const FIND_PAGE_CAP: usize = 200;
/// Fetch cap for reply collection.
pub const REPLY_PAGE_CAP: usize = 500;

/// Why a drain over the paginated collection stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCause {
    /// The backend reported no further pages.
    Exhausted,
    /// The target comment was found; no later page was requested.
    Found,
    /// The backend produced the same cursor twice.
    CursorRepeated,
    /// The fetch cap was reached.
    PageLimit,
    /// A page fetch failed; items gathered so far are kept.
    Failed,
}

/// Items accumulated by a drain, plus the reason it stopped.
#[derive(Debug)]
pub struct Drained {
    pub items: Vec<Comment>,
    pub stop: StopCause,
}

/// Walks a cursor-paginated comment collection one page at a time.
///
/// Items are deduplicated by id across pages; the first occurrence wins.
/// When `target` is set, the drain short-circuits as soon as a comment with
/// that id is pushed. Pagination advances only while the page reports
/// `has_more` with a non-null cursor, and stops if a cursor value ever
/// repeats. Fetch errors end the drain without propagating.
pub async fn drain_pages<F, Fut>(mut fetch: F, target: Option<&str>, max_pages: usize) -> Drained
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<CommentPage>>,
{
    let mut seen = HashSet::new();
    // Cursors get their own set: the backend's next cursor routinely equals
    // the last comment id on the page, and that is not a loop.
    let mut visited = HashSet::new();
    let mut items: Vec<Comment> = Vec::new();
    let mut cursor: Option<String> = None;

    for _ in 0..max_pages {
        let page = match fetch(cursor.clone()).await {
            Ok(page) => page,
            Err(err) => {
                warn!(error = %err, "comment page fetch failed, stopping");
                return Drained {
                    items,
                    stop: StopCause::Failed,
                };
            }
        };

        for comment in page.items {
            if !seen.insert(comment.id.clone()) {
                continue;
            }
            let hit = target.is_some_and(|id| comment.id == id);
            items.push(comment);
            if hit {
                return Drained {
                    items,
                    stop: StopCause::Found,
                };
            }
        }

        let next = match page.next_page_id.filter(|_| page.has_more) {
            Some(next) => next,
            None => {
                return Drained {
                    items,
                    stop: StopCause::Exhausted,
                }
            }
        };
        if !visited.insert(next.clone()) {
            debug!(cursor = %next, "cursor repeated, stopping");
            return Drained {
                items,
                stop: StopCause::CursorRepeated,
            };
        }
        cursor = Some(next);
    }

    Drained {
        items,
        stop: StopCause::PageLimit,
    }
}

/// A located comment together with all of its replies.
#[derive(Debug, Clone)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<Comment>,
}

impl ContentClient {
    /// Searches top-level comments of an article for `target_id`, walking
    /// the cursor pagination until the comment turns up, the pages run out,
    /// a cursor repeats, or the fetch cap is hit. Fetch failures simply
    /// report the comment as absent; callers may retry the whole search.
    pub async fn find_comment(&self, canonical: &str, target_id: &str) -> Option<Comment> {
        let drained = drain_pages(
            |page_id| {
                let request = CommentPageRequest {
                    page_id,
                    limit: LOCATE_PAGE_LIMIT,
                    ..Default::default()
                };
                async move { self.fetch_comment_page(canonical, &request).await }
            },
            Some(target_id),
            FIND_PAGE_CAP,
        )
        .await;

        debug!(canonical, target_id, stop = ?drained.stop, "comment search finished");
        match drained.stop {
            StopCause::Found => drained.items.into_iter().find(|c| c.id == target_id),
            _ => None,
        }
    }

    /// Gathers every reply under `parent_id`, deduplicated by id. Partial
    /// results are returned on any stopping condition, including failures.
    pub async fn collect_replies(&self, canonical: &str, parent_id: &str) -> Vec<Comment> {
        let drained = drain_pages(
            |page_id| {
                let request = CommentPageRequest {
                    parent_id: Some(parent_id.to_string()),
                    page_id,
                    limit: LOCATE_PAGE_LIMIT,
                    ..Default::default()
                };
                async move { self.fetch_comment_page(canonical, &request).await }
            },
            None,
            REPLY_PAGE_CAP,
        )
        .await;

        debug!(
            canonical,
            parent_id,
            replies = drained.items.len(),
            stop = ?drained.stop,
            "reply collection finished"
        );
        drained.items
    }

    /// Locates a comment and, when it reports replies, collects them all.
    /// This is what the comment detail view renders.
    pub async fn fetch_comment_thread(
        &self,
        canonical: &str,
        comment_id: &str,
    ) -> Option<CommentThread> {
        let comment = self.find_comment(canonical, comment_id).await?;
        let replies = if comment.reply_count > 0 {
            self.collect_replies(canonical, comment_id).await
        } else {
            Vec::new()
        };
        Some(CommentThread { comment, replies })
    }
}
