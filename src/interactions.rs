//! Local interaction state for the society detail view.
//!
//! Tracks, per post id, the viewer's like state, the in-memory comment list
//! and any poll selection made this session. Mutations only adopt values the
//! server confirmed; the sole client-side guess is the toggle itself, which
//! is guarded against re-entrant clicks rather than applied optimistically.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::api::ApiClient;
use crate::config::MAX_COMMENT_LENGTH;
use crate::core::errors::{ClientError, Result};
use crate::models::models::{Comment, LikeToggle, PollData, Post};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub likes: u32,
}

#[derive(Default)]
pub struct InteractionTracker {
    likes: HashMap<i64, LikeState>,
    likes_in_flight: HashSet<i64>,
    comments: HashMap<i64, Vec<Comment>>,
    comment_counts: HashMap<i64, u32>,
    poll_votes: HashMap<i64, usize>,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the like/comment counters of a freshly fetched post.
    pub fn seed_post(&mut self, post: &Post) {
        self.likes.insert(
            post.id,
            LikeState {
                liked: post.liked_by_viewer,
                likes: post.likes,
            },
        );
        self.comment_counts.insert(post.id, post.comments_count);
    }

    pub fn like_state(&self, post_id: i64) -> Option<LikeState> {
        self.likes.get(&post_id).copied()
    }

    /// Mark a like request as in flight. Returns `false` when one is already
    /// pending for this post, in which case the caller must not send another.
    pub fn begin_like(&mut self, post_id: i64) -> bool {
        self.likes_in_flight.insert(post_id)
    }

    /// Adopt the server-confirmed toggle outcome and release the guard.
    pub fn finish_like(&mut self, post_id: i64, outcome: LikeToggle) {
        self.likes_in_flight.remove(&post_id);
        self.likes.insert(
            post_id,
            LikeState {
                liked: outcome.liked,
                likes: outcome.likes,
            },
        );
    }

    /// Release the guard after a failed request, leaving state untouched.
    pub fn abort_like(&mut self, post_id: i64) {
        self.likes_in_flight.remove(&post_id);
    }

    /// Toggle a like through the backend. A click while the previous toggle
    /// for the same post is still in flight is dropped, not queued; the
    /// result is `Ok(None)` and no request is made.
    pub async fn toggle_like(
        &mut self,
        api: &ApiClient,
        token: &str,
        post_id: i64,
    ) -> Result<Option<LikeState>> {
        if !self.begin_like(post_id) {
            debug!(post_id, "like toggle already in flight, dropping click");
            return Ok(None);
        }
        match api.toggle_like(token, post_id).await {
            Ok(outcome) => {
                self.finish_like(post_id, outcome);
                Ok(self.like_state(post_id))
            }
            Err(err) => {
                self.abort_like(post_id);
                Err(err)
            }
        }
    }

    /// Reject empty and over-length comment text before any network call.
    pub fn validate_comment(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ClientError::Validation("Comment cannot be empty".to_string()));
        }
        if text.chars().count() > MAX_COMMENT_LENGTH {
            return Err(ClientError::Validation(format!(
                "Comment must be at most {} characters",
                MAX_COMMENT_LENGTH
            )));
        }
        Ok(())
    }

    /// Post a comment through the backend. On success the new comment is
    /// prepended to the post's list and the server's count is adopted.
    pub async fn add_comment(
        &mut self,
        api: &ApiClient,
        token: &str,
        post_id: i64,
        text: &str,
    ) -> Result<Comment> {
        Self::validate_comment(text)?;
        let added = api.add_comment(token, post_id, text).await?;
        self.comments
            .entry(post_id)
            .or_default()
            .insert(0, added.comment.clone());
        self.comment_counts.insert(post_id, added.comments_count);
        Ok(added.comment)
    }

    /// Replace a post's comment list with a freshly fetched one.
    pub fn set_comments(&mut self, post_id: i64, comments: Vec<Comment>) {
        self.comments.insert(post_id, comments);
    }

    pub fn comments(&self, post_id: i64) -> &[Comment] {
        self.comments.get(&post_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn comment_count(&self, post_id: i64) -> Option<u32> {
        self.comment_counts.get(&post_id).copied()
    }

    /// Record the viewer's poll choice. Local only: the backend has no vote
    /// endpoint, so the selection exists purely to drive percentage bars.
    pub fn record_poll_vote(&mut self, post_id: i64, option_index: usize) {
        self.poll_votes.insert(post_id, option_index);
    }

    pub fn poll_vote(&self, post_id: i64) -> Option<usize> {
        self.poll_votes.get(&post_id).copied()
    }
}

/// Per-option percentages for poll bars. All zeros when nobody has voted.
pub fn poll_percentages(poll: &PollData) -> Vec<f64> {
    let total = poll.total_votes();
    if total == 0 {
        return vec![0.0; poll.options.len()];
    }
    poll.options
        .iter()
        .map(|o| f64::from(o.votes) / f64::from(total) * 100.0)
        .collect()
}
