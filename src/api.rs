//! HTTP client for the portal backend.
//!
//! One method per consumed endpoint. Every authenticated call carries a
//! bearer token; callers obtain it from [`crate::session::SessionStore`],
//! which fails locally when no session exists. Failures never retry; the
//! backend's own error message is surfaced when its body carries one.

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::config;
use crate::core::errors::{ClientError, Result};
use crate::core::helpers::error_message;
use crate::models::models::{
    Comment, CommentAdded, DashboardStats, EventReport, LikeToggle, LoginResponse, NewPost, Post,
    PostKind, Society,
};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            let message = error_message(&body, status.as_u16());
            warn!(status = status.as_u16(), %message, "backend rejected request");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T> {
        debug!(%path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T> {
        debug!(%path, "POST");
        let mut req = self.http.post(self.url(path)).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        Self::decode(req.send().await?).await
    }

    // --- authentication ---

    pub async fn login(&self, registration_no: &str, password: &str) -> Result<LoginResponse> {
        self.post(
            "/student/login",
            None,
            &json!({ "registration_no": registration_no, "password": password }),
        )
        .await
    }

    // --- dashboards ---

    pub async fn active_societies(&self, token: &str) -> Result<Vec<Society>> {
        self.get("/user/active/societies", token).await
    }

    pub async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats> {
        self.get("/user/stats", token).await
    }

    pub async fn society(&self, token: &str, society_id: i64) -> Result<Society> {
        self.get(&format!("/user/societies/{}", society_id), token)
            .await
    }

    // --- posts and interactions ---

    pub async fn society_posts(&self, token: &str, society_id: i64) -> Result<Vec<Post>> {
        self.post(
            "/society/posts",
            Some(token),
            &json!({ "society_id": society_id }),
        )
        .await
    }

    /// Submit the post-composition form: text fields plus attached media as
    /// one multipart request.
    pub async fn create_post(&self, token: &str, new_post: &NewPost) -> Result<Post> {
        validate_new_post(new_post)?;

        let mut form = Form::new()
            .text("society_id", new_post.society_id.to_string())
            .text("title", new_post.title.trim().to_string())
            .text("post_type", new_post.kind.as_str())
            .text("content", new_post.content.clone())
            .text("tags", new_post.tags.join(","));

        if new_post.kind == PostKind::Poll {
            form = form.text(
                "poll_options",
                serde_json::Value::from(new_post.poll_options.clone()).to_string(),
            );
        }
        for upload in &new_post.media {
            let part = Part::bytes(upload.bytes.clone())
                .file_name(upload.file_name.clone())
                .mime_str(&upload.mime_type)?;
            form = form.part("media", part);
        }

        debug!(society_id = new_post.society_id, kind = new_post.kind.as_str(), "POST /society/create");
        let resp = self
            .http
            .post(self.url("/society/create"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn toggle_like(&self, token: &str, post_id: i64) -> Result<LikeToggle> {
        self.post("/user/like/toggle", Some(token), &json!({ "post_id": post_id }))
            .await
    }

    pub async fn add_comment(&self, token: &str, post_id: i64, text: &str) -> Result<CommentAdded> {
        self.post(
            "/user/comment/add",
            Some(token),
            &json!({ "post_id": post_id, "text": text }),
        )
        .await
    }

    pub async fn post_comments(&self, token: &str, post_id: i64) -> Result<Vec<Comment>> {
        self.post(
            "/user/comments",
            Some(token),
            &json!({ "post_id": post_id }),
        )
        .await
    }

    // --- admin moderation ---

    pub async fn event_reports(&self, token: &str) -> Result<Vec<EventReport>> {
        self.get("/admin/event-reports", token).await
    }

    pub async fn event_report(&self, token: &str, report_id: i64) -> Result<EventReport> {
        self.get(&format!("/admin/event-reports/{}", report_id), token)
            .await
    }
}

fn validate_new_post(new_post: &NewPost) -> Result<()> {
    let title = new_post.title.trim();
    if title.is_empty() {
        return Err(ClientError::Validation("Title is required".to_string()));
    }
    if title.chars().count() > config::MAX_TITLE_LENGTH {
        return Err(ClientError::Validation(format!(
            "Title must be at most {} characters",
            config::MAX_TITLE_LENGTH
        )));
    }
    if new_post.kind == PostKind::Poll && new_post.poll_options.len() < config::MIN_POLL_OPTIONS {
        return Err(ClientError::Validation(format!(
            "A poll needs at least {} options",
            config::MIN_POLL_OPTIONS
        )));
    }
    Ok(())
}
