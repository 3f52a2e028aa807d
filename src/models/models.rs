use serde::{Deserialize, Serialize};

use crate::config;
use crate::normalize;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "admin", default, deserialize_with = "normalize::de_flag")]
    pub is_admin: bool,
    #[serde(rename = "society_head", default, deserialize_with = "normalize::de_flag")]
    pub owns_society: bool,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserRecord {
    /// Trim and lowercase the role string, dropping it entirely when blank.
    pub fn normalize_role(&mut self) {
        self.role = self
            .role
            .take()
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty());
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserRecord,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EventSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Society {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub advisor: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "normalize::de_string_list")]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub events: Vec<EventSummary>,
}

impl Society {
    /// Browser-usable logo URL, or `None` when the society has no logo.
    pub fn logo_url(&self) -> Option<String> {
        self.logo
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| normalize::asset_url(p, &config::asset_base_url()))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MediaFile {
    pub id: i64,
    #[serde(rename = "file_path")]
    pub path: String,
}

impl MediaFile {
    pub fn url(&self) -> String {
        normalize::asset_url(&self.path, &config::asset_base_url())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PollOption {
    pub text: String,
    #[serde(default)]
    pub votes: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PollData {
    pub options: Vec<PollOption>,
}

impl PollData {
    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|o| o.votes).sum()
    }
}

/// Post content, keyed by the backend's `post_type` discriminator.
///
/// The backend only populates the fields matching the type; modeling that as
/// a tagged union keeps every consumer's match exhaustive.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "post_type", rename_all = "snake_case")]
pub enum PostBody {
    Text {
        #[serde(default)]
        content: String,
    },
    Photo {
        #[serde(default)]
        media: Vec<MediaFile>,
    },
    Video {
        #[serde(default)]
        media: Vec<MediaFile>,
    },
    Document {
        #[serde(default)]
        media: Vec<MediaFile>,
    },
    Poll {
        poll: PollData,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "user_name", default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "normalize::de_string_list")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(rename = "liked", default, deserialize_with = "normalize::de_flag")]
    pub liked_by_viewer: bool,
    #[serde(flatten)]
    pub body: PostBody,
}

impl Post {
    pub fn media(&self) -> &[MediaFile] {
        match &self.body {
            PostBody::Photo { media } | PostBody::Video { media } | PostBody::Document { media } => {
                media
            }
            _ => &[],
        }
    }

    pub fn poll(&self) -> Option<&PollData> {
        match &self.body {
            PostBody::Poll { poll } => Some(poll),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "user_name", default)]
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    Suspended,
    UnderReview,
    Pending,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    President,
    Officer,
    #[serde(other)]
    Member,
}

/// Membership row shown on the admin moderation screens. Display only; the
/// portal never mutates these records.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub status: MemberStatus,
    #[serde(default = "default_member_role")]
    pub role: MemberRole,
    #[serde(default)]
    pub violations: u32,
}

fn default_member_role() -> MemberRole {
    MemberRole::Member
}

#[derive(Deserialize, Clone, Copy, Debug, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub societies: u32,
    #[serde(default)]
    pub events: u32,
    #[serde(default)]
    pub posts: u32,
    #[serde(default)]
    pub pending_approvals: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EventReport {
    pub id: i64,
    #[serde(default)]
    pub society: String,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub submitted_at: String,
    #[serde(default)]
    pub attendance: Option<u32>,
    #[serde(default)]
    pub summary: String,
}

/// Server-confirmed outcome of a like toggle.
#[derive(Deserialize, Clone, Copy, Debug)]
pub struct LikeToggle {
    #[serde(default, deserialize_with = "normalize::de_flag")]
    pub liked: bool,
    #[serde(default)]
    pub likes: u32,
}

/// Server-confirmed outcome of adding a comment.
#[derive(Deserialize, Clone, Debug)]
pub struct CommentAdded {
    pub comment: Comment,
    #[serde(default)]
    pub comments_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostKind {
    Text,
    Photo,
    Video,
    Document,
    Poll,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Text => "text",
            PostKind::Photo => "photo",
            PostKind::Video => "video",
            PostKind::Document => "document",
            PostKind::Poll => "poll",
        }
    }
}

/// One file attached to the post-composition form.
#[derive(Clone, Debug)]
pub struct MediaUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Payload for the post-composition form, submitted as multipart.
#[derive(Clone, Debug)]
pub struct NewPost {
    pub society_id: i64,
    pub title: String,
    pub kind: PostKind,
    pub content: String,
    pub tags: Vec<String>,
    pub poll_options: Vec<String>,
    pub media: Vec<MediaUpload>,
}
