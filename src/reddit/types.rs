// src/reddit/types.rs
// Wire types for Reddit listing responses

use serde::Deserialize;

use crate::activity::{Comment, Post};

/// Base for permalink expansion. Listings carry site-relative permalinks.
pub(crate) const WWW_BASE: &str = "https://www.reddit.com";

/// One page of a user listing, as returned by /user/{name}/submitted
/// and /user/{name}/comments
#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
    /// Cursor for the next page, absent on the last one
    pub after: Option<String>,
}

/// A kind-tagged listing item. The payload stays raw JSON until a
/// conversion asks for a concrete kind, so a foreign or malformed child
/// is dropped on its own instead of failing the whole page.
#[derive(Debug, Deserialize)]
pub(crate) struct Thing {
    #[serde(default)]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

impl Thing {
    /// Convert a listing item into a post, dropping comments, foreign
    /// kinds, and submissions missing required fields.
    pub fn into_post(self) -> Option<Post> {
        if self.kind != "t3" {
            return None;
        }
        let data: SubmissionData = serde_json::from_value(self.data).ok()?;
        data.into_post()
    }

    /// Convert a listing item into a comment, with the same drop rules
    pub fn into_comment(self) -> Option<Comment> {
        if self.kind != "t1" {
            return None;
        }
        let data: CommentData = serde_json::from_value(self.data).ok()?;
        data.into_comment()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmissionData {
    pub title: Option<String>,
    /// Empty for link posts
    #[serde(default)]
    pub selftext: String,
    pub permalink: Option<String>,
}

impl SubmissionData {
    fn into_post(self) -> Option<Post> {
        let title = self.title?;
        let permalink = self.permalink?;
        Some(Post {
            title,
            body: self.selftext,
            url: absolute_url(&permalink),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentData {
    pub body: Option<String>,
    pub permalink: Option<String>,
}

impl CommentData {
    fn into_comment(self) -> Option<Comment> {
        let body = self.body?;
        let permalink = self.permalink?;
        Some(Comment {
            body,
            url: absolute_url(&permalink),
        })
    }
}

fn absolute_url(permalink: &str) -> String {
    format!("{WWW_BASE}{permalink}")
}
