// src/activity.rs
// Domain records for collected Reddit activity

use crate::profile::Username;

/// A submission authored by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    /// Selftext body, empty for link posts
    pub body: String,
    /// Absolute permalink on reddit.com
    pub url: String,
}

/// A comment authored by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub body: String,
    /// Absolute permalink on reddit.com
    pub url: String,
}

/// Everything collected for one user, in newest-first order per kind.
/// Either list may be truncated or empty when retrieval faulted partway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityHistory {
    pub username: Username,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

impl ActivityHistory {
    pub fn new(username: Username) -> Self {
        Self {
            username,
            posts: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// True when no activity was collected at all
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.comments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.posts.len() + self.comments.len()
    }
}
