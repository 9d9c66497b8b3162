// src/source.rs
// Seam between the pipeline and whatever serves user activity

use std::pin::Pin;

use futures::Stream;

use crate::activity::{Comment, Post};
use crate::error::Result;
use crate::profile::Username;

/// Stream of retrieved items. Each element is either one item or the fault
/// that ended retrieval; nothing follows an error element.
pub type ItemStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Source of a user's recent public activity, newest first.
///
/// Implementations page through the backing service lazily, so callers that
/// stop early never pay for pages they did not consume.
pub trait ActivitySource: Send + Sync {
    /// Recent submissions by the user, at most `limit` of them
    fn recent_posts<'a>(&'a self, user: &'a Username, limit: u32) -> ItemStream<'a, Post>;

    /// Recent comments by the user, at most `limit` of them
    fn recent_comments<'a>(&'a self, user: &'a Username, limit: u32) -> ItemStream<'a, Comment>;
}
