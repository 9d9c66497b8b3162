// src/collector.rs
// Activity collection with per-phase fault absorption

use futures::StreamExt;
use tracing::{debug, warn};

use crate::activity::ActivityHistory;
use crate::profile::Username;
use crate::source::{ActivitySource, ItemStream};

/// Collect up to `limit` recent posts and `limit` recent comments.
///
/// Retrieval faults never escape: a fault ends its own phase and the items
/// gathered before it are kept, while the other phase still runs. The
/// result may therefore be partial or empty, but collection itself cannot
/// fail.
pub async fn collect_activity(
    source: &dyn ActivitySource,
    user: &Username,
    limit: u32,
) -> ActivityHistory {
    let mut history = ActivityHistory::new(user.clone());

    drain_phase(
        source.recent_posts(user, limit),
        &mut history.posts,
        user,
        "posts",
    )
    .await;
    drain_phase(
        source.recent_comments(user, limit),
        &mut history.comments,
        user,
        "comments",
    )
    .await;

    debug!(
        user = %user,
        posts = history.posts.len(),
        comments = history.comments.len(),
        "collected activity"
    );
    history
}

/// Drain one retrieval stream into `sink`, stopping at the first fault
async fn drain_phase<T>(
    mut stream: ItemStream<'_, T>,
    sink: &mut Vec<T>,
    user: &Username,
    phase: &str,
) {
    while let Some(item) = stream.next().await {
        match item {
            Ok(value) => sink.push(value),
            Err(error) => {
                warn!(
                    user = %user,
                    phase = phase,
                    error = %error,
                    "retrieval faulted, keeping partial history"
                );
                break;
            }
        }
    }
}
