// src/reddit/client.rs
// OAuth client for the Reddit data API

use std::time::{Duration, Instant};

use async_stream::try_stream;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use super::types::{Listing, ListingData, Thing};
use crate::activity::{Comment, Post};
use crate::config::RedditCredentials;
use crate::error::{PersonaError, Result};
use crate::profile::Username;
use crate::source::{ActivitySource, ItemStream};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE: &str = "https://oauth.reddit.com";
/// Reddit caps listing pages at 100 items
const PAGE_SIZE: u32 = 100;
/// Refresh tokens a minute before the server-side expiry
const TOKEN_EXPIRY_SLACK_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expiry")]
    expires_in: u64,
}

fn default_expiry() -> u64 {
    3600
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Client for a user's public history, authenticated with script-app
/// credentials via the client_credentials grant. Tokens are cached and
/// refreshed transparently.
pub struct RedditClient {
    http: Client,
    credentials: RedditCredentials,
    token_url: String,
    api_base: String,
    token: RwLock<Option<CachedToken>>,
}

impl RedditClient {
    pub fn new(credentials: RedditCredentials) -> Result<Self> {
        Self::with_endpoints(credentials, TOKEN_URL, API_BASE)
    }

    /// Construct against alternate endpoints, used by tests to point the
    /// client at a local mock server.
    pub fn with_endpoints(
        credentials: RedditCredentials,
        token_url: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(credentials.user_agent.as_str())
            .build()?;
        Ok(Self {
            http,
            credentials,
            token_url: token_url.into(),
            api_base: api_base.into(),
            token: RwLock::new(None),
        })
    }

    /// Return a valid bearer token, fetching a fresh one when the cached
    /// token is absent or about to expire.
    async fn bearer_token(&self) -> Result<String> {
        {
            let guard = self.token.read().await;
            if let Some(cached) = guard.as_ref() {
                if cached.expires_at > Instant::now() {
                    return Ok(cached.value.clone());
                }
            }
        }

        let mut guard = self.token.write().await;
        if let Some(cached) = guard.as_ref() {
            if cached.expires_at > Instant::now() {
                return Ok(cached.value.clone());
            }
        }

        let fetched = self.request_token().await?;
        let value = fetched.value.clone();
        *guard = Some(fetched);
        Ok(value)
    }

    async fn request_token(&self) -> Result<CachedToken> {
        debug!("requesting Reddit access token");
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PersonaError::RedditApi { status, body });
        }

        let token: TokenResponse = response.json().await?;
        let ttl = token.expires_in.saturating_sub(TOKEN_EXPIRY_SLACK_SECS);
        Ok(CachedToken {
            value: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(ttl),
        })
    }

    /// Fetch one listing page, newest first
    async fn fetch_page(
        &self,
        path: &str,
        page_size: u32,
        after: Option<&str>,
    ) -> Result<ListingData> {
        let token = self.bearer_token().await?;
        let url = format!("{}{}", self.api_base, path);
        let page_size = page_size.to_string();

        let mut request = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .query(&[("sort", "new"), ("raw_json", "1")])
            .query(&[("limit", page_size.as_str())]);
        if let Some(cursor) = after {
            request = request.query(&[("after", cursor)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PersonaError::RedditApi { status, body });
        }

        let listing: Listing = response.json().await?;
        debug!(
            path = %path,
            children = listing.data.children.len(),
            "retrieved listing page"
        );
        Ok(listing.data)
    }

    /// Page through a user listing lazily, yielding converted items until
    /// `limit` is reached or the listing runs out. Items that fail
    /// conversion are skipped without consuming the limit.
    fn listing_stream<'a, T, F>(&'a self, path: String, limit: u32, convert: F) -> ItemStream<'a, T>
    where
        T: Send + 'a,
        F: Fn(Thing) -> Option<T> + Send + 'a,
    {
        Box::pin(try_stream! {
            let mut remaining = limit;
            let mut after: Option<String> = None;

            while remaining > 0 {
                let page = self
                    .fetch_page(&path, remaining.min(PAGE_SIZE), after.as_deref())
                    .await?;
                if page.children.is_empty() {
                    break;
                }

                for thing in page.children {
                    if remaining == 0 {
                        break;
                    }
                    match convert(thing) {
                        Some(item) => {
                            remaining -= 1;
                            yield item;
                        }
                        None => debug!(path = %path, "skipping unusable listing item"),
                    }
                }

                after = page.after;
                if after.is_none() {
                    break;
                }
            }
        })
    }
}

impl ActivitySource for RedditClient {
    fn recent_posts<'a>(&'a self, user: &'a Username, limit: u32) -> ItemStream<'a, Post> {
        let path = format!("/user/{}/submitted", user.as_str());
        self.listing_stream(path, limit, Thing::into_post)
    }

    fn recent_comments<'a>(&'a self, user: &'a Username, limit: u32) -> ItemStream<'a, Comment> {
        let path = format!("/user/{}/comments", user.as_str());
        self.listing_stream(path, limit, Thing::into_comment)
    }
}
