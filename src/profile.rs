// src/profile.rs
// Profile reference parsing - turns a pasted URL into a Reddit username

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the profile path segment of a Reddit user URL. The capture stops
/// at the next slash, so deeper paths like /user/name/submitted still yield
/// the bare username.
static PROFILE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"reddit\.com/user/([^/]+)/?").expect("valid profile pattern"));

/// A Reddit username extracted from a profile URL. Opaque token, compared
/// and displayed exactly as captured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the username from a Reddit profile reference.
///
/// Accepts any string containing a `reddit.com/user/<name>` segment, so
/// www/old subdomains and leading text are all fine. The capture runs to
/// the next slash, so loose text after an unterminated reference becomes
/// part of the name; a trailing `/` delimits it. Returns `None` for
/// anything else, including bare usernames and subreddit URLs.
pub fn extract_username(reference: &str) -> Option<Username> {
    PROFILE_URL
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|m| Username(m.as_str().to_string()))
}
