// src/reddit/mod.rs
// Reddit data API integration

mod client;
mod types;

pub use client::RedditClient;
