// src/prompt.rs
// Persona prompt assembly from collected activity

use crate::activity::ActivityHistory;

/// At most this many posts and this many comments are quoted in the prompt,
/// regardless of how much history was collected
pub const MAX_ITEMS_PER_KIND: usize = 10;

const INSTRUCTION_HEADER: &str = r#"You are an AI language model that generates user personas based on Reddit activity.

From the posts and comments below, extract the user's persona characteristics, such as:
- Name (if any)
- Age Range
- Occupation (if guessable)
- Interests
- Values / Beliefs
- Tone of communication
- Political/Social views (if any)
- Subreddits they are active in
- Any unique personality traits

For each trait, provide a short quote from the post or comment with the URL.

Here is their Reddit activity:
"#;

/// Build the persona-extraction prompt for one user's history.
///
/// Output is deterministic for a given history: the fixed instruction
/// header, then post blocks, then comment blocks, each kind in collection
/// order. An empty history still produces the bare header.
pub fn compose_prompt(history: &ActivityHistory) -> String {
    let mut prompt = String::from(INSTRUCTION_HEADER);

    for post in history.posts.iter().take(MAX_ITEMS_PER_KIND) {
        prompt.push_str(&format!(
            "\n[POST] {}\n{}\nURL: {}\n",
            post.title, post.body, post.url
        ));
    }
    for comment in history.comments.iter().take(MAX_ITEMS_PER_KIND) {
        prompt.push_str(&format!(
            "\n[COMMENT] {}\nURL: {}\n",
            comment.body, comment.url
        ));
    }

    prompt
}
