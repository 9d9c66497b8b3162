// src/store.rs
// Persona persistence

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::profile::Username;

/// A persona that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaDocument {
    pub username: Username,
    pub text: String,
    pub path: PathBuf,
}

/// Writes persona text to `<output_dir>/<username>_persona.txt`
pub struct PersonaStore {
    output_dir: PathBuf,
}

impl PersonaStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path a persona for `username` is written to
    pub fn path_for(&self, username: &Username) -> PathBuf {
        self.output_dir
            .join(format!("{}_persona.txt", username.as_str()))
    }

    /// Persist persona text, creating the output directory if needed.
    /// A previous persona for the same user is replaced wholesale.
    pub fn save(&self, username: &Username, text: &str) -> Result<PersonaDocument> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(username);
        fs::write(&path, text)?;
        info!(path = %path.display(), bytes = text.len(), "persona saved");
        Ok(PersonaDocument {
            username: username.clone(),
            text: text.to_string(),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::extract_username;

    #[test]
    fn test_save_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = PersonaStore::new(dir.path().join("nested").join("outputs"));
        let user = extract_username("reddit.com/user/spez").unwrap();

        let doc = store.save(&user, "persona text").unwrap();
        assert!(doc.path.ends_with("spez_persona.txt"));
        assert_eq!(fs::read_to_string(&doc.path).unwrap(), "persona text");
    }

    #[test]
    fn test_save_overwrites_previous_persona() {
        let dir = tempfile::tempdir().unwrap();
        let store = PersonaStore::new(dir.path());
        let user = extract_username("reddit.com/user/spez").unwrap();

        store.save(&user, "first run").unwrap();
        let doc = store.save(&user, "second run").unwrap();
        assert_eq!(fs::read_to_string(&doc.path).unwrap(), "second run");
    }

    #[test]
    fn test_path_for_uses_username() {
        let store = PersonaStore::new("outputs");
        let user = extract_username("reddit.com/user/some-user_42").unwrap();
        assert_eq!(
            store.path_for(&user),
            PathBuf::from("outputs/some-user_42_persona.txt")
        );
    }

    #[test]
    fn test_document_carries_text_and_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = PersonaStore::new(dir.path());
        let user = extract_username("reddit.com/user/spez").unwrap();

        let doc = store.save(&user, "body").unwrap();
        assert_eq!(doc.username, user);
        assert_eq!(doc.text, "body");
    }
}
