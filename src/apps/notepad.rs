//! Notepad app
//!
//! A textarea whose content survives window close/reopen within a session:
//! every input event writes the content through to the session store, and
//! the app reloads from the store on startup.

use crate::apps::session::SessionStore;

/// Session store key for the notepad content
const STORAGE_KEY: &str = "retrodesk_notepad";

/// Notepad state
#[derive(Debug, Default)]
pub struct Notepad {
    content: String,
}

impl Notepad {
    /// Restore the last session content, empty if none was saved
    pub fn load(store: &SessionStore) -> Self {
        Self {
            content: store.get(STORAGE_KEY).unwrap_or_default().to_string(),
        }
    }

    /// Textarea input: replace the content and persist it
    pub fn input(&mut self, text: &str, store: &mut SessionStore) {
        self.content = text.to_string();
        store.set(STORAGE_KEY, text);
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_persists_through_the_session_store() {
        let mut store = SessionStore::new();
        let mut notepad = Notepad::load(&store);
        assert_eq!(notepad.content(), "");

        notepad.input("dear diary", &mut store);
        notepad.input("dear diary, hello", &mut store);

        // A fresh notepad over the same store sees the last content
        let reloaded = Notepad::load(&store);
        assert_eq!(reloaded.content(), "dear diary, hello");
    }
}
