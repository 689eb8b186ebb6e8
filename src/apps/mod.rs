//! Toy applications
//!
//! The desktop's built-in apps. They hold no window state of their own;
//! anything window-shaped goes through the window manager's operations API.

pub mod cmd;
pub mod notepad;
pub mod photos;
pub mod session;

use crate::config::Config;

/// Application state
pub struct Apps {
    /// Command prompt transcript + interpreter
    pub cmd: cmd::CommandPrompt,

    /// Notepad, persisted to the session store
    pub notepad: notepad::Notepad,

    /// Photo viewer
    pub photos: photos::PhotoViewer,

    /// Session-scoped key/value storage
    pub session: session::SessionStore,
}

impl Apps {
    pub fn new(config: &Config) -> Self {
        let session = session::SessionStore::new();
        Self {
            cmd: cmd::CommandPrompt::new(&config.cmd),
            notepad: notepad::Notepad::load(&session),
            photos: photos::PhotoViewer::new(&config.photos),
            session,
        }
    }
}
