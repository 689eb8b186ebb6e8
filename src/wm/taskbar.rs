//! Taskbar Module
//!
//! One taskbar entry per Open-or-Minimized window, in order of creation.
//! Entries mirror registry state: created on open, removed on close, and the
//! active highlight tracks the focused window.

use tracing::debug;

/// A single taskbar button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    /// Window id the button is keyed by
    pub id: String,

    /// Button label, mirrored from the window title
    pub title: String,

    /// Active (focused-window) highlight
    pub active: bool,
}

/// Taskbar state
#[derive(Debug, Default)]
pub struct Taskbar {
    /// Entries in order of creation
    entries: Vec<TaskbarEntry>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry for `id` if none exists. Idempotent.
    pub fn create_entry(&mut self, id: &str, title: &str) {
        if self.contains(id) {
            return;
        }
        debug!("Creating taskbar entry for '{}'", id);
        self.entries.push(TaskbarEntry {
            id: id.to_string(),
            title: title.to_string(),
            active: false,
        });
    }

    /// Remove the entry for `id`, if present
    pub fn remove_entry(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
    }

    /// Mark `id` active and every other entry inactive. If `id` has no
    /// entry, every entry simply becomes inactive.
    pub fn set_active(&mut self, id: &str) {
        for entry in &mut self.entries {
            entry.active = entry.id == id;
        }
    }

    /// Drop the active highlight from `id` only
    pub fn clear_active(&mut self, id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.active = false;
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Entries in creation order
    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }
}
