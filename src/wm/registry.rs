//! Window Registry
//!
//! The authoritative id -> window state mapping. All other components read
//! and write window state through the registry instead of duplicating it.
//!
//! Entries are created lazily from the configured window definitions the
//! first time an id is opened; ids with no definition are unknown targets
//! and every operation on them is a silent no-op.

use std::collections::HashMap;

use tracing::debug;

use crate::config::WindowDef;
use crate::shared::Geometry;
use crate::wm::window::Window;

/// Window registry
pub struct WindowRegistry {
    /// Configured definitions, by id (the "static markup")
    defs: HashMap<String, WindowDef>,

    /// Live entries, created on first open
    windows: HashMap<String, Window>,
}

impl WindowRegistry {
    pub fn new(defs: Vec<WindowDef>) -> Self {
        Self {
            defs: defs.into_iter().map(|d| (d.id.clone(), d)).collect(),
            windows: HashMap::new(),
        }
    }

    /// Look up a live entry
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Look up a live entry for mutation
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Window> {
        self.windows.get_mut(id)
    }

    /// Live entry for `id`, created from its definition if this is the first
    /// time the id is referenced. Returns `None` for unknown ids.
    pub fn ensure(&mut self, id: &str) -> Option<&mut Window> {
        if !self.windows.contains_key(id) {
            let def = self.defs.get(id)?;
            debug!("Creating registry entry for window '{}'", id);
            let geometry = Geometry::new(def.x, def.y, def.width, def.height);
            self.windows
                .insert(id.to_string(), Window::new(id, def.title.clone(), geometry));
        }
        self.windows.get_mut(id)
    }

    /// All live entries, in no particular order
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// All live entries for mutation, in no particular order
    pub fn windows_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        self.windows.values_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wm::window::Visibility;

    fn defs() -> Vec<WindowDef> {
        vec![WindowDef {
            id: "about".into(),
            title: "About Me".into(),
            x: 120,
            y: 80,
            width: 520,
            height: 380,
        }]
    }

    #[test]
    fn ensure_creates_from_definition_once() {
        let mut registry = WindowRegistry::new(defs());
        assert!(registry.get("about").is_none());

        let win = registry.ensure("about").unwrap();
        assert_eq!(win.title, "About Me");
        assert_eq!(win.geometry, Geometry::new(120, 80, 520, 380));
        win.visibility = Visibility::Open;

        // Second ensure returns the same entry, state intact
        let win = registry.ensure("about").unwrap();
        assert_eq!(win.visibility, Visibility::Open);
        assert_eq!(registry.windows().count(), 1);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut registry = WindowRegistry::new(defs());
        assert!(registry.ensure("nope").is_none());
        assert!(registry.get("nope").is_none());
        assert_eq!(registry.windows().count(), 0);
    }
}
