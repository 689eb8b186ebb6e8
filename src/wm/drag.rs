//! Drag Module
//!
//! Title-bar window dragging. Each gesture runs a small Idle -> Dragging ->
//! Idle state machine with its own state object (target id, pointer offset,
//! captured desktop bounds), so no gesture state outlives the gesture and
//! overlapping gestures cannot corrupt one another.

use tracing::debug;

use crate::shared::Geometry;
use crate::wm::registry::WindowRegistry;
use crate::wm::window::Window;

/// Per-gesture drag state
#[derive(Debug, Clone)]
pub struct DragGesture {
    /// Window being dragged
    pub window: String,

    /// Pointer offset from the window's top-left corner at gesture start
    pub offset_x: i32,
    pub offset_y: i32,

    /// Desktop bounds captured once at gesture start; the desktop is assumed
    /// not to resize mid-drag
    pub bounds: Geometry,
}

/// Drag controller
#[derive(Debug, Default)]
pub struct DragController {
    /// `Some` while a gesture is in flight
    gesture: Option<DragGesture>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle -> Dragging: record the pointer offset and capture the desktop
    /// bounds for the lifetime of this gesture.
    pub fn start(&mut self, window: &Window, pointer_x: i32, pointer_y: i32, bounds: Geometry) {
        debug!(
            "Starting drag for window '{}' at ({}, {})",
            window.id, pointer_x, pointer_y
        );
        self.gesture = Some(DragGesture {
            window: window.id.clone(),
            offset_x: pointer_x - window.geometry.x,
            offset_y: pointer_y - window.geometry.y,
            bounds,
        });
    }

    /// Pointer motion while Dragging: clamp the candidate position so the
    /// window's full box stays inside the captured bounds, then write it.
    pub fn motion(&mut self, registry: &mut WindowRegistry, pointer_x: i32, pointer_y: i32) {
        let Some(gesture) = &self.gesture else {
            return;
        };
        let Some(win) = registry.get_mut(&gesture.window) else {
            return;
        };

        let max_left = gesture.bounds.right() - win.geometry.width as i32;
        let max_top = gesture.bounds.bottom() - win.geometry.height as i32;

        win.geometry.x = (pointer_x - gesture.offset_x).max(gesture.bounds.x).min(max_left);
        win.geometry.y = (pointer_y - gesture.offset_y).max(gesture.bounds.y).min(max_top);
    }

    /// Dragging -> Idle: the gesture state is dropped wholesale, so nothing
    /// of it can leak into a later gesture.
    pub fn finish(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            debug!("Finished drag for window '{}'", gesture.window);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowDef;
    use crate::wm::window::Visibility;

    fn registry_with(id: &str, geometry: Geometry) -> WindowRegistry {
        let mut registry = WindowRegistry::new(vec![WindowDef {
            id: id.into(),
            title: id.into(),
            x: geometry.x,
            y: geometry.y,
            width: geometry.width,
            height: geometry.height,
        }]);
        let win = registry.ensure(id).unwrap();
        win.visibility = Visibility::Open;
        registry
    }

    const BOUNDS: Geometry = Geometry { x: 0, y: 0, width: 1280, height: 800 };

    #[test]
    fn motion_follows_pointer_minus_offset() {
        let mut registry = registry_with("about", Geometry::new(100, 100, 400, 300));
        let mut drag = DragController::new();

        // Grab the titlebar 20,10 inside the window
        let win = registry.get("about").unwrap().clone();
        drag.start(&win, 120, 110, BOUNDS);
        assert!(drag.is_dragging());

        drag.motion(&mut registry, 320, 210);
        let g = registry.get("about").unwrap().geometry;
        assert_eq!((g.x, g.y), (300, 200));
    }

    #[test]
    fn motion_clamps_to_desktop_bounds() {
        let mut registry = registry_with("about", Geometry::new(100, 100, 400, 300));
        let mut drag = DragController::new();
        let win = registry.get("about").unwrap().clone();
        drag.start(&win, 100, 100, BOUNDS);

        // Far past the top-left corner
        drag.motion(&mut registry, -5000, -5000);
        let g = registry.get("about").unwrap().geometry;
        assert_eq!((g.x, g.y), (0, 0));

        // Far past the bottom-right corner
        drag.motion(&mut registry, 5000, 5000);
        let g = registry.get("about").unwrap().geometry;
        assert_eq!((g.x, g.y), (1280 - 400, 800 - 300));
        assert!(g.fits_within(&BOUNDS));
    }

    #[test]
    fn clamping_holds_for_any_pointer_path() {
        let mut registry = registry_with("about", Geometry::new(200, 150, 320, 240));
        let mut drag = DragController::new();
        let win = registry.get("about").unwrap().clone();
        drag.start(&win, 210, 160, BOUNDS);

        for (px, py) in [(0, 0), (9999, 12), (-40, 9999), (640, 400), (-1, -1), (1281, 801)] {
            drag.motion(&mut registry, px, py);
            let g = registry.get("about").unwrap().geometry;
            assert!(g.fits_within(&BOUNDS), "escaped bounds at pointer ({px}, {py}): {g:?}");
        }
    }

    #[test]
    fn finish_tears_down_gesture_state() {
        let mut registry = registry_with("about", Geometry::new(100, 100, 400, 300));
        let mut drag = DragController::new();
        let win = registry.get("about").unwrap().clone();
        drag.start(&win, 110, 110, BOUNDS);
        drag.finish();
        assert!(!drag.is_dragging());

        // Motion after release must not move anything
        drag.motion(&mut registry, 900, 900);
        let g = registry.get("about").unwrap().geometry;
        assert_eq!((g.x, g.y), (100, 100));
    }
}
