//! Responsive Layout Module
//!
//! Narrow-viewport override: below the breakpoint every Open window is
//! forced to full width at the top-left corner, and each window's original
//! geometry is remembered (once) so it can be restored when the viewport
//! grows back past the breakpoint.
//!
//! This writes window geometry directly; it is a collaborator of the window
//! manager, not part of the operations API. The single-threaded event loop
//! guarantees it never runs concurrently with an in-flight drag gesture.

use tracing::debug;

use crate::wm::registry::WindowRegistry;

/// Responsive layout state
#[derive(Debug, Default)]
pub struct ResponsiveLayout {
    /// Whether the narrow-viewport overrides are currently in force
    mobile: bool,
}

impl ResponsiveLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Re-evaluate the viewport class and rewrite window geometry on a
    /// crossing. Safe to call on every resize event: the pre-mobile snapshot
    /// is taken at most once per window until a full restore occurs.
    pub fn apply(&mut self, registry: &mut WindowRegistry, viewport_width: u32, breakpoint: u32) {
        self.mobile = viewport_width < breakpoint;

        if self.mobile {
            for win in registry.windows_mut() {
                if win.mobile_saved.is_none() {
                    win.mobile_saved = Some(win.geometry);
                }
                if win.is_open() {
                    win.geometry.x = 0;
                    win.geometry.y = 0;
                    win.geometry.width = viewport_width;
                }
            }
            debug!("Responsive layout: mobile overrides applied ({}px)", viewport_width);
        } else {
            for win in registry.windows_mut() {
                if let Some(saved) = win.mobile_saved.take() {
                    win.geometry = saved;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowDef;
    use crate::shared::Geometry;
    use crate::wm::window::Visibility;

    const BREAKPOINT: u32 = 768;

    fn registry() -> WindowRegistry {
        let mut registry = WindowRegistry::new(vec![
            WindowDef { id: "about".into(), title: "About Me".into(), x: 120, y: 80, width: 520, height: 380 },
            WindowDef { id: "projects".into(), title: "Projects".into(), x: 200, y: 140, width: 600, height: 420 },
        ]);
        registry.ensure("about").unwrap().visibility = Visibility::Open;
        registry.ensure("projects").unwrap().visibility = Visibility::Minimized;
        registry
    }

    #[test]
    fn mobile_forces_open_windows_full_width() {
        let mut registry = registry();
        let mut responsive = ResponsiveLayout::new();

        responsive.apply(&mut registry, 480, BREAKPOINT);
        assert!(responsive.is_mobile());

        let about = registry.get("about").unwrap();
        assert_eq!((about.geometry.x, about.geometry.y), (0, 0));
        assert_eq!(about.geometry.width, 480);
        // Height is left to the window's own content
        assert_eq!(about.geometry.height, 380);

        // Minimized windows keep their geometry but still get a snapshot
        let projects = registry.get("projects").unwrap();
        assert_eq!(projects.geometry, Geometry::new(200, 140, 600, 420));
        assert!(projects.mobile_saved.is_some());
    }

    #[test]
    fn snapshot_is_taken_once_and_restored_on_widening() {
        let mut registry = registry();
        let mut responsive = ResponsiveLayout::new();

        responsive.apply(&mut registry, 480, BREAKPOINT);
        // A second narrow resize must not overwrite the snapshot with the
        // already-overridden geometry
        responsive.apply(&mut registry, 400, BREAKPOINT);

        responsive.apply(&mut registry, 1280, BREAKPOINT);
        assert!(!responsive.is_mobile());

        let about = registry.get("about").unwrap();
        assert_eq!(about.geometry, Geometry::new(120, 80, 520, 380));
        assert!(about.mobile_saved.is_none());
    }

    #[test]
    fn desktop_resize_without_prior_mobile_is_inert() {
        let mut registry = registry();
        let mut responsive = ResponsiveLayout::new();

        responsive.apply(&mut registry, 1920, BREAKPOINT);
        let about = registry.get("about").unwrap();
        assert_eq!(about.geometry, Geometry::new(120, 80, 520, 380));
    }
}
