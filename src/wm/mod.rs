//! Window Manager Module
//!
//! Tracks window state (open/closed/minimized/maximized, geometry, stacking)
//! and mediates every mutation of it: the operations API, the taskbar that
//! mirrors it, the focus/z-order pool, and pointer-driven dragging.
//!
//! All operations accept an opaque window id and are silent no-ops on ids
//! the registry does not know; UI event wiring may legitimately race with a
//! target's absence, so nothing here raises.

pub mod drag;
pub mod focus;
pub mod registry;
pub mod responsive;
pub mod taskbar;
pub mod window;

use tracing::{debug, info};

use crate::config::{DesktopConfig, WindowDef};
use crate::shared::Geometry;
use drag::DragController;
use focus::FocusManager;
use registry::WindowRegistry;
use responsive::ResponsiveLayout;
use taskbar::Taskbar;
use window::{Visibility, WindowFlags};

/// Fallback position for a first open whose configured geometry would land
/// partially off the desktop
const SNAP_POSITION: (i32, i32) = (50, 50);

pub struct WindowManager {
    /// Authoritative window state
    pub registry: WindowRegistry,

    /// Taskbar entries mirroring the registry
    pub taskbar: Taskbar,

    /// Monotonic z-order pool
    focus_manager: FocusManager,

    /// In-flight drag gesture, if any
    drag: DragController,

    /// Narrow-viewport geometry overrides
    responsive: ResponsiveLayout,

    /// Current viewport size
    viewport_width: u32,
    viewport_height: u32,

    /// Desktop metrics from configuration
    taskbar_height: u32,
    mobile_breakpoint: u32,
}

impl WindowManager {
    pub fn new(defs: Vec<WindowDef>, desktop: &DesktopConfig) -> Self {
        info!(
            "Initializing window manager ({} window definitions, viewport {}x{})",
            defs.len(),
            desktop.viewport_width,
            desktop.viewport_height
        );
        Self {
            registry: WindowRegistry::new(defs),
            taskbar: Taskbar::new(),
            focus_manager: FocusManager::new(),
            drag: DragController::new(),
            responsive: ResponsiveLayout::new(),
            viewport_width: desktop.viewport_width,
            viewport_height: desktop.viewport_height,
            taskbar_height: desktop.taskbar_height,
            mobile_breakpoint: desktop.mobile_breakpoint,
        }
    }

    /// The rectangle windows are dragged within; the taskbar overlays its
    /// bottom strip
    pub fn desktop_bounds(&self) -> Geometry {
        Geometry::new(0, 0, self.viewport_width, self.viewport_height)
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn is_mobile(&self) -> bool {
        self.responsive.is_mobile()
    }

    // ------------------------------------------------------------------
    // Operations API
    // ------------------------------------------------------------------

    /// Open a window. The registry entry is created from the configured
    /// definition on the first open; reopening restores prior state. Always
    /// ends by focusing the target, so opening an already-Open window only
    /// refocuses it.
    pub fn open(&mut self, id: &str) {
        let bounds = self.desktop_bounds();
        let Some(win) = self.registry.ensure(id) else {
            debug!("open: unknown window '{}', ignoring", id);
            return;
        };

        if win.visibility != Visibility::Open {
            win.visibility = Visibility::Open;

            let first_open = !win.flags.contains(WindowFlags::EVER_OPENED);
            win.flags.insert(WindowFlags::EVER_OPENED);

            // One-time placement correction: a configured geometry that sits
            // partially off the desktop snaps to the fixed default, but only
            // if the user never moved the window and it is not maximized.
            if first_open
                && !win.flags.contains(WindowFlags::EVER_MOVED)
                && !win.is_maximized()
                && !win.geometry.fits_within(&bounds)
            {
                win.geometry.x = SNAP_POSITION.0;
                win.geometry.y = SNAP_POSITION.1;
                debug!("Snapped window '{}' into the viewport", id);
            }

            let title = win.title.clone();
            self.taskbar.create_entry(id, &title);
            info!("Opened window '{}'", id);
        }

        self.focus(id);
    }

    /// Close a window: hide it, clear the maximized state, and drop its
    /// taskbar entry. The registry entry survives for a later reopen.
    pub fn close(&mut self, id: &str) {
        let Some(win) = self.registry.get_mut(id) else {
            return;
        };
        win.visibility = Visibility::Closed;
        win.flags.remove(WindowFlags::MAXIMIZED);
        win.saved_geometry = None;
        self.taskbar.remove_entry(id);
        info!("Closed window '{}'", id);
    }

    /// Minimize an Open window. Its taskbar entry persists but loses the
    /// active highlight. No effect on a Closed window.
    pub fn minimize(&mut self, id: &str) {
        let Some(win) = self.registry.get_mut(id) else {
            return;
        };
        if win.visibility != Visibility::Open {
            return;
        }
        win.visibility = Visibility::Minimized;
        self.taskbar.clear_active(id);
        info!("Minimized window '{}'", id);
    }

    /// Maximize/restore toggle. Maximizing snapshots the current geometry
    /// and fills the desktop (full width, viewport height minus the
    /// taskbar); restoring writes the snapshot back. Either branch ends by
    /// focusing the target.
    pub fn toggle_maximize(&mut self, id: &str) {
        let max_geometry = Geometry::new(
            0,
            0,
            self.viewport_width,
            self.viewport_height.saturating_sub(self.taskbar_height),
        );
        let Some(win) = self.registry.get_mut(id) else {
            return;
        };

        if win.is_maximized() {
            if let Some(saved) = win.saved_geometry.take() {
                win.geometry = saved;
            }
            win.flags.remove(WindowFlags::MAXIMIZED);
            info!("Restored window '{}'", id);
        } else {
            win.saved_geometry = Some(win.geometry);
            win.geometry = max_geometry;
            win.flags.insert(WindowFlags::MAXIMIZED);
            info!("Maximized window '{}'", id);
        }

        self.focus(id);
    }

    /// Bring a window to the front: draw the next value from the z-order
    /// pool, assign it, and repaint the taskbar's active highlight. No-op on
    /// unknown or Closed ids.
    pub fn focus(&mut self, id: &str) {
        let Some(win) = self.registry.get_mut(id) else {
            return;
        };
        if win.visibility == Visibility::Closed {
            return;
        }
        let z = self.focus_manager.next();
        win.z_order = Some(z);
        self.taskbar.set_active(id);
        debug!("Focused window '{}' (z={})", id, z);
    }

    /// The focused window: the Open window holding the maximal z-order
    pub fn focused(&self) -> Option<&str> {
        self.registry
            .windows()
            .filter(|w| w.is_open())
            .filter_map(|w| w.z_order.map(|z| (z, w.id.as_str())))
            .max_by_key(|&(z, _)| z)
            .map(|(_, id)| id)
    }

    // ------------------------------------------------------------------
    // Taskbar clicks
    // ------------------------------------------------------------------

    /// Single-click cycle semantics for a taskbar entry: a hidden window is
    /// (re)opened, a window behind another is brought forward, and the
    /// frontmost window is minimized.
    pub fn taskbar_click(&mut self, id: &str) {
        let Some(win) = self.registry.get(id) else {
            return;
        };
        match win.visibility {
            Visibility::Closed | Visibility::Minimized => self.open(id),
            Visibility::Open => {
                if win.z_order.unwrap_or(0) < self.focus_manager.current() {
                    self.focus(id);
                } else {
                    self.minimize(id);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Pointer gestures
    // ------------------------------------------------------------------

    /// Pointer-down on a window's title region. Refused below the mobile
    /// breakpoint and on embedded controls; otherwise focuses the window,
    /// marks it user-moved, and starts a drag gesture with the desktop
    /// bounds captured once.
    pub fn pointer_down(&mut self, id: &str, x: i32, y: i32, on_control: bool) {
        if self.viewport_width < self.mobile_breakpoint {
            return;
        }
        if on_control {
            return;
        }
        match self.registry.get(id) {
            Some(win) if win.is_open() => {}
            _ => return,
        }

        self.focus(id);
        let bounds = self.desktop_bounds();
        let Some(win) = self.registry.get_mut(id) else {
            return;
        };
        win.flags.insert(WindowFlags::EVER_MOVED);
        let snapshot = win.clone();
        self.drag.start(&snapshot, x, y, bounds);
    }

    /// Pointer motion: forwarded to the in-flight gesture, if any
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.drag.motion(&mut self.registry, x, y);
    }

    /// Pointer release: tears the gesture down
    pub fn pointer_up(&mut self) {
        self.drag.finish();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------

    /// Record a viewport resize and re-evaluate the responsive overrides
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.responsive
            .apply(&mut self.registry, width, self.mobile_breakpoint);
    }
}
