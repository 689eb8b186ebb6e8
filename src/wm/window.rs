//! Window state
//!
//! Per-window registry entry: visibility, geometry, state flags, and the
//! geometry snapshots used by maximize/restore and the responsive layout.

use bitflags::bitflags;

use crate::shared::Geometry;

bitflags! {
    /// Per-window state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowFlags: u32 {
        /// Geometry is currently the full-desktop maximized geometry
        const MAXIMIZED   = 1 << 0;
        /// The user has dragged this window at least once
        const EVER_MOVED  = 1 << 1;
        /// The window has been opened at least once
        const EVER_OPENED = 1 << 2;
    }
}

impl Default for WindowFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Window visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Never shown, or explicitly dismissed
    #[default]
    Closed,
    /// Visible and interactive
    Open,
    /// Hidden but remembered; its taskbar entry persists
    Minimized,
}

/// A managed window
///
/// Created lazily from its config definition the first time `open` is called
/// for its id, and never deleted afterwards: `close` only flips visibility,
/// so reopening restores the prior geometry.
#[derive(Debug, Clone)]
pub struct Window {
    /// Stable identifier from configuration
    pub id: String,

    /// Title shown on the titlebar and the taskbar entry
    pub title: String,

    /// Current visibility
    pub visibility: Visibility,

    /// Current geometry; meaningful only while not maximized
    pub geometry: Geometry,

    /// Window state flags
    pub flags: WindowFlags,

    /// Geometry snapshot taken at maximize time; `Some` iff MAXIMIZED is set
    pub saved_geometry: Option<Geometry>,

    /// Pre-mobile geometry remembered by the responsive layout; saved once
    /// when crossing below the breakpoint, cleared on restore
    pub mobile_saved: Option<Geometry>,

    /// Stacking rank drawn from the monotonic z-order pool; `None` until
    /// first focused
    pub z_order: Option<u64>,
}

impl Window {
    pub fn new(id: impl Into<String>, title: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            visibility: Visibility::Closed,
            geometry,
            flags: WindowFlags::default(),
            saved_geometry: None,
            mobile_saved: None,
            z_order: None,
        }
    }

    pub fn is_maximized(&self) -> bool {
        self.flags.contains(WindowFlags::MAXIMIZED)
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Open or Minimized: the window has a live registry presence and a
    /// taskbar entry
    pub fn on_taskbar(&self) -> bool {
        matches!(self.visibility, Visibility::Open | Visibility::Minimized)
    }
}
