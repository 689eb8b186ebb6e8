//! Desktop icons
//!
//! Each icon resolves to exactly one action: open a window, open an
//! external link, or show an alert-style message. Activation dispatches the
//! action and lights a brief selection flash cleared by a timer.

use std::time::Duration;

use tracing::debug;

use crate::config::IconDef;

/// Selection flash duration after any icon click
pub const ICON_FLASH: Duration = Duration::from_millis(150);

/// The three mutually exclusive icon/menu action kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconAction {
    /// Open (or refocus) a managed window
    OpenWindow(String),
    /// Open an external link outside the simulation
    OpenExternal(String),
    /// Show an alert-style message
    Alert(String),
}

/// Resolve the optional action fields shared by icons and start-menu items.
/// Priority when several are set: window > external > alert.
pub fn resolve_action(
    window: &Option<String>,
    external: &Option<String>,
    alert: &Option<String>,
) -> Option<IconAction> {
    if let Some(id) = window {
        Some(IconAction::OpenWindow(id.clone()))
    } else if let Some(url) = external {
        Some(IconAction::OpenExternal(url.clone()))
    } else {
        alert.as_ref().map(|msg| IconAction::Alert(msg.clone()))
    }
}

/// A single desktop icon
#[derive(Debug)]
pub struct DesktopIcon {
    pub id: String,
    pub label: String,
    pub action: Option<IconAction>,
    /// Selection flash currently lit
    pub selected: bool,
}

/// Desktop icon set
#[derive(Debug, Default)]
pub struct DesktopIcons {
    icons: Vec<DesktopIcon>,
}

impl DesktopIcons {
    pub fn new(defs: &[IconDef]) -> Self {
        let icons = defs
            .iter()
            .map(|def| DesktopIcon {
                id: def.id.clone(),
                label: def.label.clone(),
                action: resolve_action(&def.window, &def.external, &def.alert),
                selected: false,
            })
            .collect();
        Self { icons }
    }

    /// Activate an icon: light the selection flash and hand back its action.
    /// Unknown icons and icons without an action dispatch nothing.
    pub fn activate(&mut self, id: &str) -> Option<IconAction> {
        let icon = self.icons.iter_mut().find(|i| i.id == id)?;
        icon.selected = true;
        debug!("Icon '{}' activated", id);
        icon.action.clone()
    }

    /// Flash timer fired
    pub fn clear_selection(&mut self, id: &str) {
        if let Some(icon) = self.icons.iter_mut().find(|i| i.id == id) {
            icon.selected = false;
        }
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }
}
