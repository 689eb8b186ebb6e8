//! Start menu
//!
//! Visibility toggle plus the document-wide dismissal rule: any click that
//! lands neither inside the menu nor on the start button closes it.

/// Start menu state
#[derive(Debug, Default)]
pub struct StartMenu {
    visible: bool,
}

impl StartMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Start button clicked
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// A click anywhere on the desktop surface
    pub fn handle_desktop_click(&mut self, in_menu: bool, on_start: bool) {
        if !in_menu && !on_start {
            self.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_outside_dismissal() {
        let mut menu = StartMenu::new();
        menu.toggle();
        assert!(menu.is_visible());

        // Clicks inside the menu or on the start button leave it open
        menu.handle_desktop_click(true, false);
        assert!(menu.is_visible());
        menu.handle_desktop_click(false, true);
        assert!(menu.is_visible());

        menu.handle_desktop_click(false, false);
        assert!(!menu.is_visible());

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_visible());
    }
}
