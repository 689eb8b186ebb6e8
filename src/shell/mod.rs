//! Shell Module
//!
//! Desktop furniture around the window manager: boot/login/shutdown
//! staging, the taskbar clock, the start menu, desktop icons, and the scene
//! projection.

pub mod boot;
pub mod clock;
pub mod icons;
pub mod menu;
pub mod render;

use crate::config::Config;

/// Shell state
pub struct Shell {
    /// Boot/login/shutdown staging
    pub boot: boot::BootSequence,

    /// Taskbar clock
    pub clock: clock::Clock,

    /// Start menu
    pub menu: menu::StartMenu,

    /// Desktop icons
    pub icons: icons::DesktopIcons,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            boot: boot::BootSequence::new(),
            clock: clock::Clock::new(),
            menu: menu::StartMenu::new(),
            icons: icons::DesktopIcons::new(&config.icons),
        }
    }
}
