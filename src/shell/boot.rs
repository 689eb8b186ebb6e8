//! Boot / Login / Shutdown Module
//!
//! The staged power-on sequence (BIOS splash, logo, login screen) and the
//! shutdown animation that lands back on the login screen. Stage timing is
//! driven by the event loop's timers; this module only owns the state
//! machine.

use std::time::Duration;

use tracing::{debug, info, warn};

/// BIOS splash duration
pub const BIOS_STAGE: Duration = Duration::from_millis(1800);
/// Logo stage duration during power-on
pub const LOGO_STAGE: Duration = Duration::from_millis(2600);
/// Fade-out after the login click before the desktop appears
pub const LOGIN_SETTLE: Duration = Duration::from_millis(400);
/// Logo stage duration during shutdown
pub const SHUTDOWN_STAGE: Duration = Duration::from_millis(2500);

/// Boot screen stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStage {
    /// BIOS splash
    Bios,
    /// Animated logo (shown on power-on and again during shutdown)
    Logo,
    /// Login screen, waiting for the user
    Login,
    /// Boot screen gone, desktop visible
    Desktop,
}

/// Boot sequence state
pub struct BootSequence {
    stage: BootStage,

    /// A shutdown is mid-animation; further shutdown triggers are dropped
    shutdown_in_progress: bool,
}

impl BootSequence {
    pub fn new() -> Self {
        Self {
            stage: BootStage::Bios,
            shutdown_in_progress: false,
        }
    }

    pub fn stage(&self) -> BootStage {
        self.stage
    }

    /// Whether desktop-surface events should be processed at all
    pub fn desktop_visible(&self) -> bool {
        self.stage == BootStage::Desktop
    }

    /// Advance the power-on staging. Returns the delay until the next
    /// advance, or `None` once the login screen is reached (which waits for
    /// the user instead of a timer).
    pub fn advance(&mut self) -> Option<Duration> {
        match self.stage {
            BootStage::Bios => {
                self.stage = BootStage::Logo;
                debug!("Boot: logo stage");
                Some(LOGO_STAGE)
            }
            BootStage::Logo => {
                self.stage = BootStage::Login;
                debug!("Boot: login stage");
                None
            }
            BootStage::Login | BootStage::Desktop => None,
        }
    }

    /// Login click on the login screen. Returns true when accepted; the
    /// caller schedules the settle delay and then calls `complete_login`.
    pub fn login(&mut self) -> bool {
        if self.stage != BootStage::Login {
            return false;
        }
        info!("Login accepted");
        true
    }

    /// Settle timer fired: the boot screen is gone, the desktop is up
    pub fn complete_login(&mut self) {
        self.stage = BootStage::Desktop;
    }

    /// Start the shutdown animation. A trigger while one is already in
    /// flight is dropped (single in-flight guard, not a lock).
    pub fn trigger_shutdown(&mut self) -> bool {
        if self.shutdown_in_progress {
            warn!("Shutdown already in progress, ignoring trigger");
            return false;
        }
        if self.stage != BootStage::Desktop {
            return false;
        }
        info!("Shutting down");
        self.shutdown_in_progress = true;
        self.stage = BootStage::Logo;
        true
    }

    /// Shutdown timer fired: land back on the login screen
    pub fn finish_shutdown(&mut self) {
        self.stage = BootStage::Login;
        self.shutdown_in_progress = false;
    }
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new()
    }
}
