//! Input Event Stream
//!
//! Discrete input events for the desktop, decoded from JSON lines on stdin.
//! Each line is one event; malformed lines are logged and skipped so a bad
//! producer cannot wedge the loop.

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

/// One discrete input event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer-down on a window's title region. `on_control` marks hits on
    /// embedded titlebar buttons, which must not start a drag.
    PointerDown {
        window: String,
        x: i32,
        y: i32,
        #[serde(default)]
        on_control: bool,
    },
    PointerMove { x: i32, y: i32 },
    PointerUp,

    /// Click on a taskbar entry
    TaskbarClick { window: String },

    /// Titlebar button on a window
    WindowControl { window: String, action: WindowControlAction },

    /// Desktop icon activation (double-click, or single tap on touch)
    IconActivate { icon: String },

    /// Start button click
    StartToggle,

    /// A click on the desktop surface, for start-menu dismissal
    DesktopClick {
        #[serde(default)]
        in_menu: bool,
        #[serde(default)]
        on_start: bool,
    },

    /// Start-menu item activation
    MenuSelect { item: String },

    /// Click on the login screen's user tile
    LoginClick,

    /// Command prompt input line
    CmdLine { line: String },

    /// Notepad textarea content change
    NotepadInput { text: String },

    /// Photo thumbnail selection
    PhotoSelect { src: String },

    /// Contact form submission
    ContactSubmit,

    /// Viewport size change
    ViewportResized { width: u32, height: u32 },
}

/// Titlebar button actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowControlAction {
    Close,
    Minimize,
    Maximize,
}

/// Input decode failure for a single line
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed input event: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode one JSON line into an event
pub fn decode(line: &str) -> Result<InputEvent, DecodeError> {
    Ok(serde_json::from_str(line)?)
}

/// Async stream of input events over stdin
pub struct EventStream {
    lines: Lines<BufReader<Stdin>>,
}

impl EventStream {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Next decoded event, or `None` when stdin closes. Blank and malformed
    /// lines are skipped.
    pub async fn next(&mut self) -> Result<Option<InputEvent>> {
        while let Some(line) = self
            .lines
            .next_line()
            .await
            .context("Failed to read input event line")?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match decode(line) {
                Ok(event) => return Ok(Some(event)),
                Err(err) => {
                    warn!("Skipping input line: {}", err);
                    continue;
                }
            }
        }
        Ok(None)
    }
}

impl Default for EventStream {
    fn default() -> Self {
        Self::new()
    }
}
