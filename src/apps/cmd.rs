//! Command prompt app
//!
//! A toy line interpreter over an output transcript. Commands either print
//! into the transcript or ask the window manager to open a window; the
//! request is returned to the caller rather than applied here.

use tracing::debug;

use crate::config::CmdConfig;

/// Command prompt state
pub struct CommandPrompt {
    /// Transcript banner, restored by `clear`
    banner: String,

    /// Line printed by `whoami`
    operator: String,

    /// Output transcript, oldest first
    lines: Vec<String>,
}

impl CommandPrompt {
    pub fn new(config: &CmdConfig) -> Self {
        Self {
            banner: config.banner.clone(),
            operator: config.operator.clone(),
            lines: vec![config.banner.clone()],
        }
    }

    /// Interpret one input line. The echoed prompt and any response are
    /// appended to the transcript; the returned id, if any, is a window the
    /// caller should open.
    pub fn submit(&mut self, input: &str) -> Option<&'static str> {
        let value = input.trim().to_string();
        debug!("cmd: '{}'", value);
        self.lines.push(format!("C:\\>{}", value));

        match value.to_lowercase().as_str() {
            "help" => {
                self.lines.push("commands: about, projects, clear, whoami".to_string());
                None
            }
            "about" => {
                self.lines.push("Opened About Me window.".to_string());
                Some("about")
            }
            "projects" => {
                self.lines.push("Opened Projects window.".to_string());
                Some("projects")
            }
            "whoami" => {
                self.lines.push(self.operator.clone());
                None
            }
            "clear" => {
                self.lines = vec![self.banner.clone()];
                None
            }
            _ => {
                self.lines.push(format!(
                    "'{}' is not recognized as an internal or external command.",
                    value
                ));
                None
            }
        }
    }

    /// Transcript, oldest line first
    pub fn transcript(&self) -> &[String] {
        &self.lines
    }
}
