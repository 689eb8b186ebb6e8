//! Configuration system for the Retrodesk simulation
//!
//! Loads configuration from a TOML file at `~/.config/retrodesk/config.toml`
//! and auto-generates the default file on first run if missing. The config
//! is the desktop's "static markup": it declares the windows, desktop icons,
//! start-menu items, and app content that exist at boot; nothing is
//! instantiated dynamically at runtime.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub desktop: DesktopConfig,
    pub boot: BootConfig,
    pub windows: Vec<WindowDef>,
    pub icons: Vec<IconDef>,
    pub start_menu: Vec<MenuItemDef>,
    pub cmd: CmdConfig,
    pub photos: PhotosConfig,
    pub contact: ContactConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            desktop: DesktopConfig::default(),
            boot: BootConfig::default(),
            windows: default_windows(),
            icons: default_icons(),
            start_menu: default_start_menu(),
            cmd: CmdConfig::default(),
            photos: PhotosConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found at {:?}, using defaults", config_path);
            if let Err(e) = Self::save_default(&config_path) {
                warn!("Failed to create default config file: {}", e);
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        info!("Configuration loaded from {:?}", config_path);
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("retrodesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Save default configuration to file
    fn save_default(path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let default_config = Self::default();
        let toml_string = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default config")?;

        fs::write(path, toml_string)
            .context("Failed to write default config file")?;

        info!("Created default config file at {:?}", path);
        Ok(())
    }
}

/// Desktop metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesktopConfig {
    /// Initial viewport width in layout units
    pub viewport_width: u32,
    /// Initial viewport height in layout units
    pub viewport_height: u32,
    /// Taskbar strip height; maximized windows stop above it
    pub taskbar_height: u32,
    /// Viewport width below which drag is disabled and the responsive
    /// layout takes over
    pub mobile_breakpoint: u32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 800,
            taskbar_height: 30,
            mobile_breakpoint: 768,
        }
    }
}

/// Boot sequence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootConfig {
    /// Windows opened right after login, in order
    pub open_on_login: Vec<String>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            open_on_login: vec!["about".to_string(), "projects".to_string()],
        }
    }
}

/// A window declaration: id, titlebar text, and initial geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowDef {
    pub id: String,
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A desktop icon. Exactly one of `window`, `external`, `alert` is meant to
/// be set; when several are, resolution priority is window > external >
/// alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub window: Option<String>,
    #[serde(default)]
    pub external: Option<String>,
    #[serde(default)]
    pub alert: Option<String>,
}

/// A start-menu item: the same action shape as icons, plus the shutdown
/// entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub window: Option<String>,
    #[serde(default)]
    pub external: Option<String>,
    #[serde(default)]
    pub alert: Option<String>,
    #[serde(default)]
    pub shutdown: bool,
}

/// Command prompt app configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmdConfig {
    /// Transcript banner, also restored by `clear`
    pub banner: String,
    /// Line printed by `whoami`
    pub operator: String,
}

impl Default for CmdConfig {
    fn default() -> Self {
        Self {
            banner: "Microsoft Windows XP [Version 5.1.2600]".to_string(),
            operator: "guest - Full-Stack Engineer, Retrodesk founder.".to_string(),
        }
    }
}

/// Photo viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotosConfig {
    /// Image names selectable in the viewer, first one preselected
    pub gallery: Vec<String>,
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            gallery: vec![
                "sunset.jpg".to_string(),
                "mountains.jpg".to_string(),
                "city-lights.jpg".to_string(),
            ],
        }
    }
}

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Alert-style reply shown on submit; the mail client is a visual shell
    pub reply: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            reply: "Thanks for reaching out! This mail client is a visual shell - you can contact me at guest@retrodesk.dev".to_string(),
        }
    }
}

fn default_windows() -> Vec<WindowDef> {
    vec![
        WindowDef { id: "about".into(), title: "About Me".into(), x: 120, y: 80, width: 520, height: 380 },
        WindowDef { id: "projects".into(), title: "Projects".into(), x: 220, y: 140, width: 640, height: 440 },
        WindowDef { id: "notepad".into(), title: "Notepad".into(), x: 300, y: 180, width: 480, height: 360 },
        WindowDef { id: "photos".into(), title: "My Photos".into(), x: 260, y: 120, width: 560, height: 420 },
        WindowDef { id: "cmd".into(), title: "Command Prompt".into(), x: 340, y: 220, width: 560, height: 340 },
        WindowDef { id: "mail".into(), title: "Mail".into(), x: 180, y: 100, width: 520, height: 400 },
    ]
}

fn default_icons() -> Vec<IconDef> {
    vec![
        IconDef { id: "about".into(), label: "About Me".into(), window: Some("about".into()), external: None, alert: None },
        IconDef { id: "projects".into(), label: "Projects".into(), window: Some("projects".into()), external: None, alert: None },
        IconDef { id: "notepad".into(), label: "Notepad".into(), window: Some("notepad".into()), external: None, alert: None },
        IconDef { id: "photos".into(), label: "My Photos".into(), window: Some("photos".into()), external: None, alert: None },
        IconDef { id: "cmd".into(), label: "Command Prompt".into(), window: Some("cmd".into()), external: None, alert: None },
        IconDef { id: "github".into(), label: "GitHub".into(), window: None, external: Some("https://github.com/retrodesk".into()), alert: None },
        IconDef { id: "recycle-bin".into(), label: "Recycle Bin".into(), window: None, external: None, alert: Some("The Recycle Bin is empty.".into()) },
    ]
}

fn default_start_menu() -> Vec<MenuItemDef> {
    vec![
        MenuItemDef { id: "about".into(), label: "About Me".into(), window: Some("about".into()), external: None, alert: None, shutdown: false },
        MenuItemDef { id: "projects".into(), label: "Projects".into(), window: Some("projects".into()), external: None, alert: None, shutdown: false },
        MenuItemDef { id: "mail".into(), label: "Mail".into(), window: Some("mail".into()), external: None, alert: None, shutdown: false },
        MenuItemDef { id: "shutdown".into(), label: "Turn Off Computer".into(), window: None, external: None, alert: None, shutdown: true },
    ]
}
