//! Retrodesk
//!
//! A retro desktop-environment simulation: a floating window manager with a
//! taskbar, start menu, boot/login/shutdown staging, and a handful of toy
//! apps, driven by JSON-line input events on stdin and projected to a
//! textual scene on stdout.

mod apps;
mod config;
mod input;
mod shared;
mod shell;
mod wm;

use anyhow::{Context, Result};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apps::Apps;
use input::{EventStream, InputEvent, WindowControlAction};
use shell::boot::{BIOS_STAGE, LOGIN_SETTLE, SHUTDOWN_STAGE};
use shell::icons::{IconAction, ICON_FLASH};
use shell::{render, Shell};
use wm::WindowManager;

/// Deferred shell work, delivered back into the event loop by timers
#[derive(Debug, Clone)]
enum TimerEvent {
    /// Advance the power-on staging
    BootAdvance,
    /// Login fade-out elapsed; show the desktop
    LoginSettle,
    /// Shutdown animation elapsed; back to the login screen
    ShutdownSettle,
    /// Icon selection flash elapsed
    IconFlashEnd(String),
}

/// Main application state
struct DesktopApp {
    /// Configuration (the desktop's static markup)
    config: config::Config,

    /// Window manager state
    wm: WindowManager,

    /// Shell state (boot, clock, start menu, icons)
    shell: Shell,

    /// Toy applications
    apps: Apps,

    /// One-shot notice (alert message or external-link action) shown in the
    /// next rendered scene
    notice: Option<String>,

    /// Timer delivery back into the event loop
    timer_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl DesktopApp {
    fn new(config: config::Config, timer_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        let wm = WindowManager::new(config.windows.clone(), &config.desktop);
        let shell = Shell::new(&config);
        let apps = Apps::new(&config);
        Self { config, wm, shell, apps, notice: None, timer_tx }
    }

    /// Fire `event` back into the loop after `delay`
    fn schedule(&self, event: TimerEvent, delay: Duration) {
        let tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        });
    }

    /// Kick off the power-on staging
    fn start_boot(&self) {
        self.schedule(TimerEvent::BootAdvance, BIOS_STAGE);
    }

    /// Route one input event. Desktop-surface events are dropped while the
    /// boot screen is up; viewport resizes always apply.
    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ViewportResized { width, height } => {
                self.wm.set_viewport(width, height);
            }
            InputEvent::LoginClick => {
                if self.shell.boot.login() {
                    self.schedule(TimerEvent::LoginSettle, LOGIN_SETTLE);
                }
            }
            _ if !self.shell.boot.desktop_visible() => {
                debug!("Desktop hidden, ignoring {:?}", event);
            }
            InputEvent::PointerDown { window, x, y, on_control } => {
                self.wm.pointer_down(&window, x, y, on_control);
            }
            InputEvent::PointerMove { x, y } => self.wm.pointer_move(x, y),
            InputEvent::PointerUp => self.wm.pointer_up(),
            InputEvent::TaskbarClick { window } => self.wm.taskbar_click(&window),
            InputEvent::WindowControl { window, action } => match action {
                WindowControlAction::Close => self.wm.close(&window),
                WindowControlAction::Minimize => self.wm.minimize(&window),
                WindowControlAction::Maximize => self.wm.toggle_maximize(&window),
            },
            InputEvent::IconActivate { icon } => {
                if let Some(action) = self.shell.icons.activate(&icon) {
                    self.dispatch_action(action);
                }
                self.schedule(TimerEvent::IconFlashEnd(icon), ICON_FLASH);
            }
            InputEvent::StartToggle => self.shell.menu.toggle(),
            InputEvent::DesktopClick { in_menu, on_start } => {
                self.shell.menu.handle_desktop_click(in_menu, on_start);
            }
            InputEvent::MenuSelect { item } => self.menu_select(&item),
            InputEvent::CmdLine { line } => {
                if let Some(id) = self.apps.cmd.submit(&line) {
                    self.wm.open(id);
                }
            }
            InputEvent::NotepadInput { text } => {
                self.apps.notepad.input(&text, &mut self.apps.session);
            }
            InputEvent::PhotoSelect { src } => self.apps.photos.select(&src),
            InputEvent::ContactSubmit => {
                self.notice = Some(self.config.contact.reply.clone());
            }
        }
    }

    /// Start-menu item activation
    fn menu_select(&mut self, item_id: &str) {
        let Some(item) = self.config.start_menu.iter().find(|i| i.id == item_id).cloned() else {
            debug!("menu_select: unknown item '{}'", item_id);
            return;
        };
        if item.shutdown {
            if self.shell.boot.trigger_shutdown() {
                self.schedule(TimerEvent::ShutdownSettle, SHUTDOWN_STAGE);
            }
            return;
        }
        if let Some(action) = shell::icons::resolve_action(&item.window, &item.external, &item.alert)
        {
            self.dispatch_action(action);
        }
    }

    /// Apply an icon or start-menu action
    fn dispatch_action(&mut self, action: IconAction) {
        match action {
            IconAction::OpenWindow(id) => self.wm.open(&id),
            IconAction::OpenExternal(url) => {
                info!("Opening external link: {}", url);
                self.notice = Some(format!("opening {}", url));
            }
            IconAction::Alert(message) => {
                self.notice = Some(message);
            }
        }
    }

    /// Apply a fired timer
    fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::BootAdvance => {
                if let Some(delay) = self.shell.boot.advance() {
                    self.schedule(TimerEvent::BootAdvance, delay);
                }
            }
            TimerEvent::LoginSettle => {
                self.shell.boot.complete_login();
                let ids = self.config.boot.open_on_login.clone();
                for id in &ids {
                    self.wm.open(id);
                }
                info!("Desktop ready");
            }
            TimerEvent::ShutdownSettle => self.shell.boot.finish_shutdown(),
            TimerEvent::IconFlashEnd(id) => self.shell.icons.clear_selection(&id),
        }
    }

    /// Print the current scene. The pending notice is consumed by this
    /// render.
    fn render(&mut self) {
        let notice = self.notice.take();
        print!(
            "{}",
            render::render_scene(&self.wm, &self.shell, &self.apps, notice.as_deref())
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries the rendered scene
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "retrodesk=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Retrodesk desktop simulation");

    let config = config::Config::load().context("Failed to load configuration")?;

    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let mut app = DesktopApp::new(config, timer_tx);
    app.start_boot();
    app.render();

    // Setup signal handlers for graceful shutdown
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        let tx = shutdown_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully");
                    let _ = tx.send(()).await;
                }
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully");
                    let _ = tx.send(()).await;
                }
            }
        });
    }

    let mut events = EventStream::new();
    let mut clock_interval = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event? {
                    Some(event) => {
                        app.handle_event(event);
                        app.render();
                    }
                    None => {
                        info!("Input stream closed, exiting");
                        break;
                    }
                }
            }
            Some(timer) = timer_rx.recv() => {
                app.handle_timer(timer);
                app.render();
            }
            _ = clock_interval.tick() => {
                app.shell.clock.tick();
            }
            _ = shutdown_rx.recv() => {
                info!("Shutdown signal received, exiting");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::boot::BootStage;
    use crate::wm::window::Visibility;

    fn app() -> DesktopApp {
        let (timer_tx, _timer_rx) = mpsc::unbounded_channel();
        DesktopApp::new(config::Config::default(), timer_tx)
    }

    /// Drive the boot staging to the desktop without waiting on real timers
    fn boot_to_desktop(app: &mut DesktopApp) {
        app.handle_timer(TimerEvent::BootAdvance);
        app.handle_timer(TimerEvent::BootAdvance);
        app.handle_event(InputEvent::LoginClick);
        app.handle_timer(TimerEvent::LoginSettle);
    }

    #[tokio::test]
    async fn login_opens_the_configured_windows() {
        let mut app = app();
        assert_eq!(app.shell.boot.stage(), BootStage::Bios);
        boot_to_desktop(&mut app);

        assert!(app.shell.boot.desktop_visible());
        assert_eq!(app.wm.registry.get("about").unwrap().visibility, Visibility::Open);
        assert_eq!(app.wm.registry.get("projects").unwrap().visibility, Visibility::Open);
        // Opened in order: projects was focused last
        assert_eq!(app.wm.focused(), Some("projects"));
    }

    #[tokio::test]
    async fn desktop_events_are_dropped_while_booting() {
        let mut app = app();
        app.handle_event(InputEvent::IconActivate { icon: "about".into() });
        app.handle_event(InputEvent::TaskbarClick { window: "about".into() });
        assert!(app.wm.registry.get("about").is_none());

        // Resizes always apply, even on the boot screen
        app.handle_event(InputEvent::ViewportResized { width: 480, height: 800 });
        assert!(app.wm.is_mobile());
    }

    #[tokio::test]
    async fn window_controls_route_to_the_operations_api() {
        let mut app = app();
        boot_to_desktop(&mut app);

        app.handle_event(InputEvent::WindowControl {
            window: "about".into(),
            action: WindowControlAction::Maximize,
        });
        assert!(app.wm.registry.get("about").unwrap().is_maximized());

        app.handle_event(InputEvent::WindowControl {
            window: "about".into(),
            action: WindowControlAction::Minimize,
        });
        assert_eq!(app.wm.registry.get("about").unwrap().visibility, Visibility::Minimized);

        app.handle_event(InputEvent::WindowControl {
            window: "about".into(),
            action: WindowControlAction::Close,
        });
        let about = app.wm.registry.get("about").unwrap();
        assert_eq!(about.visibility, Visibility::Closed);
        assert!(!about.is_maximized());
    }

    #[tokio::test]
    async fn cmd_lines_open_windows_through_the_wm() {
        let mut app = app();
        boot_to_desktop(&mut app);
        app.handle_event(InputEvent::WindowControl {
            window: "projects".into(),
            action: WindowControlAction::Close,
        });

        app.handle_event(InputEvent::CmdLine { line: "projects".into() });
        assert_eq!(app.wm.registry.get("projects").unwrap().visibility, Visibility::Open);
        assert_eq!(app.wm.focused(), Some("projects"));
    }

    #[tokio::test]
    async fn icon_actions_dispatch_and_set_notices() {
        let mut app = app();
        boot_to_desktop(&mut app);

        app.handle_event(InputEvent::IconActivate { icon: "notepad".into() });
        assert_eq!(app.wm.registry.get("notepad").unwrap().visibility, Visibility::Open);

        app.handle_event(InputEvent::IconActivate { icon: "recycle-bin".into() });
        assert_eq!(app.notice.as_deref(), Some("The Recycle Bin is empty."));

        app.handle_event(InputEvent::IconActivate { icon: "github".into() });
        assert_eq!(app.notice.as_deref(), Some("opening https://github.com/retrodesk"));
    }

    #[tokio::test]
    async fn shutdown_from_the_start_menu_lands_on_login() {
        let mut app = app();
        boot_to_desktop(&mut app);

        app.handle_event(InputEvent::MenuSelect { item: "shutdown".into() });
        assert_eq!(app.shell.boot.stage(), BootStage::Logo);

        // Desktop events are dropped mid-shutdown, and a second trigger too
        app.handle_event(InputEvent::MenuSelect { item: "shutdown".into() });
        app.handle_event(InputEvent::TaskbarClick { window: "about".into() });

        app.handle_timer(TimerEvent::ShutdownSettle);
        assert_eq!(app.shell.boot.stage(), BootStage::Login);

        // Windows keep their state across the shutdown screen
        assert_eq!(app.wm.registry.get("about").unwrap().visibility, Visibility::Open);
    }

    #[tokio::test]
    async fn notepad_content_survives_close_and_reopen() {
        let mut app = app();
        boot_to_desktop(&mut app);

        app.handle_event(InputEvent::IconActivate { icon: "notepad".into() });
        app.handle_event(InputEvent::NotepadInput { text: "draft".into() });
        app.handle_event(InputEvent::WindowControl {
            window: "notepad".into(),
            action: WindowControlAction::Close,
        });
        app.handle_event(InputEvent::IconActivate { icon: "notepad".into() });

        assert_eq!(app.apps.notepad.content(), "draft");
        assert_eq!(app.apps.session.get("retrodesk_notepad"), Some("draft"));
    }
}
