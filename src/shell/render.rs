//! Scene rendering
//!
//! A pure projection from desktop state to text. Nothing here mutates
//! state; the event loop reprints the scene after each handled event.

use std::fmt::Write as _;

use crate::apps::Apps;
use crate::shell::boot::BootStage;
use crate::shell::Shell;
use crate::wm::window::Window;
use crate::wm::WindowManager;

/// Render the whole scene: the boot screen while it is up, otherwise the
/// desktop with windows back-to-front, app panes, icons, start menu, and
/// taskbar.
pub fn render_scene(wm: &WindowManager, shell: &Shell, apps: &Apps, notice: Option<&str>) -> String {
    if !shell.boot.desktop_visible() {
        let stage = match shell.boot.stage() {
            BootStage::Bios => "bios",
            BootStage::Logo => "logo",
            BootStage::Login => "login",
            BootStage::Desktop => unreachable!("desktop stage is rendered below"),
        };
        return format!("boot: {}\n", stage);
    }

    let (width, height) = wm.viewport();
    let mut out = String::new();
    let mobile = if wm.is_mobile() { " (mobile)" } else { "" };
    let dragging = if wm.is_dragging() { " (dragging)" } else { "" };
    let _ = writeln!(out, "desktop {}x{}{}{}", width, height, mobile, dragging);

    // Open windows, back to front
    let mut open: Vec<&Window> = wm.registry.windows().filter(|w| w.is_open()).collect();
    open.sort_by_key(|w| w.z_order);
    let focused = wm.focused();
    for win in open {
        let g = win.geometry;
        let _ = write!(
            out,
            "  window {} \"{}\" ({},{}) {}x{} z={}",
            win.id,
            win.title,
            g.x,
            g.y,
            g.width,
            g.height,
            win.z_order.unwrap_or(0)
        );
        if win.is_maximized() {
            out.push_str(" maximized");
        }
        if focused == Some(win.id.as_str()) {
            out.push_str(" focused");
        }
        out.push('\n');
    }

    for win in wm.registry.windows() {
        if win.on_taskbar() && !win.is_open() {
            let _ = writeln!(out, "  minimized {} \"{}\"", win.id, win.title);
        }
    }

    render_app_panes(wm, apps, &mut out);

    let icon_line: Vec<String> = shell
        .icons
        .icons()
        .iter()
        .map(|icon| {
            if icon.selected {
                format!("{}*", icon.label)
            } else {
                icon.label.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "  icons: {}", icon_line.join(", "));

    if shell.menu.is_visible() {
        out.push_str("  start menu: open\n");
    }

    if let Some(notice) = notice {
        let _ = writeln!(out, "  notice: {}", notice);
    }

    let entries: Vec<String> = wm
        .taskbar
        .entries()
        .iter()
        .map(|e| {
            if e.active {
                format!("[{}*]", e.title)
            } else {
                format!("[{}]", e.title)
            }
        })
        .collect();
    let _ = writeln!(out, "  taskbar: {} | {}", entries.join(" "), shell.clock.display());

    out
}

/// App content for whichever app windows are currently open
fn render_app_panes(wm: &WindowManager, apps: &Apps, out: &mut String) {
    let is_open = |id: &str| wm.registry.get(id).map(Window::is_open).unwrap_or(false);

    if is_open("cmd") {
        if let Some(last) = apps.cmd.transcript().last() {
            let _ = writeln!(out, "  cmd: {}", last);
        }
    }
    if is_open("notepad") {
        let _ = writeln!(out, "  notepad: {}", apps.notepad.content());
    }
    if is_open("photos") {
        let _ = writeln!(
            out,
            "  photos: {} ({} in gallery)",
            apps.photos.preview().unwrap_or("-"),
            apps.photos.gallery().len()
        );
    }
}
