use std::time::Instant;

use iced::{Task, window};
use sidebar_layout::{SidebarLayoutEffect, SidebarLayoutEvent};

use super::{App, AppEvent};

/// Thin dispatch: route each event to its handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::ToggleSidebar => {
            // A held resize must land before the click reads the flag.
            let width = app
                .resize
                .as_mut()
                .and_then(|resize| resize.take_pending(Instant::now()));
            if let Some(width) = width {
                apply_resize(app, width);
            }

            let effect = app.layout.reduce(SidebarLayoutEvent::ToggleClicked);
            report(effect);
            Task::none()
        },
        AppEvent::FlushResize => {
            let width = app
                .resize
                .as_mut()
                .and_then(|resize| resize.flush(Instant::now()));
            if let Some(width) = width {
                apply_resize(app, width);
            }
            Task::none()
        },
        AppEvent::Window(window::Event::Opened { size, .. })
        | AppEvent::Window(window::Event::Resized(size)) => {
            handle_resize(app, viewport_width(size.width));
            Task::none()
        },
        AppEvent::Window(_) => Task::none(),
    }
}

/// Convert a logical window width into a whole pixel viewport width.
pub(super) fn viewport_width(width: f32) -> u32 {
    if width.is_finite() {
        width.max(0.0).round() as u32
    } else {
        0
    }
}

fn handle_resize(app: &mut App, width: u32) {
    let width = match app.resize.as_mut() {
        Some(resize) => resize.push(width, Instant::now()),
        None => Some(width),
    };

    if let Some(width) = width {
        apply_resize(app, width);
    }
}

fn apply_resize(app: &mut App, width: u32) {
    // Panel width follows the host breakpoints before the toggle is synced.
    let sidebar_width = app.config.sidebar_width_for(width);
    if let Some(sidebar) = app.layout.sidebar_mut() {
        sidebar.set_expanded_width(sidebar_width);
    }

    let effect = app
        .layout
        .reduce(SidebarLayoutEvent::ViewportResized { width });
    report(effect);
}

fn report(effect: Option<SidebarLayoutEffect>) {
    match effect {
        Some(SidebarLayoutEffect::Opened) => log::info!("sidebar opened"),
        Some(SidebarLayoutEffect::Closed) => log::info!("sidebar closed"),
        None => {},
    }
}
