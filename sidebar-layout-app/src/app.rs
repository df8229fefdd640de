#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};
use sidebar_layout::memory::{MemoryContent, MemoryPanel, MemoryToggle};
use sidebar_layout::{ResizeCoalescer, SidebarLayoutController};

use crate::config::AppConfig;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Controller type driven by the desktop host.
pub(crate) type PageLayout =
    SidebarLayoutController<MemoryPanel, MemoryContent, MemoryToggle>;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    /// The toggle button was pressed.
    ToggleSidebar,
    /// Apply a coalesced resize whose interval has elapsed.
    FlushResize,
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) layout: PageLayout,
    pub(crate) resize: Option<ResizeCoalescer>,
}

impl App {
    /// Mount the page and lay it out for the configured window width.
    pub(crate) fn new(config: AppConfig) -> (Self, Task<AppEvent>) {
        let viewport_width = update::viewport_width(config.window_width);
        let panel =
            MemoryPanel::new(config.sidebar_width_for(viewport_width));
        let mut layout = SidebarLayoutController::new(
            Some(panel),
            Some(MemoryContent::new()),
            Some(MemoryToggle::new()),
            config.layout,
        );
        if let Some(effect) = layout.initialize(&viewport_width) {
            log::info!("initial layout at width {viewport_width}: {effect:?}");
        }

        let throttle = config.layout.resize_throttle();
        let resize = if throttle.is_zero() {
            None
        } else {
            Some(ResizeCoalescer::new(throttle))
        };

        let app = App {
            config,
            layout,
            resize,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Sidebar Layout")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Return whether a coalesced resize is waiting to be applied.
    pub(crate) fn has_pending_resize(&self) -> bool {
        self.resize
            .as_ref()
            .is_some_and(ResizeCoalescer::has_pending)
    }
}
