use crate::config::LayoutConfig;
use crate::element::{
    CLOSED_CLASS, FULL_WIDTH_CLASS, MainContent, SidebarPanel, ToggleControl,
    ToggleIcon, Viewport,
};
use crate::event::{SidebarLayoutEffect, SidebarLayoutEvent};
use crate::state::SidebarState;

/// Keeps sidebar visibility, main content width and the toggle control in
/// sync with one `closed` flag.
///
/// Every element handle is optional. Effects on a missing element are
/// skipped, the rest of the layout keeps working.
#[derive(Debug)]
pub struct SidebarLayoutController<S, M, T> {
    sidebar: Option<S>,
    content: Option<M>,
    toggle: Option<T>,
    config: LayoutConfig,
    state: SidebarState,
}

impl<S, M, T> SidebarLayoutController<S, M, T>
where
    S: SidebarPanel,
    M: MainContent,
    T: ToggleControl,
{
    /// Mount the controller on the given handles.
    ///
    /// The flag starts from the sidebar's markup: a sidebar already carrying
    /// the `closed` class starts closed. Call [`Self::initialize`] once the
    /// viewport width is known.
    pub fn new(
        sidebar: Option<S>,
        content: Option<M>,
        toggle: Option<T>,
        config: LayoutConfig,
    ) -> Self {
        let mut state = SidebarState::default();
        if sidebar
            .as_ref()
            .is_some_and(|sidebar| sidebar.has_class(CLOSED_CLASS))
        {
            state.toggle();
        }

        Self {
            sidebar,
            content,
            toggle,
            config,
            state,
        }
    }

    /// Establish the initial layout for the current viewport width.
    pub fn initialize(
        &mut self,
        viewport: &impl Viewport,
    ) -> Option<SidebarLayoutEffect> {
        if self.sidebar.is_none() {
            log::debug!("sidebar element missing, visibility class skipped");
        }
        if self.content.is_none() {
            log::debug!("main content element missing, width class skipped");
        }
        if self.toggle.is_none() {
            log::debug!("toggle element missing, button sync skipped");
        }

        let effect = self.apply_responsive_rule(viewport.width());
        // Markup may disagree with the flag before the first sync.
        self.apply_visibility_classes();
        self.sync_toggle_button();
        effect
    }

    /// Flip sidebar visibility in response to a toggle activation.
    pub fn on_toggle_clicked(&mut self) -> SidebarLayoutEffect {
        let closed = self.state.toggle();
        log::debug!(
            "sidebar {} by toggle",
            if closed { "closed" } else { "opened" }
        );

        self.apply_visibility_classes();
        self.sync_toggle_button();
        SidebarLayoutEffect::for_state(closed)
    }

    /// Snap the sidebar to the width band of the new viewport.
    pub fn on_viewport_resized(
        &mut self,
        viewport: &impl Viewport,
    ) -> Option<SidebarLayoutEffect> {
        let effect = self.apply_responsive_rule(viewport.width());
        self.sync_toggle_button();
        effect
    }

    /// Dispatch a host event to the matching handler.
    pub fn reduce(
        &mut self,
        event: SidebarLayoutEvent,
    ) -> Option<SidebarLayoutEffect> {
        log::trace!("sidebar layout event: {event:?}");
        match event {
            SidebarLayoutEvent::ToggleClicked => Some(self.on_toggle_clicked()),
            SidebarLayoutEvent::ViewportResized { width } => {
                self.on_viewport_resized(&width)
            },
        }
    }

    /// Close at or below the breakpoint, open above it. A flag already in
    /// the right band is left alone so a matching manual toggle survives.
    pub fn apply_responsive_rule(
        &mut self,
        width: u32,
    ) -> Option<SidebarLayoutEffect> {
        let narrow = self.config.is_narrow(width);
        if !self.state.snap_to_band(narrow) {
            return None;
        }

        log::debug!(
            "sidebar {} by resize at width {width}",
            if narrow { "closed" } else { "opened" }
        );
        self.apply_visibility_classes();
        Some(SidebarLayoutEffect::for_state(narrow))
    }

    /// Project the flag onto the toggle control's offset and icon.
    pub fn sync_toggle_button(&mut self) {
        let closed = self.state.is_closed();
        let offset = if closed {
            self.config.gutter
        } else {
            let sidebar_width = self
                .sidebar
                .as_ref()
                .map(|sidebar| sidebar.rendered_width())
                .unwrap_or(0.0);
            sidebar_width + self.config.gutter
        };

        if let Some(toggle) = self.toggle.as_mut() {
            toggle.set_left_offset(offset);
            toggle.set_icon(ToggleIcon::for_state(closed));
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn sidebar(&self) -> Option<&S> {
        self.sidebar.as_ref()
    }

    /// Mutable sidebar access for hosts that resize the panel itself.
    pub fn sidebar_mut(&mut self) -> Option<&mut S> {
        self.sidebar.as_mut()
    }

    pub fn content(&self) -> Option<&M> {
        self.content.as_ref()
    }

    pub fn toggle(&self) -> Option<&T> {
        self.toggle.as_ref()
    }

    fn apply_visibility_classes(&mut self) {
        let closed = self.state.is_closed();
        if let Some(sidebar) = self.sidebar.as_mut() {
            if closed {
                sidebar.add_class(CLOSED_CLASS);
            } else {
                sidebar.remove_class(CLOSED_CLASS);
            }
        }
        if let Some(content) = self.content.as_mut() {
            if closed {
                content.add_class(FULL_WIDTH_CLASS);
            } else {
                content.remove_class(FULL_WIDTH_CLASS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ClassList;
    use crate::memory::{MemoryContent, MemoryPanel, MemoryToggle};

    type Controller =
        SidebarLayoutController<MemoryPanel, MemoryContent, MemoryToggle>;

    fn controller() -> Controller {
        SidebarLayoutController::new(
            Some(MemoryPanel::new(250.0)),
            Some(MemoryContent::new()),
            Some(MemoryToggle::new()),
            LayoutConfig::default(),
        )
    }

    #[test]
    fn given_wide_viewport_when_initialized_then_sidebar_stays_open() {
        let mut controller = controller();
        let effect = controller.initialize(&1024_u32);

        assert_eq!(effect, None);
        assert!(!controller.is_closed());
        let toggle = controller.toggle().expect("toggle mounted");
        assert_eq!(toggle.left_offset(), 265.0);
        assert_eq!(toggle.icon(), Some(ToggleIcon::Times));
    }

    #[test]
    fn given_narrow_viewport_when_initialized_then_sidebar_closes() {
        let mut controller = controller();
        let effect = controller.initialize(&500_u32);

        assert_eq!(effect, Some(SidebarLayoutEffect::Closed));
        assert!(controller.is_closed());
        assert!(
            controller
                .content()
                .is_some_and(|c| c.has_class(FULL_WIDTH_CLASS))
        );
        assert!(
            controller
                .sidebar()
                .is_some_and(|s| s.has_class(CLOSED_CLASS))
        );
    }

    #[test]
    fn given_closed_markup_when_mounted_then_flag_starts_closed() {
        let mut panel = MemoryPanel::new(250.0);
        panel.add_class(CLOSED_CLASS);
        let mut controller = SidebarLayoutController::new(
            Some(panel),
            Some(MemoryContent::new()),
            Some(MemoryToggle::new()),
            LayoutConfig::default(),
        );
        assert!(controller.is_closed());

        let _ = controller.initialize(&500_u32);
        assert!(
            controller
                .content()
                .is_some_and(|c| c.has_class(FULL_WIDTH_CLASS))
        );
        assert_eq!(controller.toggle().map(|t| t.left_offset()), Some(15.0));
    }

    #[test]
    fn given_resize_within_band_when_reduced_then_no_effect_is_reported() {
        let mut controller = controller();
        let _ = controller.initialize(&1024_u32);

        let effect = controller
            .reduce(SidebarLayoutEvent::ViewportResized { width: 1280 });
        assert_eq!(effect, None);
        assert!(!controller.is_closed());
    }

    #[test]
    fn given_toggle_event_when_reduced_then_effect_reports_new_state() {
        let mut controller = controller();
        let _ = controller.initialize(&1024_u32);

        let effect = controller.reduce(SidebarLayoutEvent::ToggleClicked);
        assert_eq!(effect, Some(SidebarLayoutEffect::Closed));
        let effect = controller.reduce(SidebarLayoutEvent::ToggleClicked);
        assert_eq!(effect, Some(SidebarLayoutEffect::Opened));
    }

    #[test]
    fn given_manual_close_on_wide_viewport_when_resized_wider_then_reopens() {
        let mut controller = controller();
        let _ = controller.initialize(&1024_u32);
        let _ = controller.on_toggle_clicked();

        let effect = controller.on_viewport_resized(&1100_u32);
        assert_eq!(effect, Some(SidebarLayoutEffect::Opened));
        assert!(!controller.is_closed());
    }

    #[test]
    fn given_sidebar_width_change_when_synced_then_offset_follows_live_width()
    {
        let mut controller = controller();
        let _ = controller.initialize(&1024_u32);

        if let Some(sidebar) = controller.sidebar_mut() {
            sidebar.set_expanded_width(200.0);
        }
        let _ = controller.on_viewport_resized(&900_u32);
        assert_eq!(controller.toggle().map(|t| t.left_offset()), Some(215.0));
    }

    #[test]
    fn given_custom_gutter_when_synced_then_gutter_is_used() {
        let config = LayoutConfig {
            gutter: 8.0,
            ..LayoutConfig::default()
        };
        let mut controller = SidebarLayoutController::new(
            Some(MemoryPanel::new(100.0)),
            Some(MemoryContent::new()),
            Some(MemoryToggle::new()),
            config,
        );
        let _ = controller.initialize(&1024_u32);
        assert_eq!(controller.toggle().map(|t| t.left_offset()), Some(108.0));

        let _ = controller.on_toggle_clicked();
        assert_eq!(controller.toggle().map(|t| t.left_offset()), Some(8.0));
    }

    #[test]
    fn given_missing_elements_when_driven_then_state_still_flips() {
        let mut controller: Controller = SidebarLayoutController::new(
            None,
            None,
            None,
            LayoutConfig::default(),
        );
        assert_eq!(
            controller.initialize(&500_u32),
            Some(SidebarLayoutEffect::Closed)
        );
        assert_eq!(controller.on_toggle_clicked(), SidebarLayoutEffect::Opened);
        assert!(controller.toggle().is_none());
    }

    #[test]
    fn given_missing_sidebar_when_open_then_offset_is_gutter_only() {
        let mut controller: Controller = SidebarLayoutController::new(
            None,
            Some(MemoryContent::new()),
            Some(MemoryToggle::new()),
            LayoutConfig::default(),
        );
        let _ = controller.initialize(&1024_u32);
        assert_eq!(controller.toggle().map(|t| t.left_offset()), Some(15.0));
        assert_eq!(
            controller.toggle().and_then(|t| t.icon()),
            Some(ToggleIcon::Times)
        );
    }
}
