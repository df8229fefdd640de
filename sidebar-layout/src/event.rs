/// Events delivered by the host to the layout controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarLayoutEvent {
    /// The user activated the toggle control.
    ToggleClicked,
    /// The viewport changed to `width` pixels.
    ViewportResized { width: u32 },
}

/// Visibility transitions reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarLayoutEffect {
    /// The sidebar became visible.
    Opened,
    /// The sidebar collapsed.
    Closed,
}

impl SidebarLayoutEffect {
    pub(crate) fn for_state(closed: bool) -> Self {
        if closed { Self::Closed } else { Self::Opened }
    }
}
