//! Element handle contract consumed by the controller.
//!
//! The controller never renders anything itself. It toggles classes, sets
//! the toggle offset and swaps the toggle icon through these traits, and the
//! host maps them onto whatever UI tree it owns.

/// Class marking the sidebar as collapsed.
pub const CLOSED_CLASS: &str = "closed";
/// Class letting the main content fill the space freed by the sidebar.
pub const FULL_WIDTH_CLASS: &str = "full-width";

/// Mutable set of style classes attached to an element.
pub trait ClassList {
    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    fn has_class(&self, class: &str) -> bool;
}

/// The collapsible side panel.
pub trait SidebarPanel: ClassList {
    /// Width the panel currently renders at, measured live.
    fn rendered_width(&self) -> f32;
}

/// The primary content region next to the sidebar.
pub trait MainContent: ClassList {}

/// The control that flips sidebar visibility.
pub trait ToggleControl {
    /// Place the control `px` pixels from the left edge.
    fn set_left_offset(&mut self, px: f32);

    /// Show `icon`, hiding the other glyph.
    fn set_icon(&mut self, icon: ToggleIcon);
}

/// Source of the current viewport width in pixels.
pub trait Viewport {
    fn width(&self) -> u32;
}

impl Viewport for u32 {
    fn width(&self) -> u32 {
        *self
    }
}

/// Glyph shown on the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleIcon {
    /// Menu glyph, shown while the sidebar is closed.
    Bars,
    /// Close glyph, shown while the sidebar is open.
    Times,
}

impl ToggleIcon {
    /// Icon matching the given sidebar state.
    pub fn for_state(closed: bool) -> Self {
        if closed { Self::Bars } else { Self::Times }
    }

    /// Icon font class of the glyph.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Bars => "fa-bars",
            Self::Times => "fa-times",
        }
    }

    /// The mutually exclusive counterpart.
    pub fn opposite(self) -> Self {
        match self {
            Self::Bars => Self::Times,
            Self::Times => Self::Bars,
        }
    }
}
