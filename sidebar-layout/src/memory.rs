//! In-memory element handles for headless hosts and tests.

use std::collections::BTreeSet;

use crate::element::{
    CLOSED_CLASS, ClassList, MainContent, SidebarPanel, ToggleControl,
    ToggleIcon,
};

/// Sorted class set shared by the in-memory elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: BTreeSet<String>,
}

impl ClassSet {
    /// Iterate class names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl ClassList for ClassSet {
    fn add_class(&mut self, class: &str) {
        if !self.classes.contains(class) {
            self.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Sidebar panel that renders at `expanded_width` unless collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPanel {
    classes: ClassSet,
    expanded_width: f32,
}

impl MemoryPanel {
    pub fn new(expanded_width: f32) -> Self {
        Self {
            classes: ClassSet::default(),
            expanded_width,
        }
    }

    /// Width used while the panel is not collapsed.
    pub fn expanded_width(&self) -> f32 {
        self.expanded_width
    }

    /// Change the open width, e.g. when a host breakpoint narrows the panel.
    pub fn set_expanded_width(&mut self, width: f32) {
        self.expanded_width = width.max(0.0);
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }
}

impl ClassList for MemoryPanel {
    fn add_class(&mut self, class: &str) {
        self.classes.add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove_class(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.has_class(class)
    }
}

impl SidebarPanel for MemoryPanel {
    fn rendered_width(&self) -> f32 {
        if self.has_class(CLOSED_CLASS) {
            0.0
        } else {
            self.expanded_width
        }
    }
}

/// Main content region holding only a class set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryContent {
    classes: ClassSet,
}

impl MemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }
}

impl ClassList for MemoryContent {
    fn add_class(&mut self, class: &str) {
        self.classes.add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove_class(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.has_class(class)
    }
}

impl MainContent for MemoryContent {}

/// Toggle control recording its left offset and icon glyph classes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryToggle {
    left_offset: f32,
    icon_classes: ClassSet,
}

impl MemoryToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current left offset in pixels.
    pub fn left_offset(&self) -> f32 {
        self.left_offset
    }

    /// The glyph shown, or `None` when no glyph or both glyph classes are
    /// present.
    pub fn icon(&self) -> Option<ToggleIcon> {
        let bars = self.icon_classes.has_class(ToggleIcon::Bars.class_name());
        let times = self.icon_classes.has_class(ToggleIcon::Times.class_name());
        match (bars, times) {
            (true, false) => Some(ToggleIcon::Bars),
            (false, true) => Some(ToggleIcon::Times),
            _ => None,
        }
    }

    pub fn icon_classes(&self) -> &ClassSet {
        &self.icon_classes
    }
}

impl ToggleControl for MemoryToggle {
    fn set_left_offset(&mut self, px: f32) {
        self.left_offset = px;
    }

    fn set_icon(&mut self, icon: ToggleIcon) {
        self.icon_classes.remove_class(icon.opposite().class_name());
        self.icon_classes.add_class(icon.class_name());
    }
}
