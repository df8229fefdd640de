use sidebar_layout::ToggleIcon;

pub(crate) const BARS: &[u8] = include_bytes!("../assets/icons/bars.svg");
pub(crate) const TIMES: &[u8] = include_bytes!("../assets/icons/times.svg");

/// SVG bytes for the toggle glyph.
pub(crate) fn toggle_icon(icon: ToggleIcon) -> &'static [u8] {
    match icon {
        ToggleIcon::Bars => BARS,
        ToggleIcon::Times => TIMES,
    }
}
