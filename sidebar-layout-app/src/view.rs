use iced::widget::{
    Column, Space, button, column, container, row, stack, svg, text,
};
use iced::{Border, Element, Length, Padding, Theme};
use sidebar_layout::memory::{MemoryContent, MemoryPanel, MemoryToggle};
use sidebar_layout::{ClassList, FULL_WIDTH_CLASS, SidebarPanel, ToggleIcon};

use super::{App, AppEvent};
use crate::icons;

const TOGGLE_TOP: f32 = 15.0;
const TOGGLE_ICON_SIZE: f32 = 20.0;
const TOGGLE_PADDING: f32 = 6.0;
const CONTENT_PADDING: f32 = 24.0;
const NAV_ITEMS: [&str; 4] =
    ["Dashboard", "Datasets", "Classification", "Reports"];

/// Render the page: sidebar and content side by side, toggle floated on top.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let gutter = app.layout.config().gutter;

    let body = row![
        sidebar_panel(app.layout.sidebar()),
        main_content(app.layout.content(), app.layout.is_closed(), gutter),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    stack![body, toggle_button(app.layout.toggle())]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn sidebar_panel(
    panel: Option<&MemoryPanel>,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let width = panel.map(|p| p.rendered_width()).unwrap_or(0.0);
    if width <= 0.0 {
        return container(Space::new())
            .width(Length::Shrink)
            .height(Length::Fill)
            .into();
    }

    let items: Column<'_, AppEvent, Theme, iced::Renderer> = NAV_ITEMS
        .iter()
        .fold(Column::new().spacing(12), |col, item| col.push(text(*item)));

    let content = column![text("Navigation").size(18), items].spacing(20);

    container(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .padding(Padding {
            top: TOGGLE_TOP * 2.0 + TOGGLE_ICON_SIZE + TOGGLE_PADDING * 2.0,
            right: CONTENT_PADDING,
            bottom: CONTENT_PADDING,
            left: CONTENT_PADDING,
        })
        .style(|theme: &Theme| container::Style {
            background: Some(
                theme.extended_palette().background.weak.color.into(),
            ),
            ..Default::default()
        })
        .into()
}

fn main_content(
    content: Option<&MemoryContent>,
    closed: bool,
    gutter: f32,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let full_width = content.is_some_and(|c| c.has_class(FULL_WIDTH_CLASS));
    let classes = content
        .map(|c| c.classes().iter().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    // Full width content starts behind the toggle, so clear it.
    let left = if full_width {
        gutter * 2.0 + TOGGLE_ICON_SIZE + TOGGLE_PADDING * 2.0
    } else {
        CONTENT_PADDING
    };

    let status = if closed {
        "Sidebar closed"
    } else {
        "Sidebar open"
    };

    let body = column![
        text("Main content").size(24),
        text(status),
        text(format!("classes: {classes}")).size(12),
    ]
    .spacing(12);

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: CONTENT_PADDING,
            right: CONTENT_PADDING,
            bottom: CONTENT_PADDING,
            left,
        })
        .into()
}

fn toggle_button(
    toggle: Option<&MemoryToggle>,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let Some(toggle) = toggle else {
        return container(Space::new()).into();
    };

    let icon = toggle.icon().unwrap_or(ToggleIcon::Bars);
    let icon_svg =
        svg::Svg::new(svg::Handle::from_memory(icons::toggle_icon(icon)))
            .width(Length::Fixed(TOGGLE_ICON_SIZE))
            .height(Length::Fixed(TOGGLE_ICON_SIZE))
            .style(|theme: &Theme, _status| svg::Style {
                color: Some(theme.palette().text),
            });

    let control = button(icon_svg)
        .on_press(AppEvent::ToggleSidebar)
        .padding(TOGGLE_PADDING)
        .style(|theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    palette.background.strong.color
                },
                _ => palette.background.base.color,
            };
            button::Style {
                background: Some(background.into()),
                border: Border::default().rounded(4.0),
                ..Default::default()
            }
        });

    container(control)
        .padding(Padding {
            top: TOGGLE_TOP,
            right: 0.0,
            bottom: 0.0,
            left: toggle.left_offset(),
        })
        .into()
}
