use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Tick only while a coalesced resize still has to land.
    if let Some(resize) = app.resize.as_ref().filter(|r| r.has_pending()) {
        let tick = iced::time::every(resize.interval())
            .map(|_| AppEvent::FlushResize);
        subs.push(tick);
    }

    Subscription::batch(subs)
}
