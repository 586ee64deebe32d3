use crate::board::BoardStatus;
use maud::{html, Markup};

/// Pill badge reflecting data availability. Each status gets its own color
/// treatment; None is the red "something is wrong" state.
pub fn status_badge(status: BoardStatus) -> Markup {
    let (color, background) = match status {
        BoardStatus::Live => ("#166534", "#dcfce7"),
        BoardStatus::Partial => ("#1e40af", "#dbeafe"),
        BoardStatus::Sample => ("#92400e", "#fef3c7"),
        BoardStatus::None => ("#991b1b", "#fee2e2"),
    };

    html! {
        span
            class="status-badge"
            style=(format!(
                "display: inline-flex; align-items: center; padding: 4px 12px; \
                 border-radius: 9999px; font-size: 0.875rem; font-weight: 500; \
                 color: {color}; background-color: {background};"
            ))
        {
            (status.label())
        }
    }
}
