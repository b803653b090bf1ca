use dioxus::prelude::*;

use super::nav_icon;
use crate::components::{navigate, use_app_state};
use signverse_core::ViewId;

/// Fixed bottom tab bar for small screens.
#[component]
pub fn BottomNav() -> Element {
    let app_state = use_app_state();
    let current = app_state.read().view().clone();

    rsx! {
        nav { class: "sv-bottom-nav", "aria-label": "Bottom navigation",
            for view in ViewId::NAV.iter().cloned() {
                BottomNavItem {
                    key: "{view}",
                    active: view == current,
                    view: view.clone(),
                    on_select: move |view| navigate(app_state, view),
                }
            }
        }
    }
}

#[component]
fn BottomNavItem(view: ViewId, active: bool, on_select: EventHandler<ViewId>) -> Element {
    let class = if active {
        "sv-bottom-nav-item sv-bottom-nav-item--active"
    } else {
        "sv-bottom-nav-item"
    };
    let icon = nav_icon(&view);
    let label = view.short_label().to_string();
    let aria_label = view.nav_label().to_string();

    rsx! {
        button {
            class: "{class}",
            "aria-label": "{aria_label}",
            onclick: move |_| on_select.call(view.clone()),
            span { class: "sv-bottom-nav-icon", "{icon}" }
            span { class: "sv-bottom-nav-label", "{label}" }
        }
    }
}
