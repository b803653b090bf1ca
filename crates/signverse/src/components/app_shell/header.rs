use dioxus::prelude::*;

use super::nav_icon;
use crate::components::{navigate, use_app_state};
use crate::platform;
use signverse_core::config::ASSISTANT_URL;
use signverse_core::ViewId;

/// Top bar with logo, desktop navigation, and a collapsible mobile menu.
///
/// The desktop "Chatbot" entry opens the external assistant instead of
/// switching views; the mobile menu navigates in-app like the bottom bar.
#[component]
pub fn Header() -> Element {
    let app_state = use_app_state();
    let mut menu_open = use_signal(|| false);

    let (current, role_title) = {
        let state = app_state.read();
        (state.view().clone(), state.role().map(|role| role.title()))
    };

    let role_pill = match role_title {
        Some(title) => rsx! {
            span { class: "sv-role-pill", "{title}" }
        },
        None => rsx! { Fragment {} },
    };

    rsx! {
        header { class: "sv-header",
            div { class: "sv-header-inner",
                button {
                    class: "sv-logo",
                    "aria-label": "SignVerse home",
                    onclick: move |_| navigate(app_state, ViewId::Home),
                    span { class: "sv-logo-mark", "🤟" }
                    span { class: "sv-logo-text", "SignVerse" }
                }

                nav { class: "sv-nav", "aria-label": "Main navigation",
                    for view in ViewId::NAV.iter().cloned() {
                        NavLink {
                            key: "{view}",
                            active: view == current,
                            view: view.clone(),
                            on_select: move |view: ViewId| {
                                if view == ViewId::Chat {
                                    platform::open_external(ASSISTANT_URL);
                                } else {
                                    navigate(app_state, view);
                                }
                            },
                        }
                    }
                }

                {role_pill}

                button {
                    class: "sv-menu-toggle",
                    "aria-label": "Toggle menu",
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        "✕"
                    } else {
                        "☰"
                    }
                }
            }

            if menu_open() {
                nav { class: "sv-mobile-menu", "aria-label": "Mobile navigation",
                    for view in ViewId::NAV.iter().cloned() {
                        NavLink {
                            key: "{view}",
                            active: view == current,
                            view: view.clone(),
                            on_select: move |view: ViewId| {
                                menu_open.set(false);
                                navigate(app_state, view);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(view: ViewId, active: bool, on_select: EventHandler<ViewId>) -> Element {
    let class = if active {
        "sv-nav-link sv-nav-link--active"
    } else {
        "sv-nav-link"
    };
    let aria_current = if active { "page" } else { "false" };
    let icon = nav_icon(&view);
    let label = view.nav_label().to_string();

    rsx! {
        button {
            class: "{class}",
            "aria-current": "{aria_current}",
            onclick: move |_| on_select.call(view.clone()),
            span { class: "sv-nav-icon", "{icon}" }
            "{label}"
        }
    }
}
