//! App shell components: Header, BottomNav, Footer
//!
//! These form the persistent frame around the routed view once a role has
//! been selected. Onboarding renders without them.

mod bottom_nav;
mod footer;
mod header;

pub use bottom_nav::BottomNav;
pub use footer::Footer;
pub use header::Header;

use signverse_core::ViewId;

/// Glyph shown next to a navigation entry.
pub(crate) fn nav_icon(view: &ViewId) -> &'static str {
    match view {
        ViewId::Home => "🏠",
        ViewId::Sign => "🤟",
        ViewId::Speech => "🎤",
        ViewId::Chat => "💬",
        ViewId::Settings => "⚙️",
        ViewId::Unknown(_) => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_entry_has_an_icon() {
        for view in ViewId::NAV.iter() {
            assert_ne!(nav_icon(view), "•", "{} has no icon", view);
        }
    }
}
