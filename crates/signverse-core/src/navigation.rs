//! View identifiers, onboarding redirect policy, and the view router.
//!
//! Routing is a pure function of the selected role and the active view id.
//! Without a role the landing page always renders; with one, unrecognized
//! view ids fall back to home.

use std::fmt;

use crate::model::UserRole;

/// Identifier of the active view, as stored in navigation state.
///
/// Parsing never fails; ids outside the known set are kept as
/// [`ViewId::Unknown`] and routed to home.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    #[default]
    Home,
    Sign,
    Speech,
    Chat,
    Settings,
    Unknown(String),
}

impl ViewId {
    /// Views offered by the header and bottom navigation, in order.
    pub const NAV: [ViewId; 5] = [
        ViewId::Home,
        ViewId::Sign,
        ViewId::Speech,
        ViewId::Chat,
        ViewId::Settings,
    ];

    pub fn parse(id: &str) -> ViewId {
        match id {
            "home" => ViewId::Home,
            "sign" => ViewId::Sign,
            "speech" => ViewId::Speech,
            "chat" => ViewId::Chat,
            "settings" => ViewId::Settings,
            other => ViewId::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ViewId::Home => "home",
            ViewId::Sign => "sign",
            ViewId::Speech => "speech",
            ViewId::Chat => "chat",
            ViewId::Settings => "settings",
            ViewId::Unknown(other) => other,
        }
    }

    /// Header navigation label.
    pub fn nav_label(&self) -> &str {
        match self {
            ViewId::Home => "Home",
            ViewId::Sign => "Sign Input",
            ViewId::Speech => "Speech Input",
            ViewId::Chat => "Chatbot",
            ViewId::Settings => "Settings",
            ViewId::Unknown(other) => other,
        }
    }

    /// Bottom navigation label (mobile).
    pub fn short_label(&self) -> &str {
        match self {
            ViewId::Home => "Home",
            ViewId::Sign => "Sign",
            ViewId::Speech => "Speech",
            ViewId::Chat => "Chat",
            ViewId::Settings => "Settings",
            ViewId::Unknown(other) => other,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the main content area renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderableView {
    Landing,
    Home,
    SignInput,
    SpeechInput,
    Chat,
    Settings,
}

impl RenderableView {
    /// Page heading rendered above the view, if it has one.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            RenderableView::Landing | RenderableView::Home => None,
            RenderableView::SignInput => Some("Sign Language Input"),
            RenderableView::SpeechInput => Some("Speech Input"),
            RenderableView::Chat => Some("SignVerse Assistant"),
            RenderableView::Settings => Some("Settings"),
        }
    }
}

/// Map navigation state to the view to render.
pub fn route(role: Option<UserRole>, view: &ViewId) -> RenderableView {
    if role.is_none() {
        return RenderableView::Landing;
    }

    match view {
        ViewId::Home => RenderableView::Home,
        ViewId::Sign => RenderableView::SignInput,
        ViewId::Speech => RenderableView::SpeechInput,
        ViewId::Chat => RenderableView::Chat,
        ViewId::Settings => RenderableView::Settings,
        ViewId::Unknown(_) => RenderableView::Home,
    }
}

/// View a role lands on right after onboarding.
pub fn initial_view(role: UserRole) -> ViewId {
    match role {
        UserRole::Deaf | UserRole::Mute => ViewId::Sign,
        UserRole::Blind | UserRole::Hearing => ViewId::Speech,
        UserRole::Guest => ViewId::Home,
    }
}

/// Selected role and active view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    role: Option<UserRole>,
    view: ViewId,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    pub fn view(&self) -> &ViewId {
        &self.view
    }

    /// Onboarding selection: sets the role and redirects to its initial view.
    ///
    /// Returns `false` and changes nothing if a role is already selected;
    /// use [`NavigationState::reset_role`] first or [`NavigationState::change_role`].
    pub fn select_role(&mut self, role: UserRole) -> bool {
        if self.role.is_some() {
            return false;
        }
        self.role = Some(role);
        self.view = initial_view(role);
        true
    }

    /// Role change from settings. Keeps the current view.
    pub fn change_role(&mut self, role: UserRole) {
        self.role = Some(role);
    }

    /// Clear the role, returning to onboarding.
    pub fn reset_role(&mut self) {
        self.role = None;
        self.view = ViewId::Home;
    }

    pub fn set_view(&mut self, view: ViewId) {
        self.view = view;
    }

    pub fn current(&self) -> RenderableView {
        route(self.role, &self.view)
    }
}
