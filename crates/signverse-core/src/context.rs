//! The composed application store.
//!
//! [`AppState`] owns navigation, preferences, the conversation, live
//! detection and the chat simulator. The app wraps it in a signal and
//! provides it through context; every view reads and mutates through the
//! methods here. Mutators are synchronous and never fail.

use tracing::{debug, info};

use crate::chat::{ChatSimulator, PendingReply};
use crate::config::RECENT_TRANSLATIONS_LIMIT;
use crate::conversation::ConversationStore;
use crate::detection::{DetectionResult, LiveDetection};
use crate::model::{Message, SettingsPatch, Translation, UserRole, UserSettings};
use crate::navigation::{NavigationState, RenderableView, ViewId};
use crate::preferences::{KeyValueStorage, PreferenceStore};
use crate::presentation::PresentationFlags;

#[derive(Debug)]
pub struct AppState {
    navigation: NavigationState,
    preferences: PreferenceStore,
    conversation: ConversationStore,
    detection: LiveDetection,
    translating: bool,
    chat: ChatSimulator,
    pending_replies: usize,
}

impl AppState {
    /// Restore settings from `storage` and start with no role selected.
    ///
    /// A restored settings role does not skip onboarding.
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self::with_chat(storage, ChatSimulator::from_clock())
    }

    pub fn with_chat(storage: Box<dyn KeyValueStorage>, chat: ChatSimulator) -> Self {
        Self {
            navigation: NavigationState::new(),
            preferences: PreferenceStore::restore(storage),
            conversation: ConversationStore::new(),
            detection: LiveDetection::new(),
            translating: false,
            chat,
            pending_replies: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn role(&self) -> Option<UserRole> {
        self.navigation.role()
    }

    pub fn view(&self) -> &ViewId {
        self.navigation.view()
    }

    /// What the main content area should render right now.
    pub fn current_view(&self) -> RenderableView {
        self.navigation.current()
    }

    pub fn settings(&self) -> &UserSettings {
        self.preferences.settings()
    }

    /// All translations, newest first.
    pub fn translations(&self) -> impl ExactSizeIterator<Item = &Translation> {
        self.conversation.translations()
    }

    /// The handful shown on the home view.
    pub fn recent_translations(&self) -> impl Iterator<Item = &Translation> {
        self.conversation
            .recent_translations(RECENT_TRANSLATIONS_LIMIT)
    }

    /// Chat transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn detection(&self) -> &LiveDetection {
        &self.detection
    }

    /// Whether a bot reply is still waiting out its delay.
    pub fn is_bot_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn is_translating(&self) -> bool {
        self.translating
    }

    pub fn presentation(&self, prefers_dark: bool) -> PresentationFlags {
        PresentationFlags::from_settings(self.settings(), prefers_dark)
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Onboarding role selection.
    ///
    /// Redirects to the role's initial view and mirrors the role into
    /// settings. Ignored (returns `false`) while a role is already selected.
    pub fn select_role(&mut self, role: UserRole) -> bool {
        if !self.navigation.select_role(role) {
            debug!("Role already selected, ignoring selection of '{}'", role);
            return false;
        }
        info!("Selected role '{}', opening {}", role, self.navigation.view());
        self.preferences.update(SettingsPatch::role(role));
        true
    }

    /// Return to onboarding. Settings keep their last role.
    pub fn reset_role(&mut self) {
        info!("Role reset");
        self.navigation.reset_role();
    }

    pub fn set_view(&mut self, view: ViewId) {
        debug!("View -> {}", view);
        self.navigation.set_view(view);
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    /// Merge `patch` into settings and persist.
    ///
    /// A role in the patch also becomes the navigation role once onboarding
    /// is done, without changing the view.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        if let Some(role) = patch.role {
            if self.navigation.role().is_some() {
                self.navigation.change_role(role);
            }
        }
        self.preferences.update(patch);
    }

    // -------------------------------------------------------------------------
    // Conversation
    // -------------------------------------------------------------------------

    pub fn add_translation(&mut self, translation: Translation) {
        self.conversation.add_translation(translation);
    }

    pub fn add_message(&mut self, message: Message) {
        self.conversation.add_message(message);
    }

    /// Seed the assistant greeting if the chat is empty.
    pub fn ensure_welcome(&mut self) -> bool {
        self.conversation.ensure_welcome()
    }

    /// Append the user's message and schedule a bot reply.
    ///
    /// Returns `None` and appends nothing when `text` is blank. The caller
    /// awaits [`PendingReply::deliver`] and feeds the result to
    /// [`AppState::receive_reply`]. Delivery is independent of which view is
    /// showing, so the reply lands even if the user navigates away.
    pub fn submit_chat(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let user_id = self.conversation.next_message_id();
        self.conversation.add_message(Message::user(user_id, text));

        let reply_id = self.conversation.next_message_id();
        self.pending_replies += 1;
        Some(self.chat.reply(reply_id))
    }

    /// Append a delivered bot reply and settle its pending slot.
    pub fn receive_reply(&mut self, reply: Message) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        debug!("Bot reply {} delivered ({} pending)", reply.id, self.pending_replies);
        self.add_message(reply);
    }

    // -------------------------------------------------------------------------
    // Live detection
    // -------------------------------------------------------------------------

    /// Mark a camera session live or idle. Going live clears the previous text.
    pub fn set_translating(&mut self, translating: bool) {
        if translating && !self.translating {
            self.detection.clear_text();
        }
        self.translating = translating;
    }

    /// Fold a poll or manual fetch into the live detection. Returns whether it changed.
    pub fn apply_detection(&mut self, result: &DetectionResult) -> bool {
        self.detection.apply(result)
    }

    pub fn clear_detection(&mut self) {
        self.detection.clear();
    }

    /// Save the live text as a translation. Returns `false` if there is none.
    pub fn save_live_translation(&mut self) -> bool {
        match self.detection.to_translation() {
            Some(translation) => {
                info!("Saved sign translation ({} chars)", translation.text.len());
                self.conversation.add_translation(translation);
                true
            }
            None => false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Box::new(crate::preferences::InMemoryStorage::new()))
    }
}
