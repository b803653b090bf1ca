//! Translation history and chat transcript.
//!
//! Both lists are append-only. Translations are kept newest-first, messages
//! oldest-first. Neither list is bounded.

use std::collections::VecDeque;

use crate::model::{Emotion, Message, Translation};

/// Id of the seeded welcome message.
pub const WELCOME_MESSAGE_ID: &str = "welcome";

/// Greeting the assistant opens an empty conversation with.
pub const WELCOME_TEXT: &str = "Hello! I'm your SignVerse assistant. How can I help you today?";

#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    translations: VecDeque<Translation>,
    messages: Vec<Message>,
    next_message_seq: u64,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `translation`; index 0 is always the newest.
    pub fn add_translation(&mut self, translation: Translation) {
        self.translations.push_front(translation);
    }

    pub fn translations(&self) -> impl ExactSizeIterator<Item = &Translation> {
        self.translations.iter()
    }

    pub fn translation_count(&self) -> usize {
        self.translations.len()
    }

    /// Up to `limit` translations, newest first.
    pub fn recent_translations(&self, limit: usize) -> impl Iterator<Item = &Translation> {
        self.translations.iter().take(limit)
    }

    /// Appends `message`; the last element is always the newest.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Allocate a message id unique within this store.
    pub fn next_message_id(&mut self) -> String {
        self.next_message_seq += 1;
        format!("msg-{}", self.next_message_seq)
    }

    /// Seed the welcome message if the transcript is empty. Returns whether it was added.
    pub fn ensure_welcome(&mut self) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.messages
            .push(Message::bot(WELCOME_MESSAGE_ID, WELCOME_TEXT, Emotion::Happy));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sender;

    #[test]
    fn test_translations_newest_first() {
        let mut store = ConversationStore::new();
        store.add_translation(Translation::new("first", None));
        store.add_translation(Translation::new("second", Some(Emotion::Sad)));
        store.add_translation(Translation::new("third", None));

        let texts: Vec<_> = store.translations().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["third", "second", "first"]);
    }

    #[test]
    fn test_recent_translations_limit() {
        let mut store = ConversationStore::new();
        for i in 0..5 {
            store.add_translation(Translation::new(format!("t{i}"), None));
        }
        let recent: Vec<_> = store.recent_translations(3).map(|t| t.text.clone()).collect();
        assert_eq!(recent, ["t4", "t3", "t2"]);
        assert_eq!(store.translation_count(), 5);
    }

    #[test]
    fn test_messages_oldest_first() {
        let mut store = ConversationStore::new();
        let a = store.next_message_id();
        store.add_message(Message::user(a, "one"));
        let b = store.next_message_id();
        store.add_message(Message::bot(b, "two", Emotion::Neutral));

        let texts: Vec<_> = store.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["one", "two"]);
    }

    #[test]
    fn test_message_ids_unique() {
        let mut store = ConversationStore::new();
        let ids: Vec<_> = (0..10).map(|_| store.next_message_id()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
        assert!(!ids.iter().any(|id| id == WELCOME_MESSAGE_ID));
    }

    #[test]
    fn test_welcome_seeded_once() {
        let mut store = ConversationStore::new();
        assert!(store.ensure_welcome());
        assert!(!store.ensure_welcome());

        let messages = store.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, WELCOME_MESSAGE_ID);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].emotion, Some(Emotion::Happy));
    }

    #[test]
    fn test_welcome_skipped_when_conversation_exists() {
        let mut store = ConversationStore::new();
        store.add_message(Message::user("x", "already talking"));
        assert!(!store.ensure_welcome());
        assert_eq!(store.messages().len(), 1);
    }
}
