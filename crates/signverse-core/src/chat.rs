//! Simulated chat assistant.
//!
//! The in-app assistant does no language processing. Each user message is
//! answered after a fixed delay with one of five canned replies, chosen by a
//! seeded ChaCha RNG so tests can pin the sequence.

use std::time::Duration;

use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

use crate::config::BOT_REPLY_DELAY_MS;
use crate::model::{Emotion, Message};
use crate::platform::{now_millis, sleep};

/// A reply the assistant can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedReply {
    pub text: &'static str,
    pub emotion: Emotion,
}

pub const CANNED_REPLIES: [CannedReply; 5] = [
    CannedReply {
        text: "I understand what you're saying. How can I help further?",
        emotion: Emotion::Neutral,
    },
    CannedReply {
        text: "That's great to hear! I'm glad things are going well.",
        emotion: Emotion::Happy,
    },
    CannedReply {
        text: "I'm sorry to hear that. Is there anything I can do to help?",
        emotion: Emotion::Sad,
    },
    CannedReply {
        text: "I'm here to assist with your sign language translation needs.",
        emotion: Emotion::Neutral,
    },
    CannedReply {
        text: "Could you please provide more details so I can better assist you?",
        emotion: Emotion::Neutral,
    },
];

/// Picks canned replies and schedules their delivery.
#[derive(Clone)]
pub struct ChatSimulator {
    rng: ChaCha8Rng,
    delay: Duration,
}

impl ChatSimulator {
    /// Deterministic simulator for tests and replays.
    pub fn seeded(seed: u64, delay: Duration) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            delay,
        }
    }

    /// Simulator seeded from the wall clock with the production reply delay.
    pub fn from_clock() -> Self {
        Self::seeded(now_millis(), Duration::from_millis(BOT_REPLY_DELAY_MS))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pick_reply(&mut self) -> &'static CannedReply {
        let index = self.rng.next_u32() as usize % CANNED_REPLIES.len();
        &CANNED_REPLIES[index]
    }

    /// Schedule a reply under message id `id`.
    pub fn reply(&mut self, id: String) -> PendingReply {
        PendingReply {
            id,
            reply: self.pick_reply(),
            delay: self.delay,
        }
    }
}

impl std::fmt::Debug for ChatSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSimulator")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// A bot reply waiting out its delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    id: String,
    reply: &'static CannedReply,
    delay: Duration,
}

impl PendingReply {
    pub fn reply(&self) -> &'static CannedReply {
        self.reply
    }

    /// Wait out the delay, then build the bot message (stamped at delivery).
    pub async fn deliver(self) -> Message {
        sleep(self.delay).await;
        Message::bot(self.id, self.reply.text, self.reply.emotion)
    }
}
