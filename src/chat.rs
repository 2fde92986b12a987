//! Coach chat: an append-only transcript fed by a pluggable reply source.
//!
//! Replies are produced when their scheduled deadline is polled, so the
//! source sees the whole history up to that point. Swapping `CannedReplies`
//! for a real backend only means another `ReplySource`.

use chrono::{DateTime, Duration, Local};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::{ChatMessage, Role};
use crate::scheduler::{self, Scheduled};

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

pub trait ReplySource {
    fn next_reply(&mut self, history: &[ChatMessage]) -> String;
}

/// Picks one of a fixed set of answers uniformly at random.
pub struct CannedReplies {
    replies: Vec<String>,
    rng: StdRng,
}

impl CannedReplies {
    pub fn new(replies: Vec<String>) -> Self {
        Self::with_rng(replies, StdRng::from_entropy())
    }

    pub fn with_rng(replies: Vec<String>, rng: StdRng) -> Self {
        CannedReplies { replies, rng }
    }
}

impl ReplySource for CannedReplies {
    fn next_reply(&mut self, _history: &[ChatMessage]) -> String {
        self.replies
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| "I'm still learning about your training. Ask me again soon!".to_string())
    }
}

#[derive(Debug, Default, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn push(&mut self, role: Role, content: impl Into<String>, timestamp: DateTime<Local>) -> &ChatMessage {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content: content.into(),
            timestamp,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    Ignored,
}

pub struct ChatPanel {
    transcript: Transcript,
    pub draft: String,
    pending: Vec<Scheduled<()>>,
    source: Box<dyn ReplySource>,
    reply_delay: Duration,
}

impl ChatPanel {
    pub fn new(
        greeting: &str,
        source: Box<dyn ReplySource>,
        reply_delay: Duration,
        now: DateTime<Local>,
    ) -> Self {
        let mut transcript = Transcript::default();
        if !greeting.is_empty() {
            transcript.push(Role::Assistant, greeting, now);
        }
        ChatPanel {
            transcript,
            draft: String::new(),
            pending: Vec::new(),
            source,
            reply_delay,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_waiting(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Appends the user's message right away and schedules one reply.
    /// Blank text is ignored.
    pub fn send_message(&mut self, text: &str, now: DateTime<Local>) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Ignored;
        }
        let id = self.transcript.push(Role::User, text, now).id;
        tracing::debug!(message_id = id, "chat message sent");
        self.pending.push(Scheduled::after(now, self.reply_delay, ()));
        SendOutcome::Sent
    }

    pub fn send_draft(&mut self, now: DateTime<Local>) -> SendOutcome {
        let text = std::mem::take(&mut self.draft);
        let outcome = self.send_message(&text, now);
        if outcome == SendOutcome::Ignored {
            self.draft = text;
        }
        outcome
    }

    /// Appends a reply for every deadline that has passed, oldest first.
    pub fn poll(&mut self, now: DateTime<Local>) -> usize {
        let mut fired = 0;
        for task in &mut self.pending {
            if task.poll(now).is_some() {
                let reply = self.source.next_reply(self.transcript.messages());
                self.transcript.push(Role::Assistant, reply, now);
                fired += 1;
            }
        }
        if fired > 0 {
            self.pending.retain(Scheduled::is_pending);
            tracing::debug!(replies = fired, "coach replied");
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<DateTime<Local>> {
        scheduler::earliest(self.pending.iter().map(|t| Some(t.due())))
    }
}

impl Drop for ChatPanel {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(pending = self.pending.len(), "dropping unanswered coach replies");
        }
    }
}
