//! Per-chat session flags controlling which flow a location is routed to
//!
//! The flags are ephemeral: they live in process memory and reset on restart.
//! `DashMap` serializes each individual flag operation; whole read-then-clear
//! sequences are serialized through `lock_chat`, an async per-chat lock held
//! across a dispatch branch and across each menu-tap mutation. A re-arm tap
//! landing while a branch is mid-flight waits for the branch's clear instead
//! of being wiped by it.

use std::sync::Arc;

use dashmap::DashMap;
use teloxide::types::ChatId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Snapshot of one chat's flow flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatFlags {
    /// A gastos-operativos form is waiting for its location
    pub form_pending: bool,
    /// Driver live tracking is switched on
    pub tracking_enabled: bool,
}

/// Process-wide flow flags keyed by chat
#[derive(Debug, Default)]
pub struct SessionFlags {
    flags: DashMap<ChatId, ChatFlags>,
    locks: DashMap<ChatId, Arc<Mutex<()>>>,
}

impl SessionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take this chat's dispatch lock.
    ///
    /// Held for the duration of a dispatch branch or a menu-tap mutation.
    /// Other chats are unaffected.
    pub async fn lock_chat(&self, chat_id: ChatId) -> OwnedMutexGuard<()> {
        let lock = self.locks.entry(chat_id).or_default().clone();
        lock.lock_owned().await
    }

    /// Current flags for a chat (both false when the chat is unknown)
    pub fn get(&self, chat_id: ChatId) -> ChatFlags {
        self.flags.get(&chat_id).map(|entry| *entry).unwrap_or_default()
    }

    /// Arm the form flow: the next location from this chat is associated
    /// with the pending operational-expense form
    pub fn set_form_pending(&self, chat_id: ChatId, pending: bool) {
        self.flags.entry(chat_id).or_default().form_pending = pending;
    }

    /// Consume the form flag after the form branch ran
    pub fn clear_form_pending(&self, chat_id: ChatId) {
        self.set_form_pending(chat_id, false);
    }

    pub fn set_tracking_enabled(&self, chat_id: ChatId, enabled: bool) {
        self.flags.entry(chat_id).or_default().tracking_enabled = enabled;
    }

    /// Flip tracking and return the new state
    pub fn toggle_tracking(&self, chat_id: ChatId) -> bool {
        let mut entry = self.flags.entry(chat_id).or_default();
        entry.tracking_enabled = !entry.tracking_enabled;
        entry.tracking_enabled
    }
}
