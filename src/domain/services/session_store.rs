#[cfg(test)]
#[path = "session_store_test.rs"]
mod tests;

use crate::domain::models::Author;
use crate::domain::models::ChatReply;
use crate::domain::models::Conversation;
use crate::domain::models::Message;

/// In-memory store for the active conversation and the archive browsed from
/// the sidebar. State lives for one process run only.
#[derive(Default)]
pub struct SessionStore {
    pub active: Conversation,
    pub archive: Vec<Conversation>,
}

impl SessionStore {
    /// Snapshots the active conversation into the archive. Conversations the
    /// user never typed in are skipped, and a structurally identical archive
    /// entry is never added twice, so calling this repeatedly is harmless.
    /// The active conversation itself is left untouched apart from its name.
    pub fn archive_active_if_needed(&mut self) {
        if !self.active.has_user_message() {
            return;
        }

        self.active.name = Conversation::derive_name(&self.active.messages);

        let already_archived = self.archive.iter().any(|conversation| {
            return conversation.messages == self.active.messages;
        });
        if !already_archived {
            self.archive.push(self.active.clone());
        }
    }

    pub fn start_new(&mut self) {
        self.archive_active_if_needed();
        self.active = Conversation::default();
    }

    pub fn switch_to(&mut self, index: usize) {
        if index >= self.archive.len() {
            return;
        }

        // Clone before archiving so the index survives the archive push.
        let target = self.archive[index].clone();
        self.archive_active_if_needed();
        self.active = target;
    }

    pub fn append_user(&mut self, text: &str) {
        self.active.messages.push(Message::new(Author::User, text));
    }

    pub fn append_reply(&mut self, reply: ChatReply) {
        self.active.messages.push(Message::from_reply(reply));
    }
}
