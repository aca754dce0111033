#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use ratatui::prelude::Rect;

use super::BubbleList;
use super::Scroll;
use super::SessionStore;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatReply;

pub struct AppState<'a> {
    pub bubble_list: BubbleList<'a>,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub scroll: Scroll,
    pub sessions: SessionStore,
    pub sidebar_index: usize,
    pub waiting_for_backend: bool,
}

impl<'a> AppState<'a> {
    pub fn new() -> AppState<'a> {
        return AppState {
            bubble_list: BubbleList::new(),
            last_known_height: 0,
            last_known_width: 0,
            scroll: Scroll::default(),
            sessions: SessionStore::default(),
            sidebar_index: 0,
            waiting_for_backend: false,
        };
    }

    /// Captures the conversation as it stands, then appends the submitted
    /// message and blocks further input. The returned prompt carries the
    /// history from before the append, which is what the service expects.
    pub fn submit_query(&mut self, text: &str) -> ChatPrompt {
        let history = self.sessions.active.messages.clone();
        self.sessions.append_user(text);
        self.waiting_for_backend = true;
        self.sync_dependants();
        self.scroll.last();

        return ChatPrompt::new(history, text);
    }

    pub fn handle_reply(&mut self, reply: ChatReply) {
        self.sessions.append_reply(reply);
        self.waiting_for_backend = false;
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn start_new_chat(&mut self) {
        self.sessions.start_new();
        self.bubble_list.reset();
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn sidebar_cycle(&mut self) {
        if self.sessions.archive.is_empty() {
            return;
        }

        self.sidebar_index = (self.sidebar_index + 1) % self.sessions.archive.len();
    }

    pub fn open_selected(&mut self) {
        if self.sessions.archive.is_empty() {
            return;
        }

        self.sessions.switch_to(self.sidebar_index);
        self.bubble_list.reset();
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list.set_messages(
            &self.sessions.active.messages,
            usize::from(self.last_known_width),
        );

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.waiting_for_backend {
            self.scroll.last();
        }
    }
}
