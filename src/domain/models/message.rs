#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use super::Author;
use super::ChatReply;
use super::Visuals;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    Error,
}

/// A single chat message. Messages are immutable once appended to a
/// conversation, and sequence equality over them drives the archive dedupe.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub author: Author,
    pub text: String,
    pub visuals: Visuals,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            visuals: Visuals::default(),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            visuals: Visuals::default(),
            mtype,
        };
    }

    pub fn from_reply(reply: ChatReply) -> Message {
        return Message {
            author: Author::Assistant,
            text: reply.answer.replace('\t', "  "),
            visuals: reply.visuals,
            mtype: reply.mtype,
        };
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    /// The role this message carries on the wire when replayed as history.
    pub fn api_role(&self) -> &'static str {
        match self.author {
            Author::User => return "user",
            Author::Assistant => return "assistant",
        }
    }
}
