#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use super::Author;
use super::Message;

pub const NEW_CHAT_NAME: &str = "New Chat";

pub const GREETING: &str = "Hello! I'm Archbot. I help convert customer requirements into AI/ML solution architectures. What's your customer's requirement?";

const NAME_MAX_LENGTH: usize = 40;

/// An ordered exchange of messages with a display name derived from the
/// first thing the user asked.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Default for Conversation {
    fn default() -> Conversation {
        return Conversation {
            name: NEW_CHAT_NAME.to_string(),
            messages: vec![Message::new(Author::Assistant, GREETING)],
        };
    }
}

impl Conversation {
    pub fn derive_name(messages: &[Message]) -> String {
        for msg in messages {
            if msg.author != Author::User {
                continue;
            }

            if msg.text.chars().count() > NAME_MAX_LENGTH {
                let truncated = msg.text.chars().take(NAME_MAX_LENGTH).collect::<String>();
                return format!("{truncated}...");
            }

            return msg.text.to_string();
        }

        return NEW_CHAT_NAME.to_string();
    }

    pub fn has_user_message(&self) -> bool {
        return self.messages.iter().any(|msg| {
            return msg.author == Author::User;
        });
    }
}
