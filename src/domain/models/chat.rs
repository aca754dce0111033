use super::Message;
use super::MessageType;
use super::Visuals;

/// Payload handed from the UI to the actions service. `history` holds the
/// active conversation as it was before the submitted query was appended.
pub struct ChatPrompt {
    pub history: Vec<Message>,
    pub query: String,
}

impl ChatPrompt {
    pub fn new(history: Vec<Message>, query: &str) -> ChatPrompt {
        return ChatPrompt {
            history,
            query: query.to_string(),
        };
    }
}

/// The normalized result of one chat request. Every outcome of a request,
/// including failures, is expressed as a reply so callers never handle
/// errors themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub answer: String,
    pub mtype: MessageType,
    pub visuals: Visuals,
}

impl ChatReply {
    pub fn new(answer: String, visuals: Visuals) -> ChatReply {
        return ChatReply {
            answer,
            mtype: MessageType::Normal,
            visuals,
        };
    }

    pub fn error(answer: String) -> ChatReply {
        return ChatReply {
            answer,
            mtype: MessageType::Error,
            visuals: Visuals::default(),
        };
    }
}
