use super::Author;
use super::ChatReply;
use super::Message;
use super::MessageType;
use super::Visuals;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[test]
fn it_executes_new() {
    Config::set(ConfigKey::Username, "testuser");

    let msg = Message::new(Author::User, "Hi there!");
    assert_eq!(msg.author, Author::User);
    assert_eq!(msg.author.to_string(), "testuser");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.mtype, MessageType::Normal);
    assert_eq!(msg.visuals, Visuals::default());
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(Author::Assistant, "\t\tHi there!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.author.to_string(), "Archbot");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Assistant, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_executes_from_reply() {
    let visuals = Visuals {
        architecture_url: Some("/img/a.png".to_string()),
        has_architecture: true,
        ..Visuals::default()
    };
    let msg = Message::from_reply(ChatReply::new("An answer.".to_string(), visuals.clone()));

    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.text, "An answer.".to_string());
    assert_eq!(msg.message_type(), MessageType::Normal);
    assert_eq!(msg.visuals, visuals);
}

#[test]
fn it_executes_from_reply_with_error() {
    let msg = Message::from_reply(ChatReply::error("Connection error: boom".to_string()));

    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.message_type(), MessageType::Error);
    assert_eq!(msg.visuals, Visuals::default());
}

#[test]
fn it_maps_api_roles() {
    assert_eq!(Message::new(Author::User, "hi").api_role(), "user");
    assert_eq!(Message::new(Author::Assistant, "yo").api_role(), "assistant");
}
