use test_utils::requirement_fixture;

use super::Author;
use super::Conversation;
use super::Message;
use super::GREETING;

#[test]
fn it_starts_with_a_single_greeting() {
    let conversation = Conversation::default();

    assert_eq!(conversation.name, "New Chat");
    assert_eq!(conversation.messages.len(), 1);
    assert_eq!(conversation.messages[0].author, Author::Assistant);
    assert_eq!(conversation.messages[0].text, GREETING);
    assert!(!conversation.has_user_message());
}

#[test]
fn it_derives_new_chat_without_user_messages() {
    let messages = vec![Message::new(Author::Assistant, GREETING)];
    assert_eq!(Conversation::derive_name(&messages), "New Chat");
}

#[test]
fn it_derives_short_names_verbatim() {
    let messages = vec![
        Message::new(Author::Assistant, GREETING),
        Message::new(Author::User, "Forecast store demand"),
    ];
    assert_eq!(Conversation::derive_name(&messages), "Forecast store demand");
}

#[test]
fn it_derives_names_of_exactly_forty_characters_verbatim() {
    let text = "a".repeat(40);
    let messages = vec![Message::new(Author::User, &text)];
    assert_eq!(Conversation::derive_name(&messages), text);
}

#[test]
fn it_truncates_long_names_with_an_ellipsis() {
    let messages = vec![Message::new(Author::User, requirement_fixture())];
    let name = Conversation::derive_name(&messages);

    assert_eq!(name, "A retail customer wants to forecast dail...");
    assert_eq!(name.chars().count(), 43);
}

#[test]
fn it_derives_from_the_first_user_message_only() {
    let messages = vec![
        Message::new(Author::Assistant, GREETING),
        Message::new(Author::User, "First question"),
        Message::new(Author::Assistant, "An answer."),
        Message::new(Author::User, "Second question"),
    ];
    assert_eq!(Conversation::derive_name(&messages), "First question");
}
