use super::SessionStore;
use crate::domain::models::Author;
use crate::domain::models::ChatReply;
use crate::domain::models::Visuals;
use crate::domain::models::GREETING;

#[test]
fn it_skips_archiving_without_user_messages() {
    let mut store = SessionStore::default();
    store.archive_active_if_needed();

    assert!(store.archive.is_empty());
    assert_eq!(store.active.name, "New Chat");
}

#[test]
fn it_archives_the_active_conversation() {
    let mut store = SessionStore::default();
    store.append_user("Forecast store demand");
    store.archive_active_if_needed();

    assert_eq!(store.archive.len(), 1);
    assert_eq!(store.archive[0].name, "Forecast store demand");
    // The active conversation is snapshotted, not cleared.
    assert_eq!(store.active.messages.len(), 2);
}

#[test]
fn it_archives_idempotently() {
    let mut store = SessionStore::default();
    store.append_user("Forecast store demand");
    store.archive_active_if_needed();
    store.archive_active_if_needed();

    assert_eq!(store.archive.len(), 1);
}

#[test]
fn it_archives_again_after_the_conversation_grows() {
    let mut store = SessionStore::default();
    store.append_user("Forecast store demand");
    store.archive_active_if_needed();

    store.append_reply(ChatReply::new(
        "A batch pipeline fits.".to_string(),
        Visuals::default(),
    ));
    store.archive_active_if_needed();

    assert_eq!(store.archive.len(), 2);
}

#[test]
fn it_starts_a_new_conversation_with_only_the_greeting() {
    let mut store = SessionStore::default();
    store.append_user("Forecast store demand");
    store.start_new();

    assert_eq!(store.archive.len(), 1);
    assert_eq!(store.active.messages.len(), 1);
    assert_eq!(store.active.messages[0].author, Author::Assistant);
    assert_eq!(store.active.messages[0].text, GREETING);
}

#[test]
fn it_switches_to_an_archived_conversation() {
    let mut store = SessionStore::default();
    store.append_user("Forecast store demand");
    store.start_new();
    store.append_user("Classify support tickets");

    store.switch_to(0);

    // Switching archives the conversation that was active.
    assert_eq!(store.archive.len(), 2);
    assert_eq!(store.active.name, "Forecast store demand");
    assert_eq!(store.archive[1].name, "Classify support tickets");
}

#[test]
fn it_ignores_out_of_bounds_switches() {
    let mut store = SessionStore::default();
    store.append_user("Forecast store demand");
    store.switch_to(3);

    assert!(store.archive.is_empty());
    assert_eq!(
        store.active.messages.last().unwrap().text,
        "Forecast store demand"
    );
}

#[test]
fn it_appends_replies_in_order() {
    let mut store = SessionStore::default();
    store.append_user("Forecast store demand");
    store.append_reply(ChatReply::new(
        "A batch pipeline fits.".to_string(),
        Visuals::default(),
    ));

    let messages = &store.active.messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].author, Author::User);
    assert_eq!(messages[2].author, Author::Assistant);
    assert_eq!(messages[2].text, "A batch pipeline fits.");
}
