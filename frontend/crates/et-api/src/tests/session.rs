use crate::{MemorySessionStore, PROFILE_KEY, Session, SessionStore, TOKEN_KEY};

use et_core::UserProfile;

use std::sync::Arc;

#[test]
fn test_new_session_is_signed_out() {
    let session = Session::in_memory();

    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
    assert!(session.profile().is_none());
}

#[test]
fn test_restore_reads_existing_entries() {
    let store = Arc::new(MemorySessionStore::new());
    store.set(TOKEN_KEY, "tok").unwrap();
    store
        .set(PROFILE_KEY, r#"{"name":"Asha","email":"asha@example.com"}"#)
        .unwrap();

    let session = Session::restore(store);

    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("tok"));
    assert_eq!(session.profile().unwrap().display_name(), "Asha");
}

#[test]
fn test_restore_ignores_empty_token_and_bad_profile() {
    let store = Arc::new(MemorySessionStore::new());
    store.set(TOKEN_KEY, "").unwrap();
    store.set(PROFILE_KEY, "not json").unwrap();

    let session = Session::restore(store);

    assert!(!session.is_authenticated());
    assert!(session.profile().is_none());
}

#[test]
fn test_sign_in_persists_and_publishes() {
    let store = Arc::new(MemorySessionStore::new());
    let session = Session::restore(store.clone());
    let mut rx = session.subscribe();

    session
        .sign_in("tok", Some(UserProfile::new(None, "asha@example.com")))
        .unwrap();

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().token.as_deref(), Some("tok"));
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok"));
    assert!(store.get(PROFILE_KEY).unwrap().unwrap().contains("asha@example.com"));
}

#[test]
fn test_sign_in_keeps_name_remembered_at_registration() {
    let session = Session::in_memory();
    session
        .remember_profile(UserProfile::new(Some("Asha".into()), "asha@example.com"))
        .unwrap();

    session
        .sign_in("tok", Some(UserProfile::new(None, "asha@example.com")))
        .unwrap();

    assert_eq!(session.profile().unwrap().name.as_deref(), Some("Asha"));
}

#[test]
fn test_remember_profile_does_not_authenticate() {
    let session = Session::in_memory();

    session
        .remember_profile(UserProfile::new(Some("Asha".into()), "asha@example.com"))
        .unwrap();

    assert!(!session.is_authenticated());
    assert!(session.profile().is_some());
}

#[test]
fn test_sign_out_clears_store_and_publishes() {
    let store = Arc::new(MemorySessionStore::new());
    let session = Session::restore(store.clone());
    session
        .sign_in("tok", Some(UserProfile::new(None, "asha@example.com")))
        .unwrap();
    let mut rx = session.subscribe();

    session.sign_out().unwrap();

    assert!(rx.has_changed().unwrap());
    assert!(!rx.borrow_and_update().is_authenticated());
    assert!(store.get(TOKEN_KEY).unwrap().is_none());
    assert!(store.get(PROFILE_KEY).unwrap().is_none());
}

#[test]
fn test_reload_picks_up_external_change_once() {
    let store = Arc::new(MemorySessionStore::new());
    let session = Session::restore(store.clone());
    let mut rx = session.subscribe();

    store
        .set(PROFILE_KEY, r#"{"name":"Renamed","email":"asha@example.com"}"#)
        .unwrap();

    assert!(session.reload());
    assert!(rx.has_changed().unwrap());
    assert_eq!(
        rx.borrow_and_update().profile.as_ref().unwrap().display_name(),
        "Renamed"
    );

    assert!(!session.reload());
    assert!(!rx.has_changed().unwrap());
}

#[test]
fn test_clones_share_state() {
    let session = Session::in_memory();
    let other = session.clone();

    session.sign_in("tok", None).unwrap();

    assert!(other.is_authenticated());
}
