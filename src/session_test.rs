use super::*;
use chrono::TimeZone;

fn at_ms(ms: i64) -> DateTime<Local> {
    Local.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
}

fn store() -> SessionStore {
    SessionStore::new(Duration::milliseconds(1000))
}

#[test]
fn any_credentials_authenticate_after_delay() {
    let mut store = store();
    store.login("any@x.com", "anything", at_ms(0)).unwrap();
    assert!(store.is_loading());
    assert!(!store.is_authenticated());

    assert!(store.poll(at_ms(999)).is_none());
    let session = store.poll(at_ms(1000)).cloned().unwrap();
    assert_eq!(session.email, "any@x.com");
    assert!(store.is_authenticated());
    assert!(!store.is_loading());
}

#[test]
fn blank_credentials_are_rejected() {
    let mut store = store();
    assert_eq!(store.login("", "pw", at_ms(0)), Err(SessionError::MissingCredentials));
    assert_eq!(store.login("   ", "pw", at_ms(0)), Err(SessionError::MissingCredentials));
    assert_eq!(store.login("a@b.com", "", at_ms(0)), Err(SessionError::MissingCredentials));
    assert!(!store.is_loading());
}

#[test]
fn whitespace_password_is_still_a_password() {
    let mut store = store();
    assert_eq!(store.login("a@b.com", "   ", at_ms(0)), Ok(()));
    assert!(store.is_loading());
    assert!(store.poll(at_ms(1000)).is_some());
}

#[test]
fn huge_configured_delay_keeps_login_pending() {
    let config = crate::config::AppConfig {
        login_delay_ms: i64::MAX,
        ..Default::default()
    };
    let mut store = SessionStore::new(config.login_delay());
    store.login("a@b.com", "pw", at_ms(0)).unwrap();
    assert!(store.is_loading());
    assert!(store.poll(at_ms(60_000)).is_none());
}

#[test]
fn logout_always_clears() {
    let mut store = store();
    store.logout();
    assert!(!store.is_authenticated());

    store.login("a@b.com", "pw", at_ms(0)).unwrap();
    store.poll(at_ms(1000));
    store.logout();
    assert!(!store.is_authenticated());
    assert!(store.current().is_none());
}

#[test]
fn logout_cancels_pending_login() {
    let mut store = store();
    store.login("a@b.com", "pw", at_ms(0)).unwrap();
    store.logout();
    assert!(store.poll(at_ms(5000)).is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn second_login_replaces_the_pending_one() {
    let mut store = store();
    store.login("first@x.com", "pw", at_ms(0)).unwrap();
    store.login("second@x.com", "pw", at_ms(500)).unwrap();
    assert!(store.poll(at_ms(1000)).is_none());
    assert_eq!(store.poll(at_ms(1500)).unwrap().email, "second@x.com");
}

#[test]
fn display_name_comes_from_email_local_part() {
    assert_eq!(Session::for_email("jane.doe@x.com").name, "Jane Doe");
    assert_eq!(Session::for_email(DEMO_EMAIL).name, "Demo");
    assert_eq!(Session::for_email("@x.com").name, "Athlete");
}
