//! Auth session side channel, local authenticator, session stores.

use login_form::auth::{
    AuthError, AuthSession, Authenticator, FileStore, LocalAuthenticator, LoginOutcome,
    MemoryStore, SessionStore,
};
use login_form::models::User;
use login_form::validation::Rules;
use pretty_assertions::assert_eq;

struct AlwaysReject;

impl Authenticator for AlwaysReject {
    async fn authenticate(&self, _email: &str, _password: &str) -> Result<User, AuthError> {
        Err(AuthError::InvalidCredentials)
    }
}

#[tokio::test]
async fn local_authenticator_accepts_valid_credentials() {
    let auth = LocalAuthenticator::new(Rules::default());
    let user = auth
        .authenticate("alice@example.com", "123456")
        .await
        .expect("valid credentials");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.id.is_empty());
}

#[tokio::test]
async fn local_authenticator_rejects_rule_violations() {
    let auth = LocalAuthenticator::new(Rules::default());
    let err = auth.authenticate("bad-email", "123456").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    let err = auth.authenticate("alice@example.com", "123").await.unwrap_err();
    assert_eq!(err.to_string(), "Email atau password salah");
}

#[test]
fn display_name_from_local_part() {
    assert_eq!(User::display_name_for("alice@example.com"), "Alice");
    assert_eq!(User::display_name_for("alice.smith@example.com"), "Alice Smith");
    assert_eq!(User::display_name_for("j_doe-x@example.com"), "J Doe X");
    assert_eq!(User::display_name_for("...@example.com"), "...@example.com");
}

#[test]
fn begin_and_finish_track_loading_and_error() {
    let mut session = AuthSession::new(AlwaysReject, Box::new(MemoryStore::default()));
    assert!(!session.is_loading());

    session.begin_login();
    assert!(session.is_loading());
    assert_eq!(session.error(), None);

    let outcome = session.finish_login(Err(AuthError::Rejected("Server sibuk".to_string())));
    assert_eq!(outcome, LoginOutcome::Failure);
    assert!(!session.is_loading());
    assert_eq!(session.error(), Some("Server sibuk"));
    assert!(session.user().is_none());

    session.begin_login();
    assert_eq!(session.error(), None);
}

#[tokio::test]
async fn failed_login_reports_through_side_channel() {
    let mut session = AuthSession::new(AlwaysReject, Box::new(MemoryStore::default()));
    let outcome = session.login("user@example.com", "123456").await;
    assert!(!outcome.is_success());
    assert_eq!(outcome.user(), None);
    assert_eq!(session.error(), Some("Email atau password salah"));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn successful_login_persists_and_logout_clears() {
    let store = MemoryStore::default();
    let mut session = AuthSession::new(
        LocalAuthenticator::new(Rules::default()),
        Box::new(store.clone()),
    );

    let outcome = session.login("bob@example.com", "hunter22").await;
    assert!(outcome.is_success());
    assert_eq!(outcome.user().map(|u| u.name.as_str()), Some("Bob"));
    assert_eq!(session.user().map(|u| u.email.as_str()), Some("bob@example.com"));
    assert_eq!(store.current().map(|u| u.name), Some("Bob".to_string()));

    session.logout();
    assert!(session.user().is_none());
    assert_eq!(session.error(), None);
    assert_eq!(store.current(), None);
}

#[test]
fn restore_picks_up_persisted_user() {
    let user = User::new("Carol", "carol@example.com");
    let session = AuthSession::restore(
        LocalAuthenticator::default(),
        Box::new(MemoryStore::with_user(user.clone())),
    );
    assert_eq!(session.user(), Some(&user));
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileStore::new(dir.path().join("nested").join("session.json"));

    assert_eq!(store.load().expect("load empty"), None);

    let user = User::new("Dina", "dina@example.com");
    store.save(&user).expect("save");
    assert_eq!(store.load().expect("load"), Some(user));

    store.clear().expect("clear");
    assert_eq!(store.load().expect("load cleared"), None);
    store.clear().expect("clearing twice is fine");
}

#[test]
fn file_store_reports_corrupt_data() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").expect("write");
    let err = FileStore::new(&path).load().unwrap_err();
    assert!(matches!(err, AuthError::Serialization(_)));
}

#[test]
fn restore_survives_corrupt_store() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{").expect("write");
    let session = AuthSession::restore(LocalAuthenticator::default(), Box::new(FileStore::new(&path)));
    assert!(session.user().is_none());
}
