use super::*;
use crate::net::auth_client::{SessionListener, SessionNotifier};
use crate::net::data_service::settle;
use crate::net::types::{MessageWithUser, UserRole};
use crate::state::chat::{ChatError, ChatState};
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

fn user(id: &str, name: Option<&str>) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        name: name.map(str::to_owned),
        role: UserRole::User,
        is_active: true,
        last_login: None,
    }
}

fn signed_in(id: &str) -> SessionSnapshot {
    SessionSnapshot { user: Some(user(id, Some("Ann"))), is_authenticated: true }
}

// =============================================================
// MockAuth / MockData
// =============================================================

#[derive(Default)]
struct MockAuth {
    calls: RefCell<Vec<String>>,
    session: RefCell<SessionSnapshot>,
    fail_with: RefCell<Option<ServiceError>>,
    session_on_success: RefCell<Option<SessionSnapshot>>,
    notifier: SessionNotifier,
}

impl MockAuth {
    fn outcome(&self, call: String) -> Result<(), ServiceError> {
        self.calls.borrow_mut().push(call);
        if let Some(e) = self.fail_with.borrow().clone() {
            return Err(e);
        }
        if let Some(next) = self.session_on_success.borrow_mut().take() {
            self.session.replace(next);
        }
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl AuthClient for MockAuth {
    async fn sign_in_email(&self, email: &str, password: &str) -> Result<(), ServiceError> {
        self.outcome(format!("sign_in:{email}:{password}"))
    }

    async fn sign_up_email(&self, email: &str, password: &str, name: &str) -> Result<(), ServiceError> {
        self.outcome(format!("sign_up:{email}:{password}:{name}"))
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        self.outcome("sign_out".to_owned())
    }

    async fn get_session(&self) -> Result<SessionSnapshot, ServiceError> {
        self.calls.borrow_mut().push("get_session".to_owned());
        Ok(self.session.borrow().clone())
    }

    async fn token(&self) -> Result<Option<String>, ServiceError> {
        Ok(None)
    }

    fn subscribe(&self, listener: SessionListener) {
        self.notifier.subscribe(listener);
    }

    fn session_lost(&self) {
        self.calls.borrow_mut().push("session_lost".to_owned());
        self.notifier.notify(false);
    }
}

/// Data service whose calls are all rejected for lack of a session.
struct RejectingData {
    auth: Rc<MockAuth>,
}

impl RejectingData {
    fn reject<T>(&self) -> Result<T, ServiceError> {
        let err = ServiceError::Server {
            code: Some("UNAUTHORIZED".to_owned()),
            message: "Unauthenticated call".to_owned(),
        };
        settle(&*self.auth, Err(err))
    }
}

#[async_trait::async_trait(?Send)]
impl DataService for RejectingData {
    async fn get_messages(&self) -> Result<Vec<MessageWithUser>, ServiceError> {
        self.reject()
    }

    async fn get_filtered_messages_by_content(&self, _content: &str) -> Result<Vec<MessageWithUser>, ServiceError> {
        self.reject()
    }

    async fn send_message(&self, _content: &str) -> Result<(), ServiceError> {
        self.reject()
    }

    async fn update_user_profile(&self, _name: Option<&str>) -> Result<(), ServiceError> {
        self.reject()
    }
}

#[derive(Default)]
struct MockData {
    renames: RefCell<Vec<Option<String>>>,
    fail_with: Option<ServiceError>,
}

#[async_trait::async_trait(?Send)]
impl DataService for MockData {
    async fn get_messages(&self) -> Result<Vec<MessageWithUser>, ServiceError> {
        Ok(Vec::new())
    }

    async fn get_filtered_messages_by_content(&self, _content: &str) -> Result<Vec<MessageWithUser>, ServiceError> {
        Ok(Vec::new())
    }

    async fn send_message(&self, _content: &str) -> Result<(), ServiceError> {
        Ok(())
    }

    async fn update_user_profile(&self, name: Option<&str>) -> Result<(), ServiceError> {
        self.renames.borrow_mut().push(name.map(str::to_owned));
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

fn new_auth() -> Rc<RefCell<AuthState>> {
    Rc::new(RefCell::new(AuthState::pending()))
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn pending_state_is_loading_and_signed_out() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn apply_session_drops_user_when_not_authenticated() {
    let mut state = AuthState::default();
    state.apply_session(SessionSnapshot { user: Some(user("u1", None)), is_authenticated: false });
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
}

#[test]
fn apply_session_tracks_latest_snapshot() {
    let mut state = AuthState::default();
    state.apply_session(signed_in("u1"));
    assert_eq!(state.user_id(), Some("u1"));
    state.apply_session(SessionSnapshot::default());
    assert_eq!(state.user_id(), None);
}

// =============================================================
// refresh_session
// =============================================================

#[test]
fn refresh_session_applies_snapshot_and_settles() {
    let auth = new_auth();
    let client = MockAuth::default();
    client.session.replace(signed_in("u1"));
    block_on(refresh_session(&auth, &client));
    let state = auth.borrow();
    assert!(state.is_authenticated);
    assert!(!state.loading);
}

// =============================================================
// sign_in / sign_up / sign_out
// =============================================================

#[test]
fn sign_in_delegates_and_refreshes_session() {
    let auth = new_auth();
    let client = MockAuth::default();
    client.session_on_success.replace(Some(signed_in("u1")));
    block_on(sign_in(&auth, &client, "ann@example.com", "secret1")).unwrap();
    assert_eq!(
        *client.calls.borrow(),
        vec!["sign_in:ann@example.com:secret1".to_owned(), "get_session".to_owned()]
    );
    assert!(auth.borrow().is_authenticated);
    assert!(!auth.borrow().loading);
}

#[test]
fn sign_in_failure_propagates_unchanged_without_retry() {
    let auth = new_auth();
    let client = MockAuth::default();
    let err = ServiceError::Server {
        code: Some("INVALID_EMAIL_OR_PASSWORD".to_owned()),
        message: "Invalid email or password".to_owned(),
    };
    client.fail_with.replace(Some(err.clone()));
    assert_eq!(block_on(sign_in(&auth, &client, "a@b.co", "x")), Err(err));
    assert_eq!(client.calls.borrow().len(), 1);
    assert!(!auth.borrow().loading);
    assert!(!auth.borrow().is_authenticated);
}

#[test]
fn sign_up_passes_name_through() {
    let auth = new_auth();
    let client = MockAuth::default();
    client.session_on_success.replace(Some(signed_in("u2")));
    block_on(sign_up(&auth, &client, "bo@example.com", "secret1", "Bo")).unwrap();
    assert_eq!(client.calls.borrow()[0], "sign_up:bo@example.com:secret1:Bo");
    assert_eq!(auth.borrow().user_id(), Some("u2"));
}

#[test]
fn sign_out_clears_user() {
    let auth = Rc::new(RefCell::new(AuthState::default()));
    auth.borrow_mut().apply_session(signed_in("u1"));
    let client = MockAuth::default();
    block_on(sign_out(&auth, &client)).unwrap();
    assert!(!auth.borrow().is_authenticated);
    assert!(auth.borrow().user.is_none());
}

#[test]
fn failed_sign_out_keeps_session() {
    let auth = Rc::new(RefCell::new(AuthState::default()));
    auth.borrow_mut().apply_session(signed_in("u1"));
    let client = MockAuth::default();
    client.fail_with.replace(Some(ServiceError::Network("down".to_owned())));
    assert!(block_on(sign_out(&auth, &client)).is_err());
    assert!(auth.borrow().is_authenticated);
}

// =============================================================
// update_profile
// =============================================================

#[test]
fn update_profile_patches_local_name() {
    let auth = Rc::new(RefCell::new(AuthState::default()));
    auth.borrow_mut().apply_session(signed_in("u1"));
    let data = MockData::default();
    block_on(update_profile(&auth, &data, "  Annie ")).unwrap();
    assert_eq!(*data.renames.borrow(), vec![Some("Annie".to_owned())]);
    assert_eq!(auth.borrow().user.as_ref().and_then(|u| u.name.as_deref()), Some("Annie"));
}

#[test]
fn update_profile_failure_keeps_name() {
    let auth = Rc::new(RefCell::new(AuthState::default()));
    auth.borrow_mut().apply_session(signed_in("u1"));
    let data = MockData {
        fail_with: Some(ServiceError::Server { code: None, message: "Unauthenticated".to_owned() }),
        ..MockData::default()
    };
    assert!(block_on(update_profile(&auth, &data, "Annie")).is_err());
    assert_eq!(auth.borrow().user.as_ref().and_then(|u| u.name.as_deref()), Some("Ann"));
}

// =============================================================
// session events
// =============================================================

#[test]
fn session_loss_event_signs_out() {
    let auth = Rc::new(RefCell::new(AuthState::default()));
    auth.borrow_mut().apply_session(signed_in("u1"));
    let client = MockAuth::default();
    watch_session(&auth, &client);
    client.session_lost();
    assert!(!auth.borrow().is_authenticated);
    assert!(auth.borrow().user.is_none());
}

#[test]
fn sign_in_event_waits_for_session_read() {
    let auth = Rc::new(RefCell::new(AuthState::default()));
    session_changed(&auth, true);
    assert_eq!(*auth.borrow(), AuthState::default());
}

#[test]
fn rejected_send_flips_authenticated_flag() {
    let auth = Rc::new(RefCell::new(AuthState::default()));
    auth.borrow_mut().apply_session(signed_in("u1"));
    let client = Rc::new(MockAuth::default());
    watch_session(&auth, &*client);
    let data = RejectingData { auth: client.clone() };
    let chat = Rc::new(RefCell::new(ChatState::default()));

    let sent = block_on(crate::state::chat::send_message(&chat, &data, "hello"));

    assert_eq!(sent, Err(ChatError::Failed("You must be signed in to perform this action".to_owned())));
    assert!(!auth.borrow().is_authenticated);
    assert_eq!(*client.calls.borrow(), vec!["session_lost".to_owned()]);
}

#[test]
fn rejected_rename_signs_out_and_keeps_error() {
    let auth = Rc::new(RefCell::new(AuthState::default()));
    auth.borrow_mut().apply_session(signed_in("u1"));
    let client = Rc::new(MockAuth::default());
    watch_session(&auth, &*client);
    let data = RejectingData { auth: client.clone() };
    assert!(block_on(update_profile(&auth, &data, "Annie")).unwrap_err().is_unauthenticated());
    assert!(!auth.borrow().is_authenticated);
}
