// inventory-client/tests/session_integration.rs
// Session persistence and route gating

mod common;

use common::{EMAIL, PASSWORD, base_url, spawn_server};
use inventory_client::{
    Action, ClientConfig, Guard, InventoryClient, Role, Route, Session, SessionStorage,
    StoredSession, UserInfo,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use tempfile::TempDir;

fn mint_token(role: &str, exp: u64) -> String {
    let claims = json!({
        "id": 7,
        "username": "maya",
        "email": "maya@shop.lk",
        "role": role,
        "exp": exp,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}

fn future_exp() -> u64 {
    (chrono::Utc::now().timestamp() + 3600) as u64
}

fn past_exp() -> u64 {
    (chrono::Utc::now().timestamp() - 3600) as u64
}

fn user(role: Role) -> UserInfo {
    UserInfo {
        id: 7,
        username: "maya".into(),
        email: Some("maya@shop.lk".into()),
        role,
    }
}

#[tokio::test]
async fn test_storage_save_load_delete() {
    let temp_dir = TempDir::new().unwrap();
    let storage = SessionStorage::new(temp_dir.path(), "session.json");

    let stored = StoredSession {
        token: "abc".into(),
        user: Some(user(Role::User)),
    };
    storage.save(&stored).unwrap();
    assert!(storage.exists());
    assert_eq!(storage.load(), Some(stored));

    storage.delete().unwrap();
    assert!(!storage.exists());
    assert!(storage.load().is_none());
}

#[tokio::test]
async fn test_storage_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let storage = SessionStorage::in_dir(temp_dir.path().join("nested").join("data"));

    storage
        .save(&StoredSession {
            token: "abc".into(),
            user: None,
        })
        .unwrap();
    assert!(storage.path().ends_with("session.json"));
    assert!(storage.exists());
}

#[tokio::test]
async fn test_fresh_session_is_signed_out() {
    let temp_dir = TempDir::new().unwrap();
    let session = Session::init(SessionStorage::in_dir(temp_dir.path()));

    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert_eq!(session.role(), Role::User);
    assert_eq!(session.guard(Route::Dashboard), Guard::RedirectToLogin);
    assert_eq!(session.guard(Route::Login), Guard::Allowed);
    assert!(!session.can(Action::EditSupplier));
}

#[tokio::test]
async fn test_login_persists_and_init_restores() {
    let temp_dir = TempDir::new().unwrap();
    let token = mint_token("admin", future_exp());

    let mut session = Session::init(SessionStorage::in_dir(temp_dir.path()));
    session.login(token.clone(), user(Role::Admin)).unwrap();
    assert!(session.is_admin());

    let restored = Session::init(SessionStorage::in_dir(temp_dir.path()));
    assert!(restored.is_authenticated());
    assert_eq!(restored.token(), Some(token.as_str()));
    assert_eq!(restored.role(), Role::Admin);
    assert_eq!(restored.user().map(|u| u.username.as_str()), Some("maya"));
    assert!(!restored.token_expired());
    assert_eq!(restored.guard(Route::Reports), Guard::Allowed);
    assert!(restored.can(Action::FactoryReset));
}

#[tokio::test]
async fn test_role_comes_from_token() {
    let temp_dir = TempDir::new().unwrap();
    let storage = SessionStorage::in_dir(temp_dir.path());
    storage
        .save(&StoredSession {
            token: mint_token("user", future_exp()),
            user: Some(user(Role::Admin)),
        })
        .unwrap();

    let session = Session::init(storage);
    assert_eq!(session.role(), Role::User);
    assert!(!session.can(Action::DeleteProduct));
    assert!(session.can(Action::AddSupplier));
}

#[tokio::test]
async fn test_expired_token_still_gates_by_presence() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::init(SessionStorage::in_dir(temp_dir.path()));
    session
        .login(mint_token("admin", past_exp()), user(Role::Admin))
        .unwrap();

    let restored = Session::init(SessionStorage::in_dir(temp_dir.path()));
    assert!(restored.is_authenticated());
    assert!(restored.token_expired());
    assert_eq!(restored.guard(Route::Products), Guard::Allowed);
}

#[tokio::test]
async fn test_undecodable_token_is_discarded() {
    let temp_dir = TempDir::new().unwrap();
    let storage = SessionStorage::in_dir(temp_dir.path());
    storage
        .save(&StoredSession {
            token: "garbage".into(),
            user: None,
        })
        .unwrap();

    let session = Session::init(storage.clone());
    assert!(!session.is_authenticated());
    assert!(!storage.exists());
}

#[tokio::test]
async fn test_logout_clears_everything() {
    let (addr, _state) = spawn_server().await;
    let temp_dir = TempDir::new().unwrap();
    let mut client = InventoryClient::new(&ClientConfig::new(base_url(addr))).unwrap();
    let mut session = Session::init(SessionStorage::in_dir(temp_dir.path()));

    let response = client.login(EMAIL, PASSWORD).await.unwrap();
    client.set_token(Some(response.token.clone()));
    session.login(response.token, response.user).unwrap();
    session.load_settings(&client).await;
    assert_eq!(
        session.settings().map(|s| s.display_name()),
        Some("Perera Stores")
    );

    session.logout().unwrap();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(session.settings().is_none());
    assert!(!session.storage().exists());
    assert!(Route::navigation(session.role()).iter().all(|r| !r.is_admin_nav()));
}

#[tokio::test]
async fn test_settings_failure_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = InventoryClient::new(&ClientConfig::new(base_url(addr)).with_timeout(2)).unwrap();
    let mut session = Session::init(SessionStorage::in_dir(temp_dir.path()));
    session
        .login(mint_token("user", future_exp()), user(Role::User))
        .unwrap();
    session.load_settings(&client).await;

    assert!(session.is_authenticated());
    assert!(session.settings().is_none());
}
