use siidona_domain::money::MinorUnits;
use siidona_domain::user::UserRole;
use siidona_market::error::MarketServiceError;
use siidona_market::usecase::account::{
    CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};

use crate::helpers::{MemoryStore, PlainPasswords};

fn register(store: &MemoryStore) -> RegisterUseCase<MemoryStore, MemoryStore, PlainPasswords> {
    RegisterUseCase {
        users: store.clone(),
        sessions: store.clone(),
        passwords: PlainPasswords,
    }
}

fn login(store: &MemoryStore) -> LoginUseCase<MemoryStore, MemoryStore, PlainPasswords> {
    LoginUseCase {
        users: store.clone(),
        sessions: store.clone(),
        passwords: PlainPasswords,
    }
}

fn input(name: &str, email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        name: name.into(),
        email: email.into(),
        password: password.into(),
    }
}

// ── Register ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_plain_user_with_live_session() {
    let store = MemoryStore::new();

    let out = register(&store)
        .execute(input("Bob", "bob@example.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(out.user.role, UserRole::User);
    assert_eq!(out.user.balance, MinorUnits::ZERO);
    assert_ne!(out.user.password_hash, "secret1");
    let current = CurrentUserUseCase { gate: store.gate() }
        .execute(Some(&out.token))
        .await
        .unwrap();
    assert_eq!(current.id, out.user.id);
}

#[tokio::test]
async fn should_reject_short_password() {
    let store = MemoryStore::new();
    let result = register(&store)
        .execute(input("Bob", "bob@example.com", "12345"))
        .await;
    assert!(matches!(result, Err(MarketServiceError::PasswordTooShort)));
}

#[tokio::test]
async fn should_require_every_field() {
    let store = MemoryStore::new();
    let usecase = register(&store);

    let result = usecase.execute(input(" ", "bob@example.com", "secret1")).await;
    assert!(matches!(result, Err(MarketServiceError::MissingField("name"))));
    let result = usecase.execute(input("Bob", "", "secret1")).await;
    assert!(matches!(result, Err(MarketServiceError::MissingField("email"))));
    let result = usecase.execute(input("Bob", "bob@example.com", "")).await;
    assert!(matches!(
        result,
        Err(MarketServiceError::MissingField("password"))
    ));
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let store = MemoryStore::new();
    let usecase = register(&store);
    usecase
        .execute(input("Bob", "bob@example.com", "secret1"))
        .await
        .unwrap();

    let result = usecase
        .execute(input("Robert", "bob@example.com", "secret2"))
        .await;
    assert!(matches!(result, Err(MarketServiceError::EmailAlreadyExists)));
}

// ── Login / Logout ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_sign_in_with_correct_password() {
    let store = MemoryStore::new();
    let alice = store.seed_user("alice", UserRole::User);

    let out = login(&store)
        .execute(LoginInput {
            email: alice.email.clone(),
            password: "alice-password".into(),
        })
        .await
        .unwrap();
    assert_eq!(out.user.id, alice.id);
}

#[tokio::test]
async fn should_not_distinguish_unknown_email_from_wrong_password() {
    let store = MemoryStore::new();
    let alice = store.seed_user("alice", UserRole::User);
    let usecase = login(&store);

    let wrong_password = usecase
        .execute(LoginInput {
            email: alice.email.clone(),
            password: "guess".into(),
        })
        .await;
    let unknown_email = usecase
        .execute(LoginInput {
            email: "nobody@example.com".into(),
            password: "alice-password".into(),
        })
        .await;
    assert!(matches!(
        wrong_password,
        Err(MarketServiceError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_email,
        Err(MarketServiceError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn should_forget_session_on_logout() {
    let store = MemoryStore::new();
    let alice = store.seed_user("alice", UserRole::User);
    let token = store.sign_in(alice.id);

    LogoutUseCase {
        sessions: store.clone(),
    }
    .execute(Some(&token))
    .await
    .unwrap();

    let result = CurrentUserUseCase { gate: store.gate() }
        .execute(Some(&token))
        .await;
    assert!(matches!(result, Err(MarketServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_allow_logout_without_session() {
    let store = MemoryStore::new();
    LogoutUseCase {
        sessions: store.clone(),
    }
    .execute(None)
    .await
    .unwrap();
}
