use siidona_domain::id::UserId;
use siidona_domain::money::MinorUnits;
use siidona_domain::user::UserRole;
use siidona_market::error::MarketServiceError;
use siidona_market::usecase::wallet::AddFundsUseCase;

use crate::helpers::MemoryStore;

fn add_funds(store: &MemoryStore) -> AddFundsUseCase<MemoryStore, MemoryStore, MemoryStore> {
    AddFundsUseCase {
        gate: store.gate(),
        users: store.clone(),
    }
}

#[tokio::test]
async fn should_credit_exactly_1000_minor_units_for_ten() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let alice = store.seed_user("alice", UserRole::User);
    let token = store.sign_in(admin.id);

    let balance = add_funds(&store)
        .execute(Some(&token), alice.id, "10.00")
        .await
        .unwrap();
    assert_eq!(balance, MinorUnits(1000));
    assert_eq!(store.user(alice.id).unwrap().balance, MinorUnits(1000));
}

#[tokio::test]
async fn should_accumulate_repeated_credits() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let alice = store.seed_user("alice", UserRole::User);
    let token = store.sign_in(admin.id);
    let usecase = add_funds(&store);

    usecase.execute(Some(&token), alice.id, "10.00").await.unwrap();
    let balance = usecase.execute(Some(&token), alice.id, "10.00").await.unwrap();
    assert_eq!(balance, MinorUnits(2000));
}

#[tokio::test]
async fn should_credit_fractional_amount_to_zero_balance() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let alice = store.seed_user("alice", UserRole::User);
    let token = store.sign_in(admin.id);

    let balance = add_funds(&store)
        .execute(Some(&token), alice.id, "25.50")
        .await
        .unwrap();
    assert_eq!(balance, MinorUnits(2550));
}

#[tokio::test]
async fn should_forbid_plain_user_from_crediting_wallets() {
    let store = MemoryStore::new();
    let alice = store.seed_user("alice", UserRole::User);
    let token = store.sign_in(alice.id);

    let result = add_funds(&store)
        .execute(Some(&token), alice.id, "1000")
        .await;
    assert!(matches!(result, Err(MarketServiceError::Forbidden)));
    assert_eq!(store.user(alice.id).unwrap().balance, MinorUnits::ZERO);
}

#[tokio::test]
async fn should_reject_negative_or_malformed_amounts() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let alice = store.seed_user("alice", UserRole::User);
    let token = store.sign_in(admin.id);
    let usecase = add_funds(&store);

    for amount in ["-5", "ten", "", "1e999"] {
        let result = usecase.execute(Some(&token), alice.id, amount).await;
        assert!(
            matches!(result, Err(MarketServiceError::InvalidAmount)),
            "amount {amount:?} should be rejected, got {result:?}"
        );
    }
    assert_eq!(store.user(alice.id).unwrap().balance, MinorUnits::ZERO);
}

#[tokio::test]
async fn should_report_unknown_user() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let token = store.sign_in(admin.id);

    let result = add_funds(&store)
        .execute(Some(&token), UserId(404), "5")
        .await;
    assert!(matches!(result, Err(MarketServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_reject_credit_that_would_overflow_balance() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let alice = store.seed_user("alice", UserRole::User);
    let token = store.sign_in(admin.id);
    let near_max = MinorUnits(i64::MAX - 500);
    store.set_balance(alice.id, near_max);

    let result = add_funds(&store)
        .execute(Some(&token), alice.id, "10.00")
        .await;
    assert!(matches!(result, Err(MarketServiceError::InvalidAmount)));
    assert_eq!(store.user(alice.id).unwrap().balance, near_max);
}
