use siidona_domain::ad::AdStatus;
use siidona_domain::id::CategoryId;
use siidona_domain::pagination::PageRequest;
use siidona_domain::user::UserRole;
use siidona_market::error::MarketServiceError;
use siidona_market::usecase::category::{
    CreateCategoryInput, CreateCategoryUseCase, DeleteCategoryUseCase, ListCategoriesUseCase,
};
use siidona_market::usecase::user_admin::{DeleteUserUseCase, ListUsersUseCase};

use crate::helpers::MemoryStore;

fn create_category(
    store: &MemoryStore,
) -> CreateCategoryUseCase<MemoryStore, MemoryStore, MemoryStore> {
    CreateCategoryUseCase {
        gate: store.gate(),
        categories: store.clone(),
    }
}

// ── Categories ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_category_with_slug() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let token = store.sign_in(admin.id);

    let category = create_category(&store)
        .execute(
            Some(&token),
            CreateCategoryInput {
                name: " Real Estate ".into(),
                description: Some("".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(category.name, "Real Estate");
    assert_eq!(category.slug, "real-estate");
    assert_eq!(category.description, None);
}

#[tokio::test]
async fn should_reject_category_with_taken_slug() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let token = store.sign_in(admin.id);
    store.seed_category("Real Estate");

    let result = create_category(&store)
        .execute(
            Some(&token),
            CreateCategoryInput {
                name: "real   estate".into(),
                description: None,
            },
        )
        .await;
    assert!(matches!(result, Err(MarketServiceError::CategoryAlreadyExists)));
}

#[tokio::test]
async fn should_require_admin_and_name_for_new_category() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let alice = store.seed_user("alice", UserRole::User);
    let admin_token = store.sign_in(admin.id);
    let user_token = store.sign_in(alice.id);
    let usecase = create_category(&store);

    let result = usecase
        .execute(
            Some(&user_token),
            CreateCategoryInput {
                name: "Boats".into(),
                description: None,
            },
        )
        .await;
    assert!(matches!(result, Err(MarketServiceError::Forbidden)));

    let result = usecase
        .execute(
            Some(&admin_token),
            CreateCategoryInput {
                name: "  ".into(),
                description: None,
            },
        )
        .await;
    assert!(matches!(result, Err(MarketServiceError::MissingField("name"))));
}

#[tokio::test]
async fn should_list_categories_by_name() {
    let store = MemoryStore::new();
    store.seed_category("Vehicles");
    store.seed_category("Electronics");

    let names: Vec<String> = ListCategoriesUseCase {
        categories: store.clone(),
    }
    .execute()
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.name)
    .collect();
    assert_eq!(names, vec!["Electronics", "Vehicles"]);
}

#[tokio::test]
async fn should_cascade_category_deletion_to_its_ads() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let seller = store.seed_user("seller", UserRole::User);
    let vehicles = store.seed_category("Vehicles");
    let furniture = store.seed_category("Furniture");
    let car = store.seed_ad(seller.id, vehicles.id, AdStatus::Approved);
    let sofa = store.seed_ad(seller.id, furniture.id, AdStatus::Approved);
    let token = store.sign_in(admin.id);
    let usecase = DeleteCategoryUseCase {
        gate: store.gate(),
        categories: store.clone(),
    };

    usecase.execute(Some(&token), vehicles.id).await.unwrap();
    assert!(store.ad(car.id).is_none());
    assert!(store.ad(sofa.id).is_some());

    let result = usecase.execute(Some(&token), CategoryId(404)).await;
    assert!(matches!(result, Err(MarketServiceError::CategoryNotFound)));
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_cascade_user_deletion_to_their_ads() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let alice = store.seed_user("alice", UserRole::User);
    let bob = store.seed_user("bob", UserRole::User);
    let category = store.seed_category("Vehicles");
    let alices = store.seed_ad(alice.id, category.id, AdStatus::Approved);
    let bobs = store.seed_ad(bob.id, category.id, AdStatus::Pending);
    let token = store.sign_in(admin.id);
    let usecase = DeleteUserUseCase {
        gate: store.gate(),
        users: store.clone(),
    };

    usecase.execute(Some(&token), alice.id).await.unwrap();
    assert!(store.user(alice.id).is_none());
    assert!(store.ad(alices.id).is_none());
    assert!(store.ad(bobs.id).is_some());

    let again = usecase.execute(Some(&token), alice.id).await;
    assert!(matches!(again, Err(MarketServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_list_users_for_admin_only() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let alice = store.seed_user("alice", UserRole::User);
    let usecase = ListUsersUseCase {
        gate: store.gate(),
        users: store.clone(),
    };

    let admin_token = store.sign_in(admin.id);
    let users = usecase
        .execute(Some(&admin_token), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, alice.id);

    let user_token = store.sign_in(alice.id);
    let result = usecase
        .execute(Some(&user_token), PageRequest::default())
        .await;
    assert!(matches!(result, Err(MarketServiceError::Forbidden)));
}
