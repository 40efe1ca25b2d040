use siidona_domain::user::UserRole;
use siidona_market::domain::types::DEFAULT_CATEGORIES;
use siidona_market::usecase::seed::{SeedInput, SeedReport, SeedUseCase};

use crate::helpers::{MemoryStore, PlainPasswords};

fn seed(store: &MemoryStore) -> SeedUseCase<MemoryStore, MemoryStore, PlainPasswords> {
    SeedUseCase {
        users: store.clone(),
        categories: store.clone(),
        passwords: PlainPasswords,
    }
}

fn admin_input() -> SeedInput {
    SeedInput {
        admin_name: "Admin".into(),
        admin_email: "admin@siidona.example".into(),
        admin_password: "change-me".into(),
    }
}

#[tokio::test]
async fn should_create_admin_and_default_categories_once() {
    let store = MemoryStore::new();

    let first = seed(&store).execute(admin_input()).await.unwrap();
    assert_eq!(
        first,
        SeedReport {
            admin_created: true,
            categories_created: DEFAULT_CATEGORIES.len(),
        }
    );

    let second = seed(&store).execute(admin_input()).await.unwrap();
    assert_eq!(second, SeedReport::default());

    let tables = store.tables.lock().unwrap();
    assert_eq!(tables.users.len(), 1);
    assert_eq!(tables.users[0].role, UserRole::Administrator);
    assert_eq!(tables.categories.len(), 8);
    assert!(tables.categories.iter().any(|c| c.slug == "real-estate"));
}

#[tokio::test]
async fn should_only_fill_in_missing_categories() {
    let store = MemoryStore::new();
    store.seed_category("Electronics");
    store.seed_category("Jobs");

    let report = seed(&store).execute(admin_input()).await.unwrap();
    assert_eq!(report.categories_created, DEFAULT_CATEGORIES.len() - 2);
}
