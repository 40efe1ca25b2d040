use siidona_domain::ad::{AdStatus, ModerationAction};
use siidona_domain::id::AdId;
use siidona_domain::pagination::PageRequest;
use siidona_domain::user::UserRole;
use siidona_market::domain::types::AdFilter;
use siidona_market::error::MarketServiceError;
use siidona_market::usecase::ad::ListPublicAdsUseCase;
use siidona_market::usecase::moderation::{DeleteAdUseCase, ListAllAdsUseCase, ModerateAdUseCase};

use crate::helpers::MemoryStore;

fn moderate(store: &MemoryStore) -> ModerateAdUseCase<MemoryStore, MemoryStore, MemoryStore> {
    ModerateAdUseCase {
        gate: store.gate(),
        ads: store.clone(),
    }
}

// ── ModerateAd ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_approve_pending_ad_and_publish_it() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let seller = store.seed_user("seller", UserRole::User);
    let category = store.seed_category("Vehicles");
    let ad = store.seed_ad(seller.id, category.id, AdStatus::Pending);
    let token = store.sign_in(admin.id);

    moderate(&store)
        .execute(Some(&token), ad.id, ModerationAction::Approve)
        .await
        .unwrap();

    assert_eq!(store.ad(ad.id).unwrap().status, AdStatus::Approved);
    let public = ListPublicAdsUseCase { ads: store.clone() }
        .execute(None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].ad.id, ad.id);
    assert_eq!(public[0].owner_name, "seller");
    assert_eq!(public[0].category_name, "Vehicles");
}

#[tokio::test]
async fn should_forbid_plain_user_and_leave_status_unchanged() {
    let store = MemoryStore::new();
    let seller = store.seed_user("seller", UserRole::User);
    let category = store.seed_category("Vehicles");
    let ad = store.seed_ad(seller.id, category.id, AdStatus::Pending);
    let token = store.sign_in(seller.id);

    let result = moderate(&store)
        .execute(Some(&token), ad.id, ModerationAction::Reject)
        .await;

    assert!(
        matches!(result, Err(MarketServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
    assert_eq!(store.ad(ad.id).unwrap().status, AdStatus::Pending);
}

#[tokio::test]
async fn should_require_session_to_moderate() {
    let store = MemoryStore::new();
    let seller = store.seed_user("seller", UserRole::User);
    let category = store.seed_category("Vehicles");
    let ad = store.seed_ad(seller.id, category.id, AdStatus::Pending);

    let result = moderate(&store)
        .execute(None, ad.id, ModerationAction::Approve)
        .await;
    assert!(matches!(result, Err(MarketServiceError::Unauthorized)));
    assert_eq!(store.ad(ad.id).unwrap().status, AdStatus::Pending);
}

#[tokio::test]
async fn should_allow_any_transition_with_last_write_winning() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let seller = store.seed_user("seller", UserRole::User);
    let category = store.seed_category("Vehicles");
    let ad = store.seed_ad(seller.id, category.id, AdStatus::Approved);
    let token = store.sign_in(admin.id);
    let usecase = moderate(&store);

    usecase
        .execute(Some(&token), ad.id, ModerationAction::Reject)
        .await
        .unwrap();
    assert_eq!(store.ad(ad.id).unwrap().status, AdStatus::Rejected);

    usecase
        .execute(Some(&token), ad.id, ModerationAction::Approve)
        .await
        .unwrap();
    assert_eq!(store.ad(ad.id).unwrap().status, AdStatus::Approved);
}

#[tokio::test]
async fn should_bump_updated_at_on_moderation() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let seller = store.seed_user("seller", UserRole::User);
    let category = store.seed_category("Vehicles");
    let ad = store.seed_ad(seller.id, category.id, AdStatus::Pending);
    let token = store.sign_in(admin.id);

    moderate(&store)
        .execute(Some(&token), ad.id, ModerationAction::Approve)
        .await
        .unwrap();
    assert!(store.ad(ad.id).unwrap().updated_at >= ad.updated_at);
}

#[tokio::test]
async fn should_report_missing_ad() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let token = store.sign_in(admin.id);

    let result = moderate(&store)
        .execute(Some(&token), AdId(404), ModerationAction::Approve)
        .await;
    assert!(matches!(result, Err(MarketServiceError::AdNotFound)));
}

// ── DeleteAd ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_ad_in_any_state() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let seller = store.seed_user("seller", UserRole::User);
    let category = store.seed_category("Vehicles");
    let ad = store.seed_ad(seller.id, category.id, AdStatus::Rejected);
    let token = store.sign_in(admin.id);
    let usecase = DeleteAdUseCase {
        gate: store.gate(),
        ads: store.clone(),
    };

    usecase.execute(Some(&token), ad.id).await.unwrap();
    assert!(store.ad(ad.id).is_none());

    let again = usecase.execute(Some(&token), ad.id).await;
    assert!(matches!(again, Err(MarketServiceError::AdNotFound)));
}

#[tokio::test]
async fn should_forbid_plain_user_from_deleting_ads() {
    let store = MemoryStore::new();
    let seller = store.seed_user("seller", UserRole::User);
    let category = store.seed_category("Vehicles");
    let ad = store.seed_ad(seller.id, category.id, AdStatus::Pending);
    let token = store.sign_in(seller.id);

    let result = DeleteAdUseCase {
        gate: store.gate(),
        ads: store.clone(),
    }
    .execute(Some(&token), ad.id)
    .await;
    assert!(matches!(result, Err(MarketServiceError::Forbidden)));
    assert!(store.ad(ad.id).is_some());
}

// ── ListAllAds ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_every_status_for_admin_newest_first() {
    let store = MemoryStore::new();
    let admin = store.seed_user("admin", UserRole::Administrator);
    let seller = store.seed_user("seller", UserRole::User);
    let category = store.seed_category("Vehicles");
    let first = store.seed_ad(seller.id, category.id, AdStatus::Pending);
    let second = store.seed_ad(seller.id, category.id, AdStatus::Rejected);
    let third = store.seed_ad(seller.id, category.id, AdStatus::Approved);
    let token = store.sign_in(admin.id);
    let usecase = ListAllAdsUseCase {
        gate: store.gate(),
        ads: store.clone(),
    };

    let all = usecase
        .execute(Some(&token), AdFilter::default(), PageRequest::default())
        .await
        .unwrap();
    let ids: Vec<AdId> = all.iter().map(|l| l.ad.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    let pending = usecase
        .execute(
            Some(&token),
            AdFilter {
                status: Some(AdStatus::Pending),
                category_id: None,
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].ad.id, first.id);
}
