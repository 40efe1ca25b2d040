use siidona_domain::access::Capability;
use siidona_domain::ad::AdStatus;
use siidona_domain::id::{AdId, CategoryId};
use siidona_domain::pagination::PageRequest;
use siidona_session::token::SessionToken;

use crate::domain::repository::{AdRepository, CategoryRepository, SessionStore, UserRepository};
use crate::domain::types::{Ad, AdFilter, AdListing, NewAd};
use crate::error::MarketServiceError;
use crate::usecase::gate::AuthorizationGate;
use crate::usecase::{non_blank, required};

// ── CreateAd ─────────────────────────────────────────────────────────────────

pub struct CreateAdInput {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category_id: Option<CategoryId>,
    pub location: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub image_url: Option<String>,
}

/// Submit an ad for moderation. The ad is owned by the signed-in user and
/// always starts out `pending`.
pub struct CreateAdUseCase<S, U, C, A>
where
    S: SessionStore,
    U: UserRepository,
    C: CategoryRepository,
    A: AdRepository,
{
    pub gate: AuthorizationGate<S, U>,
    pub categories: C,
    pub ads: A,
}

impl<S, U, C, A> CreateAdUseCase<S, U, C, A>
where
    S: SessionStore,
    U: UserRepository,
    C: CategoryRepository,
    A: AdRepository,
{
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        input: CreateAdInput,
    ) -> Result<Ad, MarketServiceError> {
        let owner = self
            .gate
            .authorize(token, Capability::Authenticated)
            .await?;

        let title = required(&input.title, "title")?;
        let description = required(&input.description, "description")?;
        let price = required(&input.price, "price")?;
        let category_id = input
            .category_id
            .filter(|id| id.0 != 0)
            .ok_or(MarketServiceError::MissingField("category_id"))?;

        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(MarketServiceError::CategoryNotFound);
        }

        let ad = self
            .ads
            .create(&NewAd {
                title,
                description,
                price,
                location: non_blank(input.location),
                contact_phone: non_blank(input.contact_phone),
                contact_email: non_blank(input.contact_email),
                image_url: non_blank(input.image_url),
                user_id: owner.id,
                category_id,
            })
            .await?;
        tracing::info!(ad_id = %ad.id, user_id = %owner.id, %category_id, "ad submitted");
        Ok(ad)
    }
}

// ── ListPublicAds ────────────────────────────────────────────────────────────

/// Approved ads only, newest first.
pub struct ListPublicAdsUseCase<A: AdRepository> {
    pub ads: A,
}

impl<A: AdRepository> ListPublicAdsUseCase<A> {
    pub async fn execute(
        &self,
        category_id: Option<CategoryId>,
        page: PageRequest,
    ) -> Result<Vec<AdListing>, MarketServiceError> {
        let filter = AdFilter {
            status: Some(AdStatus::Approved),
            category_id,
        };
        self.ads.list_listings(filter, page).await
    }
}

// ── GetPublicAd ──────────────────────────────────────────────────────────────

/// A single ad, visible only once approved. Pending and rejected ads are
/// indistinguishable from missing ones.
pub struct GetPublicAdUseCase<A: AdRepository> {
    pub ads: A,
}

impl<A: AdRepository> GetPublicAdUseCase<A> {
    pub async fn execute(&self, ad_id: AdId) -> Result<AdListing, MarketServiceError> {
        self.ads
            .find_listing(ad_id)
            .await?
            .filter(|listing| listing.ad.status.is_public())
            .ok_or(MarketServiceError::AdNotFound)
    }
}
