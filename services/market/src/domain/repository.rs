#![allow(async_fn_in_trait)]

use siidona_domain::ad::AdStatus;
use siidona_domain::id::{AdId, CategoryId, UserId};
use siidona_domain::money::MinorUnits;
use siidona_domain::pagination::PageRequest;
use siidona_session::token::SessionToken;

use crate::domain::types::{Ad, AdFilter, AdListing, Category, NewAd, NewCategory, NewUser, User};
use crate::error::MarketServiceError;

/// Repository for marketplace accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, MarketServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MarketServiceError>;

    /// Insert an account. A taken email yields `EmailAlreadyExists`.
    async fn create(&self, user: &NewUser) -> Result<User, MarketServiceError>;

    /// Newest first.
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, MarketServiceError>;

    /// Delete an account and, through the foreign key, its ads.
    /// Returns `true` if deleted, `false` if not found.
    async fn delete(&self, id: UserId) -> Result<bool, MarketServiceError>;

    /// Atomically add `amount` to the balance and return the new balance,
    /// or `None` if the user does not exist.
    async fn add_balance(
        &self,
        id: UserId,
        amount: MinorUnits,
    ) -> Result<Option<MinorUnits>, MarketServiceError>;
}

/// Repository for ad categories.
pub trait CategoryRepository: Send + Sync {
    /// Ordered by name.
    async fn list(&self) -> Result<Vec<Category>, MarketServiceError>;

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, MarketServiceError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, MarketServiceError>;

    /// Insert a category. A taken name or slug yields `CategoryAlreadyExists`.
    async fn create(&self, category: &NewCategory) -> Result<Category, MarketServiceError>;

    /// Delete a category and, through the foreign key, its ads.
    async fn delete(&self, id: CategoryId) -> Result<bool, MarketServiceError>;
}

/// Repository for classified ads.
pub trait AdRepository: Send + Sync {
    /// Insert an ad in the `pending` state.
    async fn create(&self, ad: &NewAd) -> Result<Ad, MarketServiceError>;

    async fn find_listing(&self, id: AdId) -> Result<Option<AdListing>, MarketServiceError>;

    /// Newest first.
    async fn list_listings(
        &self,
        filter: AdFilter,
        page: PageRequest,
    ) -> Result<Vec<AdListing>, MarketServiceError>;

    /// Single-row status update that also bumps `updated_at`.
    /// Returns `false` if no ad matched.
    async fn set_status(&self, id: AdId, status: AdStatus) -> Result<bool, MarketServiceError>;

    async fn delete(&self, id: AdId) -> Result<bool, MarketServiceError>;
}

/// Token store mapping session tokens to user ids (Redis, 7-day TTL).
pub trait SessionStore: Send + Sync {
    async fn create(&self, token: &SessionToken, user_id: UserId)
    -> Result<(), MarketServiceError>;

    async fn find(&self, token: &SessionToken) -> Result<Option<UserId>, MarketServiceError>;

    /// Idempotent.
    async fn remove(&self, token: &SessionToken) -> Result<(), MarketServiceError>;
}

/// Port for one-way password hashing.
pub trait PasswordPort: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, MarketServiceError>;

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, MarketServiceError>;
}
