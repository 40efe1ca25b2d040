use siidona_domain::access::Capability;
use siidona_domain::ad::ModerationAction;
use siidona_domain::id::AdId;
use siidona_domain::pagination::PageRequest;
use siidona_session::token::SessionToken;

use crate::domain::repository::{AdRepository, SessionStore, UserRepository};
use crate::domain::types::{AdFilter, AdListing};
use crate::error::MarketServiceError;
use crate::usecase::gate::AuthorizationGate;

// ── ModerateAd ───────────────────────────────────────────────────────────────

/// Approve or reject an ad. Applies from any current status; the last
/// verdict wins.
pub struct ModerateAdUseCase<S: SessionStore, U: UserRepository, A: AdRepository> {
    pub gate: AuthorizationGate<S, U>,
    pub ads: A,
}

impl<S: SessionStore, U: UserRepository, A: AdRepository> ModerateAdUseCase<S, U, A> {
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        ad_id: AdId,
        action: ModerationAction,
    ) -> Result<(), MarketServiceError> {
        let admin = self
            .gate
            .authorize(token, Capability::Administrator)
            .await?;
        let status = action.target();
        if !self.ads.set_status(ad_id, status).await? {
            return Err(MarketServiceError::AdNotFound);
        }
        tracing::info!(%ad_id, %status, admin_id = %admin.id, "ad moderated");
        Ok(())
    }
}

// ── DeleteAd ─────────────────────────────────────────────────────────────────

pub struct DeleteAdUseCase<S: SessionStore, U: UserRepository, A: AdRepository> {
    pub gate: AuthorizationGate<S, U>,
    pub ads: A,
}

impl<S: SessionStore, U: UserRepository, A: AdRepository> DeleteAdUseCase<S, U, A> {
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        ad_id: AdId,
    ) -> Result<(), MarketServiceError> {
        let admin = self
            .gate
            .authorize(token, Capability::Administrator)
            .await?;
        if !self.ads.delete(ad_id).await? {
            return Err(MarketServiceError::AdNotFound);
        }
        tracing::info!(%ad_id, admin_id = %admin.id, "ad deleted");
        Ok(())
    }
}

// ── ListAllAds ───────────────────────────────────────────────────────────────

/// Every ad regardless of status, for the moderation queue.
pub struct ListAllAdsUseCase<S: SessionStore, U: UserRepository, A: AdRepository> {
    pub gate: AuthorizationGate<S, U>,
    pub ads: A,
}

impl<S: SessionStore, U: UserRepository, A: AdRepository> ListAllAdsUseCase<S, U, A> {
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        filter: AdFilter,
        page: PageRequest,
    ) -> Result<Vec<AdListing>, MarketServiceError> {
        self.gate
            .authorize(token, Capability::Administrator)
            .await?;
        self.ads.list_listings(filter, page).await
    }
}
