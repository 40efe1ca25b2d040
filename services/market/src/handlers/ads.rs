use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use siidona_domain::id::{AdId, CategoryId};
use siidona_domain::pagination::PageRequest;
use siidona_session::extract::SessionCookie;

use crate::error::MarketServiceError;
use crate::handlers::response::AdResponse;
use crate::state::AppState;
use crate::usecase::ad::{CreateAdInput, CreateAdUseCase, GetPublicAdUseCase, ListPublicAdsUseCase};

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct AdListQuery {
    pub category_id: Option<CategoryId>,
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

// ── GET /ads ─────────────────────────────────────────────────────────────────

pub async fn list_ads(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<AdListQuery>, MarketServiceError>,
) -> Result<Json<Vec<AdResponse>>, MarketServiceError> {
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };
    let usecase = ListPublicAdsUseCase {
        ads: state.ad_repo(),
    };
    let listings = usecase.execute(query.category_id, page).await?;
    Ok(Json(listings.into_iter().map(AdResponse::from).collect()))
}

// ── GET /ads/{id} ────────────────────────────────────────────────────────────

pub async fn get_ad(
    State(state): State<AppState>,
    WithRejection(Path(ad_id), _): WithRejection<Path<AdId>, MarketServiceError>,
) -> Result<Json<AdResponse>, MarketServiceError> {
    let usecase = GetPublicAdUseCase {
        ads: state.ad_repo(),
    };
    let listing = usecase.execute(ad_id).await?;
    Ok(Json(AdResponse::from(listing)))
}

// ── POST /ads ────────────────────────────────────────────────────────────────

/// Unknown fields (including any `status`) are ignored.
#[derive(Deserialize)]
pub struct CreateAdRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    pub category_id: Option<CategoryId>,
    pub location: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub image_url: Option<String>,
}

pub async fn create_ad(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateAdRequest>, MarketServiceError>,
) -> Result<(StatusCode, Json<AdResponse>), MarketServiceError> {
    let usecase = CreateAdUseCase {
        gate: state.gate(),
        categories: state.category_repo(),
        ads: state.ad_repo(),
    };
    let ad = usecase
        .execute(
            session.token(),
            CreateAdInput {
                title: body.title,
                description: body.description,
                price: body.price,
                category_id: body.category_id,
                location: body.location,
                contact_phone: body.contact_phone,
                contact_email: body.contact_email,
                image_url: body.image_url,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(AdResponse::from(ad))))
}
