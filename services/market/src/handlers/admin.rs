use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use siidona_domain::ad::{AdStatus, ModerationAction};
use siidona_domain::id::{AdId, CategoryId, UserId};
use siidona_domain::money::MinorUnits;
use siidona_domain::pagination::PageRequest;
use siidona_session::extract::SessionCookie;

use crate::domain::types::AdFilter;
use crate::error::MarketServiceError;
use crate::handlers::response::{AdResponse, CategoryResponse, UserResponse};
use crate::state::AppState;
use crate::usecase::category::{CreateCategoryInput, CreateCategoryUseCase, DeleteCategoryUseCase};
use crate::usecase::moderation::{DeleteAdUseCase, ListAllAdsUseCase, ModerateAdUseCase};
use crate::usecase::user_admin::{DeleteUserUseCase, ListUsersUseCase};
use crate::usecase::wallet::AddFundsUseCase;

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct AdminAdListQuery {
    pub status: Option<AdStatus>,
    pub category_id: Option<CategoryId>,
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Deserialize, Default)]
pub struct UserListQuery {
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

// ── GET /admin/ads ───────────────────────────────────────────────────────────

pub async fn list_all_ads(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<AdminAdListQuery>, MarketServiceError>,
) -> Result<Json<Vec<AdResponse>>, MarketServiceError> {
    let filter = AdFilter {
        status: query.status,
        category_id: query.category_id,
    };
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };
    let usecase = ListAllAdsUseCase {
        gate: state.gate(),
        ads: state.ad_repo(),
    };
    let listings = usecase.execute(session.token(), filter, page).await?;
    Ok(Json(listings.into_iter().map(AdResponse::from).collect()))
}

// ── POST /admin/ads/{id}/approve, POST /admin/ads/{id}/reject ───────────────

async fn moderate(
    session: SessionCookie,
    state: AppState,
    ad_id: AdId,
    action: ModerationAction,
) -> Result<StatusCode, MarketServiceError> {
    let usecase = ModerateAdUseCase {
        gate: state.gate(),
        ads: state.ad_repo(),
    };
    usecase.execute(session.token(), ad_id, action).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn approve_ad(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Path(ad_id), _): WithRejection<Path<AdId>, MarketServiceError>,
) -> Result<StatusCode, MarketServiceError> {
    moderate(session, state, ad_id, ModerationAction::Approve).await
}

pub async fn reject_ad(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Path(ad_id), _): WithRejection<Path<AdId>, MarketServiceError>,
) -> Result<StatusCode, MarketServiceError> {
    moderate(session, state, ad_id, ModerationAction::Reject).await
}

// ── DELETE /admin/ads/{id} ───────────────────────────────────────────────────

pub async fn delete_ad(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Path(ad_id), _): WithRejection<Path<AdId>, MarketServiceError>,
) -> Result<StatusCode, MarketServiceError> {
    let usecase = DeleteAdUseCase {
        gate: state.gate(),
        ads: state.ad_repo(),
    };
    usecase.execute(session.token(), ad_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /admin/users ─────────────────────────────────────────────────────────

pub async fn list_users(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<UserListQuery>, MarketServiceError>,
) -> Result<Json<Vec<UserResponse>>, MarketServiceError> {
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };
    let usecase = ListUsersUseCase {
        gate: state.gate(),
        users: state.user_repo(),
    };
    let users = usecase.execute(session.token(), page).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── DELETE /admin/users/{id} ─────────────────────────────────────────────────

pub async fn delete_user(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<UserId>, MarketServiceError>,
) -> Result<StatusCode, MarketServiceError> {
    let usecase = DeleteUserUseCase {
        gate: state.gate(),
        users: state.user_repo(),
    };
    usecase.execute(session.token(), user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /admin/users/{id}/wallet ────────────────────────────────────────────

/// Major units, sent either as a JSON number (`25.50`) or a decimal string
/// (`"25.50"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DepositAmount {
    Text(String),
    Number(serde_json::Number),
}

impl DepositAmount {
    /// Decimal text handed to the wallet parser. Numbers render in their
    /// shortest form, so `25.50` arrives as `"25.5"`.
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct AddFundsRequest {
    #[serde(default)]
    pub amount: Option<DepositAmount>,
}

#[derive(Serialize)]
pub struct WalletResponse {
    pub user_id: UserId,
    #[serde(serialize_with = "siidona_core::serde::to_major_units")]
    pub balance: MinorUnits,
}

pub async fn add_funds(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<UserId>, MarketServiceError>,
    WithRejection(Json(body), _): WithRejection<Json<AddFundsRequest>, MarketServiceError>,
) -> Result<Json<WalletResponse>, MarketServiceError> {
    let usecase = AddFundsUseCase {
        gate: state.gate(),
        users: state.user_repo(),
    };
    let amount = body
        .amount
        .map(DepositAmount::into_text)
        .unwrap_or_default();
    let balance = usecase
        .execute(session.token(), user_id, &amount)
        .await?;
    Ok(Json(WalletResponse { user_id, balance }))
}

// ── POST /admin/categories ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

pub async fn create_category(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateCategoryRequest>, MarketServiceError>,
) -> Result<(StatusCode, Json<CategoryResponse>), MarketServiceError> {
    let usecase = CreateCategoryUseCase {
        gate: state.gate(),
        categories: state.category_repo(),
    };
    let category = usecase
        .execute(
            session.token(),
            CreateCategoryInput {
                name: body.name,
                description: body.description,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

// ── DELETE /admin/categories/{id} ────────────────────────────────────────────

pub async fn delete_category(
    session: SessionCookie,
    State(state): State<AppState>,
    WithRejection(Path(category_id), _): WithRejection<Path<CategoryId>, MarketServiceError>,
) -> Result<StatusCode, MarketServiceError> {
    let usecase = DeleteCategoryUseCase {
        gate: state.gate(),
        categories: state.category_repo(),
    };
    usecase.execute(session.token(), category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
