use axum::{Json, extract::State};

use crate::error::MarketServiceError;
use crate::handlers::response::CategoryResponse;
use crate::state::AppState;
use crate::usecase::category::ListCategoriesUseCase;

// ── GET /categories ──────────────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, MarketServiceError> {
    let usecase = ListCategoriesUseCase {
        categories: state.category_repo(),
    };
    let categories = usecase.execute().await?;
    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}
