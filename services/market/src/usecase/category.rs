use siidona_domain::access::Capability;
use siidona_domain::category::slugify;
use siidona_domain::id::CategoryId;
use siidona_session::token::SessionToken;

use crate::domain::repository::{CategoryRepository, SessionStore, UserRepository};
use crate::domain::types::{Category, NewCategory};
use crate::error::MarketServiceError;
use crate::usecase::gate::AuthorizationGate;
use crate::usecase::{non_blank, required};

// ── ListCategories ───────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<C: CategoryRepository> {
    pub categories: C,
}

impl<C: CategoryRepository> ListCategoriesUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Category>, MarketServiceError> {
        self.categories.list().await
    }
}

// ── CreateCategory ───────────────────────────────────────────────────────────

pub struct CreateCategoryInput {
    pub name: String,
    pub description: Option<String>,
}

pub struct CreateCategoryUseCase<S: SessionStore, U: UserRepository, C: CategoryRepository> {
    pub gate: AuthorizationGate<S, U>,
    pub categories: C,
}

impl<S: SessionStore, U: UserRepository, C: CategoryRepository> CreateCategoryUseCase<S, U, C> {
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        input: CreateCategoryInput,
    ) -> Result<Category, MarketServiceError> {
        let admin = self
            .gate
            .authorize(token, Capability::Administrator)
            .await?;
        let name = required(&input.name, "name")?;
        let slug = slugify(&name);
        if self.categories.find_by_slug(&slug).await?.is_some() {
            return Err(MarketServiceError::CategoryAlreadyExists);
        }
        let category = self
            .categories
            .create(&NewCategory {
                name,
                slug,
                description: non_blank(input.description),
            })
            .await?;
        tracing::info!(
            category_id = %category.id,
            slug = %category.slug,
            admin_id = %admin.id,
            "category created"
        );
        Ok(category)
    }
}

// ── DeleteCategory ───────────────────────────────────────────────────────────

/// Removes the category together with every ad filed under it.
pub struct DeleteCategoryUseCase<S: SessionStore, U: UserRepository, C: CategoryRepository> {
    pub gate: AuthorizationGate<S, U>,
    pub categories: C,
}

impl<S: SessionStore, U: UserRepository, C: CategoryRepository> DeleteCategoryUseCase<S, U, C> {
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        category_id: CategoryId,
    ) -> Result<(), MarketServiceError> {
        let admin = self
            .gate
            .authorize(token, Capability::Administrator)
            .await?;
        if !self.categories.delete(category_id).await? {
            return Err(MarketServiceError::CategoryNotFound);
        }
        tracing::info!(%category_id, admin_id = %admin.id, "category deleted");
        Ok(())
    }
}
