use siidona_domain::category::slugify;
use siidona_domain::user::{MIN_PASSWORD_LEN, UserRole};

use crate::domain::repository::{CategoryRepository, PasswordPort, UserRepository};
use crate::domain::types::{DEFAULT_CATEGORIES, NewCategory, NewUser};
use crate::error::MarketServiceError;
use crate::usecase::required;

pub struct SeedInput {
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
}

/// What a seed run actually inserted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub categories_created: usize,
}

/// Idempotent bootstrap: the administrator account plus the default
/// categories. Existing rows are left untouched.
pub struct SeedUseCase<U: UserRepository, C: CategoryRepository, P: PasswordPort> {
    pub users: U,
    pub categories: C,
    pub passwords: P,
}

impl<U: UserRepository, C: CategoryRepository, P: PasswordPort> SeedUseCase<U, C, P> {
    pub async fn execute(&self, input: SeedInput) -> Result<SeedReport, MarketServiceError> {
        let mut report = SeedReport::default();

        let email = required(&input.admin_email, "admin_email")?;
        if self.users.find_by_email(&email).await?.is_none() {
            if input.admin_password.chars().count() < MIN_PASSWORD_LEN {
                return Err(MarketServiceError::PasswordTooShort);
            }
            let password_hash = self.passwords.hash(&input.admin_password).await?;
            let admin = self
                .users
                .create(&NewUser {
                    name: required(&input.admin_name, "admin_name")?,
                    email,
                    password_hash,
                    role: UserRole::Administrator,
                })
                .await?;
            tracing::info!(user_id = %admin.id, "administrator created");
            report.admin_created = true;
        }

        for default in DEFAULT_CATEGORIES {
            let slug = slugify(default.name);
            if self.categories.find_by_slug(&slug).await?.is_some() {
                continue;
            }
            let category = self
                .categories
                .create(&NewCategory {
                    name: default.name.to_owned(),
                    slug,
                    description: Some(default.description.to_owned()),
                })
                .await?;
            tracing::info!(category_id = %category.id, slug = %category.slug, "category seeded");
            report.categories_created += 1;
        }

        Ok(report)
    }
}
