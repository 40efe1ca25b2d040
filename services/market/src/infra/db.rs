use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, QueryOrder, SqlErr, Statement, UpdateMany,
    sea_query::Expr,
};

use siidona_core::sea_ext::PageWindow;
use siidona_domain::ad::AdStatus;
use siidona_domain::id::{AdId, CategoryId, UserId};
use siidona_domain::money::MinorUnits;
use siidona_domain::pagination::PageRequest;
use siidona_domain::user::UserRole;
use siidona_market_schema::{ads, categories, users};

use crate::domain::repository::{AdRepository, CategoryRepository, UserRepository};
use crate::domain::types::{Ad, AdFilter, AdListing, Category, NewAd, NewCategory, NewUser, User};
use crate::error::MarketServiceError;

/// Classify a write failure: constraint violations become `on_conflict`,
/// anything else is internal.
fn write_error(err: DbErr, on_conflict: MarketServiceError, what: &'static str) -> MarketServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => on_conflict,
        _ => anyhow::Error::new(err).context(what).into(),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, MarketServiceError> {
        let model = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MarketServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &NewUser) -> Result<User, MarketServiceError> {
        let model = users::ActiveModel {
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_owned()),
            balance: Set(0),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, MarketServiceError::EmailAlreadyExists, "create user"))?;
        user_from_model(model)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, MarketServiceError> {
        let models = users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .order_by_desc(users::Column::Id)
            .window(page)
            .all(&self.db)
            .await
            .context("list users")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn delete(&self, id: UserId) -> Result<bool, MarketServiceError> {
        let result = users::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }

    async fn add_balance(
        &self,
        id: UserId,
        amount: MinorUnits,
    ) -> Result<Option<MinorUnits>, MarketServiceError> {
        let updated = balance_increment(id, amount)
            .exec_with_returning(&self.db)
            .await
            .context("add to user balance")?;
        if let Some(model) = updated.into_iter().next() {
            return Ok(Some(MinorUnits(model.balance)));
        }
        // No row matched: either the user is gone or the guard refused the
        // overflow.
        if self.find_by_id(id).await?.is_some() {
            return Err(MarketServiceError::InvalidAmount);
        }
        Ok(None)
    }
}

/// `UPDATE users SET balance = balance + $amount WHERE id = $id` guarded so
/// the sum stays within `i64`. The increment happens in one statement, so
/// concurrent credits never overwrite each other.
fn balance_increment(id: UserId, amount: MinorUnits) -> UpdateMany<users::Entity> {
    let delta = amount.get();
    let headroom = if delta >= 0 {
        Expr::col(users::Column::Balance).lte(i64::MAX - delta)
    } else {
        Expr::col(users::Column::Balance).gte(i64::MIN - delta)
    };
    users::Entity::update_many()
        .col_expr(
            users::Column::Balance,
            Expr::col(users::Column::Balance).add(delta),
        )
        .filter(users::Column::Id.eq(id.0))
        .filter(headroom)
}

fn user_from_model(model: users::Model) -> Result<User, MarketServiceError> {
    let role = UserRole::from_db(&model.role)
        .with_context(|| format!("unknown role {:?} for user {}", model.role, model.id))?;
    Ok(User {
        id: UserId(model.id),
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role,
        balance: MinorUnits(model.balance),
        created_at: model.created_at,
    })
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, MarketServiceError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models.into_iter().map(category_from_model).collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, MarketServiceError> {
        let model = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find category by id")?;
        Ok(model.map(category_from_model))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, MarketServiceError> {
        let model = categories::Entity::find()
            .filter(categories::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .context("find category by slug")?;
        Ok(model.map(category_from_model))
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, MarketServiceError> {
        let model = categories::ActiveModel {
            name: Set(category.name.clone()),
            slug: Set(category.slug.clone()),
            description: Set(category.description.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            write_error(e, MarketServiceError::CategoryAlreadyExists, "create category")
        })?;
        Ok(category_from_model(model))
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, MarketServiceError> {
        let result = categories::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete category")?;
        Ok(result.rows_affected > 0)
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: CategoryId(model.id),
        name: model.name,
        slug: model.slug,
        description: model.description,
        created_at: model.created_at,
    }
}

// ── Ad repository ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdRepository {
    pub db: DatabaseConnection,
}

const LISTING_SELECT: &str = r#"
    SELECT a.id, a.title, a.description, a.price, a.location, a.contact_phone,
           a.contact_email, a.image_url, a.status, a.user_id, a.category_id,
           a.created_at, a.updated_at,
           u.name AS owner_name, c.name AS category_name
    FROM ads a
    JOIN users u ON u.id = a.user_id
    JOIN categories c ON c.id = a.category_id
"#;

#[derive(Debug, FromQueryResult)]
struct ListingRow {
    id: i32,
    title: String,
    description: String,
    price: String,
    location: Option<String>,
    contact_phone: Option<String>,
    contact_email: Option<String>,
    image_url: Option<String>,
    status: String,
    user_id: i32,
    category_id: i32,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
    owner_name: String,
    category_name: String,
}

impl AdRepository for DbAdRepository {
    async fn create(&self, ad: &NewAd) -> Result<Ad, MarketServiceError> {
        let now = Utc::now();
        let model = ads::ActiveModel {
            title: Set(ad.title.clone()),
            description: Set(ad.description.clone()),
            price: Set(ad.price.clone()),
            location: Set(ad.location.clone()),
            contact_phone: Set(ad.contact_phone.clone()),
            contact_email: Set(ad.contact_email.clone()),
            image_url: Set(ad.image_url.clone()),
            status: Set(AdStatus::Pending.as_str().to_owned()),
            user_id: Set(ad.user_id.0),
            category_id: Set(ad.category_id.0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // Category deleted between the existence check and the insert.
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => MarketServiceError::CategoryNotFound,
            _ => MarketServiceError::Internal(anyhow::Error::new(e).context("create ad")),
        })?;
        ad_from_model(model)
    }

    async fn find_listing(&self, id: AdId) -> Result<Option<AdListing>, MarketServiceError> {
        let sql = format!("{LISTING_SELECT} WHERE a.id = $1");
        let row = ListingRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            &sql,
            [id.0.into()],
        ))
        .one(&self.db)
        .await
        .context("find ad listing")?;
        row.map(listing_from_row).transpose()
    }

    async fn list_listings(
        &self,
        filter: AdFilter,
        page: PageRequest,
    ) -> Result<Vec<AdListing>, MarketServiceError> {
        let sql = format!(
            r#"{LISTING_SELECT}
            WHERE ($1::text IS NULL OR a.status = $1)
              AND ($2::int4 IS NULL OR a.category_id = $2)
            ORDER BY a.created_at DESC, a.id DESC
            LIMIT $3 OFFSET $4
            "#
        );
        let status: Option<String> = filter.status.map(|s| s.as_str().to_owned());
        let category_id: Option<i32> = filter.category_id.map(|c| c.0);
        let rows = ListingRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            &sql,
            [
                status.into(),
                category_id.into(),
                (page.limit() as i64).into(),
                (page.offset() as i64).into(),
            ],
        ))
        .all(&self.db)
        .await
        .context("list ad listings")?;
        rows.into_iter().map(listing_from_row).collect()
    }

    async fn set_status(&self, id: AdId, status: AdStatus) -> Result<bool, MarketServiceError> {
        let result = ads::Entity::update_many()
            .col_expr(ads::Column::Status, Expr::value(status.as_str()))
            .col_expr(ads::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(ads::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .context("set ad status")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: AdId) -> Result<bool, MarketServiceError> {
        let result = ads::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete ad")?;
        Ok(result.rows_affected > 0)
    }
}

fn parse_status(raw: &str, ad_id: i32) -> Result<AdStatus, MarketServiceError> {
    Ok(AdStatus::parse(raw).with_context(|| format!("unknown status {raw:?} for ad {ad_id}"))?)
}

fn ad_from_model(model: ads::Model) -> Result<Ad, MarketServiceError> {
    Ok(Ad {
        status: parse_status(&model.status, model.id)?,
        id: AdId(model.id),
        title: model.title,
        description: model.description,
        price: model.price,
        location: model.location,
        contact_phone: model.contact_phone,
        contact_email: model.contact_email,
        image_url: model.image_url,
        user_id: UserId(model.user_id),
        category_id: CategoryId(model.category_id),
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn listing_from_row(row: ListingRow) -> Result<AdListing, MarketServiceError> {
    Ok(AdListing {
        ad: Ad {
            status: parse_status(&row.status, row.id)?,
            id: AdId(row.id),
            title: row.title,
            description: row.description,
            price: row.price,
            location: row.location,
            contact_phone: row.contact_phone,
            contact_email: row.contact_email,
            image_url: row.image_url,
            user_id: UserId(row.user_id),
            category_id: CategoryId(row.category_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        },
        owner_name: row.owner_name,
        category_name: row.category_name,
    })
}
