//! JSON bodies shared by several handlers.

use serde::Serialize;

use siidona_domain::ad::AdStatus;
use siidona_domain::id::{AdId, CategoryId, UserId};
use siidona_domain::money::MinorUnits;
use siidona_domain::user::UserRole;

use crate::domain::types::{Ad, AdListing, Category, User};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(serialize_with = "siidona_core::serde::to_major_units")]
    pub balance: MinorUnits,
    #[serde(serialize_with = "siidona_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            balance: user.balance,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct AdResponse {
    pub id: AdId,
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub image_url: Option<String>,
    pub status: AdStatus,
    pub user_id: UserId,
    pub category_id: CategoryId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(serialize_with = "siidona_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "siidona_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            price: ad.price,
            location: ad.location,
            contact_phone: ad.contact_phone,
            contact_email: ad.contact_email,
            image_url: ad.image_url,
            status: ad.status,
            user_id: ad.user_id,
            category_id: ad.category_id,
            owner_name: None,
            category_name: None,
            created_at: ad.created_at,
            updated_at: ad.updated_at,
        }
    }
}

impl From<AdListing> for AdResponse {
    fn from(listing: AdListing) -> Self {
        Self {
            owner_name: Some(listing.owner_name),
            category_name: Some(listing.category_name),
            ..Self::from(listing.ad)
        }
    }
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    #[serde(serialize_with = "siidona_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
        }
    }
}
