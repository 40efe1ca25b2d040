use chrono::{DateTime, Utc};

use siidona_domain::ad::AdStatus;
use siidona_domain::id::{AdId, CategoryId, UserId};
use siidona_domain::money::MinorUnits;
use siidona_domain::user::UserRole;

/// Marketplace account as stored.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// argon2 PHC string. Never serialized into responses.
    pub password_hash: String,
    pub role: UserRole,
    pub balance: MinorUnits,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting an account. Balance always starts at zero.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ad {
    pub id: AdId,
    pub title: String,
    pub description: String,
    /// Free text as typed by the seller ("150", "negotiable", ...).
    pub price: String,
    pub location: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub image_url: Option<String>,
    pub status: AdStatus,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting an ad. There is no status field: new ads are always
/// stored as [`AdStatus::Pending`].
#[derive(Debug, Clone)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub image_url: Option<String>,
    pub user_id: UserId,
    pub category_id: CategoryId,
}

/// An ad joined with its owner's and category's display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdListing {
    pub ad: Ad,
    pub owner_name: String,
    pub category_name: String,
}

/// Optional narrowing for ad list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdFilter {
    pub status: Option<AdStatus>,
    pub category_id: Option<CategoryId>,
}

/// Category created by the seed tool when its slug is not taken yet.
pub struct DefaultCategory {
    pub name: &'static str,
    pub description: &'static str,
}

pub const DEFAULT_CATEGORIES: &[DefaultCategory] = &[
    DefaultCategory {
        name: "Electronics",
        description: "Phones, computers, and gadgets",
    },
    DefaultCategory {
        name: "Vehicles",
        description: "Cars, motorcycles, and bikes",
    },
    DefaultCategory {
        name: "Real Estate",
        description: "Houses, apartments, and land",
    },
    DefaultCategory {
        name: "Furniture",
        description: "Home and office furniture",
    },
    DefaultCategory {
        name: "Fashion",
        description: "Clothing, shoes, and accessories",
    },
    DefaultCategory {
        name: "Services",
        description: "Professional and personal services",
    },
    DefaultCategory {
        name: "Jobs",
        description: "Job listings and opportunities",
    },
    DefaultCategory {
        name: "Other",
        description: "Miscellaneous items",
    },
];
