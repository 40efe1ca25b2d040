//! Pure marketplace types: identifiers, roles, moderation states, money and
//! paging. No framework or storage dependencies.

pub mod access;
pub mod ad;
pub mod category;
pub mod id;
pub mod money;
pub mod pagination;
pub mod user;
