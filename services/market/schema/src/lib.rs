//! sea-orm entities for the market service tables.

pub mod ads;
pub mod categories;
pub mod users;
