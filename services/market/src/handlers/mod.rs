pub mod account;
pub mod admin;
pub mod ads;
pub mod categories;
pub mod health;
pub mod response;
