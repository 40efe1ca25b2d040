//! Service plumbing shared by Siidona binaries: configuration helpers,
//! tracing setup, HTTP middleware, health probes and store extensions.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
