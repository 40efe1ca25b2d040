//! Session plumbing shared by Siidona services.
//!
//! Provides the opaque session token, the session cookie builders, and the
//! `SessionCookie` extractor.

pub mod cookie;
pub mod extract;
pub mod token;
