//! # sentinel-auth
//!
//! API key authentication for the LogSentinel collector.
//!
//! [`Authenticator`] resolves a raw API key — as read from the request
//! header — to the [`sentinel_types::Project`] owning it, through the event
//! store. It runs before anything is persisted and has no side effects.

pub mod authenticator;
pub mod error;

pub use authenticator::Authenticator;
pub use error::{AuthError, AuthResult};
