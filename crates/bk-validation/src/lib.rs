//! Identifier sanitizers built on [`bk_strings::filter`].
//!
//! - [`server_identifier`]: turn an attacker-controlled `Host` header plus a
//!   trusted port into a `HOST:PORT` token that is safe to interpolate into
//!   a shell command or generated URL.
//! - [`sanitize_test_profile_base`]: turn a free-form display name into a
//!   lowercase, dash-separated profile identifier.
//!
//! Both strip disallowed characters; neither escapes.

pub mod host;
pub mod profile;

pub use host::{sanitize_host, server_identifier, HOST_MASK};
pub use profile::{sanitize_test_profile_base, PROFILE_MASK};
