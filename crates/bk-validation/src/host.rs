//! Host-header sanitization.

use bk_strings::{filter, CharClass};

/// Characters allowed in the host part of a server identifier.
///
/// No slash, brackets, quotes, whitespace or shell metacharacters. IPv6
/// bracket notation is stripped like any other disallowed input.
pub const HOST_MASK: CharClass = CharClass::LETTER
    .union(CharClass::NUMERIC)
    .union(CharClass::DECIMAL)
    .union(CharClass::DASH)
    .union(CharClass::COLON)
    .union(CharClass::UNDERSCORE);

/// Sanitize the host part of an untrusted `Host` header.
///
/// Everything from the first `:` on is discarded first, so an embedded port
/// never survives. The remainder is filtered through [`HOST_MASK`].
pub fn sanitize_host(host: &str) -> String {
    let bare = host.split_once(':').map_or(host, |(h, _)| h);
    let sanitized = filter(bare, HOST_MASK);

    let stripped = bare.chars().count() - sanitized.chars().count();
    if stripped > 0 {
        // Lengths only; the raw header is attacker-controlled.
        tracing::debug!(
            input_len = host.len(),
            stripped,
            "stripped disallowed characters from host header"
        );
    }
    sanitized
}

/// Build a `HOST:PORT` token from an untrusted host and a trusted port.
pub fn server_identifier(host: &str, port: u16) -> String {
    format!("{}:{}", sanitize_host(host), port)
}
