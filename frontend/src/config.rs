//! Compile-time configuration of the console.

/// Prefix prepended to every API path. Empty means same origin as the bundle.
pub const API_BASE: &str = match option_env!("FLEET_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Local storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Role identifier of an administrator account.
pub const ADMIN_ROLE_ID: i64 = 1;
