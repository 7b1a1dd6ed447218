use crate::api::{ApiError, RoleCheck};
use crate::config::ADMIN_ROLE_ID;

/// Outcome of the session guard for an admin page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthStatus {
    /// Role check in flight.
    Loading,
    Valid,
    /// Send the user to the login page.
    Invalid,
}

/// First step, before any request: without a token there is nothing to check.
pub fn precheck(token: Option<&str>) -> Option<AuthStatus> {
    match token {
        Some(t) if !t.is_empty() => None,
        _ => Some(AuthStatus::Invalid),
    }
}

/// Second step: only an administrator role keeps the user on the page. Any
/// failure of the check counts as "not authorized"; there is no retry.
pub fn verdict(result: &Result<RoleCheck, ApiError>) -> AuthStatus {
    match result {
        Ok(check) if check.role_id == ADMIN_ROLE_ID => AuthStatus::Valid,
        Ok(check) => {
            log::debug!("role {} is not administrator", check.role_id);
            AuthStatus::Invalid
        }
        Err(e) => {
            log::debug!("role check failed: {e}");
            AuthStatus::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_needs_no_request() {
        assert_eq!(precheck(None), Some(AuthStatus::Invalid));
        assert_eq!(precheck(Some("")), Some(AuthStatus::Invalid));
        assert_eq!(precheck(Some("t0k3n")), None);
    }

    #[test]
    fn test_admin_role_stays() {
        assert_eq!(verdict(&Ok(RoleCheck { role_id: 1 })), AuthStatus::Valid);
    }

    #[test]
    fn test_other_role_redirects() {
        assert_eq!(verdict(&Ok(RoleCheck { role_id: 2 })), AuthStatus::Invalid);
    }

    #[test]
    fn test_failed_check_redirects() {
        let unauthorized = ApiError::Status { status: 401, text: "Unauthorized".into() };
        assert_eq!(verdict(&Err(unauthorized)), AuthStatus::Invalid);
        assert_eq!(verdict(&Err(ApiError::Network("offline".into()))), AuthStatus::Invalid);
        assert_eq!(verdict(&Err(ApiError::Decode("missing role_id".into()))), AuthStatus::Invalid);
    }
}
