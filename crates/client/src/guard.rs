//! Route guards.
//!
//! Guards are evaluated synchronously from current [`SessionStore`] state
//! on every navigation to a gated view; nothing is cached across
//! navigations. Role comparison is an enum comparison because the store
//! already canonicalized the role string at its boundary.

use tradepost_core::Role;

use crate::session::{Session, SessionStore};

/// Where to send the user when a guard denies access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDenied {
    /// No session: redirect to the login view.
    RedirectToLogin,
    /// Session present but role insufficient: redirect to the
    /// not-authorized view.
    NotAuthorized,
}

/// Allow any authenticated user.
///
/// # Errors
///
/// Returns `GuardDenied::RedirectToLogin` when no session is present.
pub fn require_authenticated(store: &SessionStore) -> Result<Session, GuardDenied> {
    store.current().ok_or(GuardDenied::RedirectToLogin)
}

/// Allow only a session holding the given role.
///
/// # Errors
///
/// Returns `GuardDenied::RedirectToLogin` when no session is present, or
/// `GuardDenied::NotAuthorized` when the role does not match.
pub fn require_role(store: &SessionStore, role: Role) -> Result<Session, GuardDenied> {
    require_any_role(store, &[role])
}

/// Allow only a session holding one of the given roles.
///
/// This is the shape of the original "admin or staff" navigation check.
///
/// # Errors
///
/// Returns `GuardDenied::RedirectToLogin` when no session is present, or
/// `GuardDenied::NotAuthorized` when none of the roles match.
pub fn require_any_role(store: &SessionStore, roles: &[Role]) -> Result<Session, GuardDenied> {
    let session = require_authenticated(store)?;
    if roles.contains(&session.role) {
        Ok(session)
    } else {
        Err(GuardDenied::NotAuthorized)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn store_with_role(role: &str) -> SessionStore {
        let store = SessionStore::new();
        store.set(Session {
            token: SecretString::from("tok".to_string()),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: role.parse().unwrap(),
        });
        store
    }

    #[test]
    fn test_no_session_redirects_to_login() {
        let store = SessionStore::new();
        assert_eq!(
            require_authenticated(&store).unwrap_err(),
            GuardDenied::RedirectToLogin
        );
        assert_eq!(
            require_role(&store, Role::Admin).unwrap_err(),
            GuardDenied::RedirectToLogin
        );
    }

    #[test]
    fn test_authenticated_passes() {
        let store = store_with_role("USER");
        assert!(require_authenticated(&store).is_ok());
    }

    #[test]
    fn test_role_mismatch_is_not_authorized() {
        let store = store_with_role("USER");
        assert_eq!(
            require_role(&store, Role::Admin).unwrap_err(),
            GuardDenied::NotAuthorized
        );
    }

    #[test]
    fn test_role_comparison_is_case_insensitive_at_the_boundary() {
        // "admin" and "ADMIN" sessions must get identical access.
        for spelling in ["admin", "ADMIN"] {
            let store = store_with_role(spelling);
            assert!(require_role(&store, Role::Admin).is_ok());
        }
    }

    #[test]
    fn test_any_role_admits_either() {
        let store = store_with_role("stuff");
        assert!(require_any_role(&store, &[Role::Admin, Role::Stuff]).is_ok());

        let store = store_with_role("seller");
        assert_eq!(
            require_any_role(&store, &[Role::Admin, Role::Stuff]).unwrap_err(),
            GuardDenied::NotAuthorized
        );
    }

    #[test]
    fn test_guards_reevaluate_after_logout() {
        let store = store_with_role("ADMIN");
        assert!(require_role(&store, Role::Admin).is_ok());
        store.clear();
        assert_eq!(
            require_role(&store, Role::Admin).unwrap_err(),
            GuardDenied::RedirectToLogin
        );
    }
}
