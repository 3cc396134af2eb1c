//! Signed-in user and view gating.
//!
//! Every view is wrapped in a guard that asks [`gate`] what to do before any
//! of the view's own effects run: keep showing a placeholder while the auth
//! state resolves, redirect away, or render the view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
    #[serde(other)]
    Unknown,
}

/// User returned by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// Point-in-time view of the auth context.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSnapshot {
    pub loading: bool,
    pub user: Option<User>,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::resolving()
    }
}

impl AuthSnapshot {
    /// State before the session has been checked.
    pub fn resolving() -> Self {
        Self {
            loading: true,
            user: None,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            loading: false,
            user: Some(user),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            loading: false,
            user: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Privilege a view requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any signed-in user (the listing).
    Authenticated,
    /// Administrators only (upload and edit).
    Admin,
}

/// Where a gated user is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Auth state still resolving; render a loading placeholder.
    Pending,
    Redirect(RedirectTarget),
    Allow,
}

/// Decides whether a view requiring `access` may render.
///
/// The listing sends anonymous users to the login page. Admin views send
/// anyone who is not an administrator, signed in or not, back to the
/// dashboard, which in turn forwards anonymous users to login.
pub fn gate(auth: &AuthSnapshot, access: Access) -> GateDecision {
    if auth.loading {
        return GateDecision::Pending;
    }

    match (access, &auth.user) {
        (Access::Authenticated, None) => GateDecision::Redirect(RedirectTarget::Login),
        (Access::Authenticated, Some(_)) => GateDecision::Allow,
        (Access::Admin, Some(user)) if user.is_admin() => GateDecision::Allow,
        (Access::Admin, _) => GateDecision::Redirect(RedirectTarget::Dashboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            email: "ta@example.edu".into(),
            username: String::new(),
            role,
        }
    }

    #[test]
    fn test_pending_while_loading() {
        let auth = AuthSnapshot::resolving();
        assert_eq!(gate(&auth, Access::Authenticated), GateDecision::Pending);
        assert_eq!(gate(&auth, Access::Admin), GateDecision::Pending);
    }

    #[test]
    fn test_anonymous_users_are_redirected() {
        let auth = AuthSnapshot::signed_out();
        assert_eq!(
            gate(&auth, Access::Authenticated),
            GateDecision::Redirect(RedirectTarget::Login)
        );
        assert_eq!(
            gate(&auth, Access::Admin),
            GateDecision::Redirect(RedirectTarget::Dashboard)
        );
    }

    #[test]
    fn test_students_cannot_reach_admin_views() {
        let auth = AuthSnapshot::signed_in(user(Role::Student));
        assert_eq!(gate(&auth, Access::Authenticated), GateDecision::Allow);
        assert_eq!(
            gate(&auth, Access::Admin),
            GateDecision::Redirect(RedirectTarget::Dashboard)
        );
        assert!(!auth.is_admin());
    }

    #[test]
    fn test_admins_are_allowed_everywhere() {
        let auth = AuthSnapshot::signed_in(user(Role::Admin));
        assert_eq!(gate(&auth, Access::Authenticated), GateDecision::Allow);
        assert_eq!(gate(&auth, Access::Admin), GateDecision::Allow);
        assert!(auth.is_admin());
    }

    #[test]
    fn test_unknown_role_is_not_admin() {
        let parsed: User =
            serde_json::from_str(r#"{"id":"1","email":"x@y.z","role":"teacher"}"#).unwrap();
        assert_eq!(parsed.role, Role::Unknown);
        assert_eq!(parsed.display_name(), "x@y.z");
        assert!(!parsed.is_admin());
    }
}
