//! Demo sign-in. Stands in for a real authentication backend: any
//! well-formed credentials are accepted after an artificial network delay.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::Utc;
use regex::Regex;
use tokio::time::sleep;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::identity::{Identity, Role};

/// Demo rule only: any password of at least this many characters passes.
const MIN_PASSWORD_LEN: usize = 3;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Credentials behind the quick-login buttons on the sign-in screen.
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

/// Demo account for a role. Only the known roles have one.
pub fn demo_account(role: &Role) -> Option<DemoAccount> {
    match role {
        Role::Student => Some(DemoAccount {
            email: "student@demo.com",
            password: "demo123",
            name: "Alex Johnson",
        }),
        Role::Admin => Some(DemoAccount {
            email: "admin@demo.com",
            password: "demo123",
            name: "Sarah Wilson",
        }),
        Role::Mentor => Some(DemoAccount {
            email: "mentor@demo.com",
            password: "demo123",
            name: "Dr. Michael Chen",
        }),
        Role::Recruiter => Some(DemoAccount {
            email: "recruiter@demo.com",
            password: "demo123",
            name: "Emily Rodriguez",
        }),
        Role::Other(_) => None,
    }
}

fn display_name(role: &Role) -> &'static str {
    match role {
        Role::Student => "Alex Johnson",
        Role::Admin => "Sarah Wilson",
        Role::Mentor => "Dr. Michael Chen",
        Role::Recruiter => "Emily Rodriguez",
        Role::Other(_) => "User",
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub struct Authenticator {
    delay: Duration,
}

impl Authenticator {
    pub fn new(delay: Duration) -> Self {
        Authenticator { delay }
    }

    /// Signs a user in. Field validation happens up front; the password rule
    /// is checked after the simulated round trip, the way a backend would
    /// reject it. On success the identity carries the role's demo display
    /// name and fresh timestamps.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<Identity, AppError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::Validation("Please fill in all fields".to_string()));
        }
        if !is_valid_email(&request.email) {
            return Err(AppError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }

        debug!("Simulating sign-in round trip for {}", request.email);
        sleep(self.delay).await;

        if request.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::Unauthorized(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters long"
            )));
        }

        let now = Utc::now();
        Ok(Identity {
            id: Uuid::new_v4(),
            name: display_name(&request.role).to_string(),
            email: request.email.clone(),
            role: request.role.clone(),
            avatar: None,
            joined_at: now,
            last_login: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(email: &str, password: &str, role: Role) -> SignInRequest {
        SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }

    fn instant_auth() -> Authenticator {
        Authenticator::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_empty_fields_are_rejected_before_the_round_trip() {
        let auth = instant_auth();
        let err = auth
            .sign_in(&make_request("", "demo123", Role::Student))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = auth
            .sign_in(&make_request("student@demo.com", "", Role::Student))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        let auth = instant_auth();
        for email in ["plainaddress", "no-at-sign.com", "a@nodot", "a b@c.d"] {
            let err = auth
                .sign_in(&make_request(email, "demo123", Role::Student))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "email {email}");
        }
    }

    #[test]
    fn test_email_pattern_accepts_ordinary_addresses() {
        assert!(is_valid_email("student@demo.com"));
        assert!(is_valid_email("first.last@company.co.uk"));
        assert!(!is_valid_email("two@@signs.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_password_is_rejected_after_the_delay() {
        let auth = Authenticator::new(Duration::from_millis(1500));
        let err = auth
            .sign_in(&make_request("student@demo.com", "ab", Role::Student))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_demo_credentials_yield_the_role_display_name() {
        let auth = instant_auth();
        let account = demo_account(&Role::Student).unwrap();
        let identity = auth
            .sign_in(&make_request(account.email, account.password, Role::Student))
            .await
            .unwrap();
        assert_eq!(identity.name, "Alex Johnson");
        assert_eq!(identity.email, "student@demo.com");
        assert_eq!(identity.role, Role::Student);
    }

    #[tokio::test]
    async fn test_unrecognized_role_signs_in_with_generic_name() {
        let auth = instant_auth();
        let identity = auth
            .sign_in(&make_request(
                "someone@demo.com",
                "demo123",
                Role::Other("alumni".to_string()),
            ))
            .await
            .unwrap();
        assert_eq!(identity.name, "User");
    }

    #[test]
    fn test_demo_accounts_exist_exactly_for_known_roles() {
        for role in Role::KNOWN {
            assert!(demo_account(&role).is_some(), "role {role}");
        }
        assert!(demo_account(&Role::Other("alumni".to_string())).is_none());
    }

    #[test]
    fn test_demo_account_names_match_sign_in_names() {
        for role in Role::KNOWN {
            let account = demo_account(&role).unwrap();
            assert_eq!(account.name, display_name(&role), "role {role}");
        }
    }
}
