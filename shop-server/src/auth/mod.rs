//! 管理员认证
//!
//! Admin endpoints are gated by an [`AuthProvider`]. The shipped provider,
//! [`SharedSecretAuth`], compares the submitted password with one configured
//! secret. Handlers only see the trait, so a real scheme can replace it
//! without touching the stores.

use shared::error::{AppError, AppResult};
use std::fmt;
use std::sync::Arc;

use crate::security_log;

/// Capability check for the admin surface
pub trait AuthProvider: Send + Sync + fmt::Debug {
    /// Whether the presented credential grants admin access
    fn verify(&self, credential: &str) -> bool;
}

/// Single shared password compared by equality
#[derive(Clone)]
pub struct SharedSecretAuth {
    secret: String,
}

impl SharedSecretAuth {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for SharedSecretAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecretAuth")
            .field("secret", &"***")
            .finish()
    }
}

impl AuthProvider for SharedSecretAuth {
    fn verify(&self, credential: &str) -> bool {
        credential == self.secret
    }
}

/// Shared handle to the configured provider
#[derive(Debug, Clone)]
pub struct AdminGate {
    provider: Arc<dyn AuthProvider>,
}

impl AdminGate {
    pub fn new(provider: impl AuthProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// `Ok(())` when the password is accepted, 403 otherwise
    ///
    /// A missing password is treated like a wrong one.
    pub fn require_admin(&self, password: Option<&str>, action: &'static str) -> AppResult<()> {
        match password {
            Some(password) if self.provider.verify(password) => Ok(()),
            _ => {
                security_log!(
                    "WARN",
                    "admin_password_rejected",
                    action = action,
                    password_present = password.is_some()
                );
                Err(AppError::forbidden())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_shared_secret() {
        let auth = SharedSecretAuth::new("123");
        assert!(auth.verify("123"));
        assert!(!auth.verify("1234"));
        assert!(!auth.verify(""));
    }

    #[test]
    fn test_debug_hides_secret() {
        let auth = SharedSecretAuth::new("hunter2");
        assert!(!format!("{:?}", auth).contains("hunter2"));
    }

    #[test]
    fn test_gate() {
        let gate = AdminGate::new(SharedSecretAuth::new("123"));
        assert!(gate.require_admin(Some("123"), "test").is_ok());

        let err = gate.require_admin(Some("wrong"), "test").unwrap_err();
        assert_eq!(err.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(err.message, "管理密码错误");

        assert!(gate.require_admin(None, "test").is_err());
    }

    #[derive(Debug)]
    struct DenyAll;

    impl AuthProvider for DenyAll {
        fn verify(&self, _credential: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_gate_uses_any_provider() {
        let gate = AdminGate::new(DenyAll);
        assert!(gate.require_admin(Some("123"), "test").is_err());
    }
}
