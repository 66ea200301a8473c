//! Request Validation
//!
//! Field checks that run before the domain service is called. Built once at
//! router construction and carried in handler state.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::PasswordPolicy;

use crate::domain::value_object::{
    app_id::AppId, email::Email, user_id::UserId, user_password::RawPassword,
};
use crate::presentation::dto::{IsAdminRequest, LoginRequest, LogoutRequest, RegisterRequest};

/// Validated login input
#[derive(Debug)]
pub struct LoginInput {
    pub email: Email,
    pub password: RawPassword,
    pub app_id: AppId,
}

/// Validated registration input
#[derive(Debug)]
pub struct RegisterInput {
    pub email: Email,
    pub password: RawPassword,
}

#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    password_policy: PasswordPolicy,
}

fn invalid(field: &str, reason: impl std::fmt::Display) -> AppError {
    AppError::bad_request(format!("validation failed: {field}: {reason}"))
}

impl RequestValidator {
    pub fn new(password_policy: PasswordPolicy) -> Self {
        Self { password_policy }
    }

    pub fn login(&self, req: LoginRequest) -> AppResult<LoginInput> {
        let email = self.email(&req.email)?;
        let password = self.password(&req.password)?;
        if req.app_id <= 0 {
            return Err(invalid("appId", "must be a positive integer"));
        }

        Ok(LoginInput {
            email,
            password,
            app_id: AppId::new(req.app_id),
        })
    }

    pub fn register(&self, req: RegisterRequest) -> AppResult<RegisterInput> {
        Ok(RegisterInput {
            email: self.email(&req.email)?,
            password: self.password(&req.password)?,
        })
    }

    pub fn is_admin(&self, req: IsAdminRequest) -> AppResult<UserId> {
        let user_id = UserId::new(req.user_id);
        if !user_id.is_assigned() {
            return Err(invalid("userId", "must be a positive integer"));
        }
        Ok(user_id)
    }

    pub fn logout(&self, req: &LogoutRequest) -> AppResult<()> {
        if req.token.trim().is_empty() {
            return Err(invalid("token", "is required"));
        }
        Ok(())
    }

    fn email(&self, raw: &str) -> AppResult<Email> {
        Email::new(raw).map_err(|e| invalid("email", e))
    }

    fn password(&self, raw: &str) -> AppResult<RawPassword> {
        if raw.is_empty() {
            return Err(invalid("password", "is required"));
        }
        self.password_policy
            .check(raw)
            .map_err(|e| invalid("password", e))?;
        Ok(RawPassword::new(raw))
    }
}
