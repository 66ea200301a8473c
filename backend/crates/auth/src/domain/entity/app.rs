//! App Entity
//!
//! A pre-provisioned consuming application. Read-only here: provisioning
//! happens out of band.

use crate::domain::value_object::{app_id::AppId, app_secret::AppSecret};

#[derive(Debug, Clone)]
pub struct App {
    pub id: AppId,
    pub name: String,
    /// Signing key for tokens issued to this app
    pub secret: AppSecret,
}
