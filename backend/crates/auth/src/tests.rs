//! Service-level tests for the auth crate

#[cfg(test)]
mod service_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    use chrono::DateTime;
    use hmac::{Hmac, Mac};
    use platform::jwt::{self, JwtError};
    use sha2::Sha256;

    use crate::application::{config::AuthConfig, service::AuthService};
    use crate::domain::repository::UserProvider;
    use crate::domain::service::FixedClock;
    use crate::domain::value_object::{
        app_id::AppId, app_secret::AppSecret, email::Email, user_id::UserId,
        user_password::RawPassword,
    };
    use crate::error::AuthErrorKind;
    use crate::infra::memory::InMemoryAuthRepository;

    const NOW: i64 = 1_700_000_000;
    const APP_A: i64 = 1;
    const APP_B: i64 = 2;

    type MemoryService = AuthService<InMemoryAuthRepository, InMemoryAuthRepository, InMemoryAuthRepository>;

    async fn setup(config: AuthConfig) -> (MemoryService, InMemoryAuthRepository) {
        let repo = InMemoryAuthRepository::new();
        repo.insert_app(AppId::new(APP_A), "app-a", AppSecret::new("secret-a"))
            .await;
        repo.insert_app(AppId::new(APP_B), "app-b", AppSecret::new("secret-b"))
            .await;

        let clock = Arc::new(FixedClock::new(DateTime::from_timestamp(NOW, 0).unwrap()));
        let service = AuthService::with_repository(Arc::new(repo.clone()), &config, clock);
        (service, repo)
    }

    fn email(s: &str) -> Email {
        Email::new(s).unwrap()
    }

    fn pw(s: &str) -> RawPassword {
        RawPassword::new(s)
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (service, _) = setup(AuthConfig::default()).await;

        let user_id = service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();
        let token = service
            .login(&email("ada@example.com"), pw("secret1"), AppId::new(APP_A))
            .await
            .unwrap();

        let claims = jwt::verify_signature_hs256(&token, b"secret-a").unwrap();
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.id, user_id.to_string());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let (service, _) = setup(AuthConfig::default()).await;
        service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();

        let wrong_password = service
            .login(&email("ada@example.com"), pw("secret2"), AppId::new(APP_A))
            .await
            .unwrap_err();
        let unknown_email = service
            .login(&email("bob@example.com"), pw("secret1"), AppId::new(APP_A))
            .await
            .unwrap_err();

        assert_eq!(wrong_password.kind(), AuthErrorKind::InvalidCredentials);
        assert_eq!(unknown_email.kind(), AuthErrorKind::InvalidCredentials);
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_original_hash() {
        let (service, repo) = setup(AuthConfig::default()).await;
        service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();
        let before = repo.password_hash(&email("ada@example.com")).await.unwrap();

        let err = service
            .register_new_user(&email("ADA@example.com"), pw("another1"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AuthErrorKind::UserExists);
        let after = repo.password_hash(&email("ada@example.com")).await.unwrap();
        assert_eq!(before.as_phc_string(), after.as_phc_string());
        assert!(
            service
                .login(&email("ada@example.com"), pw("secret1"), AppId::new(APP_A))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_fresh_user_is_not_admin() {
        let (service, repo) = setup(AuthConfig::default()).await;
        let user_id = service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();

        assert!(!service.is_admin(user_id).await.unwrap());

        repo.set_admin(user_id, true).await.unwrap();
        assert!(service.is_admin(user_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_admin_unknown_user_reports_invalid_app_id() {
        let (service, _) = setup(AuthConfig::default()).await;

        let err = service.is_admin(UserId::new(404)).await.unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::InvalidAppId);
        assert_eq!(err.to_string(), "auth.IsAdmin: invalid app id");
    }

    #[tokio::test]
    async fn test_token_is_bound_to_app() {
        let (service, _) = setup(AuthConfig::default()).await;
        service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();

        let token = service
            .login(&email("ada@example.com"), pw("secret1"), AppId::new(APP_A))
            .await
            .unwrap();

        assert!(jwt::verify_signature_hs256(&token, b"secret-a").is_ok());
        assert!(matches!(
            jwt::verify_signature_hs256(&token, b"secret-b"),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[tokio::test]
    async fn test_exp_is_issue_time_plus_configured_ttl() {
        let ttl = Duration::from_secs(900);
        let (service, _) = setup(AuthConfig::default().with_token_ttl(ttl)).await;
        service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();

        let token = service
            .login(&email("ada@example.com"), pw("secret1"), AppId::new(APP_B))
            .await
            .unwrap();

        let claims = jwt::verify_signature_hs256(&token, b"secret-b").unwrap();
        assert_eq!(claims.exp, NOW + 900);
    }

    #[tokio::test]
    async fn test_token_signature_is_hmac_sha256_of_app_secret() {
        let (service, _) = setup(AuthConfig::default()).await;
        service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();
        let token = service
            .login(&email("ada@example.com"), pw("secret1"), AppId::new(APP_A))
            .await
            .unwrap();

        let (signing_input, signature) = token.rsplit_once('.').unwrap();
        let mut mac = Hmac::<Sha256>::new_from_slice(b"secret-a").unwrap();
        mac.update(signing_input.as_bytes());

        assert_eq!(signature, URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()));
    }

    #[tokio::test]
    async fn test_unknown_app_is_invalid_app_id() {
        let (service, _) = setup(AuthConfig::default()).await;
        service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();

        let err = service
            .login(&email("ada@example.com"), pw("secret1"), AppId::new(77))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::InvalidAppId);
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let (service, repo) = setup(AuthConfig::default()).await;
        service
            .register_new_user(&email("Ada@Example.com"), pw("secret1"))
            .await
            .unwrap();

        let user = repo.user(&email("ada@example.com")).await.unwrap();
        assert_eq!(user.email.as_str(), "ada@example.com");
        assert!(
            service
                .login(&email("ADA@EXAMPLE.COM"), pw("secret1"), AppId::new(APP_A))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_pepper_is_applied() {
        let config = AuthConfig::default().with_pepper(b"pepper".to_vec());
        let (service, repo) = setup(config).await;
        service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();

        // Same storage, no pepper: the stored hash no longer matches
        let clock = Arc::new(FixedClock::new(DateTime::from_timestamp(NOW, 0).unwrap()));
        let unpeppered =
            AuthService::with_repository(Arc::new(repo), &AuthConfig::default(), clock);
        let err = unpeppered
            .login(&email("ada@example.com"), pw("secret1"), AppId::new(APP_A))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::InvalidCredentials);

        assert!(
            service
                .login(&email("ada@example.com"), pw("secret1"), AppId::new(APP_A))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_empty_app_secret_fails_signing() {
        let (service, repo) = setup(AuthConfig::default()).await;
        repo.insert_app(AppId::new(9), "broken", AppSecret::new(""))
            .await;
        service
            .register_new_user(&email("ada@example.com"), pw("secret1"))
            .await
            .unwrap();

        let err = service
            .login(&email("ada@example.com"), pw("secret1"), AppId::new(9))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::TokenSigning);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registration_single_winner() {
        let (service, repo) = setup(AuthConfig::default()).await;
        let service = Arc::new(service);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .register_new_user(&email("race@example.com"), pw("secret1"))
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(e) => assert_eq!(e.kind(), AuthErrorKind::UserExists),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.user_count().await, 1);
    }
}

#[cfg(test)]
mod storage_failure_tests {
    use std::sync::Arc;

    use crate::application::{config::AuthConfig, service::AuthService};
    use crate::domain::entity::{app::App, user::User};
    use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
    use crate::domain::service::SystemClock;
    use crate::domain::value_object::{
        app_id::AppId, email::Email, user_id::UserId, user_password::{RawPassword, UserPassword},
    };
    use crate::error::{AuthErrorKind, StorageError, StorageResult};

    /// Engine whose every call fails
    struct Unavailable;

    impl UserSaver for Unavailable {
        async fn save_user(&self, _: &Email, _: &UserPassword) -> StorageResult<UserId> {
            Err(StorageError::Internal("disk full".into()))
        }
    }

    impl UserProvider for Unavailable {
        async fn user(&self, _: &Email) -> StorageResult<User> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn is_admin(&self, _: UserId) -> StorageResult<bool> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }
    }

    impl AppProvider for Unavailable {
        async fn app(&self, _: AppId) -> StorageResult<App> {
            Err(StorageError::Internal("unreachable".into()))
        }
    }

    fn service() -> AuthService<Unavailable, Unavailable, Unavailable> {
        AuthService::with_repository(Arc::new(Unavailable), &AuthConfig::default(), Arc::new(SystemClock))
    }

    #[tokio::test]
    async fn test_storage_failures_are_internal() {
        let service = service();
        let email = Email::new("ada@example.com").unwrap();

        let err = service
            .register_new_user(&email, RawPassword::new("secret1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::InternalStorage);

        let err = service
            .login(&email, RawPassword::new("secret1"), AppId::new(1))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::InternalStorage);

        let err = service.is_admin(UserId::new(1)).await.unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::InternalStorage);
        assert!(std::error::Error::source(&err).is_some());
    }
}

#[cfg(test)]
mod malformed_hash_tests {
    use std::sync::Arc;

    use crate::application::{config::AuthConfig, service::AuthService};
    use crate::domain::repository::UserSaver;
    use crate::domain::service::SystemClock;
    use crate::domain::value_object::{
        app_id::AppId, app_secret::AppSecret, email::Email,
        user_password::{RawPassword, UserPassword},
    };
    use crate::error::AuthErrorKind;
    use crate::infra::memory::InMemoryAuthRepository;

    #[tokio::test]
    async fn test_corrupt_stored_hash_is_invalid_credentials() {
        let repo = InMemoryAuthRepository::new();
        repo.insert_app(AppId::new(1), "web", AppSecret::new("web-secret"))
            .await;
        let email = Email::new("ada@example.com").unwrap();
        repo.save_user(&email, &UserPassword::from_phc_string("plaintext?"))
            .await
            .unwrap();

        let service =
            AuthService::with_repository(Arc::new(repo), &AuthConfig::default(), Arc::new(SystemClock));
        let err = service
            .login(&email, RawPassword::new("plaintext?"), AppId::new(1))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AuthErrorKind::InvalidCredentials);
    }
}
