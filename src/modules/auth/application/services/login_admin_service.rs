use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminError, LoginAdminRequest, LoginAdminResponse, LoginAdminUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::config::AdminSettings;

/// Single-account login: the username and argon2 hash come from configuration.
pub struct LoginAdminService {
    admin: AdminSettings,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl LoginAdminService {
    pub fn new(
        admin: AdminSettings,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            admin,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(
        &self,
        request: LoginAdminRequest,
    ) -> Result<LoginAdminResponse, LoginAdminError> {
        let username_matches = request.username() == self.admin.username;

        // Same work whichever credential is wrong.
        let password_matches = self
            .hasher
            .verify_password(request.password(), &self.admin.password_hash)
            .await
            .map_err(|e| LoginAdminError::PasswordVerificationFailed(e.to_string()))?;

        if !(username_matches && password_matches) {
            return Err(LoginAdminError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(&self.admin.username)
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse {
            access_token,
            expires_in: self.tokens.access_token_ttl_secs(),
        })
    }
}
