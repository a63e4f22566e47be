use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_ADMIN: &str = "admin";

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "portfolio-site".to_string(),
        access_token_expiry: 900,
    })
}

/// Registered the way the `AdminUser` extractor looks it up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header value for a valid admin token.
pub fn bearer() -> String {
    let token = jwt_service()
        .generate_access_token(TEST_ADMIN)
        .expect("token generation");
    format!("Bearer {token}")
}
