use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;

/// Process configuration, read once at startup and passed by `Arc` into the
/// flows. Business logic never touches the environment directly.
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt_secret: SecretString,
    pub session_ttl: Duration,
    pub resend_api_key: SecretString,
    pub email_from: String,
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:5000".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let db_max_connections: u32 = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or("5".to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid number");

        let jwt_secret: SecretString =
            SecretString::new(env::var("JWT_SECRET").expect("JWT_SECRET must be set").into());

        let session_ttl_secs: i64 = env::var("SESSION_TTL_SECS")
            .unwrap_or("86400".to_string())
            .parse()
            .expect("SESSION_TTL_SECS must be a valid number");

        let resend_api_key: SecretString = SecretString::new(
            env::var("RESEND_API_KEY")
                .expect("RESEND_API_KEY must be set")
                .into(),
        );
        let email_from = env::var("EMAIL_FROM").expect("EMAIL_FROM must be set");

        let cors_origin: HeaderValue = env::var("CORS_ORIGIN")
            .unwrap_or("http://localhost:3000".to_string())
            .parse()
            .expect("CORS_ORIGIN must be a valid header value");

        Self {
            bind_addr,
            database_url,
            db_max_connections,
            jwt_secret,
            session_ttl: Duration::seconds(session_ttl_secs),
            resend_api_key,
            email_from,
            cors_origin,
        }
    }
}
