//! Test app state builder for HTTP-level integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    test_utils::{FailingLicenceMailer, InMemorySchoolRepo, RecordingLicenceMailer},
    use_cases::school::{AuthUseCases, LicenceMailer, SchoolRepo},
};

fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse::<SocketAddr>().unwrap(),
        database_url: String::new(),
        db_max_connections: 1,
        jwt_secret: SecretString::new("test-secret-at-least-32-bytes-long!!".into()),
        session_ttl: Duration::hours(1),
        resend_api_key: SecretString::new("re_test".into()),
        email_from: "noreply@schoolgate.test".to_string(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
    }
}

/// Builds an `AppState` backed by in-memory mocks.
///
/// # Example
///
/// ```ignore
/// let (app_state, mailer) = TestAppStateBuilder::new().build();
/// let server = TestServer::new(router().with_state(app_state)).unwrap();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder;

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self
    }

    fn assemble(
        repo: Arc<InMemorySchoolRepo>,
        mailer: Arc<dyn LicenceMailer>,
    ) -> AppState {
        let auth_use_cases = AuthUseCases::new(repo as Arc<dyn SchoolRepo>, mailer);
        AppState {
            config: Arc::new(test_config()),
            auth_use_cases: Arc::new(auth_use_cases),
        }
    }

    pub fn build(self) -> (AppState, Arc<RecordingLicenceMailer>) {
        let mailer = Arc::new(RecordingLicenceMailer::default());
        let state = Self::assemble(Arc::new(InMemorySchoolRepo::default()), mailer.clone());
        (state, mailer)
    }

    pub fn build_with_repo(self) -> (AppState, Arc<RecordingLicenceMailer>, Arc<InMemorySchoolRepo>) {
        let mailer = Arc::new(RecordingLicenceMailer::default());
        let repo = Arc::new(InMemorySchoolRepo::default());
        let state = Self::assemble(repo.clone(), mailer.clone());
        (state, mailer, repo)
    }

    pub fn build_with_failing_mailer(self) -> (AppState, Arc<InMemorySchoolRepo>) {
        let repo = Arc::new(InMemorySchoolRepo::default());
        let state = Self::assemble(repo.clone(), Arc::new(FailingLicenceMailer));
        (state, repo)
    }
}
