use crate::{
    adapters::{email::resend::ResendLicenceMailer, http::app_state::AppState},
    infra::{config::AppConfig, postgres_persistence},
    use_cases::school::{AuthUseCases, LicenceMailer, SchoolRepo},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(
        postgres_persistence(&config.database_url, config.db_max_connections).await?,
    );

    let mailer = Arc::new(ResendLicenceMailer::new(
        config.resend_api_key.clone(),
        config.email_from.clone(),
    ));

    let auth_use_cases = AuthUseCases::new(
        postgres_arc as Arc<dyn SchoolRepo>,
        mailer as Arc<dyn LicenceMailer>,
    );

    Ok(AppState {
        config: Arc::new(config),
        auth_use_cases: Arc::new(auth_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "schoolgate=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
