use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    application::jwt,
    use_cases::school::SignupRequest,
};

pub const SESSION_COOKIE: &str = "session_token";

#[derive(Deserialize)]
struct ActivatePayload {
    licence: String,
}

#[derive(Deserialize)]
struct SigninPayload {
    email: String,
    password: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/activate", post(activate))
        .route("/signin", post(signin))
        .route("/verify", get(verify))
}

/// POST /api/auth/signup
/// Registers a school and emails it a one-time licence number. No token is
/// issued; the account starts inactive.
async fn signup(
    State(app_state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    app_state.auth_use_cases.signup(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "status": "success",
            "message": "Signup successful, kindly check your email for your Licence Number.",
        })),
    ))
}

/// POST /api/auth/activate
/// Verifies the presented licence, activates the school and starts a session.
async fn activate(
    State(app_state): State<AppState>,
    Json(payload): Json<ActivatePayload>,
) -> AppResult<impl IntoResponse> {
    let profile = app_state.auth_use_cases.activate(&payload.licence).await?;
    let headers = session_headers(&app_state, profile.id)?;
    Ok((
        StatusCode::OK,
        headers,
        Json(serde_json::json!({
            "status": "success",
            "message": "Account activated successfully.",
            "data": profile,
        })),
    ))
}

/// POST /api/auth/signin
/// Verifies email/password and activation status, then starts a session.
async fn signin(
    State(app_state): State<AppState>,
    Json(payload): Json<SigninPayload>,
) -> AppResult<impl IntoResponse> {
    let profile = app_state
        .auth_use_cases
        .signin(&payload.email, &payload.password)
        .await?;
    let headers = session_headers(&app_state, profile.id)?;
    Ok((
        StatusCode::OK,
        headers,
        Json(serde_json::json!({
            "status": "success",
            "message": "Signed in successfully.",
            "data": profile,
        })),
    ))
}

/// GET /api/auth/verify
/// Reports whether the caller holds a valid, unexpired session cookie.
async fn verify(
    cookies: CookieJar,
    State(app_state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    if let Some(session) = cookies.get(SESSION_COOKIE)
        && jwt::verify(session.value(), &app_state.config.jwt_secret).is_ok()
    {
        return Ok(StatusCode::OK);
    }
    Ok(StatusCode::UNAUTHORIZED)
}

fn session_headers(app_state: &AppState, school_id: Uuid) -> AppResult<HeaderMap> {
    let token = jwt::issue(
        school_id,
        &app_state.config.jwt_secret,
        app_state.config.session_ttl,
    )?;
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(true)
        .path("/")
        .max_age(app_state.config.session_ttl)
        .build();
    let mut headers = HeaderMap::new();
    headers.append(SET_COOKIE, cookie.to_string().parse().unwrap());
    Ok(headers)
}
