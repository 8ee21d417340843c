use crate::api::api_error::APIError;
use crate::api::model::{DeleteResult, RegisterRequest, RegisterResult};
use crate::api::server::AppState;
use crate::config::Config;
use crate::error::Error;
use crate::records::TxtRecord;
use crate::validate;
use axum::extract::{Path, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    // The registration form is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/healthcheck", get(health_check))
        .route("/register", post(register))
        .route("/record/:name", get(fetch_record).delete(delete_record))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .layer(cors)
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn health_check() -> impl IntoResponse {
    Json(json!({"ok":"healthy"}))
}

async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    WithRejection(Json(payload), _): WithRejection<Json<RegisterRequest>, APIError>,
) -> Result<impl IntoResponse, APIError> {
    authorize(&state.config, &headers)?;
    validate::registration(&payload.name, &payload.uri)?;

    if let Some(existing) = state.records.get(&payload.name).await? {
        tracing::debug!("rejected registration of taken name \"{}\"", payload.name);
        return Err(Error::NameTaken(existing.fqdn).into());
    }

    let record = state.records.put(&payload.name, &payload.uri).await?;
    tracing::info!("registered \"{}\" as \"{}\"", payload.name, record.fqdn);
    Ok((
        StatusCode::CREATED,
        Json(RegisterResult {
            message: "Name registered successfully".to_string(),
            fqdn: record.fqdn,
            uri: record.uri,
        }),
    ))
}

async fn fetch_record(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TxtRecord>, APIError> {
    validate::name(&name)?;
    match state.records.get(&name).await? {
        Some(record) => Ok(Json(record)),
        None => Err(Error::RecordNotFound.into()),
    }
}

async fn delete_record(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Result<Json<DeleteResult>, APIError> {
    authorize(&state.config, &headers)?;
    validate::name(&name)?;
    let success = state.records.delete(&name).await?;
    tracing::info!("unregistered \"{name}\"");
    Ok(Json(DeleteResult { success }))
}

fn authorize(config: &Config, headers: &HeaderMap) -> Result<(), Error> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(Error::Unauthorized)?;
    if token != config.auth_token {
        return Err(Error::InvalidToken);
    }
    Ok(())
}
