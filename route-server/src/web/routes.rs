//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{Action, RouteId};
use crate::service::ServiceError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", post(create_route).get(list_routes))
        .route("/routes/search", post(search_routes))
        .route("/routes/:id", get(get_route).delete(delete_route))
        .route("/routes/:id/publish", post(publish_route))
        .route("/routes/:id/cancel", post(cancel_route))
        .route("/routes/:id/complete", post(complete_route))
        .route("/transporters/:id/routes", get(routes_by_owner))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

async fn create_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<RouteResult>), AppError> {
    let req: CreateRouteRequest = parse_body(&body)?;
    let route = state.routes.create_route(req.into_new_route())?;
    Ok((StatusCode::CREATED, Json(RouteResult::from_route(&route))))
}

async fn list_routes(State(state): State<AppState>) -> Result<Json<RoutesResponse>, AppError> {
    let routes = state.routes.all_routes()?;
    Ok(Json(RoutesResponse::from_routes(&routes)))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteResult>, AppError> {
    let id = RouteId::new(id);
    let route = state
        .routes
        .route_by_id(&id)?
        .ok_or(ServiceError::NotFound(id))?;
    Ok(Json(RouteResult::from_route(&route)))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = RouteId::new(id);
    if state.routes.delete_route(&id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServiceError::NotFound(id).into())
    }
}

async fn search_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RoutesResponse>, AppError> {
    let req: SearchRoutesRequest = parse_body(&body)?;
    let criteria = req.into_criteria().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let routes = state.routes.search_routes(&criteria)?;
    Ok(Json(RoutesResponse::from_routes(&routes)))
}

async fn publish_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteResult>, AppError> {
    apply_action(&state, id, Action::Publish)
}

async fn cancel_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteResult>, AppError> {
    apply_action(&state, id, Action::Cancel)
}

async fn complete_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteResult>, AppError> {
    apply_action(&state, id, Action::Complete)
}

fn apply_action(state: &AppState, id: String, action: Action) -> Result<Json<RouteResult>, AppError> {
    let id = RouteId::new(id);
    let route = match action {
        Action::Publish => state.routes.publish_route(&id)?,
        Action::Cancel => state.routes.cancel_route(&id)?,
        Action::Complete => state.routes.complete_route(&id)?,
    };
    Ok(Json(RouteResult::from_route(&route)))
}

async fn routes_by_owner(
    State(state): State<AppState>,
    Path(transporter_id): Path<String>,
) -> Result<Json<RoutesResponse>, AppError> {
    let routes = state.routes.routes_by_owner(&transporter_id)?;
    Ok(Json(RoutesResponse::from_routes(&routes)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::Validation(_) => AppError::Unprocessable { message },
            ServiceError::InvalidTransition(_) => AppError::Conflict { message },
            ServiceError::NotFound(_) => AppError::NotFound { message },
            ServiceError::Store(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
