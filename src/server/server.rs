use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use tracing::{error, info};

use crate::catalog::{Catalog, CatalogStats, Project};

use axum::{
    extract::{Path, State},
    http::{HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    normalize_path::NormalizePathLayer,
};

use super::{
    error::ApiError, fold_route_case, log_requests, metrics, security_headers, state::*,
    ServerConfig,
};

pub const SERVICE_NAME: &str = "HaloAI Studios Hub API";

#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub uptime: f64,
}

async fn home() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_NAME.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        status: "running".to_owned(),
    })
}

async fn get_projects(State(catalog): State<SharedCatalog>) -> Json<Vec<Project>> {
    Json(catalog.projects().to_vec())
}

async fn get_project(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    match catalog.get_project(&id) {
        Some(project) => Ok(Json(project.clone())),
        None => Err(ApiError::ProjectNotFound),
    }
}

async fn get_health(State(state): State<ServerState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy".to_owned(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.start_time.elapsed().as_secs_f64(),
    })
}

async fn get_stats(State(catalog): State<SharedCatalog>) -> Json<CatalogStats> {
    Json(catalog.stats())
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_owned()
    };
    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", details)).into_response()
}

fn make_cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let layer = match &config.cors_allowed_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin \"{}\"", origin))?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    };
    Ok(layer)
}

/// Wraps routes with the middleware stack shared by every endpoint,
/// outermost first: request logging, CORS, security headers, panic catching.
fn apply_layers(router: Router, state: &ServerState) -> Result<Router> {
    let cors = make_cors_layer(&state.config)?;
    Ok(router
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests)))
}

pub fn make_app(config: ServerConfig, catalog: Catalog) -> Result<Router> {
    let state = ServerState::new(config, catalog);

    let routes: Router = Router::new()
        .route("/", get(home))
        .route("/api/projects", get(get_projects))
        .route("/api/projects/{id}", get(get_project))
        .route("/api/health", get(get_health))
        .route("/api/stats", get(get_stats))
        .with_state(state.clone());
    let routes = apply_layers(routes, &state)?;

    // Path rewriting has to happen before the inner router matches.
    let normalized = ServiceBuilder::new()
        .layer(NormalizePathLayer::trim_trailing_slash())
        .map_request(fold_route_case)
        .service(routes);
    Ok(Router::new().fallback_service(normalized))
}

fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics::metrics_handler))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Could not listen for Ctrl+C: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}

pub async fn run_server(catalog: Catalog, config: ServerConfig) -> Result<()> {
    metrics::init_metrics();
    metrics::init_catalog_metrics(catalog.get_projects_count());

    let bind_address = config.bind_address();
    let metrics_bind_address = config.metrics_bind_address();
    let port = config.port;
    let app = make_app(config, catalog)?;

    if let Some(metrics_bind_address) = metrics_bind_address {
        let metrics_listener = tokio::net::TcpListener::bind(&metrics_bind_address)
            .await
            .with_context(|| format!("Could not bind metrics address {}", metrics_bind_address))?;
        info!("Metrics available at {}!", metrics_bind_address);
        tokio::spawn(async move {
            if let Err(err) = axum::serve(metrics_listener, make_metrics_app()).await {
                error!("Metrics server stopped: {}", err);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Could not bind {}", bind_address))?;

    info!("🚀 {} running on port {}", SERVICE_NAME, port);
    info!("📊 Health check: http://localhost:{}/api/health", port);
    info!("📋 Projects: http://localhost:{}/api/projects", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
