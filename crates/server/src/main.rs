// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use platemart_api::{
    ApiError, CreateLotWithRegistrationResponse, DeleteLotResponse, ListLotsQuery,
    ListLotsResponse, LotInfo, LotResponse, RegisterSellerRequest, RegisterSellerResponse,
    create_lot, create_lot_with_registration, delete_lot, get_lot, list_lots,
    register_seller, update_lot,
};
use platemart_persistence::{InMemoryStore, Repository, SqliteStore};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Platemart Server - HTTP API for the licence plate marketplace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, lots are kept in memory.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Insert a handful of demo lots at startup
    #[arg(long)]
    seed_demo: bool,
}

/// Application state shared across handlers.
///
/// Each request holds the lock for one logical operation, so writes are
/// atomic relative to a request.
#[derive(Clone)]
struct AppState {
    repository: Arc<Mutex<Box<dyn Repository>>>,
}

impl AppState {
    fn new(repository: Box<dyn Repository>) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { message } => {
                error!(error = %message, "Request failed with internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("Internal server error"),
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        let status: StatusCode = match rejection {
            JsonRejection::MissingJsonContentType(_) => rejection.status(),
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: rejection.body_text(),
        }
    }
}

/// Runs `operation` against the store on the blocking thread pool.
///
/// Seller registration hashes passwords with bcrypt, which is too slow for an
/// async worker. The store lock is held for the whole operation.
async fn run_blocking<T, F>(app_state: &AppState, operation: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce(&mut dyn Repository) -> Result<T, ApiError> + Send + 'static,
{
    let repository: Arc<Mutex<Box<dyn Repository>>> = Arc::clone(&app_state.repository);
    let joined: Result<Result<T, ApiError>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || {
            let mut guard = repository.blocking_lock();
            operation(&mut **guard)
        })
        .await;

    joined
        .map_err(|e| ApiError::Internal {
            message: format!("Blocking task failed: {e}"),
        })?
        .map_err(HttpError::from)
}

/// Handler for POST /api/lots.
async fn handle_create_lot(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<LotResponse>), HttpError> {
    debug!("Handling create_lot request");
    let Json(payload) = body?;

    let mut repository = app_state.repository.lock().await;
    let response: LotResponse =
        create_lot(&mut **repository, &payload, OffsetDateTime::now_utc())?;
    drop(repository);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST /api/lots/with-registration.
async fn handle_create_lot_with_registration(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLotWithRegistrationResponse>), HttpError> {
    debug!("Handling create_lot_with_registration request");
    let Json(payload) = body?;

    let response: CreateLotWithRegistrationResponse = run_blocking(&app_state, move |repository| {
        create_lot_with_registration(repository, &payload, OffsetDateTime::now_utc())
    })
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET /api/lots.
async fn handle_list_lots(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ListLotsQuery>,
) -> Result<Json<ListLotsResponse>, HttpError> {
    let mut repository = app_state.repository.lock().await;
    let response: ListLotsResponse = list_lots(&mut **repository, &params)?;
    drop(repository);

    Ok(Json(response))
}

/// Handler for GET /api/lots/{id}.
async fn handle_get_lot(
    AxumState(app_state): AxumState<AppState>,
    Path(lot_id): Path<i64>,
) -> Result<Json<LotInfo>, HttpError> {
    let mut repository = app_state.repository.lock().await;
    let lot: LotInfo = get_lot(&mut **repository, lot_id)?;
    drop(repository);

    Ok(Json(lot))
}

/// Handler for PATCH /api/lots/{id}.
async fn handle_update_lot(
    AxumState(app_state): AxumState<AppState>,
    Path(lot_id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<LotResponse>, HttpError> {
    debug!(lot_id, "Handling update_lot request");
    let Json(payload) = body?;

    let mut repository = app_state.repository.lock().await;
    let response: LotResponse =
        update_lot(&mut **repository, lot_id, &payload, OffsetDateTime::now_utc())?;
    drop(repository);

    Ok(Json(response))
}

/// Handler for DELETE /api/lots/{id}.
async fn handle_delete_lot(
    AxumState(app_state): AxumState<AppState>,
    Path(lot_id): Path<i64>,
) -> Result<Json<DeleteLotResponse>, HttpError> {
    debug!(lot_id, "Handling delete_lot request");

    let mut repository = app_state.repository.lock().await;
    let response: DeleteLotResponse = delete_lot(&mut **repository, lot_id)?;
    drop(repository);

    Ok(Json(response))
}

/// Handler for POST /api/users/register.
async fn handle_register_seller(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<RegisterSellerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterSellerResponse>), HttpError> {
    debug!("Handling register_seller request");
    let Json(req) = body?;

    let response: RegisterSellerResponse = run_blocking(&app_state, move |repository| {
        register_seller(repository, req, OffsetDateTime::now_utc())
    })
    .await?;

    info!(
        seller_id = response.seller_id,
        merged = response.merged,
        "Seller registration handled"
    );

    let status: StatusCode = if response.merged {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(response)))
}

/// Handler for GET /api/health.
#[allow(clippy::unused_async)]
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/lots", post(handle_create_lot).get(handle_list_lots))
        .route(
            "/api/lots/with-registration",
            post(handle_create_lot_with_registration),
        )
        .route(
            "/api/lots/{lot_id}",
            get(handle_get_lot)
                .patch(handle_update_lot)
                .delete(handle_delete_lot),
        )
        .route("/api/users/register", post(handle_register_seller))
        .with_state(app_state)
}

/// Lists a few lots so a fresh server has something to browse.
fn seed_demo_lots(repository: &mut dyn Repository) -> Result<usize, ApiError> {
    let demo: [Value; 4] = [
        json!({
            "series": "А777АА",
            "regionCode": "77",
            "price": 1_500_000,
            "sellerName": "Демо продавец",
            "description": "Номер в отличном состоянии",
        }),
        json!({
            "carNumber": { "series": "В123ОР", "regionCode": 197 },
            "price": "350000",
            "sellerName": "Демо продавец",
        }),
        json!({
            "firstLetter": "М", "firstDigit": "5", "secondDigit": "0", "thirdDigit": "5",
            "secondLetter": "Т", "thirdLetter": "Х",
            "regionId": 50,
            "price": 120_000,
            "fullName": "Демо продавец",
        }),
        json!({
            "series": "К384НС",
            "regionCode": "178",
            "price": 45_000,
            "sellerName": "Демо продавец",
        }),
    ];

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    for payload in &demo {
        create_lot(&mut *repository, payload, now)?;
    }
    Ok(demo.len())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Platemart Server");

    let mut repository: Box<dyn Repository> = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Box::new(SqliteStore::new_with_file(db_path)?)
    } else {
        info!("Using in-memory store");
        Box::new(InMemoryStore::new())
    };

    if args.seed_demo {
        let seeded: usize = seed_demo_lots(repository.as_mut())?;
        info!(seeded, "Seeded demo lots");
    }

    let app: Router = build_router(AppState::new(repository));

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
