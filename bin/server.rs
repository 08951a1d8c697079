// Reward Points Service - Web Server
// Thin REST adapter over the reward calculator (Axum)
//
// The adapter owns the transport mapping: InvalidInput -> 400,
// CustomerNotFound -> 404. The calculator itself never sees HTTP.

use axum::{
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use reward_points::{
    load_customers, load_transactions, InMemoryProvider, RewardCalculator, RewardError,
};

/// Shared application state
#[derive(Clone)]
struct AppState {
    calculator: Arc<RewardCalculator<InMemoryProvider>>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<serde_json::Value> {
    fn err(message: String) -> Self {
        Self {
            success: false,
            data: serde_json::Value::Null,
            error: Some(message),
        }
    }
}

/// Query parameters for the rewards endpoint. Kept as raw strings so the
/// handler can report missing or malformed dates as a 400, not a framework
/// rejection.
#[derive(Deserialize)]
struct RewardsQuery {
    start_date: Option<String>,
    end_date: Option<String>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/customers/:id/rewards?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD
async fn get_customer_rewards(
    State(state): State<AppState>,
    AxumPath(customer_id): AxumPath<String>,
    Query(query): Query<RewardsQuery>,
) -> Response {
    let start_date = match parse_query_date(query.start_date.as_deref(), "start_date") {
        Ok(date) => date,
        Err(response) => return response,
    };
    let end_date = match parse_query_date(query.end_date.as_deref(), "end_date") {
        Ok(date) => date,
        Err(response) => return response,
    };

    match state
        .calculator
        .compute_rewards(&customer_id, start_date, end_date)
    {
        Ok(summary) => {
            tracing::info!(
                customer_id = %summary.customer_id,
                %start_date,
                %end_date,
                total_points = summary.total_points,
                "reward summary generated"
            );
            (StatusCode::OK, Json(ApiResponse::ok(summary))).into_response()
        }
        Err(e) => {
            tracing::warn!(customer_id = %customer_id, error = %e, "reward computation rejected");
            let status = match e {
                RewardError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                RewardError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            };
            (status, Json(ApiResponse::err(e.to_string()))).into_response()
        }
    }
}

fn parse_query_date(raw: Option<&str>, param: &str) -> Result<NaiveDate, Response> {
    let raw = raw.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err(format!("missing query parameter: {}", param))),
        )
            .into_response()
    })?;

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err(format!(
                "{} must be a YYYY-MM-DD date, got '{}'",
                param, raw
            ))),
        )
            .into_response()
    })
}

// ============================================================================
// Main Server
// ============================================================================

fn build_provider() -> InMemoryProvider {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 3 {
        let provider = InMemoryProvider::new();

        let customers = load_customers(Path::new(&args[1])).expect("Failed to load customer CSV");
        for customer in customers {
            provider.add_customer(customer);
        }

        let transactions =
            load_transactions(Path::new(&args[2])).expect("Failed to load transaction CSV");
        for tx in transactions {
            provider.add_transaction(tx);
        }

        println!(
            "✓ Loaded {} customers, {} transactions from CSV",
            provider.customer_count(),
            provider.transaction_count()
        );
        provider
    } else {
        println!("No CSV files given, serving built-in demo data");
        InMemoryProvider::with_demo_data()
    }
}

fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/customers/:id/rewards", get(get_customer_rewards))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    println!("Reward Points Service - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let provider = build_provider();

    let state = AppState {
        calculator: Arc::new(RewardCalculator::new(provider)),
    };

    let addr =
        std::env::var("REWARDS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("\n✓ Server running on http://{}", addr);
    println!("   GET /api/health");
    println!("   GET /api/customers/:id/rewards?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app(state))
        .await
        .expect("Failed to start server");
}
