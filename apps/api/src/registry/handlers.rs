//! Axum route handlers for users, portfolios and portfolio sections.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::{Portfolio, SectionBody, SectionFields, User};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    pub message: &'static str,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub message: &'static str,
    pub portfolio: Portfolio,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<UserCreatedResponse>, AppError> {
    let user = state.store.create_user(user).await?;
    Ok(Json(UserCreatedResponse {
        message: "사용자가 등록되었습니다.",
        user,
    }))
}

/// GET /users
pub async fn handle_list_users(State(state): State<AppState>) -> Json<UserListResponse> {
    Json(UserListResponse {
        users: state.store.list_users().await,
    })
}

/// POST /portfolio
pub async fn handle_create_portfolio(
    State(state): State<AppState>,
    Json(portfolio): Json<Portfolio>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let portfolio = state.store.create_portfolio(portfolio).await?;
    Ok(Json(PortfolioResponse {
        message: "포트폴리오가 생성되었습니다.",
        portfolio,
    }))
}

/// GET /portfolio/:id
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let portfolio = state.store.get_portfolio(id).await?;
    Ok(Json(PortfolioResponse {
        message: "포트폴리오 조회 성공",
        portfolio,
    }))
}

/// POST /portfolio/:id/{profile,pr,skills,award,experience,project}
///
/// One handler per section kind, selected by `T`. The body is validated against the
/// section schema and echoed back under the kind's response key; nothing is stored
/// and the portfolio id is not looked up. A `portfolio_id` in the body must match the path.
pub async fn handle_create_section<T: SectionFields>(
    State(state): State<AppState>,
    Path(portfolio_id): Path<i64>,
    Json(body): Json<SectionBody<T>>,
) -> Result<Json<Value>, AppError> {
    let fields = body.into_fields(portfolio_id)?;
    let section = state.store.echo_section(portfolio_id, fields);

    let mut body = Map::new();
    body.insert(
        "message".to_string(),
        Value::from(T::KIND.created_message()),
    );
    body.insert(
        T::KIND.response_key().to_string(),
        serde_json::to_value(&section).map_err(anyhow::Error::from)?,
    );
    Ok(Json(Value::Object(body)))
}
