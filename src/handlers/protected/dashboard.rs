// handlers/protected/dashboard.rs - GET /api/dashboard handler

use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::middleware::AuthUser;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

/// GET /api/dashboard - Greeting for the signed-in user
///
/// Identity comes entirely from the verified token; no store access.
pub async fn dashboard_get(Extension(user): Extension<AuthUser>) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: format!("Welcome to your dashboard, {}", user.email),
        user_id: user.account_id,
    })
}
