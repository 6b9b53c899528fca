//! HTTP handler for the recent alerts feed

use axum::{extract::State, Json};
use shared::RecentAlerts;

use crate::services::AlertService;
use crate::AppState;

/// Alerts logged today and yesterday
/// GET /alerts/recent
pub async fn get_recent_alerts(State(state): State<AppState>) -> Json<RecentAlerts> {
    let service = AlertService::new(state.companion.clone());
    Json(service.recent().await)
}
