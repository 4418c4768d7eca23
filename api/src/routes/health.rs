use actix_web::{web, HttpResponse};
use chrono::Utc;
use fe_shared::{HealthResponse, HealthStatus};

use crate::state::AppState;

/// Handler for GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: HealthStatus::Healthy,
        service: "foodeasy-auth".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sms_provider: state.sms_provider.to_string(),
        account_directory: state.account_directory.to_string(),
        timestamp: Utc::now(),
    })
}
