use actix_web::{web, HttpResponse};
use fe_shared::ApiResponse;

use crate::dto::AccountResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/auth/me
///
/// Requires authentication.
pub async fn me(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let account = state.auth_service.current_account(&auth).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(AccountResponse::from(account))))
}
