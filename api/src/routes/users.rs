use actix_web::{web, HttpResponse};
use fe_shared::ApiResponse;

use crate::dto::AccountResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/users/{user_id}/account
///
/// Requires authentication; callers may only read their own account.
pub async fn get_account(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    auth.ensure_owner(&user_id)?;

    let account = state.auth_service.current_account(&auth).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(AccountResponse::from(account))))
}
