use actix_web::{web, HttpResponse};
use fe_shared::ApiResponse;

use crate::dto::TokenInfoRequest;
use crate::handlers::{validate_request, ApiError};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/token-info
///
/// Reports issue and expiry times for a token, expired or not, so a client
/// can decide whether to log in again. The signature must still be valid.
pub async fn token_info(
    state: web::Data<AppState>,
    request: web::Json<TokenInfoRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_request(&request.0)?;

    let info = state.auth_service.token_info(&request.token)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(info)))
}
