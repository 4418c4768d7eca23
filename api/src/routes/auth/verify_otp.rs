use actix_web::{web, HttpResponse};
use fe_shared::phone::mask_phone_number;

use crate::dto::VerifyOtpRequest;
use crate::handlers::{validate_request, ApiError};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/verify-otp
///
/// Checks the code and, on success, returns a bearer session. The first
/// successful login for a phone number creates its account.
///
/// # Request Body
///
/// ```json
/// { "phone_number": "+15551234567", "code": "482913" }
/// ```
///
/// # Response
///
/// ```json
/// {
///     "user_id": "8d7c...",
///     "phone_number": "+15551234567",
///     "is_new_user": true,
///     "access_token": "eyJ...",
///     "token_type": "Bearer",
///     "expires_in": 2592000
/// }
/// ```
///
/// ## Errors
/// - 400 `OTP_INVALID`, `OTP_EXPIRED`, `OTP_NOT_ISSUED`, `PHONE_INVALID`
/// - 401 `ACCOUNT_NOT_FOUND` for a deactivated account
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_request(&request.0)?;

    tracing::info!(
        phone = %mask_phone_number(&request.phone_number),
        "Processing verify-otp request"
    );

    let session = state
        .auth_service
        .verify_code(&request.phone_number, &request.code)
        .await?;

    Ok(HttpResponse::Ok().json(session))
}
