use actix_web::{web, HttpResponse};
use fe_shared::phone::mask_phone_number;

use crate::dto::{SendOtpRequest, SendOtpResponse};
use crate::handlers::{validate_request, ApiError};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/send-otp
///
/// Generates a code for the phone number and sends it by SMS. Any code sent
/// earlier to the same number stops working.
///
/// # Request Body
///
/// ```json
/// { "phone_number": "+15551234567" }
/// ```
///
/// # Response
///
/// ```json
/// {
///     "success": true,
///     "message": "Verification code sent",
///     "expires_in": 600
/// }
/// ```
pub async fn send_otp(
    state: web::Data<AppState>,
    request: web::Json<SendOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_request(&request.0)?;

    tracing::info!(
        phone = %mask_phone_number(&request.phone_number),
        "Processing send-otp request"
    );

    let issued = state.auth_service.send_code(&request.phone_number).await?;

    Ok(HttpResponse::Ok().json(SendOtpResponse {
        success: true,
        message: "Verification code sent".to_string(),
        expires_in: issued.expires_in,
    }))
}
