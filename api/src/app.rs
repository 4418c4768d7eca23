//! Application factory
//!
//! Builds the actix-web application around an [`AppState`]. Used by the
//! binary and by integration tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::JwtAuth;
use crate::routes::{auth, health, users};
use crate::state::AppState;

/// Register all routes on a service config
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/send-otp", web::post().to(auth::send_otp))
                        .route("/verify-otp", web::post().to(auth::verify_otp))
                        .route("/token-info", web::post().to(auth::token_info))
                        .service(
                            web::resource("/me")
                                .wrap(JwtAuth::new())
                                .route(web::get().to(auth::me)),
                        ),
                )
                .service(
                    web::resource("/users/{user_id}/account")
                        .wrap(JwtAuth::new())
                        .route(web::get().to(users::get_account)),
                ),
        );
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .configure(configure)
        .default_service(web::route().to(not_found))
}
