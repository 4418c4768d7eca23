//! Bearer authentication middleware for protected endpoints.
//!
//! Every request passing through [`JwtAuth`] is run through the
//! [`SessionGate`](fe_core::services::SessionGate). Rejected requests never
//! reach the handler; accepted ones carry an [`AuthContext`] in their
//! extensions.

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use fe_core::domain::entities::token::SessionIdentity;
use fe_core::errors::{AuthError, DomainError};
use fe_core::services::verify_owner;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    ops::Deref,
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::error::ApiError;
use crate::state::AppState;

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext(pub SessionIdentity);

impl AuthContext {
    /// Account id of the caller
    pub fn user_id(&self) -> &str {
        &self.0.subject
    }

    /// Fails with `Forbidden` unless the caller is `user_id`
    pub fn ensure_owner(&self, user_id: &str) -> Result<(), DomainError> {
        verify_owner(&self.0, user_id)
    }
}

impl Deref for AuthContext {
    type Target = SessionIdentity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bearer authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Bearer authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let gate = match req.app_data::<web::Data<AppState>>() {
                Some(state) => state.session_gate.clone(),
                None => {
                    return Err(ApiError(DomainError::Internal {
                        message: "application state is not configured".to_string(),
                    })
                    .into())
                }
            };

            // A header that is not valid visible ASCII cannot hold a bearer token.
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .map(|value| value.to_str().unwrap_or_default().to_string());

            let identity = gate
                .authenticate(header.as_deref())
                .await
                .map_err(ApiError)?;

            req.extensions_mut().insert(AuthContext(identity));

            service.call(req).await
        })
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError(AuthError::MissingCredentials.into()).into());

        ready(result)
    }
}
