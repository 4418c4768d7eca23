//! Integration tests for bearer-protected endpoints

mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use common::{context, OTHER_PHONE, PHONE};
use fe_api::create_app;
use fe_core::domain::entities::account::Account;
use fe_core::services::{TokenService, TokenServiceConfig};
use fe_shared::JwtConfig;

async fn seeded_account(ctx: &common::TestContext, phone: &str) -> (Account, String) {
    let account = Account::new(phone);
    ctx.directory.insert(account.clone()).await;
    let token = ctx
        .tokens()
        .issue_access_token(&account.id, Some(phone))
        .unwrap()
        .token;
    (account, token)
}

#[actix_web::test]
async fn test_me_requires_header() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get("www-authenticate").unwrap(),
        "Bearer"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MISSING_CREDENTIALS");
}

#[actix_web::test]
async fn test_malformed_header_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    for header in ["Token abc", "Bearer", "Bearer a b"] {
        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "header {:?}", header);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "MALFORMED_AUTHORIZATION");
    }
}

#[actix_web::test]
async fn test_me_returns_account() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (account, token) = seeded_account(&ctx, PHONE).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user_id"], account.id);
    assert_eq!(body["data"]["phone_number"], PHONE);
}

#[actix_web::test]
async fn test_scheme_is_case_insensitive() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (_, token) = seeded_account(&ctx, PHONE).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_expired_token_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let account = Account::new(PHONE);
    ctx.directory.insert(account.clone()).await;

    let issued_at = Utc::now() - Duration::days(31);
    let token = ctx
        .tokens()
        .issue_access_token_at(&account.id, Some(PHONE), issued_at)
        .unwrap()
        .token;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_EXPIRED");
}

#[actix_web::test]
async fn test_foreign_signature_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let account = Account::new(PHONE);
    ctx.directory.insert(account.clone()).await;

    let foreign = TokenService::new(
        TokenServiceConfig::from_jwt_config(&JwtConfig::new("someone-elses-secret")).unwrap(),
    );
    let token = foreign
        .issue_access_token(&account.id, Some(PHONE))
        .unwrap()
        .token;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_deactivated_account_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (account, token) = seeded_account(&ctx, PHONE).await;
    ctx.directory.deactivate(&account.id).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_NOT_FOUND");
}

#[actix_web::test]
async fn test_owner_can_read_own_account() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (account, token) = seeded_account(&ctx, PHONE).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/account", account.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user_id"], account.id);
}

#[actix_web::test]
async fn test_other_users_account_forbidden() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (_, token) = seeded_account(&ctx, PHONE).await;
    let (other, _) = seeded_account(&ctx, OTHER_PHONE).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/account", other.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_login_token_opens_protected_routes() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(json!({ "phone_number": PHONE }))
        .to_request();
    test::call_service(&app, req).await;
    let code = ctx.gateway.last_code_for(PHONE).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-otp")
        .set_json(json!({ "phone_number": PHONE, "code": code }))
        .to_request();
    let session: Value = test::call_and_read_body_json(&app, req).await;
    let token = session["access_token"].as_str().unwrap();
    let user_id = session["user_id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/account", user_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_token_info_reports_expiry() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (account, token) = seeded_account(&ctx, PHONE).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/token-info")
        .set_json(json!({ "token": token }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user_id"], account.id);
    assert_eq!(body["data"]["is_expired"], false);
    assert_eq!(body["data"]["needs_refresh"], false);

    let expired = ctx
        .tokens()
        .issue_access_token_at(&account.id, None, Utc::now() - Duration::days(40))
        .unwrap()
        .token;
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/token-info")
        .set_json(json!({ "token": expired }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["is_expired"], true);
    assert_eq!(body["data"]["expires_in"], 0);
}

#[actix_web::test]
async fn test_token_info_rejects_garbage() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/token-info")
        .set_json(json!({ "token": "not-a-jwt" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}
