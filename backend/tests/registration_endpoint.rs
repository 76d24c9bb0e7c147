//! End-to-end coverage for the registration endpoint wired to the in-memory
//! registration adapter, mirroring the server binary's composition.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use conduit_backend::inbound::http::health::{HealthState, live, ready};
use conduit_backend::inbound::http::state::HttpState;
use conduit_backend::inbound::http::users::register;
use conduit_backend::outbound::memory::InMemoryRegistrationService;

fn test_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(web::Data::new(state))
        .service(web::scope("/api").service(register))
        .service(ready)
        .service(live)
}

async fn post_registration(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    username: &str,
    email: &str,
) -> actix_web::dev::ServiceResponse {
    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({
            "user": { "username": username, "email": email, "password": "jakejake" }
        }))
        .to_request();
    actix_test::call_service(app, request).await
}

#[actix_web::test]
async fn registering_a_new_user_returns_the_created_profile() {
    let state = HttpState::new(Arc::new(InMemoryRegistrationService::new()));
    let app = actix_test::init_service(test_app(state, web::Data::new(HealthState::new()))).await;

    let response = post_registration(&app, "jake", "jake@jake.jake").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);
    assert_eq!(
        content_type.as_deref(),
        Some("application/json; charset=utf-8")
    );

    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("response JSON");
    let user = value.get("user").expect("user envelope");
    assert_eq!(user.get("username").and_then(Value::as_str), Some("jake"));
    assert_eq!(
        user.get("email").and_then(Value::as_str),
        Some("jake@jake.jake")
    );
    assert!(
        user.get("token")
            .and_then(Value::as_str)
            .is_some_and(|token| !token.is_empty()),
        "a token is issued on registration"
    );
    assert_eq!(user.get("bio"), Some(&Value::Null));
    assert_eq!(user.get("image"), Some(&Value::Null));
}

#[actix_web::test]
async fn registering_a_taken_username_conflicts() {
    let state = HttpState::new(Arc::new(InMemoryRegistrationService::new()));
    let app = actix_test::init_service(test_app(state, web::Data::new(HealthState::new()))).await;

    let first = post_registration(&app, "jake", "jake@jake.jake").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_registration(&app, "jake", "other@jake.jake").await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = actix_test::read_body(second).await;
    let body = String::from_utf8(body.to_vec()).expect("body is UTF-8");
    assert!(body.contains("The specified user already exists."));
}

#[actix_web::test]
async fn registering_a_taken_email_conflicts() {
    let state = HttpState::new(Arc::new(InMemoryRegistrationService::new()));
    let app = actix_test::init_service(test_app(state, web::Data::new(HealthState::new()))).await;

    let first = post_registration(&app, "jake", "jake@jake.jake").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_registration(&app, "jacob", "jake@jake.jake").await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn readiness_probe_flips_once_marked_ready() {
    let state = HttpState::new(Arc::new(InMemoryRegistrationService::new()));
    let health_state = web::Data::new(HealthState::new());
    let app = actix_test::init_service(test_app(state, health_state.clone())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    health_state.mark_ready();
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
