//! End-to-end tests through the API router with an in-memory session layer, carrying the
//! session cookie between requests like a browser would.

use arc_portal::{
    model::{auth::SessionDto, role::Role},
    server::router::routes,
};
use arc_test_utils::prelude::*;
use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Request, StatusCode,
    },
    response::Response,
    Router,
};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{json_body, TestContextExt};

fn app(test: &TestContext) -> Router {
    let session = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    routes().with_state(test.into_app_state()).layer(session)
}

fn request(
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    };

    request.unwrap()
}

fn session_cookie(resp: &Response) -> String {
    let header = resp
        .headers()
        .get(SET_COOKIE)
        .expect("Response did not set a session cookie")
        .to_str()
        .unwrap();

    header.split(';').next().unwrap().to_string()
}

fn login_body() -> serde_json::Value {
    serde_json::json!({ "email": "a@x.com", "password": "secret1" })
}

#[tokio::test]
/// Expect a guest to have no session
async fn guest_has_no_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(request("GET", "/api/auth/session", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the session to survive across requests on the same cookie until logout
async fn session_persists_until_logout() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("abc", "A", "a@x.com", "DONOR"), 1)
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(request("POST", "/api/auth/login", None, Some(login_body())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);

    // Reloading the page checks the session with the stored cookie
    let resp = app
        .clone()
        .oneshot(request("GET", "/api/auth/session", Some(&cookie), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let session: SessionDto = json_body(resp).await;
    assert_eq!(session.role, Role::Donor);

    let resp = app
        .clone()
        .oneshot(request("POST", "/api/auth/logout", Some(&cookie), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(request("GET", "/api/auth/session", Some(&cookie), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect logging in on an existing cookie to issue a new session ID and retire the old one
async fn login_issues_new_session_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("abc", "A", "a@x.com", "DONOR"), 1)
        .with_login_endpoint(factory::login_response("def", "B", "b@x.com", "ADMIN"), 1)
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(request("POST", "/api/auth/login", None, Some(login_body())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let first_cookie = session_cookie(&resp);

    let resp = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/auth/login",
            Some(&first_cookie),
            Some(login_body()),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let second_cookie = session_cookie(&resp);

    assert_ne!(first_cookie, second_cookie);

    let resp = app
        .clone()
        .oneshot(request("GET", "/api/auth/session", Some(&first_cookie), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(request("GET", "/api/auth/session", Some(&second_cookie), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let session: SessionDto = json_body(resp).await;
    assert_eq!(session.role, Role::Admin);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a session to stay scoped to the cookie it was created for
async fn session_is_scoped_to_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("abc", "A", "a@x.com", "ADMIN"), 1)
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(request("POST", "/api/auth/login", None, Some(login_body())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(request("GET", "/api/auth/session", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the whole password recovery flow to pass through without creating a session
async fn password_recovery_flow() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_forgot_password_endpoint("a@x.com", 200, 1)
        .with_verify_otp_endpoint("a@x.com", "123456", 200, 1)
        .with_change_password_endpoint("a@x.com", 200, 1)
        .build()
        .await?;
    let app = app(&test);

    let steps = [
        ("/api/auth/forgot-password", serde_json::json!({ "email": "a@x.com" })),
        (
            "/api/auth/verify-otp",
            serde_json::json!({ "email": "a@x.com", "otp": "123456" }),
        ),
        (
            "/api/auth/reset-password",
            serde_json::json!({
                "email": "a@x.com",
                "password": "secret2",
                "confirm_password": "secret2",
            }),
        ),
    ];
    for (uri, body) in steps {
        let resp = app
            .clone()
            .oneshot(request("POST", uri, None, Some(body)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "{} failed", uri);
        assert!(resp.headers().get(SET_COOKIE).is_none());
    }
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to list the auth routes
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(request("GET", "/api/docs/openapi.json", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let doc: serde_json::Value = json_body(resp).await;
    for path in [
        "/api/auth/login",
        "/api/auth/signup",
        "/api/auth/logout",
        "/api/auth/session",
        "/api/auth/forgot-password",
        "/api/auth/verify-otp",
        "/api/auth/reset-password",
    ] {
        assert!(doc["paths"].get(path).is_some(), "{} missing from docs", path);
    }

    Ok(())
}
