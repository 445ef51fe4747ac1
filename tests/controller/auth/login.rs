use super::*;
use arc_portal::server::controller::auth::login;

#[tokio::test]
/// Expect 200 with the session and the session stored for the browser
async fn returns_session_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("abc", "A", "a@x.com", "DONOR"), 1)
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(login_dto()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: SessionDto = json_body(resp).await;
    assert_eq!(
        body,
        SessionDto {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            role: Role::Donor,
        }
    );

    let stored = SessionStore::new(test.session.clone())
        .current()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.credential().expose(), "abc");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 and no session when the backend rejects the credentials
async fn returns_unauthorized_on_rejected_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_error(401, 1).build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(login_dto()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Invalid email or password");

    let stored = SessionStore::new(test.session.clone()).current().await.unwrap();
    assert!(stored.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 for a forbidden login as well
async fn returns_unauthorized_on_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_error(403, 1).build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(login_dto()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 502 and no session when the login response lacks a role
async fn returns_bad_gateway_on_incomplete_response() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(
            serde_json::json!({ "token": "abc", "name": "A", "email": "a@x.com" }),
            1,
        )
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(login_dto()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let stored = SessionStore::new(test.session.clone()).current().await.unwrap();
    assert!(stored.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 400 without calling the backend when the password is empty
async fn returns_bad_request_on_empty_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_error(401, 0).build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(LoginDto {
            email: "a@x.com".to_string(),
            password: String::new(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 503 when the backend cannot be reached
async fn returns_service_unavailable_when_backend_down() -> Result<(), Error> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = arc_portal::server::model::app::AppState {
        backend: arc_portal::server::backend::BackendClient::new("http://127.0.0.1:1")?,
    };

    let result = login(State(state), test.session.clone(), Json(login_dto())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    Ok(())
}
