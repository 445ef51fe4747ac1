use super::*;
use arc_portal::server::controller::auth::{get_session, login, logout};

#[tokio::test]
/// Expect 404 for a guest
async fn returns_not_found_for_guest() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_session(test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "No active session");

    Ok(())
}

#[tokio::test]
/// Expect the session established by login, then 404 again after logout
async fn follows_login_and_logout() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("abc", "A", "a@x.com", "CUSTOMER"), 1)
        .build()
        .await?;
    let state = test.into_app_state();

    login(State(state.clone()), test.session.clone(), Json(login_dto()))
        .await
        .unwrap();

    let resp = get_session(test.session.clone())
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: SessionDto = json_body(resp).await;
    assert_eq!(body.role, Role::Customer);

    logout(State(state), test.session.clone()).await.unwrap();

    let resp = get_session(test.session.clone())
        .await
        .err()
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the credential never to be part of the session response
async fn does_not_expose_credential() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("secret-token", "A", "a@x.com", "DONOR"), 1)
        .build()
        .await?;

    login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(login_dto()),
    )
    .await
    .unwrap();

    let resp = get_session(test.session.clone())
        .await
        .unwrap()
        .into_response();
    let body: serde_json::Value = json_body(resp).await;

    assert!(!body.to_string().contains("secret-token"));

    Ok(())
}
