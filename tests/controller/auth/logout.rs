use super::*;
use arc_portal::{
    model::session::{Credential, Identity},
    server::controller::auth::logout,
};

#[tokio::test]
/// Expect 200 and the session cleared after logout
async fn clears_session_on_logout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let store = SessionStore::new(test.session.clone());
    store
        .login(
            Identity {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                role: Role::Admin,
            },
            Credential::new("abc"),
        )
        .await
        .unwrap();

    let result = logout(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: MessageDto = json_body(resp).await;
    assert_eq!(body.message, "Logged out successfully");

    assert!(store.current().await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 200 even when there is no session to clear
async fn succeeds_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
