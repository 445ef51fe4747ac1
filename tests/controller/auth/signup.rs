use super::*;
use arc_portal::server::controller::auth::signup;

fn signup_dto(role: Role) -> SignupDto {
    SignupDto {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
        phone: None,
        address: Some("1 Shelter Lane".to_string()),
        role,
    }
}

#[tokio::test]
/// Expect 201 and no session after registering
async fn returns_created_without_logging_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_signup_endpoint(200, 1).build().await?;

    let result = signup(State(test.into_app_state()), Json(signup_dto(Role::Customer))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: MessageDto = json_body(resp).await;
    assert_eq!(body.message, "User registered successfully");

    let stored = SessionStore::new(test.session.clone()).current().await.unwrap();
    assert!(stored.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 for an admin registration without calling the backend
async fn rejects_admin_registration() -> Result<(), TestError> {
    let test = TestBuilder::new().with_signup_endpoint(201, 0).build().await?;

    let result = signup(State(test.into_app_state()), Json(signup_dto(Role::Admin))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 409 when the backend reports an existing account
async fn returns_conflict_for_existing_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_signup_endpoint(409, 1).build().await?;

    let result = signup(State(test.into_app_state()), Json(signup_dto(Role::Donor))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
