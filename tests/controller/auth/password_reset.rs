use super::*;
use arc_portal::{
    model::auth::{ForgotPasswordDto, ResetPasswordDto, VerifyOtpDto},
    server::controller::auth::{forgot_password, reset_password, verify_otp},
};

const EMAIL: &str = "a@x.com";

fn reset_dto(password: &str, confirm_password: &str) -> ResetPasswordDto {
    ResetPasswordDto {
        email: EMAIL.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    }
}

#[tokio::test]
/// Expect 200 once the backend has mailed the code
async fn sends_code_for_registered_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_forgot_password_endpoint(EMAIL, 200, 1)
        .build()
        .await?;

    let result = forgot_password(
        State(test.into_app_state()),
        Json(ForgotPasswordDto {
            email: EMAIL.to_string(),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: MessageDto = json_body(resp).await;
    assert_eq!(body.message, "OTP sent to your email");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 when the backend does not know the email
async fn returns_not_found_for_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_forgot_password_endpoint(EMAIL, 404, 1)
        .build()
        .await?;

    let result = forgot_password(
        State(test.into_app_state()),
        Json(ForgotPasswordDto {
            email: EMAIL.to_string(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 200 for a code the backend accepts
async fn verifies_accepted_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_verify_otp_endpoint(EMAIL, "123456", 200, 1)
        .build()
        .await?;

    let result = verify_otp(
        State(test.into_app_state()),
        Json(VerifyOtpDto {
            email: EMAIL.to_string(),
            otp: "123456".to_string(),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: MessageDto = json_body(resp).await;
    assert_eq!(body.message, "OTP verified");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 when the backend rejects a wrong or expired code
async fn rejects_wrong_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_verify_otp_endpoint(EMAIL, "000000", 400, 1)
        .build()
        .await?;

    let result = verify_otp(
        State(test.into_app_state()),
        Json(VerifyOtpDto {
            email: EMAIL.to_string(),
            otp: "000000".to_string(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 200 and no session after changing the password
async fn changes_password_without_logging_in() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_change_password_endpoint(EMAIL, 200, 1)
        .build()
        .await?;

    let result = reset_password(
        State(test.into_app_state()),
        Json(reset_dto("secret2", "secret2")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: MessageDto = json_body(resp).await;
    assert_eq!(body.message, "Password changed successfully");

    let stored = SessionStore::new(test.session.clone()).current().await.unwrap();
    assert!(stored.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 with the mismatch message without calling the backend
async fn rejects_mismatched_passwords() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_change_password_endpoint(EMAIL, 200, 0)
        .build()
        .await?;

    let result = reset_password(
        State(test.into_app_state()),
        Json(reset_dto("secret2", "secret3")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Passwords do not match");
    test.assert_mocks();

    Ok(())
}
