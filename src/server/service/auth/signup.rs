use dioxus_logger::tracing;

use crate::{
    model::auth::SignupDto,
    server::{
        backend::BackendClient,
        error::{auth::AuthError, Error},
    },
};

pub(super) const MIN_PASSWORD_LEN: usize = 6;
const MAX_PHONE_LEN: usize = 10;
const MAX_ADDRESS_LEN: usize = 255;

/// Service for registering new portal accounts.
pub struct SignupService<'a> {
    backend: &'a BackendClient,
}

impl<'a> SignupService<'a> {
    pub fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Validates the form and registers the account with the backend.
    ///
    /// Registering never logs the user in, they are expected to log in afterwards.
    pub async fn signup(&self, dto: SignupDto) -> Result<(), Error> {
        let dto = normalize(dto);
        validate(&dto)?;

        self.backend.signup(&dto).await?;

        tracing::info!(email = %dto.email, role = %dto.role, "Account registered");

        Ok(())
    }
}

fn normalize(dto: SignupDto) -> SignupDto {
    let trimmed = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    SignupDto {
        name: dto.name.trim().to_string(),
        email: dto.email.trim().to_string(),
        password: dto.password,
        phone: trimmed(dto.phone),
        address: trimmed(dto.address),
        role: dto.role,
    }
}

fn validate(dto: &SignupDto) -> Result<(), AuthError> {
    let invalid =
        |message: &str| -> Result<(), AuthError> { Err(AuthError::Validation(message.to_string())) };

    if dto.name.is_empty() {
        return invalid("Name is required");
    }
    if dto.email.is_empty() {
        return invalid("Email is required");
    }
    if !is_plausible_email(&dto.email) {
        return invalid("Invalid email format");
    }
    if dto.password.chars().count() < MIN_PASSWORD_LEN {
        return invalid("Password must be at least 6 characters");
    }
    if dto
        .phone
        .as_ref()
        .is_some_and(|phone| phone.chars().count() > MAX_PHONE_LEN)
    {
        return invalid("Phone number must be max 10 digits");
    }
    if dto
        .address
        .as_ref()
        .is_some_and(|address| address.chars().count() > MAX_ADDRESS_LEN)
    {
        return invalid("Address too long");
    }
    if !dto.role.is_self_service() {
        return invalid("Accounts can only be registered as a customer or donor");
    }

    Ok(())
}

pub(super) fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}
