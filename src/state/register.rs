#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::error::ApiError;
use crate::net::types::RegisterRequest;
use crate::state::status::StatusMessages;

/// Form state for the registration page.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub status: StatusMessages,
}

impl RegisterForm {
    /// Request body for a registration attempt.
    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Record the outcome of a registration attempt.
    ///
    /// Fields stay in place on success; the page navigates to the
    /// login route after the redirect delay instead of resetting the
    /// form. Failures surface the server's message when it sent one.
    pub fn apply(&mut self, outcome: Result<(), ApiError>) {
        match outcome {
            Ok(()) => self
                .status
                .set_success("Registration successful! Redirecting to login..."),
            Err(err) => self.status.set_error(
                err.server_message()
                    .unwrap_or_else(|| "Registration failed".to_owned()),
            ),
        }
    }
}
