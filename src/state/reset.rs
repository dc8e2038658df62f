#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use crate::net::error::ApiError;
use crate::net::types::ResetPasswordRequest;
use crate::state::status::StatusMessages;

/// Form state for the password reset page.
#[derive(Clone, Debug, Default)]
pub struct ResetForm {
    pub email: String,
    pub new_password: String,
    pub status: StatusMessages,
}

impl ResetForm {
    /// Request body for a reset attempt.
    pub fn request(&self) -> ResetPasswordRequest {
        ResetPasswordRequest {
            email: self.email.clone(),
            new_password: self.new_password.clone(),
        }
    }

    /// Record the outcome of a reset attempt.
    pub fn apply(&mut self, outcome: Result<(), ApiError>) {
        match outcome {
            Ok(()) => self
                .status
                .set_success("Password reset successful! Redirecting to login..."),
            Err(err) => self.status.set_error(
                err.server_message()
                    .unwrap_or_else(|| "Password reset failed".to_owned()),
            ),
        }
    }
}
