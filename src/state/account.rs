#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::net::error::ApiError;
use crate::net::types::{AccountResponse, ResetPasswordRequest, UpdateAccountRequest, User};
use crate::state::status::StatusMessages;

/// Form state for the account settings page: the editable profile plus
/// the transient password-change fields, each form with its own status
/// pair.
#[derive(Clone, Debug, Default)]
pub struct AccountForm {
    pub username: String,
    pub email: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub update_status: StatusMessages,
    pub password_status: StatusMessages,
}

impl AccountForm {
    /// Copy the profile fields from the session's current user.
    pub fn sync_from(&mut self, user: &User) {
        self.username = user.username.clone();
        self.email = user.email.clone();
    }

    /// Request body for a profile update.
    pub fn update_request(&self) -> UpdateAccountRequest {
        UpdateAccountRequest {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    /// Record the outcome of a profile update.
    ///
    /// On success the server's copy of the profile wins, even if the
    /// user kept editing while the request was in flight. On failure
    /// the error text prefers the server's message, then the transport
    /// detail, then a generic fallback.
    pub fn apply_update(&mut self, outcome: Result<AccountResponse, ApiError>) {
        match outcome {
            Ok(account) => {
                self.username = account.username;
                self.email = account.email;
                self.update_status
                    .set_success("Account information updated successfully!");
            }
            Err(err) => {
                let text = match err {
                    ApiError::Rejected {
                        message: Some(message),
                        ..
                    } => message,
                    ApiError::Transport(detail) if !detail.is_empty() => detail,
                    _ => "Failed to update account".to_owned(),
                };
                self.update_status.set_error(text);
            }
        }
    }

    /// Validate the password fields and build the change request.
    ///
    /// Returns `None` on a confirmation mismatch, recording the error
    /// without touching the network. The request reuses the password
    /// reset endpoint with the profile email; the current-password
    /// field is collected but never transmitted.
    pub fn begin_password_change(&mut self) -> Option<ResetPasswordRequest> {
        if self.new_password != self.confirm_password {
            self.password_status.set_error("Passwords do not match");
            return None;
        }
        Some(ResetPasswordRequest {
            email: self.email.clone(),
            new_password: self.new_password.clone(),
        })
    }

    /// Record the outcome of a password change. Success wipes the
    /// transient password fields; failure reports a generic message
    /// with no server detail.
    pub fn apply_password_change(&mut self, outcome: Result<(), ApiError>) {
        match outcome {
            Ok(()) => {
                self.password_status
                    .set_success("Password changed successfully!");
                self.current_password.clear();
                self.new_password.clear();
                self.confirm_password.clear();
            }
            Err(_) => {
                self.password_status.set_error("Failed to change password");
            }
        }
    }
}
