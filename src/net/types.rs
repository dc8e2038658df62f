#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated portal user, as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Portal roles, spelled uppercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Employee,
    User,
}

/// Body for `PUT /api/auth/account`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateAccountRequest {
    pub username: String,
    pub email: String,
}

/// Profile as confirmed by the server after an update.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccountResponse {
    pub username: String,
    pub email: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/reset-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

/// Error body the auth endpoints attach to rejections. The `message`
/// field is not guaranteed to be present.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
