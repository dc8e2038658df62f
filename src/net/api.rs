//! REST calls to the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): inert stubs, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses decode the server's error body into
//! [`ApiError::Rejected`]; anything below HTTP maps to
//! [`ApiError::Transport`]. Callers turn both into per-form status
//! messages rather than propagating them.

#![allow(clippy::unused_async)]

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::ErrorBody;
use super::types::{
    AccountResponse, RegisterRequest, ResetPasswordRequest, UpdateAccountRequest, User,
};

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Update the current user's profile via `PUT /api/auth/account`.
///
/// The response body echoes the stored profile, which callers treat as
/// authoritative.
///
/// # Errors
///
/// Returns [`ApiError`] when the server rejects the update or the
/// request fails outright.
pub async fn update_account(req: &UpdateAccountRequest) -> Result<AccountResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/api/auth/account")
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<AccountResponse>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create a new account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns [`ApiError`] when registration is rejected or the request
/// fails outright.
pub async fn register(req: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Set a new password via `POST /api/auth/reset-password`.
///
/// Used by the reset page and by the account-settings password form,
/// which posts here directly instead of going through the account
/// update path.
///
/// # Errors
///
/// Returns [`ApiError`] when the server rejects the change or the
/// request fails outright.
pub async fn reset_password(req: &ResetPasswordRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/reset-password")
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Decode the error body of a rejected response.
#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::Rejected { status, message }
}
