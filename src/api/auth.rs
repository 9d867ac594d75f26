//! Auth Endpoints
//!
//! Login and signup. Neither carries a bearer token.

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{CreateUserRequest, LoginResponse};

use super::{network, url};

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

/// POST /auth/login. Any failure collapses to the generic auth error so
/// the UI never reveals whether the email or the password was wrong.
pub async fn login(email: &str, password: &str) -> AppResult<LoginResponse> {
    let res = reqwest::Client::new()
        .post(url("/auth/login"))
        .json(&LoginArgs { email, password })
        .send()
        .await
        .map_err(|_| AppError::Auth)?;
    if !res.status().is_success() {
        return Err(AppError::Auth);
    }
    res.json::<LoginResponse>().await.map_err(network)
}

/// POST /users. The backend echoes the created user; the client only
/// cares that the call succeeded.
pub async fn signup(req: &CreateUserRequest) -> AppResult<()> {
    let res = reqwest::Client::new()
        .post(url("/users"))
        .json(req)
        .send()
        .await
        .map_err(network)?;
    if res.status().is_success() {
        Ok(())
    } else {
        Err(AppError::Network(format!(
            "Signup failed: HTTP {}",
            res.status().as_u16()
        )))
    }
}
