//! Backend API Bindings
//!
//! HTTP bindings to the TaskAsk REST backend, organized by domain.
//! Every authenticated call carries the session token as a bearer header.

mod admin;
mod auth;
mod employees;
mod notifications;
mod tasks;
mod teams;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

// Re-export all public items
pub use admin::*;
pub use auth::*;
pub use employees::*;
pub use notifications::*;
pub use tasks::*;
pub use teams::*;

/// Backend base path; the dev backend runs alongside the client
pub const BASE_URL: &str = "http://localhost:8080/api";

pub(crate) fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

pub(crate) fn network(err: reqwest::Error) -> AppError {
    AppError::Network(err.to_string())
}

fn check(res: reqwest::Response) -> AppResult<reqwest::Response> {
    if res.status().is_success() {
        Ok(res)
    } else {
        Err(AppError::Network(format!(
            "Request failed: HTTP {}",
            res.status().as_u16()
        )))
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> AppResult<T> {
    let res = reqwest::Client::new()
        .get(url(path))
        .bearer_auth(token)
        .send()
        .await
        .map_err(network)?;
    check(res)?.json::<T>().await.map_err(network)
}

pub(crate) async fn post_json<B, T>(path: &str, body: &B, token: &str) -> AppResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let res = reqwest::Client::new()
        .post(url(path))
        .bearer_auth(token)
        .json(body)
        .send()
        .await
        .map_err(network)?;
    check(res)?.json::<T>().await.map_err(network)
}

/// POST where the response body is irrelevant (or empty)
pub(crate) async fn post_unit<B: Serialize + ?Sized>(
    path: &str,
    body: &B,
    token: &str,
) -> AppResult<()> {
    let res = reqwest::Client::new()
        .post(url(path))
        .bearer_auth(token)
        .json(body)
        .send()
        .await
        .map_err(network)?;
    check(res).map(|_| ())
}

/// Body-less POST (e.g. mark-read)
pub(crate) async fn post_empty(path: &str, token: &str) -> AppResult<()> {
    let res = reqwest::Client::new()
        .post(url(path))
        .bearer_auth(token)
        .send()
        .await
        .map_err(network)?;
    check(res).map(|_| ())
}

pub(crate) async fn patch_json<B, T>(path: &str, body: &B, token: &str) -> AppResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let res = reqwest::Client::new()
        .patch(url(path))
        .bearer_auth(token)
        .json(body)
        .send()
        .await
        .map_err(network)?;
    check(res)?.json::<T>().await.map_err(network)
}

pub(crate) async fn delete_unit(path: &str, token: &str) -> AppResult<()> {
    let res = reqwest::Client::new()
        .delete(url(path))
        .bearer_auth(token)
        .send()
        .await
        .map_err(network)?;
    check(res).map(|_| ())
}
