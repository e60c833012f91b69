//! REST helpers for the rating, comment and admin endpoints.
//!
//! In the browser (feature `csr`) these issue real requests via `gloo-net`.
//! Native builds get stubs that fail with a transport error, so components
//! compile and unit tests run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, RequestError>`. Non-2xx answers are
//! classified by status with the body's `detail` string preserved; callers
//! turn the error into a notice and never retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use ratings::context::ContextKey;
use ratings::error::RequestError;
use ratings::evaluation::{Comment, UserRatings};
use ratings::wire::{DifficultyRatingResponse, MessageResponse, QualityRatingResponse};

#[cfg(feature = "csr")]
use gloo_net::http::{Request, Response};
#[cfg(feature = "csr")]
use ratings::wire::{CommentResponse, CommentUpdate};
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

/// Form pairs posted as `application/x-www-form-urlencoded`.
pub type FormFields = Vec<(String, String)>;

#[cfg(any(test, feature = "csr"))]
fn quality_endpoint(game_id: i64) -> String {
    format!("/game/{game_id}/rate_quality")
}

#[cfg(any(test, feature = "csr"))]
fn difficulty_endpoint(game_id: i64) -> String {
    format!("/game/{game_id}/rate_difficulty")
}

#[cfg(any(test, feature = "csr"))]
fn difficulty_retract_endpoint(game_id: i64, key: ContextKey) -> String {
    format!("{}?{}", difficulty_endpoint(game_id), ratings::form::difficulty_delete_query(key))
}

#[cfg(any(test, feature = "csr"))]
fn my_ratings_endpoint(game_id: i64) -> String {
    format!("/api/v1/games/{game_id}/my-ratings")
}

#[cfg(any(test, feature = "csr"))]
fn comments_endpoint(game_id: i64) -> String {
    format!("/api/v1/games/{game_id}/comments")
}

#[cfg(any(test, feature = "csr"))]
fn comment_endpoint(comment_id: i64) -> String {
    format!("/api/v1/comments/{comment_id}")
}

#[cfg(any(test, feature = "csr"))]
fn admin_game_endpoint(game_id: i64) -> String {
    format!("/admin/game/{game_id}")
}

#[cfg(any(test, feature = "csr"))]
fn comment_fields(content: &str, display_name: Option<&str>) -> FormFields {
    let mut fields = vec![("content".to_owned(), content.to_owned())];
    if let Some(name) = display_name {
        fields.push(("user_name".to_owned(), name.to_owned()));
    }
    fields
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> RequestError {
    RequestError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn transport(err: gloo_net::Error) -> RequestError {
    RequestError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
async fn check(resp: Response) -> Result<Response, RequestError> {
    if resp.ok() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let err = RequestError::from_status(resp.status(), &body);
    log::warn!("{} {} -> {err}", resp.status(), resp.url());
    Err(err)
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, RequestError> {
    let resp = check(resp).await?;
    resp.json::<T>().await.map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
fn form_body(fields: &[(String, String)]) -> Result<web_sys::UrlSearchParams, RequestError> {
    let params = web_sys::UrlSearchParams::new()
        .map_err(|_| RequestError::Transport("cannot build form body".to_owned()))?;
    for (name, value) in fields {
        params.append(name, value);
    }
    Ok(params)
}

#[cfg(feature = "csr")]
async fn post_form(url: &str, fields: &[(String, String)]) -> Result<Response, RequestError> {
    Request::post(url)
        .body(form_body(fields)?)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)
}

/// Submit a quality rating via `POST /game/{id}/rate_quality`.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure or a non-2xx answer.
pub async fn submit_quality(game_id: i64, fields: FormFields) -> Result<QualityRatingResponse, RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_form(&quality_endpoint(game_id), &fields).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (game_id, fields);
        Err(unavailable())
    }
}

/// Retract the viewer's quality rating via `DELETE /game/{id}/rate_quality`.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure or a non-2xx answer.
pub async fn retract_quality(game_id: i64) -> Result<QualityRatingResponse, RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = Request::delete(&quality_endpoint(game_id)).send().await.map_err(transport)?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = game_id;
        Err(unavailable())
    }
}

/// Submit a difficulty rating via `POST /game/{id}/rate_difficulty`.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure or a non-2xx answer.
pub async fn submit_difficulty(game_id: i64, fields: FormFields) -> Result<DifficultyRatingResponse, RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_form(&difficulty_endpoint(game_id), &fields).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (game_id, fields);
        Err(unavailable())
    }
}

/// Retract the viewer's difficulty rating for one context.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure or a non-2xx answer.
pub async fn retract_difficulty(game_id: i64, key: ContextKey) -> Result<DifficultyRatingResponse, RequestError> {
    #[cfg(feature = "csr")]
    {
        let url = difficulty_retract_endpoint(game_id, key);
        let resp = Request::delete(&url).send().await.map_err(transport)?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (game_id, key);
        Err(unavailable())
    }
}

/// Fetch the viewer's own ratings for a game.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure or a non-2xx answer.
pub async fn fetch_my_ratings(game_id: i64) -> Result<UserRatings, RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = Request::get(&my_ratings_endpoint(game_id)).send().await.map_err(transport)?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = game_id;
        Err(unavailable())
    }
}

/// Post a new comment. `display_name` is sent as `user_name` when given.
///
/// # Errors
///
/// Returns [`RequestError::Unauthorized`] without a session, or another
/// [`RequestError`] on failure.
pub async fn post_comment(game_id: i64, content: String, display_name: Option<String>) -> Result<Comment, RequestError> {
    #[cfg(feature = "csr")]
    {
        let fields = comment_fields(&content, display_name.as_deref());
        let resp = post_form(&comments_endpoint(game_id), &fields).await?;
        decode::<CommentResponse>(resp).await.map(|r| r.comment)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (game_id, content, display_name);
        Err(unavailable())
    }
}

/// Replace a comment's text via `PUT /api/v1/comments/{id}`.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure or a non-2xx answer.
pub async fn update_comment(comment_id: i64, content: String) -> Result<Comment, RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = Request::put(&comment_endpoint(comment_id))
            .json(&CommentUpdate { content })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode::<CommentResponse>(resp).await.map(|r| r.comment)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (comment_id, content);
        Err(unavailable())
    }
}

/// Delete a comment. The backend answers 204 on success.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure or a non-2xx answer.
pub async fn delete_comment(comment_id: i64) -> Result<(), RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = Request::delete(&comment_endpoint(comment_id)).send().await.map_err(transport)?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = comment_id;
        Err(unavailable())
    }
}

/// Delete a game (admin only) via `DELETE /admin/game/{id}`.
///
/// # Errors
///
/// Returns [`RequestError`] on transport failure or a non-2xx answer.
pub async fn delete_game(game_id: i64) -> Result<MessageResponse, RequestError> {
    #[cfg(feature = "csr")]
    {
        let resp = Request::delete(&admin_game_endpoint(game_id)).send().await.map_err(transport)?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = game_id;
        Err(unavailable())
    }
}
