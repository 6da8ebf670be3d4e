//! Handlers for `/users` and `/users/{id}`.
//!
//! A missing user is not an error here: lookups and deletes of an unknown id
//! answer `200` with `No User ID:{id}`, updates answer `204`. Clients rely on
//! these codes, so they stay as they are.

use tracing::{debug, info};

use super::error::ApiError;
use super::model::{User, UserInput};
use super::store::UserStore;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::status::Status;

/// `GET /users` — every stored user as a JSON array, `[]` when empty.
pub async fn list(_req: Request, store: UserStore) -> Json<Vec<User>> {
    Json(store.list())
}

/// `POST /users` — `201` with the created user.
pub async fn create(req: Request, store: UserStore) -> Result<(Status, Json<User>), ApiError> {
    let user = store.create(input(&req)?);
    info!(id = user.id, "user created");
    Ok((Status::Created, Json(user)))
}

/// `GET /users/{id}`
pub async fn show(req: Request, store: UserStore) -> Result<Response, ApiError> {
    let id = user_id(&req)?;
    Ok(match store.get(id) {
        Some(user) => Json(user).into_response(),
        None => no_user(id),
    })
}

/// `PUT /users/{id}` — partial merge, `200` with no body.
///
/// An unknown id answers `204`. A 204 cannot carry a body, so the
/// "No User ID" message only reaches the log.
pub async fn update(req: Request, store: UserStore) -> Result<Response, ApiError> {
    let id = user_id(&req)?;
    match store.update(id, &input(&req)?) {
        Some(_) => {
            info!(id, "user updated");
            Ok(Response::status(Status::Ok))
        }
        None => {
            debug!("No User ID:{id}");
            Ok(Response::status(Status::NoContent))
        }
    }
}

/// `DELETE /users/{id}`
pub async fn destroy(req: Request, store: UserStore) -> Result<Response, ApiError> {
    let id = user_id(&req)?;
    Ok(match store.remove(id) {
        Some(_) => {
            info!(id, "user deleted");
            Response::text(format!("Deleted User ID:{id}"))
        }
        None => no_user(id),
    })
}

fn no_user(id: u64) -> Response {
    Response::text(format!("No User ID:{id}"))
}

/// A `null` body decodes as an input with every field empty.
fn input(req: &Request) -> Result<UserInput, ApiError> {
    Ok(req.json::<Option<UserInput>>()?.unwrap_or_default())
}

/// The `{id}` token must be `[0-9a-z]+` to match the route at all.
fn user_id(req: &Request) -> Result<u64, ApiError> {
    let token = req.param("id").unwrap_or_default();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()) {
        return Err(ApiError::UnmatchedId(token.to_owned()));
    }
    Ok(token.parse()?)
}
