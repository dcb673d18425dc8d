//! User endpoints

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{UserError, UserResult};
use crate::store::UserStore;
use crate::user::{User, UserId};

/// Router for user operations
pub fn router() -> Router<UserStore> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
}

/// Request body for creating a user
#[derive(Debug, Deserialize)]
struct CreateUser {
    #[serde(default)]
    name: String,
}

impl CreateUser {
    fn validate(self) -> UserResult<User> {
        if self.name.is_empty() {
            return Err(UserError::MissingName);
        }
        Ok(User::new(self.name))
    }
}

/// Response body for a created user
#[derive(Debug, Serialize)]
struct Created {
    id: i64,
}

/// Wire representation of a stored user
#[derive(Debug, Serialize)]
struct UserBody<'u> {
    name: &'u str,
}

impl<'u> From<&'u User> for UserBody<'u> {
    fn from(user: &'u User) -> Self {
        Self { name: user.name() }
    }
}

/// Create a user
async fn create_user(State(store): State<UserStore>, body: Bytes) -> UserResult<Response> {
    let request: CreateUser = serde_json::from_slice(&body).map_err(UserError::InvalidBody)?;
    let user = request.validate()?;

    let id = store.create(user);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{id}"))],
        Json(Created { id: id.get() }),
    )
        .into_response())
}

/// Get a user
async fn get_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> UserResult<Response> {
    let id = parse_id(&id)?;

    let user = store.get(id).ok_or(UserError::NotFound(id))?;

    let body = serde_json::to_vec(&UserBody::from(&user)).map_err(|err| {
        tracing::warn!(%id, "Failed to encode user: {err}");
        UserError::Encode(err)
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Delete a user
///
/// Succeeds whether or not the user existed.
async fn delete_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> UserResult<StatusCode> {
    let id = parse_id(&id)?;

    store.delete(id);
    Ok(StatusCode::NO_CONTENT)
}

/// Parse a user identifier from a path segment
fn parse_id(id: &str) -> UserResult<UserId> {
    id.parse().map_err(|_| UserError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), UserId::new(12));
        assert!(matches!(parse_id("abc"), Err(UserError::InvalidId(s)) if s == "abc"));
        assert!(parse_id("99999999999999999999").is_err());
    }

    #[test]
    fn test_validate_name() {
        let request: CreateUser = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(request.validate().unwrap(), User::new("Ada"));

        let request: CreateUser = serde_json::from_str("{}").unwrap();
        assert!(matches!(request.validate(), Err(UserError::MissingName)));

        let request: CreateUser = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(matches!(request.validate(), Err(UserError::MissingName)));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let request: CreateUser =
            serde_json::from_str(r#"{"name": "Ada", "email": "ada@example.com"}"#).unwrap();
        assert_eq!(request.validate().unwrap().name(), "Ada");
    }

    #[test]
    fn test_user_body() {
        let user = User::new("Grace");
        let body = serde_json::to_value(UserBody::from(&user)).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Grace"}));
    }

    #[tokio::test]
    async fn test_invalid_body_leaves_store_untouched() {
        let store = UserStore::new();

        let result = create_user(State(store.clone()), Bytes::from_static(b"not json")).await;
        assert!(matches!(result, Err(UserError::InvalidBody(_))));

        let result = create_user(State(store.clone()), Bytes::from_static(b"{}")).await;
        assert!(matches!(result, Err(UserError::MissingName)));

        assert!(store.is_empty());
        assert_eq!(store.next_id(), UserId::FIRST);
    }
}
