use std::future::Future;

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::config::API_BASE;
use crate::models::{AssignmentDraft, Operator, OperatorDetails, Van, VanDetails};

/* -------------------------------------------------------------------------- */
/*                                  errors                                    */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status} – {text}")]
    Status { status: u16, text: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("cannot encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 409: the backend refused a duplicate (licence number, username…).
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/* -------------------------------------------------------------------------- */
/*                           bodies of auth endpoints                         */
/* -------------------------------------------------------------------------- */

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RoleCheck {
    pub role_id: i64,
}

#[derive(Serialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

/// `role_id` stays a string: the backend parses it.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub role_id: String,
}

#[derive(Serialize)]
struct IdBody {
    id: i64,
}

/* -------------------------------------------------------------------------- */
/*                                  client                                    */
/* -------------------------------------------------------------------------- */

/// HTTP access to the fleet API on behalf of one session.
#[derive(Clone, PartialEq, Debug)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base(API_BASE, token)
    }

    pub fn with_base(base: &str, token: Option<String>) -> Self {
        Self { base: base.trim_end_matches('/').to_string(), token }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = RequestBuilder::new(&self.url(path)).method(method);
        match self.authorization() {
            Some(auth) => builder.header("Authorization", &auth),
            None => builder,
        }
    }

    async fn send<T>(&self, method: Method, path: &str, body: Option<&T>) -> Result<Response, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let builder = self.builder(method, path);
        let resp = match body {
            Some(b) => builder.json(b).map_err(|e| ApiError::Encode(e.to_string()))?.send().await?,
            None => builder.send().await?,
        };

        if resp.ok() {
            Ok(resp)
        } else {
            Err(ApiError::Status { status: resp.status(), text: resp.status_text() })
        }
    }

    /// Generic JSON call, response body decoded into `U`.
    pub async fn fetch_json<T, U>(&self, method: Method, path: &str, body: Option<&T>) -> Result<U, ApiError>
    where
        T: Serialize + ?Sized,
        U: DeserializeOwned,
    {
        let resp = self.send(method, path, body).await?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Call whose response body is ignored; any 2xx is success.
    pub async fn fetch_empty<T>(&self, method: Method, path: &str, body: Option<&T>) -> Result<(), ApiError>
    where
        T: Serialize + ?Sized,
    {
        self.send(method, path, body).await.map(|_| ())
    }

    /* ------------------------------ auth -------------------------------- */

    pub async fn check_role(&self) -> Result<RoleCheck, ApiError> {
        self.fetch_json(Method::GET, "/api/check-role", None::<&()>).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.fetch_json(Method::POST, "/api/login", Some(credentials)).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.fetch_empty(Method::POST, "/api/register", Some(registration)).await
    }

    /* ---------------------------- operators ----------------------------- */

    pub async fn list_operators(&self) -> Result<Vec<Operator>, ApiError> {
        self.fetch_json(Method::GET, "/api/operators", None::<&()>).await
    }

    pub async fn create_operator(&self, details: &OperatorDetails) -> Result<(), ApiError> {
        self.fetch_empty(Method::POST, "/api/operators", Some(details)).await
    }

    pub async fn update_operator(&self, operator: &Operator) -> Result<(), ApiError> {
        self.fetch_empty(Method::PUT, &format!("/api/operators/{}", operator.id), Some(operator)).await
    }

    /// The operator id travels in the DELETE body, not the path.
    pub async fn archive_operator(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_empty(Method::DELETE, "/api/operators", Some(&IdBody { id })).await
    }

    /* ------------------------------- vans ------------------------------- */

    pub async fn list_vans(&self) -> Result<Vec<Van>, ApiError> {
        self.fetch_json(Method::GET, "/api/vans", None::<&()>).await
    }

    pub async fn create_van(&self, details: &VanDetails) -> Result<(), ApiError> {
        self.fetch_empty(Method::POST, "/api/vans", Some(details)).await
    }

    pub async fn update_van(&self, van: &Van) -> Result<(), ApiError> {
        self.fetch_empty(Method::PUT, &format!("/api/vans/{}", van.id), Some(van)).await
    }

    pub async fn archive_van(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_empty(Method::DELETE, &format!("/api/vans/{id}"), None::<&()>).await
    }

    /* ---------------------------- assignments --------------------------- */

    pub async fn create_assignment(&self, draft: &AssignmentDraft) -> Result<(), ApiError> {
        self.fetch_empty(Method::POST, "/api/assignments", Some(draft)).await
    }
}

/// A write followed by the re-fetch that refreshes the table. The first
/// failure wins: a list that cannot be reloaded is reported like a failed
/// write and the caller keeps its modal open.
pub async fn write_then_reload<T, W, R, F>(write: W, reload: R) -> Result<Vec<T>, ApiError>
where
    W: Future<Output = Result<(), ApiError>>,
    R: FnOnce() -> F,
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    write.await?;
    reload().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_url_joins_base() {
        let api = ApiClient::with_base("https://fleet.example/", None);
        assert_eq!(api.url("/api/vans"), "https://fleet.example/api/vans");

        let same_origin = ApiClient::with_base("", None);
        assert_eq!(same_origin.url("/api/operators"), "/api/operators");
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        assert_eq!(ApiClient::with_base("", None).authorization(), None);
        assert_eq!(
            ApiClient::with_base("", Some("abc.def".into())).authorization().as_deref(),
            Some("Bearer abc.def")
        );
    }

    #[test]
    fn test_conflict_detection() {
        let conflict = ApiError::Status { status: 409, text: "Conflict".into() };
        let server = ApiError::Status { status: 500, text: "Internal Server Error".into() };

        assert!(conflict.is_conflict());
        assert!(!server.is_conflict());
        assert!(!ApiError::Network("offline".into()).is_conflict());
        assert_eq!(server.status(), Some(500));
    }

    #[test]
    fn test_archive_body_carries_id() {
        assert_eq!(serde_json::to_value(IdBody { id: 42 }).unwrap(), json!({ "id": 42 }));
    }

    #[test]
    fn test_registration_body() {
        let body = Registration {
            username: "admin".into(),
            password: "secret".into(),
            role_id: "1".into(),
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "username": "admin", "password": "secret", "role_id": "1" })
        );
    }

    #[test]
    fn test_reload_follows_successful_write() {
        let out = block_on(write_then_reload(ready(Ok(())), || ready(Ok(vec![1, 2]))));
        assert_eq!(out, Ok(vec![1, 2]));
    }

    #[test]
    fn test_failed_reload_is_a_failure() {
        let down = ApiError::Status { status: 503, text: "Service Unavailable".into() };
        let out = block_on(write_then_reload(ready(Ok(())), || ready(Err::<Vec<i32>, _>(down.clone()))));
        assert_eq!(out, Err(down));
    }

    #[test]
    fn test_failed_write_skips_reload() {
        let reloaded = Cell::new(false);
        let conflict = ApiError::Status { status: 409, text: "Conflict".into() };

        let out = block_on(write_then_reload(ready(Err(conflict.clone())), || {
            reloaded.set(true);
            ready(Ok(Vec::<i32>::new()))
        }));

        assert_eq!(out, Err(conflict));
        assert!(!reloaded.get());
    }
}
